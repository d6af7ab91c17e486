//! Color option parsing.

/// Straight (non-premultiplied) RGBA.
pub type Rgba = (u8, u8, u8, u8);

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` or a basic
/// named color.
pub fn parse_color(value: &str) -> Option<Rgba> {
    let s = value.trim().to_ascii_lowercase();
    // HEX
    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some((r, g, b, 255));
        } else if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some((r, g, b, 255));
        }
        return None;
    }

    if let Some(args) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let [r, g, b, a] = parts.as_slice() else {
            return None;
        };
        return Some((channel(r)?, channel(g)?, channel(b)?, alpha(a)?));
    }

    if let Some(args) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return None;
        };
        return Some((channel(r)?, channel(g)?, channel(b)?, 255));
    }

    let named = match s.as_str() {
        "black" => (0, 0, 0, 255),
        "blue" => (0, 0, 255, 255),
        "cyan" => (0, 255, 255, 255),
        "gray" | "grey" => (128, 128, 128, 255),
        "green" => (0, 128, 0, 255),
        "magenta" => (255, 0, 255, 255),
        "maroon" => (128, 0, 0, 255),
        "navy" => (0, 0, 128, 255),
        "olive" => (128, 128, 0, 255),
        "purple" => (128, 0, 128, 255),
        "red" => (255, 0, 0, 255),
        "silver" => (192, 192, 192, 255),
        "teal" => (0, 128, 128, 255),
        "white" => (255, 255, 255, 255),
        "yellow" => (255, 255, 0, 255),
        "transparent" => (0, 0, 0, 0),
        _ => return None,
    };
    Some(named)
}

/// Scale a color's alpha by `factor` (0..=1).
pub fn with_alpha(color: Rgba, factor: f32) -> Rgba {
    let (r, g, b, a) = color;
    let a = (a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
    (r, g, b, a)
}

fn channel(s: &str) -> Option<u8> {
    let v: f32 = s.parse().ok()?;
    v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
}

fn alpha(s: &str) -> Option<u8> {
    let v: f32 = s.parse().ok()?;
    v.is_finite()
        .then(|| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}
