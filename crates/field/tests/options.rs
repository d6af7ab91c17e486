use field::{Align, ConfigError, DeviceProfile, FieldConfig, FieldOptions};
use input_core::FieldKind;

#[test]
fn options_deserialize_from_json() {
    let json = r##"{
        "x": 20,
        "y": 40,
        "width": 200,
        "padding": 4,
        "align": "center",
        "type": "password",
        "max": 12,
        "placeHolder": "Password",
        "placeHolderColor": "#999",
        "font": "bold 18px Verdana",
        "backgroundColor": "rgba(0, 0, 0, 0.5)",
        "borderRadius": 6,
        "focusOutOnEnter": true
    }"##;
    let options: FieldOptions = serde_json::from_str(json).unwrap();
    let config = FieldConfig::from_options(&options, &DeviceProfile::desktop()).unwrap();

    assert_eq!(config.width, 200.0);
    assert_eq!(config.padding, 4.0);
    assert_eq!(config.align, Align::Center);
    assert_eq!(config.kind, FieldKind::Password);
    assert_eq!(config.max_length, Some(12));
    assert_eq!(config.placeholder.as_deref(), Some("Password"));
    assert_eq!(config.placeholder_color, (0x99, 0x99, 0x99, 255));
    assert_eq!(config.font.size_px, 18.0);
    assert_eq!(config.font.family, "Verdana");
    assert!(config.font.is_bold());
    assert_eq!(config.content_height(), 18.0);
    assert_eq!(config.border_radius, 6.0);
    assert!(config.focus_out_on_enter);
    assert!(!config.multiline);
}

#[test]
fn options_deserialize_from_toml() {
    let source = r##"
        width = 120.0
        type = "number"
        min = 0.0
        max = 10.0
        wordWrap = false
        fill = "red"
    "##;
    let options: FieldOptions = toml::from_str(source).unwrap();
    let config = FieldConfig::from_options(&options, &DeviceProfile::mobile()).unwrap();

    assert_eq!(config.kind, FieldKind::Number);
    assert_eq!(config.bounds.min, Some(0.0));
    assert_eq!(config.bounds.max, Some(10.0));
    assert_eq!(config.max_length, None);
    assert_eq!(config.fill, (255, 0, 0, 255));
    assert_eq!(config.surface_config().width, 120.0);
}

#[test]
fn invalid_options_are_reported_by_key() {
    let cases: Vec<(&str, fn(&ConfigError) -> bool)> = vec![
        (r#"{"width": -1}"#, |e| {
            matches!(e, ConfigError::Negative { key: "width", .. })
        }),
        (r#"{"fill": "not-a-color"}"#, |e| {
            matches!(e, ConfigError::InvalidColor { key: "fill", .. })
        }),
        (r#"{"font": "Arial"}"#, |e| {
            matches!(e, ConfigError::InvalidFont { .. })
        }),
        (r#"{"type": "email"}"#, |e| {
            matches!(e, ConfigError::InvalidKind { .. })
        }),
        (r#"{"align": "justify"}"#, |e| {
            matches!(e, ConfigError::InvalidAlign { .. })
        }),
        (r#"{"type": "number", "min": 5, "max": 1}"#, |e| {
            matches!(e, ConfigError::InvalidBounds { .. })
        }),
    ];

    for (json, expected) in cases {
        let options: FieldOptions = serde_json::from_str(json).unwrap();
        let err = FieldConfig::from_options(&options, &DeviceProfile::desktop()).unwrap_err();
        assert!(expected(&err), "{json}: unexpected {err}");
    }
}

#[test]
fn empty_placeholder_means_none() {
    let options: FieldOptions = serde_json::from_str(r#"{"placeHolder": ""}"#).unwrap();
    let config = FieldConfig::from_options(&options, &DeviceProfile::desktop()).unwrap();
    assert_eq!(config.placeholder, None);
}
