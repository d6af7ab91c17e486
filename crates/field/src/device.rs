//! Device capabilities that change focus behavior.

/// What kind of device the fields run on.
///
/// - desktop: pointer-driven, no soft keyboard; focus attachment is deferred
///   one tick and zoom is never applied
/// - chrome: a mobile Chrome-class browser whose soft keyboard dismissal is
///   only observable through viewport resizes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    pub desktop: bool,
    pub chrome: bool,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::desktop()
    }
}

impl DeviceProfile {
    pub const fn desktop() -> Self {
        Self {
            desktop: true,
            chrome: false,
        }
    }

    pub const fn mobile() -> Self {
        Self {
            desktop: false,
            chrome: false,
        }
    }

    pub const fn mobile_chrome() -> Self {
        Self {
            desktop: false,
            chrome: true,
        }
    }

    /// Classify a user agent string.
    ///
    /// Anything not recognizably a phone or tablet is treated as desktop.
    pub fn from_user_agent(ua: &str) -> Self {
        if ua.trim().is_empty() {
            log::warn!(target: "field.plugin", "empty user agent, assuming desktop");
            return Self::desktop();
        }

        const MOBILE_MARKERS: [&str; 6] = ["Android", "iPhone", "iPad", "iPod", "Mobile", "Silk"];
        let mobile = MOBILE_MARKERS.iter().any(|m| ua.contains(m));
        if !mobile {
            return Self::desktop();
        }

        let chrome = (ua.contains("Chrome/") || ua.contains("CriOS/"))
            && !ua.contains("Edg")
            && !ua.contains("OPR/");
        Self {
            desktop: false,
            chrome,
        }
    }

    /// Focus transitions are deferred by this many ticks.
    pub fn focus_delay(&self) -> u64 {
        if self.desktop { 1 } else { 0 }
    }
}
