/// Why a set of field options was rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    Negative { key: &'static str, value: f32 },
    NotFinite { key: &'static str },
    InvalidColor { key: &'static str, value: String },
    InvalidFont { value: String },
    InvalidBounds { min: f64, max: f64 },
    InvalidKind { value: String },
    InvalidAlign { value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Negative { key, value } => {
                write!(f, "option `{key}` must be non-negative, got {value}")
            }
            ConfigError::NotFinite { key } => write!(f, "option `{key}` must be finite"),
            ConfigError::InvalidColor { key, value } => {
                write!(f, "option `{key}`: unrecognized color {value:?}")
            }
            ConfigError::InvalidFont { value } => {
                write!(f, "option `font`: expected \"<n>px <family>\", got {value:?}")
            }
            ConfigError::InvalidBounds { min, max } => {
                write!(f, "numeric bounds are inverted: min {min} > max {max}")
            }
            ConfigError::InvalidKind { value } => write!(f, "unknown field type {value:?}"),
            ConfigError::InvalidAlign { value } => write!(f, "unknown alignment {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}
