/// Field kind: governs masking and numeric behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldKind {
    #[default]
    Text,
    Password,
    Number,
}

impl FieldKind {
    /// Parse a kind name (`text`, `password`, `number`), case-insensitive.
    ///
    /// The ordinals `0`, `1` and `2` are accepted as aliases.
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim();
        if v.eq_ignore_ascii_case("text") || v == "0" {
            Some(Self::Text)
        } else if v.eq_ignore_ascii_case("password") || v == "1" {
            Some(Self::Password)
        } else if v.eq_ignore_ascii_case("number") || v == "2" {
            Some(Self::Number)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, Self::Number)
    }

    #[inline]
    pub fn is_password(self) -> bool {
        matches!(self, Self::Password)
    }
}
