//! Surface identifiers.
//!
//! A plain `u64` keeps this crate free of any host engine's element id type.
//! Hosts that back a surface with a real element use the `Display` form as
//! that element's id.

use std::fmt;

/// Identifies one hidden edit surface, and therefore one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<InputId> for u64 {
    #[inline]
    fn from(id: InputId) -> Self {
        id.0
    }
}

/// Element id of the hidden native element, e.g. `scene-input-7`.
impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene-input-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_value_survives_conversions() {
        let id = InputId::from(42u64);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn displays_as_element_id() {
        assert_eq!(InputId::from_raw(7).to_string(), "scene-input-7");
    }

    #[test]
    fn ids_order_by_creation() {
        let mut ids = vec![InputId::from_raw(3), InputId::from_raw(1), InputId::from_raw(2)];
        ids.sort();
        assert_eq!(ids, vec![InputId::from_raw(1), InputId::from_raw(2), InputId::from_raw(3)]);
    }
}
