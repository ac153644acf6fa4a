//! Layout standards
//!
//! The same text is paginated two different ways: the 1441 AH print revision
//! and the older 1405 AH one. Every page-bound record in the store carries a
//! variant for each, and the host picks one for display.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Print revision used to paginate and lay out the pages
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum LayoutStandard {
    /// 1441 AH revision (current default)
    #[default]
    Standard1441 = 1441,
    /// 1405 AH revision
    Alternative1405 = 1405,
}

impl LayoutStandard {
    /// All standards, in the order the store lists them
    pub const ALL: [LayoutStandard; 2] = [LayoutStandard::Standard1441, LayoutStandard::Alternative1405];

    /// Value of the `layout_type` discriminator column
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1441 => Some(LayoutStandard::Standard1441),
            1405 => Some(LayoutStandard::Alternative1405),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for standard in LayoutStandard::ALL {
            assert_eq!(LayoutStandard::from_code(standard.code()), Some(standard));
        }
        assert_eq!(LayoutStandard::from_code(1400), None);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&LayoutStandard::Alternative1405).unwrap();
        assert_eq!(json, "1405");

        let parsed: LayoutStandard = serde_json::from_str("1441").unwrap();
        assert_eq!(parsed, LayoutStandard::Standard1441);
    }
}
