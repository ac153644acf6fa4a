//! Serde helpers for records coming from the host's store

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
    Float(f64),
}

/// Deserialize a boolean the store may hand over as an INTEGER column (0/1)
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
        Flag::Float(value) => value != 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "deserialize_flag")]
        flag: bool,
    }

    fn flag(json: &str) -> bool {
        serde_json::from_str::<Row>(json).unwrap().flag
    }

    #[test]
    fn test_flag_from_bool_or_integer() {
        assert!(flag(r#"{"flag": true}"#));
        assert!(!flag(r#"{"flag": false}"#));
        assert!(flag(r#"{"flag": 1}"#));
        assert!(!flag(r#"{"flag": 0}"#));
        assert!(flag(r#"{"flag": 1.0}"#));
    }

    #[test]
    fn test_flag_rejects_text() {
        assert!(serde_json::from_str::<Row>(r#"{"flag": "yes"}"#).is_err());
    }
}
