//! Section keys shared by global knowledge links and per-section assignments.
//!
//! A section is either a whole step (`step11`) or a group inside a step's
//! sub-document (`step5_videos`). The set is derived from
//! [`STEP_DEFINITIONS`] so it can never drift from the schema.

use crate::error::CoreError;
use crate::steps::{FieldKind, STEP_DEFINITIONS};

/// All valid section keys, in definition order.
pub fn section_keys() -> Vec<String> {
    let mut keys = Vec::new();
    for def in STEP_DEFINITIONS {
        keys.push(def.step_key.to_string());
        for field in def.fields {
            if let FieldKind::Group { .. } = field.kind {
                keys.push(format!("{}_{}", def.step_key, field.name));
            }
        }
    }
    keys
}

/// Whether `section` belongs to the enumerated section set.
pub fn is_valid_section(section: &str) -> bool {
    section_keys().iter().any(|k| k == section)
}

/// Validate a section key, returning a 400-class error naming the bad key.
pub fn validate_section(section: &str) -> Result<(), CoreError> {
    if is_valid_section(section) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid section '{section}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_steps_and_groups() {
        let keys = section_keys();
        assert!(keys.contains(&"step1".to_string()));
        assert!(keys.contains(&"step16".to_string()));
        assert!(keys.contains(&"step5_videos".to_string()));
        assert!(keys.contains(&"step5_copy".to_string()));
    }

    #[test]
    fn rejects_document_keys_and_garbage() {
        assert!(validate_section("step1_contract").is_err());
        assert!(validate_section("").is_err());
        assert!(validate_section("step99").is_err());
    }

    #[test]
    fn accepts_known_section() {
        assert!(validate_section("step11").is_ok());
    }
}
