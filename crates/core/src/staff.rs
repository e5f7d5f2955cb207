//! Embedded staff lists carried by venues, companies, and communities.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::records::trim_list;
use crate::types::DbId;

/// A contact person attached to a venue, company, or community.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    /// Staff role names; one person can hold several.
    #[serde(default)]
    pub role: Vec<String>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub linked_company_id: Option<DbId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Trim every staff entry and reject entries without a name or with a
/// malformed email.
pub fn normalize_staff(staff: &[StaffMember]) -> Result<Vec<StaffMember>, CoreError> {
    use validator::ValidateEmail;

    staff
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let name = member.name.trim();
            if name.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Staff entry {} is missing a name",
                    i + 1
                )));
            }
            let email = member.email.trim().to_string();
            if !email.is_empty() && !email.validate_email() {
                return Err(CoreError::Validation(format!(
                    "Staff entry {} has an invalid email",
                    i + 1
                )));
            }
            Ok(StaffMember {
                name: name.to_string(),
                role: trim_list(&member.role),
                company: member.company.trim().to_string(),
                linked_company_id: member.linked_company_id,
                email,
                phone: member.phone.trim().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, email: &str) -> StaffMember {
        StaffMember {
            name: name.to_string(),
            role: vec![" Manager ".to_string(), String::new()],
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn trims_fields() {
        let out = normalize_staff(&[member("  Lin  ", " lin@example.com ")]).unwrap();
        assert_eq!(out[0].name, "Lin");
        assert_eq!(out[0].email, "lin@example.com");
        assert_eq!(out[0].role, vec!["Manager"]);
    }

    #[test]
    fn rejects_nameless_entry() {
        let err = normalize_staff(&[member("ok", ""), member(" ", "")]).unwrap_err();
        assert!(err.to_string().contains("Staff entry 2"));
    }

    #[test]
    fn rejects_bad_email() {
        assert!(normalize_staff(&[member("Lin", "not-an-email")]).is_err());
    }

    #[test]
    fn deserializes_sparse_entry() {
        let m: StaffMember = serde_json::from_str(r#"{"name":"Wu"}"#).unwrap();
        assert!(m.role.is_empty());
        assert_eq!(m.linked_company_id, None);
    }
}
