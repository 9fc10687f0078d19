//! User model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum accepted length of a full name, in characters
pub const MAX_FULL_NAME_LEN: usize = 100;

/// Maximum accepted length of a phone number, in characters
pub const MAX_PHONE_LEN: usize = 20;

/// A unique identifier for a user, assigned by the remote directory.
///
/// Opaque to clients; never generated locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier received from the directory
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value of this ID
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A user record as stored by the remote directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique identifier
    pub id: UserId,
    /// Full display name
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
}

/// Request body for create/update operations (no `id`; the directory owns it)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// Transient, not-yet-submitted form state for a create or update.
///
/// `editing_id` is a weak reference to an existing record's id: `None` means
/// the draft represents a create, `Some` an update. The draft starts empty,
/// is mutated field by field, and is reset after a successful submit or an
/// explicit cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub editing_id: Option<UserId>,
}

impl UserDraft {
    /// Create an empty draft (a pending create)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing record's fields into a draft targeting that record
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            editing_id: Some(record.id),
        }
    }

    /// True when submitting this draft updates an existing record
    #[must_use]
    pub const fn is_update(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Reset all fields and drop any editing target
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate the draft and produce the wire body for submission.
    ///
    /// All three fields must be non-empty after trimming. Name and phone are
    /// capped to the lengths the directory accepts. Email is only checked for
    /// presence; format enforcement is left to the directory.
    pub fn validate(&self) -> Result<NewUser> {
        let full_name = require_field(&self.full_name, "full name")?;
        let email = require_field(&self.email, "email")?;
        let phone = require_field(&self.phone, "phone")?;

        if full_name.chars().count() > MAX_FULL_NAME_LEN {
            return Err(Error::InvalidDraft(format!(
                "full name exceeds {MAX_FULL_NAME_LEN} characters"
            )));
        }
        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(Error::InvalidDraft(format!(
                "phone exceeds {MAX_PHONE_LEN} characters"
            )));
        }

        Ok(NewUser {
            full_name,
            email,
            phone,
        })
    }
}

fn require_field(value: &str, name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::InvalidDraft(format!("{name} must not be empty")))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_draft() -> UserDraft {
        UserDraft {
            full_name: "Ana Torres".to_string(),
            email: "ana@x.com".to_string(),
            phone: "123".to_string(),
            editing_id: None,
        }
    }

    #[test]
    fn user_id_parse_round_trip() {
        let id: UserId = "42".parse().unwrap();
        assert_eq!(id, UserId::from_raw(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn user_id_parse_rejects_garbage() {
        assert!("abc".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn record_uses_wire_field_names() {
        let record = UserRecord {
            id: UserId::from_raw(5),
            full_name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "123".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["fullName"], "Ana");
        assert_eq!(json["email"], "ana@x.com");
        assert_eq!(json["phone"], "123");
    }

    #[test]
    fn record_parses_numeric_id() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id":7,"fullName":"Bea","email":"bea@x.com","phone":"456"}"#,
        )
        .unwrap();
        assert_eq!(record.id, UserId::from_raw(7));
        assert_eq!(record.full_name, "Bea");
    }

    #[test]
    fn validate_accepts_filled_draft() {
        let body = filled_draft().validate().unwrap();
        assert_eq!(body.full_name, "Ana Torres");
        assert_eq!(body.email, "ana@x.com");
        assert_eq!(body.phone, "123");
    }

    #[test]
    fn validate_trims_fields() {
        let mut draft = filled_draft();
        draft.full_name = "  Ana Torres  ".to_string();
        let body = draft.validate().unwrap();
        assert_eq!(body.full_name, "Ana Torres");
    }

    #[test]
    fn validate_rejects_missing_fields() {
        for field in ["full_name", "email", "phone"] {
            let mut draft = filled_draft();
            match field {
                "full_name" => draft.full_name = "   ".to_string(),
                "email" => draft.email = String::new(),
                _ => draft.phone = String::new(),
            }
            assert!(draft.validate().is_err(), "expected {field} to be required");
        }
    }

    #[test]
    fn validate_rejects_oversized_name_and_phone() {
        let mut draft = filled_draft();
        draft.full_name = "x".repeat(MAX_FULL_NAME_LEN + 1);
        assert!(draft.validate().is_err());

        let mut draft = filled_draft();
        draft.phone = "9".repeat(MAX_PHONE_LEN + 1);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn from_record_targets_the_record() {
        let record = UserRecord {
            id: UserId::from_raw(5),
            full_name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "123".to_string(),
        };
        let draft = UserDraft::from_record(&record);
        assert!(draft.is_update());
        assert_eq!(draft.editing_id, Some(record.id));
        assert_eq!(draft.full_name, "Ana");
    }

    #[test]
    fn clear_resets_to_create_mode() {
        let mut draft = filled_draft();
        draft.editing_id = Some(UserId::from_raw(5));
        draft.clear();
        assert_eq!(draft, UserDraft::new());
        assert!(!draft.is_update());
    }
}
