//! Strongly-typed expense identifier
//!
//! Displayed in a short `exp-xxxxxxxx` form; lookups accept either the full
//! UUID or that short form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check whether a user-supplied reference names this ID.
    ///
    /// Accepts the full UUID, or the short display form with or without the
    /// `exp-` prefix (at least 4 hex characters).
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim();
        if let Ok(uuid) = Uuid::parse_str(reference) {
            return uuid == self.0;
        }
        let short = reference.strip_prefix(DISPLAY_PREFIX).unwrap_or(reference);
        short.len() >= 4 && self.0.simple().to_string().starts_with(&short.to_lowercase())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = id.to_string();
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_matches_short_and_full_forms() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ExpenseId = uuid_str.parse().unwrap();

        assert!(id.matches(uuid_str));
        assert!(id.matches("exp-550e8400"));
        assert!(id.matches("550e"));
        assert!(!id.matches("exp-12345678"));
        assert!(!id.matches("55"));
    }

    #[test]
    fn test_id_serialization() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
