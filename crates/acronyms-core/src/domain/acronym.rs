//! Acronym domain types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Identity
// ─────────────────────────────────────────────────────────────────────────────

/// Identity of a persisted acronym.
///
/// Assigned once on insert and never reused. Serialized as a plain
/// hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AcronymId(Uuid);

impl AcronymId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its canonical string form.
    ///
    /// Only the lowercase hyphenated spelling produced by `Display` is
    /// accepted, so each acronym has exactly one URL. Anything else yields
    /// `None`, which callers treat the same as an identifier with no row.
    pub fn parse(raw: &str) -> Option<Self> {
        let uuid = Uuid::try_parse(raw).ok()?;
        (uuid.hyphenated().to_string() == raw).then_some(Self(uuid))
    }
}

impl Default for AcronymId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AcronymId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Acronym Types
// ─────────────────────────────────────────────────────────────────────────────

/// An acronym that exists in storage.
///
/// Use [`NewAcronym`] for acronyms that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acronym {
    /// Storage identity (always present for persisted acronyms).
    pub id: AcronymId,
    /// The abbreviated form, e.g. "LOL".
    pub short: String,
    /// The expanded form, e.g. "laugh out loud".
    pub long: String,
}

impl Acronym {
    /// Replace both text fields, keeping the identity.
    pub fn apply(&mut self, changes: NewAcronym) {
        self.short = changes.short;
        self.long = changes.long;
    }
}

/// An acronym to be inserted, or the replacement fields for an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAcronym {
    pub short: String,
    pub long: String,
}

impl NewAcronym {
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }

    /// Attach an identity, producing the persisted form.
    pub fn with_id(self, id: AcronymId) -> Acronym {
        Acronym {
            id,
            short: self.short,
            long: self.long,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_hyphenated_uuid() {
        let id = AcronymId::new();
        let parsed = AcronymId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(AcronymId::parse("not-a-uuid").is_none());
        assert!(AcronymId::parse("").is_none());
        assert!(AcronymId::parse("42").is_none());
    }

    #[test]
    fn parse_rejects_alternate_spellings() {
        let id = AcronymId::new();
        let canonical = id.to_string();

        let simple = canonical.replace('-', "");
        let urn = format!("urn:uuid:{canonical}");
        let upper = canonical.to_uppercase();
        let padded = format!(" {canonical} ");
        let braced = format!("{{{canonical}}}");

        for spelling in [simple, urn, upper, padded, braced] {
            assert!(AcronymId::parse(&spelling).is_none(), "accepted {spelling}");
        }
        assert_eq!(AcronymId::parse(&canonical), Some(id));
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(AcronymId::new(), AcronymId::new());
    }

    #[test]
    fn apply_keeps_identity() {
        let id = AcronymId::new();
        let mut acronym = NewAcronym::new("OMG", "Oh My God").with_id(id);
        acronym.apply(NewAcronym::new("OMG", "Oh My Gosh"));

        assert_eq!(acronym.id, id);
        assert_eq!(acronym.short, "OMG");
        assert_eq!(acronym.long, "Oh My Gosh");
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let acronym = NewAcronym::new("LOL", "laugh out loud").with_id(AcronymId::new());
        let json = serde_json::to_value(&acronym).unwrap();

        assert!(json["id"].is_string());
        assert_eq!(json["short"], "LOL");
        assert_eq!(json["long"], "laugh out loud");
    }
}
