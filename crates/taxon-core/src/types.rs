//! Core domain types for the Special Reports taxonomy.
//!
//! A Special Report is a taxonomy concept: a UUID, a display label, and a
//! set of alternative identifiers grouped by source-system namespace. The
//! graph representation adds a fixed label taxonomy on top.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ── Graph Labels ──────────────────────────────────────────────────

/// The closed set of labels applied to nodes in the graph.
///
/// Entity nodes carry the foundational `Thing` label plus the domain
/// taxonomy; identifier nodes carry `Identifier` plus a namespace label.
pub mod labels {
    pub const THING: &str = "Thing";
    pub const CONCEPT: &str = "Concept";
    pub const CLASSIFICATION: &str = "Classification";
    pub const SPECIAL_REPORT: &str = "SpecialReport";
    pub const IDENTIFIER: &str = "Identifier";

    /// Domain type labels stripped on delete, in declaration order.
    pub const TYPE_LABELS: [&str; 3] = [CONCEPT, CLASSIFICATION, SPECIAL_REPORT];
}

// ── Identifier Namespaces ─────────────────────────────────────────

/// Source-system namespaces an alternative identifier can belong to.
///
/// A closed enumeration rather than free-form strings so the label set
/// stays auditable and no caller-supplied text reaches a Cypher statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierNamespace {
    /// The external TME taxonomy system.
    Tme,
    /// The platform's own canonical identifier namespace.
    Upp,
}

impl IdentifierNamespace {
    /// Graph label for identifier nodes in this namespace.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tme => "TMEIdentifier",
            Self::Upp => "UPPIdentifier",
        }
    }
}

// ── Entity ────────────────────────────────────────────────────────

/// A Special Report taxonomy entity.
///
/// `uuid` is an opaque string assigned upstream; it is globally unique and
/// immutable once assigned, but not guaranteed to parse as an RFC 4122 UUID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialReport {
    pub uuid: String,

    #[serde(rename = "prefLabel")]
    pub pref_label: String,

    #[serde(rename = "alternativeIdentifiers")]
    pub alternative_identifiers: AlternativeIdentifiers,

    /// Label set of the stored node, populated on read and ignored on write.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
}

/// Alternative identifiers grouped by namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeIdentifiers {
    #[serde(rename = "TME", default, skip_serializing_if = "Vec::is_empty")]
    pub tme: Vec<String>,

    #[serde(rename = "uuids")]
    pub uuids: Vec<String>,
}

impl SpecialReport {
    /// Check the entity is well-formed enough to reconcile.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.uuid.is_empty() {
            return Err(ValidationError::MissingUuid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_uuid() {
        let report = SpecialReport {
            pref_label: "No uuid".to_string(),
            ..Default::default()
        };
        assert_eq!(report.validate(), Err(ValidationError::MissingUuid));
    }

    #[test]
    fn validate_accepts_minimal_entity() {
        let report = SpecialReport {
            uuid: "12345".to_string(),
            ..Default::default()
        };
        assert!(report.validate().is_ok());
    }

    #[test]
    fn namespace_labels_are_fixed() {
        assert_eq!(IdentifierNamespace::Tme.label(), "TMEIdentifier");
        assert_eq!(IdentifierNamespace::Upp.label(), "UPPIdentifier");
    }

    #[test]
    fn wire_shape_matches_external_contract() {
        let report = SpecialReport {
            uuid: "12345".to_string(),
            pref_label: "Test".to_string(),
            alternative_identifiers: AlternativeIdentifiers {
                tme: vec!["TME_ID".to_string()],
                uuids: vec!["12345".to_string()],
            },
            types: vec![],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["prefLabel"], "Test");
        assert_eq!(json["alternativeIdentifiers"]["TME"][0], "TME_ID");
        assert_eq!(json["alternativeIdentifiers"]["uuids"][0], "12345");
        // Empty types are omitted entirely.
        assert!(json.get("types").is_none());
    }

    #[test]
    fn empty_tme_list_is_omitted_but_uuids_always_serialize() {
        let report = SpecialReport {
            uuid: "12345".to_string(),
            pref_label: "Test".to_string(),
            alternative_identifiers: AlternativeIdentifiers {
                tme: vec![],
                uuids: vec![],
            },
            types: vec![],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["alternativeIdentifiers"].get("TME").is_none());
        assert!(json["alternativeIdentifiers"]["uuids"].is_array());
    }
}
