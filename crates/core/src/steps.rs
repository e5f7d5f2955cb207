//! Compiled-in production workflow step definitions and the step
//! configuration merge.
//!
//! The stored step configuration is a singleton list of
//! [`StepConfigEntry`] values. Instead of versioned migrations, every read
//! reconciles the stored list against [`STEP_DEFINITIONS`]: definitions
//! missing from storage are appended with their defaults, and the result is
//! sorted by `order`. `order` is a float so a step can be slotted between two
//! others (e.g. `6.5`) without renumbering.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field schema
// ---------------------------------------------------------------------------

/// Shape of a single field inside a step sub-document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, zero value `""`.
    Text,
    /// Ordered list, zero value `[]`.
    List,
    /// Nested object; each sub-field follows its own kind.
    Group { fields: &'static [FieldSpec] },
}

/// A named field in a step schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

const fn text(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Text,
    }
}

const fn list(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::List,
    }
}

const fn group(name: &'static str, fields: &'static [FieldSpec]) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Group { fields },
    }
}

const LINK_NOTES: &[FieldSpec] = &[text("link"), text("notes")];
const LINK_NOTES_FILES: &[FieldSpec] = &[text("link"), text("notes"), list("files")];
const LINK_NOTES_CHANNELS: &[FieldSpec] = &[text("link"), text("notes"), list("channels")];

// ---------------------------------------------------------------------------
// Step definitions
// ---------------------------------------------------------------------------

/// A compiled-in workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepDefinition {
    /// Stable identifier used by the step configuration (`step1`, `step2`, ...).
    pub step_key: &'static str,
    /// Key of the sub-document inside a production's `steps` object.
    pub document_key: &'static str,
    pub label: &'static str,
    pub default_order: f64,
    pub requires_venue: bool,
    pub fields: &'static [FieldSpec],
}

/// Every step a production carries, in definition order.
///
/// The first thirteen are the built-in workflow; the rest were added later and
/// slot into the workflow through their default `order`.
pub const STEP_DEFINITIONS: &[StepDefinition] = &[
    StepDefinition {
        step_key: "step1",
        document_key: "step1_contract",
        label: "Contract",
        default_order: 1.0,
        requires_venue: false,
        fields: LINK_NOTES,
    },
    StepDefinition {
        step_key: "step2",
        document_key: "step2_cities",
        label: "Cities",
        default_order: 2.0,
        requires_venue: false,
        fields: &[list("cities"), text("notes")],
    },
    StepDefinition {
        step_key: "step3",
        document_key: "step3_venue_contracts",
        label: "Venue contracts",
        default_order: 3.0,
        requires_venue: true,
        fields: LINK_NOTES,
    },
    StepDefinition {
        step_key: "step4",
        document_key: "step4_itinerary",
        label: "Itinerary",
        default_order: 4.0,
        requires_venue: false,
        fields: LINK_NOTES,
    },
    StepDefinition {
        step_key: "step5",
        document_key: "step5_materials",
        label: "Materials",
        default_order: 5.0,
        requires_venue: false,
        fields: &[
            group("copy", LINK_NOTES),
            group("photos", LINK_NOTES),
            group("videos", LINK_NOTES),
        ],
    },
    StepDefinition {
        step_key: "step6",
        document_key: "step6_venue_info",
        label: "Venue info",
        default_order: 6.0,
        requires_venue: false,
        fields: &[text("venue_id"), text("notes")],
    },
    StepDefinition {
        step_key: "step7",
        document_key: "step7_designs",
        label: "Designs",
        default_order: 7.0,
        requires_venue: false,
        fields: LINK_NOTES_FILES,
    },
    StepDefinition {
        step_key: "step8",
        document_key: "step8_promotional_images",
        label: "Promotional images",
        default_order: 8.0,
        requires_venue: false,
        fields: LINK_NOTES_FILES,
    },
    StepDefinition {
        step_key: "step9",
        document_key: "step9_videos",
        label: "Videos",
        default_order: 9.0,
        requires_venue: false,
        fields: LINK_NOTES_FILES,
    },
    StepDefinition {
        step_key: "step10",
        document_key: "step10_press_conference",
        label: "Press conference",
        default_order: 10.0,
        requires_venue: true,
        fields: &[text("date"), text("link"), text("notes")],
    },
    StepDefinition {
        step_key: "step11",
        document_key: "step11_performance_shooting",
        label: "Performance shooting",
        default_order: 11.0,
        requires_venue: true,
        fields: LINK_NOTES,
    },
    StepDefinition {
        step_key: "step12",
        document_key: "step12_social_media",
        label: "Social media",
        default_order: 12.0,
        requires_venue: false,
        fields: LINK_NOTES_CHANNELS,
    },
    StepDefinition {
        step_key: "step13",
        document_key: "step13_advertising",
        label: "Advertising",
        default_order: 13.0,
        requires_venue: false,
        fields: LINK_NOTES_CHANNELS,
    },
    StepDefinition {
        step_key: "step14",
        document_key: "step14_ticketing",
        label: "Ticketing",
        default_order: 6.5,
        requires_venue: true,
        fields: &[list("platforms"), text("link"), text("notes")],
    },
    StepDefinition {
        step_key: "step15",
        document_key: "step15_media_package",
        label: "Media package",
        default_order: 9.5,
        requires_venue: false,
        fields: &[text("package_id"), text("notes")],
    },
    StepDefinition {
        step_key: "step16",
        document_key: "step16_tracking_links",
        label: "Tracking links",
        default_order: 14.0,
        requires_venue: false,
        fields: &[list("links"), text("notes")],
    },
];

/// Number of steps in the original built-in workflow.
pub const BUILT_IN_STEP_COUNT: usize = 13;

/// Look up a definition by its step key (`step5`).
pub fn find_definition(step_key: &str) -> Option<&'static StepDefinition> {
    STEP_DEFINITIONS.iter().find(|d| d.step_key == step_key)
}

/// Look up a definition by its production sub-document key (`step5_materials`).
pub fn find_by_document_key(document_key: &str) -> Option<&'static StepDefinition> {
    STEP_DEFINITIONS.iter().find(|d| d.document_key == document_key)
}

// ---------------------------------------------------------------------------
// Step configuration
// ---------------------------------------------------------------------------

/// One entry in the admin-editable step configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepConfigEntry {
    pub step_key: String,
    pub order: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub requires_venue: bool,
}

fn default_enabled() -> bool {
    true
}

impl From<&StepDefinition> for StepConfigEntry {
    fn from(def: &StepDefinition) -> Self {
        Self {
            step_key: def.step_key.to_string(),
            order: def.default_order,
            enabled: true,
            requires_venue: def.requires_venue,
        }
    }
}

/// The configuration written the first time it is read.
pub fn default_config() -> Vec<StepConfigEntry> {
    sort_by_order(STEP_DEFINITIONS.iter().map(StepConfigEntry::from).collect())
}

/// Merge a stored configuration with the compiled-in definitions.
///
/// Stored entries keep their order/enabled/venue settings. Definitions absent
/// from `stored` are appended with their defaults and `enabled = true`.
/// Entries whose key no longer has a definition are dropped. The result is
/// sorted by `order` ascending; ties keep their relative position.
pub fn reconcile(
    stored: &[StepConfigEntry],
    definitions: &[StepDefinition],
) -> Vec<StepConfigEntry> {
    let known: HashSet<&str> = definitions.iter().map(|d| d.step_key).collect();

    let mut merged: Vec<StepConfigEntry> = stored
        .iter()
        .filter(|e| known.contains(e.step_key.as_str()))
        .cloned()
        .collect();

    let present: HashSet<String> = merged.iter().map(|e| e.step_key.clone()).collect();
    merged.extend(
        definitions
            .iter()
            .filter(|d| !present.contains(d.step_key))
            .map(StepConfigEntry::from),
    );

    sort_by_order(merged)
}

fn sort_by_order(mut entries: Vec<StepConfigEntry>) -> Vec<StepConfigEntry> {
    entries.sort_by(|a, b| a.order.total_cmp(&b.order));
    entries
}

/// Validate a full replacement configuration submitted by an admin.
///
/// Every key must be a known definition, appear at most once, and carry a
/// finite order.
pub fn validate_config(steps: &[StepConfigEntry]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for entry in steps {
        if find_definition(&entry.step_key).is_none() {
            return Err(CoreError::Validation(format!(
                "Unknown step key '{}'",
                entry.step_key
            )));
        }
        if !seen.insert(entry.step_key.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate step key '{}'",
                entry.step_key
            )));
        }
        if !entry.order.is_finite() {
            return Err(CoreError::Validation(format!(
                "Order for step '{}' must be a finite number",
                entry.step_key
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, order: f64) -> StepConfigEntry {
        StepConfigEntry {
            step_key: key.to_string(),
            order,
            enabled: false,
            requires_venue: false,
        }
    }

    #[test]
    fn definitions_have_unique_keys() {
        let steps: HashSet<_> = STEP_DEFINITIONS.iter().map(|d| d.step_key).collect();
        let docs: HashSet<_> = STEP_DEFINITIONS.iter().map(|d| d.document_key).collect();
        assert_eq!(steps.len(), STEP_DEFINITIONS.len());
        assert_eq!(docs.len(), STEP_DEFINITIONS.len());
        assert!(STEP_DEFINITIONS.len() > BUILT_IN_STEP_COUNT);
    }

    #[test]
    fn document_keys_are_prefixed_by_step_key() {
        for def in STEP_DEFINITIONS {
            assert!(
                def.document_key.starts_with(&format!("{}_", def.step_key)),
                "{} does not start with {}",
                def.document_key,
                def.step_key
            );
        }
    }

    #[test]
    fn default_config_is_sorted_and_complete() {
        let config = default_config();
        assert_eq!(config.len(), STEP_DEFINITIONS.len());
        assert!(config.windows(2).all(|w| w[0].order <= w[1].order));
        assert!(config.iter().all(|e| e.enabled));
        // step14 (6.5) sits between step6 and step7.
        let pos = |k: &str| config.iter().position(|e| e.step_key == k).unwrap();
        assert!(pos("step6") < pos("step14"));
        assert!(pos("step14") < pos("step7"));
    }

    #[test]
    fn reconcile_appends_missing_definition() {
        let stored: Vec<_> = default_config()
            .into_iter()
            .filter(|e| e.step_key != "step16")
            .collect();

        let merged = reconcile(&stored, STEP_DEFINITIONS);

        let step16 = merged.iter().find(|e| e.step_key == "step16").unwrap();
        assert!(step16.enabled);
        assert_eq!(step16.order, 14.0);
        assert!(merged.windows(2).all(|w| w[0].order <= w[1].order));
        assert_eq!(merged.len(), STEP_DEFINITIONS.len());
    }

    #[test]
    fn reconcile_keeps_stored_settings() {
        let stored = vec![entry("step2", 0.5), entry("step1", 20.0)];
        let merged = reconcile(&stored, STEP_DEFINITIONS);

        assert_eq!(merged[0].step_key, "step2");
        assert!(!merged[0].enabled);
        assert_eq!(merged.last().unwrap().step_key, "step1");
    }

    #[test]
    fn reconcile_drops_unknown_keys() {
        let stored = vec![entry("step99", 1.0)];
        let merged = reconcile(&stored, STEP_DEFINITIONS);
        assert!(merged.iter().all(|e| e.step_key != "step99"));
        assert_eq!(merged.len(), STEP_DEFINITIONS.len());
    }

    #[test]
    fn validate_rejects_unknown_key() {
        let err = validate_config(&[entry("bogus", 1.0)]).unwrap_err();
        assert!(err.to_string().contains("Unknown step key"));
    }

    #[test]
    fn validate_rejects_duplicates_and_nan() {
        assert!(validate_config(&[entry("step1", 1.0), entry("step1", 2.0)]).is_err());
        assert!(validate_config(&[entry("step1", f64::NAN)]).is_err());
    }

    #[test]
    fn validate_accepts_partial_list() {
        assert!(validate_config(&[entry("step3", 7.5)]).is_ok());
    }

    #[test]
    fn config_entry_defaults_enabled_when_omitted() {
        let e: StepConfigEntry =
            serde_json::from_str(r#"{"step_key":"step1","order":1}"#).unwrap();
        assert!(e.enabled);
        assert!(!e.requires_venue);
    }
}
