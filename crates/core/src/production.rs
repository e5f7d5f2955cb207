//! Production document model: zero-value construction, PATCH planning,
//! deep merge, and derived progress.
//!
//! A production stores one sub-document per step under `steps`, keyed by the
//! step's `document_key`, plus an `assignments` map from section key to user
//! id (or `null`). Writes arrive as a flat map of mutable paths and are
//! checked against an explicit allow-list before anything is merged.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::knowledge::validate_section;
use crate::steps::{find_by_document_key, FieldKind, FieldSpec, StepConfigEntry, StepDefinition};
use crate::steps::{find_definition, STEP_DEFINITIONS};
use crate::types::DbId;

/// Title given to productions created without one.
pub const DEFAULT_TITLE: &str = "Untitled Production";

/// Maximum production title length.
pub const MAX_TITLE_LEN: usize = 200;

/// Path prefix for assignment updates (`assignments.<section>`).
const ASSIGNMENTS_PREFIX: &str = "assignments";

// ---------------------------------------------------------------------------
// Zero values
// ---------------------------------------------------------------------------

/// Zero value for a single field kind.
pub fn zero_value(kind: &FieldKind) -> Value {
    match kind {
        FieldKind::Text => Value::String(String::new()),
        FieldKind::List => Value::Array(Vec::new()),
        FieldKind::Group { fields } => zero_document(fields),
    }
}

/// Zero-value object for a field schema.
pub fn zero_document(fields: &[FieldSpec]) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|f| (f.name.to_string(), zero_value(&f.kind)))
        .collect();
    Value::Object(map)
}

/// The `steps` object for a freshly created production: every definition's
/// sub-document, fully populated with zero values.
pub fn initial_steps() -> Value {
    let map: Map<String, Value> = STEP_DEFINITIONS
        .iter()
        .map(|d| (d.document_key.to_string(), zero_document(d.fields)))
        .collect();
    Value::Object(map)
}

/// Resolve a title for a new production, falling back to [`DEFAULT_TITLE`].
pub fn resolve_title(title: Option<&str>) -> Result<String, CoreError> {
    match title.map(str::trim) {
        None | Some("") => Ok(DEFAULT_TITLE.to_string()),
        Some(t) => {
            validate_title(t)?;
            Ok(t.to_string())
        }
    }
}

fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::validation("Title must not be empty"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Fill any missing sub-document or field with its zero value.
///
/// Productions created before a definition shipped lack its sub-document;
/// normalising on read means clients never see an undefined step.
pub fn normalize_steps(steps: &mut Value) {
    if !steps.is_object() {
        *steps = Value::Object(Map::new());
    }
    let Some(map) = steps.as_object_mut() else {
        return;
    };
    for def in STEP_DEFINITIONS {
        let doc = map
            .entry(def.document_key.to_string())
            .or_insert_with(|| zero_document(def.fields));
        fill_missing(doc, def.fields);
    }
}

fn fill_missing(doc: &mut Value, fields: &[FieldSpec]) {
    if !doc.is_object() {
        *doc = zero_document(fields);
        return;
    }
    let Some(map) = doc.as_object_mut() else {
        return;
    };
    for field in fields {
        let slot = map
            .entry(field.name.to_string())
            .or_insert_with(|| zero_value(&field.kind));
        if let FieldKind::Group { fields: sub } = field.kind {
            fill_missing(slot, sub);
        }
    }
}

// ---------------------------------------------------------------------------
// PATCH planning
// ---------------------------------------------------------------------------

/// A validated production update.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductionPatch {
    pub title: Option<String>,
    pub completion_percentage: Option<i32>,
    /// Partial sub-documents keyed by document key, deep-merged on apply.
    pub steps: Map<String, Value>,
    /// Section key to assigned user (`None` clears the assignment).
    pub assignments: Vec<(String, Option<DbId>)>,
}

impl ProductionPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completion_percentage.is_none()
            && self.steps.is_empty()
            && self.assignments.is_empty()
    }

    /// Distinct user ids being assigned by this patch.
    pub fn assigned_user_ids(&self) -> Vec<DbId> {
        let mut ids: Vec<DbId> = self.assignments.iter().filter_map(|(_, id)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Turn a flat `{path: value}` body into a [`ProductionPatch`].
///
/// Accepted paths:
/// - `title`, `completion_percentage`
/// - `<document_key>` with a partial object
/// - `<document_key>.<field>` and `<document_key>.<group>.<field>`
/// - `assignments.<section>` with a user id or `null`
pub fn plan_patch(body: &Map<String, Value>) -> Result<ProductionPatch, CoreError> {
    let mut patch = ProductionPatch::default();

    for (path, value) in body {
        let segments: Vec<&str> = path.split('.').collect();
        match segments.as_slice() {
            ["title"] => {
                let title = value
                    .as_str()
                    .ok_or_else(|| CoreError::validation("Title must be a string"))?
                    .trim();
                validate_title(title)?;
                patch.title = Some(title.to_string());
            }
            ["completion_percentage"] => {
                let pct = value
                    .as_i64()
                    .filter(|p| (0..=100).contains(p))
                    .ok_or_else(|| {
                        CoreError::validation(
                            "completion_percentage must be an integer between 0 and 100",
                        )
                    })?;
                patch.completion_percentage = Some(pct as i32);
            }
            [prefix, section] if *prefix == ASSIGNMENTS_PREFIX => {
                validate_section(section)?;
                let user_id = match value {
                    Value::Null => None,
                    v => Some(v.as_i64().ok_or_else(|| {
                        CoreError::Validation(format!(
                            "Assignment for '{section}' must be a user id or null"
                        ))
                    })?),
                };
                patch.assignments.push(((*section).to_string(), user_id));
            }
            [doc_key, rest @ ..] => {
                let def = find_by_document_key(doc_key).ok_or_else(|| not_editable(path))?;
                let partial = build_partial(def, rest, value, path)?;
                let slot = patch
                    .steps
                    .entry((*doc_key).to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                deep_merge(slot, &partial);
            }
            [] => return Err(not_editable(path)),
        }
    }

    Ok(patch)
}

fn not_editable(path: &str) -> CoreError {
    CoreError::Validation(format!("Path '{path}' is not editable"))
}

/// Build the partial sub-document described by `rest` (the path below the
/// document key) and validate `value` against the schema.
fn build_partial(
    def: &StepDefinition,
    rest: &[&str],
    value: &Value,
    path: &str,
) -> Result<Value, CoreError> {
    if rest.is_empty() {
        validate_object(def.fields, value, path)?;
        return Ok(value.clone());
    }

    let field = lookup(def.fields, rest[0]).ok_or_else(|| not_editable(path))?;
    let inner = match (rest.len(), field.kind) {
        (1, kind) => {
            validate_value(&kind, value, path)?;
            value.clone()
        }
        (2, FieldKind::Group { fields }) => {
            let sub = lookup(fields, rest[1]).ok_or_else(|| not_editable(path))?;
            validate_value(&sub.kind, value, path)?;
            single(sub.name, value.clone())
        }
        _ => return Err(not_editable(path)),
    };
    Ok(single(field.name, inner))
}

fn single(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

fn lookup<'a>(fields: &'a [FieldSpec], name: &str) -> Option<&'a FieldSpec> {
    fields.iter().find(|f| f.name == name)
}

fn validate_object(fields: &[FieldSpec], value: &Value, path: &str) -> Result<(), CoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| CoreError::Validation(format!("'{path}' must be an object")))?;
    for (key, v) in obj {
        let child_path = format!("{path}.{key}");
        let field = lookup(fields, key).ok_or_else(|| not_editable(&child_path))?;
        validate_value(&field.kind, v, &child_path)?;
    }
    Ok(())
}

fn validate_value(kind: &FieldKind, value: &Value, path: &str) -> Result<(), CoreError> {
    match kind {
        FieldKind::Text if value.is_string() => Ok(()),
        FieldKind::Text => Err(CoreError::Validation(format!("'{path}' must be a string"))),
        FieldKind::List if value.is_array() => Ok(()),
        FieldKind::List => Err(CoreError::Validation(format!("'{path}' must be a list"))),
        FieldKind::Group { fields } => validate_object(fields, value, path),
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Recursively merge `patch` into `target`. Objects merge key by key; any
/// other value replaces the target outright.
pub fn deep_merge(target: &mut Value, patch: &Value) {
    match (target.as_object_mut(), patch.as_object()) {
        (Some(t), Some(p)) => {
            for (key, value) in p {
                match t.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        t.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        _ => *target = patch.clone(),
    }
}

/// Apply a validated patch to a production's `steps` and `assignments`.
pub fn apply_patch(steps: &mut Value, assignments: &mut Value, patch: &ProductionPatch) {
    normalize_steps(steps);
    for (doc_key, partial) in &patch.steps {
        if let Some(doc) = steps.get_mut(doc_key) {
            deep_merge(doc, partial);
        }
    }

    if !assignments.is_object() {
        *assignments = Value::Object(Map::new());
    }
    if let Some(map) = assignments.as_object_mut() {
        for (section, user_id) in &patch.assignments {
            let v = user_id.map_or(Value::Null, Value::from);
            map.insert(section.clone(), v);
        }
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Derived progress for one configured step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepProgress {
    pub step_key: String,
    pub document_key: String,
    pub label: String,
    pub order: f64,
    pub filled: bool,
    /// The step needs a venue and the production has none yet.
    pub locked: bool,
}

/// Server-derived progress report. Does not overwrite the stored
/// `completion_percentage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub has_venue: bool,
    pub steps: Vec<StepProgress>,
    pub computed_percentage: u8,
}

/// Whether any leaf under `value` carries content.
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => map.values().any(is_filled),
        Value::Number(_) | Value::Bool(_) => true,
        Value::Null => false,
    }
}

/// Whether the production has a venue selected (`step6_venue_info.venue_id`).
pub fn has_venue(steps: &Value) -> bool {
    steps
        .get("step6_venue_info")
        .and_then(|d| d.get("venue_id"))
        .is_some_and(is_filled)
}

/// Compute progress over the enabled steps of `config` (already reconciled
/// and sorted).
pub fn compute_progress(steps: &Value, config: &[StepConfigEntry]) -> ProgressReport {
    let venue = has_venue(steps);

    let rows: Vec<StepProgress> = config
        .iter()
        .filter(|e| e.enabled)
        .filter_map(|e| {
            let def = find_definition(&e.step_key)?;
            Some(StepProgress {
                step_key: def.step_key.to_string(),
                document_key: def.document_key.to_string(),
                label: def.label.to_string(),
                order: e.order,
                filled: steps.get(def.document_key).is_some_and(is_filled),
                locked: e.requires_venue && !venue,
            })
        })
        .collect();

    let countable: Vec<&StepProgress> = rows.iter().filter(|r| !r.locked).collect();
    let filled = countable.iter().filter(|r| r.filled).count();
    let computed_percentage = if countable.is_empty() {
        0
    } else {
        ((filled as f64 / countable.len() as f64) * 100.0).round() as u8
    };

    ProgressReport {
        has_venue: venue,
        steps: rows,
        computed_percentage,
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::steps::{default_config, BUILT_IN_STEP_COUNT};

    fn body(v: Value) -> Map<String, Value> {
        v.as_object().unwrap().clone()
    }

    #[test]
    fn initial_steps_cover_every_definition() {
        let steps = initial_steps();
        for def in STEP_DEFINITIONS {
            assert!(steps.get(def.document_key).is_some(), "{}", def.document_key);
        }
        assert!(STEP_DEFINITIONS.len() >= BUILT_IN_STEP_COUNT);
        assert_eq!(steps["step1_contract"], json!({"link": "", "notes": ""}));
        assert_eq!(steps["step2_cities"], json!({"cities": [], "notes": ""}));
        assert_eq!(
            steps["step5_materials"]["videos"],
            json!({"link": "", "notes": ""})
        );
    }

    #[test]
    fn resolve_title_defaults() {
        assert_eq!(resolve_title(None).unwrap(), DEFAULT_TITLE);
        assert_eq!(resolve_title(Some("   ")).unwrap(), DEFAULT_TITLE);
        assert_eq!(resolve_title(Some(" Spring Tour ")).unwrap(), "Spring Tour");
    }

    #[test]
    fn normalize_fills_missing_documents_and_fields() {
        let mut steps = json!({"step1_contract": {"link": "x"}});
        normalize_steps(&mut steps);
        assert_eq!(steps["step1_contract"], json!({"link": "x", "notes": ""}));
        assert_eq!(steps["step16_tracking_links"]["links"], json!([]));
    }

    #[test]
    fn plan_accepts_allowed_paths() {
        let patch = plan_patch(&body(json!({
            "title": "  Tour  ",
            "completion_percentage": 40,
            "step1_contract": {"link": "https://example.com/c"},
            "step5_materials.videos.link": "https://v",
            "step2_cities.cities": ["Taipei"],
            "assignments.step11": 7,
            "assignments.step5_videos": null
        })))
        .unwrap();

        assert_eq!(patch.title.as_deref(), Some("Tour"));
        assert_eq!(patch.completion_percentage, Some(40));
        assert_eq!(
            patch.steps["step5_materials"],
            json!({"videos": {"link": "https://v"}})
        );
        assert_eq!(patch.steps["step2_cities"], json!({"cities": ["Taipei"]}));
        assert_eq!(patch.assigned_user_ids(), vec![7]);
        assert!(patch
            .assignments
            .contains(&("step5_videos".to_string(), None)));
    }

    #[test]
    fn plan_rejects_unknown_paths() {
        assert_matches!(
            plan_patch(&body(json!({"created_by": 1}))),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            plan_patch(&body(json!({"step1_contract.bogus": "x"}))),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            plan_patch(&body(json!({"step1_contract": {"bogus": "x"}}))),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            plan_patch(&body(json!({"assignments.nope": 1}))),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn plan_rejects_wrong_types() {
        assert!(plan_patch(&body(json!({"step1_contract.link": 5}))).is_err());
        assert!(plan_patch(&body(json!({"step2_cities.cities": "Taipei"}))).is_err());
        assert!(plan_patch(&body(json!({"completion_percentage": 101}))).is_err());
        assert!(plan_patch(&body(json!({"title": ""}))).is_err());
        assert!(plan_patch(&body(json!({"assignments.step1": "bob"}))).is_err());
    }

    #[test]
    fn apply_patch_merges_without_clobbering_siblings() {
        let mut steps = initial_steps();
        let mut assignments = json!({"step1": 3});

        let first = plan_patch(&body(json!({"step1_contract.link": "L"}))).unwrap();
        apply_patch(&mut steps, &mut assignments, &first);
        let second = plan_patch(&body(json!({
            "step1_contract.notes": "N",
            "assignments.step11": 9
        })))
        .unwrap();
        apply_patch(&mut steps, &mut assignments, &second);

        assert_eq!(steps["step1_contract"], json!({"link": "L", "notes": "N"}));
        assert_eq!(assignments, json!({"step1": 3, "step11": 9}));
    }

    #[test]
    fn assignments_survive_step_edits_and_can_be_cleared() {
        let mut steps = initial_steps();
        let mut assignments = json!({"step11": 4});
        let edit = plan_patch(&body(json!({"step11_performance_shooting.notes": "x"}))).unwrap();
        apply_patch(&mut steps, &mut assignments, &edit);
        assert_eq!(assignments["step11"], 4);

        let clear = plan_patch(&body(json!({"assignments.step11": null}))).unwrap();
        apply_patch(&mut steps, &mut assignments, &clear);
        assert_eq!(assignments["step11"], Value::Null);
    }

    #[test]
    fn progress_locks_venue_steps_without_venue() {
        let mut steps = initial_steps();
        steps["step1_contract"]["link"] = json!("L");

        let report = compute_progress(&steps, &default_config());
        assert!(!report.has_venue);
        let step3 = report.steps.iter().find(|s| s.step_key == "step3").unwrap();
        assert!(step3.locked);
        let unlocked = report.steps.iter().filter(|s| !s.locked).count();
        let expected = ((1.0 / unlocked as f64) * 100.0).round() as u8;
        assert_eq!(report.computed_percentage, expected);
    }

    #[test]
    fn progress_skips_disabled_steps() {
        let steps = initial_steps();
        let mut config = default_config();
        for e in &mut config {
            e.enabled = e.step_key == "step1";
        }
        let report = compute_progress(&steps, &config);
        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.computed_percentage, 0);
    }

    #[test]
    fn venue_unlocks_gated_steps() {
        let mut steps = initial_steps();
        steps["step6_venue_info"]["venue_id"] = json!("12");
        let report = compute_progress(&steps, &default_config());
        assert!(report.has_venue);
        assert!(report.steps.iter().all(|s| !s.locked));
    }
}
