//! Preset documents: the key-value form in which a character configuration
//! is saved and loaded.
//!
//! Storage itself is an external concern; this module only defines the
//! document shape, the field keys, label sanitisation, and JSON parsing.

use serde_json::{Map, Value};

use crate::catalog::NONE_LABEL;
use crate::error::CoreError;

/// A (possibly partial) saved character configuration.
pub type PresetDocument = Map<String, Value>;

/* --------------------------------------------------------------------------
Field keys
-------------------------------------------------------------------------- */

pub const KEY_QUALITY_PRESET: &str = "quality_preset";
pub const KEY_ART_STYLE: &str = "art_style";
pub const KEY_ART_STYLE_WEIGHT: &str = "art_style_weight";
pub const KEY_GENDER: &str = "gender";
pub const KEY_GENDER_LOCK_STRENGTH: &str = "gender_lock_strength";
pub const KEY_AGE_GROUP: &str = "age_group";
pub const KEY_BODY_TYPE: &str = "body_type";
pub const KEY_ETHNICITY: &str = "ethnicity";
pub const KEY_HAIR_STYLE: &str = "hair_style";
pub const KEY_HAIR_COLOR: &str = "hair_color";
pub const KEY_EYE_STYLE: &str = "eye_style";
pub const KEY_EYE_COLOR: &str = "eye_color";
pub const KEY_ARCHETYPE: &str = "archetype";
pub const KEY_EXPRESSION: &str = "expression";
pub const KEY_OUTFIT: &str = "outfit";
pub const KEY_LIGHTING: &str = "lighting";
pub const KEY_CAMERA_ANGLE: &str = "camera_angle";
pub const KEY_BACKGROUND: &str = "background";
pub const KEY_CHARACTER_NAME: &str = "character_name";
pub const KEY_CUSTOM_FACIAL: &str = "custom_facial";
pub const KEY_CUSTOM_OUTFIT_EXTRA: &str = "custom_outfit_extra";
pub const KEY_CUSTOM_EXTRA: &str = "custom_extra";
pub const KEY_EXTRA_NEGATIVE: &str = "extra_negative";

/// Every key written by a full save, in input-form order.
pub const ALL_KEYS: &[&str] = &[
    KEY_QUALITY_PRESET,
    KEY_ART_STYLE,
    KEY_ART_STYLE_WEIGHT,
    KEY_GENDER,
    KEY_GENDER_LOCK_STRENGTH,
    KEY_AGE_GROUP,
    KEY_BODY_TYPE,
    KEY_ETHNICITY,
    KEY_HAIR_STYLE,
    KEY_HAIR_COLOR,
    KEY_EYE_STYLE,
    KEY_EYE_COLOR,
    KEY_ARCHETYPE,
    KEY_EXPRESSION,
    KEY_OUTFIT,
    KEY_LIGHTING,
    KEY_CAMERA_ANGLE,
    KEY_BACKGROUND,
    KEY_CHARACTER_NAME,
    KEY_CUSTOM_FACIAL,
    KEY_CUSTOM_OUTFIT_EXTRA,
    KEY_CUSTOM_EXTRA,
    KEY_EXTRA_NEGATIVE,
];

/* --------------------------------------------------------------------------
Labels
-------------------------------------------------------------------------- */

/// Whether a load label means "no preset selected".
pub fn is_no_preset(label: &str) -> bool {
    let label = label.trim();
    label.is_empty() || label == NONE_LABEL
}

/// Keep alphanumerics, spaces, underscores and hyphens, then trim.
///
/// Returns a validation error when nothing usable is left.
pub fn sanitize_preset_label(label: &str) -> Result<String, CoreError> {
    let safe: String = label
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    let safe = safe.trim();
    if safe.is_empty() {
        return Err(CoreError::Validation(format!(
            "Preset label '{label}' has no usable characters"
        )));
    }
    Ok(safe.to_string())
}

/* --------------------------------------------------------------------------
Document access
-------------------------------------------------------------------------- */

/// Parse a preset document from JSON text. The top level must be an object.
pub fn parse_preset_document(text: &str) -> Result<PresetDocument, CoreError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| CoreError::InvalidPresetDocument(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::InvalidPresetDocument(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// String value for `key`, or `None` when missing or not a string.
pub fn doc_str<'a>(doc: &'a PresetDocument, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_str)
}

/// Numeric value for `key`, or `None` when missing or not a number.
pub fn doc_f64(doc: &PresetDocument, key: &str) -> Option<f64> {
    doc.get(key).and_then(Value::as_f64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
