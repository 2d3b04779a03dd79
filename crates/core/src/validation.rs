//! Documented numeric ranges for caller-supplied strengths.
//!
//! Composition never rejects an out-of-range value; these checks exist so
//! that callers can report one.

use crate::character::CharacterConfig;
use crate::error::CoreError;

/// Gender lockdown strength range.
pub const GENDER_LOCK_STRENGTH_RANGE: (f64, f64) = (1.0, 2.0);

/// Art style emphasis range.
pub const ART_STYLE_WEIGHT_RANGE: (f64, f64) = (0.8, 1.8);

/// LoRA model and encoder strength range.
pub const LORA_STRENGTH_RANGE: (f64, f64) = (-2.0, 2.0);

/// ControlNet strength range.
pub const CONTROLNET_STRENGTH_RANGE: (f64, f64) = (0.0, 1.0);

/// Check that `value` is finite and within `[min, max]`.
pub fn validate_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < min || value > max {
        return Err(CoreError::Validation(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

pub fn validate_gender_lock_strength(value: f64) -> Result<(), CoreError> {
    validate_range("gender_lock_strength", value, GENDER_LOCK_STRENGTH_RANGE)
}

pub fn validate_art_style_weight(value: f64) -> Result<(), CoreError> {
    validate_range("art_style_weight", value, ART_STYLE_WEIGHT_RANGE)
}

pub fn validate_lora_strength(value: f64) -> Result<(), CoreError> {
    validate_range("lora_strength", value, LORA_STRENGTH_RANGE)
}

pub fn validate_controlnet_strength(value: f64) -> Result<(), CoreError> {
    validate_range("controlnet_strength", value, CONTROLNET_STRENGTH_RANGE)
}

/// Every range problem in a config, in field order.
pub fn range_issues(cfg: &CharacterConfig) -> Vec<CoreError> {
    [
        validate_gender_lock_strength(cfg.gender_lock_strength),
        validate_art_style_weight(cfg.art_style_weight),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}
