//! Positive and negative prompt assembly.
//!
//! Block order is attention priority for the downstream text encoder and is
//! fixed: quality, age lockdown, style, camera, gender lockdown, body,
//! ethnicity lockdown, archetype, expression, hair, eyes, custom facial,
//! outfit, custom extra, lighting, background, then the tail anchors.

use crate::catalog::negative::{CONFLICT_SOFTENER, NEGATIVE_BASE};
use crate::catalog::{phrase_of, Descriptive};
use crate::character::CharacterConfig;
use crate::text::{join_blocks, non_empty_trimmed};
use crate::weighting::{round2, weight, weight_each};

/// Fixed emphasis of the age anchors.
pub const AGE_LOCK_STRENGTH: f64 = 1.5;

/// Upper bound on gender emphasis for child and teen brackets.
pub const MINOR_GENDER_CAP: f64 = 1.2;

/// Fixed emphasis of the ethnicity anchors.
pub const ETHNICITY_LOCK_STRENGTH: f64 = 1.40;

const AGE_REF_RATIO: f64 = 0.90;
const AGE_FACE_RATIO: f64 = 0.85;
const GENDER_BODY_RATIO: f64 = 0.80;
const GENDER_FACE_RATIO: f64 = 0.75;
const ETHNICITY_SKIN_RATIO: f64 = 0.88;
const ETHNICITY_FACE_RATIO: f64 = 0.82;
const GENDER_TAIL_RATIO: f64 = 0.65;
const AGE_TAIL_RATIO: f64 = 0.60;

/// Number of anchors re-emitted at the end of the prompt.
const TAIL_ANCHORS: usize = 2;

const CAMERA_WEIGHT: f64 = 1.1;
const ARCHETYPE_WEIGHT: f64 = 1.1;
const EXPRESSION_WEIGHT: f64 = 1.1;
const STYLE_DETAIL_WEIGHT: f64 = 1.1;
const COLOR_WEIGHT: f64 = 1.15;
const OUTFIT_WEIGHT: f64 = 1.05;

/// Gender emphasis after the minor clamp.
pub fn effective_gender_strength(cfg: &CharacterConfig) -> f64 {
    if cfg.age_group.is_minor() {
        cfg.gender_lock_strength.min(MINOR_GENDER_CAP)
    } else {
        cfg.gender_lock_strength
    }
}

/// Whether the chosen hair or eye colour is atypical for the ethnicity.
///
/// Always false when the ethnicity has no lockdown entry.
pub fn has_ethnicity_conflict(cfg: &CharacterConfig) -> bool {
    let eth = cfg.ethnicity.entry();
    if !eth.has_lockdown() {
        return false;
    }
    eth.hair_conflicts(phrase_of(cfg.hair_color)) || eth.eyes_conflict(phrase_of(cfg.eye_color))
}

/// Build the weighted positive prompt. Never fails.
pub fn build_positive(cfg: &CharacterConfig) -> String {
    let gender = cfg.gender.entry();
    let age = cfg.age_group.entry();
    let eth = cfg.ethnicity.entry();

    let mut blocks: Vec<String> = Vec::with_capacity(32);

    blocks.push(cfg.quality_preset.phrase().to_string());

    // Age lockdown.
    blocks.push(weight_each(age.anchors, AGE_LOCK_STRENGTH));
    blocks.push(weight(age.age_ref, round2(AGE_LOCK_STRENGTH * AGE_REF_RATIO)));
    blocks.push(weight(age.face_ref, round2(AGE_LOCK_STRENGTH * AGE_FACE_RATIO)));

    push_weighted(&mut blocks, phrase_of(cfg.art_style), cfg.art_style_weight);
    push_weighted(&mut blocks, phrase_of(cfg.camera_angle), CAMERA_WEIGHT);

    // Gender lockdown.
    let gls = effective_gender_strength(cfg);
    blocks.push(weight_each(gender.anchors, gls));
    blocks.push(weight(gender.body_ref, round2(gls * GENDER_BODY_RATIO)));
    blocks.push(weight(gender.face_ref, round2(gls * GENDER_FACE_RATIO)));

    blocks.push(phrase_of(cfg.body_type).to_string());

    // Ethnicity lockdown.
    if eth.has_lockdown() {
        blocks.push(weight_each(eth.anchors, ETHNICITY_LOCK_STRENGTH));
        push_weighted(
            &mut blocks,
            eth.skin_ref,
            round2(ETHNICITY_LOCK_STRENGTH * ETHNICITY_SKIN_RATIO),
        );
        push_weighted(
            &mut blocks,
            eth.face_ref,
            round2(ETHNICITY_LOCK_STRENGTH * ETHNICITY_FACE_RATIO),
        );
        if has_ethnicity_conflict(cfg) {
            blocks.push(CONFLICT_SOFTENER.to_string());
        }
    }

    push_weighted(&mut blocks, phrase_of(cfg.archetype), ARCHETYPE_WEIGHT);
    push_weighted(&mut blocks, phrase_of(cfg.expression), EXPRESSION_WEIGHT);

    push_weighted(&mut blocks, phrase_of(cfg.hair_style), STYLE_DETAIL_WEIGHT);
    push_weighted(&mut blocks, phrase_of(cfg.hair_color), COLOR_WEIGHT);
    push_weighted(&mut blocks, phrase_of(cfg.eye_style), STYLE_DETAIL_WEIGHT);
    push_weighted(&mut blocks, phrase_of(cfg.eye_color), COLOR_WEIGHT);

    blocks.push(cfg.custom_facial.clone());

    // The extra is appended after ", " even when the outfit is absent.
    let mut outfit = phrase_of(cfg.outfit).to_string();
    if let Some(extra) = non_empty_trimmed(&cfg.custom_outfit_extra) {
        outfit.push_str(", ");
        outfit.push_str(extra);
    }
    push_weighted(&mut blocks, &outfit, OUTFIT_WEIGHT);

    blocks.push(cfg.custom_extra.clone());
    blocks.push(phrase_of(cfg.lighting).to_string());
    blocks.push(phrase_of(cfg.background).to_string());

    // Tail anchors use the caller's strength, not the clamped one.
    let gender_tail = &gender.anchors[..TAIL_ANCHORS.min(gender.anchors.len())];
    blocks.push(weight_each(
        gender_tail,
        round2(cfg.gender_lock_strength * GENDER_TAIL_RATIO),
    ));
    let age_tail = &age.anchors[..TAIL_ANCHORS.min(age.anchors.len())];
    blocks.push(weight_each(
        age_tail,
        round2(AGE_LOCK_STRENGTH * AGE_TAIL_RATIO),
    ));

    join_blocks(blocks)
}

/// Build the negative prompt: age, gender and ethnicity negatives, the
/// universal boilerplate, then any caller-supplied extra. Never fails.
pub fn build_negative(cfg: &CharacterConfig) -> String {
    join_blocks([
        cfg.age_group.entry().negative,
        cfg.gender.entry().negative,
        cfg.ethnicity.entry().negative,
        NEGATIVE_BASE,
        cfg.extra_negative.as_str(),
    ])
}

fn push_weighted(blocks: &mut Vec<String>, phrase: &str, w: f64) {
    if let Some(phrase) = non_empty_trimmed(phrase) {
        blocks.push(weight(phrase, w));
    }
}
