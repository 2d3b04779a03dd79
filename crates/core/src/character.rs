//! The character configuration record fed to the composer.

use serde_json::Value;

use crate::catalog::{
    label_of, AgeGroup, Archetype, ArtStyle, Background, BodyType, CameraAngle, DefaultedAxis,
    Ethnicity, Expression, EyeColor, EyeStyle, Gender, HairColor, HairStyle, Lighting, Outfit,
    QualityPreset, TraitAxis,
};
use crate::hashing::sha256_hex;
use crate::preset::*;

/// Default gender lockdown strength.
pub const DEFAULT_GENDER_LOCK_STRENGTH: f64 = 1.55;

/// Default art style emphasis.
pub const DEFAULT_ART_STYLE_WEIGHT: f64 = 1.3;

/// Everything the composer needs to describe one character.
///
/// Optional axes are `None` when the label was "None" or unrecognised; the
/// matching prompt block is then omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterConfig {
    pub gender: Gender,
    pub age_group: AgeGroup,
    pub ethnicity: Ethnicity,
    pub art_style: Option<ArtStyle>,
    pub quality_preset: QualityPreset,
    pub camera_angle: Option<CameraAngle>,
    pub body_type: Option<BodyType>,
    pub archetype: Option<Archetype>,
    pub expression: Option<Expression>,
    pub hair_style: Option<HairStyle>,
    pub hair_color: Option<HairColor>,
    pub eye_style: Option<EyeStyle>,
    pub eye_color: Option<EyeColor>,
    pub outfit: Option<Outfit>,
    pub lighting: Option<Lighting>,
    pub background: Option<Background>,
    /// Typical range 1.0–2.0.
    pub gender_lock_strength: f64,
    /// Typical range 0.8–1.8.
    pub art_style_weight: f64,
    pub character_name: String,
    pub custom_facial: String,
    pub custom_outfit_extra: String,
    pub custom_extra: String,
    pub extra_negative: String,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            gender: Gender::DEFAULT,
            age_group: AgeGroup::DEFAULT,
            ethnicity: Ethnicity::DEFAULT,
            art_style: Some(ArtStyle::AnimeSd15),
            quality_preset: QualityPreset::DEFAULT,
            camera_angle: Some(CameraAngle::UpperBody),
            body_type: Some(BodyType::Athletic),
            archetype: None,
            expression: Some(Expression::NeutralCalm),
            hair_style: Some(HairStyle::LongFlowing),
            hair_color: Some(HairColor::JetBlack),
            eye_style: Some(EyeStyle::NaturalRealistic),
            eye_color: Some(EyeColor::Brown),
            outfit: Some(Outfit::FantasyArmor),
            lighting: Some(Lighting::CinematicDramatic),
            background: Some(Background::CleanStudio),
            gender_lock_strength: DEFAULT_GENDER_LOCK_STRENGTH,
            art_style_weight: DEFAULT_ART_STYLE_WEIGHT,
            character_name: String::new(),
            custom_facial: String::new(),
            custom_outfit_extra: String::new(),
            custom_extra: String::new(),
            extra_negative: String::new(),
        }
    }
}

impl CharacterConfig {
    /// Build a config from a (possibly partial) document over the defaults.
    pub fn from_document(doc: &PresetDocument) -> Self {
        Self::default().merged_with(doc)
    }

    /// Overlay `doc` on `self`.
    ///
    /// Keys that are missing or carry the wrong JSON type keep the current
    /// value. Unrecognised labels resolve to the axis default (gender, age,
    /// ethnicity, quality) or to absent (every other axis).
    pub fn merged_with(&self, doc: &PresetDocument) -> Self {
        let mut merged = self.clone();

        if let Some(label) = doc_str(doc, KEY_GENDER) {
            merged.gender = Gender::resolve(label);
        }
        if let Some(label) = doc_str(doc, KEY_AGE_GROUP) {
            merged.age_group = AgeGroup::resolve(label);
        }
        if let Some(label) = doc_str(doc, KEY_ETHNICITY) {
            merged.ethnicity = Ethnicity::resolve(label);
        }
        if let Some(label) = doc_str(doc, KEY_QUALITY_PRESET) {
            merged.quality_preset = QualityPreset::resolve(label);
        }

        merge_optional(doc, KEY_ART_STYLE, &mut merged.art_style);
        merge_optional(doc, KEY_CAMERA_ANGLE, &mut merged.camera_angle);
        merge_optional(doc, KEY_BODY_TYPE, &mut merged.body_type);
        merge_optional(doc, KEY_ARCHETYPE, &mut merged.archetype);
        merge_optional(doc, KEY_EXPRESSION, &mut merged.expression);
        merge_optional(doc, KEY_HAIR_STYLE, &mut merged.hair_style);
        merge_optional(doc, KEY_HAIR_COLOR, &mut merged.hair_color);
        merge_optional(doc, KEY_EYE_STYLE, &mut merged.eye_style);
        merge_optional(doc, KEY_EYE_COLOR, &mut merged.eye_color);
        merge_optional(doc, KEY_OUTFIT, &mut merged.outfit);
        merge_optional(doc, KEY_LIGHTING, &mut merged.lighting);
        merge_optional(doc, KEY_BACKGROUND, &mut merged.background);

        if let Some(v) = doc_f64(doc, KEY_GENDER_LOCK_STRENGTH) {
            merged.gender_lock_strength = v;
        }
        if let Some(v) = doc_f64(doc, KEY_ART_STYLE_WEIGHT) {
            merged.art_style_weight = v;
        }

        merge_text(doc, KEY_CHARACTER_NAME, &mut merged.character_name);
        merge_text(doc, KEY_CUSTOM_FACIAL, &mut merged.custom_facial);
        merge_text(doc, KEY_CUSTOM_OUTFIT_EXTRA, &mut merged.custom_outfit_extra);
        merge_text(doc, KEY_CUSTOM_EXTRA, &mut merged.custom_extra);
        merge_text(doc, KEY_EXTRA_NEGATIVE, &mut merged.extra_negative);

        merged
    }

    /// Full document with every key; labels are canonical and absent axes
    /// are written as "None".
    pub fn to_document(&self) -> PresetDocument {
        let mut doc = PresetDocument::new();
        let mut put = |key: &str, value: Value| {
            doc.insert(key.to_string(), value);
        };

        put(KEY_QUALITY_PRESET, self.quality_preset.label().into());
        put(KEY_ART_STYLE, label_of(self.art_style).into());
        put(KEY_ART_STYLE_WEIGHT, self.art_style_weight.into());
        put(KEY_GENDER, self.gender.label().into());
        put(KEY_GENDER_LOCK_STRENGTH, self.gender_lock_strength.into());
        put(KEY_AGE_GROUP, self.age_group.label().into());
        put(KEY_BODY_TYPE, label_of(self.body_type).into());
        put(KEY_ETHNICITY, self.ethnicity.label().into());
        put(KEY_HAIR_STYLE, label_of(self.hair_style).into());
        put(KEY_HAIR_COLOR, label_of(self.hair_color).into());
        put(KEY_EYE_STYLE, label_of(self.eye_style).into());
        put(KEY_EYE_COLOR, label_of(self.eye_color).into());
        put(KEY_ARCHETYPE, label_of(self.archetype).into());
        put(KEY_EXPRESSION, label_of(self.expression).into());
        put(KEY_OUTFIT, label_of(self.outfit).into());
        put(KEY_LIGHTING, label_of(self.lighting).into());
        put(KEY_CAMERA_ANGLE, label_of(self.camera_angle).into());
        put(KEY_BACKGROUND, label_of(self.background).into());
        put(KEY_CHARACTER_NAME, self.character_name.clone().into());
        put(KEY_CUSTOM_FACIAL, self.custom_facial.clone().into());
        put(KEY_CUSTOM_OUTFIT_EXTRA, self.custom_outfit_extra.clone().into());
        put(KEY_CUSTOM_EXTRA, self.custom_extra.clone().into());
        put(KEY_EXTRA_NEGATIVE, self.extra_negative.clone().into());

        doc
    }

    /// SHA-256 hex of the canonical document. Any change to any field
    /// changes the fingerprint.
    pub fn fingerprint(&self) -> String {
        let canonical = Value::Object(self.to_document()).to_string();
        sha256_hex(canonical.as_bytes())
    }
}

fn merge_optional<T: TraitAxis>(doc: &PresetDocument, key: &str, slot: &mut Option<T>) {
    if let Some(label) = doc_str(doc, key) {
        *slot = T::from_label(label);
    }
}

fn merge_text(doc: &PresetDocument, key: &str, slot: &mut String) {
    if let Some(text) = doc_str(doc, key) {
        *slot = text.to_string();
    }
}
