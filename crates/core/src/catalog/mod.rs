//! Static trait catalog.
//!
//! Every trait axis is a closed enum with a fixed table of phrase fragments.
//! Labels coming from the outside world (UI widgets, saved presets) may carry
//! a decorative emoji prefix, e.g. `"👩 Female"`; lookups strip it before
//! comparing against the canonical label.
//!
//! Unknown labels never fail: callers either fall back to the axis default
//! ([`TraitAxis::resolve`]) or treat the axis as absent.

pub mod appearance;
pub mod character;
pub mod identity;
pub mod negative;
pub mod scene;

pub use appearance::{BodyType, EyeColor, EyeStyle, HairColor, HairStyle};
pub use character::{Archetype, Expression, Outfit};
pub use identity::{AgeEntry, AgeGroup, Ethnicity, EthnicityEntry, Gender, GenderEntry};
pub use scene::{ArtStyle, Background, CameraAngle, Lighting, QualityPreset};

/// Label used by widgets and presets for "nothing selected".
pub const NONE_LABEL: &str = "None";

/// A closed set of labelled choices.
pub trait TraitAxis: Copy + Sized + 'static {
    /// Every variant, in catalog (display) order.
    const ALL: &'static [Self];

    /// Canonical, undecorated label.
    fn label(self) -> &'static str;

    /// Look up a variant by label, ignoring decoration and ASCII case.
    fn from_label(label: &str) -> Option<Self> {
        let wanted = canonical_label(label);
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(wanted))
    }
}

/// Axes that always resolve to a value, falling back to a documented default.
pub trait DefaultedAxis: TraitAxis {
    const DEFAULT: Self;

    fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Self::DEFAULT)
    }
}

/// Axes whose variants map to a single descriptive phrase.
pub trait Descriptive: TraitAxis {
    fn phrase(self) -> &'static str;
}

/// Phrase for an optional axis value; absent values contribute nothing.
pub fn phrase_of<T: Descriptive>(value: Option<T>) -> &'static str {
    value.map(Descriptive::phrase).unwrap_or("")
}

/// Label for an optional axis value, [`NONE_LABEL`] when absent.
pub fn label_of<T: TraitAxis>(value: Option<T>) -> &'static str {
    value.map(TraitAxis::label).unwrap_or(NONE_LABEL)
}

/// Strip surrounding whitespace and any leading decoration (emoji, flags,
/// variation selectors) from a label.
pub fn canonical_label(label: &str) -> &str {
    label
        .trim()
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_unique<T: TraitAxis>() -> bool {
        let mut seen: Vec<String> = T::ALL.iter().map(|v| v.label().to_lowercase()).collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        seen.len() == total
    }

    fn phrases_present<T: Descriptive>() -> bool {
        T::ALL.iter().all(|v| !v.phrase().trim().is_empty())
    }

    // -- canonical_label --

    #[test]
    fn canonical_label_strips_emoji_prefix() {
        assert_eq!(canonical_label("👩 Female"), "Female");
        assert_eq!(canonical_label("🇯🇵 East Asian"), "East Asian");
        assert_eq!(canonical_label("⚔️ Hero / Warrior"), "Hero / Warrior");
        assert_eq!(canonical_label("  Long & Flowing "), "Long & Flowing");
    }

    #[test]
    fn canonical_label_keeps_leading_digits() {
        assert_eq!(canonical_label("🎮 3D Render SD1.5"), "3D Render SD1.5");
    }

    // -- from_label --

    #[test]
    fn decorated_and_bare_labels_resolve_alike() {
        assert_eq!(Gender::from_label("👨 Male"), Some(Gender::Male));
        assert_eq!(Gender::from_label("male"), Some(Gender::Male));
        assert_eq!(
            CameraAngle::from_label("📸 Upper Body (3/4)"),
            Some(CameraAngle::UpperBody)
        );
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Gender::from_label("Dragon"), None);
        assert_eq!(HairColor::from_label(""), None);
        assert_eq!(Archetype::from_label(NONE_LABEL), None);
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(Gender::resolve("Dragon"), Gender::Female);
        assert_eq!(AgeGroup::resolve("ancient"), AgeGroup::YoungAdult);
        assert_eq!(Ethnicity::resolve("Martian"), Ethnicity::NoPreference);
        assert_eq!(QualityPreset::resolve(""), QualityPreset::Maximum);
    }

    // -- catalog integrity --

    #[test]
    fn labels_are_unique_per_axis() {
        assert!(labels_unique::<Gender>());
        assert!(labels_unique::<AgeGroup>());
        assert!(labels_unique::<Ethnicity>());
        assert!(labels_unique::<ArtStyle>());
        assert!(labels_unique::<QualityPreset>());
        assert!(labels_unique::<CameraAngle>());
        assert!(labels_unique::<BodyType>());
        assert!(labels_unique::<HairStyle>());
        assert!(labels_unique::<HairColor>());
        assert!(labels_unique::<EyeStyle>());
        assert!(labels_unique::<EyeColor>());
        assert!(labels_unique::<Archetype>());
        assert!(labels_unique::<Expression>());
        assert!(labels_unique::<Outfit>());
        assert!(labels_unique::<Lighting>());
        assert!(labels_unique::<Background>());
    }

    #[test]
    fn every_descriptive_variant_has_a_phrase() {
        assert!(phrases_present::<ArtStyle>());
        assert!(phrases_present::<QualityPreset>());
        assert!(phrases_present::<CameraAngle>());
        assert!(phrases_present::<BodyType>());
        assert!(phrases_present::<HairStyle>());
        assert!(phrases_present::<HairColor>());
        assert!(phrases_present::<EyeStyle>());
        assert!(phrases_present::<EyeColor>());
        assert!(phrases_present::<Archetype>());
        assert!(phrases_present::<Expression>());
        assert!(phrases_present::<Outfit>());
        assert!(phrases_present::<Lighting>());
        assert!(phrases_present::<Background>());
    }

    #[test]
    fn every_label_round_trips() {
        for g in Gender::ALL {
            assert_eq!(Gender::from_label(g.label()), Some(*g));
        }
        for c in EyeColor::ALL {
            assert_eq!(EyeColor::from_label(c.label()), Some(*c));
        }
        for b in Background::ALL {
            assert_eq!(Background::from_label(b.label()), Some(*b));
        }
    }

    #[test]
    fn absent_values_have_empty_phrase_and_none_label() {
        assert_eq!(phrase_of::<Archetype>(None), "");
        assert_eq!(label_of::<Archetype>(None), NONE_LABEL);
        assert_eq!(label_of(Some(Lighting::GoldenHour)), "Golden Hour");
    }
}
