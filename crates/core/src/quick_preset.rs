//! Ready-made characters for one-click composition.

use crate::catalog::{
    AgeGroup, Archetype, ArtStyle, Background, BodyType, CameraAngle, Ethnicity, Expression,
    EyeColor, EyeStyle, Gender, HairColor, HairStyle, Lighting, Outfit, QualityPreset, TraitAxis,
};
use crate::character::CharacterConfig;
use crate::composer::{build_negative, build_positive};
use crate::text::append_block;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickPreset {
    EpicFemaleWarrior,
    FemaleDarkMage,
    MaleSpaceCommander,
    CuteAnimeGirl,
    CyberpunkAssassin,
    VampireNoble,
    DivineAngel,
    DragonSlayer,
}

impl TraitAxis for QuickPreset {
    const ALL: &'static [Self] = &[
        Self::EpicFemaleWarrior,
        Self::FemaleDarkMage,
        Self::MaleSpaceCommander,
        Self::CuteAnimeGirl,
        Self::CyberpunkAssassin,
        Self::VampireNoble,
        Self::DivineAngel,
        Self::DragonSlayer,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::EpicFemaleWarrior => "Epic Female Warrior",
            Self::FemaleDarkMage => "Female Dark Mage",
            Self::MaleSpaceCommander => "Male Space Commander",
            Self::CuteAnimeGirl => "Cute Anime Girl",
            Self::CyberpunkAssassin => "Cyberpunk Assassin (F)",
            Self::VampireNoble => "Vampire Noble (M)",
            Self::DivineAngel => "Divine Angel (F)",
            Self::DragonSlayer => "Dragon Slayer (M)",
        }
    }
}

/// Fields every quick preset spells out. Free text defaults to empty.
#[allow(clippy::too_many_arguments)]
fn character(
    gender: Gender,
    gender_lock_strength: f64,
    art_style: ArtStyle,
    art_style_weight: f64,
    quality_preset: QualityPreset,
    age_group: AgeGroup,
    body_type: BodyType,
    ethnicity: Ethnicity,
) -> CharacterConfig {
    CharacterConfig {
        gender,
        gender_lock_strength,
        art_style: Some(art_style),
        art_style_weight,
        quality_preset,
        age_group,
        body_type: Some(body_type),
        ethnicity,
        ..Default::default()
    }
}

impl QuickPreset {
    /// The full character behind this preset.
    pub fn config(self) -> CharacterConfig {
        match self {
            Self::EpicFemaleWarrior => CharacterConfig {
                hair_style: Some(HairStyle::LongFlowing),
                hair_color: Some(HairColor::JetBlack),
                eye_style: Some(EyeStyle::LargeAnime),
                eye_color: Some(EyeColor::Blue),
                archetype: Some(Archetype::HeroWarrior),
                expression: Some(Expression::FierceDetermined),
                outfit: Some(Outfit::FantasyArmor),
                lighting: Some(Lighting::CinematicDramatic),
                camera_angle: Some(CameraAngle::FullBodyStanding),
                background: Some(Background::EpicFantasyLand),
                custom_facial: "light scar on cheek".into(),
                ..character(
                    Gender::Female,
                    1.6,
                    ArtStyle::AnimeSd15,
                    1.3,
                    QualityPreset::AnimeMax,
                    AgeGroup::YoungAdult,
                    BodyType::Athletic,
                    Ethnicity::NoPreference,
                )
            },
            Self::FemaleDarkMage => CharacterConfig {
                hair_style: Some(HairStyle::LongFlowing),
                hair_color: Some(HairColor::VividPurple),
                eye_style: Some(EyeStyle::GlowingMagical),
                eye_color: Some(EyeColor::Red),
                archetype: Some(Archetype::Necromancer),
                expression: Some(Expression::SinisterEvil),
                outfit: Some(Outfit::MageRobes),
                lighting: Some(Lighting::DarkMoody),
                camera_angle: Some(CameraAngle::UpperBody),
                background: Some(Background::DarkDungeon),
                ..character(
                    Gender::Female,
                    1.6,
                    ArtStyle::FantasyIllustrationSd15,
                    1.3,
                    QualityPreset::Maximum,
                    AgeGroup::YoungAdult,
                    BodyType::SlimPetite,
                    Ethnicity::NoPreference,
                )
            },
            Self::MaleSpaceCommander => CharacterConfig {
                hair_style: Some(HairStyle::ShortNeat),
                hair_color: Some(HairColor::DarkBrown),
                eye_style: Some(EyeStyle::SharpIntense),
                eye_color: Some(EyeColor::Grey),
                archetype: Some(Archetype::SpaceMarine),
                expression: Some(Expression::FierceDetermined),
                outfit: Some(Outfit::FuturisticSciFi),
                lighting: Some(Lighting::CinematicDramatic),
                camera_angle: Some(CameraAngle::UpperBody),
                background: Some(Background::SpaceCosmos),
                ..character(
                    Gender::Male,
                    1.6,
                    ArtStyle::Render3dSd15,
                    1.2,
                    QualityPreset::Maximum,
                    AgeGroup::Adult,
                    BodyType::Athletic,
                    Ethnicity::NoPreference,
                )
            },
            Self::CuteAnimeGirl => CharacterConfig {
                hair_style: Some(HairStyle::TwinTails),
                hair_color: Some(HairColor::VividPink),
                eye_style: Some(EyeStyle::LargeAnime),
                eye_color: Some(EyeColor::Blue),
                archetype: None,
                expression: Some(Expression::WarmSmile),
                outfit: Some(Outfit::SchoolUniform),
                lighting: Some(Lighting::StudioSoft),
                camera_angle: Some(CameraAngle::HeadAndShoulders),
                background: Some(Background::JapaneseGarden),
                ..character(
                    Gender::Female,
                    1.7,
                    ArtStyle::AnimeSd15,
                    1.4,
                    QualityPreset::AnimeMax,
                    AgeGroup::Teen,
                    BodyType::SlimPetite,
                    Ethnicity::EastAsian,
                )
            },
            Self::CyberpunkAssassin => CharacterConfig {
                hair_style: Some(HairStyle::ShortNeat),
                hair_color: Some(HairColor::PlatinumSilver),
                eye_style: Some(EyeStyle::Cybernetic),
                eye_color: Some(EyeColor::Teal),
                archetype: Some(Archetype::RogueAssassin),
                expression: Some(Expression::ConfidentSmirk),
                outfit: Some(Outfit::FuturisticSciFi),
                lighting: Some(Lighting::NeonCyberpunk),
                camera_angle: Some(CameraAngle::FullBodyStanding),
                background: Some(Background::CyberpunkCity),
                custom_outfit_extra: "hood, tactical vest".into(),
                ..character(
                    Gender::Female,
                    1.6,
                    ArtStyle::CyberpunkSd15,
                    1.3,
                    QualityPreset::Maximum,
                    AgeGroup::YoungAdult,
                    BodyType::Athletic,
                    Ethnicity::NoPreference,
                )
            },
            Self::VampireNoble => CharacterConfig {
                hair_style: Some(HairStyle::LongFlowing),
                hair_color: Some(HairColor::JetBlack),
                eye_style: Some(EyeStyle::GlowingMagical),
                eye_color: Some(EyeColor::Red),
                archetype: Some(Archetype::Vampire),
                expression: Some(Expression::ConfidentSmirk),
                outfit: Some(Outfit::RoyalAristocratic),
                lighting: Some(Lighting::Moonlight),
                camera_angle: Some(CameraAngle::UpperBody),
                background: Some(Background::CyberpunkCity),
                custom_facial: "vampire fangs, pale ethereal skin".into(),
                ..character(
                    Gender::Male,
                    1.6,
                    ArtStyle::DarkFantasySd15,
                    1.3,
                    QualityPreset::Maximum,
                    AgeGroup::Adult,
                    BodyType::LeanTall,
                    Ethnicity::European,
                )
            },
            Self::DivineAngel => CharacterConfig {
                hair_style: Some(HairStyle::LongFlowing),
                hair_color: Some(HairColor::GoldenBlonde),
                eye_style: Some(EyeStyle::GlowingMagical),
                eye_color: Some(EyeColor::White),
                archetype: Some(Archetype::AngelSeraph),
                expression: Some(Expression::SerenePeaceful),
                outfit: Some(Outfit::ElegantDress),
                lighting: Some(Lighting::DivineHoly),
                camera_angle: Some(CameraAngle::FullBodyStanding),
                background: Some(Background::MagicalAbstract),
                custom_facial: "large white feathered wings".into(),
                ..character(
                    Gender::Female,
                    1.65,
                    ArtStyle::FantasyIllustrationSd15,
                    1.3,
                    QualityPreset::Maximum,
                    AgeGroup::YoungAdult,
                    BodyType::Ethereal,
                    Ethnicity::NoPreference,
                )
            },
            Self::DragonSlayer => CharacterConfig {
                hair_style: Some(HairStyle::ShortNeat),
                hair_color: Some(HairColor::DarkBrown),
                eye_style: Some(EyeStyle::SharpIntense),
                eye_color: Some(EyeColor::Amber),
                archetype: Some(Archetype::DragonSlayer),
                expression: Some(Expression::FierceDetermined),
                outfit: Some(Outfit::FantasyArmor),
                lighting: Some(Lighting::GoldenHour),
                camera_angle: Some(CameraAngle::DynamicActionPose),
                background: Some(Background::Battlefield),
                custom_facial: "battle scars, rough beard stubble".into(),
                ..character(
                    Gender::Male,
                    1.6,
                    ArtStyle::FantasyIllustrationSd15,
                    1.3,
                    QualityPreset::Maximum,
                    AgeGroup::Adult,
                    BodyType::Muscular,
                    Ethnicity::NoPreference,
                )
            },
        }
    }
}

/// Prompts produced from a quick preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickComposition {
    pub positive: String,
    pub negative: String,
}

/// Compose a quick preset and append caller text to each prompt.
pub fn compose_quick(
    preset: QuickPreset,
    append_positive: &str,
    append_negative: &str,
) -> QuickComposition {
    let cfg = preset.config();
    QuickComposition {
        positive: append_block(&build_positive(&cfg), append_positive),
        negative: append_block(&build_negative(&cfg), append_negative),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::negative::CONFLICT_SOFTENER;

    #[test]
    fn eight_presets_with_unique_labels() {
        assert_eq!(QuickPreset::ALL.len(), 8);
        assert_eq!(
            QuickPreset::from_label("🌸 Cute Anime Girl"),
            Some(QuickPreset::CuteAnimeGirl)
        );
        assert_eq!(
            QuickPreset::from_label("⚙️ Cyberpunk Assassin (F)"),
            Some(QuickPreset::CyberpunkAssassin)
        );
    }

    #[test]
    fn cute_anime_girl_is_a_clamped_teen_with_softener() {
        let composed = compose_quick(QuickPreset::CuteAnimeGirl, "", "");
        assert!(composed.positive.contains("(woman:1.20), (female:1.20), (girl:1.20)"));
        assert!(composed.positive.contains("(vivid hot pink dyed hair:1.15)"));
        assert!(composed.positive.contains(CONFLICT_SOFTENER));
        assert!(composed
            .positive
            .ends_with("(woman:1.10), (female:1.10), (teenager:0.90), (teen:0.90)"));
    }

    #[test]
    fn appended_text_is_trimmed_and_joined() {
        let plain = compose_quick(QuickPreset::DragonSlayer, "", "   ");
        let extended = compose_quick(QuickPreset::DragonSlayer, "  holding a greatsword ", "blurry");
        assert_eq!(
            extended.positive,
            format!("{}, holding a greatsword", plain.positive)
        );
        assert_eq!(extended.negative, format!("{}, blurry", plain.negative));
    }

    #[test]
    fn presets_carry_their_free_text() {
        let assassin = compose_quick(QuickPreset::CyberpunkAssassin, "", "");
        assert!(assassin.positive.contains("hood, tactical vest:1.05)"));
        let vampire = compose_quick(QuickPreset::VampireNoble, "", "");
        assert!(vampire.positive.contains(", vampire fangs, pale ethereal skin, "));
    }

    #[test]
    fn every_preset_composes() {
        for preset in QuickPreset::ALL {
            let composed = compose_quick(*preset, "", "");
            assert!(!composed.positive.is_empty());
            assert!(!composed.negative.is_empty());
        }
    }
}
