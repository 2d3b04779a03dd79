//! Character axes: archetype, expression and outfit.

use super::{Descriptive, TraitAxis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    HeroWarrior,
    MageWizard,
    RogueAssassin,
    HealerCleric,
    KnightPaladin,
    RangerArcher,
    Necromancer,
    DragonSlayer,
    SpaceMarine,
    Cyborg,
    Vampire,
    DemonFallen,
    AngelSeraph,
    ScholarSage,
    RoyaltyNoble,
    DruidNature,
    NinjaShadow,
}

impl TraitAxis for Archetype {
    const ALL: &'static [Self] = &[
        Self::HeroWarrior,
        Self::MageWizard,
        Self::RogueAssassin,
        Self::HealerCleric,
        Self::KnightPaladin,
        Self::RangerArcher,
        Self::Necromancer,
        Self::DragonSlayer,
        Self::SpaceMarine,
        Self::Cyborg,
        Self::Vampire,
        Self::DemonFallen,
        Self::AngelSeraph,
        Self::ScholarSage,
        Self::RoyaltyNoble,
        Self::DruidNature,
        Self::NinjaShadow,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::HeroWarrior => "Hero / Warrior",
            Self::MageWizard => "Mage / Wizard",
            Self::RogueAssassin => "Rogue / Assassin",
            Self::HealerCleric => "Healer / Cleric",
            Self::KnightPaladin => "Knight / Paladin",
            Self::RangerArcher => "Ranger / Archer",
            Self::Necromancer => "Necromancer",
            Self::DragonSlayer => "Dragon Slayer",
            Self::SpaceMarine => "Space Marine",
            Self::Cyborg => "Cyborg",
            Self::Vampire => "Vampire",
            Self::DemonFallen => "Demon / Fallen",
            Self::AngelSeraph => "Angel / Seraph",
            Self::ScholarSage => "Scholar / Sage",
            Self::RoyaltyNoble => "Royalty / Noble",
            Self::DruidNature => "Druid / Nature",
            Self::NinjaShadow => "Ninja / Shadow",
        }
    }
}

impl Descriptive for Archetype {
    fn phrase(self) -> &'static str {
        match self {
            Self::HeroWarrior => "heroic warrior, determined battle-ready stance, powerful presence",
            Self::MageWizard => "powerful mage, mystical energy aura, wise ancient expression",
            Self::RogueAssassin => "skilled assassin, stealthy cunning, dangerous demeanor",
            Self::HealerCleric => "divine healer, holy golden light aura, compassionate",
            Self::KnightPaladin => "noble knight, righteous bearing, honorable champion",
            Self::RangerArcher => "wilderness ranger, focused survivalist, nature guardian",
            Self::Necromancer => "dark necromancer, sinister undead aura, ominous power",
            Self::DragonSlayer => "legendary dragon slayer, battle-scarred, epic warrior",
            Self::SpaceMarine => "elite space marine, futuristic soldier, tactical ready",
            Self::Cyborg => "advanced cyborg, cybernetic enhancements, half-machine",
            Self::Vampire => "aristocratic vampire, pale ethereal skin, predatory grace",
            Self::DemonFallen => "powerful demon, dark supernatural aura, intimidating",
            Self::AngelSeraph => "divine angel, radiant wings, holy light emanating",
            Self::ScholarSage => "wise scholar, intellectual, keeper of knowledge",
            Self::RoyaltyNoble => "noble royalty, regal bearing, aristocratic grace",
            Self::DruidNature => "ancient druid, nature magic, wild mystical power",
            Self::NinjaShadow => "elite ninja, shadow assassin, masked warrior",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expression {
    NeutralCalm,
    FierceDetermined,
    WarmSmile,
    SinisterEvil,
    Melancholy,
    WonderSurprised,
    SerenePeaceful,
    ConfidentSmirk,
    BattleFury,
    EmotionalTearful,
}

impl TraitAxis for Expression {
    const ALL: &'static [Self] = &[
        Self::NeutralCalm,
        Self::FierceDetermined,
        Self::WarmSmile,
        Self::SinisterEvil,
        Self::Melancholy,
        Self::WonderSurprised,
        Self::SerenePeaceful,
        Self::ConfidentSmirk,
        Self::BattleFury,
        Self::EmotionalTearful,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NeutralCalm => "Neutral / Calm",
            Self::FierceDetermined => "Fierce / Determined",
            Self::WarmSmile => "Warm Smile",
            Self::SinisterEvil => "Sinister / Evil",
            Self::Melancholy => "Melancholy",
            Self::WonderSurprised => "Wonder / Surprised",
            Self::SerenePeaceful => "Serene / Peaceful",
            Self::ConfidentSmirk => "Confident Smirk",
            Self::BattleFury => "Battle Fury",
            Self::EmotionalTearful => "Emotional / Tearful",
        }
    }
}

impl Descriptive for Expression {
    fn phrase(self) -> &'static str {
        match self {
            Self::NeutralCalm => "calm neutral expression, composed",
            Self::FierceDetermined => "fierce determined expression, intense focus",
            Self::WarmSmile => "warm gentle smile, friendly",
            Self::SinisterEvil => "sinister evil smirk, menacing",
            Self::Melancholy => "melancholy sorrowful eyes, contemplative",
            Self::WonderSurprised => "expression of wonder, wide eyes, amazed",
            Self::SerenePeaceful => "serene peaceful expression, tranquil",
            Self::ConfidentSmirk => "confident smirk, self-assured, charismatic",
            Self::BattleFury => "battle rage, furious intense, war cry",
            Self::EmotionalTearful => "emotional tearful eyes, deeply moved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outfit {
    FantasyArmor,
    MageRobes,
    ElegantDress,
    CasualModern,
    BusinessFormal,
    SchoolUniform,
    MilitaryTactical,
    FuturisticSciFi,
    Steampunk,
    Traditional,
    RoyalAristocratic,
    GothicDark,
    MartialArtist,
    LightMinimal,
    NatureDruid,
}

impl TraitAxis for Outfit {
    const ALL: &'static [Self] = &[
        Self::FantasyArmor,
        Self::MageRobes,
        Self::ElegantDress,
        Self::CasualModern,
        Self::BusinessFormal,
        Self::SchoolUniform,
        Self::MilitaryTactical,
        Self::FuturisticSciFi,
        Self::Steampunk,
        Self::Traditional,
        Self::RoyalAristocratic,
        Self::GothicDark,
        Self::MartialArtist,
        Self::LightMinimal,
        Self::NatureDruid,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::FantasyArmor => "Fantasy Armor",
            Self::MageRobes => "Mage Robes",
            Self::ElegantDress => "Elegant Dress",
            Self::CasualModern => "Casual Modern",
            Self::BusinessFormal => "Business Formal",
            Self::SchoolUniform => "School Uniform",
            Self::MilitaryTactical => "Military Tactical",
            Self::FuturisticSciFi => "Futuristic Sci-Fi",
            Self::Steampunk => "Steampunk",
            Self::Traditional => "Traditional",
            Self::RoyalAristocratic => "Royal / Aristocratic",
            Self::GothicDark => "Gothic Dark",
            Self::MartialArtist => "Martial Artist",
            Self::LightMinimal => "Light / Minimal",
            Self::NatureDruid => "Nature / Druid",
        }
    }
}

impl Descriptive for Outfit {
    fn phrase(self) -> &'static str {
        match self {
            Self::FantasyArmor => {
                "detailed fantasy plate armor, intricate engravings, battle-worn steel"
            }
            Self::MageRobes => "flowing mystical robes, arcane sigils, enchanted fabric",
            Self::ElegantDress => "elegant flowing gown, beautiful formal attire",
            Self::CasualModern => "casual modern outfit, contemporary streetwear",
            Self::BusinessFormal => "business suit, sharp tailored professional attire",
            Self::SchoolUniform => "school uniform, academic student clothing",
            Self::MilitaryTactical => "military tactical gear, combat uniform",
            Self::FuturisticSciFi => "futuristic tech suit, neon accent armor, high-tech",
            Self::Steampunk => "steampunk outfit, brass gears, goggles, Victorian-industrial",
            Self::Traditional => "traditional cultural outfit, ethnic heritage dress",
            Self::RoyalAristocratic => "royal garments, crown jewels, opulent noble clothing",
            Self::GothicDark => "gothic dark fashion, black lace, alternative elegance",
            Self::MartialArtist => "martial arts training outfit, warrior discipline",
            Self::LightMinimal => "light minimal tunic, simple unarmored clothing",
            Self::NatureDruid => "nature-woven druidic garments, leaves and vines",
        }
    }
}
