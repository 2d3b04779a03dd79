//! Physical appearance axes: body type, hair and eyes.

use super::{Descriptive, TraitAxis};

// ---------------------------------------------------------------------------
// Body type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyType {
    Athletic,
    SlimPetite,
    Curvy,
    Muscular,
    LeanTall,
    Stocky,
    Ethereal,
}

impl TraitAxis for BodyType {
    const ALL: &'static [Self] = &[
        Self::Athletic,
        Self::SlimPetite,
        Self::Curvy,
        Self::Muscular,
        Self::LeanTall,
        Self::Stocky,
        Self::Ethereal,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Athletic => "Athletic",
            Self::SlimPetite => "Slim / Petite",
            Self::Curvy => "Curvy",
            Self::Muscular => "Muscular",
            Self::LeanTall => "Lean / Tall",
            Self::Stocky => "Stocky",
            Self::Ethereal => "Ethereal",
        }
    }
}

impl Descriptive for BodyType {
    fn phrase(self) -> &'static str {
        match self {
            Self::Athletic => "athletic build, toned body, fit physique, defined muscles",
            Self::SlimPetite => "slim figure, slender, petite, delicate build",
            Self::Curvy => "curvy figure, hourglass silhouette, voluptuous",
            Self::Muscular => "muscular build, powerful physique, broad shoulders",
            Self::LeanTall => "tall lean figure, model proportions, long limbs",
            Self::Stocky => "stocky build, compact, broad solid frame",
            Self::Ethereal => "ethereal figure, otherworldly proportions, supernatural grace",
        }
    }
}

// ---------------------------------------------------------------------------
// Hair
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HairStyle {
    ShortNeat,
    LongFlowing,
    Wavy,
    CurlyNatural,
    Afro,
    Braided,
    Bun,
    Ponytail,
    BobCut,
    Undercut,
    Spiky,
    Bald,
    Dreadlocks,
    PixieCut,
    HalfUp,
    TwinTails,
}

impl TraitAxis for HairStyle {
    const ALL: &'static [Self] = &[
        Self::ShortNeat,
        Self::LongFlowing,
        Self::Wavy,
        Self::CurlyNatural,
        Self::Afro,
        Self::Braided,
        Self::Bun,
        Self::Ponytail,
        Self::BobCut,
        Self::Undercut,
        Self::Spiky,
        Self::Bald,
        Self::Dreadlocks,
        Self::PixieCut,
        Self::HalfUp,
        Self::TwinTails,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::ShortNeat => "Short & Neat",
            Self::LongFlowing => "Long & Flowing",
            Self::Wavy => "Wavy / Beachy",
            Self::CurlyNatural => "Curly Natural",
            Self::Afro => "Afro",
            Self::Braided => "Braided",
            Self::Bun => "Bun / Updo",
            Self::Ponytail => "Ponytail",
            Self::BobCut => "Bob Cut",
            Self::Undercut => "Undercut / Fade",
            Self::Spiky => "Spiky / Anime",
            Self::Bald => "Bald / Shaved",
            Self::Dreadlocks => "Dreadlocks",
            Self::PixieCut => "Pixie Cut",
            Self::HalfUp => "Half-Up Half-Down",
            Self::TwinTails => "Twin Tails",
        }
    }
}

impl Descriptive for HairStyle {
    fn phrase(self) -> &'static str {
        match self {
            Self::ShortNeat => "short neat hair, clean cut",
            Self::LongFlowing => "long flowing hair, silky smooth",
            Self::Wavy => "wavy hair, beach waves",
            Self::CurlyNatural => "curly hair, natural curls, defined ringlets",
            Self::Afro => "large natural afro, voluminous afro hair",
            Self::Braided => "intricate braided hair, cornrows",
            Self::Bun => "elegant hair bun, sophisticated updo",
            Self::Ponytail => "sleek high ponytail",
            Self::BobCut => "sharp bob cut, chin-length",
            Self::Undercut => "undercut hairstyle, shaved sides, fade",
            Self::Spiky => "spiky wild hair, dramatic anime spikes",
            Self::Bald => "bald head, shaved smooth scalp",
            Self::Dreadlocks => "long dreadlocks, loc hairstyle",
            Self::PixieCut => "pixie cut, very short stylish",
            Self::HalfUp => "half-up half-down, elegant style",
            Self::TwinTails => "twin tails, two symmetrical ponytails",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HairColor {
    JetBlack,
    DarkBrown,
    ChestnutBrown,
    GoldenBlonde,
    PlatinumSilver,
    RedAuburn,
    PureWhite,
    VividBlue,
    VividPurple,
    VividPink,
    VividGreen,
    OmbreRainbow,
    AshGrey,
}

impl TraitAxis for HairColor {
    const ALL: &'static [Self] = &[
        Self::JetBlack,
        Self::DarkBrown,
        Self::ChestnutBrown,
        Self::GoldenBlonde,
        Self::PlatinumSilver,
        Self::RedAuburn,
        Self::PureWhite,
        Self::VividBlue,
        Self::VividPurple,
        Self::VividPink,
        Self::VividGreen,
        Self::OmbreRainbow,
        Self::AshGrey,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::JetBlack => "Jet Black",
            Self::DarkBrown => "Dark Brown",
            Self::ChestnutBrown => "Chestnut Brown",
            Self::GoldenBlonde => "Golden Blonde",
            Self::PlatinumSilver => "Platinum / Silver",
            Self::RedAuburn => "Red / Auburn",
            Self::PureWhite => "Pure White",
            Self::VividBlue => "Vivid Blue",
            Self::VividPurple => "Vivid Purple",
            Self::VividPink => "Vivid Pink",
            Self::VividGreen => "Vivid Green",
            Self::OmbreRainbow => "Ombre / Rainbow",
            Self::AshGrey => "Ash Grey",
        }
    }
}

impl Descriptive for HairColor {
    fn phrase(self) -> &'static str {
        match self {
            Self::JetBlack => "jet black hair",
            Self::DarkBrown => "dark brown hair",
            Self::ChestnutBrown => "chestnut brown warm hair",
            Self::GoldenBlonde => "golden blonde hair",
            Self::PlatinumSilver => "platinum silver hair",
            Self::RedAuburn => "auburn red fiery hair",
            Self::PureWhite => "pure white hair",
            Self::VividBlue => "vivid electric blue dyed hair",
            Self::VividPurple => "vivid violet purple dyed hair",
            Self::VividPink => "vivid hot pink dyed hair",
            Self::VividGreen => "vivid neon green dyed hair",
            Self::OmbreRainbow => "ombre multicolored rainbow gradient hair",
            Self::AshGrey => "ash grey hair, salt and pepper",
        }
    }
}

// ---------------------------------------------------------------------------
// Eyes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyeStyle {
    NaturalRealistic,
    LargeAnime,
    SharpIntense,
    GentleSoft,
    Heterochromia,
    GlowingMagical,
    Cybernetic,
    ClosedSerene,
}

impl TraitAxis for EyeStyle {
    const ALL: &'static [Self] = &[
        Self::NaturalRealistic,
        Self::LargeAnime,
        Self::SharpIntense,
        Self::GentleSoft,
        Self::Heterochromia,
        Self::GlowingMagical,
        Self::Cybernetic,
        Self::ClosedSerene,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NaturalRealistic => "Natural Realistic",
            Self::LargeAnime => "Large Anime",
            Self::SharpIntense => "Sharp Intense",
            Self::GentleSoft => "Gentle & Soft",
            Self::Heterochromia => "Heterochromia",
            Self::GlowingMagical => "Glowing Magical",
            Self::Cybernetic => "Cybernetic",
            Self::ClosedSerene => "Closed / Serene",
        }
    }
}

impl Descriptive for EyeStyle {
    fn phrase(self) -> &'static str {
        match self {
            Self::NaturalRealistic => "natural realistic detailed eyes",
            Self::LargeAnime => "large expressive anime eyes, detailed iris",
            Self::SharpIntense => "sharp intense piercing eyes, fierce gaze",
            Self::GentleSoft => "gentle soft warm eyes, kind expression",
            Self::Heterochromia => "heterochromia, two different colored eyes",
            Self::GlowingMagical => "glowing luminous magical eyes",
            Self::Cybernetic => "cybernetic eye implant, mechanical HUD eye",
            Self::ClosedSerene => "closed eyes, serene peaceful",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EyeColor {
    Brown,
    Blue,
    Green,
    Black,
    Grey,
    Amber,
    Red,
    Purple,
    White,
    Teal,
    Multi,
}

impl TraitAxis for EyeColor {
    const ALL: &'static [Self] = &[
        Self::Brown,
        Self::Blue,
        Self::Green,
        Self::Black,
        Self::Grey,
        Self::Amber,
        Self::Red,
        Self::Purple,
        Self::White,
        Self::Teal,
        Self::Multi,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Brown => "Brown",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Black => "Black",
            Self::Grey => "Grey",
            Self::Amber => "Amber",
            Self::Red => "Red",
            Self::Purple => "Purple",
            Self::White => "White",
            Self::Teal => "Teal",
            Self::Multi => "Multi",
        }
    }
}

impl Descriptive for EyeColor {
    fn phrase(self) -> &'static str {
        match self {
            Self::Brown => "brown eyes",
            Self::Blue => "blue eyes",
            Self::Green => "green eyes",
            Self::Black => "black eyes",
            Self::Grey => "grey eyes",
            Self::Amber => "amber golden eyes",
            Self::Red => "red glowing eyes",
            Self::Purple => "purple violet eyes",
            Self::White => "white glowing eyes",
            Self::Teal => "teal cyan eyes",
            Self::Multi => "gradient multicolor eyes",
        }
    }
}
