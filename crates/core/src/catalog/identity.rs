//! Lockdown axes: gender, age group and ethnicity.
//!
//! Each entry carries anchor tokens (weighted individually), reference
//! phrases (weighted as a whole) and the negative phrase for the axis.

use super::{DefaultedAxis, TraitAxis};

/* --------------------------------------------------------------------------
Gender
-------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    NonBinary,
    Android,
}

/// Gender lockdown data.
#[derive(Debug)]
pub struct GenderEntry {
    /// Identity nouns; never empty.
    pub anchors: &'static [&'static str],
    pub body_ref: &'static str,
    pub face_ref: &'static str,
    pub negative: &'static str,
}

const FEMALE: GenderEntry = GenderEntry {
    anchors: &["woman", "female", "girl"],
    body_ref: "female body, feminine figure, feminine physique",
    face_ref: "feminine face, female facial features, soft features",
    negative: "male, man, boy, masculine, beard, mustache, male body, \
               flat chest, male face, macho",
};

const MALE: GenderEntry = GenderEntry {
    anchors: &["man", "male", "boy"],
    body_ref: "male body, masculine figure, masculine physique",
    face_ref: "masculine face, male facial features, strong jawline, \
               defined cheekbones",
    negative: "female, woman, girl, feminine, female body, breasts, \
               feminine face, girly",
};

const NON_BINARY: GenderEntry = GenderEntry {
    anchors: &["androgynous person", "non-binary individual"],
    body_ref: "androgynous figure, neutral body proportions",
    face_ref: "androgynous face, soft neutral features",
    negative: "strongly masculine, strongly feminine, exaggerated gender",
};

const ANDROID: GenderEntry = GenderEntry {
    anchors: &["android", "humanoid robot", "synthetic being"],
    body_ref: "mechanical body, synthetic frame, robotic physique",
    face_ref: "synthetic face, mechanical features, artificial skin",
    negative: "organic skin, human skin texture, biological features",
};

impl TraitAxis for Gender {
    const ALL: &'static [Self] = &[Self::Female, Self::Male, Self::NonBinary, Self::Android];

    fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::NonBinary => "Non-Binary",
            Self::Android => "Android / Robot",
        }
    }
}

impl DefaultedAxis for Gender {
    const DEFAULT: Self = Self::Female;
}

impl Gender {
    pub fn entry(self) -> &'static GenderEntry {
        match self {
            Self::Female => &FEMALE,
            Self::Male => &MALE,
            Self::NonBinary => &NON_BINARY,
            Self::Android => &ANDROID,
        }
    }
}

/* --------------------------------------------------------------------------
Age group
-------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    Child,
    Teen,
    YoungAdult,
    Adult,
    Prime,
    MiddleAged,
    Elder,
}

/// Age lockdown data.
#[derive(Debug)]
pub struct AgeEntry {
    /// Age nouns; never empty.
    pub anchors: &'static [&'static str],
    pub age_ref: &'static str,
    pub face_ref: &'static str,
    pub negative: &'static str,
}

const CHILD: AgeEntry = AgeEntry {
    anchors: &["child", "kid", "young child"],
    age_ref: "8 years old, prepubescent, small child body, short stature",
    face_ref: "childlike face, innocent round face, child facial features, chubby cheeks",
    negative: "adult, mature, man, woman, muscular, beard, wrinkles, \
               adult body, adult face, old, teenager",
};

const TEEN: AgeEntry = AgeEntry {
    anchors: &["teenager", "teen", "adolescent"],
    age_ref: "16 years old, teenage body, youthful, pubescent",
    face_ref: "teenage face, young adolescent face, teen facial features, youthful skin",
    negative: "adult, mature adult, child, elderly, wrinkles, aged, \
               fully grown adult, middle aged",
};

const YOUNG_ADULT: AgeEntry = AgeEntry {
    anchors: &["young adult", "young man", "young woman"],
    age_ref: "20 years old, early twenties, young adult body, youthful",
    face_ref: "young adult face, smooth skin, youthful mature face, vibrant complexion",
    negative: "child, elderly, aged, wrinkles, old, middle aged, teen",
};

const ADULT: AgeEntry = AgeEntry {
    anchors: &["adult", "man", "woman"],
    age_ref: "28 years old, prime adult, mature body, confident",
    face_ref: "mature adult face, confident expression, slight maturity lines",
    negative: "child, elderly, very old, aged heavily, teen, teenager",
};

const PRIME: AgeEntry = AgeEntry {
    anchors: &["mature adult", "experienced adult"],
    age_ref: "40 years old, prime of life, distinguished, experienced",
    face_ref: "mature distinguished face, subtle age lines, experienced look",
    negative: "child, teen, very young, elderly, ancient, frail",
};

const MIDDLE_AGED: AgeEntry = AgeEntry {
    anchors: &["middle-aged", "mature person"],
    age_ref: "50 years old, middle age, greying temples, dignified",
    face_ref: "middle-aged face, visible age lines, distinguished mature look",
    negative: "child, teen, young adult, elderly frail, ancient",
};

const ELDER: AgeEntry = AgeEntry {
    anchors: &["elderly", "old person", "senior"],
    age_ref: "65 years old, elderly, aged body, white or grey hair",
    face_ref: "elderly face, deep wisdom lines, aged skin, elder features",
    negative: "child, teen, young adult, smooth skin, youthful face",
};

impl TraitAxis for AgeGroup {
    const ALL: &'static [Self] = &[
        Self::Child,
        Self::Teen,
        Self::YoungAdult,
        Self::Adult,
        Self::Prime,
        Self::MiddleAged,
        Self::Elder,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Child => "Child (8-12)",
            Self::Teen => "Teen (14-17)",
            Self::YoungAdult => "Young Adult (18-24)",
            Self::Adult => "Adult (25-35)",
            Self::Prime => "Prime (36-45)",
            Self::MiddleAged => "Middle-aged (46-55)",
            Self::Elder => "Elder (60+)",
        }
    }
}

impl DefaultedAxis for AgeGroup {
    const DEFAULT: Self = Self::YoungAdult;
}

impl AgeGroup {
    pub fn entry(self) -> &'static AgeEntry {
        match self {
            Self::Child => &CHILD,
            Self::Teen => &TEEN,
            Self::YoungAdult => &YOUNG_ADULT,
            Self::Adult => &ADULT,
            Self::Prime => &PRIME,
            Self::MiddleAged => &MIDDLE_AGED,
            Self::Elder => &ELDER,
        }
    }

    /// Child and teen brackets get the gender-emphasis clamp.
    pub fn is_minor(self) -> bool {
        matches!(self, Self::Child | Self::Teen)
    }
}

/* --------------------------------------------------------------------------
Ethnicity
-------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ethnicity {
    NoPreference,
    EastAsian,
    SouthAsian,
    SoutheastAsian,
    African,
    MiddleEastern,
    European,
    Latino,
    Mixed,
}

/// Ethnicity lockdown data.
///
/// An entry with no anchors skips the lockdown block entirely. Empty
/// natural-colour sets disable conflict detection on that axis.
#[derive(Debug)]
pub struct EthnicityEntry {
    pub anchors: &'static [&'static str],
    pub skin_ref: &'static str,
    pub face_ref: &'static str,
    /// Lower-case substrings of hair-colour phrases typical for the group.
    pub natural_hair: &'static [&'static str],
    /// Lower-case substrings of eye-colour phrases typical for the group.
    pub natural_eyes: &'static [&'static str],
    pub negative: &'static str,
}

const NO_PREFERENCE: EthnicityEntry = EthnicityEntry {
    anchors: &[],
    skin_ref: "",
    face_ref: "",
    natural_hair: &[],
    natural_eyes: &[],
    negative: "",
};

const EAST_ASIAN: EthnicityEntry = EthnicityEntry {
    anchors: &["East Asian", "Asian person"],
    skin_ref: "fair porcelain skin, East Asian complexion, light beige skin tone",
    face_ref: "East Asian facial features, almond-shaped eyes, high cheekbones, \
               soft facial structure, monolid eyes, Korean Japanese Chinese features",
    natural_hair: &["black", "dark brown", "brown"],
    natural_eyes: &["dark brown", "black", "brown"],
    negative: "European features, African features, dark brown skin, \
               deep skin tone, caucasian face",
};

const SOUTH_ASIAN: EthnicityEntry = EthnicityEntry {
    anchors: &["South Asian", "Indian person"],
    skin_ref: "warm brown skin, South Asian complexion, medium tan skin tone",
    face_ref: "South Asian facial features, dark expressive eyes, \
               defined nose, warm brown complexion, Indian subcontinental features",
    natural_hair: &["black", "dark brown"],
    natural_eyes: &["dark brown", "black", "brown"],
    negative: "very fair skin, pale skin, European features, East Asian features",
};

const SOUTHEAST_ASIAN: EthnicityEntry = EthnicityEntry {
    anchors: &["Southeast Asian", "Filipino Thai Indonesian"],
    skin_ref: "warm golden tan complexion, Southeast Asian skin tone",
    face_ref: "Southeast Asian facial features, warm golden complexion, \
               soft rounded features, tropical complexion",
    natural_hair: &["black", "dark brown"],
    natural_eyes: &["dark brown", "black"],
    negative: "pale skin, very fair European features, African features",
};

const AFRICAN: EthnicityEntry = EthnicityEntry {
    anchors: &["Black person", "African", "dark skinned"],
    skin_ref: "rich dark melanin skin, deep ebony complexion, \
               beautiful dark skin tone, Black African complexion",
    face_ref: "African facial features, broad nose, full lips, \
               strong facial structure, Black facial features",
    natural_hair: &["black", "dark brown"],
    natural_eyes: &["dark brown", "black", "brown"],
    negative: "pale skin, fair skin, light skin, European features, \
               Asian features, white skin",
};

const MIDDLE_EASTERN: EthnicityEntry = EthnicityEntry {
    anchors: &["Middle Eastern", "Arab person"],
    skin_ref: "olive tan skin, warm Mediterranean complexion, Middle Eastern skin tone",
    face_ref: "Middle Eastern facial features, defined sharp features, \
               olive complexion, strong nose, deep set eyes, Arab features",
    natural_hair: &["black", "dark brown", "brown"],
    natural_eyes: &["dark brown", "black", "brown", "green", "hazel"],
    negative: "very pale skin, East Asian features, African dark skin",
};

const EUROPEAN: EthnicityEntry = EthnicityEntry {
    anchors: &["European", "Caucasian"],
    skin_ref: "fair light skin, European complexion, pale to light skin tone",
    face_ref: "European facial features, light skin, Western facial structure, \
               Caucasian features, European bone structure",
    natural_hair: &["blonde", "brown", "red", "auburn", "black", "light brown"],
    natural_eyes: &["blue", "green", "grey", "brown", "hazel"],
    negative: "dark skin, very dark complexion, Asian features, African features",
};

const LATINO: EthnicityEntry = EthnicityEntry {
    anchors: &["Latino", "Hispanic"],
    skin_ref: "warm olive complexion, Latino skin tone, warm medium tan skin",
    face_ref: "Latino Hispanic facial features, warm olive skin, \
               mixed heritage features, expressive eyes",
    natural_hair: &["black", "dark brown", "brown"],
    natural_eyes: &["dark brown", "black", "brown", "hazel"],
    negative: "very pale Nordic features, purely East Asian features",
};

const MIXED: EthnicityEntry = EthnicityEntry {
    anchors: &["mixed race", "multiracial"],
    skin_ref: "mixed ethnicity complexion, blended heritage skin tone",
    face_ref: "multiracial facial features, mixed heritage appearance, \
               blended ethnic features",
    natural_hair: &[],
    natural_eyes: &[],
    negative: "",
};

impl TraitAxis for Ethnicity {
    const ALL: &'static [Self] = &[
        Self::NoPreference,
        Self::EastAsian,
        Self::SouthAsian,
        Self::SoutheastAsian,
        Self::African,
        Self::MiddleEastern,
        Self::European,
        Self::Latino,
        Self::Mixed,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NoPreference => "No Preference",
            Self::EastAsian => "East Asian",
            Self::SouthAsian => "South Asian",
            Self::SoutheastAsian => "Southeast Asian",
            Self::African => "African / Black",
            Self::MiddleEastern => "Middle Eastern",
            Self::European => "European",
            Self::Latino => "Latino / Hispanic",
            Self::Mixed => "Mixed",
        }
    }
}

impl DefaultedAxis for Ethnicity {
    const DEFAULT: Self = Self::NoPreference;
}

impl Ethnicity {
    pub fn entry(self) -> &'static EthnicityEntry {
        match self {
            Self::NoPreference => &NO_PREFERENCE,
            Self::EastAsian => &EAST_ASIAN,
            Self::SouthAsian => &SOUTH_ASIAN,
            Self::SoutheastAsian => &SOUTHEAST_ASIAN,
            Self::African => &AFRICAN,
            Self::MiddleEastern => &MIDDLE_EASTERN,
            Self::European => &EUROPEAN,
            Self::Latino => &LATINO,
            Self::Mixed => &MIXED,
        }
    }
}

impl EthnicityEntry {
    /// Whether this entry contributes a lockdown block at all.
    pub fn has_lockdown(&self) -> bool {
        !self.anchors.is_empty()
    }

    /// A hair phrase conflicts when the natural set is non-empty and none
    /// of its substrings appear in the lower-cased phrase.
    pub fn hair_conflicts(&self, hair_phrase: &str) -> bool {
        conflicts(self.natural_hair, hair_phrase)
    }

    /// Same rule as [`hair_conflicts`](Self::hair_conflicts), for eyes.
    pub fn eyes_conflict(&self, eye_phrase: &str) -> bool {
        conflicts(self.natural_eyes, eye_phrase)
    }
}

fn conflicts(natural: &[&str], phrase: &str) -> bool {
    let lowered = phrase.to_lowercase();
    !natural.is_empty() && !natural.iter().any(|n| lowered.contains(n))
}
