//! Rendering and scene axes: art style, quality preset, camera, lighting
//! and background.

use super::{DefaultedAxis, Descriptive, TraitAxis};

// ---------------------------------------------------------------------------
// Art style
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtStyle {
    AnimeSd15,
    AnimeRealisticSd15,
    PhotorealisticSd15,
    FantasyIllustrationSd15,
    DarkFantasySd15,
    CyberpunkSd15,
    Render3dSd15,
    AnimeSdxl,
    PhotorealisticSdxl,
    FantasyArtSdxl,
    DarkArtSdxl,
    CyberpunkSdxl,
}

impl TraitAxis for ArtStyle {
    const ALL: &'static [Self] = &[
        Self::AnimeSd15,
        Self::AnimeRealisticSd15,
        Self::PhotorealisticSd15,
        Self::FantasyIllustrationSd15,
        Self::DarkFantasySd15,
        Self::CyberpunkSd15,
        Self::Render3dSd15,
        Self::AnimeSdxl,
        Self::PhotorealisticSdxl,
        Self::FantasyArtSdxl,
        Self::DarkArtSdxl,
        Self::CyberpunkSdxl,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::AnimeSd15 => "Anime SD1.5",
            Self::AnimeRealisticSd15 => "Anime SD1.5 (Realistic)",
            Self::PhotorealisticSd15 => "Photorealistic SD1.5",
            Self::FantasyIllustrationSd15 => "Fantasy Illustration SD1.5",
            Self::DarkFantasySd15 => "Dark Fantasy SD1.5",
            Self::CyberpunkSd15 => "Cyberpunk SD1.5",
            Self::Render3dSd15 => "3D Render SD1.5",
            Self::AnimeSdxl => "Anime SDXL",
            Self::PhotorealisticSdxl => "Photorealistic SDXL",
            Self::FantasyArtSdxl => "Fantasy Art SDXL",
            Self::DarkArtSdxl => "Dark Art SDXL",
            Self::CyberpunkSdxl => "Cyberpunk SDXL",
        }
    }
}

impl Descriptive for ArtStyle {
    fn phrase(self) -> &'static str {
        match self {
            Self::AnimeSd15 => {
                "anime style, manga art, cel shading, clean lineart, vibrant colors, \
                 studio ghibli quality, highly detailed anime, 2d illustration"
            }
            Self::AnimeRealisticSd15 => {
                "anime realism, semi-realistic anime, detailed shading, \
                 complex lighting, anime girl detailed, high quality render"
            }
            Self::PhotorealisticSd15 => {
                "RAW photo, photorealistic, hyperrealistic, 8k uhd, DSLR, \
                 soft lighting, high quality, film grain, Fujifilm XT3"
            }
            Self::FantasyIllustrationSd15 => {
                "fantasy art, epic illustration, painterly style, \
                 Greg Rutkowski, Artgerm, detailed, trending on ArtStation"
            }
            Self::DarkFantasySd15 => {
                "dark fantasy art, gothic style, dramatic lighting, \
                 ominous atmosphere, detailed shadows, sinister mood"
            }
            Self::CyberpunkSd15 => {
                "cyberpunk art, neon aesthetic, blade runner style, \
                 futuristic, glowing neon lights, sci-fi detailed"
            }
            Self::Render3dSd15 => {
                "3D render, octane render, blender cycles, \
                 subsurface scattering, PBR materials, studio lighting, 4k"
            }
            Self::AnimeSdxl => {
                "anime style, official art, beautiful detailed eyes, best quality, \
                 ultra-detailed, absurdres, highres, sharp focus, \
                 vibrant, clean lines, expressive"
            }
            Self::PhotorealisticSdxl => {
                "photorealistic, hyperrealistic, cinematic photography, \
                 8k resolution, sharp details, professional lighting, \
                 skin texture, depth of field, bokeh"
            }
            Self::FantasyArtSdxl => {
                "epic fantasy digital art, highly detailed, dramatic composition, \
                 masterful lighting, intricate details, painterly realism, \
                 concept art quality, professional illustration"
            }
            Self::DarkArtSdxl => {
                "dark moody digital painting, atmospheric, chiaroscuro lighting, \
                 highly detailed, dramatic shadows, painterly, fine art quality"
            }
            Self::CyberpunkSdxl => {
                "cyberpunk neon digital art, ultra detailed, atmospheric haze, \
                 holographic elements, rain reflections, neon glow, \
                 futuristic aesthetic, cinematic"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Quality preset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityPreset {
    Maximum,
    Balanced,
    AnimeMax,
    PhotoMax,
    SdxlMax,
}

impl TraitAxis for QualityPreset {
    const ALL: &'static [Self] = &[
        Self::Maximum,
        Self::Balanced,
        Self::AnimeMax,
        Self::PhotoMax,
        Self::SdxlMax,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Maximum => "Maximum",
            Self::Balanced => "Balanced",
            Self::AnimeMax => "Anime Max",
            Self::PhotoMax => "Photo Max",
            Self::SdxlMax => "SDXL Max",
        }
    }
}

impl DefaultedAxis for QualityPreset {
    const DEFAULT: Self = Self::Maximum;
}

impl Descriptive for QualityPreset {
    fn phrase(self) -> &'static str {
        match self {
            Self::Maximum => {
                "masterpiece, best quality, ultra-detailed, ultra-highres, \
                 sharp focus, intricate details, 8k resolution, \
                 perfect anatomy, detailed eyes, detailed hair, \
                 professional artwork, award-winning"
            }
            Self::Balanced => {
                "masterpiece, best quality, detailed, sharp focus, highres, \
                 good anatomy, professional"
            }
            Self::AnimeMax => {
                "masterpiece, best quality, ultra-detailed, beautiful detailed eyes, \
                 beautiful detailed hair, absurdres, highres, \
                 official art, extremely detailed CG unity 8k wallpaper, \
                 perfect face, detailed background"
            }
            Self::PhotoMax => {
                "RAW photo, best quality, photorealistic, 8k uhd, dslr, \
                 soft lighting, high quality, film grain, Fujifilm XT3, \
                 intricate, highly detailed, sharp focus"
            }
            Self::SdxlMax => {
                "best quality, masterpiece, ultra highres, \
                 incredibly detailed, sharp focus, perfect anatomy, \
                 perfect composition, professional, award winning"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Camera angle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraAngle {
    PortraitCloseUp,
    HeadAndShoulders,
    UpperBody,
    FullBodyStanding,
    DynamicActionPose,
    LowAngleEpic,
    BirdsEye,
    SideProfile,
    BackView,
}

impl TraitAxis for CameraAngle {
    const ALL: &'static [Self] = &[
        Self::PortraitCloseUp,
        Self::HeadAndShoulders,
        Self::UpperBody,
        Self::FullBodyStanding,
        Self::DynamicActionPose,
        Self::LowAngleEpic,
        Self::BirdsEye,
        Self::SideProfile,
        Self::BackView,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::PortraitCloseUp => "Portrait Close-Up",
            Self::HeadAndShoulders => "Head & Shoulders",
            Self::UpperBody => "Upper Body (3/4)",
            Self::FullBodyStanding => "Full Body Standing",
            Self::DynamicActionPose => "Dynamic Action Pose",
            Self::LowAngleEpic => "Low Angle Epic",
            Self::BirdsEye => "Bird's Eye",
            Self::SideProfile => "Side Profile",
            Self::BackView => "Back View",
        }
    }
}

impl Descriptive for CameraAngle {
    fn phrase(self) -> &'static str {
        match self {
            Self::PortraitCloseUp => {
                "extreme close-up portrait shot, face filling frame, intimate framing, \
                 shallow depth of field, bokeh background, face closeup"
            }
            Self::HeadAndShoulders => {
                "head and shoulders portrait, bust shot, upper chest visible, \
                 classic portrait framing, face and neck clearly visible"
            }
            Self::UpperBody => {
                "upper body shot, waist up, three quarter view, \
                 torso and face visible, medium shot framing"
            }
            Self::FullBodyStanding => {
                "full body shot, entire figure visible from head to toe, \
                 standing pose, full character view, wide shot"
            }
            Self::DynamicActionPose => {
                "dynamic action pose, dramatic composition, mid-motion, \
                 powerful stance, energy and movement, hero pose"
            }
            Self::LowAngleEpic => {
                "low angle shot, shot from below, worm eye view, \
                 looking up at character, epic imposing perspective, dramatic upward angle"
            }
            Self::BirdsEye => {
                "overhead shot, bird eye view, top down perspective, \
                 looking down at character from above"
            }
            Self::SideProfile => {
                "side view, profile shot, lateral view, \
                 character facing sideways, silhouette visible"
            }
            Self::BackView => {
                "shot from behind, back view, character facing away, \
                 rear perspective, back of character visible"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Lighting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lighting {
    CinematicDramatic,
    StudioSoft,
    GoldenHour,
    Moonlight,
    NeonCyberpunk,
    RimBackLight,
    FireTorch,
    DivineHoly,
    DarkMoody,
    ColdIce,
}

impl TraitAxis for Lighting {
    const ALL: &'static [Self] = &[
        Self::CinematicDramatic,
        Self::StudioSoft,
        Self::GoldenHour,
        Self::Moonlight,
        Self::NeonCyberpunk,
        Self::RimBackLight,
        Self::FireTorch,
        Self::DivineHoly,
        Self::DarkMoody,
        Self::ColdIce,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::CinematicDramatic => "Cinematic Dramatic",
            Self::StudioSoft => "Studio Soft",
            Self::GoldenHour => "Golden Hour",
            Self::Moonlight => "Moonlight / Night",
            Self::NeonCyberpunk => "Neon / Cyberpunk",
            Self::RimBackLight => "Rim / Back Light",
            Self::FireTorch => "Fire / Torch",
            Self::DivineHoly => "Divine / Holy",
            Self::DarkMoody => "Dark & Moody",
            Self::ColdIce => "Cold / Ice",
        }
    }
}

impl Descriptive for Lighting {
    fn phrase(self) -> &'static str {
        match self {
            Self::CinematicDramatic => {
                "cinematic dramatic lighting, professional film lighting, \
                 deep shadows and highlights, dramatic chiaroscuro, \
                 volumetric light rays, high contrast cinematic look"
            }
            Self::StudioSoft => {
                "soft studio lighting, professional portrait lighting, \
                 softbox light, diffused even illumination, clean studio setup, \
                 catch lights in eyes, flattering portrait light"
            }
            Self::GoldenHour => {
                "golden hour sunlight, warm orange golden glow, \
                 magic hour photography, sun low on horizon, \
                 warm backlit, lens flare, romantic warm tones"
            }
            Self::Moonlight => {
                "nighttime moonlight, cool blue silver light, \
                 moonlit scene, dark sky, atmospheric night, \
                 stars in background, mysterious night ambiance"
            }
            Self::NeonCyberpunk => {
                "vivid neon lights, colorful neon glow, cyberpunk atmosphere, \
                 purple and cyan neon reflections, electric glow, \
                 wet street reflections, colorful urban night"
            }
            Self::RimBackLight => {
                "dramatic rim lighting, strong backlight halo effect, \
                 glowing outline around subject, edge light highlight, \
                 silhouette with rim glow, separation from background"
            }
            Self::FireTorch => {
                "warm flickering fire light, orange torchlight glow, \
                 dramatic firelight shadows, warm ember tones, \
                 dynamic fire illumination, warm red orange lighting"
            }
            Self::DivineHoly => {
                "divine heavenly light, holy god rays shining down, \
                 golden sacred luminescence, ethereal radiant glow, \
                 heavenly illumination, soft white divine light"
            }
            Self::DarkMoody => {
                "dark moody low-key lighting, noir style, \
                 deep dramatic shadows, mysterious atmosphere, \
                 minimal light, high contrast dark aesthetic"
            }
            Self::ColdIce => {
                "cold icy blue lighting, frigid frozen atmosphere, \
                 stark blue-white tones, winter cold light, \
                 crystalline clear lighting, cold harsh illumination"
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Background
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    CleanStudio,
    GradientAbstract,
    EpicFantasyLand,
    UrbanCity,
    NatureForest,
    SpaceCosmos,
    DarkDungeon,
    CyberpunkCity,
    RoyalPalace,
    Battlefield,
    MagicalAbstract,
    JapaneseGarden,
}

impl TraitAxis for Background {
    const ALL: &'static [Self] = &[
        Self::CleanStudio,
        Self::GradientAbstract,
        Self::EpicFantasyLand,
        Self::UrbanCity,
        Self::NatureForest,
        Self::SpaceCosmos,
        Self::DarkDungeon,
        Self::CyberpunkCity,
        Self::RoyalPalace,
        Self::Battlefield,
        Self::MagicalAbstract,
        Self::JapaneseGarden,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::CleanStudio => "Clean / Studio",
            Self::GradientAbstract => "Gradient Abstract",
            Self::EpicFantasyLand => "Epic Fantasy Land",
            Self::UrbanCity => "Urban City",
            Self::NatureForest => "Nature / Forest",
            Self::SpaceCosmos => "Space / Cosmos",
            Self::DarkDungeon => "Dark Dungeon",
            Self::CyberpunkCity => "Cyberpunk City",
            Self::RoyalPalace => "Royal Palace",
            Self::Battlefield => "Battlefield",
            Self::MagicalAbstract => "Magical Abstract",
            Self::JapaneseGarden => "Japanese Garden",
        }
    }
}

impl Descriptive for Background {
    fn phrase(self) -> &'static str {
        match self {
            Self::CleanStudio => {
                "clean white seamless studio background, minimal environment, \
                 professional photo backdrop, pure white background"
            }
            Self::GradientAbstract => {
                "smooth color gradient background, abstract artistic backdrop, \
                 soft blended colors, aesthetic gradient"
            }
            Self::EpicFantasyLand => {
                "epic fantasy landscape background, dramatic mountain range, \
                 mystical ancient environment, sweeping fantasy vistas, \
                 dramatic cloudy sky, fog in valleys"
            }
            Self::UrbanCity => {
                "urban city background, city street level, \
                 modern buildings and architecture, busy metropolitan area, \
                 city life backdrop"
            }
            Self::NatureForest => {
                "lush ancient forest background, towering trees, \
                 dappled sunlight through leaves, verdant green nature, \
                 peaceful woodland environment"
            }
            Self::SpaceCosmos => {
                "deep outer space background, colorful nebula, \
                 thousands of distant stars, cosmic universe, \
                 galaxy backdrop, interstellar environment"
            }
            Self::DarkDungeon => {
                "dark stone dungeon background, ancient underground ruins, \
                 torchlit stone walls, ominous dark cavern, \
                 medieval dungeon environment, flickering torch shadows"
            }
            Self::CyberpunkCity => {
                "cyberpunk city skyline background, neon signs everywhere, \
                 rain-soaked reflective streets, futuristic urban sprawl, \
                 holographic advertisements, dense neon-lit megacity"
            }
            Self::RoyalPalace => {
                "grand palace interior background, massive marble columns, \
                 opulent throne room, royal gold decor, \
                 cathedral ceiling, regal aristocratic environment"
            }
            Self::Battlefield => {
                "epic battlefield background, massive armies clashing, \
                 dramatic stormy war sky, smoke and fire, \
                 epic scale warfare, historical battle scene"
            }
            Self::MagicalAbstract => {
                "magical ethereal background, swirling mystical energy, \
                 glowing magical particles, otherworldly void, \
                 arcane spell effects, fantasy magical environment"
            }
            Self::JapaneseGarden => {
                "serene traditional Japanese garden background, \
                 cherry blossom petals falling, zen pond and bridge, \
                 bamboo and stone lanterns, peaceful tranquil atmosphere"
            }
        }
    }
}
