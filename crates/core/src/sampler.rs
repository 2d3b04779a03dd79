//! Sampler, scheduler, step count and CFG advice per art style.

use serde::Serialize;

use crate::catalog::{ArtStyle, TraitAxis};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplerRecommendation {
    pub sampler: &'static str,
    pub scheduler: &'static str,
    pub steps: u32,
    pub cfg: f64,
}

const fn rec(
    sampler: &'static str,
    scheduler: &'static str,
    steps: u32,
    cfg: f64,
) -> SamplerRecommendation {
    SamplerRecommendation {
        sampler,
        scheduler,
        steps,
        cfg,
    }
}

/// Used when the art style is absent or unrecognised.
pub const DEFAULT_RECOMMENDATION: SamplerRecommendation = rec("dpmpp_2m", "karras", 30, 7.5);

/// Recommendation for an art style.
pub fn recommend(style: Option<ArtStyle>) -> SamplerRecommendation {
    let Some(style) = style else {
        return DEFAULT_RECOMMENDATION;
    };
    match style {
        ArtStyle::AnimeSd15 => rec("dpmpp_2m", "karras", 28, 7.0),
        ArtStyle::AnimeRealisticSd15 => rec("dpmpp_2m", "karras", 30, 7.5),
        ArtStyle::PhotorealisticSd15 => rec("dpmpp_2m_sde", "karras", 30, 6.5),
        ArtStyle::FantasyIllustrationSd15 => rec("euler_a", "normal", 30, 8.0),
        ArtStyle::DarkFantasySd15 => rec("dpmpp_2m", "karras", 32, 8.5),
        ArtStyle::CyberpunkSd15 => rec("dpmpp_2m", "karras", 28, 7.5),
        ArtStyle::Render3dSd15 => rec("dpmpp_sde", "karras", 35, 7.0),
        ArtStyle::AnimeSdxl => rec("dpmpp_2m", "karras", 25, 7.0),
        ArtStyle::PhotorealisticSdxl => rec("dpmpp_2m_sde", "karras", 30, 6.0),
        ArtStyle::FantasyArtSdxl => rec("euler_a", "normal", 28, 8.0),
        ArtStyle::DarkArtSdxl => rec("dpmpp_2m", "karras", 30, 9.0),
        ArtStyle::CyberpunkSdxl => rec("dpmpp_2m", "karras", 28, 7.5),
    }
}

/// Recommendation for a raw art-style label.
pub fn recommend_for_label(label: &str) -> SamplerRecommendation {
    recommend(ArtStyle::from_label(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anime_sd15() {
        assert_eq!(
            recommend(Some(ArtStyle::AnimeSd15)),
            rec("dpmpp_2m", "karras", 28, 7.0)
        );
    }

    #[test]
    fn photoreal_styles_use_sde_sampler() {
        assert_eq!(recommend(Some(ArtStyle::PhotorealisticSd15)).sampler, "dpmpp_2m_sde");
        assert_eq!(recommend(Some(ArtStyle::PhotorealisticSdxl)).cfg, 6.0);
    }

    #[test]
    fn decorated_label_resolves() {
        assert_eq!(recommend_for_label("✨ Dark Art SDXL").cfg, 9.0);
        assert_eq!(recommend_for_label("🎮 3D Render SD1.5").steps, 35);
    }

    #[test]
    fn unknown_or_absent_uses_default() {
        assert_eq!(recommend(None), DEFAULT_RECOMMENDATION);
        assert_eq!(recommend_for_label("Watercolor"), DEFAULT_RECOMMENDATION);
        assert_eq!(DEFAULT_RECOMMENDATION.steps, 30);
    }

    #[test]
    fn every_style_has_positive_steps_and_cfg() {
        for style in ArtStyle::ALL {
            let r = recommend(Some(*style));
            assert!(r.steps > 0 && r.cfg > 0.0, "{style:?}");
        }
    }
}
