//! Output resolution and camera negative reinforcement per framing.

use serde::Serialize;

use crate::catalog::{CameraAngle, TraitAxis};
use crate::text::{join_blocks, non_empty_trimmed};

/// Both output dimensions are snapped to this grid.
pub const LATENT_GRID: u32 = 64;

/// Pixel-to-latent downscale factor.
pub const LATENT_SCALE: u32 = 8;

/// Latent channels of the supported model families.
pub const LATENT_CHANNELS: u32 = 4;

/// Framing used when a camera label matches nothing.
pub const DEFAULT_CAMERA: CameraAngle = CameraAngle::UpperBody;

/// Camera keys in match priority order: longest first, ties in catalog
/// order. A key that is a substring of another can never shadow it.
pub const CAMERA_PRIORITY: [CameraAngle; 9] = [
    CameraAngle::DynamicActionPose,
    CameraAngle::FullBodyStanding,
    CameraAngle::PortraitCloseUp,
    CameraAngle::HeadAndShoulders,
    CameraAngle::UpperBody,
    CameraAngle::LowAngleEpic,
    CameraAngle::SideProfile,
    CameraAngle::BirdsEye,
    CameraAngle::BackView,
];

/// Base-resolution convention of the loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelFamily {
    /// Single text encoder, 512-class resolutions.
    Sd15,
    /// Dual text encoder with pooled output, 1024-class resolutions.
    Sdxl,
}

impl ModelFamily {
    pub fn from_dual_encoder(is_dual: bool) -> Self {
        if is_dual {
            Self::Sdxl
        } else {
            Self::Sd15
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sd15 => "SD1.5",
            Self::Sdxl => "SDXL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Shape of the empty latent handed to the sampler: `[batch, channels,
/// height / 8, width / 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LatentShape {
    pub batch: u32,
    pub channels: u32,
    pub height: u32,
    pub width: u32,
}

impl LatentShape {
    pub fn dims(&self) -> [u32; 4] {
        [self.batch, self.channels, self.height, self.width]
    }
}

impl Resolution {
    pub fn latent_shape(&self) -> LatentShape {
        LatentShape {
            batch: 1,
            channels: LATENT_CHANNELS,
            height: self.height / LATENT_SCALE,
            width: self.width / LATENT_SCALE,
        }
    }
}

struct CameraEntry {
    sd15: (u32, u32),
    sdxl: (u32, u32),
    negative: &'static str,
}

fn entry(camera: CameraAngle) -> CameraEntry {
    let (sd15, sdxl, negative) = match camera {
        CameraAngle::PortraitCloseUp => ((512, 768), (832, 1216), ""),
        CameraAngle::HeadAndShoulders => ((512, 768), (832, 1216), "full body, legs, feet"),
        CameraAngle::UpperBody => (
            (512, 768),
            (832, 1216),
            "full body, legs, feet, close-up face",
        ),
        CameraAngle::FullBodyStanding => (
            (512, 1024),
            (768, 1344),
            "close-up, portrait, face only, headshot, cropped, bust shot",
        ),
        CameraAngle::DynamicActionPose => (
            (768, 960),
            (896, 1152),
            "standing still, static pose, portrait only",
        ),
        CameraAngle::LowAngleEpic => ((512, 1024), (768, 1344), "top view, portrait, close-up"),
        CameraAngle::BirdsEye => ((768, 768), (1024, 1024), "front view, portrait, close-up"),
        CameraAngle::SideProfile => ((512, 768), (832, 1216), "front facing, portrait only"),
        CameraAngle::BackView => ((512, 768), (832, 1216), "front facing, face visible"),
    };
    CameraEntry {
        sd15,
        sdxl,
        negative,
    }
}

/// Match a (possibly decorated) camera label to a framing by substring,
/// case-insensitively, in [`CAMERA_PRIORITY`] order.
pub fn camera_key(label: &str) -> CameraAngle {
    let lowered = label.to_lowercase();
    CAMERA_PRIORITY
        .iter()
        .copied()
        .find(|cam| lowered.contains(&cam.label().to_lowercase()))
        .unwrap_or(DEFAULT_CAMERA)
}

/// Round to the nearest multiple of [`LATENT_GRID`], halves rounding up.
pub fn snap_to_grid(value: u32) -> u32 {
    ((value + LATENT_GRID / 2) / LATENT_GRID) * LATENT_GRID
}

/// Output resolution for a framing and model family.
pub fn resolve_camera(camera: CameraAngle, family: ModelFamily) -> Resolution {
    let e = entry(camera);
    let (w, h) = match family {
        ModelFamily::Sd15 => e.sd15,
        ModelFamily::Sdxl => e.sdxl,
    };
    Resolution {
        width: snap_to_grid(w),
        height: snap_to_grid(h),
    }
}

/// Output resolution for a raw camera label.
pub fn resolve(label: &str, family: ModelFamily) -> Resolution {
    resolve_camera(camera_key(label), family)
}

/// Framing-specific negative tokens; empty for close-up portraits.
pub fn negative_reinforcement(label: &str) -> &'static str {
    entry(camera_key(label)).negative
}

/// Prefix `negative` with the camera's reinforcement, if it has one.
/// Returns `None` when the framing contributes nothing.
pub fn prepend_camera_negative(label: &str, negative: &str) -> Option<String> {
    non_empty_trimmed(negative_reinforcement(label)).map(|cam| join_blocks([cam, negative]))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- camera_key --

    #[test]
    fn decorated_label_matches_bare_key() {
        assert_eq!(camera_key("📸 Upper Body (3/4)"), CameraAngle::UpperBody);
        assert_eq!(camera_key("Upper Body (3/4)"), CameraAngle::UpperBody);
        assert_eq!(camera_key("🦅 Bird's Eye"), CameraAngle::BirdsEye);
    }

    #[test]
    fn unknown_label_falls_back_to_upper_body() {
        assert_eq!(camera_key("Dutch Angle"), CameraAngle::UpperBody);
        assert_eq!(camera_key(""), CameraAngle::UpperBody);
    }

    #[test]
    fn longer_key_wins_when_both_appear() {
        assert_eq!(
            camera_key("Full Body Standing, Back View"),
            CameraAngle::FullBodyStanding
        );
    }

    #[test]
    fn priority_covers_every_camera() {
        for cam in CameraAngle::ALL {
            assert!(CAMERA_PRIORITY.contains(cam), "{cam:?}");
        }
        let lengths: Vec<usize> = CAMERA_PRIORITY.iter().map(|c| c.label().len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    // -- resolve --

    #[test]
    fn upper_body_resolutions() {
        assert_eq!(
            resolve("📸 Upper Body (3/4)", ModelFamily::Sd15),
            Resolution { width: 512, height: 768 }
        );
        assert_eq!(
            resolve("📸 Upper Body (3/4)", ModelFamily::Sdxl),
            Resolution { width: 832, height: 1216 }
        );
    }

    #[test]
    fn full_body_and_action_resolutions() {
        assert_eq!(
            resolve("Full Body Standing", ModelFamily::Sdxl),
            Resolution { width: 768, height: 1344 }
        );
        assert_eq!(
            resolve("Dynamic Action Pose", ModelFamily::Sd15),
            Resolution { width: 768, height: 960 }
        );
    }

    #[test]
    fn every_resolution_is_on_the_grid() {
        for cam in CameraAngle::ALL {
            for family in [ModelFamily::Sd15, ModelFamily::Sdxl] {
                let r = resolve_camera(*cam, family);
                assert_eq!(r.width % LATENT_GRID, 0);
                assert_eq!(r.height % LATENT_GRID, 0);
            }
        }
    }

    // -- snap_to_grid --

    #[test]
    fn snap_rounds_to_nearest() {
        assert_eq!(snap_to_grid(768), 768);
        assert_eq!(snap_to_grid(700), 704);
        assert_eq!(snap_to_grid(95), 64);
        assert_eq!(snap_to_grid(96), 128);
    }

    // -- latent_shape --

    #[test]
    fn latent_shape_is_eighth_scale() {
        let shape = Resolution { width: 832, height: 1216 }.latent_shape();
        assert_eq!(shape.dims(), [1, 4, 152, 104]);
    }

    // -- negative_reinforcement --

    #[test]
    fn negative_tokens_per_framing() {
        assert_eq!(negative_reinforcement("Portrait Close-Up"), "");
        assert_eq!(
            negative_reinforcement("📸 Upper Body (3/4)"),
            "full body, legs, feet, close-up face"
        );
        assert_eq!(negative_reinforcement("Back View"), "front facing, face visible");
    }

    #[test]
    fn prepend_only_when_non_empty() {
        assert_eq!(prepend_camera_negative("Portrait Close-Up", "lowres"), None);
        assert_eq!(
            prepend_camera_negative("Head & Shoulders", "lowres").as_deref(),
            Some("full body, legs, feet, lowres")
        );
    }
}
