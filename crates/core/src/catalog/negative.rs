//! Fixed phrases that do not belong to a single axis.

/// Universal negative boilerplate appended to every negative prompt.
pub const NEGATIVE_BASE: &str = "worst quality, low quality, normal quality, lowres, \
    bad anatomy, bad hands, error, missing fingers, extra digit, \
    fewer digits, cropped, jpeg artifacts, signature, watermark, \
    username, blurry, bad feet, mutation, deformed, ugly, \
    extra limbs, disfigured, malformed limbs, missing arms, \
    missing legs, extra arms, extra legs, fused fingers, \
    too many fingers, long neck, poorly drawn face, cloned face, \
    out of frame, gross proportions, poorly drawn hands, \
    missing body parts, floating limbs, disconnected limbs, \
    cross-eyed, asymmetrical eyes, bad proportions";

/// Inserted after the ethnicity lockdown when the chosen hair or eye colour
/// is atypical for the selected ethnicity.
pub const CONFLICT_SOFTENER: &str = "fantasy character, unconventional appearance, \
    stylized look, artistic character design";
