//! Full and quick generation flows.

use charforge_core::catalog::TraitAxis;
use charforge_core::character::CharacterConfig;
use charforge_core::composer::{build_negative, build_positive};
use charforge_core::embedding::{inject, EmbeddingSelection};
use charforge_core::preset::is_no_preset;
use charforge_core::quick_preset::{compose_quick, QuickPreset};
use charforge_core::resolution::{
    prepend_camera_negative, resolve_camera, LatentShape, ModelFamily, Resolution, DEFAULT_CAMERA,
};
use charforge_core::sampler::{recommend, SamplerRecommendation};
use charforge_core::seed::{resolve_seed, ResolvedSeed};
use charforge_core::validation::{range_issues, validate_controlnet_strength};

use crate::backend::ModelBackend;
use crate::config::PipelineSettings;
use crate::embeddings::{discover, EmbeddingCatalog};
use crate::error::{PipelineError, PromptKind};
use crate::lora::{apply_chain, apply_slot, LoraSlot};
use crate::presets::{load_or_empty, save_with_status, PresetStore, SaveStatus};
use crate::report::{ControlNetSummary, GenerationReport};

/// Default ControlNet strength.
pub const DEFAULT_CONTROLNET_STRENGTH: f64 = 0.8;

/// Inputs of one full generation.
pub struct GenerationRequest<B: ModelBackend> {
    pub model: B::Model,
    pub clip: B::Clip,
    /// Request values; a loaded preset overrides them key by key.
    pub config: CharacterConfig,
    pub load_preset: Option<String>,
    pub save_as: Option<String>,
    /// Up to three slots, applied in order.
    pub loras: Vec<LoraSlot>,
    pub controlnet: Option<B::ControlNet>,
    pub controlnet_image: Option<B::Image>,
    pub controlnet_strength: f64,
    pub use_character_seed: bool,
    /// Falls back to [`PipelineSettings::default_base_seed`].
    pub base_seed: Option<u32>,
}

impl<B: ModelBackend> GenerationRequest<B> {
    pub fn new(model: B::Model, clip: B::Clip, config: CharacterConfig) -> Self {
        Self {
            model,
            clip,
            config,
            load_preset: None,
            save_as: None,
            loras: Vec::new(),
            controlnet: None,
            controlnet_image: None,
            controlnet_strength: DEFAULT_CONTROLNET_STRENGTH,
            use_character_seed: true,
            base_seed: None,
        }
    }
}

pub struct GenerationOutput<B: ModelBackend> {
    pub positive: B::Conditioning,
    pub negative: B::Conditioning,
    pub model: B::Model,
    pub clip: B::Clip,
    /// Config after the preset merge.
    pub config: CharacterConfig,
    /// Exact text handed to the encoder.
    pub positive_text: String,
    pub negative_text: String,
    pub family: ModelFamily,
    pub resolution: Resolution,
    pub latent: LatentShape,
    pub seed: ResolvedSeed,
    pub sampler: SamplerRecommendation,
    pub save_status: SaveStatus,
    pub report: GenerationReport,
}

/// Run the full character generation.
///
/// Only an encoder failure aborts; every other collaborator failure is
/// logged and the step degrades to a pass-through.
pub async fn generate<B, E, S>(
    backend: &B,
    embeddings: &E,
    store: &S,
    settings: &PipelineSettings,
    request: GenerationRequest<B>,
) -> Result<GenerationOutput<B>, PipelineError>
where
    B: ModelBackend,
    E: EmbeddingCatalog + ?Sized,
    S: PresetStore + ?Sized,
{
    let GenerationRequest {
        model,
        clip,
        config,
        load_preset,
        save_as,
        loras,
        controlnet,
        controlnet_image,
        controlnet_strength,
        use_character_seed,
        base_seed,
    } = request;

    // 1. Preset overlay.
    let preset_label = load_preset.filter(|label| !is_no_preset(label));
    let config = match &preset_label {
        Some(label) => match load_or_empty(store, label).await {
            Some(doc) => config.merged_with(&doc),
            None => config,
        },
        None => config,
    };
    for issue in range_issues(&config) {
        tracing::warn!(error = %issue, "Character strength outside the documented range");
    }

    // 2. LoRA chain.
    let (model, clip, lora_outcomes) = apply_chain(backend, model, clip, &loras).await;

    // 3. Prompts.
    let positive_text = build_positive(&config);
    let negative_text = build_negative(&config);

    // 4. Model family.
    let family = match backend.is_dual_encoder(&clip).await {
        Ok(dual) => ModelFamily::from_dual_encoder(dual),
        Err(e) => {
            tracing::warn!(error = %e, "Encoder family detection failed, assuming SD1.5");
            ModelFamily::Sd15
        }
    };

    // 5. Embeddings.
    let selection = if settings.auto_embeddings {
        discover(embeddings, family).await
    } else {
        EmbeddingSelection::default()
    };
    let (positive_text, negative_text) = inject(&positive_text, &negative_text, &selection);
    let reported_negative_chars = negative_text.chars().count();

    // 6. Camera negative reinforcement, ahead of the injected negative.
    let camera = config.camera_angle.unwrap_or(DEFAULT_CAMERA);
    let negative_text = if settings.camera_negative {
        prepend_camera_negative(camera.label(), &negative_text).unwrap_or(negative_text)
    } else {
        negative_text
    };

    // 7. Encode.
    let positive = backend
        .encode(&clip, &positive_text)
        .await
        .map_err(|source| PipelineError::Encoding {
            kind: PromptKind::Positive,
            source,
        })?;
    let negative = backend
        .encode(&clip, &negative_text)
        .await
        .map_err(|source| PipelineError::Encoding {
            kind: PromptKind::Negative,
            source,
        })?;

    // 8. ControlNet.
    let (positive, controlnet_summary) = match (&controlnet, &controlnet_image) {
        (Some(net), Some(image)) => {
            if let Err(e) = validate_controlnet_strength(controlnet_strength) {
                tracing::warn!(error = %e, "ControlNet strength outside the documented range");
            }
            match backend
                .apply_controlnet(&positive, net, image, controlnet_strength)
                .await
            {
                Ok(conditioned) => (
                    conditioned,
                    Some(ControlNetSummary {
                        strength: controlnet_strength,
                        applied: true,
                    }),
                ),
                Err(e) => {
                    tracing::warn!(error = %e, "ControlNet apply failed, keeping plain conditioning");
                    (
                        positive,
                        Some(ControlNetSummary {
                            strength: controlnet_strength,
                            applied: false,
                        }),
                    )
                }
            }
        }
        _ => (positive, None),
    };

    // 9. Sampler advice.
    let sampler = recommend(config.art_style);

    // 10. Seed.
    let seed = resolve_seed(
        use_character_seed,
        &config.character_name,
        config.gender,
        config.ethnicity,
        base_seed.unwrap_or(settings.default_base_seed),
    );

    // 11. Save.
    let save_status = match save_as.as_deref() {
        Some(label) => save_with_status(store, label, config.to_document()).await,
        None => SaveStatus::Skipped,
    };

    // 12. Resolution.
    let resolution = resolve_camera(camera, family);
    let latent = resolution.latent_shape();

    // 13. Report.
    let report = GenerationReport::new(
        &config,
        preset_label,
        save_status.clone(),
        seed,
        resolution,
        family,
        sampler,
        selection,
        controlnet_summary,
        lora_outcomes,
        &positive_text,
        reported_negative_chars,
    );

    tracing::info!(
        seed = seed.seed,
        width = resolution.width,
        height = resolution.height,
        family = family.label(),
        positive_chars = report.positive_chars,
        negative_chars = report.negative_chars,
        "Character conditioning generated"
    );

    Ok(GenerationOutput {
        positive,
        negative,
        model,
        clip,
        config,
        positive_text,
        negative_text,
        family,
        resolution,
        latent,
        seed,
        sampler,
        save_status,
        report,
    })
}

/* --------------------------------------------------------------------------
Quick preset flow
-------------------------------------------------------------------------- */

pub struct QuickRequest<B: ModelBackend> {
    pub model: B::Model,
    pub clip: B::Clip,
    pub preset: QuickPreset,
    pub lora: LoraSlot,
    pub append_positive: String,
    pub append_negative: String,
}

impl<B: ModelBackend> QuickRequest<B> {
    pub fn new(model: B::Model, clip: B::Clip, preset: QuickPreset) -> Self {
        Self {
            model,
            clip,
            preset,
            lora: LoraSlot::none(),
            append_positive: String::new(),
            append_negative: String::new(),
        }
    }
}

pub struct QuickOutput<B: ModelBackend> {
    pub positive: B::Conditioning,
    pub negative: B::Conditioning,
    pub model: B::Model,
    pub clip: B::Clip,
    pub positive_text: String,
    pub negative_text: String,
    /// One-line summary: preset, LoRA and prompt lengths.
    pub info: String,
}

/// Compose a quick preset, apply one LoRA slot and encode. No embeddings
/// and no camera negative.
pub async fn quick<B: ModelBackend>(
    backend: &B,
    request: QuickRequest<B>,
) -> Result<QuickOutput<B>, PipelineError> {
    let QuickRequest {
        model,
        clip,
        preset,
        lora,
        append_positive,
        append_negative,
    } = request;

    let composed = compose_quick(preset, &append_positive, &append_negative);
    let (model, clip, _) = apply_slot(backend, model, clip, &lora).await;

    let positive = backend
        .encode(&clip, &composed.positive)
        .await
        .map_err(|source| PipelineError::Encoding {
            kind: PromptKind::Positive,
            source,
        })?;
    let negative = backend
        .encode(&clip, &composed.negative)
        .await
        .map_err(|source| PipelineError::Encoding {
            kind: PromptKind::Negative,
            source,
        })?;

    let info = format!(
        "Preset: {} | LoRA: {} [{}/{}] | +{}c / -{}c",
        preset.label(),
        lora.name,
        lora.model_strength,
        lora.clip_strength,
        composed.positive.chars().count(),
        composed.negative.chars().count()
    );
    tracing::info!(preset = preset.label(), "Quick preset conditioning generated");

    Ok(QuickOutput {
        positive,
        negative,
        model,
        clip,
        positive_text: composed.positive,
        negative_text: composed.negative,
        info,
    })
}
