//! Integration tests for the generation flows.
//!
//! A fake backend records every encoder call so the tests can check both
//! the text handed to the encoder and the degrade-and-continue behaviour
//! of each collaborator.

use std::sync::Mutex;

use assert_matches::assert_matches;
use async_trait::async_trait;
use charforge_core::catalog::{AgeGroup, CameraAngle, Ethnicity, Gender};
use charforge_core::character::CharacterConfig;
use charforge_core::composer::{build_negative, build_positive};
use charforge_core::preset::PresetDocument;
use charforge_core::quick_preset::QuickPreset;
use charforge_core::resolution::{ModelFamily, Resolution};
use charforge_core::seed::{derive_seed, SeedSource};
use charforge_pipeline::backend::{CollaboratorError, ModelBackend};
use charforge_pipeline::embeddings::{EmbeddingCatalog, StaticEmbeddingCatalog};
use charforge_pipeline::error::{PipelineError, PromptKind};
use charforge_pipeline::lora::LoraSlot;
use charforge_pipeline::presets::{InMemoryPresetStore, PresetStore, SaveStatus};
use charforge_pipeline::{generate, quick, GenerationRequest, PipelineSettings, QuickRequest};
use serde_json::json;

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

#[derive(Default)]
struct FakeBackend {
    dual: bool,
    fail_family: bool,
    fail_encode_containing: Option<&'static str>,
    fail_controlnet: bool,
    encoded: Mutex<Vec<String>>,
}

impl FakeBackend {
    fn sdxl() -> Self {
        Self {
            dual: true,
            ..Default::default()
        }
    }

    fn encode_calls(&self) -> Vec<String> {
        self.encoded.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ModelBackend for FakeBackend {
    type Model = Vec<String>;
    type Clip = Vec<String>;
    type Conditioning = String;
    type ControlNet = String;
    type Image = String;

    async fn is_dual_encoder(&self, _clip: &Self::Clip) -> Result<bool, CollaboratorError> {
        if self.fail_family {
            return Err(CollaboratorError::Unavailable("tokenizer".into()));
        }
        Ok(self.dual)
    }

    async fn encode(&self, _clip: &Self::Clip, text: &str) -> Result<String, CollaboratorError> {
        if let Some(marker) = self.fail_encode_containing {
            if text.contains(marker) {
                return Err(CollaboratorError::Unavailable("encoder crashed".into()));
            }
        }
        if let Ok(mut calls) = self.encoded.lock() {
            calls.push(text.to_string());
        }
        Ok(format!("cond[{text}]"))
    }

    async fn apply_lora(
        &self,
        model: &Self::Model,
        clip: &Self::Clip,
        lora: &LoraSlot,
    ) -> Result<(Self::Model, Self::Clip), CollaboratorError> {
        if lora.name.starts_with("broken") {
            return Err(CollaboratorError::LoadFailed(lora.name.clone()));
        }
        let mut model = model.clone();
        let mut clip = clip.clone();
        model.push(lora.name.clone());
        clip.push(lora.name.clone());
        Ok((model, clip))
    }

    async fn apply_controlnet(
        &self,
        conditioning: &String,
        controlnet: &String,
        image: &String,
        strength: f64,
    ) -> Result<String, CollaboratorError> {
        if self.fail_controlnet {
            return Err(CollaboratorError::ApplyFailed("shape mismatch".into()));
        }
        Ok(format!("{conditioning}+cn({controlnet},{image},{strength})"))
    }
}

struct BrokenStore;

#[async_trait]
impl PresetStore for BrokenStore {
    async fn load(&self, _label: &str) -> Result<Option<PresetDocument>, CollaboratorError> {
        Err(CollaboratorError::Unavailable("disk".into()))
    }

    async fn save(&self, _label: &str, _doc: PresetDocument) -> Result<String, CollaboratorError> {
        Err(CollaboratorError::Unavailable("disk".into()))
    }

    async fn list(&self) -> Result<Vec<String>, CollaboratorError> {
        Err(CollaboratorError::Unavailable("disk".into()))
    }
}

struct BrokenCatalog;

#[async_trait]
impl EmbeddingCatalog for BrokenCatalog {
    async fn installed(&self) -> Result<Vec<String>, CollaboratorError> {
        Err(CollaboratorError::Unavailable("embeddings folder".into()))
    }
}

fn no_embeddings() -> StaticEmbeddingCatalog {
    StaticEmbeddingCatalog::default()
}

fn request(config: CharacterConfig) -> GenerationRequest<FakeBackend> {
    GenerationRequest::new(vec![], vec![], config)
}

const UPPER_BODY_NEGATIVE: &str = "full body, legs, feet, close-up face";

// ---------------------------------------------------------------------------
// Test: default generation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn default_request_on_sd15() {
    let backend = FakeBackend::default();
    let store = InMemoryPresetStore::new();
    let cfg = CharacterConfig::default();

    let out = generate(
        &backend,
        &no_embeddings(),
        &store,
        &PipelineSettings::default(),
        request(cfg.clone()),
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.positive_text, build_positive(&cfg));
    assert_eq!(
        out.negative_text,
        format!("{UPPER_BODY_NEGATIVE}, {}", build_negative(&cfg))
    );
    assert_eq!(out.family, ModelFamily::Sd15);
    assert_eq!(out.resolution, Resolution { width: 512, height: 768 });
    assert_eq!(out.latent.dims(), [1, 4, 96, 64]);
    assert_eq!(out.seed.source, SeedSource::Base);
    assert_eq!(out.seed.seed, 0);
    assert_eq!(out.sampler.steps, 28);
    assert_eq!(out.save_status, SaveStatus::Skipped);
    assert_eq!(backend.encode_calls().len(), 2);
    assert_eq!(out.positive, format!("cond[{}]", out.positive_text));
}

#[tokio::test]
async fn sdxl_injects_installed_embeddings_after_camera_negative() {
    let backend = FakeBackend::sdxl();
    let catalog = StaticEmbeddingCatalog::new(["negativeXL_D.safetensors", "EasyNegative.pt"]);
    let out = generate(
        &backend,
        &catalog,
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        request(CharacterConfig::default()),
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.family, ModelFamily::Sdxl);
    assert_eq!(out.resolution, Resolution { width: 832, height: 1216 });
    assert!(out
        .negative_text
        .starts_with(&format!("{UPPER_BODY_NEGATIVE}, embedding:negativeXL_D, ")));
    assert!(!out.negative_text.contains("EasyNegative"));
    assert_eq!(out.report.embeddings.negative, vec!["negativeXL_D"]);
}

#[tokio::test]
async fn settings_switch_off_embeddings_and_camera_negative() {
    let backend = FakeBackend::default();
    let catalog = StaticEmbeddingCatalog::new(["EasyNegative.safetensors"]);
    let settings = PipelineSettings {
        auto_embeddings: false,
        camera_negative: false,
        default_base_seed: 9,
    };
    let cfg = CharacterConfig::default();
    let out = generate(
        &backend,
        &catalog,
        &InMemoryPresetStore::new(),
        &settings,
        request(cfg.clone()),
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.negative_text, build_negative(&cfg));
    assert_eq!(out.seed.seed, 9);
}

#[tokio::test]
async fn close_up_has_no_camera_negative() {
    let cfg = CharacterConfig {
        camera_angle: Some(CameraAngle::PortraitCloseUp),
        ..Default::default()
    };
    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        request(cfg.clone()),
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.negative_text, build_negative(&cfg));
}

#[tokio::test]
async fn embedding_enumeration_failure_degrades() {
    let out = generate(
        &FakeBackend::default(),
        &BrokenCatalog,
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        request(CharacterConfig::default()),
    )
    .await
    .expect("generation should succeed");

    assert!(out.report.embeddings.is_empty());
    assert!(!out.negative_text.contains("embedding:"));
}

#[tokio::test]
async fn family_detection_failure_assumes_sd15() {
    let backend = FakeBackend {
        dual: true,
        fail_family: true,
        ..Default::default()
    };
    let out = generate(
        &backend,
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        request(CharacterConfig::default()),
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.family, ModelFamily::Sd15);
}

// ---------------------------------------------------------------------------
// Test: presets and seed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preset_overrides_request_values() {
    let store = InMemoryPresetStore::new();
    let mut doc = PresetDocument::new();
    doc.insert("gender".into(), json!("👨 Male"));
    doc.insert("character_name".into(), json!("Aria"));
    store.save("Aria", doc).await.expect("save should succeed");

    let mut req = request(CharacterConfig {
        ethnicity: Ethnicity::EastAsian,
        ..Default::default()
    });
    req.load_preset = Some("Aria".into());
    req.base_seed = Some(42);

    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &store,
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.config.gender, Gender::Male);
    assert_eq!(out.config.ethnicity, Ethnicity::EastAsian);
    assert_eq!(out.seed.source, SeedSource::Character);
    assert_eq!(out.seed.seed, 942341315);
    assert_eq!(
        out.seed.seed,
        derive_seed("Aria", Gender::Male, Ethnicity::EastAsian, 42)
    );
    assert_eq!(out.report.preset.as_deref(), Some("Aria"));
}

#[tokio::test]
async fn none_preset_label_is_ignored() {
    let mut req = request(CharacterConfig::default());
    req.load_preset = Some("None".into());
    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &BrokenStore,
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.report.preset, None);
}

#[tokio::test]
async fn broken_store_degrades_on_load_and_save() {
    let cfg = CharacterConfig {
        age_group: AgeGroup::Elder,
        ..Default::default()
    };
    let mut req = request(cfg.clone());
    req.load_preset = Some("Ghost".into());
    req.save_as = Some("Ghost".into());

    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &BrokenStore,
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.config, cfg);
    assert_eq!(out.save_status, SaveStatus::Failed);
}

#[tokio::test]
async fn save_stores_the_merged_config() {
    let store = InMemoryPresetStore::new();
    let mut req = request(CharacterConfig {
        character_name: "Kael".into(),
        gender: Gender::Male,
        ..Default::default()
    });
    req.save_as = Some("  Kael v2 ".into());

    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &store,
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.save_status, SaveStatus::Saved("Kael v2".into()));
    let saved = store
        .load("Kael v2")
        .await
        .expect("load should succeed")
        .expect("preset should exist");
    assert_eq!(saved["character_name"], json!("Kael"));
    assert_eq!(saved["gender"], json!("Male"));
    assert_eq!(CharacterConfig::from_document(&saved), out.config);
}

#[tokio::test]
async fn character_seed_disabled_uses_base() {
    let mut req = request(CharacterConfig {
        character_name: "Aria".into(),
        ..Default::default()
    });
    req.use_character_seed = false;
    req.base_seed = Some(1234);

    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.seed.seed, 1234);
    assert_eq!(out.seed.source, SeedSource::Base);
}

// ---------------------------------------------------------------------------
// Test: LoRA and ControlNet degradation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lora_chain_skips_failures_and_extra_slots() {
    let mut req = request(CharacterConfig::default());
    req.loras = vec![
        LoraSlot::new("detail.safetensors", 0.8, 0.8),
        LoraSlot::new("broken.safetensors", 0.6, 0.6),
        LoraSlot::none(),
        LoraSlot::new("fourth.safetensors", 0.5, 0.5),
    ];

    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.model, vec!["detail.safetensors".to_string()]);
    assert_eq!(out.clip, vec!["detail.safetensors".to_string()]);
    assert_eq!(out.report.loras.len(), 2);
    assert!(out.report.loras[0].applied);
    assert_eq!(out.report.loras[1].slot, 2);
    assert!(!out.report.loras[1].applied);
}

#[tokio::test]
async fn controlnet_applies_only_with_network_and_image() {
    let mut req = request(CharacterConfig::default());
    req.controlnet = Some("openpose".into());
    req.controlnet_image = Some("pose.png".into());
    req.controlnet_strength = 0.7;

    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");
    assert!(out.positive.ends_with("+cn(openpose,pose.png,0.7)"));
    assert!(!out.negative.contains("+cn"));

    let mut req = request(CharacterConfig::default());
    req.controlnet = Some("openpose".into());
    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");
    assert!(!out.positive.contains("+cn"));
    assert!(out.report.controlnet.is_none());
}

#[tokio::test]
async fn controlnet_failure_keeps_plain_conditioning() {
    let backend = FakeBackend {
        fail_controlnet: true,
        ..Default::default()
    };
    let mut req = request(CharacterConfig::default());
    req.controlnet = Some("depth".into());
    req.controlnet_image = Some("depth.png".into());

    let out = generate(
        &backend,
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");

    assert_eq!(out.positive, format!("cond[{}]", out.positive_text));
    assert_matches!(&out.report.controlnet, Some(cn) if !cn.applied);
}

// ---------------------------------------------------------------------------
// Test: encoder failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn encoder_failure_aborts_with_prompt_kind() {
    let backend = FakeBackend {
        fail_encode_containing: Some("lowres"),
        ..Default::default()
    };
    let result = generate(
        &backend,
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        request(CharacterConfig::default()),
    )
    .await;

    assert_matches!(
        result.err(),
        Some(PipelineError::Encoding {
            kind: PromptKind::Negative,
            ..
        })
    );
}

// ---------------------------------------------------------------------------
// Test: report
// ---------------------------------------------------------------------------

#[tokio::test]
async fn report_renders_summary_lines() {
    let mut req = request(CharacterConfig {
        character_name: "Aria".into(),
        ..Default::default()
    });
    req.loras = vec![LoraSlot::new("detail.safetensors", 0.8, 0.6)];

    let out = generate(
        &FakeBackend::sdxl(),
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        req,
    )
    .await
    .expect("generation should succeed");

    let text = out.report.to_string();
    assert!(text.contains("  Name       : Aria"));
    assert!(text.contains("  Gender     : Female [lock: 1.55]"));
    assert!(text.contains("(identity sha256)"));
    assert!(text.contains("  Res        : 832x1216 (SDXL)"));
    assert!(text.contains("  CFG/Steps  : 7 / 28 (dpmpp_2m/karras)"));
    assert!(text.contains("  Embeds-    : none"));
    assert!(text.contains("detail.safetensors [0.8/0.6]"));
    assert!(text.contains(&format!("  +Prompt    : {} chars", out.positive_text.chars().count())));
    assert!(!text.contains("ControlNet"));
}

/// The negative length in the report excludes the camera reinforcement.
#[tokio::test]
async fn report_counts_negative_before_camera_reinforcement() {
    let cfg = CharacterConfig::default();
    let out = generate(
        &FakeBackend::default(),
        &no_embeddings(),
        &InMemoryPresetStore::new(),
        &PipelineSettings::default(),
        request(cfg.clone()),
    )
    .await
    .expect("generation should succeed");

    let plain_negative = build_negative(&cfg).chars().count();
    assert_eq!(out.report.negative_chars, plain_negative);
    assert!(out.negative_text.chars().count() > plain_negative);
    assert!(out
        .report
        .to_string()
        .contains(&format!("  -Prompt    : {plain_negative} chars")));
}

// ---------------------------------------------------------------------------
// Test: quick preset flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quick_composes_appends_and_applies_one_lora() {
    let backend = FakeBackend::sdxl();
    let mut req: QuickRequest<FakeBackend> =
        QuickRequest::new(vec![], vec![], QuickPreset::DragonSlayer);
    req.lora = LoraSlot::new("armor.safetensors", 0.9, 0.7);
    req.append_positive = " holding a greatsword ".into();
    req.append_negative = "blurry".into();

    let out = quick(&backend, req).await.expect("quick should succeed");

    assert!(out.positive_text.ends_with(", holding a greatsword"));
    assert!(out.negative_text.ends_with(", blurry"));
    assert!(!out.negative_text.contains("embedding:"));
    assert!(!out.negative_text.starts_with("standing still"));
    assert_eq!(out.model, vec!["armor.safetensors".to_string()]);
    assert!(out
        .info
        .starts_with("Preset: Dragon Slayer (M) | LoRA: armor.safetensors [0.9/0.7] | +"));
    assert_eq!(backend.encode_calls().len(), 2);
}
