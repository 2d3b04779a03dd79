//! Human-readable summary of one generation.

use std::fmt;

use charforge_core::catalog::{label_of, TraitAxis};
use charforge_core::character::CharacterConfig;
use charforge_core::embedding::EmbeddingSelection;
use charforge_core::resolution::{ModelFamily, Resolution};
use charforge_core::sampler::SamplerRecommendation;
use charforge_core::seed::{ResolvedSeed, SeedSource};
use serde::Serialize;

use crate::lora::LoraOutcome;
use crate::presets::SaveStatus;

const RULE: &str = "  ---------------------------------";

#[derive(Debug, Clone, Serialize)]
pub struct ControlNetSummary {
    pub strength: f64,
    pub applied: bool,
}

/// Everything the debug summary shows.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub character_name: String,
    pub preset: Option<String>,
    pub save_status: SaveStatus,
    pub gender: &'static str,
    pub gender_lock_strength: f64,
    pub age_group: &'static str,
    pub ethnicity: &'static str,
    pub art_style: &'static str,
    pub art_style_weight: f64,
    pub archetype: &'static str,
    pub hair: String,
    pub eyes: String,
    pub outfit: &'static str,
    pub lighting: &'static str,
    pub camera: &'static str,
    pub seed: ResolvedSeed,
    pub resolution: Resolution,
    pub family: ModelFamily,
    pub sampler: SamplerRecommendation,
    pub embeddings: EmbeddingSelection,
    pub controlnet: Option<ControlNetSummary>,
    pub loras: Vec<LoraOutcome>,
    pub positive_chars: usize,
    /// Length of the negative before camera reinforcement is prepended.
    pub negative_chars: usize,
}

impl GenerationReport {
    /// Character-facing fields taken from the merged config.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        cfg: &CharacterConfig,
        preset: Option<String>,
        save_status: SaveStatus,
        seed: ResolvedSeed,
        resolution: Resolution,
        family: ModelFamily,
        sampler: SamplerRecommendation,
        embeddings: EmbeddingSelection,
        controlnet: Option<ControlNetSummary>,
        loras: Vec<LoraOutcome>,
        positive_text: &str,
        negative_chars: usize,
    ) -> Self {
        Self {
            character_name: cfg.character_name.trim().to_string(),
            preset,
            save_status,
            gender: cfg.gender.label(),
            gender_lock_strength: cfg.gender_lock_strength,
            age_group: cfg.age_group.label(),
            ethnicity: cfg.ethnicity.label(),
            art_style: label_of(cfg.art_style),
            art_style_weight: cfg.art_style_weight,
            archetype: label_of(cfg.archetype),
            hair: format!("{} / {}", label_of(cfg.hair_style), label_of(cfg.hair_color)),
            eyes: format!("{} / {}", label_of(cfg.eye_style), label_of(cfg.eye_color)),
            outfit: label_of(cfg.outfit),
            lighting: label_of(cfg.lighting),
            camera: label_of(cfg.camera_angle),
            seed,
            resolution,
            family,
            sampler,
            embeddings,
            controlnet,
            loras,
            positive_chars: positive_text.chars().count(),
            negative_chars,
        }
    }
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.character_name.is_empty() {
            "-"
        } else {
            self.character_name.as_str()
        };
        let seed_source = match self.seed.source {
            SeedSource::Character => "(identity sha256)",
            SeedSource::Base => "(base)",
        };

        writeln!(f, "== CHARFORGE ==")?;
        writeln!(f, "  Name       : {name}")?;
        writeln!(
            f,
            "  Preset     : {} | Save: {}",
            self.preset.as_deref().unwrap_or("None"),
            self.save_status
        )?;
        writeln!(f, "  Gender     : {} [lock: {}]", self.gender, self.gender_lock_strength)?;
        writeln!(f, "  Age        : {}", self.age_group)?;
        writeln!(f, "  Ethnicity  : {}", self.ethnicity)?;
        writeln!(f, "  Style      : {} [w:{}]", self.art_style, self.art_style_weight)?;
        writeln!(f, "  Archetype  : {}", self.archetype)?;
        writeln!(f, "  Hair       : {}", self.hair)?;
        writeln!(f, "  Eyes       : {}", self.eyes)?;
        writeln!(f, "  Outfit     : {}", self.outfit)?;
        writeln!(f, "  Light      : {}", self.lighting)?;
        writeln!(f, "  Camera     : {}", self.camera)?;
        writeln!(f, "  Seed       : {} {seed_source}", self.seed.seed)?;
        writeln!(
            f,
            "  Res        : {}x{} ({})",
            self.resolution.width,
            self.resolution.height,
            self.family.label()
        )?;
        writeln!(
            f,
            "  CFG/Steps  : {} / {} ({}/{})",
            self.sampler.cfg, self.sampler.steps, self.sampler.sampler, self.sampler.scheduler
        )?;
        writeln!(f, "  Embeds+    : {}", list_or_none(&self.embeddings.positive))?;
        writeln!(f, "  Embeds-    : {}", list_or_none(&self.embeddings.negative))?;
        if let Some(cn) = &self.controlnet {
            let state = if cn.applied { "" } else { " (failed)" };
            writeln!(f, "  ControlNet : strength={}{state}", cn.strength)?;
        }
        for outcome in &self.loras {
            let state = if outcome.applied { "" } else { " (skipped)" };
            writeln!(
                f,
                "  LoRA {}     : {} [{}/{}]{state}",
                outcome.slot,
                outcome.lora.name,
                outcome.lora.model_strength,
                outcome.lora.clip_strength
            )?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "  +Prompt    : {} chars", self.positive_chars)?;
        write!(f, "  -Prompt    : {} chars", self.negative_chars)
    }
}
