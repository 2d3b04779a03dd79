//! Known textual-inversion embeddings and prompt injection.
//!
//! Only embeddings that are actually installed are injected; the installed
//! list comes from an external catalog.

use serde::Serialize;

use crate::resolution::ModelFamily;
use crate::text::join_blocks;

const SD15_NEGATIVE: &[&str] = &[
    "EasyNegative",
    "badhandv4",
    "bad-artist",
    "ng_deepnegative_v1_75t",
    "verybadimagenegative_v1.3",
    "bad_prompt_version2",
];

const SDXL_NEGATIVE: &[&str] = &["negativeXL_D", "FastNegativeV2"];

/// Known embedding names for one model family.
#[derive(Debug, Clone, Copy)]
pub struct KnownEmbeddings {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

pub fn known_embeddings(family: ModelFamily) -> KnownEmbeddings {
    match family {
        ModelFamily::Sd15 => KnownEmbeddings {
            positive: &[],
            negative: SD15_NEGATIVE,
        },
        ModelFamily::Sdxl => KnownEmbeddings {
            positive: &[],
            negative: SDXL_NEGATIVE,
        },
    }
}

/// Installed embeddings selected for injection, in known-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmbeddingSelection {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl EmbeddingSelection {
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Strip the final extension from an installed file name, e.g.
/// `"EasyNegative.safetensors"` → `"EasyNegative"`.
pub fn file_stem(file_name: &str) -> &str {
    let base = file_name.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(file_name);
    match base.rfind('.') {
        Some(0) | None => base,
        Some(idx) => &base[..idx],
    }
}

/// Keep the known names for `family` whose installed file stem matches
/// case-insensitively.
pub fn select_installed<S: AsRef<str>>(family: ModelFamily, installed: &[S]) -> EmbeddingSelection {
    let stems: Vec<String> = installed
        .iter()
        .map(|f| file_stem(f.as_ref()).to_lowercase())
        .collect();
    let pick = |names: &[&str]| -> Vec<String> {
        names
            .iter()
            .filter(|n| stems.iter().any(|s| *s == n.to_lowercase()))
            .map(|n| n.to_string())
            .collect()
    };
    let known = known_embeddings(family);
    EmbeddingSelection {
        positive: pick(known.positive),
        negative: pick(known.negative),
    }
}

fn prefix(text: &str, names: &[String]) -> String {
    if names.is_empty() {
        return text.to_string();
    }
    let tags = names
        .iter()
        .map(|n| format!("embedding:{n}"))
        .collect::<Vec<_>>();
    join_blocks(tags.iter().map(String::as_str).chain([text]))
}

/// Prepend `embedding:<name>` tags to the positive and negative prompts.
pub fn inject(positive: &str, negative: &str, selection: &EmbeddingSelection) -> (String, String) {
    (
        prefix(positive, &selection.positive),
        prefix(negative, &selection.negative),
    )
}
