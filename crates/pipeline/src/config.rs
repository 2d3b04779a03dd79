use std::str::FromStr;

/// Pipeline behaviour switches loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Prepend installed known embeddings to the prompts (default: `true`).
    pub auto_embeddings: bool,
    /// Prepend the camera negative reinforcement (default: `true`).
    pub camera_negative: bool,
    /// Base seed for requests that carry none (default: `0`).
    pub default_base_seed: u32,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            auto_embeddings: true,
            camera_negative: true,
            default_base_seed: 0,
        }
    }
}

impl PipelineSettings {
    /// Load settings from environment variables with defaults.
    ///
    /// | Env Var                        | Default |
    /// |--------------------------------|---------|
    /// | `CHARFORGE_AUTO_EMBEDDINGS`    | `true`  |
    /// | `CHARFORGE_CAMERA_NEGATIVE`    | `true`  |
    /// | `CHARFORGE_DEFAULT_BASE_SEED`  | `0`     |
    ///
    /// Unparseable values are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            auto_embeddings: parse_var(
                &lookup,
                "CHARFORGE_AUTO_EMBEDDINGS",
                defaults.auto_embeddings,
            ),
            camera_negative: parse_var(
                &lookup,
                "CHARFORGE_CAMERA_NEGATIVE",
                defaults.camera_negative,
            ),
            default_base_seed: parse_var(
                &lookup,
                "CHARFORGE_DEFAULT_BASE_SEED",
                defaults.default_base_seed,
            ),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(var = key, value = %raw, error = %e, %default, "Invalid setting, using default");
            default
        }
    }
}
