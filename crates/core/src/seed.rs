//! Identity seed ("character DNA").
//!
//! The seed is `(base_seed + H) mod 2^32` where `H` is the SHA-256 digest of
//! `"<name>|<gender>|<ethnicity>"` read as a big-endian integer. Only the
//! low 32 bits of `H` survive the modulus, so the last four digest bytes
//! are all that is needed.

use serde::{Deserialize, Serialize};

use crate::catalog::{Ethnicity, Gender, TraitAxis};
use crate::hashing::sha256_digest;
use crate::text::non_empty_trimmed;

/// Where the final seed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    /// Derived from the character identity.
    Character,
    /// The caller's base seed, unchanged.
    Base,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSeed {
    pub seed: u32,
    pub source: SeedSource,
}

/// Identity string hashed into the seed. The name is trimmed and
/// lower-cased; gender and ethnicity use their canonical labels.
///
/// Decorated widget labels (`"👩 Female"`) are never hashed, so these seeds
/// are not interchangeable with seeds from the emoji-labelled ComfyUI node.
pub fn identity_fingerprint(name: &str, gender: Gender, ethnicity: Ethnicity) -> String {
    format!(
        "{}|{}|{}",
        name.trim().to_lowercase(),
        gender.label(),
        ethnicity.label()
    )
}

/// Deterministic seed for a character identity.
pub fn derive_seed(name: &str, gender: Gender, ethnicity: Ethnicity, base_seed: u32) -> u32 {
    let digest = sha256_digest(identity_fingerprint(name, gender, ethnicity).as_bytes());
    let low = u32::from_be_bytes([digest[28], digest[29], digest[30], digest[31]]);
    base_seed.wrapping_add(low)
}

/// Pick the identity seed when enabled and a name is given, else the base
/// seed.
pub fn resolve_seed(
    use_character_seed: bool,
    name: &str,
    gender: Gender,
    ethnicity: Ethnicity,
    base_seed: u32,
) -> ResolvedSeed {
    match non_empty_trimmed(name) {
        Some(name) if use_character_seed => ResolvedSeed {
            seed: derive_seed(name, gender, ethnicity, base_seed),
            source: SeedSource::Character,
        },
        _ => ResolvedSeed {
            seed: base_seed,
            source: SeedSource::Base,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DefaultedAxis;

    // -- derive_seed --

    #[test]
    fn known_values() {
        assert_eq!(derive_seed("Aria", Gender::Female, Ethnicity::EastAsian, 42), 1624141083);
        assert_eq!(derive_seed("", Gender::Female, Ethnicity::NoPreference, 0), 1389067975);
        assert_eq!(derive_seed("Aria", Gender::Male, Ethnicity::EastAsian, 42), 942341315);
        assert_eq!(derive_seed("Aria", Gender::Female, Ethnicity::European, 42), 3858989392);
    }

    #[test]
    fn wraps_at_u32_max() {
        assert_eq!(
            derive_seed("Kael", Gender::Male, Ethnicity::European, u32::MAX),
            2572676301
        );
    }

    #[test]
    fn name_is_trimmed_and_case_folded() {
        assert_eq!(
            derive_seed("  ARIA ", Gender::Female, Ethnicity::EastAsian, 42),
            derive_seed("Aria", Gender::Female, Ethnicity::EastAsian, 42)
        );
    }

    #[test]
    fn base_seed_offsets_linearly() {
        let a = derive_seed("Aria", Gender::Female, Ethnicity::EastAsian, 0);
        let b = derive_seed("Aria", Gender::Female, Ethnicity::EastAsian, 10);
        assert_eq!(b, a.wrapping_add(10));
    }

    #[test]
    fn each_identity_field_changes_the_seed() {
        let base = derive_seed("Aria", Gender::Female, Ethnicity::EastAsian, 42);
        assert_ne!(base, derive_seed("Arya", Gender::Female, Ethnicity::EastAsian, 42));
        assert_ne!(base, derive_seed("Aria", Gender::NonBinary, Ethnicity::EastAsian, 42));
        assert_ne!(base, derive_seed("Aria", Gender::Female, Ethnicity::Mixed, 42));
    }

    // -- identity_fingerprint --

    #[test]
    fn fingerprint_format() {
        assert_eq!(
            identity_fingerprint(" Aria ", Gender::Android, Ethnicity::African),
            "aria|Android / Robot|African / Black"
        );
    }

    #[test]
    fn decorated_labels_hash_as_canonical() {
        let gender = Gender::resolve("👩 Female");
        let ethnicity = Ethnicity::resolve("🇯🇵 East Asian");
        assert_eq!(identity_fingerprint("Aria", gender, ethnicity), "aria|Female|East Asian");
        assert_eq!(derive_seed("Aria", gender, ethnicity, 42), 1624141083);
    }

    // -- resolve_seed --

    #[test]
    fn character_seed_when_enabled_and_named() {
        let resolved = resolve_seed(true, "Aria", Gender::Female, Ethnicity::EastAsian, 42);
        assert_eq!(resolved.source, SeedSource::Character);
        assert_eq!(resolved.seed, 1624141083);
    }

    #[test]
    fn base_seed_when_disabled() {
        let resolved = resolve_seed(false, "Aria", Gender::Female, Ethnicity::EastAsian, 42);
        assert_eq!(resolved, ResolvedSeed { seed: 42, source: SeedSource::Base });
    }

    #[test]
    fn base_seed_when_name_blank() {
        let resolved = resolve_seed(true, "   ", Gender::Female, Ethnicity::EastAsian, 7);
        assert_eq!(resolved, ResolvedSeed { seed: 7, source: SeedSource::Base });
    }
}
