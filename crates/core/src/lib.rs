//! Character prompt composition core.
//!
//! Turns a [`character::CharacterConfig`] into a weighted positive prompt,
//! a negative prompt, an identity seed, a sampler recommendation and an
//! output resolution. Everything in this crate is pure and synchronous;
//! model invocation and storage live behind the traits in
//! `charforge-pipeline`.

pub mod catalog;
pub mod character;
pub mod composer;
pub mod embedding;
pub mod error;
pub mod hashing;
pub mod preset;
pub mod quick_preset;
pub mod resolution;
pub mod sampler;
pub mod seed;
pub mod text;
pub mod validation;
pub mod weighting;
