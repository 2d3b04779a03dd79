//! Attention-weight annotation in the `(text:1.25)` syntax understood by
//! ComfyUI-style text encoders.

/// Weights closer to 1.0 than this are emitted without annotation.
pub const IDENTITY_TOLERANCE: f64 = 0.01;

/// Wrap `text` with an emphasis annotation unless `weight` is effectively 1.0.
pub fn weight(text: &str, weight: f64) -> String {
    if (weight - 1.0).abs() < IDENTITY_TOLERANCE {
        return text.to_string();
    }
    format!("({text}:{weight:.2})")
}

/// Round to two decimal places on the exact binary value.
///
/// Goes through the decimal formatter so that a product such as
/// `1.7 * 0.65` (stored as 1.10499..) rounds to 1.10 rather than 1.11.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Weight each token independently and join them with `", "`.
pub fn weight_each(tokens: &[&str], w: f64) -> String {
    tokens
        .iter()
        .map(|tok| weight(tok, w))
        .collect::<Vec<_>>()
        .join(", ")
}
