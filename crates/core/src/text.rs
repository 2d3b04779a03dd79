//! Free-text helpers shared by the composer and the preset layer.

/// Separator between prompt blocks.
pub const BLOCK_SEPARATOR: &str = ", ";

/// Trim `text` and treat an empty result as absent.
pub fn non_empty_trimmed(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Join blocks with [`BLOCK_SEPARATOR`], trimming each and dropping the
/// ones that are empty after trimming.
pub fn join_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = blocks
        .into_iter()
        .filter_map(|b| non_empty_trimmed(b.as_ref()).map(str::to_string))
        .collect();
    kept.join(BLOCK_SEPARATOR)
}

/// Append `extra` to `text` with [`BLOCK_SEPARATOR`] when `extra` is
/// non-empty after trimming.
pub fn append_block(text: &str, extra: &str) -> String {
    match non_empty_trimmed(extra) {
        Some(extra) => format!("{text}{BLOCK_SEPARATOR}{extra}"),
        None => text.to_string(),
    }
}
