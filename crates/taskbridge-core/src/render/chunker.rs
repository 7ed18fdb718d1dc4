//! Line-respecting message chunker.
//!
//! Chat platforms enforce a hard character ceiling per message. Truncating
//! mid-line would sever markdown links or timestamp markers, so the chunker
//! packs whole lines greedily and falls back to hard character splits only
//! when a single line alone exceeds the limit.

/// Split `text` into an ordered sequence of chunks, each holding whole lines
/// where possible.
///
/// `limit` must be at least 1. Lengths are counted in characters, matching
/// how chat platforms meter message size.
///
/// Guarantees:
/// - A line is split across chunks only when the line alone exceeds `limit`.
/// - Concatenating the chunks reproduces the input's line sequence exactly,
///   every line newline-terminated. When the input lacks a trailing newline
///   the last chunk gains a synthetic one; this is deliberate, not a defect.
/// - The empty string yields no chunks.
pub fn chunk_text(text: &str, limit: usize) -> Vec<String> {
    debug_assert!(limit > 0, "chunk limit must be positive");

    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_len = 0usize;

    for line in text.lines() {
        let mut rest = line;
        let mut rest_len = rest.chars().count();

        // Hard-wrap: consume limit-sized slices until the remainder fits on
        // a line of its own. A full accumulator (it can hold limit + 1
        // characters after packing a line of exactly the limit) is flushed
        // before any slice is taken.
        while rest_len > limit {
            let space = limit.saturating_sub(chunk_len);
            if space == 0 {
                chunks.push(std::mem::take(&mut chunk));
                chunk_len = 0;
                continue;
            }
            let split_at = rest
                .char_indices()
                .nth(space)
                .map_or(rest.len(), |(idx, _)| idx);
            chunk.push_str(&rest[..split_at]);
            chunks.push(std::mem::take(&mut chunk));
            chunk_len = 0;
            rest = &rest[split_at..];
            rest_len -= space;
        }

        // The remaining line plus its newline must fit; otherwise start a
        // fresh chunk. Flushing an empty accumulator is a no-op so a line of
        // exactly `limit` characters still lands in a single chunk.
        if chunk_len + rest_len + 1 > limit && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_len = 0;
        }

        chunk.push_str(rest);
        chunk.push('\n');
        chunk_len += rest_len + 1;
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }

    chunks
}
