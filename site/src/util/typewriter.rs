//! Typewriter effect timing for the hero tagline.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Delay before the first character appears.
pub const START_DELAY_MS: u32 = 500;

/// Delay between characters.
pub const CHAR_INTERVAL_MS: u32 = 50;

/// First `chars` characters of `text`, cut on a char boundary.
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Whether `chars` typed characters cover all of `text`.
pub fn is_complete(text: &str, chars: usize) -> bool {
    chars >= text.chars().count()
}
