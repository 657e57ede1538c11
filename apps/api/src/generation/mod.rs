//! Generation — the two prompt-fill operations (cover letter, résumé
//! tailoring) and the summary view built from their outputs.

pub mod cover_letter;
pub mod enhancer;
pub mod handlers;
pub mod prompts;
pub mod summary;

/// How much of each input text is forwarded into a prompt. Inputs longer
/// than this are cut to exactly their first 2000 characters.
pub const PROMPT_CHAR_BUDGET: usize = 2000;

/// Returns at most the first `limit` characters of `text` (char-based, so
/// multi-byte input never splits a code point).
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_shorter_input_untouched() {
        assert_eq!(truncate_chars("resume", 2000), "resume");
    }

    #[test]
    fn test_truncate_chars_cuts_to_exact_length() {
        let text = "x".repeat(2500);
        let cut = truncate_chars(&text, 2000);
        assert_eq!(cut.chars().count(), 2000);
        assert_eq!(cut, &text[..2000]);
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        let text = "é".repeat(30);
        let cut = truncate_chars(&text, 10);
        assert_eq!(cut.chars().count(), 10);
        assert_eq!(cut, "é".repeat(10));
    }
}
