//! Text helpers for headings.

/// A title split at its first space, for two-tone headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleParts<'a> {
    pub first_word: &'a str,
    pub rest_words: &'a str,
    pub has_two_words: bool,
}

/// Split `title` at the first space.
///
/// Only a literal space separates words, so `"Grand  Hotel"` yields
/// `"Grand"` and `" Hotel"`.
pub fn split_title(title: &str) -> TitleParts<'_> {
    match title.split_once(' ') {
        Some((first_word, rest_words)) => TitleParts {
            first_word,
            rest_words,
            has_two_words: true,
        },
        None => TitleParts {
            first_word: title,
            rest_words: "",
            has_two_words: false,
        },
    }
}

/// Most bullets a summary produces.
const MAX_BULLETS: usize = 4;

/// Summarize `text` as up to four sentence bullets totalling at most
/// `max_total` characters. A sentence that would overflow is cut and
/// ends in `…`.
pub fn to_bullets(text: &str, max_total: usize) -> Vec<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut bullets = Vec::new();
    let mut used = 0;
    for piece in split_sentences(&cleaned) {
        let remaining = max_total.saturating_sub(used);
        if remaining == 0 {
            break;
        }
        let take = if piece.chars().count() > remaining {
            truncate_with_ellipsis(piece, remaining - 1)
        } else {
            piece.to_string()
        };
        used += take.chars().count();
        bullets.push(take);
        if bullets.len() >= MAX_BULLETS {
            break;
        }
    }

    if bullets.is_empty() {
        let len = cleaned.chars().count();
        let head: String = cleaned.chars().take(max_total.saturating_sub(1)).collect();
        let suffix = if len > max_total { "…" } else { "" };
        bullets.push(format!("{}{suffix}", head.trim()));
    }
    bullets
}

/// Split single-spaced text after `.`, `!` or `?`.
fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut prev = None;
    for (i, c) in text.char_indices() {
        if c == ' ' && matches!(prev, Some('.' | '!' | '?')) {
            pieces.push(&text[start..i]);
            start = i + 1;
        }
        prev = Some(c);
    }
    pieces.push(&text[start..]);
    pieces.into_iter().map(str::trim).filter(|p| !p.is_empty())
}

fn truncate_with_ellipsis(piece: &str, keep: usize) -> String {
    let head: String = piece.chars().take(keep).collect();
    format!("{}…", head.trim())
}
