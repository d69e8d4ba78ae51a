//! Slugs
//!
//! Catalog records are addressed by URL-safe slugs. When none is supplied one is
//! derived from the record name.

use unicode_normalization::UnicodeNormalization;

/// Derive a slug from a display name.
///
/// Folds to ASCII through NFKD decomposition, so accented letters keep their
/// base letter. Lowercases, keeps ASCII alphanumerics and underscores, collapses runs of
/// whitespace and hyphens into a single `-` and drops everything else. Leading
/// and trailing `-`/`_` are trimmed. Returns `None` when nothing survives.
#[must_use]
pub fn slugify(name: &str) -> Option<String> {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name
        .nfkd()
        .filter(char::is_ascii)
        .map(|ch| ch.to_ascii_lowercase())
    {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }

            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
    }

    let trimmed = slug.trim_matches(|c| c == '-' || c == '_');

    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Use the explicit slug when given, otherwise derive one from the name.
#[must_use]
pub fn slug_or_derive(slug: Option<String>, name: &str) -> Option<String> {
    match slug {
        Some(slug) if !slug.trim().is_empty() => Some(slug.trim().to_string()),
        _ => slugify(name),
    }
}
