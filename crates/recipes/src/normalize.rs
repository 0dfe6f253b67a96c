//! Recipe name normalization.
//!
//! Canonical names are Title Case words of ASCII letters separated by single
//! spaces: `"Riz Khalifa"`, `"Fried Rice"`.
//!
//! Every run of separators collapses to one space, so normalizing is
//! idempotent, and only exact canonical input takes the fast path: `"Fried Rice "`
//! is rewritten to `"Fried Rice"` rather than passed through. Both are deliberate.

use cookbook_core::{CookbookError, CookbookResult};

/// Returns true when `name` is already in canonical form.
pub fn is_canonical(name: &str) -> bool {
    !name.is_empty()
        && name.split(' ').all(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_lowercase())
                }
                // Empty word: leading, trailing or doubled space.
                None => false,
            }
        })
}

/// Normalize a handwritten recipe name.
///
/// Hyphens, underscores and whitespace become word separators; every other
/// non-letter is dropped. Fails with [`CookbookError::MalformedName`] when
/// nothing is left.
pub fn normalize(raw: &str) -> CookbookResult<String> {
    if raw.is_empty() {
        return Err(CookbookError::MalformedName);
    }
    if is_canonical(raw) {
        return Ok(raw.to_string());
    }

    let cleaned: String = raw
        .chars()
        .filter_map(|c| match c {
            '-' | '_' => Some(' '),
            c if c.is_whitespace() => Some(' '),
            c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect();

    let words: Vec<String> = cleaned
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        return Err(CookbookError::MalformedName);
    }
    Ok(words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
