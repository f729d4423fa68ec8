//! Category names <-> category file names.

/// File extension of category files.
pub const CATEGORY_EXT: &str = "txt";

/// Display name for a category file: stem with `_` as spaces, words title-cased.
///
/// `movies_ddl.txt` -> `Movies Ddl`, `CRACKED_games.txt` -> `Cracked Games`.
pub fn display_name(file_name: &str) -> String {
    let stem = file_name
        .strip_suffix(&format!(".{CATEGORY_EXT}"))
        .unwrap_or(file_name);
    stem.replace('_', " ")
        .split(' ')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// File name for a new category called `name`; None if nothing usable is left.
///
/// - Replaces `/`, `\`, NUL, control characters and whitespace with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing dots and underscores
/// - Limits the stem so the file name stays under 255 bytes
pub fn category_file_name(name: &str) -> Option<String> {
    const NAME_MAX: usize = 255;
    let max_stem = NAME_MAX - CATEGORY_EXT.len() - 1;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.trim().chars() {
        let replacement = if c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            '_'
        } else {
            c
        };

        if replacement == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(replacement);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut take = trimmed.len().min(max_stem);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    let stem = &trimmed[..take];
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}.{CATEGORY_EXT}"))
}
