//! Category file format: one template per line, `#` comments, blanks ignored.

/// Templates listed in a category file, in line order.
pub fn parse_templates(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Replace every line whose trimmed text equals `old` with `new`.
///
/// Other lines are kept byte for byte. Returns the new content and the number
/// of lines replaced.
pub fn replace_lines(content: &str, old: &str, new: &str) -> (String, usize) {
    let old = old.trim();
    let mut replaced = 0;
    let mut out = String::with_capacity(content.len() + new.len());
    for line in content.split_inclusive('\n') {
        if line.trim() == old {
            out.push_str(new);
            out.push_str(line_ending(line));
            replaced += 1;
        } else {
            out.push_str(line);
        }
    }
    (out, replaced)
}

/// The terminator of `line`: `\r\n`, `\n`, or nothing on an unterminated last line.
fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// Drop every line whose trimmed text is in `targets`. Returns the new content
/// and the number of lines removed.
pub fn remove_lines(content: &str, targets: &[String]) -> (String, usize) {
    let mut removed = 0;
    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let trimmed = line.trim();
        if !trimmed.is_empty() && targets.iter().any(|t| t.trim() == trimmed) {
            removed += 1;
        } else {
            out.push_str(line);
        }
    }
    (out, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "# movies\nhttps://a.com/?s={}\n\n   \n  https://b.com/search/{}  \n#https://c.com/?s={}\n";
        assert_eq!(
            parse_templates(content),
            vec!["https://a.com/?s={}", "https://b.com/search/{}"]
        );
    }

    #[test]
    fn replace_keeps_other_lines() {
        let content = "# header\nhttps://old.com/?s={}\n\nhttps://other.com/?s={}";
        let (out, n) = replace_lines(content, "https://old.com/?s={}", "https://new.org/?s={}");
        assert_eq!(n, 1);
        assert_eq!(
            out,
            "# header\nhttps://new.org/?s={}\n\nhttps://other.com/?s={}"
        );
        let (out, _) = replace_lines("https://old.com/?s={}", "https://old.com/?s={}", "x");
        assert_eq!(out, "x");
    }

    #[test]
    fn replace_matches_trimmed_lines_and_duplicates() {
        let content = "  https://old.com/?s={}  \r\nhttps://old.com/?s={}\n";
        let (out, n) = replace_lines(content, "https://old.com/?s={}", "https://new.org/?s={}");
        assert_eq!(n, 2);
        assert_eq!(out, "https://new.org/?s={}\r\nhttps://new.org/?s={}\n");
    }

    #[test]
    fn replace_keeps_crlf_line_endings() {
        let (out, n) = replace_lines("a\r\nold\r\nb\r\n", "old", "new");
        assert_eq!(n, 1);
        assert_eq!(out, "a\r\nnew\r\nb\r\n");
    }

    #[test]
    fn replace_without_match_is_identity() {
        let content = "https://a.com/?s={}\n";
        let (out, n) = replace_lines(content, "https://zzz.com/", "x");
        assert_eq!(n, 0);
        assert_eq!(out, content);
    }

    #[test]
    fn remove_drops_only_targets() {
        let content = "https://a.com/?s={}\n# keep\nhttps://b.com/?s={}\n";
        let (out, n) = remove_lines(content, &["https://a.com/?s={}".to_string()]);
        assert_eq!(n, 1);
        assert_eq!(out, "# keep\nhttps://b.com/?s={}\n");
    }
}
