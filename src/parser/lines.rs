use std::sync::LazyLock;

use regex::Regex;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^# (.+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `# Heading` (level 1 only).
    Title(String),
    /// `**<label>**: value`, label at the start of the line.
    Labeled(String),
    Other,
}

/// Build the pattern for a bolded label line, e.g. `**原文連結**: https://...`.
pub fn labeled_field_regex(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"^\*\*{}\*\*: (.+)$", regex::escape(label)))
}

/// One pass over the document; each line gets exactly one classification.
pub fn classify_lines(text: &str, labeled: &Regex) -> Vec<Line> {
    text.lines().map(|line| classify_line(line, labeled)).collect()
}

fn classify_line(line: &str, labeled: &Regex) -> Line {
    if let Some(caps) = TITLE_RE.captures(line) {
        return Line::Title(caps[1].to_string());
    }
    if let Some(caps) = labeled.captures(line) {
        return Line::Labeled(caps[1].to_string());
    }
    Line::Other
}
