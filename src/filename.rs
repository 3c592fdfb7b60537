//! Metadata carried in the filename: `YYYY-MM-DD-<slug>.<ext>`.

/// Width of the `YYYY-MM-DD` prefix, in characters.
pub const DATE_LEN: usize = 10;

/// A filename split into the parts the pipeline needs, parsed once at ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedName {
    pub file_name: String,
    pub id: String,
    pub date: String,
}

impl DatedName {
    /// Returns `None` for names shorter than the date prefix.
    ///
    /// The prefix is the first ten characters, taken verbatim; nothing
    /// checks that it is a real date.
    pub fn parse(file_name: &str, extension: &str) -> Option<Self> {
        let date: String = file_name.chars().take(DATE_LEN).collect();
        if date.chars().count() < DATE_LEN {
            return None;
        }
        let suffix = format!(".{}", extension);
        let id = file_name.strip_suffix(suffix.as_str()).unwrap_or(file_name);

        Some(Self {
            file_name: file_name.to_string(),
            id: id.to_string(),
            date,
        })
    }
}
