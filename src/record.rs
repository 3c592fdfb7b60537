use serde::{Deserialize, Serialize};

use crate::filename::DatedName;
use crate::parser::ParsedDocument;

/// One exported article. Field order here is the key order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    id: String,
    title: String,
    date: String,
    link: String,
    content: String,
}

impl ArticleRecord {
    /// Missing title falls back to the filename, missing link to `""`.
    pub fn build(name: &DatedName, doc: ParsedDocument) -> Self {
        Self {
            id: name.id.clone(),
            title: doc.title.unwrap_or_else(|| name.file_name.clone()),
            date: name.date.clone(),
            link: doc.link.unwrap_or_default(),
            content: doc.body.into_text(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
