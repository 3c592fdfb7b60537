pub mod lines;

use anyhow::{Context, Result};
use regex::Regex;

use lines::Line;

/// Boundary between the header block and the article body.
pub const SEPARATOR: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Text after the first separator, trimmed.
    Separated(String),
    /// No separator anywhere; the raw document, untouched.
    Whole(String),
}

impl Body {
    pub fn into_text(self) -> String {
        match self {
            Body::Separated(text) | Body::Whole(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub title: Option<String>,
    pub link: Option<String>,
    pub body: Body,
}

/// Line scanner for title and link, plus a single split for the body.
#[derive(Debug, Clone)]
pub struct DocumentParser {
    link_re: Regex,
}

impl DocumentParser {
    pub fn new(link_label: &str) -> Result<Self> {
        let link_re = lines::labeled_field_regex(link_label)
            .with_context(|| format!("invalid link label {:?}", link_label))?;
        Ok(Self { link_re })
    }

    pub fn parse(&self, text: &str) -> ParsedDocument {
        let mut title = None;
        let mut link = None;

        for line in lines::classify_lines(text, &self.link_re) {
            match line {
                Line::Title(t) if title.is_none() => title = Some(t),
                Line::Labeled(l) if link.is_none() => link = Some(l),
                _ => {}
            }
            if title.is_some() && link.is_some() {
                break;
            }
        }

        ParsedDocument {
            title,
            link,
            body: split_body(text),
        }
    }
}

/// Only the first separator is consumed; later ones stay in the body.
pub fn split_body(text: &str) -> Body {
    match text.split_once(SEPARATOR) {
        Some((_, rest)) => Body::Separated(rest.trim().to_string()),
        None => Body::Whole(text.to_string()),
    }
}
