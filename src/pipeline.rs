use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::classify::Selector;
use crate::parser::DocumentParser;
use crate::record::ArticleRecord;
use crate::settings::Settings;

/// Directory scan → classify → parse → build, in filename order.
pub struct Pipeline {
    source_dir: PathBuf,
    extension: String,
    selector: Selector,
    parser: DocumentParser,
}

impl Pipeline {
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            source_dir: settings.source_dir.clone(),
            extension: settings.extension.clone(),
            selector: settings.selector(),
            parser: DocumentParser::new(&settings.link_label)?,
        })
    }

    /// All-or-nothing: the first unreadable file aborts the whole run.
    pub fn collect(&self) -> Result<Vec<ArticleRecord>> {
        let candidates = list_candidates(&self.source_dir, &self.extension)?;
        info!(dir = %self.source_dir.display(), candidates = candidates.len(), "scanning");

        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}",
                )?
                .progress_chars("#>-"),
        );

        let mut records = Vec::new();
        for (file_name, path) in &candidates {
            pb.inc(1);
            let Some(name) = self.selector.classify(file_name, &self.extension) else {
                continue;
            };

            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            let doc = self.parser.parse(&text);
            if doc.title.is_none() {
                debug!(file = %file_name, "no title line, using filename");
            }
            records.push(ArticleRecord::build(&name, doc));
        }

        pb.finish_and_clear();
        info!(eligible = records.len(), "collected");
        Ok(records)
    }
}

/// Regular files with the wanted extension, sorted by filename.
fn list_candidates(dir: &Path, extension: &str) -> Result<Vec<(String, PathBuf)>> {
    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    let entries = fs::read_dir(dir).with_context(|| format!("Failed to open {:?}", dir))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %path.display(), "skipping non UTF-8 filename");
            continue;
        };
        if file_name.ends_with(&suffix) {
            files.push((file_name, path));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}
