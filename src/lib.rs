//! Export one series of dated markdown posts, filtered by a date window,
//! as a single JSON array.
//!
//! `filename` → `classify` → `parser` → `record` → `pipeline` → `report`.

pub mod classify;
pub mod filename;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod settings;

pub use pipeline::Pipeline;
pub use record::ArticleRecord;
pub use settings::Settings;

use std::io::{self, Write};

use anyhow::Result;

/// Collect, write, and report to stdout. Returns the records that were written.
pub fn run(settings: &Settings) -> Result<Vec<ArticleRecord>> {
    run_with_output(settings, &mut io::stdout().lock())
}

/// Count first, then the file write, then the saved path and numbered list.
pub fn run_with_output(settings: &Settings, out: &mut impl Write) -> Result<Vec<ArticleRecord>> {
    let records = Pipeline::new(settings)?.collect()?;
    report::print_found(out, &records)?;

    report::write_json(&settings.output_path, &records)?;
    report::print_saved(out, &settings.output_path, &records)?;
    out.flush()?;
    Ok(records)
}
