use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::api::OllamaClient;
use crate::config::Settings;
use crate::notes;
use crate::summary::{build_summary_prompt, strip_think_block};

/// Summarize the day's note and write `<date>.summary.md` next to it.
/// Returns the summary path.
pub async fn run_summarize(
    settings: &Settings,
    ollama: &OllamaClient,
    date: &str,
) -> Result<PathBuf> {
    let note_path = notes::daily_note_path(settings, date)?;
    if !notes::exists(&note_path) {
        anyhow::bail!("Nothing to summarize: no daily note for {}", date);
    }

    let note = notes::read(&note_path)?;
    let prompt = build_summary_prompt(&note);

    println!("Generating note summary. This may take some time.");
    let response = ollama.generate(&prompt).await?;
    let summary = strip_think_block(&response);

    let summary_path = notes::daily_summary_path(settings, date)?;
    notes::write(&summary_path, summary)?;

    info!("Summary for {} written to {:?}", date, summary_path);
    println!("Wrote summary: {}.summary.md", date);
    Ok(summary_path)
}
