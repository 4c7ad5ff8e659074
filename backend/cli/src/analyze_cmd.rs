//! CLI Analyze Command
//!
//! Runs the pipeline in-process on a local photo, without the HTTP layer.

use std::path::Path;

use anyhow::{bail, Context, Result};

use menulens_config::MenuLensConfig;
use menulens_core::MenuResponse;
use menulens_pipeline::MenuPipeline;
use menulens_understanding::{detect_image_mime, sniff_image_mime};

use crate::terminal_output::{note_info, note_warn, render_table, Column};

pub async fn run(config: &MenuLensConfig, image: &Path, json: bool) -> Result<()> {
    let bytes = tokio::fs::read(image)
        .await
        .with_context(|| format!("Failed to read image: {}", image.display()))?;
    if bytes.is_empty() {
        bail!("Image file is empty: {}", image.display());
    }
    if bytes.len() > config.server.max_upload_bytes {
        bail!(
            "Image is {} bytes; the limit is {}",
            bytes.len(),
            config.server.max_upload_bytes
        );
    }

    let mime_type = sniff_image_mime(&bytes).unwrap_or_else(|| detect_image_mime(image));
    if !config.search.is_configured() {
        note_warn("Image search is not configured; every item will have no image");
    }
    note_info(&format!("Analyzing {} ({mime_type})", image.display()));

    let pipeline = MenuPipeline::from_config(config);
    let response = pipeline.process(&bytes, mime_type).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_menu(&response));
    }
    Ok(())
}

fn render_menu(response: &MenuResponse) -> String {
    let columns = [Column::right("#"), Column::left("Item"), Column::left("Image")];
    let rows: Vec<Vec<String>> = response
        .menu
        .iter()
        .enumerate()
        .map(|(i, result)| {
            vec![
                (i + 1).to_string(),
                result.item.clone(),
                result.image.clone().unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    render_table(&columns, &rows)
}
