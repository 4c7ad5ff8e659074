//! CLI Status Command
//!
//! Queries the health endpoint of a locally running server.

use anyhow::Result;

use crate::terminal_output::{note_error, note_success};

pub async fn run(port: u16) -> Result<()> {
    let url = health_url(port);
    let client = reqwest::Client::new();

    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            let body: serde_json::Value = resp.json().await?;
            note_success(&format!("MenuLens is running on port {port}"));
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Ok(resp) => {
            note_error(&format!("Health check returned {}", resp.status()));
        }
        Err(_) => {
            note_error(&format!("MenuLens is not running on port {port}"));
        }
    }

    Ok(())
}

fn health_url(port: u16) -> String {
    format!("http://localhost:{port}/api/health")
}
