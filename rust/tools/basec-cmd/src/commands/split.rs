//! Split command implementation

use anyhow::{Context, Result};

use crate::commands::load_text;

pub fn run(text: String, delimiter: String) -> Result<()> {
    let s = load_text(&text)?;
    let parts = s
        .split(delimiter.as_bytes())
        .with_context(|| format!("Failed to split on {delimiter:?}"))?;
    for part in &parts {
        println!("{part}");
    }
    Ok(())
}
