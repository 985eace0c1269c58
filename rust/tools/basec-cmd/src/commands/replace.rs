//! Replace command implementation

use anyhow::{Context, Result};

use crate::commands::load_text;

pub fn run(text: String, find: String, replacement: String) -> Result<()> {
    let s = load_text(&text)?;
    let replaced = s
        .replace(find.as_bytes(), replacement.as_bytes())
        .with_context(|| format!("Failed to replace {find:?} with {replacement:?}"))?;
    println!("{replaced}");
    Ok(())
}
