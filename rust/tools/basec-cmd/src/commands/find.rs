//! Find command implementation

use anyhow::{Context, Result};

use crate::commands::load_text;

pub fn run(text: String, needle: String, all: bool) -> Result<()> {
    let s = load_text(&text)?;
    if all {
        let offsets = s
            .find_all(needle.as_bytes())
            .with_context(|| format!("Failed to search for {needle:?}"))?;
        for offset in offsets.typed_iter::<u64>()? {
            println!("{offset}");
        }
        return Ok(());
    }

    match s.find(needle.as_bytes()) {
        Ok(offset) => println!("{offset}"),
        Err(e) if e.is_not_found() => anyhow::bail!("{needle:?} not found"),
        Err(e) => return Err(e).with_context(|| format!("Failed to search for {needle:?}")),
    }
    Ok(())
}
