//! Demo command implementation

use anyhow::{Context, Result};
use basec_common::Handle;
use basec_string::{GrowableString, destroy_all};

pub fn run() -> Result<()> {
    let mut s = GrowableString::new("A1, B2, C3, D4", 14).context("Failed to create string")?;
    println!("Initial: {s} (len {}, cap {})", s.len(), s.capacity());

    s.append(b", E5").context("Failed to append")?;
    println!("Appended: {s} (len {}, cap {})", s.len(), s.capacity());

    s.replace_in_place(b", ", b"|")
        .context("Failed to replace separators")?;
    println!("Replaced: {s}");

    let mut parts = Handle::new(s.split(b"|").context("Failed to split")?);
    let list = parts.get()?;
    println!("Split into {} parts:", list.len());
    for (i, part) in list.iter().enumerate() {
        println!("  [{i}] {part}");
    }

    let offsets = s.find_all(b"|").context("Failed to find delimiters")?;
    let offsets = offsets.to_typed_vec::<u64>()?;
    println!("Delimiter offsets: {offsets:?}");

    destroy_all(&mut parts)?;
    Ok(())
}
