//! Palette command: theme color suggestions from a logo.

use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::palette::extract_palette;

/// Execute palette command
pub fn extract(image: &Path, json: bool) -> Result<()> {
    let palette = extract_palette(image)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }

    println!("{}", "suggested theme colors:".bold());
    println!("  average  {}", palette.average);
    println!("  light    {}", palette.light);
    println!("  dark     {}", palette.dark);
    Ok(())
}
