use std::{fs, path::Path};

use anyhow::{Context, Result};
use opslearn_shared::extract_headings;

use crate::render;

pub fn run(file: &Path, flat: bool) -> Result<()> {
    let markdown = fs::read_to_string(file)
        .with_context(|| format!("failed to read markdown file {}", file.display()))?;
    let toc = extract_headings(&markdown);
    if toc.is_empty() {
        tracing::info!("no headings in {}", file.display());
        return Ok(());
    }
    let rendered = if flat { render::toc_flat(&toc) } else { render::toc_tree(&toc) };
    print!("{rendered}");
    Ok(())
}
