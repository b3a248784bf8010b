//! HTML preview page generation.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pi_model::MergedCorpus;

/// Renders a preview page linking the generated stylesheet.
pub fn render_html(merged: &MergedCorpus, css_href: &str) -> String {
    let mut tiles = String::new();
    for name in merged.keys() {
        let _ = write!(
            tiles,
            "      <li><span class=\"pi-{name}\"></span><code>{name}</code></li>\n"
        );
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>path-icons preview</title>\n\
           <link rel=\"stylesheet\" href=\"{css_href}\">\n\
           <style>\n\
             body {{ font-family: sans-serif; margin: 2rem; }}\n\
             ul {{ list-style: none; padding: 0; display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: .5rem; }}\n\
             li {{ display: flex; align-items: center; gap: .5rem; }}\n\
           </style>\n\
         </head>\n\
         <body>\n\
           <h1>path-icons</h1>\n\
           <ul>\n\
         {tiles}      </ul>\n\
         </body>\n\
         </html>\n"
    )
}

/// Writes the preview page, creating parent directories.
pub fn write_html(merged: &MergedCorpus, css_href: &str, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(output_path, render_html(merged, css_href))
        .with_context(|| format!("write {}", output_path.display()))?;
    debug!(path = %output_path.display(), "wrote html preview");
    Ok(())
}
