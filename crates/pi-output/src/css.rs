//! CSS rule generation over the merged corpus.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use pi_model::MergedCorpus;

use crate::common::{ProjectedLayer, project_legacy};

/// Shared stylesheet prelude: sized inline-block hosts with the icon drawn
/// by the two pseudo-elements.
const BASE_STYLES: &str = "\
[class^='pi-'],
[class*=' pi-'] {
  position: relative;
  display: inline-block;
  width: 16px;
  height: 16px;
  vertical-align: text-bottom;
}

[class^='pi-']::before,
[class*=' pi-']::before,
[class^='pi-']::after,
[class*=' pi-']::after {
  position: absolute;
  inset: 0;
  background-color: currentcolor;
}
";

/// Renders the full stylesheet for a merged corpus.
pub fn render_css(merged: &MergedCorpus) -> String {
    let mut css = String::from(BASE_STYLES);
    for (name, layers) in merged {
        let projection = project_legacy(layers);
        if let Some(layer) = &projection.before {
            append_rule(&mut css, name, "before", layer);
        }
        if let Some(layer) = &projection.after {
            append_rule(&mut css, name, "after", layer);
        }
    }
    css
}

fn append_rule(css: &mut String, name: &str, role: &str, layer: &ProjectedLayer) {
    let _ = write!(
        css,
        "\n.pi-{name}::{role} {{ content: ''; clip-path: path(\"{}\");",
        layer.d
    );
    if let Some(fill) = &layer.fill {
        let _ = write!(css, " background-color: {fill};");
    }
    css.push_str(" }\n");
}

/// Writes the stylesheet, creating parent directories.
pub fn write_css(merged: &MergedCorpus, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let css = render_css(merged);
    std::fs::write(output_path, css)
        .with_context(|| format!("write {}", output_path.display()))?;
    debug!(path = %output_path.display(), icons = merged.len(), "wrote css");
    Ok(())
}
