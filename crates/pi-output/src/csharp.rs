//! C# enum generation with per-icon symbol path attributes.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use pi_model::MergedCorpus;

use crate::common::{csharp_color, pascal_case, project_legacy};

/// Options for the generated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsharpOptions {
    /// Namespace the enum lives in.
    pub namespace: String,
    /// Attribute name applied per projected layer.
    pub attr_name: String,
}

impl Default for CsharpOptions {
    fn default() -> Self {
        Self {
            namespace: "SharedLib.Bootstrap".to_string(),
            attr_name: "SymbolPath".to_string(),
        }
    }
}

/// Renders the enum declaration. One member per icon, in PascalCase, with
/// one attribute per projected before/after layer.
pub fn render_csharp(merged: &MergedCorpus, enum_name: &str, options: &CsharpOptions) -> String {
    let mut members = String::new();
    for (name, layers) in merged {
        let projection = project_legacy(layers);
        let comment = match layers.first().and_then(|l| l.header()) {
            Some(header) => format!("{header}, {name}"),
            None => name.clone(),
        };

        if !members.is_empty() {
            members.push('\n');
        }
        let _ = writeln!(members, "    /// <summary>{comment}</summary>");
        for layer in [&projection.before, &projection.after].into_iter().flatten() {
            let _ = writeln!(
                members,
                "    [{attr}(\"{d}\", {color})]",
                attr = options.attr_name,
                d = layer.d,
                color = csharp_color(layer.fill.as_deref()),
            );
        }
        let _ = writeln!(members, "    {},", pascal_case(name));
    }

    format!(
        "using System.Drawing;\n\n\
         namespace {namespace};\n\n\
         public enum {enum_name}\n\
         {{\n\
         {members}}}\n",
        namespace = options.namespace,
    )
}

/// Writes the enum declaration; the enum name derives from the output file
/// stem.
pub fn write_csharp(merged: &MergedCorpus, output_path: &Path, options: &CsharpOptions) -> Result<()> {
    let enum_name = output_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow!("invalid C# output path: {}", output_path.display()))?;
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(output_path, render_csharp(merged, enum_name, options))
        .with_context(|| format!("write {}", output_path.display()))?;
    debug!(path = %output_path.display(), "wrote csharp enum");
    Ok(())
}
