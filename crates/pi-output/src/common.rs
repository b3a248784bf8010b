//! Shared projection helpers for the generators.

use pi_model::LayerEntry;

/// A layer flattened for legacy-compatible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedLayer {
    pub d: String,
    pub fill: Option<String>,
}

/// The two-slot view of a generation-2 layer list.
///
/// Position 0 renders first and becomes the "before" slot; the
/// draw-commands of positions >= 1 are concatenated into one "after" value,
/// with position 1 supplying the after fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyProjection {
    pub before: Option<ProjectedLayer>,
    pub after: Option<ProjectedLayer>,
}

/// Projects an ordered layer list onto the before/after roles.
pub fn project_legacy(layers: &[LayerEntry]) -> LegacyProjection {
    let before = layers.first().and_then(|layer| {
        let d = layer.d().filter(|d| !d.is_empty())?;
        Some(ProjectedLayer {
            d: d.to_string(),
            fill: layer.fill().map(str::to_string),
        })
    });

    let after_commands: Vec<&str> = layers
        .iter()
        .skip(1)
        .filter_map(|layer| layer.d().filter(|d| !d.is_empty()))
        .collect();
    let after = if after_commands.is_empty() {
        None
    } else {
        Some(ProjectedLayer {
            d: after_commands.join(" "),
            fill: layers.get(1).and_then(|l| l.fill()).map(str::to_string),
        })
    };

    LegacyProjection { before, after }
}

/// Converts an icon name like `arrow-down-up` to `ArrowDownUp`.
pub fn pascal_case(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Renders a fill token as a C# color argument: `0` when absent,
/// `0xff<hex>` (full opacity) for `#`-colors, `KnownColor.<name>` otherwise.
pub fn csharp_color(fill: Option<&str>) -> String {
    match fill {
        None => "0".to_string(),
        Some(hex) if hex.starts_with('#') => {
            format!("0xff{}", hex[1..].to_lowercase())
        }
        Some(named) => format!("KnownColor.{named}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_model::PathLayer;

    fn bare(d: &str) -> LayerEntry {
        LayerEntry::Path(d.to_string())
    }

    fn filled(d: &str, fill: &str) -> LayerEntry {
        LayerEntry::Layer(PathLayer {
            d: Some(d.to_string()),
            fill: Some(fill.to_string()),
            header: None,
        })
    }

    #[test]
    fn projects_single_layer_as_before() {
        let projection = project_legacy(&[filled("M1", "#111")]);
        assert_eq!(
            projection.before,
            Some(ProjectedLayer {
                d: "M1".to_string(),
                fill: Some("#111".to_string()),
            })
        );
        assert_eq!(projection.after, None);
    }

    #[test]
    fn concatenates_trailing_layers_as_after() {
        let projection = project_legacy(&[bare("M0"), filled("M1", "red"), bare("M2")]);
        assert_eq!(
            projection.after,
            Some(ProjectedLayer {
                d: "M1 M2".to_string(),
                fill: Some("red".to_string()),
            })
        );
    }

    #[test]
    fn skips_fill_only_before_layer() {
        let fill_only = LayerEntry::Layer(PathLayer {
            d: None,
            fill: Some("#abc".to_string()),
            header: None,
        });
        let projection = project_legacy(&[fill_only, bare("M1")]);
        assert_eq!(projection.before, None);
        assert_eq!(projection.after.unwrap().d, "M1");
    }

    #[test]
    fn pascal_case_splits_on_dashes() {
        assert_eq!(pascal_case("alarm"), "Alarm");
        assert_eq!(pascal_case("arrow-down-up"), "ArrowDownUp");
        assert_eq!(pascal_case("badge-8k"), "Badge8k");
    }

    #[test]
    fn csharp_color_forms() {
        assert_eq!(csharp_color(None), "0");
        assert_eq!(csharp_color(Some("#11AA22")), "0xff11aa22");
        assert_eq!(csharp_color(Some("red")), "KnownColor.red");
    }
}
