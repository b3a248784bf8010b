//! Icon record shapes across both historical schema generations.
//!
//! A corpus maps icon names to records in one of three shapes:
//!
//! - `null` — the icon was considered but carries no usable drawable data;
//! - a legacy object addressing at most two layers by the fixed roles
//!   `pathBefore`/`pathAfter` (generation 1);
//! - an ordered array of layers, each either a bare draw-command string or a
//!   structured object (generation 2).
//!
//! All reconciliation logic dispatches on [`IconRecord`] explicitly; the wire
//! format is handled by serde untagged enums so mixed-generation corpora
//! deserialize without any shape sniffing at call sites.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from icon name to record, any generation. Sorted iteration keeps
/// every downstream pass deterministic.
pub type Corpus = BTreeMap<String, IconRecord>;

/// Merge output: icon name to a non-empty ordered layer list, generation 2
/// by construction.
pub type MergedCorpus = BTreeMap<String, Vec<LayerEntry>>;

/// A drawable layer in structured form.
///
/// `d` is an opaque draw-command string; it is never parsed, only trimmed
/// and passed through. `fill` is a color token (`#`-prefixed lowercase hex
/// or a named color). `header` is an optional display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

/// One entry of a generation-2 array record.
///
/// A layer with a draw-command and nothing else is stored as the bare string
/// for compactness; anything carrying fill or header information stays
/// structured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerEntry {
    /// Bare draw-command string.
    Path(String),
    /// Structured layer with optional fill and header.
    Layer(PathLayer),
}

impl LayerEntry {
    /// The draw-command of this entry, if present.
    pub fn d(&self) -> Option<&str> {
        match self {
            LayerEntry::Path(d) => Some(d.as_str()),
            LayerEntry::Layer(layer) => layer.d.as_deref(),
        }
    }

    /// The fill color of this entry, if present and non-empty.
    pub fn fill(&self) -> Option<&str> {
        match self {
            LayerEntry::Path(_) => None,
            LayerEntry::Layer(layer) => layer.fill.as_deref().filter(|f| !f.is_empty()),
        }
    }

    /// The display header of this entry, if present.
    pub fn header(&self) -> Option<&str> {
        match self {
            LayerEntry::Path(_) => None,
            LayerEntry::Layer(layer) => layer.header.as_deref(),
        }
    }

    /// Returns true if the entry carries a non-empty draw-command.
    pub fn has_path(&self) -> bool {
        self.d().is_some_and(|d| !d.is_empty())
    }

    /// Builds the canonical entry for a draw-command/fill pair.
    ///
    /// A draw-command without a fill reduces to the bare string; a fill with
    /// or without a draw-command stays structured; neither yields `None`.
    pub fn canonical(d: Option<String>, fill: Option<String>) -> Option<LayerEntry> {
        let d = d.filter(|d| !d.is_empty());
        let fill = fill.filter(|f| !f.is_empty());
        match (d, fill) {
            (Some(d), None) => Some(LayerEntry::Path(d)),
            (d, fill @ Some(_)) => Some(LayerEntry::Layer(PathLayer {
                d,
                fill,
                header: None,
            })),
            (None, None) => None,
        }
    }

    /// Returns this entry with the given fill applied, promoting a bare
    /// string to a structured layer when needed.
    pub fn with_fill(self, fill: String) -> LayerEntry {
        match self {
            LayerEntry::Path(d) => LayerEntry::Layer(PathLayer {
                d: Some(d),
                fill: Some(fill),
                header: None,
            }),
            LayerEntry::Layer(mut layer) => {
                layer.fill = Some(fill);
                LayerEntry::Layer(layer)
            }
        }
    }

    /// Returns this entry with the given header applied, promoting a bare
    /// string to a structured layer when needed.
    pub fn with_header(self, header: String) -> LayerEntry {
        match self {
            LayerEntry::Path(d) => LayerEntry::Layer(PathLayer {
                d: Some(d),
                fill: None,
                header: Some(header),
            }),
            LayerEntry::Layer(mut layer) => {
                layer.header = Some(header);
                LayerEntry::Layer(layer)
            }
        }
    }
}

/// Generation-1 record: at most two layers addressed by fixed role names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

impl LegacyRecord {
    /// Returns true if the "before" role carries any data.
    pub fn has_before(&self) -> bool {
        self.path_before.is_some() || self.color_before.is_some()
    }

    /// Returns true if the "after" role carries any data.
    pub fn has_after(&self) -> bool {
        self.path_after.is_some() || self.color_after.is_some()
    }
}

/// A per-icon record in any of the three historical shapes.
///
/// Untagged variant order matters for deserialization: JSON `null` matches
/// `Null`, a JSON array matches `Array`, and any object matches `Legacy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconRecord {
    /// Icon recognized but without usable drawable data.
    Null,
    /// Generation-2 ordered layer list.
    Array(Vec<LayerEntry>),
    /// Generation-1 before/after record.
    Legacy(LegacyRecord),
}

impl IconRecord {
    /// The layer list when this record is generation 2.
    pub fn as_array(&self) -> Option<&[LayerEntry]> {
        match self {
            IconRecord::Array(layers) => Some(layers),
            _ => None,
        }
    }

    /// Returns true if any layer carries a non-empty draw-command.
    pub fn has_drawable_path(&self) -> bool {
        match self {
            IconRecord::Array(layers) => layers.iter().any(LayerEntry::has_path),
            IconRecord::Legacy(legacy) => {
                legacy.path_before.as_deref().is_some_and(|d| !d.is_empty())
                    || legacy.path_after.as_deref().is_some_and(|d| !d.is_empty())
            }
            IconRecord::Null => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_reduces_path_only_to_bare_string() {
        let entry = LayerEntry::canonical(Some("M1 2".to_string()), None).unwrap();
        assert_eq!(entry, LayerEntry::Path("M1 2".to_string()));
    }

    #[test]
    fn canonical_keeps_fill_structured() {
        let entry = LayerEntry::canonical(Some("M1".to_string()), Some("#abc".to_string()));
        assert_eq!(
            entry,
            Some(LayerEntry::Layer(PathLayer {
                d: Some("M1".to_string()),
                fill: Some("#abc".to_string()),
                header: None,
            }))
        );

        let fill_only = LayerEntry::canonical(None, Some("#abc".to_string())).unwrap();
        assert_eq!(fill_only.d(), None);
        assert_eq!(fill_only.fill(), Some("#abc"));
    }

    #[test]
    fn canonical_drops_empty_pair() {
        assert_eq!(LayerEntry::canonical(None, None), None);
        assert_eq!(
            LayerEntry::canonical(Some(String::new()), Some(String::new())),
            None
        );
    }

    #[test]
    fn with_fill_promotes_bare_string() {
        let entry = LayerEntry::Path("M1".to_string()).with_fill("#fff".to_string());
        assert_eq!(entry.d(), Some("M1"));
        assert_eq!(entry.fill(), Some("#fff"));
    }

    #[test]
    fn with_header_promotes_bare_string() {
        let entry = LayerEntry::Path("M1".to_string()).with_header("Alarm".to_string());
        assert_eq!(entry.d(), Some("M1"));
        assert_eq!(entry.fill(), None);
        assert_eq!(entry.header(), Some("Alarm"));
    }
}
