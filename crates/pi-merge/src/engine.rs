//! Per-icon reconciliation across schema generations.
//!
//! The merge is a pure function over the `{Null, Legacy, Array}` record
//! union. Base records with real path data always win outright; overrides
//! only contribute when the base side is empty or fill-only, and legacy
//! records are translated into array form with per-slot fallback to the
//! source layers.

use tracing::warn;

use pi_model::{Corpus, IconRecord, LayerEntry, LegacyRecord, MergedCorpus};

/// Which icon names are candidates for the merged corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Only names present in the base corpus.
    #[default]
    UpdateExisting,
    /// The union of base and source names.
    IncludeNew,
}

/// Result of merging two corpora.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Icons that produced a non-empty layer list.
    pub merged: MergedCorpus,
    /// Candidate icons omitted for lack of usable data, in candidate order.
    pub omitted: Vec<String>,
}

/// Reconciles one icon name across both corpora.
///
/// Returns the generation-2 layer list, or `None` when neither side yields a
/// recognizable shape. An empty list is possible and is dropped by
/// [`merge_corpora`].
pub fn merge_one(
    base: Option<&IconRecord>,
    source: Option<&IconRecord>,
) -> Option<Vec<LayerEntry>> {
    let Some(base) = base else {
        // No base entry: the source's array record is the only usable shape.
        return match source {
            Some(IconRecord::Array(layers)) => Some(layers.clone()),
            _ => None,
        };
    };

    match base {
        IconRecord::Array(base_layers) => {
            let source_layers = match source {
                Some(IconRecord::Array(layers)) => layers,
                _ => return Some(base_layers.clone()),
            };
            if base_layers.iter().any(LayerEntry::has_path) {
                // Base with real path data wins outright.
                return Some(base_layers.clone());
            }
            // Base is fill-only metadata: copy fills onto the source
            // geometry. Only positions 0 and 1 participate, the legacy
            // two-layer ceiling.
            let mut merged = source_layers.clone();
            for position in 0..2 {
                let Some(fill) = base_layers.get(position).and_then(LayerEntry::fill) else {
                    continue;
                };
                if let Some(entry) = merged.get_mut(position) {
                    *entry = entry.clone().with_fill(fill.to_string());
                }
            }
            Some(merged)
        }
        IconRecord::Legacy(legacy) => match source {
            Some(IconRecord::Array(source_layers)) => {
                Some(translate_legacy(legacy, source_layers))
            }
            _ => None,
        },
        IconRecord::Null => None,
    }
}

/// Translates a legacy before/after record into array form, filling missing
/// slot data from the corresponding source positions. The record's header
/// carries over to the first translated layer.
fn translate_legacy(legacy: &LegacyRecord, source: &[LayerEntry]) -> Vec<LayerEntry> {
    let mut layers = Vec::new();
    if legacy.has_before() {
        let d = legacy
            .path_before
            .clone()
            .or_else(|| source.first().and_then(LayerEntry::d).map(str::to_string));
        let fill = legacy
            .color_before
            .clone()
            .or_else(|| source.first().and_then(LayerEntry::fill).map(str::to_string));
        if let Some(entry) = LayerEntry::canonical(d, fill) {
            layers.push(entry);
        }
    }
    if legacy.has_after() {
        let d = legacy
            .path_after
            .clone()
            .or_else(|| source.get(1).and_then(LayerEntry::d).map(str::to_string));
        let fill = legacy
            .color_after
            .clone()
            .or_else(|| source.get(1).and_then(LayerEntry::fill).map(str::to_string));
        if let Some(entry) = LayerEntry::canonical(d, fill) {
            layers.push(entry);
        }
    }
    if let (Some(header), Some(first)) = (&legacy.header, layers.first_mut()) {
        *first = first.clone().with_header(header.clone());
    }
    layers
}

/// Merges two corpora over the candidate name set selected by `mode`.
///
/// An icon lands in the merged corpus iff its reconciled result is a
/// non-empty layer list; every other candidate is omitted with a diagnostic.
/// Pure in (base, source, mode): identical inputs produce identical output.
pub fn merge_corpora(base: &Corpus, source: &Corpus, mode: MergeMode) -> MergeReport {
    let candidates: Vec<&String> = match mode {
        MergeMode::UpdateExisting => base.keys().collect(),
        MergeMode::IncludeNew => base
            .keys()
            .chain(source.keys().filter(|name| !base.contains_key(*name)))
            .collect(),
    };

    let mut report = MergeReport::default();
    for name in candidates {
        match merge_one(base.get(name), source.get(name)) {
            Some(layers) if !layers.is_empty() => {
                report.merged.insert(name.clone(), layers);
            }
            _ => {
                warn!(icon = %name, "no source data for icon");
                report.omitted.push(name.clone());
            }
        }
    }
    report
}
