pub mod record;

pub use record::{Corpus, IconRecord, LayerEntry, LegacyRecord, MergedCorpus, PathLayer};
