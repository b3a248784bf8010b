pub mod corpus;
pub mod engine;
pub mod error;

pub use corpus::{load_base_corpus, load_override_corpus, prepare_merged};
pub use engine::{MergeMode, MergeReport, merge_corpora, merge_one};
pub use error::{MergeError, Result};
