//! noor-corpus
//!
//! Getting records into memory: the JSON document format, the places a
//! document can come from, the prioritized loader with its built-in fallback,
//! and the catalog of known collections.
pub mod catalog;
pub mod document;
pub mod handle;
pub mod loader;
pub mod samples;
pub mod source;

pub use catalog::Catalog;
pub use handle::CorpusHandle;
pub use loader::{load_corpus, CorpusLoader, LoadOutcome, LoadStatus, DEGRADED_WARNING};
pub use source::{source_for, FileSource, HttpSource, InlineSource};
