pub mod types;

pub use types::{Dataset, SourceFormat, VocabularyEntry};
