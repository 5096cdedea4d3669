use goi_types::{SourceFormat, VocabularyEntry};

pub mod group30;
pub mod kobun351;
pub mod teppeki;

/// Parse raw list text in the given source format
pub fn parse(format: SourceFormat, raw: &str, textbook: &str) -> Vec<VocabularyEntry> {
    match format {
        SourceFormat::TabSeparated => group30::parse(raw, textbook),
        SourceFormat::NumberedCsv => teppeki::parse(raw, textbook),
        SourceFormat::CommaContinuation => kobun351::parse(raw, textbook),
    }
}
