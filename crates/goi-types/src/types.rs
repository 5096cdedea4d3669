use serde::{Deserialize, Serialize};

/// One parsed word/meaning pair with its textbook metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub textbook: String,
    pub word_number: u32,
    pub word: String,
    pub meaning: String,
    /// Emitted only by datasets that carry grade/section/unit metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<u32>,
}

impl VocabularyEntry {
    pub fn new(textbook: &str, word_number: u32, word: &str, meaning: &str) -> Self {
        Self {
            textbook: textbook.to_string(),
            word_number,
            word: word.to_string(),
            meaning: meaning.to_string(),
            grade: None,
            section: None,
            unit: None,
        }
    }
}

/// Source text layout of a raw word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// One `word<TAB>meaning` pair per line, numbered by absolute line position
    TabSeparated,
    /// `no,word,meaning` CSV with an optional header row
    NumberedCsv,
    /// `word,meaning` lines where meanings continue onto following lines
    CommaContinuation,
}

/// A named conversion: fixed textbook label, fixed paths, source format
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub name: &'static str,
    pub textbook: &'static str,
    pub input: &'static str,
    pub output: &'static str,
    pub format: SourceFormat,
}
