use goi_types::VocabularyEntry;

/// Parse a tab-separated word list (`word<TAB>meaning` per line).
///
/// Word numbers follow absolute line position: blank lines and lines
/// without a tab produce no entry but still consume their index, so the
/// numbering may have gaps. Surrounding whitespace of the whole text is
/// stripped before lines are counted.
pub fn parse(raw: &str, textbook: &str) -> Vec<VocabularyEntry> {
    let mut entries = Vec::new();

    for (i, line) in raw.trim().lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() >= 2 {
            entries.push(VocabularyEntry::new(
                textbook,
                i as u32 + 1,
                parts[0].trim(),
                parts[1].trim(),
            ));
        }
    }

    entries
}
