use goi_types::VocabularyEntry;

/// Parse a comma-separated word list where a meaning may continue onto
/// the following lines.
///
/// A line with a comma that does not start with one opens a new entry;
/// every other line is appended to the current entry's meaning (a leading
/// comma is stripped first). Entries are renumbered densely from 1 once
/// the whole list is read.
pub fn parse(raw: &str, textbook: &str) -> Vec<VocabularyEntry> {
    let mut entries: Vec<VocabularyEntry> = Vec::new();

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match line.split_once(',') {
            Some((word, meaning)) if !line.starts_with(',') => {
                let mut entry = VocabularyEntry::new(
                    textbook,
                    entries.len() as u32 + 1,
                    word.trim(),
                    meaning.trim(),
                );
                entry.grade = Some(String::new());
                entry.section = Some(0);
                entry.unit = Some(0);
                entries.push(entry);
            }
            _ => {
                // Continuation or broken line
                let text = line.strip_prefix(',').unwrap_or(line).trim();
                if text.is_empty() {
                    continue;
                }
                if let Some(current) = entries.last_mut() {
                    current.meaning.push_str(", ");
                    current.meaning.push_str(text);
                }
            }
        }
    }

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.word_number = i as u32 + 1;
    }

    entries
}
