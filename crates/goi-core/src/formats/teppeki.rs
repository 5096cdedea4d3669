use goi_types::VocabularyEntry;

/// Parse a numbered `no,word,meaning` CSV with an optional header row.
///
/// Blank lines are dropped before rows are numbered, so the positional
/// fallback counts retained rows (the header included, when present).
pub fn parse(raw: &str, textbook: &str) -> Vec<VocabularyEntry> {
    let lines: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Vec::new();
    }

    let start = if looks_like_header(lines[0]) { 1 } else { 0 };
    let mut entries = Vec::new();

    for (i, line) in lines.iter().enumerate().skip(start) {
        let row = split_csv_line(line);
        if row.len() < 2 {
            continue;
        }

        let position = i as u32 + 1;
        let (number, word, meaning) = match row.len() {
            3 => (Some(row[0].as_str()), row[1].as_str(), row[2].as_str()),
            2 if is_numeric(&row[0]) => (Some(row[0].as_str()), row[1].as_str(), ""),
            _ => (None, row[0].as_str(), row[1].as_str()),
        };

        let word_number = number
            .map(|n| n.chars().filter(|c| c.is_ascii_digit()).collect::<String>())
            .and_then(|digits| digits.parse().ok())
            .filter(|&n| n != 0)
            .unwrap_or(position);

        entries.push(VocabularyEntry::new(
            textbook,
            word_number,
            word,
            &normalize_meaning(meaning),
        ));
    }

    entries
}

// Loose keyword test: a first row containing any of these substrings is
// treated as a header and skipped.
fn looks_like_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("no")
        || lower.contains("word")
        || lower.contains("meaning")
        || lower.contains("番号")
}

/// Split one CSV row on commas, honoring double quotes. Quote characters
/// themselves are not emitted; fields are trimmed.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            '\r' => {}
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

fn is_numeric(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_digit())
}

/// Full-width and ASCII semicolons become spaces.
fn normalize_meaning(meaning: &str) -> String {
    meaning.replace('；', " ").replace(';', " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTBOOK: &str = "改訂版 鉄緑会東大英単語熟語 鉄壁";

    #[test]
    fn header_row_is_skipped() {
        let entries = parse("No,Word,Meaning\n1,apple,りんご", TEXTBOOK);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "apple");
        assert_eq!(entries[0].word_number, 1);
    }

    #[test]
    fn quoted_field_keeps_its_comma() {
        let entries = parse("2,bank,\"金融機関, 銀行\"", TEXTBOOK);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meaning, "金融機関, 銀行");
    }

    #[test]
    fn number_is_extracted_from_digits() {
        let entries = parse("12.,settle,定住する", TEXTBOOK);

        assert_eq!(entries[0].word_number, 12);
    }

    #[test]
    fn semicolons_become_spaces() {
        let entries = parse("3,run,走る；駆ける;急ぐ", TEXTBOOK);

        assert_eq!(entries[0].meaning, "走る 駆ける 急ぐ");
    }

    #[test]
    fn numeric_two_field_row_has_empty_meaning() {
        let entries = parse("4,settle", TEXTBOOK);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "settle");
        assert_eq!(entries[0].meaning, "");
        assert_eq!(entries[0].word_number, 4);
    }

    #[test]
    fn wordless_number_falls_back_to_row_position() {
        let entries = parse("apple,りんご\nbanana,バナナ", TEXTBOOK);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word_number, 1);
        assert_eq!(entries[1].word_number, 2);
    }

    #[test]
    fn single_field_row_is_dropped() {
        let entries = parse("1,apple,りんご\njust-one-field", TEXTBOOK);

        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn blank_lines_are_dropped_before_numbering() {
        let entries = parse("apple,りんご\n\n\nbanana,バナナ", TEXTBOOK);

        assert_eq!(entries[1].word_number, 2);
    }
}
