use std::{
    fs,
    path::Path,
};

use crate::{
    cards::Card,
    core::MilimError,
};

const CORE_COLUMNS: &[&str] = &["Word", "Translation", "Pronunciation"];

/// Read a delimited word list into cards. The extension picks the
/// delimiter; workbooks have to be exported to CSV first.
pub fn read_source_file(path: &Path, additional_tags: &str) -> Result<Vec<Card>, MilimError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();
    let delimiter = match extension.as_str() {
        "csv" => ',',
        "tsv" | "tab" => '\t',
        _ => return Err(MilimError::UnsupportedFileType(path.display().to_string())),
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("input");
    let content = fs::read_to_string(path)
        .map_err(|e| MilimError::FailedToLoadFile(format!("{}: {}", path.display(), e)))?;

    parse_delimited(&content, delimiter, file_name, additional_tags)
}

// Plain delimiter splitting; quoting semantics are out of scope, stray
// tabs inside fields are already neutralized by field cleanup.
fn parse_delimited(
    content: &str,
    delimiter: char,
    file_name: &str,
    additional_tags: &str,
) -> Result<Vec<Card>, MilimError> {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| MilimError::FailedToLoadFile(format!("{}: empty file", file_name)))?;
    let columns: Vec<String> =
        header.split(delimiter).map(|name| name.trim().to_string()).collect();

    let position = |name: &str| columns.iter().position(|column| column == name);
    let word_column = position("Word");
    let translation_column = position("Translation");
    let pronunciation_column = position("Pronunciation");
    let flags_column = position("Flags");
    let tags_column = position("Tags");

    let core_present = [word_column, translation_column, pronunciation_column]
        .iter()
        .filter(|column| column.is_some())
        .count();
    if core_present < 2 {
        return Err(MilimError::FailedToLoadFile(format!(
            "{}: at least two columns must be present: {}",
            file_name,
            CORE_COLUMNS.join(",")
        )));
    }

    let mut cards = Vec::new();
    for (row_index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(delimiter).collect();
        let field = |column: Option<usize>| {
            column.and_then(|index| fields.get(index)).copied().unwrap_or("")
        };

        let mut card = Card::new(
            field(word_column),
            field(translation_column),
            field(pronunciation_column),
        )
        .with_flags(field(flags_column))
        .with_tags(field(tags_column))
        .with_source(&format!("{}#{}", file_name, row_index));
        card.append_tags(additional_tags);
        cards.push(card);
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_csv() {
        let content = "Word,Translation,Pronunciation,Flags,Tags\n\
                       שָׁלוֹם,hello,sha*lom*,Nsa,greeting\n\
                       בַּיִת,house,*ba*yit,Nsa,\n";
        let cards = parse_delimited(content, ',', "words.csv", "lesson1").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].word(), "שָׁלוֹם");
        assert_eq!(cards[0].flags().raw(), "Nsa");
        assert_eq!(cards[0].tags(), "greeting lesson1");
        assert_eq!(cards[0].source(), "words.csv#0");
        assert_eq!(cards[1].tags(), "lesson1");
        assert_eq!(cards[1].source(), "words.csv#1");
    }

    #[test]
    fn test_missing_cells_become_empty_fields() {
        let content = "Word,Translation\nשלום\n\nבית,house\n";
        let cards = parse_delimited(content, ',', "w.csv", "").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].translation(), "");
        assert_eq!(cards[1].translation(), "house");
    }

    #[test]
    fn test_too_few_core_columns() {
        let content = "Word,Flags\nשלום,N\n";
        assert!(matches!(
            parse_delimited(content, ',', "w.csv", ""),
            Err(MilimError::FailedToLoadFile(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            read_source_file(Path::new("words.xlsx"), ""),
            Err(MilimError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_tsv_delimiter() {
        let content = "Word\tTranslation\nשלום\thello\n";
        let cards = parse_delimited(content, '\t', "w.tsv", "").unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].translation(), "hello");
    }
}
