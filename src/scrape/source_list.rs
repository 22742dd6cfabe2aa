use std::{
    fs,
    path::Path,
};

use crate::core::{
    utils::CleanField,
    MilimError,
};

/// One line of the scrape input file: a URL plus optional include and
/// exclude flag-sets that extend the global filters for this URL only.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub url: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Split a comma-separated flag-set list, dropping blank entries.
pub fn parse_flag_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|field| field.clean_field())
        .filter(|field| !field.is_empty())
        .collect()
}

// Line shape: `URL [-i FLAGS] [-x FLAGS]`. Tokens that are neither are
// ignored, so a stray comment word does not kill the line.
fn parse_line(line: &str) -> Option<SourceLine> {
    let mut tokens = line.split_whitespace();
    let url = tokens.next()?.to_string();

    let mut include = Vec::new();
    let mut exclude = Vec::new();
    while let Some(token) = tokens.next() {
        match token {
            "-i" | "--include" => {
                if let Some(value) = tokens.next() {
                    include.extend(parse_flag_list(value));
                }
            }
            "-x" | "--exclude" => {
                if let Some(value) = tokens.next() {
                    exclude.extend(parse_flag_list(value));
                }
            }
            _ => {}
        }
    }

    Some(SourceLine { url, include, exclude })
}

pub fn read_source_file(path: &Path) -> Result<Vec<SourceLine>, MilimError> {
    let content = fs::read_to_string(path)
        .map_err(|e| MilimError::FailedToLoadFile(format!("{}: {}", path.display(), e)))?;
    Ok(content.lines().filter_map(parse_line).collect())
}
