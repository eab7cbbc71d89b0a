use super::domain::Dosha;
use super::session::ResponseSheet;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswersImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    RowCount { expected: usize, actual: usize },
    MissingColumn { row: usize, column: &'static str },
    InvalidFlag { row: usize, column: &'static str, value: String },
}

impl std::fmt::Display for AnswersImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswersImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswersImportError::Csv(err) => write!(f, "invalid answer sheet data: {}", err),
            AnswersImportError::RowCount { expected, actual } => write!(
                f,
                "answer sheet covers {} questions but the questionnaire has {}",
                actual, expected
            ),
            AnswersImportError::MissingColumn { row, column } => {
                write!(f, "answer row {} is missing the {} column", row, column)
            }
            AnswersImportError::InvalidFlag { row, column, value } => write!(
                f,
                "answer row {} has an unrecognized {} value '{}'",
                row, column, value
            ),
        }
    }
}

impl std::error::Error for AnswersImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswersImportError::Io(err) => Some(err),
            AnswersImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnswersImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswersImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Imports a pre-filled answer sheet: one row per question with a yes/no
/// column per dosha, matching the answer columns of the source workbook.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        question_count: usize,
    ) -> Result<ResponseSheet, AnswersImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, question_count)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        question_count: usize,
    ) -> Result<ResponseSheet, AnswersImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for (position, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = position + 2;

            let mut flags = [false; Dosha::COUNT];
            for dosha in Dosha::ordered() {
                let column = dosha.label();
                let value = record.get(dosha.index()).ok_or(
                    AnswersImportError::MissingColumn { row, column },
                )?;
                flags[dosha.index()] =
                    parse_flag(value).ok_or_else(|| AnswersImportError::InvalidFlag {
                        row,
                        column,
                        value: value.to_string(),
                    })?;
            }
            rows.push(flags);
        }

        if rows.len() != question_count {
            return Err(AnswersImportError::RowCount {
                expected: question_count,
                actual: rows.len(),
            });
        }

        let mut sheet = ResponseSheet::new(question_count);
        for (question, flags) in rows.into_iter().enumerate() {
            for dosha in Dosha::ordered() {
                if flags[dosha.index()] {
                    // In range by construction.
                    let _ = sheet.mark(question, dosha, true);
                }
            }
        }

        Ok(sheet)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "はい" => Some(true),
        "no" | "n" | "false" | "0" | "いいえ" | "" => Some(false),
        _ => None,
    }
}
