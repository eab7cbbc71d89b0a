use super::QuestionnaireError;
use crate::assessment::domain::Dosha;
use std::io::Read;

// Column layout of the questionnaire files, mirroring the source workbook:
// an id column, the prompt, then one option column per dosha.
pub(crate) const PROMPT_COLUMN: usize = 1;
pub(crate) const OPTION_COLUMNS: [usize; Dosha::COUNT] = [2, 3, 4];

const COLUMN_NAMES: [&str; 4] = ["prompt", "vata option", "pitta option", "kapha option"];

#[derive(Debug)]
pub(crate) struct QuestionRecord {
    pub(crate) prompt: String,
    pub(crate) options: [String; Dosha::COUNT],
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<QuestionRecord>, QuestionnaireError> {
    // Flexible mode: a short row is reported below as a missing column
    // with its row number.
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for (position, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Data rows follow the header, so the first is row 2 in the file.
        let row = position + 2;

        let prompt = field(&record, PROMPT_COLUMN, row, COLUMN_NAMES[0])?;
        if prompt.is_empty() {
            return Err(QuestionnaireError::EmptyPrompt { row });
        }

        let mut options: [String; Dosha::COUNT] = Default::default();
        for (slot, column) in OPTION_COLUMNS.into_iter().enumerate() {
            options[slot] = field(&record, column, row, COLUMN_NAMES[slot + 1])?;
        }

        records.push(QuestionRecord { prompt, options });
    }

    Ok(records)
}

fn field(
    record: &csv::StringRecord,
    column: usize,
    row: usize,
    name: &'static str,
) -> Result<String, QuestionnaireError> {
    record
        .get(column)
        .map(str::to_owned)
        .ok_or(QuestionnaireError::MissingColumn { row, column: name })
}
