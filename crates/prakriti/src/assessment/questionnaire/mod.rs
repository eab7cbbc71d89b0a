mod parser;

use crate::assessment::domain::{Dosha, Language};
use crate::config::QuestionnaireConfig;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("failed to read questionnaire file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid questionnaire data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row} is missing the {column} column")]
    MissingColumn { row: usize, column: &'static str },
    #[error("row {row} has an empty prompt")]
    EmptyPrompt { row: usize },
    #[error("questionnaire file contains no questions")]
    Empty,
    #[error("parallel questionnaires disagree: {japanese} Japanese rows vs {english} English rows")]
    ParallelMismatch { japanese: usize, english: usize },
}

/// One question with its per-dosha option phrasings.
///
/// The option lookup table is built once at load time and indexed by
/// dosha, so rendering never recomputes a label.
#[derive(Debug, Clone)]
pub struct Question {
    prompt: String,
    options: [String; Dosha::COUNT],
}

impl Question {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn option(&self, dosha: Dosha) -> &str {
        &self.options[dosha.index()]
    }
}

/// Ordered, immutable question list for one display language.
#[derive(Debug)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionnaireError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionnaireError> {
        let questions: Vec<Question> = parser::parse_records(reader)?
            .into_iter()
            .map(|record| Question {
                prompt: record.prompt,
                options: record.options,
            })
            .collect();

        if questions.is_empty() {
            return Err(QuestionnaireError::Empty);
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

/// The two parallel questionnaires, loaded once at startup and injected
/// wherever a session needs them.
#[derive(Debug)]
pub struct QuestionnaireSet {
    japanese: Questionnaire,
    english: Questionnaire,
}

impl QuestionnaireSet {
    pub fn load(config: &QuestionnaireConfig) -> Result<Self, QuestionnaireError> {
        let japanese = Questionnaire::from_path(&config.japanese_path)?;
        let english = Questionnaire::from_path(&config.english_path)?;
        Self::from_parts(japanese, english)
    }

    pub fn from_parts(
        japanese: Questionnaire,
        english: Questionnaire,
    ) -> Result<Self, QuestionnaireError> {
        if japanese.len() != english.len() {
            return Err(QuestionnaireError::ParallelMismatch {
                japanese: japanese.len(),
                english: english.len(),
            });
        }

        Ok(Self { japanese, english })
    }

    pub fn for_language(&self, language: Language) -> &Questionnaire {
        match language {
            Language::Japanese => &self.japanese,
            Language::English => &self.english,
        }
    }

    pub fn question_count(&self) -> usize {
        self.japanese.len()
    }
}
