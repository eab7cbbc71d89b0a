use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const COUNT: usize = 3;

    pub const fn ordered() -> [Self; 3] {
        [Self::Vata, Self::Pitta, Self::Kapha]
    }

    /// Chart and score labels keep the romanized dosha name in every
    /// display language.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Vata => 0,
            Self::Pitta => 1,
            Self::Kapha => 2,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "vata" | "v" => Some(Self::Vata),
            "pitta" | "p" => Some(Self::Pitta),
            "kapha" | "k" => Some(Self::Kapha),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const fn ordered() -> [Self; 2] {
        [Self::Japanese, Self::English]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
        }
    }

    /// Name of the language in that language, for the selector links.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Japanese => "日本語",
            Self::English => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Some(Self::Japanese),
            "en" | "english" => Some(Self::English),
            _ => None,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Japanese
    }
}

/// Classification of a finished response sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One dosha holds the strict maximum share, or several tie for it.
    Dominant(Vec<Dosha>),
    /// Every share sits inside the balance band.
    TriDosha,
    /// No dosha could be singled out (degenerate all-zero tally).
    Undetermined,
}

impl Outcome {
    pub fn doshas(&self) -> &[Dosha] {
        match self {
            Outcome::Dominant(doshas) => doshas,
            Outcome::TriDosha | Outcome::Undetermined => &[],
        }
    }

    /// Stable machine-readable identifier, e.g. `vata_pitta` for a tie.
    pub fn key(&self) -> String {
        match self {
            Outcome::Dominant(doshas) => doshas
                .iter()
                .map(|dosha| dosha.code())
                .collect::<Vec<_>>()
                .join("_"),
            Outcome::TriDosha => "tri_dosha".to_string(),
            Outcome::Undetermined => "undetermined".to_string(),
        }
    }

    /// Display name with the romanized dosha names, fixed across languages.
    pub fn label(&self) -> String {
        match self {
            Outcome::Dominant(doshas) => doshas
                .iter()
                .map(|dosha| dosha.label())
                .collect::<Vec<_>>()
                .join(" & "),
            Outcome::TriDosha => "Tri Dosha".to_string(),
            Outcome::Undetermined => "Undetermined".to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AssessmentError {
    QuestionOutOfRange { index: usize, count: usize },
    ResponseCountMismatch { expected: usize, actual: usize },
    MissingResponses,
    AmbiguousResponses,
}

impl fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentError::QuestionOutOfRange { index, count } => {
                write!(
                    f,
                    "question index {} out of range for {} questions",
                    index, count
                )
            }
            AssessmentError::ResponseCountMismatch { expected, actual } => {
                write!(
                    f,
                    "expected answers for {} questions, received {}",
                    expected, actual
                )
            }
            AssessmentError::MissingResponses => {
                write!(f, "no responses or choices were supplied")
            }
            AssessmentError::AmbiguousResponses => {
                write!(f, "both responses and choices were supplied")
            }
        }
    }
}

impl std::error::Error for AssessmentError {}
