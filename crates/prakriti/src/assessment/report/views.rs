use crate::assessment::domain::{Dosha, Language};
use crate::assessment::locale::{self, TextKey};
use crate::assessment::questionnaire::QuestionnaireSet;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ShareEntry {
    pub dosha: Dosha,
    pub dosha_label: &'static str,
    pub count: u32,
    pub percentage: f64,
    /// Rendered at two decimals, e.g. "33.33%".
    pub percentage_label: String,
}

/// One slice of the proportional breakdown, with cumulative percentage
/// bounds so a renderer can draw a pie (conic gradient) or a bar directly.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSegment {
    pub dosha: Dosha,
    pub dosha_label: &'static str,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLink {
    pub dosha_label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutcomeView {
    pub key: String,
    pub label: String,
    pub statement: String,
    pub descriptions: Vec<&'static str>,
    pub references: Vec<ReferenceLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub language: Language,
    pub generated_on: NaiveDate,
    pub question_count: usize,
    pub total_affirmative: u32,
    pub shares: Vec<ShareEntry>,
    pub chart: Vec<ChartSegment>,
    pub outcome: OutcomeView,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub dosha: Dosha,
    pub dosha_label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub number: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireView {
    pub language: Language,
    pub title: &'static str,
    pub intro: &'static str,
    pub yes_label: &'static str,
    pub no_label: &'static str,
    pub show_result_label: &'static str,
    pub questions: Vec<QuestionView>,
}

pub fn questionnaire_view(set: &QuestionnaireSet, language: Language) -> QuestionnaireView {
    let questions = set
        .for_language(language)
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionView {
            number: index + 1,
            prompt: question.prompt().to_string(),
            options: Dosha::ordered()
                .into_iter()
                .map(|dosha| OptionView {
                    dosha,
                    dosha_label: dosha.label(),
                    text: question.option(dosha).to_string(),
                })
                .collect(),
        })
        .collect();

    QuestionnaireView {
        language,
        title: locale::text(language, TextKey::Title),
        intro: locale::text(language, TextKey::Intro),
        yes_label: locale::text(language, TextKey::Yes),
        no_label: locale::text(language, TextKey::No),
        show_result_label: locale::text(language, TextKey::ShowResult),
        questions,
    }
}
