use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentError, Dosha, Language};
use super::questionnaire::QuestionnaireSet;
use super::report::views::questionnaire_view;
use super::report::AssessmentReport;
use super::session::ResponseSheet;

/// Router builder exposing the questionnaire and the stateless report
/// endpoint. The loaded questionnaire set is the only state.
pub fn assessment_router(questionnaires: Arc<QuestionnaireSet>) -> Router {
    Router::new()
        .route("/api/v1/questionnaire", get(questionnaire_handler))
        .route("/api/v1/assessment/report", post(report_handler))
        .with_state(questionnaires)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageQuery {
    #[serde(default)]
    pub(crate) lang: Option<Language>,
}

/// Yes/no judgments for one question, any omitted dosha defaulting to "no".
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AnswerFlags {
    #[serde(default)]
    pub vata: bool,
    #[serde(default)]
    pub pitta: bool,
    #[serde(default)]
    pub kapha: bool,
}

impl AnswerFlags {
    fn flag(&self, dosha: Dosha) -> bool {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }
}

/// A full response sheet in one request: either independent yes/no rows or
/// one chosen dosha per question. The server holds nothing between calls.
#[derive(Debug, Default, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub lang: Option<Language>,
    #[serde(default)]
    pub responses: Option<Vec<AnswerFlags>>,
    #[serde(default)]
    pub choices: Option<Vec<Dosha>>,
}

pub fn response_sheet_from_request(
    question_count: usize,
    request: &AssessmentRequest,
) -> Result<ResponseSheet, AssessmentError> {
    let mut sheet = ResponseSheet::new(question_count);

    match (&request.responses, &request.choices) {
        (Some(rows), None) => {
            if rows.len() != question_count {
                return Err(AssessmentError::ResponseCountMismatch {
                    expected: question_count,
                    actual: rows.len(),
                });
            }
            for (question, flags) in rows.iter().enumerate() {
                for dosha in Dosha::ordered() {
                    sheet.mark(question, dosha, flags.flag(dosha))?;
                }
            }
        }
        (None, Some(choices)) => {
            if choices.len() != question_count {
                return Err(AssessmentError::ResponseCountMismatch {
                    expected: question_count,
                    actual: choices.len(),
                });
            }
            for (question, dosha) in choices.iter().enumerate() {
                sheet.choose(question, *dosha)?;
            }
        }
        (Some(_), Some(_)) => return Err(AssessmentError::AmbiguousResponses),
        (None, None) => return Err(AssessmentError::MissingResponses),
    }

    Ok(sheet)
}

pub(crate) async fn questionnaire_handler(
    State(questionnaires): State<Arc<QuestionnaireSet>>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let language = query.lang.unwrap_or_default();
    let view = questionnaire_view(&questionnaires, language);
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn report_handler(
    State(questionnaires): State<Arc<QuestionnaireSet>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response {
    let language = request.lang.unwrap_or_default();

    match response_sheet_from_request(questionnaires.question_count(), &request) {
        Ok(sheet) => {
            let report = AssessmentReport::new(&sheet);
            let summary = report.summary(language, Local::now().date_naive());
            (StatusCode::OK, axum::Json(summary)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
