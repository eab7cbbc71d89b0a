use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::Local;
use prakriti::assessment::domain::{Dosha, Language};
use prakriti::assessment::locale::{self, TextKey};
use prakriti::assessment::questionnaire::QuestionnaireSet;
use prakriti::assessment::report::views::AssessmentSummary;
use prakriti::assessment::{AssessmentReport, ResponseSheet};
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

const PAGE_STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#222}\
fieldset{border:1px solid #ccc;border-radius:6px;margin-bottom:1rem}\
legend{font-weight:bold}\
.option{display:flex;justify-content:space-between;gap:1rem;padding:.25rem 0}\
.option span{flex:1}\
.lang{float:right}\
.pie{width:180px;height:180px;border-radius:50%;margin:1rem 0}\
.legend span{display:inline-block;margin-right:1rem}\
.swatch{display:inline-block;width:.8em;height:.8em;margin-right:.3em;border-radius:2px}\
button{font-size:1rem;padding:.5rem 1.5rem}";

const fn dosha_color(dosha: Dosha) -> &'static str {
    match dosha {
        Dosha::Vata => "#7f9ecf",
        Dosha::Pitta => "#d98f6b",
        Dosha::Kapha => "#83b897",
    }
}

/// Minimal deterministic HTML escape for user/content fields.
fn esc(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageQuery {
    #[serde(default)]
    pub(crate) lang: Option<Language>,
}

pub(crate) async fn form_page(
    State(questionnaires): State<Arc<QuestionnaireSet>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let language = query.lang.unwrap_or_default();
    Html(render_form(&questionnaires, language))
}

pub(crate) async fn submit_page(
    State(questionnaires): State<Arc<QuestionnaireSet>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let (language, sheet) = match sheet_from_form(&fields, questionnaires.question_count()) {
        Ok(parsed) => parsed,
        Err(message) => return (StatusCode::BAD_REQUEST, Html(message)).into_response(),
    };

    let report = AssessmentReport::new(&sheet);
    let summary = report.summary(language, Local::now().date_naive());
    Html(render_result(&summary)).into_response()
}

/// Rebuilds a response sheet from the posted radio groups. Field names are
/// `q<index>.<dosha>` with fixed `yes`/`no` values; anything else (the
/// hidden language field aside) is ignored.
fn sheet_from_form(
    fields: &[(String, String)],
    question_count: usize,
) -> Result<(Language, ResponseSheet), String> {
    let mut language = Language::default();
    let mut sheet = ResponseSheet::new(question_count);

    for (name, value) in fields {
        if name == "lang" {
            if let Some(parsed) = Language::from_code(value) {
                language = parsed;
            }
            continue;
        }

        let Some(rest) = name.strip_prefix('q') else {
            continue;
        };
        let Some((index, code)) = rest.split_once('.') else {
            continue;
        };
        let (Ok(question), Some(dosha)) = (index.parse::<usize>(), Dosha::from_code(code)) else {
            continue;
        };

        sheet
            .mark(question, dosha, value == "yes")
            .map_err(|err| err.to_string())?;
    }

    Ok((language, sheet))
}

fn render_form(questionnaires: &QuestionnaireSet, language: Language) -> String {
    let questionnaire = questionnaires.for_language(language);
    let yes = locale::text(language, TextKey::Yes);
    let no = locale::text(language, TextKey::No);

    let mut html = String::new();
    page_head(&mut html, language, locale::text(language, TextKey::Title));

    let _ = write!(
        html,
        "<p class=\"lang\"><a href=\"/?lang=ja\">{}</a> | <a href=\"/?lang=en\">{}</a></p>",
        Language::Japanese.label(),
        Language::English.label()
    );
    let _ = write!(
        html,
        "<h1>{}</h1><p>{}</p>",
        esc(locale::text(language, TextKey::Title)),
        esc(locale::text(language, TextKey::Intro))
    );

    html.push_str("<form method=\"post\" action=\"/assess\">");
    let _ = write!(
        html,
        "<input type=\"hidden\" name=\"lang\" value=\"{}\">",
        language.code()
    );

    for (index, question) in questionnaire.questions().iter().enumerate() {
        let _ = write!(
            html,
            "<fieldset><legend>{}. {}</legend>",
            index + 1,
            esc(question.prompt())
        );
        for dosha in Dosha::ordered() {
            let field = format!("q{}.{}", index, dosha.code());
            let _ = write!(
                html,
                "<div class=\"option\"><span>{}</span>\
<label><input type=\"radio\" name=\"{field}\" value=\"yes\"> {yes}</label>\
<label><input type=\"radio\" name=\"{field}\" value=\"no\" checked> {no}</label></div>",
                esc(question.option(dosha)),
            );
        }
        html.push_str("</fieldset>");
    }

    let _ = write!(
        html,
        "<button type=\"submit\">{}</button></form></body></html>",
        esc(locale::text(language, TextKey::ShowResult))
    );

    html
}

fn render_result(summary: &AssessmentSummary) -> String {
    let language = summary.language;
    let mut html = String::new();
    page_head(
        &mut html,
        language,
        locale::text(language, TextKey::ResultHeading),
    );

    let _ = write!(
        html,
        "<h1>{}</h1>",
        esc(locale::text(language, TextKey::ResultHeading))
    );

    html.push_str("<ul>");
    for entry in &summary.shares {
        let _ = write!(
            html,
            "<li>{}: {}</li>",
            entry.dosha_label, entry.percentage_label
        );
    }
    html.push_str("</ul>");

    if !summary.chart.is_empty() {
        let _ = write!(
            html,
            "<h2>{}</h2>",
            esc(locale::text(language, TextKey::ChartHeading))
        );
        html.push_str("<div class=\"pie\" style=\"background:conic-gradient(");
        for (position, segment) in summary.chart.iter().enumerate() {
            if position > 0 {
                html.push(',');
            }
            let _ = write!(
                html,
                "{} {:.2}% {:.2}%",
                dosha_color(segment.dosha),
                segment.start,
                segment.end
            );
        }
        html.push_str(")\"></div><p class=\"legend\">");
        for segment in &summary.chart {
            let _ = write!(
                html,
                "<span><i class=\"swatch\" style=\"background:{}\"></i>{}</span>",
                dosha_color(segment.dosha),
                segment.dosha_label
            );
        }
        html.push_str("</p>");
    }

    let _ = write!(html, "<p><strong>{}</strong></p>", esc(&summary.outcome.statement));
    for description in &summary.outcome.descriptions {
        let _ = write!(html, "<p>{}</p>", esc(description));
    }

    if !summary.outcome.references.is_empty() {
        let _ = write!(
            html,
            "<h2>{}</h2><ul>",
            esc(locale::text(language, TextKey::ReferencesHeading))
        );
        for reference in &summary.outcome.references {
            let _ = write!(
                html,
                "<li><a href=\"{}\">{}</a></li>",
                reference.url, reference.dosha_label
            );
        }
        html.push_str("</ul>");
    }

    let _ = write!(
        html,
        "<p><a href=\"/?lang={}\">&larr; {}</a></p></body></html>",
        language.code(),
        esc(locale::text(language, TextKey::Title))
    );

    html
}

fn page_head(html: &mut String, language: Language, title: &str) {
    let _ = write!(
        html,
        "<!doctype html><html lang=\"{}\"><head><meta charset=\"utf-8\">\
<title>{}</title><style>{}</style></head><body>",
        language.code(),
        esc(title),
        PAGE_STYLE
    );
}
