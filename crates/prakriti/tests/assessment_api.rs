use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use prakriti::assessment::questionnaire::{Questionnaire, QuestionnaireSet};
use prakriti::assessment::router::assessment_router;
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::Arc;
use tower::ServiceExt;

const JA: &str = "id,prompt,vata,pitta,kapha\n\
1,体格について,痩せ型,中肉中背,がっしり\n\
2,食欲について,不規則,旺盛,安定\n\
3,睡眠について,浅い,短くても熟睡,深くて長い\n";

const EN: &str = "id,prompt,vata,pitta,kapha\n\
1,About your build,Thin,Medium,Solid\n\
2,About your appetite,Irregular,Strong,Steady\n\
3,About your sleep,Light,Short but sound,Deep and long\n";

fn router() -> axum::Router {
    let japanese = Questionnaire::from_reader(Cursor::new(JA)).expect("ja parses");
    let english = Questionnaire::from_reader(Cursor::new(EN)).expect("en parses");
    let set = QuestionnaireSet::from_parts(japanese, english).expect("parallel");
    assessment_router(Arc::new(set))
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[tokio::test]
async fn questionnaire_endpoint_defaults_to_japanese() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/questionnaire")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["language"], json!("ja"));
    assert_eq!(payload["questions"].as_array().expect("questions").len(), 3);
    assert_eq!(payload["questions"][0]["prompt"], json!("体格について"));
    assert_eq!(
        payload["questions"][0]["options"][0]["dosha_label"],
        json!("Vata")
    );
}

#[tokio::test]
async fn questionnaire_endpoint_serves_the_english_file() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/questionnaire?lang=en")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["questions"][0]["prompt"], json!("About your build"));
    assert_eq!(payload["yes_label"], json!("Yes"));
}

#[tokio::test]
async fn report_endpoint_scores_yes_no_responses() {
    let body = json!({
        "lang": "en",
        "responses": [
            { "vata": true },
            { "vata": true },
            { "pitta": true },
        ],
    });

    let response = router()
        .oneshot(
            Request::post("/api/v1/assessment/report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["outcome"]["key"], json!("vata"));
    assert_eq!(payload["shares"][0]["percentage_label"], json!("66.67%"));
    assert_eq!(
        payload["outcome"]["statement"],
        json!("Your constitution is: Vata")
    );
}

#[tokio::test]
async fn report_endpoint_accepts_the_single_choice_variant() {
    let body = json!({
        "choices": ["kapha", "kapha", "vata"],
    });

    let response = router()
        .oneshot(
            Request::post("/api/v1/assessment/report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["outcome"]["key"], json!("kapha"));
    assert_eq!(payload["language"], json!("ja"));
    assert_eq!(
        payload["outcome"]["statement"],
        json!("あなたの体質は: Kapha")
    );
}

#[tokio::test]
async fn report_endpoint_rejects_incomplete_sheets() {
    let body = json!({
        "responses": [ { "vata": true } ],
    });

    let response = router()
        .oneshot(
            Request::post("/api/v1/assessment/report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("expected answers for 3 questions"));
}

#[tokio::test]
async fn all_no_submission_reports_the_failure_message() {
    let body = json!({
        "responses": [ {}, {}, {} ],
    });

    let response = router()
        .oneshot(
            Request::post("/api/v1/assessment/report")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["outcome"]["key"], json!("undetermined"));
    assert_eq!(payload["outcome"]["statement"], json!("診断に失敗しました。"));
    assert_eq!(payload["shares"][0]["percentage"], json!(0.0));
}
