mod common;

use axum::http::StatusCode;
use common::{get, sample_bank, MemoryBank};

#[tokio::test]
async fn home_without_filters_asks_for_selection() {
    let (status, body) = get(sample_bank(), "/", false).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Select a unit and year to view questions."));
    assert!(body.contains(r#"<option value="Unit 2">Unit 2</option>"#));
    assert!(body.contains(r#"<option value="2021">2021</option>"#));
    assert!(!body.contains(r#"class="questions""#));
}

#[tokio::test]
async fn browse_fragment_lists_first_page() {
    let (status, body) = get(sample_bank(), "/browse?unit=Unit%201&year=2020", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"<section id="results""#));
    assert_eq!(body.matches(r#"class="id-badge""#).count(), 25);
    assert!(body.contains("Q-030"));
    assert!(!body.contains("Q-005"));
    assert!(body.contains(r#"<button type="button" disabled>Previous</button>"#));
    assert!(body.contains("page=2"));
}

#[tokio::test]
async fn browse_last_page_disables_next() {
    let (_, body) = get(sample_bank(), "/browse?unit=Unit%201&year=2020&page=2", true).await;

    assert_eq!(body.matches(r#"class="id-badge""#).count(), 5);
    assert!(body.contains(r#"<button type="button" disabled>Next</button>"#));
    assert!(!body.contains(r#"<button type="button" disabled>Previous</button>"#));
}

#[tokio::test]
async fn browse_fragment_shares_sync_queue_and_bumps_seq() {
    let (_, body) = get(sample_bank(), "/browse?unit=Unit%201&year=2020&seq=3", true).await;

    assert!(body.contains(r#"data-seq="3""#));
    assert!(body.contains(r#"id="seq" name="seq" value="4" hx-swap-oob="true""#));
    assert!(body.contains(r##"hx-sync="#browse:replace""##));
    assert!(body.contains("page=2&amp;seq=4"));
}

#[tokio::test]
async fn largest_seq_does_not_overflow() {
    let uri = "/browse?unit=Unit%201&year=2020&seq=18446744073709551615";
    for htmx in [false, true] {
        let (status, body) = get(sample_bank(), uri, htmx).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"value="18446744073709551615""#));
    }
}

#[tokio::test]
async fn browse_without_htmx_renders_full_page_with_selection() {
    let (status, body) = get(sample_bank(), "/browse?unit=Unit%202&year=2021", false).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"<option value="Unit 2" selected>Unit 2</option>"#));
    assert!(body.contains("R-003"));
}

#[tokio::test]
async fn browse_fragment_with_missing_year_shows_prompt() {
    let (_, body) = get(sample_bank(), "/browse?unit=Unit%201&year=", true).await;

    assert!(body.contains("Select a unit and year to view questions."));
}

#[tokio::test]
async fn browse_storage_failure_is_500() {
    let (status, _) = get(MemoryBank::failing(), "/browse?unit=Unit%201&year=2020", true).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn selecting_wrong_option_marks_key_and_choice() {
    let (status, body) = get(sample_bank(), "/question/Q-001/select?option=1", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("option-box option-incorrect option-selected"));
    assert_eq!(body.matches("option-correct").count(), 1);
    assert_eq!(body.matches("option-neutral").count(), 2);
}

#[tokio::test]
async fn selecting_correct_option_marks_only_correct() {
    let (_, body) = get(sample_bank(), "/question/Q-001/select?option=2", true).await;

    assert!(body.contains("option-box option-correct option-selected"));
    assert!(!body.contains("option-incorrect"));
}

#[tokio::test]
async fn selecting_out_of_range_option_is_rejected() {
    for uri in [
        "/question/Q-001/select?option=0",
        "/question/Q-001/select?option=5",
        "/question/Q-001/select?option=two",
        "/question/Q-001/select",
    ] {
        let (status, _) = get(sample_bank(), uri, true).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn selecting_on_unknown_question_is_404() {
    let (status, _) = get(sample_bank(), "/question/NOPE/select?option=1", true).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_stylesheet_is_served() {
    let (status, body) = get(sample_bank(), "/static/index.css", false).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".option-correct"));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, body) = get(sample_bank(), "/does-not-exist", false).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}
