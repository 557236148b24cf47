//! HTTP-level integration tests for the calculator form endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router,
//! asserting against the rendered HTML. Validation problems always render
//! as 200 with the message in the page's error area; only the middleware
//! stack produces non-200 responses.

mod common;

use axum::http::StatusCode;
use common::{body_string, build_test_app, get, post_form};

// ---------------------------------------------------------------------------
// Test: GET / renders the blank form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_renders_blank_form() {
    let app = build_test_app();
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Final Grade Calculator"));
    assert!(html.contains(r#"name="absences""#));
    assert!(html.contains(r#"name="recitation""#));
    assert!(
        !html.contains("class=\"error\"") && !html.contains("class=\"results\""),
        "blank view should have neither an error nor a result"
    );
}

// ---------------------------------------------------------------------------
// Test: POST / with the worked example shows the full breakdown
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_post_computes_breakdown() {
    let app = build_test_app();
    let response = post_form(
        app,
        "/",
        "absences=0&prelim_exam=80&quizzes=90&requirements=85&recitation=95",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Attendance: 100.00"));
    assert!(html.contains("Class Standing: 90.00"));
    assert!(html.contains("Prelim Grade: 85.00"));
    assert!(html.contains("Overall = (20% Prelim) + (30% Midterm) + (50% Finals)"));

    // Both tables present, with the known passing-table cell for midterm 75.
    assert!(html.contains("Passing (75)"));
    assert!(html.contains("Dean's Lister (90)"));
    assert!(html.contains("<td>75</td><td>71.00</td>"));

    assert!(!html.contains("class=\"error\""));
}

// ---------------------------------------------------------------------------
// Test: POST / retains submitted values in the form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_post_retains_submitted_values() {
    let app = build_test_app();
    let response = post_form(
        app,
        "/",
        "absences=2&prelim_exam=80&quizzes=90&requirements=85&recitation=95",
    )
    .await;

    let html = body_string(response).await;
    assert!(html.contains(r#"name="absences" min="0" value="2""#));
    assert!(html.contains(r#"name="prelim_exam" min="0" max="100" value="80""#));
}

// ---------------------------------------------------------------------------
// Test: POST / with absences >= 4 fails in the result area
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_post_fails_on_excessive_absences() {
    let app = build_test_app();
    let response = post_form(
        app,
        "/",
        "absences=5&prelim_exam=80&quizzes=90&requirements=85&recitation=95",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("FAILED due to 5 absences."));
    assert!(
        html.contains("class=\"results\"") && !html.contains("class=\"error\""),
        "attendance failure is a result, not an error"
    );
}

// ---------------------------------------------------------------------------
// Test: each validation error renders in the error area
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_post_rejects_non_numeric_input() {
    let app = build_test_app();
    let response = post_form(
        app,
        "/",
        "absences=1&prelim_exam=abc&quizzes=90&requirements=85&recitation=95",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Please enter valid numbers only."));
    assert!(!html.contains("class=\"results\""));
}

#[tokio::test]
async fn test_post_rejects_negative_absences() {
    let app = build_test_app();
    let response = post_form(
        app,
        "/",
        "absences=-2&prelim_exam=80&quizzes=90&requirements=85&recitation=95",
    )
    .await;

    let html = body_string(response).await;
    assert!(html.contains("Absences cannot be negative."));
    assert!(!html.contains("class=\"results\""));
}

#[tokio::test]
async fn test_post_rejects_out_of_range_grade() {
    let app = build_test_app();
    let response = post_form(
        app,
        "/",
        "absences=2&prelim_exam=150&quizzes=90&requirements=85&recitation=95",
    )
    .await;

    let html = body_string(response).await;
    assert!(html.contains("Grades must be between 0 and 100."));
    assert!(!html.contains("class=\"results\""));
}

// ---------------------------------------------------------------------------
// Test: a missing field behaves like an empty one (parse error)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_post_with_missing_field_is_parse_error() {
    let app = build_test_app();
    let response = post_form(
        app,
        "/",
        "absences=1&prelim_exam=80&quizzes=90&requirements=85",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Please enter valid numbers only."));
}

// ---------------------------------------------------------------------------
// Test: redisplayed input is HTML-escaped
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_post_escapes_redisplayed_input() {
    let app = build_test_app();
    let response = post_form(
        app,
        "/",
        "absences=%3Cscript%3E&prelim_exam=80&quizzes=90&requirements=85&recitation=95",
    )
    .await;

    let html = body_string(response).await;
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}
