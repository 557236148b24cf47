//! The calculator form: GET renders the blank page, POST computes.
//!
//! All five-field problems are business data, not HTTP errors: a POST with
//! bad input still returns 200 with the message rendered in the page's
//! error area. The core decides which; this module only maps its output
//! onto the page.

use axum::extract::Form;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use gradecalc_core::{evaluate, RawGradeForm};

use crate::page;

/// GET / -- blank form, no error, no result.
async fn show_form() -> Html<String> {
    Html(page::render_page(&RawGradeForm::default(), None, None))
}

/// POST / -- run the calculation and re-render the page.
///
/// Exactly one of the error area or the result area ends up populated.
/// Submitted values are retained in the form either way.
async fn submit(Form(form): Form<RawGradeForm>) -> Html<String> {
    match evaluate(&form) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Computed grade outcome");
            Html(page::render_page(&form, None, Some(&outcome)))
        }
        Err(err) => {
            tracing::debug!(%err, "Rejected grade submission");
            Html(page::render_page(&form, Some(&err.to_string()), None))
        }
    }
}

/// Mount the calculator routes on `/`.
pub fn router() -> Router {
    Router::new().route("/", get(show_form).post(submit))
}
