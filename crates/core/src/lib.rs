//! Pure grade-computation core for the prelim grade calculator.
//!
//! Everything in this crate is deterministic and side-effect free: the HTTP
//! layer hands over the raw form fields, and gets back either a validation
//! error or a computed breakdown. No I/O, no logging, no shared state.

pub mod error;
pub mod grade;

pub use error::GradeError;
pub use grade::{evaluate, GradeBreakdown, GradeInput, GradeOutcome, RawGradeForm, RequirementRow};
