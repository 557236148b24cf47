/// Validation errors for a grade-calculation request.
///
/// The `#[error]` strings are the exact user-visible messages; the HTTP
/// layer renders `Display` output directly into the page's error area.
/// Variants are checked in declaration order: a parse failure masks any
/// range problem, and negative absences mask out-of-range grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GradeError {
    /// One of the five form fields is missing, empty, or non-numeric.
    #[error("Please enter valid numbers only.")]
    Parse,

    /// Absences parsed but is below zero.
    #[error("Absences cannot be negative.")]
    NegativeAbsences,

    /// A grade component lies outside the closed interval [0, 100].
    #[error("Grades must be between 0 and 100.")]
    GradeOutOfRange,
}
