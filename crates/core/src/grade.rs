//! Prelim grade computation: constants, types, and pure logic.
//!
//! Implements the course grading scheme: an attendance score derived from
//! absences, a weighted class standing, the prelim grade, and the two
//! "what do I need on the finals" requirement tables (one for passing, one
//! for Dean's Lister). Inputs arrive as raw form strings; [`evaluate`] runs
//! the full parse → validate → compute pipeline.

use serde::Serialize;

use crate::error::GradeError;

// ---------------------------------------------------------------------------
// Grading constants
// ---------------------------------------------------------------------------

/// Absence count at or above which the student fails outright.
pub const FAILING_ABSENCES: i64 = 4;
/// Attendance points deducted per absence.
pub const ABSENCE_PENALTY: f64 = 10.0;

/// Class-standing weights: quizzes / requirements / recitation.
pub const QUIZZES_WEIGHT: f64 = 0.4;
pub const REQUIREMENTS_WEIGHT: f64 = 0.3;
pub const RECITATION_WEIGHT: f64 = 0.3;

/// Prelim-grade weights: exam / attendance / class standing.
pub const EXAM_WEIGHT: f64 = 0.6;
pub const ATTENDANCE_WEIGHT: f64 = 0.1;
pub const CLASS_STANDING_WEIGHT: f64 = 0.3;

/// Overall-grade weights. Overall = 0.2*prelim + 0.3*midterm + 0.5*finals.
pub const PRELIM_WEIGHT: f64 = 0.2;
pub const MIDTERM_WEIGHT: f64 = 0.3;
pub const FINALS_WEIGHT: f64 = 0.5;

/// Target overall grade to pass the course.
pub const PASSING_TARGET: f64 = 75.0;
/// Target overall grade for Dean's Lister standing.
pub const DEAN_LISTER_TARGET: f64 = 90.0;

/// Hypothetical midterm scores reported in the passing table, in order.
pub const PASSING_MIDTERMS: [f64; 6] = [60.0, 70.0, 75.0, 80.0, 85.0, 90.0];
/// Hypothetical midterm scores reported in the Dean's Lister table, in order.
pub const DEAN_LISTER_MIDTERMS: [f64; 5] = [70.0, 80.0, 85.0, 90.0, 95.0];

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// The five form fields exactly as submitted, before any parsing.
///
/// Fields default to the empty string so a missing form field behaves the
/// same as an empty one (both are parse failures).
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawGradeForm {
    #[serde(default)]
    pub absences: String,
    #[serde(default)]
    pub prelim_exam: String,
    #[serde(default)]
    pub quizzes: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub recitation: String,
}

/// Numerically parsed form input, prior to range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeInput {
    pub absences: i64,
    pub prelim_exam: f64,
    pub quizzes: f64,
    pub requirements: f64,
    pub recitation: f64,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One row of a requirement table: the finals score needed to reach the
/// table's target overall grade, given this hypothetical midterm score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RequirementRow {
    pub midterm: f64,
    pub needed_finals: f64,
}

/// The computed grade breakdown. Display values are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeBreakdown {
    pub attendance: f64,
    pub class_standing: f64,
    pub prelim_grade: f64,
    pub passing_table: Vec<RequirementRow>,
    pub dean_lister_table: Vec<RequirementRow>,
}

/// Outcome of a successful (parsed and validated) calculation.
///
/// `Failed` is a legitimate business outcome, not an error: four or more
/// absences fail the course regardless of grades, and the message belongs
/// in the result area of the page rather than the error area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GradeOutcome {
    Failed { absences: i64 },
    Computed(GradeBreakdown),
}

impl GradeOutcome {
    /// Human-readable message for the `Failed` variant.
    pub fn failed_message(absences: i64) -> String {
        format!("FAILED due to {absences} absences.")
    }
}

// ---------------------------------------------------------------------------
// Parsing and validation
// ---------------------------------------------------------------------------

/// Parse the raw form fields into numbers.
///
/// Absences must parse as an integer; the four grade components accept
/// integers and decimals. Any failure collapses to [`GradeError::Parse`],
/// which takes precedence over every range check.
pub fn parse(raw: &RawGradeForm) -> Result<GradeInput, GradeError> {
    let absences = raw
        .absences
        .trim()
        .parse::<i64>()
        .map_err(|_| GradeError::Parse)?;

    let parse_grade = |s: &str| s.trim().parse::<f64>().map_err(|_| GradeError::Parse);

    Ok(GradeInput {
        absences,
        prelim_exam: parse_grade(&raw.prelim_exam)?,
        quizzes: parse_grade(&raw.quizzes)?,
        requirements: parse_grade(&raw.requirements)?,
        recitation: parse_grade(&raw.recitation)?,
    })
}

/// Validate a parsed input.
///
/// Checked in order: negative absences first, then any grade component
/// outside `[0, 100]`. Four or more absences is NOT a validation failure;
/// [`compute`] turns it into [`GradeOutcome::Failed`].
pub fn validate(input: &GradeInput) -> Result<(), GradeError> {
    if input.absences < 0 {
        return Err(GradeError::NegativeAbsences);
    }

    let grades = [
        input.prelim_exam,
        input.quizzes,
        input.requirements,
        input.recitation,
    ];
    if grades.iter().any(|g| !(0.0..=100.0).contains(g)) {
        return Err(GradeError::GradeOutOfRange);
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Round to 2 decimal places for display.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Finals score needed to reach `target` overall, given the prelim's fixed
/// contribution and a hypothetical midterm score.
///
/// Algebraic inverse of the overall-grade formula solved for finals. The
/// result is intentionally unclamped: a negative value means the target is
/// already safe, and a value above 100 means even a perfect finals cannot
/// reach it. Linear and strictly decreasing in `midterm`.
pub fn needed_finals(target: f64, prelim_contribution: f64, midterm: f64) -> f64 {
    (target - prelim_contribution - midterm * MIDTERM_WEIGHT) / FINALS_WEIGHT
}

/// Build one requirement table: `needed_finals` for each hypothetical
/// midterm score, rounded for display, preserving input order.
fn requirement_table(target: f64, prelim_contribution: f64, midterms: &[f64]) -> Vec<RequirementRow> {
    midterms
        .iter()
        .map(|&midterm| RequirementRow {
            midterm,
            needed_finals: round2(needed_finals(target, prelim_contribution, midterm)),
        })
        .collect()
}

/// Compute the grade breakdown for a validated input.
///
/// Four or more absences short-circuits to [`GradeOutcome::Failed`] before
/// any arithmetic. The `max(0, ...)` floor on attendance cannot trigger for
/// absences 0..=3 but is kept so the formula stays safe on its own.
pub fn compute(input: &GradeInput) -> GradeOutcome {
    if input.absences >= FAILING_ABSENCES {
        return GradeOutcome::Failed {
            absences: input.absences,
        };
    }

    let attendance = (100.0 - input.absences as f64 * ABSENCE_PENALTY).max(0.0);

    let class_standing = input.quizzes * QUIZZES_WEIGHT
        + input.requirements * REQUIREMENTS_WEIGHT
        + input.recitation * RECITATION_WEIGHT;

    let prelim_grade = input.prelim_exam * EXAM_WEIGHT
        + attendance * ATTENDANCE_WEIGHT
        + class_standing * CLASS_STANDING_WEIGHT;

    let prelim_contribution = prelim_grade * PRELIM_WEIGHT;

    GradeOutcome::Computed(GradeBreakdown {
        attendance: round2(attendance),
        class_standing: round2(class_standing),
        prelim_grade: round2(prelim_grade),
        passing_table: requirement_table(PASSING_TARGET, prelim_contribution, &PASSING_MIDTERMS),
        dean_lister_table: requirement_table(
            DEAN_LISTER_TARGET,
            prelim_contribution,
            &DEAN_LISTER_MIDTERMS,
        ),
    })
}

/// Full pipeline for one form submission: parse, validate, compute.
///
/// This is the single entry point the HTTP layer calls. Every invocation is
/// independent; given the same five strings the result is always the same.
pub fn evaluate(raw: &RawGradeForm) -> Result<GradeOutcome, GradeError> {
    let input = parse(raw)?;
    validate(&input)?;
    Ok(compute(&input))
}
