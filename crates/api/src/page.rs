//! Server-side HTML rendering for the calculator page.
//!
//! One page serves both the blank form and the post-submission view. The
//! form always redisplays the submitted values; exactly one of the error
//! paragraph or the results block is rendered after a POST.

use gradecalc_core::{GradeBreakdown, GradeOutcome, RawGradeForm, RequirementRow};

/// Fixed legend shown above the requirement tables.
const OVERALL_FORMULA: &str = "Overall = (20% Prelim) + (30% Midterm) + (50% Finals)";

const STYLE: &str = r#"
        html, body {
            margin: 0;
            padding: 0;
            height: 100%;
            font-family: Arial, sans-serif;
        }
        .container {
            background-color: #f7f7f7;
            padding: 30px;
            border-radius: 15px;
            box-shadow: 0px 4px 20px rgba(0,0,0,0.3);
            max-width: 520px;
            margin: 40px auto;
        }
        h2 { text-align: center; }
        input, button {
            width: 100%;
            margin: 5px 0 15px 0;
            padding: 10px;
            border-radius: 8px;
            border: 1px solid #ccc;
            box-sizing: border-box;
        }
        button {
            background-color: #007BFF;
            color: white;
            font-weight: bold;
            cursor: pointer;
        }
        button:hover { background-color: #0056b3; }
        .results { margin-top: 20px; text-align: left; }
        .error { color: red; font-weight: bold; }
        table { width: 100%; border-collapse: collapse; margin-top: 15px; }
        th, td { border: 1px solid #ccc; padding: 8px; text-align: center; }
        th { background-color: #f2f2f2; }
"#;

/// Escape text for safe interpolation into HTML body or attribute values.
///
/// Submitted form fields are arbitrary user text and are echoed back into
/// `value` attributes, so every interpolated value goes through this.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the complete calculator page.
///
/// `error` and `outcome` are mutually exclusive by construction in the
/// handlers; both absent renders the initial blank view.
pub fn render_page(
    form: &RawGradeForm,
    error: Option<&str>,
    outcome: Option<&GradeOutcome>,
) -> String {
    let error_block = match error {
        Some(message) => format!(
            "        <p class=\"error\">{}</p>\n",
            escape_html(message)
        ),
        None => String::new(),
    };

    let result_block = match outcome {
        Some(outcome) => format!(
            "        <div class=\"results\">\n            <h3>Results:</h3>\n{}        </div>\n",
            render_outcome(outcome)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Final Grade Calculator</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
        <h2>Final Grade Calculator</h2>

        <form method="post">
            <label>Number of Absences:</label>
            <input type="number" name="absences" min="0" value="{absences}" required>

            <label>Prelim Exam Grade:</label>
            <input type="number" name="prelim_exam" min="0" max="100" value="{prelim_exam}" required>

            <label>Quizzes Grade:</label>
            <input type="number" name="quizzes" min="0" max="100" value="{quizzes}" required>

            <label>Requirements Grade:</label>
            <input type="number" name="requirements" min="0" max="100" value="{requirements}" required>

            <label>Recitation Grade:</label>
            <input type="number" name="recitation" min="0" max="100" value="{recitation}" required>

            <button type="submit">Calculate</button>
            <button type="reset" onclick="window.location.href='/'">Reset</button>
        </form>

{error_block}{result_block}    </div>
</body>
</html>
"#,
        absences = escape_html(&form.absences),
        prelim_exam = escape_html(&form.prelim_exam),
        quizzes = escape_html(&form.quizzes),
        requirements = escape_html(&form.requirements),
        recitation = escape_html(&form.recitation),
    )
}

/// Render the result area content for a computed or failed outcome.
fn render_outcome(outcome: &GradeOutcome) -> String {
    match outcome {
        GradeOutcome::Failed { absences } => format!(
            "            <p>{}</p>\n",
            escape_html(&GradeOutcome::failed_message(*absences))
        ),
        GradeOutcome::Computed(breakdown) => render_breakdown(breakdown),
    }
}

/// Render the breakdown lines, the formula legend, and both tables.
fn render_breakdown(breakdown: &GradeBreakdown) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "            <p>Attendance: {:.2}<br>Class Standing: {:.2}<br>Prelim Grade: {:.2}</p>\n",
        breakdown.attendance, breakdown.class_standing, breakdown.prelim_grade
    ));
    html.push_str(&format!("            <p>{OVERALL_FORMULA}</p>\n"));
    html.push_str(&render_table("Passing (75)", &breakdown.passing_table));
    html.push_str(&render_table(
        "Dean's Lister (90)",
        &breakdown.dean_lister_table,
    ));
    html
}

/// Render one requirement table with Midterm / Needed Finals columns.
fn render_table(title: &str, rows: &[RequirementRow]) -> String {
    let mut html = format!(
        "            <h4>{title}</h4>\n            <table>\n                <tr><th>Midterm</th><th>Needed Finals</th></tr>\n"
    );
    for row in rows {
        html.push_str(&format!(
            "                <tr><td>{:.0}</td><td>{:.2}</td></tr>\n",
            row.midterm, row.needed_finals
        ));
    }
    html.push_str("            </table>\n");
    html
}
