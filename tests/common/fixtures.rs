//! Test fixtures: request bodies for /transform.

/// Diagonal from (10,10) to (90,90) inside a 100x100 box
pub const DIAGONAL: &str = r#"{"strokes": [[[10, 90], [10, 90]]], "box": [0, 0, 100, 100]}"#;

/// Box with no strokes
pub const EMPTY_STROKES: &str = r#"{"strokes": [], "box": [0, 0, 50, 50]}"#;

/// Stroke with five x-coordinates but three y-coordinates
pub const MALFORMED_STROKE: &str =
    r#"{"strokes": [[[1, 2, 3, 4, 5], [1, 2, 3]]], "box": [0, 0, 10, 10]}"#;

/// Box with x_max < x_min
pub const INVERTED_BOX: &str = r#"{"strokes": [[[1, 2], [1, 2]]], "box": [10, 0, 5, 10]}"#;

/// Box with only three numbers
pub const SHORT_BOX: &str = r#"{"strokes": [], "box": [0, 0, 100]}"#;

/// Box far larger than any canvas the renderer accepts
pub const HUGE_BOX: &str = r#"{"strokes": [[[1, 2], [1, 2]]], "box": [0, 0, 100000, 100000]}"#;

/// Horizontal stroke with no box; one is fitted around it
pub const NO_BOX: &str = r#"{"strokes": [[[20, 120], [60, 60]]]}"#;

/// No strokes and no box: nothing to fit a box around
pub const NO_BOX_NO_POINTS: &str = r#"{"strokes": []}"#;

/// Build a request body for the given strokes and box
pub fn transform_body(strokes: &[(Vec<f64>, Vec<f64>)], bbox: [f64; 4]) -> String {
    let strokes: Vec<serde_json::Value> = strokes
        .iter()
        .map(|(xs, ys)| serde_json::json!([xs, ys]))
        .collect();
    serde_json::json!({ "strokes": strokes, "box": bbox }).to_string()
}
