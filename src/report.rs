use glam::DMat4;

use crate::transform::TransformResult;

/// Renders a matrix as a bracketed grid, one row per line, each cell fixed to
/// four decimal places in an eight-character right-aligned field.
pub fn format_matrix(matrix: &DMat4) -> String {
    let mut out = String::new();
    for row in 0..4 {
        out.push_str(if row == 0 { "[[" } else { " [" });
        let r = matrix.row(row);
        for col in 0..4 {
            if col > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:8.4}", r[col]));
        }
        out.push_str(if row == 3 { "]]" } else { "]\n" });
    }
    out
}

/// Full text report: the six matrices in fixed order, then the inverse or a
/// notice that none exists.
pub fn render_report(result: &TransformResult) -> String {
    let mut sections = vec![
        format!(
            "Translation matrix (4x4):\n{}",
            format_matrix(&result.translation)
        ),
        format!(
            "Rotation Matrix X (4x4):\n{}",
            format_matrix(&result.rotation_x)
        ),
        format!(
            "Rotation Matrix Y (4x4):\n{}",
            format_matrix(&result.rotation_y)
        ),
        format!(
            "Rotation Matrix Z (4x4):\n{}",
            format_matrix(&result.rotation_z)
        ),
        format!(
            "Transformation matrix (4x4):\n{}",
            format_matrix(&result.transform)
        ),
    ];
    sections.push(match &result.inverse {
        Some(inverse) => format!("Inverse matrix (4x4):\n{}", format_matrix(inverse)),
        None => "Inverse: (matrix is singular, no inverse)".to_string(),
    });
    sections.join("\n\n")
}
