use glam::{DMat4, DVec3};

use super::TransformError;

/// Singularity threshold for `invert`, scaled by matrix magnitude.
const SINGULARITY_EPS: f64 = 1e-12;

/// Identity matrix with the translation column set to (x, y, z, 1).
pub fn translation(x: f64, y: f64, z: f64) -> DMat4 {
    DMat4::from_translation(DVec3::new(x, y, z))
}

/// Rotation about the world X axis, angle in degrees.
///
/// glam columns are the images of the basis axes, so the (y,z) block of the
/// standard right-handed form lands in `y_axis`/`z_axis`.
pub fn rotation_x(angle_deg: f64) -> DMat4 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let mut m = DMat4::IDENTITY;
    m.y_axis.y = c;
    m.y_axis.z = s;
    m.z_axis.y = -s;
    m.z_axis.z = c;
    m
}

/// Rotation about the world Y axis, angle in degrees.
pub fn rotation_y(angle_deg: f64) -> DMat4 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let mut m = DMat4::IDENTITY;
    m.x_axis.x = c;
    m.x_axis.z = -s;
    m.z_axis.x = s;
    m.z_axis.z = c;
    m
}

/// Rotation about the world Z axis, angle in degrees.
pub fn rotation_z(angle_deg: f64) -> DMat4 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let mut m = DMat4::IDENTITY;
    m.x_axis.x = c;
    m.x_axis.y = s;
    m.y_axis.x = -s;
    m.y_axis.y = c;
    m
}

/// Composed rotation with X applied first, then Y, then Z.
///
/// The order is fixed: swapping it changes the result for any pair of
/// non-commuting angles.
pub fn compose_rotation(rx: DMat4, ry: DMat4, rz: DMat4) -> DMat4 {
    rz * ry * rx
}

/// Assembles the homogeneous transform from the rotation's 3x3 block and the
/// translation matrix's offset column.
///
/// The offset column is copied verbatim, not rotated. The rotation block is
/// taken as-is with no orthonormality check; the bottom row is always
/// `[0, 0, 0, 1]`.
pub fn build_transform(rotation: DMat4, translation: DMat4) -> DMat4 {
    let mut m = DMat4::IDENTITY;
    m.x_axis = rotation.x_axis.truncate().extend(0.0);
    m.y_axis = rotation.y_axis.truncate().extend(0.0);
    m.z_axis = rotation.z_axis.truncate().extend(0.0);
    m.w_axis = translation.w_axis.truncate().extend(1.0);
    m
}

/// Dense 4x4 inversion, failing on numerically singular input.
///
/// glam's `inverse` returns garbage for singular matrices instead of
/// failing, so the determinant is tested first. The threshold follows the
/// entry magnitude: a 4x4 determinant scales with the fourth power of its
/// entries.
pub fn invert(transform: DMat4) -> Result<DMat4, TransformError> {
    let magnitude = transform
        .to_cols_array()
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let det = transform.determinant();
    if det.abs() <= SINGULARITY_EPS * magnitude.powi(4).max(1.0) {
        return Err(TransformError::SingularMatrix);
    }
    Ok(transform.inverse())
}
