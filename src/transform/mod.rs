pub mod builder;

pub use builder::{
    build_transform, compose_rotation, invert, rotation_x, rotation_y, rotation_z, translation,
};

use glam::{DMat4, DVec3};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("matrix is singular, no inverse")]
    SingularMatrix,
}

/// Input scalars for one computation: translation offsets and Euler angles
/// in degrees about the fixed world axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformInput {
    pub translation: DVec3,
    pub rotation_deg: DVec3,
}

/// Everything one computation produces: the elementary matrices, the composed
/// rotation, the assembled transform, and its inverse when one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub translation: DMat4,
    pub rotation_x: DMat4,
    pub rotation_y: DMat4,
    pub rotation_z: DMat4,
    pub rotation: DMat4,
    pub transform: DMat4,
    pub inverse: Option<DMat4>,
}

impl TransformInput {
    pub fn new(translation: DVec3, rotation_deg: DVec3) -> Self {
        Self {
            translation,
            rotation_deg,
        }
    }

    /// Runs the full pipeline. Stateless: identical inputs produce identical
    /// output, and a singular transform only costs the inverse, never the
    /// other matrices.
    pub fn compute(&self) -> TransformResult {
        let translation =
            builder::translation(self.translation.x, self.translation.y, self.translation.z);
        let rotation_x = builder::rotation_x(self.rotation_deg.x);
        let rotation_y = builder::rotation_y(self.rotation_deg.y);
        let rotation_z = builder::rotation_z(self.rotation_deg.z);
        let rotation = builder::compose_rotation(rotation_x, rotation_y, rotation_z);
        let transform = builder::build_transform(rotation, translation);

        log::debug!("transform determinant = {}", transform.determinant());
        let inverse = match builder::invert(transform) {
            Ok(inv) => Some(inv),
            Err(TransformError::SingularMatrix) => {
                log::warn!("transform is singular, skipping inverse");
                None
            }
        };

        TransformResult {
            translation,
            rotation_x,
            rotation_y,
            rotation_z,
            rotation,
            transform,
            inverse,
        }
    }
}
