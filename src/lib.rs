pub mod report;
pub mod transform;

pub use report::{format_matrix, render_report};
pub use transform::{TransformError, TransformInput, TransformResult};
