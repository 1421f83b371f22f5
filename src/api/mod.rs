pub mod transform;

pub use transform::__path_handle_transform;
pub use transform::{handle_transform, TransformErrorResponse, TransformRequest};
