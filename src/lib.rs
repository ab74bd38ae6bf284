pub mod advice;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod session;
pub mod shapes;

pub use color::Color;
pub use error::{Error, Result};
pub use pipeline::{FeatureRecord, Pipeline};
