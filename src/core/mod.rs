pub mod binder;
pub mod converter;
pub mod etl;
pub mod loader;
pub mod materials;
pub mod pipeline;

pub use crate::domain::model::{CurveDescriptor, ImportSummary, StrokeRecord};
pub use crate::domain::ports::{Pipeline, SceneHost, Storage};
pub use crate::utils::error::Result;
