//! Graph data model and the errors surfaced to the editing session.

mod error;
mod model;

pub use error::GraphError;
pub use model::{DEFAULT_DENSITY_THRESHOLD, DensityLabel, GraphModel, VertexId};
