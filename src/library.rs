//! Library side of the pipeline: reading tags and grouping source files
//! into albums.

mod model;
mod names;
mod scan;
mod tags;

pub use model::*;
pub use names::*;
pub use scan::collect;
pub use tags::*;
