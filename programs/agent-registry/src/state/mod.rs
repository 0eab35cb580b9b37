pub mod agent;
pub mod owner_index;
pub mod registry;

pub use agent::*;
pub use owner_index::*;
pub use registry::*;
