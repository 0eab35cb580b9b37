pub mod arena;
pub mod battle;
pub mod narrative;

pub use arena::*;
pub use battle::*;
pub use narrative::*;
