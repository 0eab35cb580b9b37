pub mod initialize;
pub mod link_battle_escrow;
pub mod create_agent;
pub mod update_personality;
pub mod record_outcome;
pub mod queries;

pub use initialize::*;
pub use link_battle_escrow::*;
pub use create_agent::*;
pub use update_personality::*;
pub use record_outcome::*;
pub use queries::*;
