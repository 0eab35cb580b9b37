pub mod initialize;
pub mod create_challenge;
pub mod accept_challenge;
pub mod cancel_challenge;
pub mod withdraw_fees;
pub mod record_narrative;
pub mod queries;

pub use initialize::*;
pub use create_challenge::*;
pub use accept_challenge::*;
pub use cancel_challenge::*;
pub use withdraw_fees::*;
pub use record_narrative::*;
pub use queries::*;
