//! Instruction handlers for the FairStake protocol
//!
//! Each instruction represents an action users can take:
//! - `initialize` - set up the protocol singleton (idempotent)
//! - `create_market` / `open_market` / `close_market` / `settle_market` -
//!   the market lifecycle, Draft -> Open -> Closed -> Settled
//! - `place_position` - stake on an item, weighted by reputation and timing
//! - `claim_payout` - redeem a winning position
//! - `update_score` - post a wallet's FairScale score (score authority only)
//! - `update_policy` / `set_paused` - admin controls

pub mod claim_payout;
pub mod initialize;
pub mod market;
pub mod place_position;
pub mod set_paused;
pub mod update_policy;
pub mod update_score;

pub use claim_payout::*;
pub use initialize::*;
pub use market::*;
pub use place_position::*;
pub use set_paused::*;
pub use update_policy::*;
pub use update_score::*;
