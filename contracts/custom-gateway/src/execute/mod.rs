//! Execute handlers for the custom gateway contract.
//!
//! - `config` - one-time token pair binding and the deposit toggle
//! - `outbound` - router-initiated deposits and the reply handlers completing them
//! - `inbound` - withdrawals delivered from the counterpart gateway
//! - `owner` - two-step ownership transfer

mod config;
mod inbound;
mod outbound;
mod owner;

pub use config::*;
pub use inbound::*;
pub use outbound::*;
pub use owner::*;
