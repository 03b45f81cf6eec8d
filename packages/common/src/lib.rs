//! Common - Collaborator Interfaces for the Custom Gateway
//!
//! The gateway talks to two external contracts that it does not implement:
//! the router, which is the only caller allowed to start a deposit, and the
//! crosschain messenger, which assigns sequence numbers to outbound messages
//! and delivers authenticated inbound ones. Their wire types live here so a
//! router or messenger implementation can depend on them without pulling in
//! the gateway contract itself.

pub mod gateway;
pub mod messenger;

pub use gateway::{FinalizeInboundTransferMsg, OutboundTransferMsg};
pub use messenger::{DispatchResponse, MessengerExecuteMsg, MessengerQueryMsg, OriginatorResponse};
