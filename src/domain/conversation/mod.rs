//! Conversation domain - per-chat dialogue state and input policies.
//!
//! A chat is always in exactly one of two logical states:
//!
//! - `AwaitingLink`: no [`Conversation`] is stored for the chat id. The next
//!   message is interpreted as a Play Store link.
//! - `AwaitingDate`: a [`Conversation`] holding the accepted app id is
//!   stored. The next message is interpreted as a cutoff date.
//!
//! "Processing" is transient and never stored: the stored entry is removed
//! once a collection attempt reaches any terminal outcome.

mod cutoff;
mod link;
mod state;

pub use cutoff::{CutoffDate, DateError};
pub use link::extract_app_id;
pub use state::Conversation;
