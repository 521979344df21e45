//! User-facing text for the whole application.
//!
//! Every string that reaches the terminal is a [`Message`] variant rendered
//! through its `Display` impl, and printed with the `msg_*!` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
