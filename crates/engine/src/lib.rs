//! Pure decision logic of the bot: response validation, status formatting
//! and the notification dedup state. No I/O happens in this crate.

pub mod dedup;
pub mod formatter;
pub mod validator;
