//! Application layer orchestrating a confirmation attempt.
//!
//! Each attempt moves through `Created -> Sent -> Processed`: the request is
//! validated on construction, dispatched once through a [`Transport`], and
//! the reply is parsed into a `ConfirmationResult`.
//!
//! [`Transport`]: crate::domain::ports::Transport

pub mod confirmation;
pub mod confirmer;
