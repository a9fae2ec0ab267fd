//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits defined in the ports module.

pub mod terminal;

pub use terminal::{TerminalFrontend, wants_replay};
