//! Ports (trait boundaries) for external dependencies.
//!
//! The round controller talks to the outside world only through these traits;
//! the terminal adapter and the test doubles implement them.

pub mod frontend;

pub use frontend::Frontend;
