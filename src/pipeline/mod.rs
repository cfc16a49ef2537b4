//! Summary pipeline
//!
//! Stage composition ([`runner`]), observation hooks ([`observer`]) and the
//! public output types ([`artifacts`]).

pub mod artifacts;
pub mod observer;
pub mod runner;
