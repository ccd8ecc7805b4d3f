//! Network transaction timelines.
//!
//! Raw phase timestamps of a finished network task go through
//! [`application::derive_phases`] into an ordered phase sequence, and
//! [`infrastructure::ConsoleRenderer`] turns that into a fixed-width text
//! timeline handed to a [`ports::Printer`] in one piece.

pub mod domain;
pub mod ports;
pub mod application;
pub mod infrastructure;
