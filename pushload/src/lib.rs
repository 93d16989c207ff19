//! The pushload synthetic traffic tool.
//!
//! This library supports the pushload binary found elsewhere in this project.
//! It draws random push events, one per iteration, and sends each to an
//! ingestion service's `/push` endpoint as a single HTTP GET, reporting
//! progress on a thinning cadence as it goes.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
#![deny(clippy::dbg_macro)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(unreachable_pub)]
#![deny(missing_docs)]
#![deny(missing_copy_implementations)]
#![deny(missing_debug_implementations)]

pub mod cadence;
pub mod config;
pub mod driver;
pub mod event;
