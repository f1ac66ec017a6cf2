//! Use cases (application services)
//!
//! - [`watchparty`]: proposals, draw, poll lifecycle and resolution

pub mod watchparty;
