//! # Legacy PPLA Import
//!
//! The inverse direction of the compilers: parse raw text in the legacy
//! fixed-width PPLA command format back into the canonical element model,
//! then derive a minimum label size so the editing surface can re-establish
//! its canvas bounds.
//!
//! ```text
//! raw text ──> ppla::decode ──> PplaCommand list ──> Element list
//!                                      │
//!                                      └──> dimensions::estimate ──> mm
//! ```
//!
//! Decoding is deliberately lenient: malformed lines are expected, not
//! exceptional, so they are skipped with a diagnostic rather than aborting
//! the batch. Note that this parser and the PPLA *generator* in
//! [`crate::compilers`] speak different field layouts — compiling and then
//! decoding is not a bit-for-bit round trip.

pub mod dimensions;
pub mod ppla;

pub use dimensions::{LabelDimensions, estimate};
pub use ppla::{Decode, PplaCommand, Skip, SkipReason, decode};
