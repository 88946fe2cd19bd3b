//! Engine for the primer interactive console tutorial.
//!
//! This crate implements the full scripted session behind the `primer`
//! binary: a welcome banner, a greeting read from the user, integer
//! addition, an even/odd scan over the entered range, an optional
//! multiplication table, and a fixed array-sum demo. The session is
//! generic over [`std::io::BufRead`] and [`std::io::Write`] so the whole
//! run can be exercised against in-memory buffers.
//!
//! The crate is organized around three pieces:
//!
//! - **Operations**: the pure arithmetic and formatting functions
//! - **Input scanning**: line and whitespace-delimited token reads with
//!   stream-extraction semantics
//! - **Session orchestration**: the strict step sequence and its output
//!   contract

pub mod errors;
pub mod input;
pub mod ops;
pub mod session;

pub use errors::PrimerError;
pub use session::{Session, SessionOptions};
