//! # bsm-errno
//!
//! Translation between BSM audit error numbers and the local platform's
//! errno space.
//!
//! Operating systems disagree about the numeric value of almost every
//! errno, and some errors exist on only one family. Audit trails have to
//! outlive the machine that wrote them, so records carry error numbers
//! in the platform-independent BSM space and each reader translates to
//! its own errno values. This crate is that translation: an immutable
//! compile-time table of (BSM, local) pairs and the lookups over it.
//!
//! ## Asymmetry
//!
//! The two directions deliberately fail differently:
//!
//! | Direction | Contract |
//! |-----------|----------|
//! | [`bsm_to_errno`] | Can miss. Foreign or garbage octets are an expected outcome and return [`ForeignErrno`]. |
//! | [`errno_to_bsm`] | Total. Unmapped locals collapse to [`codes::BSM_UNKNOWNERR`] so record generation never blocks. |
//! | [`strerror`] | Total. Degrades to a fixed placeholder for foreign codes. `std` only. |
//!
//! ## Quick Start
//!
//! ```
//! use bsm_errno::{bsm_to_errno, errno_to_bsm, codes};
//!
//! // Reading a record written on another platform.
//! let local = bsm_to_errno(codes::BSM_ENOENT).expect("ENOENT exists here");
//! assert_eq!(errno_to_bsm(local), codes::BSM_ENOENT);
//!
//! // Writing a record for an errno BSM never heard of.
//! assert_eq!(errno_to_bsm(-999_999), codes::BSM_UNKNOWNERR);
//! ```
//!
//! ## Feature Flags
//!
//! | Flag  | Effect |
//! |-------|--------|
//! | `std` (default) | Enables [`strerror`] and the `std::error::Error` impls. Without it the crate is `no_std` and the display-string operation does not exist. |
//!
//! ## Platforms
//!
//! Linux, macOS, and FreeBSD carry their full native tables; other Unix
//! targets get the portable base rows. Membership is fixed per build:
//! an errno concept a platform does not define has no row there at all.
//!
//! ## Concurrency
//!
//! Every call is a read of `static` data, so no locking is needed and
//! any number of threads may translate concurrently. Nothing allocates
//! and nothing blocks.

#![cfg_attr(not(feature = "std"), no_std)]

mod code;
mod convert;
mod table;

pub mod codes;

pub use code::BsmErrno;
pub use convert::{bsm_to_errno, errno_to_bsm, ForeignErrno};
#[cfg(feature = "std")]
pub use convert::{strerror, FOREIGN_STRERROR};
pub use table::{entries, Mapping};
