#![forbid(unsafe_code)]
//! # bcsplit
//!
//! Paired-end FASTQ **barcode split filter**: scan the first bases of each
//! mate for a fixed barcode within a Hamming-distance budget, keep only the
//! pairs where **both** mates match, optionally trim the matched span from
//! sequence and quality, and write the survivors to two fresh gzipped FASTQ
//! files.
//!
//! ## Highlights
//! - **Lockstep pairing**: R1 and R2 are consumed one record at a time, in
//!   step; a pair is kept or dropped as a unit.
//! - **Leftmost matching**: the first in-budget offset wins, never a
//!   later, better-scoring one.
//! - **Streaming**: one record pair in memory at a time, single-threaded.
//!
//! ## Example
//! ```no_run
//! use bcsplit::split::{run, SplitOpts};
//! let summary = run(&SplitOpts {
//!     r1: "sample_R1.fastq.gz".into(),
//!     r2: "sample_R2.fastq.gz".into(),
//!     barcode: "ACGTACGTACG".into(),
//!     max_mismatches: 1,
//!     search_len: 80,
//!     trim: false,
//!     out_stem: None,
//! })
//! .unwrap();
//! println!("kept {} pairs", summary.pairs_kept);
//! ```

pub mod detect;
pub mod seqio;
pub mod split;

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
