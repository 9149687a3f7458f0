// Copyright 2026 The sufidx Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Suffix-array substring indexing for byte strings.
//!
//! This crate builds a suffix array over an immutable byte buffer once, then
//! answers longest-common-prefix queries against arbitrary byte patterns in
//! *O*(*m* \* log(*n*)) time. It is designed as the match-finding core of a
//! binary diffing tool, where the "old" blob is indexed once and every
//! position of the "new" blob is queried for its longest match.
//!
//! # Examples
//!
//! ```
//! use sufidx::SuffixIndex;
//!
//! let index = SuffixIndex::new(b"the quick brown fox");
//! assert!(index.contains(b"quick"));
//!
//! let m = index.longest_match(b"brownie").unwrap();
//! assert_eq!(m.len(), 5);
//! assert_eq!(m.position(), 10);
//! ```

mod sais;
mod suffix_index;

pub use suffix_index::{Match, SuffixIndex};
