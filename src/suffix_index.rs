// Copyright 2026 The sufidx Authors
//
// SPDX-License-Identifier: Apache-2.0

use crate::sais;

/// A substring index over a byte string, backed by a suffix array.
///
/// The index borrows the text it was built over and never mutates after
/// construction, so a single index may be queried from any number of threads
/// concurrently.
pub struct SuffixIndex<'a> {
    text: &'a [u8],
    sa: Vec<u32>,
}

impl<'a> SuffixIndex<'a> {
    /// Creates a new `SuffixIndex` for `text`.
    ///
    /// Any byte string is accepted, including the empty string and strings
    /// containing zero bytes.
    ///
    /// This operation is *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if `text.len() >= u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufidx::SuffixIndex;
    ///
    /// let index = SuffixIndex::new(b"Hello, world!");
    /// ```
    #[must_use]
    pub fn new(text: &'a [u8]) -> Self {
        let sa = sais::suffix_array(text);

        Self { text, sa }
    }

    /// Returns the indexed text.
    #[must_use]
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// Returns the length of the indexed text.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the indexed text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if and only if `pattern` is contained in the indexed
    /// text.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufidx::SuffixIndex;
    ///
    /// let index = SuffixIndex::new(b"Hello, world!");
    /// assert!(index.contains(b"world"));
    /// ```
    #[must_use]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.sa
            .binary_search_by(|&suffix| {
                self.text[suffix as usize..]
                    .iter()
                    .take(pattern.len())
                    .cmp(pattern.iter())
            })
            .is_ok()
    }

    /// Returns the longest prefix of `pattern` that occurs anywhere in the
    /// indexed text, or `None` if not even its first byte occurs.
    ///
    /// On a match, [`Match::len`] is the number of leading bytes `pattern`
    /// shares with some suffix of the text and [`Match::position`] is the
    /// starting offset of one such suffix. When several suffixes tie for the
    /// longest shared prefix, which position is reported is unspecified.
    ///
    /// This operation is *O*(*m* \* log(*n*)), where `m` is `pattern.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sufidx::SuffixIndex;
    ///
    /// let index = SuffixIndex::new(b"Hello, world!");
    ///
    /// let m = index.longest_match(b"work").unwrap();
    /// assert_eq!(m.len(), 3);
    /// assert_eq!(m.position(), 7);
    ///
    /// assert!(index.longest_match(b"xyz").is_none());
    /// ```
    #[must_use]
    pub fn longest_match(&self, pattern: &[u8]) -> Option<Match> {
        // The suffixes sharing the longest prefix with the pattern border
        // the point where the pattern itself would sort, so it suffices to
        // examine the two neighbors of the partition point.
        let pivot = self.sa.partition_point(|&suffix| {
            self.text[suffix as usize..]
                .iter()
                .cmp(pattern.iter())
                .is_lt()
        });

        let mut best: Option<Match> = None;
        for i in [pivot.checked_sub(1), Some(pivot)].into_iter().flatten() {
            let Some(&suffix) = self.sa.get(i) else {
                continue;
            };
            let position = suffix as usize;
            let len = common_prefix_len(&self.text[position..], pattern);
            if len > 0 && best.is_none_or(|b| len > b.len) {
                best = Some(Match { position, len });
            }
        }

        best
    }
}

/// A match reported by [`SuffixIndex::longest_match`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match {
    position: usize,
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Match {
    /// Returns the starting offset in the indexed text of the matching
    /// suffix.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of leading bytes the pattern shares with the
    /// matching suffix. This is always at least 1; a length-0 outcome is
    /// reported as `None` by [`SuffixIndex::longest_match`] instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
