// Copyright 2026 The sufidx Authors
//
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction by induced sorting.
//!
//! The algorithm is implemented as described in the [article] Linear Suffix
//! Array Construction by Almost Pure Induced-Sorting by Nong, Zhang, and
//! Chan (SA-IS). It runs in *O*(*n*) time.
//!
//! Unlike textbook presentations, the caller does not need to terminate the
//! input with a unique smallest character: the input is shifted up by one
//! symbol and a fresh sentinel is appended internally, so arbitrary byte
//! strings (embedded zeros included) sort correctly.
//!
//! [article]: https://doi.org/10.1109/DCC.2009.42

// This module casts u32s to usizes for the purpose of indexing. Because of
// these casts, any target where the size of a usize is less than the size of
// a u32 will produce unexpected (albeit not undefined) behavior. To prevent
// this, cause a compiler error on such targets.
#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("Target pointer width must be at least 32 bits");

/// The representation of an unfilled suffix array slot
const EMPTY: u32 = u32::MAX;

/// Computes the suffix array of `text`.
///
/// The result is a permutation of `[0, text.len())` ordering the suffixes of
/// `text` lexicographically.
///
/// # Panics
///
/// Panics if `text.len() >= u32::MAX`.
pub(crate) fn suffix_array(text: &[u8]) -> Vec<u32> {
    assert!(
        text.len() < u32::MAX as usize,
        "text must be indexable with 32-bit offsets"
    );

    if text.is_empty() {
        return Vec::new();
    }

    // Shift the alphabet up by one and append a unique smallest sentinel.
    let mut symbols: Vec<u32> = Vec::with_capacity(text.len() + 1);
    symbols.extend(text.iter().map(|&b| u32::from(b) + 1));
    symbols.push(0);

    let mut sa = sais(&symbols, 257);

    // The sentinel suffix sorts first; drop it.
    sa.remove(0);

    sa
}

/// Sorts the suffixes of `symbols` by induced sorting.
///
/// `symbols` must end with a unique smallest symbol. The recursion preserves
/// this invariant: the sentinel's LMS-substring is named 0 and nothing else
/// ever matches it, so each reduced string again ends with a unique 0.
fn sais(symbols: &[u32], alphabet_size: usize) -> Vec<u32> {
    let n = symbols.len();
    if n == 1 {
        return vec![0];
    }

    let types = classify(symbols);
    let lms_positions: Vec<u32> = (1..n)
        .filter(|&i| is_lms(&types, i))
        .map(|i| i as u32)
        .collect();
    let sizes = bucket_sizes(symbols, alphabet_size);

    // Stage 1: sort the LMS-substrings. Seeding the bucket tails with the
    // LMS positions in any order and inducing once leaves the LMS entries of
    // the suffix array in LMS-substring order.
    let mut sa = vec![EMPTY; n];
    let mut tails = bucket_tails(&sizes);
    for &pos in lms_positions.iter().rev() {
        let c = symbols[pos as usize] as usize;
        tails[c] -= 1;
        sa[tails[c] as usize] = pos;
    }
    induce(&mut sa, symbols, &types, &sizes);

    // Name the LMS-substrings in sorted order, reusing a name whenever the
    // substring equals its predecessor.
    let mut names = vec![EMPTY; n];
    let mut name: u32 = 0;
    let mut previous: Option<u32> = None;
    for &pos in &sa {
        if !is_lms(&types, pos as usize) {
            continue;
        }
        if let Some(prev) = previous {
            if !lms_substrings_equal(symbols, &types, prev as usize, pos as usize) {
                name += 1;
            }
        }
        names[pos as usize] = name;
        previous = Some(pos);
    }
    let name_count = name as usize + 1;

    // Stage 2: solve the reduced problem, the string of LMS names in text
    // order. Recurse only if the names are not yet unique.
    let reduced: Vec<u32> = lms_positions
        .iter()
        .map(|&pos| names[pos as usize])
        .collect();
    let reduced_sa = if name_count < reduced.len() {
        sais(&reduced, name_count)
    } else {
        let mut direct = vec![0; reduced.len()];
        for (i, &name) in reduced.iter().enumerate() {
            direct[name as usize] = i as u32;
        }
        direct
    };

    // Stage 3: induce the full suffix array from the now fully sorted LMS
    // suffixes.
    sa.fill(EMPTY);
    let mut tails = bucket_tails(&sizes);
    for &rank in reduced_sa.iter().rev() {
        let pos = lms_positions[rank as usize];
        let c = symbols[pos as usize] as usize;
        tails[c] -= 1;
        sa[tails[c] as usize] = pos;
    }
    induce(&mut sa, symbols, &types, &sizes);

    sa
}

/// One full induction round: L-type suffixes left to right from the bucket
/// heads, then S-type suffixes right to left from the bucket tails.
fn induce(sa: &mut [u32], symbols: &[u32], types: &[SuffixType], sizes: &[u32]) {
    let n = symbols.len();

    let mut heads = bucket_heads(sizes);
    for i in 0..n {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos as usize - 1;
        if types[j] == SuffixType::L {
            let c = symbols[j] as usize;
            sa[heads[c] as usize] = j as u32;
            heads[c] += 1;
        }
    }

    let mut tails = bucket_tails(sizes);
    for i in (0..n).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos as usize - 1;
        if types[j] == SuffixType::S {
            let c = symbols[j] as usize;
            tails[c] -= 1;
            sa[tails[c] as usize] = j as u32;
        }
    }
}

fn classify(symbols: &[u32]) -> Vec<SuffixType> {
    let n = symbols.len();
    let mut types = vec![SuffixType::S; n];

    // The sentinel is S-type by definition
    for i in (0..n - 1).rev() {
        types[i] = if symbols[i] < symbols[i + 1]
            || (symbols[i] == symbols[i + 1] && types[i + 1] == SuffixType::S)
        {
            SuffixType::S
        } else {
            SuffixType::L
        };
    }

    types
}

/// Returns `true` if position `i` is leftmost-S-type: an S-type position
/// whose left neighbor is L-type.
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

/// Compares the LMS-substrings starting at `a` and `b` for equality.
///
/// An LMS-substring runs from its LMS position through the next LMS position
/// inclusive. The unique sentinel guarantees neither walk can run off the end
/// of `symbols` before a mismatch or a shared terminator is found.
fn lms_substrings_equal(symbols: &[u32], types: &[SuffixType], a: usize, b: usize) -> bool {
    let mut i = 0;
    loop {
        let a_done = i > 0 && is_lms(types, a + i);
        let b_done = i > 0 && is_lms(types, b + i);
        if a_done && b_done {
            return true;
        }
        if a_done != b_done || symbols[a + i] != symbols[b + i] {
            return false;
        }

        i += 1;
    }
}

fn bucket_sizes(symbols: &[u32], alphabet_size: usize) -> Vec<u32> {
    let mut sizes = vec![0; alphabet_size];
    for &c in symbols {
        sizes[c as usize] += 1;
    }

    sizes
}

fn bucket_heads(sizes: &[u32]) -> Vec<u32> {
    let mut heads = Vec::with_capacity(sizes.len());
    let mut sum: u32 = 0;
    for &size in sizes {
        heads.push(sum);
        sum += size;
    }

    heads
}

/// Computes one-past-the-end offsets; callers pre-decrement before placing.
fn bucket_tails(sizes: &[u32]) -> Vec<u32> {
    let mut tails = Vec::with_capacity(sizes.len());
    let mut sum: u32 = 0;
    for &size in sizes {
        sum += size;
        tails.push(sum);
    }

    tails
}

#[derive(Clone, Copy, PartialEq)]
enum SuffixType {
    L,
    S,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn brute_force(text: &[u8]) -> Vec<u32> {
        let mut sa: Vec<u32> = (0..text.len() as u32).collect();
        sa.sort_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
        sa
    }

    #[test]
    fn short_non_recursive_string() {
        let suffix_array = suffix_array(b"banana");

        assert_eq!(
            &suffix_array,
            &[5, 3, 1, 0, 4, 2],
            "suffix array of \"banana\" is wrong"
        );
    }

    #[test]
    fn classic_recursive_string() {
        let suffix_array = suffix_array(b"mississippi");

        assert_eq!(
            &suffix_array,
            &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2],
            "suffix array of \"mississippi\" is wrong"
        );
    }

    #[test]
    fn embedded_zeroes() {
        let suffix_array = suffix_array(b"a\0b\0");

        assert_eq!(
            &suffix_array,
            &[3, 1, 0, 2],
            "zero bytes must sort below all other bytes"
        );
    }

    #[test]
    fn empty_string() {
        let suffix_array = suffix_array(b"");

        assert_eq!(&suffix_array, &[], "empty text has an empty suffix array");
    }

    #[test]
    fn single_byte() {
        let suffix_array = suffix_array(b"x");

        assert_eq!(&suffix_array, &[0], "one suffix expected");
    }

    #[test]
    fn run_of_equal_bytes() {
        let suffix_array = suffix_array(b"aaaaaaaa");

        assert_eq!(
            &suffix_array,
            &[7, 6, 5, 4, 3, 2, 1, 0],
            "shorter suffixes of a constant string sort first"
        );
    }

    proptest! {
        #[test]
        fn sorted_permutation(text in prop::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(suffix_array(&text), brute_force(&text));
        }

        // A tiny alphabet forces deep recursion through the reduced problem.
        #[test]
        fn sorted_permutation_small_alphabet(text in prop::collection::vec(0..3u8, 0..512)) {
            prop_assert_eq!(suffix_array(&text), brute_force(&text));
        }
    }
}
