//! Barcode detection (fixed-length, mismatch-tolerant).
//!
//! The implementation is intentionally dependency-free to keep builds lean and
//! predictable. Barcodes are short fixed motifs (>= 11 nt), so a sliding
//! Hamming-distance scan over the read prefix is all that is needed; no
//! alignment or bit-parallel machinery.
//!
//! # Examples
//! ```
//! use bcsplit::detect::{hamming_distance, find_barcode};
//! assert_eq!(hamming_distance(b"ACGT", b"ACGT"), Some(0));
//! assert_eq!(find_barcode(b"NNNNNACGTACGTACG", b"ACGTACGTACG", 0, 80), Some(5));
//! ```

/// Count mismatched positions between two equal-length byte strings.
///
/// Returns `None` when the lengths differ; a length mismatch can never count
/// as a barcode hit.
#[inline]
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// Slide `barcode` across the first `search_len` bases of `seq`, returning the
/// first (leftmost) offset whose Hamming distance is within `max_mismatches`.
///
/// The scan window is `min(search_len, seq.len())`; an occurrence that does
/// not fit entirely inside the window is never reported, and a barcode longer
/// than the window yields `None`. Leftmost wins: a later offset with fewer
/// mismatches does not displace an earlier qualifying one.
pub fn find_barcode(seq: &[u8], barcode: &[u8], max_mismatches: usize, search_len: usize) -> Option<usize> {
    let limit = search_len.min(seq.len());
    let blen = barcode.len();
    if blen == 0 || blen > limit {
        return None;
    }
    for i in 0..=limit - blen {
        match hamming_distance(&seq[i..i + blen], barcode) {
            Some(d) if d <= max_mismatches => return Some(i),
            _ => {}
        }
    }
    None
}
