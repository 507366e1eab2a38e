//! Benchmark workloads for Ferrule.
//!
//! Provides deterministic inputs shared by the benches:
//!
//! - [`request_sizes`]: allocation sizes for a simulated request
//! - [`integer_samples`]: signed values spread across digit counts

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ferrule_test_utils::dirty_bytes;

/// `count` allocation sizes in `1..=max`, identical for identical seeds.
pub fn request_sizes(seed: u64, count: usize, max: usize) -> Vec<usize> {
    dirty_bytes(seed, count * 2)
        .chunks_exact(2)
        .map(|pair| usize::from(u16::from_le_bytes([pair[0], pair[1]])) % max + 1)
        .collect()
}

/// `count` signed integers whose magnitudes cover 1 to 18 digits.
pub fn integer_samples(seed: u64, count: usize) -> Vec<i64> {
    dirty_bytes(seed, count * 8)
        .chunks_exact(8)
        .enumerate()
        .map(|(i, chunk)| {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            let value = i64::from_le_bytes(raw);
            let digits = (i % 18) as u32 + 1;
            value % 10i64.pow(digits)
        })
        .collect()
}
