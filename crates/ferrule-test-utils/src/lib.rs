//! Test utilities and fixtures for Ferrule development.
//!
//! Provides [`AlignedBuf`], a stack buffer whose base address is aligned
//! well past the arena's default alignment so offsets inside it can be
//! asserted exactly, plus [`dirty_bytes`] for deterministic garbage and
//! [`init_tracing`] for tests that want to see diagnostic events.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Fixed-size byte buffer with a 16-byte aligned base address.
#[derive(Clone, Debug)]
#[repr(C, align(16))]
pub struct AlignedBuf<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> AlignedBuf<N> {
    /// A zeroed buffer.
    pub fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// A buffer pre-filled with `byte`.
    pub fn filled(byte: u8) -> Self {
        Self { bytes: [byte; N] }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl<const N: usize> Default for AlignedBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// `len` pseudo-random bytes, identical for identical seeds.
pub fn dirty_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}

/// Install a test-friendly `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
