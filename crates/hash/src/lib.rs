// Copyright 2025 Irreducible Inc.

//! The BLAKE-224 and BLAKE-256 hash functions, with optional 128-bit salt.
//!
//! Both are exposed as [`BlakeState`] instantiations which implement the RustCrypto
//! [`digest`] traits.

pub mod compression;
pub mod constants;
mod error;
mod hasher;
pub mod state;
pub mod variant;

pub use digest;
pub use error::Error;
pub use state::*;
pub use variant::*;


/// Computes the BLAKE-224 digest of `data`.
pub fn sum224(data: impl AsRef<[u8]>) -> [u8; 28] {
	let mut state = Blake224::new();
	state.write(data);
	state.sum().into()
}

/// Computes the BLAKE-256 digest of `data`.
pub fn sum256(data: impl AsRef<[u8]>) -> [u8; 32] {
	let mut state = Blake256::new();
	state.write(data);
	state.sum().into()
}
