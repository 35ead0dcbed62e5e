// Copyright 2025 Irreducible Inc.

//! Integration with the RustCrypto [`digest`] traits and [`std::io::Write`].

use std::io;

use digest::{
	consts::U64, core_api::BlockSizeUser, FixedOutput, FixedOutputReset, HashMarker, Output,
	OutputSizeUser, Reset, Update,
};

use crate::{state::BlakeState, variant::Variant};

impl<V: Variant> HashMarker for BlakeState<V> {}

impl<V: Variant> OutputSizeUser for BlakeState<V> {
	type OutputSize = V::OutputSize;
}

impl<V: Variant> BlockSizeUser for BlakeState<V> {
	type BlockSize = U64;
}

impl<V: Variant> Update for BlakeState<V> {
	fn update(&mut self, data: &[u8]) {
		BlakeState::write(self, data);
	}
}

impl<V: Variant> FixedOutput for BlakeState<V> {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		self.finalize_into_slice(out);
	}
}

impl<V: Variant> Reset for BlakeState<V> {
	fn reset(&mut self) {
		BlakeState::reset(self);
	}
}

impl<V: Variant> FixedOutputReset for BlakeState<V> {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		self.finalize_into_slice(out);
		BlakeState::reset(self);
	}
}

impl<V: Variant> io::Write for BlakeState<V> {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		BlakeState::write(self, buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io;

	use digest::{Digest, DynDigest};
	use hex_literal::hex;

	use crate::{Blake224, Blake256};

	const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

	#[test]
	fn test_digest_api() {
		let expected = hex!("7576698ee9cad30173080678e5965916adbb11cb5245d386bf1ffda1cb26c9d7");
		assert_eq!(<Blake256 as Digest>::digest(FOX)[..], expected);

		let out = <Blake256 as Digest>::new()
			.chain_update(&FOX[..10])
			.chain_update(&FOX[10..])
			.finalize();
		assert_eq!(out[..], expected);
	}

	#[test]
	fn test_output_sizes() {
		assert_eq!(<Blake224 as Digest>::output_size(), 28);
		assert_eq!(<Blake256 as Digest>::output_size(), 32);
	}

	#[test]
	fn test_finalize_reset_keeps_salt() {
		let mut hasher = Blake256::with_salt(b"SALTsaltSaltSALT").unwrap();
		Digest::update(&mut hasher, b"It's so salty out there!");
		let first = Digest::finalize_reset(&mut hasher);

		Digest::update(&mut hasher, b"It's so salty out there!");
		let second = Digest::finalize_reset(&mut hasher);

		let expected = hex!("88cc11889bbbee42095337fe2153c591971f94fbf8fe540d3c7e9f1700ab2d0c");
		assert_eq!(first[..], expected);
		assert_eq!(second[..], expected);
	}

	#[test]
	fn test_dyn_digest() {
		let mut hasher: Box<dyn DynDigest> = Box::new(Blake224::new());
		hasher.update(b"BLAKE");
		assert_eq!(
			hasher.finalize_reset()[..],
			hex!("cfb6848add73e1cb47994c4765df33b8f973702705a30a71fe4747a3")
		);
	}

	#[test]
	fn test_io_copy() {
		let mut hasher = Blake256::new();
		let copied = io::copy(&mut &FOX[..], &mut hasher).unwrap();
		assert_eq!(copied, FOX.len() as u64);
		assert_eq!(
			hasher.sum()[..],
			hex!("7576698ee9cad30173080678e5965916adbb11cb5245d386bf1ffda1cb26c9d7")
		);
	}
}
