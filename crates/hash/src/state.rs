// Copyright 2025 Irreducible Inc.

use std::{fmt, marker::PhantomData};

use digest::{typenum::Unsigned, Output};

use crate::{
	compression::compress,
	constants::BLOCK_LEN,
	variant::{Variant, Variant224, Variant256},
	Error,
};

/// Length of the optional salt in bytes.
pub const SALT_LEN: usize = 16;

const BLOCK_BITS: u64 = 8 * BLOCK_LEN as u64;

/// Number of bytes in the final block that precede the domain byte and the length field.
const PADDING_BOUNDARY: usize = 55;

const PADDING_START: u8 = 0x80;

const PADDING: [u8; BLOCK_LEN] = {
	let mut padding = [0; BLOCK_LEN];
	padding[0] = PADDING_START;
	padding
};

/// Incremental BLAKE-224 / BLAKE-256 hasher state.
///
/// Full blocks are compressed as soon as they are available, so at most 63 bytes are ever
/// buffered. [`BlakeState::sum`] finalizes a copy of the state, which lets the caller keep
/// writing after taking a digest.
#[derive(Clone)]
pub struct BlakeState<V> {
	chain: [u32; 8],
	salt: [u32; 4],
	/// Number of message bits compressed so far, modulo 2^64.
	counter: u64,
	buffer: [u8; BLOCK_LEN],
	/// Invariant: `buffered` is always strictly less than `BLOCK_LEN` between calls.
	buffered: usize,
	/// Suppresses the counter for the next compression.
	no_counter: bool,
	_variant: PhantomData<V>,
}

/// BLAKE-224 hasher state.
pub type Blake224 = BlakeState<Variant224>;
/// BLAKE-256 hasher state.
pub type Blake256 = BlakeState<Variant256>;

impl<V: Variant> BlakeState<V> {
	pub const BLOCK_SIZE: usize = BLOCK_LEN;
	pub const OUTPUT_SIZE: usize = <V::OutputSize as Unsigned>::USIZE;

	/// Creates an unsalted state.
	pub fn new() -> Self {
		Self::from_salt_words([0; 4])
	}

	/// Creates a salted state.
	///
	/// Fails unless `salt` is exactly [`SALT_LEN`] bytes long.
	pub fn with_salt(salt: &[u8]) -> Result<Self, Error> {
		let salt: [u8; SALT_LEN] = salt.try_into().map_err(|_| {
			tracing::debug!(len = salt.len(), "rejected salt");
			Error::InvalidSaltLength { len: salt.len() }
		})?;
		Ok(Self::from_salt(salt))
	}

	pub fn from_salt(salt: [u8; SALT_LEN]) -> Self {
		let mut words = [0u32; 4];
		for (word, chunk) in words.iter_mut().zip(salt.chunks_exact(4)) {
			*word = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
		}
		Self::from_salt_words(words)
	}

	fn from_salt_words(salt: [u32; 4]) -> Self {
		Self {
			chain: V::IV,
			salt,
			counter: 0,
			buffer: [0; BLOCK_LEN],
			buffered: 0,
			no_counter: false,
			_variant: PhantomData,
		}
	}

	pub fn block_size(&self) -> usize {
		Self::BLOCK_SIZE
	}

	/// Digest length in bytes.
	pub fn size(&self) -> usize {
		Self::OUTPUT_SIZE
	}

	/// Absorbs `data` into the state.
	pub fn write(&mut self, data: impl AsRef<[u8]>) {
		self.absorb(data.as_ref());
	}

	/// Returns the digest of everything written so far without consuming the state.
	pub fn sum(&self) -> Output<Self> {
		let mut out = Output::<Self>::default();
		self.clone().finalize_into_slice(&mut out);
		out
	}

	/// Restarts the state. The salt is kept.
	pub fn reset(&mut self) {
		*self = Self::from_salt_words(self.salt);
	}

	fn absorb(&mut self, mut data: &[u8]) {
		if self.buffered != 0 {
			let to_copy = std::cmp::min(data.len(), BLOCK_LEN - self.buffered);
			self.buffer[self.buffered..self.buffered + to_copy].copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.buffered += to_copy;

			if self.buffered < BLOCK_LEN {
				return;
			}

			let counter = self.next_counter();
			self.chain = compress(&self.chain, &self.salt, counter, &self.buffer);
			self.buffered = 0;
		}

		let mut chunks = data.chunks_exact(BLOCK_LEN);
		for chunk in &mut chunks {
			let counter = self.next_counter();
			self.chain = compress(
				&self.chain,
				&self.salt,
				counter,
				chunk.try_into().expect("chunk is 64 bytes"),
			);
		}

		let remaining = chunks.remainder();
		self.buffer[..remaining.len()].copy_from_slice(remaining);
		self.buffered = remaining.len();
	}

	/// Accounts for one more compressed block and returns the counter to mix into it.
	fn next_counter(&mut self) -> Option<u64> {
		self.counter = self.counter.wrapping_add(BLOCK_BITS);
		(!self.no_counter).then_some(self.counter)
	}

	/// Backs the counter off by `len` bytes that are about to be absorbed as padding.
	fn rewind(&mut self, len: usize) {
		self.counter = self.counter.wrapping_sub(8 * len as u64);
	}

	/// Pads the message and returns the final chain value.
	fn finalize_chain(&mut self) -> [u32; 8] {
		let length = self.counter.wrapping_add(8 * self.buffered as u64);
		let two_blocks = self.buffered > PADDING_BOUNDARY;

		if self.buffered == PADDING_BOUNDARY {
			// One byte holds both the padding start and the domain bit.
			self.rewind(1);
			self.absorb(&[PADDING_START | V::PADDING_END]);
		} else {
			if self.buffered < PADDING_BOUNDARY {
				if self.buffered == 0 {
					self.no_counter = true;
				}
				let pad_len = PADDING_BOUNDARY - self.buffered;
				self.rewind(pad_len);
				self.absorb(&PADDING[..pad_len]);
			} else {
				let pad_len = BLOCK_LEN - self.buffered;
				self.rewind(pad_len);
				self.absorb(&PADDING[..pad_len]);

				// The last block holds no message bits.
				self.rewind(PADDING_BOUNDARY);
				self.absorb(&PADDING[1..=PADDING_BOUNDARY]);
				self.no_counter = true;
			}
			self.rewind(1);
			self.absorb(&[V::PADDING_END]);
		}

		self.rewind(8);
		self.absorb(&length.to_be_bytes());
		debug_assert_eq!(self.buffered, 0);

		tracing::trace!(variant = V::NAME, length, two_blocks, "finalized");
		self.chain
	}

	pub(crate) fn finalize_into_slice(&mut self, out: &mut [u8]) {
		debug_assert_eq!(out.len(), Self::OUTPUT_SIZE);

		let chain = self.finalize_chain();
		for (chunk, word) in out.chunks_exact_mut(4).zip(chain) {
			chunk.copy_from_slice(&word.to_be_bytes());
		}
	}
}

impl<V: Variant> Default for BlakeState<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V: Variant> fmt::Debug for BlakeState<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BlakeState")
			.field("variant", &V::NAME)
			.field("counter", &self.counter)
			.field("buffered", &self.buffered)
			.finish_non_exhaustive()
	}
}
