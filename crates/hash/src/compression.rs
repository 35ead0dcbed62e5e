// Copyright 2025 Irreducible Inc.

//! The BLAKE-256 compression function.
//!
//! One call folds a 64-byte message block into the 8-word chain value. BLAKE-224 uses the
//! same function and differs only by its IV, padding and truncation.

use seq_macro::seq;

use crate::constants::{BLOCK_LEN, CONSTANTS, SIGMA};

/// The G function applied to the state words `a`, `b`, `c`, `d`.
///
/// `i` selects the pair of message words `SIGMA[r][2i]`, `SIGMA[r][2i + 1]` for the round.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn g(
	v: &mut [u32; 16],
	m: &[u32; 16],
	sigma: &[usize; 16],
	i: usize,
	a: usize,
	b: usize,
	c: usize,
	d: usize,
) {
	let x = sigma[2 * i];
	let y = sigma[2 * i + 1];

	v[a] = v[a].wrapping_add(m[x] ^ CONSTANTS[y]).wrapping_add(v[b]);
	v[d] = (v[d] ^ v[a]).rotate_right(16);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(12);

	v[a] = v[a].wrapping_add(m[y] ^ CONSTANTS[x]).wrapping_add(v[b]);
	v[d] = (v[d] ^ v[a]).rotate_right(8);
	v[c] = v[c].wrapping_add(v[d]);
	v[b] = (v[b] ^ v[c]).rotate_right(7);
}

#[inline(always)]
fn round(v: &mut [u32; 16], m: &[u32; 16], sigma: &[usize; 16]) {
	// Columns
	g(v, m, sigma, 0, 0, 4, 8, 12);
	g(v, m, sigma, 1, 1, 5, 9, 13);
	g(v, m, sigma, 2, 2, 6, 10, 14);
	g(v, m, sigma, 3, 3, 7, 11, 15);

	// Diagonals
	g(v, m, sigma, 4, 0, 5, 10, 15);
	g(v, m, sigma, 5, 1, 6, 11, 12);
	g(v, m, sigma, 6, 2, 7, 8, 13);
	g(v, m, sigma, 7, 3, 4, 9, 14);
}

/// Compresses one message block into `chain`, returning the new chain value.
///
/// `counter` is the number of message bits hashed up to and including this block. It is
/// mixed into the working vector unless it is `None`, which is the case for a final block
/// that carries no message bits.
pub fn compress(
	chain: &[u32; 8],
	salt: &[u32; 4],
	counter: Option<u64>,
	block: &[u8; BLOCK_LEN],
) -> [u32; 8] {
	let mut m = [0u32; 16];
	for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_be_bytes(chunk.try_into().expect("chunk is 4 bytes"));
	}

	let mut v = [0u32; 16];
	v[..8].copy_from_slice(chain);
	for i in 0..4 {
		v[i + 8] = salt[i] ^ CONSTANTS[i];
	}
	v[12..].copy_from_slice(&CONSTANTS[4..8]);

	if let Some(counter) = counter {
		let low = counter as u32;
		let high = (counter >> 32) as u32;
		v[12] ^= low;
		v[13] ^= low;
		v[14] ^= high;
		v[15] ^= high;
	}

	// Rounds 10 to 13 reuse the first four permutations.
	seq!(R in 0..14 {
		round(&mut v, &m, &SIGMA[R % 10]);
	});

	let mut out = *chain;
	for i in 0..4 {
		out[i] ^= v[i] ^ v[i + 8] ^ salt[i];
		out[i + 4] ^= v[i + 4] ^ v[i + 12] ^ salt[i];
	}
	out
}
