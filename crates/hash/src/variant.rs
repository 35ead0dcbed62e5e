// Copyright 2025 Irreducible Inc.

use digest::{
	consts::{U28, U32},
	generic_array::ArrayLength,
};

use crate::constants::{IV224, IV256};

mod sealed {
	pub trait Sealed {}

	impl Sealed for super::Variant224 {}
	impl Sealed for super::Variant256 {}
}

/// An output width of the BLAKE-256 family.
///
/// Both widths share the compression function. They differ in the initial chain value, in
/// the bit that precedes the length field in the padding, and in how many bytes of the
/// final chain value are emitted.
pub trait Variant: sealed::Sealed + Clone + 'static {
	/// Digest length in bytes.
	type OutputSize: ArrayLength<u8> + 'static;

	const IV: [u32; 8];

	/// Low bit of the padding byte that precedes the 64-bit length field.
	const PADDING_END: u8;

	const NAME: &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Variant224;

impl Variant for Variant224 {
	type OutputSize = U28;

	const IV: [u32; 8] = IV224;
	const PADDING_END: u8 = 0x00;
	const NAME: &'static str = "BLAKE-224";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Variant256;

impl Variant for Variant256 {
	type OutputSize = U32;

	const IV: [u32; 8] = IV256;
	const PADDING_END: u8 = 0x01;
	const NAME: &'static str = "BLAKE-256";
}
