// Copyright 2025 Irreducible Inc.

use crate::SALT_LEN;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid salt length: expected {} bytes, got {len}", SALT_LEN)]
	InvalidSaltLength { len: usize },
}
