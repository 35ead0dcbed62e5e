// Copyright 2025 Irreducible Inc.

pub mod env;
pub mod tracing;
