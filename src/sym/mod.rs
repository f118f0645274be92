// Copyright (C) Microsoft Corporation. All rights reserved.

//! Symmetric cipher sessions.
//!
//! This module provides the symmetric half of the key/cipher API:
//!
//! - [`SymmetricAlgorithm`]: the immutable cipher descriptor (family, block
//!   mode, padding) and the capability queries derived from it
//! - [`SymmetricKeyProvider`] and [`SymmetricCipherKey`]: key creation and the
//!   per-key, per-direction cipher session state machine
//! - [`IncrementalCipher`]: block-oriented update/finalize adapter for
//!   streaming consumers
//! - the bundled software cipher provider backing the above
//!
//! # Session model
//!
//! A key lazily creates at most one transform per direction. Block-oriented
//! algorithms reinitialize their transform on every one-shot call, so each
//! call is independent and honors its IV; stream ciphers retain keystream
//! state across calls on the same key instance. Keys are single-threaded:
//! all cipher operations take `&mut self` and transforms are reused, never
//! cloned.

mod algorithm;
mod block;
mod incremental;
mod key;
mod provider;
mod transform;

pub use algorithm::*;
pub use incremental::*;
pub use key::*;
pub use provider::SoftwareCipherProvider;

pub(crate) use block::*;
pub(crate) use super::*;

#[cfg(test)]
mod tests;
