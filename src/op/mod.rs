// Copyright (C) Microsoft Corporation. All rights reserved.

//! Core cryptographic operation traits.
//!
//! This module defines the trait interfaces shared by the rest of the crate:
//!
//! - [`key`]: key markers and import/generation traits
//! - [`encoding`]: byte codec traits used by the legacy key blob format
//! - [`encryption`]: the cipher provider seam (transforms and their factory)
//!
//! # Design Principles
//!
//! Marker traits like [`SymmetricKey`] provide type-level guarantees about key
//! usage. Operation traits follow consistent patterns: an optional-buffer
//! export mode (`None` queries the required size, `Some` performs the copy)
//! and object-safe transform traits so that session state can hold any
//! provider's transform behind one interface.

mod encoding;
mod encryption;
mod key;

pub use encoding::*;
pub use encryption::*;
pub use key::*;

use super::*;
