// Copyright (C) Microsoft Corporation. All rights reserved.

//! Secret key material.
//!
//! Owned symmetric key bytes with secure generation and deterministic
//! cleanup. The material never leaves this module except through the
//! crate-internal accessor the cipher provider uses.

mod key;

pub use key::*;

use super::*;
