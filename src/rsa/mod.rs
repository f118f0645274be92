// Copyright (C) Microsoft Corporation. All rights reserved.

//! RSA key parameters and the legacy CAPI key blob codec.

pub mod capi;
mod key;

pub use key::*;

pub(crate) use super::*;

#[cfg(test)]
mod tests;
