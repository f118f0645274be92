// Copyright (C) Microsoft Corporation. All rights reserved.

mod cbc_tests;
mod ecb_tests;
mod session_tests;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::*;

fn b64(encoded: &str) -> Vec<u8> {
    STANDARD.decode(encoded).unwrap()
}

fn unhex(encoded: &str) -> Vec<u8> {
    hex::decode(encoded).unwrap()
}
