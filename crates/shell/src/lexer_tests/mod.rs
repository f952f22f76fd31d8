// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizer tests split into logical modules.

#[macro_use]
mod macros;

mod basic;
mod properties;
mod quoting;
mod redirection;
