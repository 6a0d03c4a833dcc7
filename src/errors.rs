// Copyright 2013-2016 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Errors that can occur while converting a label or domain
/// between its Unicode form and its ASCII Compatible Encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A label's ACE form is empty or longer than `limit` octets.
    #[error("label is {length} octets long, expected 1 to {limit}")]
    LabelLength { length: usize, limit: usize },

    /// A domain's ACE form, separators included, is empty or longer than `limit` octets.
    #[error("domain is {length} octets long, expected 1 to {limit}")]
    DomainLength { length: usize, limit: usize },

    /// A Punycode payload contains a symbol outside of `a-z`, `A-Z` and `0-9`.
    #[error("invalid Punycode digit {0:?}")]
    InvalidDigit(char),

    /// A Punycode payload ends in the middle of a variable-length integer.
    #[error("Punycode payload ends in the middle of a variable-length integer")]
    TruncatedPayload,

    /// A decoded code point is not a Unicode scalar value,
    /// or cannot be represented in the configured text encoding.
    #[error("code point U+{code_point:04X} cannot be represented in {encoding}")]
    UnrepresentableCodePoint {
        code_point: u32,
        encoding: &'static str,
    },

    /// A non-ASCII character appears before the last delimiter of a Punycode payload.
    #[error("non-basic code point {0:?} before the last delimiter")]
    NonBasicCodePoint(char),

    /// The 32-bit Bootstring state overflowed.
    ///
    /// This only happens on inputs far longer than the DNS limits.
    #[error("Punycode arithmetic overflow")]
    Overflow,
}
