// Copyright 2013-2016 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This Rust crate converts internationalized domain names between their
//! Unicode form and their ASCII Compatible Encoding (ACE), using
//! [Punycode (RFC 3492)](https://tools.ietf.org/html/rfc3492).
//!
//! Quoting from [RFC 3492’s introduction](https://tools.ietf.org/html/rfc3492#section-1):
//!
//! > Punycode is a simple and efficient transfer encoding syntax designed
//! > for use with Internationalized Domain Names in Applications (IDNA).
//! > It uniquely and reversibly transforms a Unicode string into an ASCII
//! > string. ASCII characters in the Unicode string are represented
//! > literally, and non-ASCII characters are represented by ASCII
//! > characters that are allowed in host name labels (letters, digits, and
//! > hyphens).
//!
//! Only the Bootstring transform is implemented. Normalization, IDNA
//! mapping tables and bidi rules are left to the caller.
//!
//! ```rust
//! assert_eq!(idn_punycode::encode_domain("müller.de").unwrap(), "xn--mller-kva.de");
//! assert_eq!(idn_punycode::decode_domain("xn--mller-kva.de").unwrap(), "müller.de");
//! ```

mod code_points;
mod config;
mod dns_length;
mod encoding;
mod errors;
pub mod punycode;

pub use crate::code_points::CodePoints;
pub use crate::config::Config;
pub use crate::dns_length::{MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
pub use crate::encoding::TextEncoding;
pub use crate::errors::Error;
pub use crate::punycode::PREFIX;

/// Convert a domain to its ASCII form with the default [`Config`].
///
/// Every label is lowercased and, if it contains non-ASCII characters,
/// replaced by `xn--` followed by its Punycode encoding.
pub fn encode_domain(domain: &str) -> Result<String, Error> {
    Config::default().to_ascii(domain)
}

/// Convert a domain from its ASCII form with the default [`Config`].
///
/// Labels that do not start with `xn--` are left untouched.
pub fn decode_domain(domain: &str) -> Result<String, Error> {
    Config::default().to_unicode(domain)
}

/// Convert a single label to its ASCII form with the default [`Config`].
pub fn encode_label(label: &str) -> Result<String, Error> {
    Config::default()
        .encode_label(label)
        .map(|cow| cow.into_owned())
}

/// Convert a single label from its ASCII form with the default [`Config`].
pub fn decode_label(label: &str) -> Result<String, Error> {
    Config::default()
        .decode_label(label)
        .map(|cow| cow.into_owned())
}
