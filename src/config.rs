// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Label and domain level conversions.

use crate::code_points::CodePoints;
use crate::dns_length;
use crate::encoding::TextEncoding;
use crate::errors::Error;
use crate::punycode::{self, PREFIX};
use log::trace;
use std::borrow::Cow;

/// Options for converting labels and domains.
///
/// The defaults check decoded labels against UTF-8
/// and enforce the DNS length limits.
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Config {
    text_encoding: TextEncoding,
    verify_dns_length: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            text_encoding: TextEncoding::utf8(),
            verify_dns_length: true,
        }
    }
}

impl Config {
    /// The encoding every decoded code point must be representable in.
    #[inline]
    pub fn text_encoding(mut self, value: TextEncoding) -> Self {
        self.text_encoding = value;
        self
    }

    /// Whether to reject labels whose ASCII form is empty or longer than 63 octets,
    /// and domains whose ASCII form is empty or longer than 255 octets.
    #[inline]
    pub fn verify_dns_length(mut self, value: bool) -> Self {
        self.verify_dns_length = value;
        self
    }

    /// Convert one label to its ASCII form.
    ///
    /// The label is lowercased first. A label without non-ASCII
    /// characters is returned as-is, without the `xn--` prefix.
    pub fn encode_label<'a>(&self, label: &'a str) -> Result<Cow<'a, str>, Error> {
        let folded = fold_case(label);
        let code_points = CodePoints::new(folded.chars());
        let encoded = if code_points.is_basic_only() {
            folded
        } else {
            let mut ace = String::with_capacity(PREFIX.len() + folded.len());
            ace.push_str(PREFIX);
            punycode::encode_code_points(&code_points, &mut ace)?;
            Cow::Owned(ace)
        };
        if self.verify_dns_length {
            dns_length::check_label(&encoded)?;
        }
        Ok(encoded)
    }

    /// Convert one label from its ASCII form.
    ///
    /// A label without the `xn--` prefix is returned as-is.
    /// The prefix and the payload are case-insensitive.
    ///
    /// Only labels in ASCII form are length-checked. A non-ASCII label
    /// without the prefix is already in Unicode form and passes through.
    pub fn decode_label<'a>(&self, label: &'a str) -> Result<Cow<'a, str>, Error> {
        let payload = match strip_prefix(label) {
            Some(payload) => payload,
            None => {
                if self.verify_dns_length && label.is_ascii() {
                    dns_length::check_label(label)?;
                }
                return Ok(Cow::Borrowed(label));
            }
        };
        if self.verify_dns_length {
            dns_length::check_label(label)?;
        }
        let payload = payload.to_ascii_lowercase();
        let decoded = punycode::decode_to_string(&payload)?;
        if let Some(c) = self.text_encoding.find_unmappable(&decoded) {
            trace!(
                "{:?} decodes to {:?}, which {} cannot represent",
                label,
                c,
                self.text_encoding.name()
            );
            return Err(Error::UnrepresentableCodePoint {
                code_point: u32::from(c),
                encoding: self.text_encoding.name(),
            });
        }
        Ok(Cow::Owned(decoded))
    }

    /// Convert a domain to its ASCII form, one `.`-separated label at a time.
    pub fn to_ascii(&self, domain: &str) -> Result<String, Error> {
        let result = self.map_labels(domain, |label| self.encode_label(label))?;
        if self.verify_dns_length {
            dns_length::check_domain(result.len())?;
        }
        Ok(result)
    }

    /// Convert a domain from its ASCII form, one `.`-separated label at a time.
    ///
    /// The domain length is measured on its ASCII form: labels already in
    /// Unicode form count as the ASCII label `to_ascii` would produce.
    pub fn to_unicode(&self, domain: &str) -> Result<String, Error> {
        let mut length = domain.bytes().filter(|&b| b == b'.').count();
        let result = self.map_labels(domain, |label| {
            let decoded = self.decode_label(label)?;
            if self.verify_dns_length {
                length += ascii_length(label)?;
            }
            Ok(decoded)
        })?;
        if self.verify_dns_length {
            dns_length::check_domain(length)?;
        }
        Ok(result)
    }

    fn map_labels<'a, F>(&self, domain: &'a str, mut f: F) -> Result<String, Error>
    where
        F: FnMut(&'a str) -> Result<Cow<'a, str>, Error>,
    {
        if self.verify_dns_length && domain.is_empty() {
            dns_length::check_domain(0)?;
        }
        let mut result = String::with_capacity(domain.len());
        let mut first = true;
        for label in domain.split('.') {
            if !first {
                result.push('.');
            }
            first = false;
            result.push_str(&f(label)?);
        }
        Ok(result)
    }
}

fn strip_prefix(label: &str) -> Option<&str> {
    let bytes = label.as_bytes();
    if bytes.len() >= PREFIX.len() && bytes[..PREFIX.len()].eq_ignore_ascii_case(PREFIX.as_bytes())
    {
        Some(&label[PREFIX.len()..])
    } else {
        None
    }
}

/// Octet length of the ASCII form of `label`.
fn ascii_length(label: &str) -> Result<usize, Error> {
    if label.is_ascii() || strip_prefix(label).is_some() {
        return Ok(label.len());
    }
    let mut ace = String::from(PREFIX);
    punycode::encode_code_points(&CodePoints::new(fold_case(label).chars()), &mut ace)?;
    Ok(ace.len())
}

fn fold_case(label: &str) -> Cow<'_, str> {
    if label.chars().all(|c| c.to_lowercase().eq(Some(c))) {
        Cow::Borrowed(label)
    } else {
        Cow::Owned(label.to_lowercase())
    }
}
