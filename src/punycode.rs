// Copyright 2013 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Punycode ([RFC 3492](http://tools.ietf.org/html/rfc3492)) implementation.
//!
//! Since Punycode fundamentally works on unicode code points,
//! `encode` and `decode` take and return slices and vectors of `char`.
//! `encode_str` and `decode_to_string` provide convenience wrappers
//! that convert from and to Rust’s UTF-8 based `str` and `String` types.
//!
//! These functions work on the bare payload: they neither add nor strip
//! the `xn--` prefix, and they do not fold case.
//! See [`Config`](crate::Config) for the label and domain level operations.

use crate::code_points::CodePoints;
use crate::errors::Error;
use smallvec::SmallVec;
use std::char;
use std::convert::TryFrom;

// Bootstring parameters for Punycode
const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

/// The prefix that marks a label as ASCII Compatible Encoding.
pub const PREFIX: &str = "xn--";

const DIGITS: &[u8; BASE as usize] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[inline]
fn value_to_digit(value: u32) -> char {
    char::from(DIGITS[value as usize])
}

#[inline]
fn digit_to_value(c: char) -> Option<u32> {
    Some(match c {
        '0'..='9' => u32::from(c) - u32::from('0') + 26,
        'A'..='Z' => u32::from(c) - u32::from('A'),
        'a'..='z' => u32::from(c) - u32::from('a'),
        _ => return None,
    })
}

#[inline]
fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias + T_MIN {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

#[inline]
fn adapt(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta /= if first_time { DAMP } else { 2 };
    delta += delta / num_points;
    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + (((BASE - T_MIN + 1) * delta) / (delta + SKEW))
}

/// Convert Punycode to an Unicode `String`.
#[inline]
pub fn decode_to_string(input: &str) -> Result<String, Error> {
    Ok(Decoder::default().decode(input)?.iter().collect())
}

/// Convert Punycode to Unicode.
///
/// Overflow can only happen on inputs that take more than
/// 63 encoded bytes, the DNS limit on domain name labels.
pub fn decode(input: &str) -> Result<Vec<char>, Error> {
    Ok(Decoder::default().decode(input)?.to_vec())
}

#[derive(Default)]
pub(crate) struct Decoder {
    output: SmallVec<[char; 59]>,
}

impl Decoder {
    /// Decode one payload into the internal buffer and return the result.
    pub(crate) fn decode(&mut self, input: &str) -> Result<&[char], Error> {
        self.output.clear();
        // Handle "basic" (ASCII) code points.
        // They are encoded as-is before the last delimiter, if any.
        let (base, input) = match input.rfind(DELIMITER) {
            Some(position) if position > 0 => (&input[..position], &input[position + 1..]),
            _ => ("", input),
        };

        if let Some(c) = base.chars().find(|c| !c.is_ascii()) {
            return Err(Error::NonBasicCodePoint(c));
        }
        self.output.extend(base.chars());

        let mut length = u32::try_from(base.len()).map_err(|_| Error::Overflow)?;
        let mut code_point = INITIAL_N;
        let mut bias = INITIAL_BIAS;
        let mut i: u32 = 0;
        let mut iter = input.chars();
        while let Some(mut c) = iter.next() {
            let previous_i = i;
            let mut weight = 1;
            let mut k = BASE;

            // Decode a generalized variable-length integer into delta,
            // which gets added to i.
            loop {
                let digit = digit_to_value(c).ok_or(Error::InvalidDigit(c))?;
                if digit > (u32::MAX - i) / weight {
                    return Err(Error::Overflow);
                }
                i += digit * weight;
                let t = threshold(k, bias);
                if digit < t {
                    break;
                }
                if weight > u32::MAX / (BASE - t) {
                    return Err(Error::Overflow);
                }
                weight *= BASE - t;
                k += BASE;
                c = iter.next().ok_or(Error::TruncatedPayload)?;
            }

            length += 1;
            bias = adapt(i - previous_i, length, previous_i == 0);

            // i was supposed to wrap around from length to 0,
            // incrementing code_point each time.
            if i / length > u32::MAX - code_point {
                return Err(Error::Overflow);
            }
            code_point += i / length;
            i %= length;
            let decoded = char::from_u32(code_point).ok_or(Error::UnrepresentableCodePoint {
                code_point,
                encoding: "Unicode",
            })?;
            self.output.insert(i as usize, decoded);
            i += 1;
        }

        Ok(&self.output)
    }
}

/// Convert an Unicode `str` to Punycode.
///
/// Like `encode`, but reads the code points straight from a `str`.
#[inline]
pub fn encode_str(input: &str) -> Result<String, Error> {
    let mut buf = String::with_capacity(input.len());
    encode_code_points(&CodePoints::new(input.chars()), &mut buf)?;
    Ok(buf)
}

/// Convert Unicode to Punycode.
///
/// Overflow can only happen on inputs that would take more than
/// 63 encoded bytes, the DNS limit on domain name labels.
pub fn encode(input: &[char]) -> Result<String, Error> {
    let mut buf = String::with_capacity(input.len());
    encode_code_points(&CodePoints::new(input.iter().copied()), &mut buf)?;
    Ok(buf)
}

pub(crate) fn encode_code_points(
    code_points: &CodePoints,
    output: &mut String,
) -> Result<(), Error> {
    u32::try_from(code_points.all().len()).map_err(|_| Error::Overflow)?;

    // Handle "basic" (ASCII) code points. They are encoded as-is.
    output.extend(code_points.basic());
    let basic_length = code_points.basic().len() as u32;
    if basic_length > 0 {
        output.push(DELIMITER);
    }

    let mut code_point = INITIAL_N;
    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut processed = basic_length;
    // All code points < code_point have been handled already,
    // non_basic yields the next larger one each time.
    for &min_code_point in code_points.non_basic() {
        let min_code_point = u32::from(min_code_point);
        // Increase delta to advance the decoder’s <code_point,i> state to <min_code_point,0>
        delta = (min_code_point - code_point)
            .checked_mul(processed + 1)
            .and_then(|d| d.checked_add(delta))
            .ok_or(Error::Overflow)?;
        code_point = min_code_point;
        for &c in code_points.all() {
            let c = u32::from(c);
            if c < code_point {
                delta = delta.checked_add(1).ok_or(Error::Overflow)?;
            }
            if c == code_point {
                encode_integer(delta, bias, output);
                bias = adapt(delta, processed + 1, processed == basic_length);
                delta = 0;
                processed += 1;
            }
        }
        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        code_point += 1;
    }
    Ok(())
}

/// Represent `q` as a generalized variable-length integer.
fn encode_integer(mut q: u32, bias: u32, output: &mut String) {
    let mut k = BASE;
    loop {
        let t = threshold(k, bias);
        if q < t {
            break;
        }
        let value = t + ((q - t) % (BASE - t));
        output.push(value_to_digit(value));
        q = (q - t) / (BASE - t);
        k += BASE;
    }
    output.push(value_to_digit(q));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_tables_are_inverse() {
        for value in 0..BASE {
            let digit = value_to_digit(value);
            assert_eq!(digit_to_value(digit), Some(value));
            assert_eq!(digit_to_value(digit.to_ascii_uppercase()), Some(value));
        }
        assert_eq!(value_to_digit(0), 'a');
        assert_eq!(value_to_digit(25), 'z');
        assert_eq!(value_to_digit(26), '0');
        assert_eq!(value_to_digit(35), '9');
        assert_eq!(digit_to_value('-'), None);
        assert_eq!(digit_to_value('é'), None);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(threshold(36, 72), T_MIN);
        assert_eq!(threshold(73, 72), T_MIN);
        assert_eq!(threshold(80, 72), 8);
        assert_eq!(threshold(97, 72), 25);
        assert_eq!(threshold(98, 72), T_MAX);
        assert_eq!(threshold(108, 0), T_MAX);
    }

    #[test]
    fn adapt_known_values() {
        assert_eq!(adapt(0, 1, true), 0);
        // 700 / DAMP = 1, + 1 / 1 = 2, 36 * 2 / 40 = 1
        assert_eq!(adapt(700, 1, true), 1);
        // 1000 / 2 = 500, + 250 = 750, 750 / 35 = 21, 36 + 36 * 21 / 59 = 48
        assert_eq!(adapt(1000, 2, false), 48);
        assert_ne!(adapt(1000, 1, true), adapt(1000, 1, false));
    }

    #[test]
    fn integer_encoding_matches_decoder() {
        let mut buf = String::new();
        encode_integer(0xD800 - INITIAL_N, INITIAL_BIAS, &mut buf);
        assert_eq!(buf, "ib9b");

        buf.clear();
        encode_integer(0, INITIAL_BIAS, &mut buf);
        assert_eq!(buf, "a");
    }

    #[test]
    fn decoder_reuses_its_buffer() {
        let mut decoder = Decoder::default();
        assert_eq!(decoder.decode("fsqu00a").unwrap(), &['例', '子']);
        assert_eq!(decoder.decode("mller-kva").unwrap().len(), 6);
    }
}
