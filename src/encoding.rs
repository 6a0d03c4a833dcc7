// Copyright 2013-2018 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The text encoding decoded labels are checked against,
//! implemented with [encoding_rs](https://github.com/hsivonen/encoding_rs).

use encoding_rs::{EncoderResult, Encoding};
use std::fmt::{self, Debug, Formatter};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    /// `None` means UTF-8.
    encoding: Option<&'static Encoding>,
}

impl TextEncoding {
    /// UTF-8, which can represent every scalar value.
    #[inline]
    pub fn utf8() -> Self {
        TextEncoding { encoding: None }
    }

    /// Wrap an `encoding_rs` encoding.
    pub fn from_encoding(encoding: &'static Encoding) -> Self {
        TextEncoding {
            encoding: if encoding == encoding_rs::UTF_8 {
                None
            } else {
                Some(encoding)
            },
        }
    }

    /// Look up an encoding by one of its
    /// [WHATWG labels](https://encoding.spec.whatwg.org/#names-and-labels),
    /// such as `b"latin1"` or `b"shift_jis"`.
    pub fn for_label(label: &[u8]) -> Option<Self> {
        Encoding::for_label(label).map(Self::from_encoding)
    }

    /// Whether this is UTF-8.
    #[inline]
    pub fn is_utf8(&self) -> bool {
        self.encoding.is_none()
    }

    pub fn name(&self) -> &'static str {
        match self.encoding {
            Some(encoding) => encoding.name(),
            None => encoding_rs::UTF_8.name(),
        }
    }

    /// Return the first character of `text` this encoding cannot represent.
    pub(crate) fn find_unmappable(&self, text: &str) -> Option<char> {
        let encoding = self.encoding?;
        if encoding.output_encoding() == encoding_rs::UTF_8 {
            return None;
        }
        let mut encoder = encoding.new_encoder();
        let mut buf = [0u8; 64];
        let mut remaining = text;
        loop {
            let (result, read, _) =
                encoder.encode_from_utf8_without_replacement(remaining, &mut buf, true);
            remaining = &remaining[read..];
            match result {
                EncoderResult::InputEmpty => return None,
                EncoderResult::OutputFull => continue,
                EncoderResult::Unmappable(c) => return Some(c),
            }
        }
    }
}

impl Default for TextEncoding {
    #[inline]
    fn default() -> Self {
        Self::utf8()
    }
}

impl Debug for TextEncoding {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "TextEncoding {{ encoding: {} }}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::TextEncoding;

    #[test]
    fn lookup_by_label() {
        assert!(TextEncoding::for_label(b"utf-8").unwrap().is_utf8());
        assert!(TextEncoding::for_label(b"unicode-1-1-utf-8").unwrap().is_utf8());
        assert_eq!(
            TextEncoding::for_label(b"latin1").unwrap().name(),
            "windows-1252"
        );
        assert!(TextEncoding::for_label(b"no-such-encoding").is_none());
        assert_eq!(TextEncoding::default().name(), "UTF-8");
    }

    #[test]
    fn unicode_encodings_map_everything() {
        let text = "例子𐌀ü";
        assert_eq!(TextEncoding::utf8().find_unmappable(text), None);
        let utf16 = TextEncoding::for_label(b"utf-16le").unwrap();
        assert_eq!(utf16.find_unmappable(text), None);
    }

    #[test]
    fn legacy_encodings_report_first_unmappable() {
        let latin1 = TextEncoding::for_label(b"latin1").unwrap();
        assert_eq!(latin1.find_unmappable("müller"), None);
        assert_eq!(latin1.find_unmappable("mü例子"), Some('例'));

        let shift_jis = TextEncoding::for_label(b"shift_jis").unwrap();
        assert_eq!(shift_jis.find_unmappable("例子"), None);
        assert_eq!(shift_jis.find_unmappable("例子실례"), Some('실'));
    }
}
