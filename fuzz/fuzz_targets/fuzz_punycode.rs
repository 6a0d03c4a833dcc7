#![no_main]

use idn_punycode::punycode;
use idn_punycode::Config;
use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    let Ok(utf8) = str::from_utf8(data) else {
        return;
    };

    // Arbitrary input must never panic, only fail.
    let _ = punycode::decode_to_string(utf8);
    let _ = idn_punycode::decode_domain(utf8);

    // Payload roundtrip invariant
    if let Ok(encoded) = punycode::encode_str(utf8) {
        assert!(encoded.is_ascii(), "non-ASCII payload {:?}", encoded);
        let decoded = punycode::decode_to_string(&encoded);
        assert_eq!(
            decoded.as_deref(),
            Ok(utf8),
            "Punycode roundtrip mismatch: input={:?}, encoded={:?}",
            utf8,
            encoded
        );
    }

    // Domain roundtrip invariant. Labels that already carry the ACE prefix
    // may hold non-canonical payloads, so they are skipped.
    let has_ace_label = utf8
        .split('.')
        .any(|label| label.to_ascii_lowercase().starts_with(idn_punycode::PREFIX));
    if has_ace_label {
        return;
    }
    let config = Config::default();
    if let Ok(ascii) = config.to_ascii(utf8) {
        assert!(ascii.is_ascii(), "non-ASCII domain {:?}", ascii);
        if let Ok(unicode) = config.to_unicode(&ascii) {
            if let Ok(back_to_ascii) = config.to_ascii(&unicode) {
                assert_eq!(
                    ascii, back_to_ascii,
                    "Domain roundtrip mismatch: input={:?}, ascii={:?}, unicode={:?}",
                    utf8, ascii, unicode
                );
            }
        }
    }
});
