// Copyright 2013-2014 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! DNS length limits on the ASCII form of labels and domains
//! ([RFC 1035 section 2.3.4](https://tools.ietf.org/html/rfc1035#section-2.3.4)).

use crate::errors::Error;
use log::trace;

/// Maximum length of one label, in octets.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a domain including its `.` separators, in octets.
pub const MAX_DOMAIN_LENGTH: usize = 255;

pub(crate) fn check_label(label: &str) -> Result<(), Error> {
    let length = label.len();
    if length == 0 || length > MAX_LABEL_LENGTH {
        trace!("rejecting label {:?}: {} octets", label, length);
        return Err(Error::LabelLength {
            length,
            limit: MAX_LABEL_LENGTH,
        });
    }
    Ok(())
}

/// `length` is the octet count of the domain's ASCII form, separators included.
pub(crate) fn check_domain(length: usize) -> Result<(), Error> {
    if length == 0 || length > MAX_DOMAIN_LENGTH {
        trace!("rejecting domain of {} octets", length);
        return Err(Error::DomainLength {
            length,
            limit: MAX_DOMAIN_LENGTH,
        });
    }
    Ok(())
}
