// Copyright 2013 The rust-url developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Splitting a label into basic (ASCII) and non-basic code points.

/// The code points of one label, partitioned the way the encoder consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePoints {
    all: Vec<char>,
    basic: Vec<char>,
    non_basic: Vec<char>,
}

impl CodePoints {
    /// Partition `input`, keeping its order except for `non_basic`.
    pub fn new<I>(input: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut code_points = CodePoints::default();
        for c in input {
            if c.is_ascii() {
                code_points.basic.push(c);
            } else {
                code_points.non_basic.push(c);
            }
            code_points.all.push(c);
        }
        code_points.non_basic.sort_unstable();
        code_points.non_basic.dedup();
        code_points
    }

    /// Every code point, in input order.
    #[inline]
    pub fn all(&self) -> &[char] {
        &self.all
    }

    /// The basic code points, in input order.
    #[inline]
    pub fn basic(&self) -> &[char] {
        &self.basic
    }

    /// The distinct non-basic code points, in ascending order.
    #[inline]
    pub fn non_basic(&self) -> &[char] {
        &self.non_basic
    }

    /// Whether the label is pure ASCII.
    #[inline]
    pub fn is_basic_only(&self) -> bool {
        self.non_basic.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CodePoints;

    #[test]
    fn partitions_mixed_label() {
        let code_points = CodePoints::new("bücher-übel".chars());
        assert_eq!(code_points.all().len(), 11);
        assert_eq!(
            code_points.basic(),
            &['b', 'c', 'h', 'e', 'r', '-', 'b', 'e', 'l']
        );
        assert_eq!(code_points.non_basic(), &['ü']);
        assert!(!code_points.is_basic_only());
    }

    #[test]
    fn non_basic_is_sorted_and_distinct() {
        let code_points = CodePoints::new("测试例子例".chars());
        assert_eq!(code_points.non_basic(), &['例', '子', '测', '试']);
        assert!(code_points.basic().is_empty());
    }

    #[test]
    fn empty_and_ascii_labels() {
        let empty = CodePoints::new("".chars());
        assert!(empty.all().is_empty());
        assert!(empty.is_basic_only());

        let ascii = CodePoints::new("guangdong".chars());
        assert_eq!(ascii.all(), ascii.basic());
        assert!(ascii.is_basic_only());
    }
}
