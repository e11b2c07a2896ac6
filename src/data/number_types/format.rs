//! # Digit grouping
//!
//! Integers inside fractions are written with thousands separators, `#,##0` style. Which
//! separator is used depends on the conventions of the reader, so it is configurable.
use std::fmt::Display;

use itertools::Itertools;

/// How the digits of an integer are grouped when printed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct NumberFormat {
    /// Character placed between groups, `None` to disable grouping.
    pub group_separator: Option<char>,
    /// Number of digits per group, counted from the right.
    pub group_size: usize,
}

impl NumberFormat {
    /// `1,234,567`
    pub const INVARIANT: Self = Self { group_separator: Some(','), group_size: 3 };
    /// `1234567`
    pub const NONE: Self = Self { group_separator: None, group_size: 3 };
    /// `1.234.567`
    pub const GERMAN: Self = Self { group_separator: Some('.'), group_size: 3 };
    /// `1'234'567`
    pub const SWISS: Self = Self { group_separator: Some('\''), group_size: 3 };

    /// Write an integer with its digits grouped.
    pub fn group<T: Display>(&self, value: T) -> String {
        let text = value.to_string();
        let separator = match self.group_separator {
            Some(separator) if self.group_size > 0 => separator,
            _ => return text,
        };

        let (sign, digits) = match text.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", text.as_str()),
        };
        let grouped = digits
            .as_bytes()
            .rchunks(self.group_size)
            .rev()
            .map(|chunk| chunk.iter().map(|&digit| digit as char).collect::<String>())
            .join(&separator.to_string());

        format!("{}{}", sign, grouped)
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}
