/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use unicode_general_category::{GeneralCategory, get_general_category};

// 100ns intervals between 1601-01-01 and 1970-01-01
const FILETIME_UNIX_EPOCH_OFFSET: i128 = 116_444_736_000_000_000;
const FILETIME_TICKS_PER_SECOND: i128 = 10_000_000;

fn all_chars<F>(s: &str, f: F) -> bool
where
    F: Fn(char) -> bool,
{
    for c in s.chars() {
        // a NUL char terminates the string
        if c == '\0' {
            break;
        }
        if c == char::REPLACEMENT_CHARACTER || !f(c) {
            return false;
        }
    }
    true
}

fn is_decimal_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Returns true if `s` consists of decimal digits (category Nd). An empty
/// string is accepted.
pub fn is_digit(s: &str) -> bool {
    all_chars(s, is_decimal_digit)
}

/// Returns true if `s` consists of letters and decimal digits. An empty
/// string is accepted.
pub fn is_alnum(s: &str) -> bool {
    all_chars(s, |c| is_letter(c) || is_decimal_digit(c))
}

/// Convert a windows system time, in 100ns ticks since 1601, to unix seconds.
pub fn tsys100ns_to_epoch(ticks: u64) -> i64 {
    let secs = (i128::from(ticks) - FILETIME_UNIX_EPOCH_OFFSET) / FILETIME_TICKS_PER_SECOND;
    secs as i64
}
