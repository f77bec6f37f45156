//! Natural string ordering, where runs of ASCII digits are compared by their numeric value rather
//! than byte by byte.
//!
//! ```
//! # use std::cmp::Ordering;
//! # use string_queue::cmp::natural::compare;
//! assert_eq!(compare("img2", "img10"), Ordering::Less);
//! assert_eq!(compare("img2", "img1"), Ordering::Greater);
//! ```
//!
//! Outside of digit runs, bytes are compared as they are by [`str`]'s own ordering. Leading zeros
//! don't contribute to a number's value, so `"a01"` and `"a1"` compare as
//! [`Equal`](Ordering::Equal), and numbers of any length are compared without overflowing.

use std::cmp::Ordering;

/// Compares `a` and `b` in natural order.
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_bytes(a.as_bytes(), b.as_bytes())
}

/// Compares two byte strings in natural order. See [`compare`].
pub fn compare_bytes(mut a: &[u8], mut b: &[u8]) -> Ordering {
    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let (num_a, rest_a) = split_digits(a);
                let (num_b, rest_b) = split_digits(b);
                match compare_numbers(num_a, num_b) {
                    Ordering::Equal => {},
                    order => return order,
                }
                a = rest_a;
                b = rest_b;
            },
            (Some(x), Some(y)) => {
                match x.cmp(y) {
                    Ordering::Equal => {},
                    order => return order,
                }
                a = &a[1..];
                b = &b[1..];
            },
        }
    }
}

/// Splits off the leading run of digits.
fn split_digits(bytes: &[u8]) -> (&[u8], &[u8]) {
    let end = bytes.iter().position(|b| !b.is_ascii_digit()).unwrap_or(bytes.len());
    bytes.split_at(end)
}

/// Compares two runs of digits by value: first by significant length, then digit by digit.
fn compare_numbers(a: &[u8], b: &[u8]) -> Ordering {
    let a = trim_zeros(a);
    let b = trim_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn trim_zeros(digits: &[u8]) -> &[u8] {
    let start = digits.iter().position(|&d| d != b'0').unwrap_or(digits.len());
    &digits[start..]
}
