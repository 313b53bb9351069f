//! Percent-decoding of standardized URIs.

pub(crate) mod table;

use std::{borrow::Cow, str};
use table::PRESERVED;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// Reads the percent-encoded octet starting at index `i`, if any.
fn octet_at(bytes: &[u8], i: usize) -> Option<u8> {
    match bytes.get(i..i + 3)? {
        &[b'%', hi, lo] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
            Some(decode_octet(hi, lo))
        }
        _ => None,
    }
}

/// Returns the length of the UTF-8 sequence introduced by a leading byte,
/// or `None` if the byte cannot start a multi-byte sequence.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0xc2..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf4 => Some(4),
        _ => None,
    }
}

/// Decodes the escaped UTF-8 sequence starting at index `i`.
///
/// Returns the decoded character and the number of input bytes it spans.
fn decode_utf8_at(bytes: &[u8], i: usize, lead: u8) -> Option<(char, usize)> {
    let width = utf8_width(lead)?;
    let mut seq = [lead, 0, 0, 0];
    for (k, x) in seq.iter_mut().enumerate().take(width).skip(1) {
        *x = octet_at(bytes, i + k * 3)?;
    }
    let ch = str::from_utf8(&seq[..width]).ok()?.chars().next()?;
    Some((ch, width * 3))
}

/// Decodes the percent-encoded octets in a string.
///
/// Decoding follows these rules:
///
/// - An escaped ASCII character is decoded, unless it is one of
///   `; / ? : @ & = + $ , #` or `%`. Escapes of those characters are
///   kept exactly as written, including the case of their hex digits.
/// - A run of escapes forming a valid UTF-8 sequence is decoded into
///   the character it encodes.
/// - Anything else, including incomplete escapes, non-hexadecimal digits
///   and invalid UTF-8, is kept literally.
///
/// Decoding never fails. The input is borrowed when it contains no `'%'`.
///
/// # Examples
///
/// ```
/// use uri_equiv::pct_enc::decode;
///
/// assert_eq!(decode("/%7Esmith/home.html"), "/~smith/home.html");
/// assert_eq!(decode("caf%C3%A9"), "café");
/// assert_eq!(decode("a%2fb%3F"), "a%2fb%3F");
/// assert_eq!(decode("100%"), "100%");
/// ```
#[must_use]
pub fn decode(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let Some(first) = bytes.iter().position(|&x| x == b'%') else {
        return Cow::Borrowed(s);
    };

    let mut buf = String::with_capacity(s.len());
    buf.push_str(&s[..first]);

    let mut i = first;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            let end = bytes[i..]
                .iter()
                .position(|&x| x == b'%')
                .map_or(bytes.len(), |n| i + n);
            buf.push_str(&s[i..end]);
            i = end;
            continue;
        }

        let Some(x) = octet_at(bytes, i) else {
            buf.push('%');
            i += 1;
            continue;
        };

        if x.is_ascii() {
            if PRESERVED.contains(x) {
                buf.push_str(&s[i..i + 3]);
            } else {
                buf.push(x as char);
            }
            i += 3;
        } else if let Some((ch, len)) = decode_utf8_at(bytes, i, x) {
            buf.push(ch);
            i += len;
        } else {
            buf.push_str(&s[i..i + 3]);
            i += 3;
        }
    }
    Cow::Owned(buf)
}
