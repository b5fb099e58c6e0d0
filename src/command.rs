//! Command classification.
//!
//! A command line payload is matched against, in order: `exit`, `list`, the simple page
//! names of the catalog, and finally the `blog` prefix (only when the catalog has a
//! blog). Every comparison is an exact, case-sensitive byte comparison.

use crate::pages::{Catalog, Page};
use std::ffi::c_long;

const EXIT: &[u8] = b"exit";
const LIST: &[u8] = b"list";
const BLOG_PREFIX: &[u8] = b"blog";

/// Result of classifying one command line. Lives for a single loop iteration.
#[derive(Debug, Clone, Copy)]
pub enum Command<'c> {
    Exit,
    List,
    /// A simple page, or the blog overview when `blog` is typed without an id.
    ShowPage(&'c Page),
    ShowBlogPost(u32),
    /// The text after `blog` parsed outside the range of a C `long`.
    InvalidBlogId,
    Unrecognized,
}

impl<'c> Command<'c> {
    pub fn parse(payload: &[u8], catalog: &'c Catalog) -> Self {
        if payload == EXIT {
            return Command::Exit;
        }
        if payload == LIST {
            return Command::List;
        }
        if let Some(page) = catalog.find(payload) {
            return Command::ShowPage(page);
        }

        match (catalog.blog(), payload.strip_prefix(BLOG_PREFIX)) {
            (Some(blog), Some([])) => Command::ShowPage(&blog.overview),
            (Some(_), Some(remainder)) => match parse_post_id(remainder) {
                Some(post_id) => Command::ShowBlogPost(post_id),
                None => Command::InvalidBlogId,
            },
            _ => Command::Unrecognized,
        }
    }
}

/// Parse the text after `blog` into a post id.
///
/// Follows `strtol(text, NULL, 10)`: leading whitespace and a sign are accepted, parsing
/// stops at the first non-digit, and text without digits yields 0. So `blogxyz` is post
/// 0 and `blog7up` is post 7. Returns `None` when the value lands on `LONG_MIN` or
/// `LONG_MAX`, which is how `strtol` reports overflow. Other values are truncated to
/// `u32`, so negative ids wrap around.
pub fn parse_post_id(text: &[u8]) -> Option<u32> {
    let value = parse_c_long(text);
    if value == c_long::MIN || value == c_long::MAX {
        return None;
    }
    Some(value as u32)
}

/// Lenient base-10 parse that saturates at the bounds of `c_long`.
fn parse_c_long(text: &[u8]) -> c_long {
    let mut rest = text;
    while let [first, tail @ ..] = rest {
        if !is_c_space(*first) {
            break;
        }
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let magnitude = rest
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u128, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(u128::from(digit - b'0'))
        });

    if negative {
        let limit = c_long::MIN.unsigned_abs() as u128;
        if magnitude >= limit {
            c_long::MIN
        } else {
            -(magnitude as i128) as c_long
        }
    } else if magnitude >= c_long::MAX as u128 {
        c_long::MAX
    } else {
        magnitude as c_long
    }
}

// C `isspace` in the "C" locale.
fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
