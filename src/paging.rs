//! Page arithmetic over the fixed number range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

/// Numbers shown on a single page.
pub const PAGE_SIZE: u32 = 8;

/// Highest page index.
pub const MAX_PAGE: u32 = 10;

/// Largest selectable number.
pub const MAX_NUMBER: u32 = MAX_PAGE * PAGE_SIZE;

/// A 1-based page index, always within `[1, MAX_PAGE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageIndex(u32);

impl PageIndex {
    pub const FIRST: PageIndex = PageIndex(1);
    pub const LAST: PageIndex = PageIndex(MAX_PAGE);

    /// Returns the index if it lies within `[1, MAX_PAGE]`.
    pub fn new(value: u32) -> Option<Self> {
        (1..=MAX_PAGE).contains(&value).then_some(Self(value))
    }

    /// Clamps any integer into `[1, MAX_PAGE]`.
    pub fn clamped(requested: i64) -> Self {
        Self(requested.clamp(1, MAX_PAGE as i64) as u32)
    }

    /// Parses a decimal page index, clamping out-of-range values.
    ///
    /// Returns `None` when the input is not an integer at all.
    pub fn parse_clamped(raw: &str) -> Option<Self> {
        parse_saturating(raw).map(Self::clamped)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// Numbers belonging to this page.
    pub fn contents(self) -> Vec<u32> {
        page_range(self.0, PAGE_SIZE)
    }

    /// Zero-padded two-digit label used by the pager.
    pub fn padded(self) -> String {
        format!("{:02}", self.0)
    }
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageIndex {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("page index {} is outside 1..={}", value, MAX_PAGE))
    }
}

impl From<PageIndex> for u32 {
    fn from(page: PageIndex) -> Self {
        page.0
    }
}

/// Parses a decimal integer, saturating values that overflow `i64`.
///
/// Returns `None` when the trimmed input is not an integer.
pub fn parse_saturating(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Returns the ascending numbers `[(page_index-1)*page_size + 1, page_index*page_size]`.
///
/// Page 0 has no numbers.
pub fn page_range(page_index: u32, page_size: u32) -> Vec<u32> {
    if page_index == 0 {
        return Vec::new();
    }
    let start = (page_index - 1) * page_size + 1;
    let end = page_index * page_size;
    (start..=end).collect()
}
