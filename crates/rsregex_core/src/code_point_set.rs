//! Sets of Unicode code points, stored as sorted inclusive ranges.

use std::fmt;

/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// An inclusive range of code points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePointRange {
    pub lo: u32,
    pub hi: u32,
}

impl CodePointRange {
    /// A range holding a single code point.
    #[inline]
    pub fn single(cp: u32) -> Self {
        Self { lo: cp, hi: cp }
    }

    #[inline]
    pub fn new(lo: u32, hi: u32) -> Self {
        debug_assert!(lo <= hi && hi <= MAX_CODE_POINT);
        Self { lo, hi }
    }

    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        self.lo <= cp && cp <= self.hi
    }

    /// Number of code points in the range.
    #[inline]
    pub fn size(&self) -> u32 {
        self.hi - self.lo + 1
    }
}

/// A set of code points.
///
/// The range list is kept sorted, non-overlapping and non-adjacent after
/// every mutation, so structurally equal sets are equal as sets.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePointSet {
    ranges: Vec<CodePointRange>,
}

impl CodePointSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    pub fn from_code_point(cp: u32) -> Self {
        Self {
            ranges: vec![CodePointRange::single(cp)],
        }
    }

    pub fn from_range(lo: u32, hi: u32) -> Self {
        Self {
            ranges: vec![CodePointRange::new(lo, hi)],
        }
    }

    /// Build a set from arbitrary, possibly overlapping ranges.
    pub fn from_ranges(ranges: impl IntoIterator<Item = CodePointRange>) -> Self {
        let mut set = Self::new();
        for range in ranges {
            set.add_range(range);
        }
        set
    }

    /// The set of every code point, surrogates included.
    pub fn full() -> Self {
        Self::from_range(0, MAX_CODE_POINT)
    }

    /// Insert a range, merging it with any range it overlaps or touches.
    pub fn add_range(&mut self, range: CodePointRange) {
        let start = self
            .ranges
            .partition_point(|r| r.hi.saturating_add(1) < range.lo);
        let end = self
            .ranges
            .partition_point(|r| r.lo <= range.hi.saturating_add(1));
        let mut merged = range;
        if start < end {
            merged.lo = merged.lo.min(self.ranges[start].lo);
            merged.hi = merged.hi.max(self.ranges[end - 1].hi);
        }
        self.ranges.splice(start..end, std::iter::once(merged));
    }

    pub fn add_code_point(&mut self, cp: u32) {
        self.add_range(CodePointRange::single(cp));
    }

    /// Union `other` into this set.
    pub fn add_set(&mut self, other: &CodePointSet) {
        if self.ranges.is_empty() {
            self.ranges.clone_from(&other.ranges);
            return;
        }
        for range in &other.ranges {
            self.add_range(*range);
        }
    }

    /// The complement of this set over `0..=MAX_CODE_POINT`.
    pub fn create_inverse(&self) -> CodePointSet {
        let mut ranges = Vec::with_capacity(self.ranges.len() + 1);
        let mut next = 0u32;
        for range in &self.ranges {
            if range.lo > next {
                ranges.push(CodePointRange::new(next, range.lo - 1));
            }
            next = range.hi + 1;
        }
        if next <= MAX_CODE_POINT {
            ranges.push(CodePointRange::new(next, MAX_CODE_POINT));
        }
        CodePointSet { ranges }
    }

    pub fn contains(&self, cp: u32) -> bool {
        let idx = self.ranges.partition_point(|r| r.hi < cp);
        self.ranges.get(idx).is_some_and(|r| r.contains(cp))
    }

    #[inline]
    pub fn ranges(&self) -> &[CodePointRange] {
        &self.ranges
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ranges.len() == 1 && self.ranges[0] == CodePointRange::new(0, MAX_CODE_POINT)
    }

    /// Number of code points in the set.
    pub fn size(&self) -> u32 {
        self.ranges.iter().map(CodePointRange::size).sum()
    }
}

impl FromIterator<CodePointRange> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = CodePointRange>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

impl fmt::Debug for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodePointSet{}", self)
    }
}

impl fmt::Display for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if range.lo == range.hi {
                write!(f, "U+{:04X}", range.lo)?;
            } else {
                write!(f, "U+{:04X}-U+{:04X}", range.lo, range.hi)?;
            }
        }
        write!(f, "]")
    }
}
