// IntegerSpace - sets of integers for port/length/type header fields
//
// Parsed from "80, 8080-8090" style strings. Ranges are kept sorted and
// merged so two spaces with the same members compare equal.

use serde::{Deserialize, Serialize};

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubRange {
    pub start: u32,
    pub end: u32,
}

impl SubRange {
    /// Create a range (validates start <= end)
    pub fn new(start: u32, end: u32) -> Result<Self, String> {
        if start > end {
            return Err(format!("range start {} is greater than end {}", start, end));
        }
        Ok(Self { start, end })
    }

    pub fn singleton(value: u32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.start <= value && value <= self.end
    }

    fn parse(token: &str) -> Result<Self, String> {
        let parse_bound = |s: &str| {
            s.trim()
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a non-negative integer", s.trim()))
        };
        match token.split_once('-') {
            Some((lo, hi)) => SubRange::new(parse_bound(lo)?, parse_bound(hi)?),
            None => Ok(SubRange::singleton(parse_bound(token)?)),
        }
    }
}

impl std::fmt::Display for SubRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Union of inclusive integer ranges
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IntegerSpace {
    ranges: Vec<SubRange>,
}

impl IntegerSpace {
    /// Build from arbitrary ranges (sorted and merged)
    pub fn from_ranges(ranges: impl IntoIterator<Item = SubRange>) -> Self {
        let mut ranges: Vec<SubRange> = ranges.into_iter().collect();
        ranges.sort();

        let mut merged: Vec<SubRange> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if range.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
        }
        Self { ranges: merged }
    }

    pub fn singleton(value: u32) -> Self {
        Self {
            ranges: vec![SubRange::singleton(value)],
        }
    }

    /// Parse "80, 443, 8080-8090". Blank input is the empty space.
    pub fn parse(input: &str) -> Result<Self, String> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }

        let tokens: Vec<&str> = input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err(format!("'{}' contains no integer ranges", input));
        }

        let ranges = tokens
            .into_iter()
            .map(SubRange::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_ranges(ranges))
    }

    pub fn ranges(&self) -> &[SubRange] {
        &self.ranges
    }

    pub fn contains(&self, value: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(value))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl std::fmt::Display for IntegerSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl TryFrom<String> for IntegerSpace {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        IntegerSpace::parse(&value)
    }
}

impl From<IntegerSpace> for String {
    fn from(space: IntegerSpace) -> Self {
        space.to_string()
    }
}
