// IpSpace - union of IPv4 prefixes and address ranges
//
// Parsed from "10.0.0.0/8, 1.2.3.4, 1.1.1.1-1.1.1.9". A bare address is a /32.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One member of an IpSpace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IpSpaceEntry {
    /// Prefix (network bits only, host bits cleared)
    Prefix { network: Ipv4Addr, length: u8 },
    /// Inclusive address range
    Range { start: Ipv4Addr, end: Ipv4Addr },
}

impl IpSpaceEntry {
    pub fn prefix(address: Ipv4Addr, length: u8) -> Result<Self, String> {
        if length > 32 {
            return Err(format!("prefix length {} exceeds 32", length));
        }
        let network = u32::from(address) & prefix_mask(length);
        Ok(IpSpaceEntry::Prefix {
            network: Ipv4Addr::from(network),
            length,
        })
    }

    pub fn range(start: Ipv4Addr, end: Ipv4Addr) -> Result<Self, String> {
        if u32::from(start) > u32::from(end) {
            return Err(format!("range start {} is greater than end {}", start, end));
        }
        Ok(IpSpaceEntry::Range { start, end })
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        let ip = u32::from(ip);
        match *self {
            IpSpaceEntry::Prefix { network, length } => ip & prefix_mask(length) == u32::from(network),
            IpSpaceEntry::Range { start, end } => u32::from(start) <= ip && ip <= u32::from(end),
        }
    }

    fn parse(token: &str) -> Result<Self, String> {
        let parse_ip = |s: &str| {
            s.trim()
                .parse::<Ipv4Addr>()
                .map_err(|_| format!("'{}' is not an IPv4 address", s.trim()))
        };

        if let Some((addr, len)) = token.split_once('/') {
            let length = len
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("'{}' is not a prefix length", len.trim()))?;
            IpSpaceEntry::prefix(parse_ip(addr)?, length)
        } else if let Some((start, end)) = token.split_once('-') {
            IpSpaceEntry::range(parse_ip(start)?, parse_ip(end)?)
        } else {
            IpSpaceEntry::prefix(parse_ip(token)?, 32)
        }
    }
}

impl std::fmt::Display for IpSpaceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpSpaceEntry::Prefix { network, length: 32 } => write!(f, "{}", network),
            IpSpaceEntry::Prefix { network, length } => write!(f, "{}/{}", network, length),
            IpSpaceEntry::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

fn prefix_mask(length: u8) -> u32 {
    match length {
        0 => 0,
        n => u32::MAX << (32 - u32::from(n)),
    }
}

/// Union of IPv4 entries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpSpace {
    entries: Vec<IpSpaceEntry>,
}

impl IpSpace {
    /// Every IPv4 address (0.0.0.0/0)
    pub fn universe() -> Self {
        Self {
            entries: vec![IpSpaceEntry::Prefix {
                network: Ipv4Addr::UNSPECIFIED,
                length: 0,
            }],
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = IpSpaceEntry>) -> Self {
        let mut unique: Vec<IpSpaceEntry> = Vec::new();
        for entry in entries {
            if !unique.contains(&entry) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// Parse a comma-separated address expression
    pub fn parse(input: &str) -> Result<Self, String> {
        let tokens: Vec<&str> = input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Err(format!("'{}' contains no addresses", input));
        }

        let entries = tokens
            .into_iter()
            .map(IpSpaceEntry::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_entries(entries))
    }

    pub fn entries(&self) -> &[IpSpaceEntry] {
        &self.entries
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.entries.iter().any(|e| e.contains(ip))
    }

    pub fn is_universe(&self) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, IpSpaceEntry::Prefix { length: 0, .. }))
    }
}

impl std::fmt::Display for IpSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.entries.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
