// HeaderSpace - resolved packet header bounds consumed by the engine
//
// Every field is optional: None leaves the field unconstrained, Some(empty)
// constrains it to nothing. Source/destination addresses are not part of the
// header space; they travel as IpSpaceSpecifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::integer_space::IntegerSpace;

// ═══════════════════════════════════════════════════════════════════════════
// IpProtocol
// ═══════════════════════════════════════════════════════════════════════════

/// IP protocol, named for the common ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IpProtocol {
    Icmp,
    Tcp,
    Udp,
    Other(u8),
}

impl IpProtocol {
    pub fn from_number(number: u8) -> Self {
        match number {
            1 => IpProtocol::Icmp,
            6 => IpProtocol::Tcp,
            17 => IpProtocol::Udp,
            n => IpProtocol::Other(n),
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            IpProtocol::Icmp => 1,
            IpProtocol::Tcp => 6,
            IpProtocol::Udp => 17,
            IpProtocol::Other(n) => *n,
        }
    }

    /// Parse "tcp", "UDP" or a protocol number
    pub fn from_str(s: &str) -> Result<Self, String> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "icmp" => Ok(IpProtocol::Icmp),
            "tcp" => Ok(IpProtocol::Tcp),
            "udp" => Ok(IpProtocol::Udp),
            other => other
                .parse::<u8>()
                .map(IpProtocol::from_number)
                .map_err(|_| format!("Unknown IP protocol '{}'", s)),
        }
    }
}

impl PartialOrd for IpProtocol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IpProtocol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.number().cmp(&other.number())
    }
}

impl std::fmt::Display for IpProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpProtocol::Icmp => write!(f, "ICMP"),
            IpProtocol::Tcp => write!(f, "TCP"),
            IpProtocol::Udp => write!(f, "UDP"),
            IpProtocol::Other(n) => write!(f, "{}", n),
        }
    }
}

impl TryFrom<String> for IpProtocol {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        IpProtocol::from_str(&value)
    }
}

impl From<IpProtocol> for String {
    fn from(protocol: IpProtocol) -> Self {
        protocol.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TCP flags
// ═══════════════════════════════════════════════════════════════════════════

/// TCP flag match condition. `None` means "don't care" for that bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TcpFlagsMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ece: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rst: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urg: Option<bool>,
}

impl TcpFlagsMatch {
    /// SYN set, ACK clear: a connection-opening packet
    pub fn syn_only() -> Self {
        Self {
            syn: Some(true),
            ack: Some(false),
            ..Default::default()
        }
    }

    /// Matches every packet
    pub fn is_wildcard(&self) -> bool {
        *self == Self::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Applications
// ═══════════════════════════════════════════════════════════════════════════

/// Well-known application shorthands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    Dns,
    Http,
    Https,
    Mysql,
    Ping,
    Snmp,
    Ssh,
    Telnet,
}

/// Protocol plus ports (or ICMP type) an application stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDefinition {
    pub ip_protocol: IpProtocol,
    pub dst_ports: Option<IntegerSpace>,
    pub icmp_type: Option<u8>,
}

impl Application {
    pub fn definition(&self) -> ApplicationDefinition {
        let port = |protocol: IpProtocol, port: u32| ApplicationDefinition {
            ip_protocol: protocol,
            dst_ports: Some(IntegerSpace::singleton(port)),
            icmp_type: None,
        };
        match self {
            Application::Dns => port(IpProtocol::Udp, 53),
            Application::Http => port(IpProtocol::Tcp, 80),
            Application::Https => port(IpProtocol::Tcp, 443),
            Application::Mysql => port(IpProtocol::Tcp, 3306),
            Application::Snmp => port(IpProtocol::Udp, 161),
            Application::Ssh => port(IpProtocol::Tcp, 22),
            Application::Telnet => port(IpProtocol::Tcp, 23),
            // echo request
            Application::Ping => ApplicationDefinition {
                ip_protocol: IpProtocol::Icmp,
                dst_ports: None,
                icmp_type: Some(8),
            },
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// HeaderSpace
// ═══════════════════════════════════════════════════════════════════════════

/// Packet header bounds for the reachability search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSpace {
    pub ip_protocols: Option<BTreeSet<IpProtocol>>,
    pub src_ports: Option<IntegerSpace>,
    pub dst_ports: Option<IntegerSpace>,
    pub dscps: Option<IntegerSpace>,
    pub ecns: Option<IntegerSpace>,
    pub packet_lengths: Option<IntegerSpace>,
    pub fragment_offsets: Option<IntegerSpace>,
    pub icmp_types: Option<IntegerSpace>,
    pub icmp_codes: Option<IntegerSpace>,
    pub tcp_flags: Option<Vec<TcpFlagsMatch>>,
    pub applications: Option<BTreeSet<Application>>,
}

impl HeaderSpace {
    /// No bound on any field
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}
