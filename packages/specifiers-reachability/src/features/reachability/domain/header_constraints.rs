// Domain: PacketHeaderConstraints - Per-field packet restrictions from a question
//
// Every field is optional; an absent field places no restriction on the
// flows considered. Addresses stay raw expressions here and are resolved by
// the IP-space strategies, not folded into the header space.

use serde::{Deserialize, Serialize};

use crate::shared::models::{Application, IntegerSpace, IpProtocol, TcpFlagsMatch};

/// Header constraints as supplied by the question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PacketHeaderConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_protocols: Option<Vec<IpProtocol>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_ports: Option<IntegerSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_ports: Option<IntegerSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dscps: Option<IntegerSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecns: Option<IntegerSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packet_lengths: Option<IntegerSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_offsets: Option<IntegerSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_types: Option<IntegerSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_codes: Option<IntegerSpace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_flags: Option<Vec<TcpFlagsMatch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<Application>>,
    /// Source address expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_ips: Option<String>,
    /// Destination address expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dst_ips: Option<String>,
}

impl PacketHeaderConstraints {
    /// No restriction on any field
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    pub fn src_ips(&self) -> Option<&str> {
        self.src_ips.as_deref()
    }

    pub fn dst_ips(&self) -> Option<&str> {
        self.dst_ips.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_by_default() {
        assert!(PacketHeaderConstraints::default().is_unconstrained());
        assert!(PacketHeaderConstraints::unconstrained().src_ips().is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "ipProtocols": ["tcp", "17"],
            "dstPorts": "22, 8080-8090",
            "srcIps": "10.0.0.0/8",
            "tcpFlags": [{"syn": true, "ack": false}],
            "applications": ["ssh"]
        }"#;
        let headers: PacketHeaderConstraints = serde_json::from_str(json).unwrap();

        assert_eq!(
            headers.ip_protocols,
            Some(vec![IpProtocol::Tcp, IpProtocol::Udp])
        );
        let dst_ports = headers.dst_ports.as_ref().unwrap();
        assert!(dst_ports.contains(22));
        assert!(dst_ports.contains(8085));
        assert!(!dst_ports.contains(23));
        assert_eq!(headers.src_ips(), Some("10.0.0.0/8"));
        assert_eq!(headers.dst_ips(), None);
        assert_eq!(headers.tcp_flags, Some(vec![TcpFlagsMatch::syn_only()]));
        assert_eq!(headers.applications, Some(vec![Application::Ssh]));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let headers: PacketHeaderConstraints =
            serde_json::from_str(r#"{"dstIps": null, "srcPorts": null}"#).unwrap();
        assert!(headers.is_unconstrained());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = serde_json::from_str::<PacketHeaderConstraints>(r#"{"vlan": "10"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_absent() {
        let headers = PacketHeaderConstraints {
            dst_ips: Some("1.1.1.1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&headers).unwrap();
        assert_eq!(json, r#"{"dstIps":"1.1.1.1"}"#);
    }
}
