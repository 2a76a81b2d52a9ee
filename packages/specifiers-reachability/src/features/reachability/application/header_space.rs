//! Header constraint resolution
//!
//! Field-by-field copy into the engine's header space. Absent fields stay
//! unbounded, present ones become exact bounds. Nothing is cross-checked;
//! contradictory constraints simply match no flows.

use crate::features::reachability::domain::PacketHeaderConstraints;
use crate::shared::models::HeaderSpace;

pub fn resolve_header_space(headers: &PacketHeaderConstraints) -> HeaderSpace {
    HeaderSpace {
        ip_protocols: headers
            .ip_protocols
            .as_ref()
            .map(|protocols| protocols.iter().copied().collect()),
        src_ports: headers.src_ports.clone(),
        dst_ports: headers.dst_ports.clone(),
        dscps: headers.dscps.clone(),
        ecns: headers.ecns.clone(),
        packet_lengths: headers.packet_lengths.clone(),
        fragment_offsets: headers.fragment_offsets.clone(),
        icmp_types: headers.icmp_types.clone(),
        icmp_codes: headers.icmp_codes.clone(),
        tcp_flags: headers.tcp_flags.clone(),
        // own bound: never merged into protocols or ports
        applications: headers
            .applications
            .as_ref()
            .map(|apps| apps.iter().copied().collect()),
    }
}
