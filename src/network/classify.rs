//! Protocol and application classification.
//!
//! Both classifiers walk a fixed priority order and return on the first
//! matching layer. Transport layers are checked before the protocols
//! that ride on top of them, so a TCP-carried DNS packet reports `TCP`
//! as its protocol; a single label cannot represent both at once and the
//! ordering encodes which one wins. Do not reorder the checks.

use crate::network::packet::DecodedPacket;
use crate::network::types::{Application, Protocol};
use log::debug;

// Well-known ports used for application guessing when no application
// layer was decoded.
const PORT_HTTP: u16 = 80;
const PORT_HTTPS: u16 = 443;
const PORT_SSH: u16 = 22;

/// Determine the best-fit network/transport protocol for a packet.
///
/// Never fails: a packet with none of the recognized layers classifies
/// as [`Protocol::Unknown`].
pub fn classify_protocol(packet: &DecodedPacket) -> Protocol {
    if packet.has_tcp() {
        Protocol::TCP
    } else if packet.has_udp() {
        Protocol::UDP
    } else if packet.has_icmpv4() {
        Protocol::ICMPv4
    } else if packet.has_icmpv6() {
        Protocol::ICMPv6
    } else if packet.has_dns() {
        Protocol::DNS
    } else if packet.has_tls() {
        Protocol::TLS
    } else {
        Protocol::Unknown
    }
}

/// Determine the best-fit application-layer protocol for a packet.
///
/// An explicitly decoded application layer always wins over the port
/// heuristics: decoding is authoritative, ports are only a weak signal
/// (any service can listen on port 80). The heuristics check each
/// well-known port against both sides of the TCP connection.
pub fn classify_application(packet: &DecodedPacket) -> Application {
    if packet.has_dns() {
        return Application::Dns;
    }
    if packet.has_tls() {
        return Application::Tls;
    }
    if packet.has_dhcpv4() {
        return Application::Dhcp;
    }

    if let Some(tcp) = packet.tcp() {
        debug!(
            "no application layer decoded, guessing from TCP ports {} -> {}",
            tcp.src_port, tcp.dst_port
        );
        if tcp.src_port == PORT_HTTP || tcp.dst_port == PORT_HTTP {
            return Application::Http;
        }
        if tcp.src_port == PORT_HTTPS || tcp.dst_port == PORT_HTTPS {
            return Application::Https;
        }
        if tcp.src_port == PORT_SSH || tcp.dst_port == PORT_SSH {
            return Application::Ssh;
        }
    }

    Application::Unknown
}
