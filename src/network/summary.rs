//! Per-packet summary record and rendering.

use crate::network::classify::{classify_application, classify_protocol};
use crate::network::packet::DecodedPacket;
use crate::network::types::{Application, Protocol};
use chrono::{DateTime, Utc};
use std::fmt;
use std::io::{self, Write};

/// Addressing, classification, and capture metadata for one packet.
///
/// Built once by [`summarize`] and read-only afterwards. Address fields
/// are empty strings when the packet lacked the corresponding layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketSummary {
    pub src_mac: String,
    pub dst_mac: String,
    pub src_ip: String,
    pub dst_ip: String,
    pub protocol: Protocol,
    pub application: Application,
    pub timestamp: DateTime<Utc>,
    pub length: usize,
}

/// Build a summary from one decoded packet.
///
/// Each field defaults independently when its source layer is absent:
/// no Ethernet layer leaves both MAC strings empty, no IPv4 layer leaves
/// both IP strings empty. Never fails.
pub fn summarize(packet: &DecodedPacket) -> PacketSummary {
    let (src_mac, dst_mac) = match packet.ethernet() {
        Some(eth) => (eth.src_mac.to_string(), eth.dst_mac.to_string()),
        None => (String::new(), String::new()),
    };

    let (src_ip, dst_ip) = match packet.ipv4() {
        Some(ip) => (ip.src_ip.to_string(), ip.dst_ip.to_string()),
        None => (String::new(), String::new()),
    };

    PacketSummary {
        src_mac,
        dst_mac,
        src_ip,
        dst_ip,
        protocol: classify_protocol(packet),
        application: classify_application(packet),
        timestamp: packet.timestamp(),
        length: packet.capture_length(),
    }
}

impl PacketSummary {
    /// Write the rendered block to a sink. A write failure is the
    /// sink's to report; nothing in the summary itself can fail.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }
}

impl fmt::Display for PacketSummary {
    /// Fixed multi-line block. Empty fields render as empty strings so
    /// the line structure is identical regardless of which layers were
    /// present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Packet: ---")?;
        writeln!(f, "  * IP: {} -> {}", self.src_ip, self.dst_ip)?;
        writeln!(f, "  * MAC: {} -> {}", self.src_mac, self.dst_mac)?;
        writeln!(f, "  * Protocol: {} | {}", self.protocol, self.application)?;
        writeln!(f, "  * Length: {}", self.length)?;
        writeln!(f, "  * Timestamp: {}", self.timestamp)
    }
}
