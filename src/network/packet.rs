//! Decoded packet boundary types.
//!
//! The capture-and-decode collaborator produces [`DecodedPacket`] values;
//! this crate only reads them. Each supported layer is present exactly
//! when the decoder found it, so a layer's fields exist whenever its
//! presence query reports true.

use chrono::{DateTime, Utc};
use std::fmt;
use std::net::Ipv4Addr;

/// A 48-bit MAC address, rendered `aa:bb:cc:dd:ee:ff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

/// Ethernet header fields used for addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetLayer {
    pub src_mac: MacAddr,
    pub dst_mac: MacAddr,
}

/// IPv4 header fields used for addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipv4Layer {
    pub src_ip: Ipv4Addr,
    pub dst_ip: Ipv4Addr,
}

/// TCP port pair used for application guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpLayer {
    pub src_port: u16,
    pub dst_port: u16,
}

/// A packet already decoded into its protocol layers, plus capture
/// metadata. Immutable once built; classification never mutates it.
///
/// Layers whose fields this crate never reads (UDP, ICMP, DNS, TLS,
/// DHCPv4) are tracked as presence only.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedPacket {
    ethernet: Option<EthernetLayer>,
    ipv4: Option<Ipv4Layer>,
    tcp: Option<TcpLayer>,
    udp: bool,
    icmpv4: bool,
    icmpv6: bool,
    dns: bool,
    tls: bool,
    dhcpv4: bool,
    timestamp: DateTime<Utc>,
    capture_length: usize,
}

impl DecodedPacket {
    /// Start a packet with no layers. `capture_length` is the captured
    /// byte count, which can be less than the on-wire length when the
    /// capture was snapshotted.
    pub fn new(timestamp: DateTime<Utc>, capture_length: usize) -> Self {
        Self {
            ethernet: None,
            ipv4: None,
            tcp: None,
            udp: false,
            icmpv4: false,
            icmpv6: false,
            dns: false,
            tls: false,
            dhcpv4: false,
            timestamp,
            capture_length,
        }
    }

    pub fn with_ethernet(mut self, src_mac: MacAddr, dst_mac: MacAddr) -> Self {
        self.ethernet = Some(EthernetLayer { src_mac, dst_mac });
        self
    }

    pub fn with_ipv4(mut self, src_ip: Ipv4Addr, dst_ip: Ipv4Addr) -> Self {
        self.ipv4 = Some(Ipv4Layer { src_ip, dst_ip });
        self
    }

    pub fn with_tcp(mut self, src_port: u16, dst_port: u16) -> Self {
        self.tcp = Some(TcpLayer { src_port, dst_port });
        self
    }

    pub fn with_udp(mut self) -> Self {
        self.udp = true;
        self
    }

    pub fn with_icmpv4(mut self) -> Self {
        self.icmpv4 = true;
        self
    }

    pub fn with_icmpv6(mut self) -> Self {
        self.icmpv6 = true;
        self
    }

    pub fn with_dns(mut self) -> Self {
        self.dns = true;
        self
    }

    pub fn with_tls(mut self) -> Self {
        self.tls = true;
        self
    }

    pub fn with_dhcpv4(mut self) -> Self {
        self.dhcpv4 = true;
        self
    }

    pub fn ethernet(&self) -> Option<&EthernetLayer> {
        self.ethernet.as_ref()
    }

    pub fn ipv4(&self) -> Option<&Ipv4Layer> {
        self.ipv4.as_ref()
    }

    pub fn tcp(&self) -> Option<&TcpLayer> {
        self.tcp.as_ref()
    }

    pub fn has_ethernet(&self) -> bool {
        self.ethernet.is_some()
    }

    pub fn has_ipv4(&self) -> bool {
        self.ipv4.is_some()
    }

    pub fn has_tcp(&self) -> bool {
        self.tcp.is_some()
    }

    pub fn has_udp(&self) -> bool {
        self.udp
    }

    pub fn has_icmpv4(&self) -> bool {
        self.icmpv4
    }

    pub fn has_icmpv6(&self) -> bool {
        self.icmpv6
    }

    pub fn has_dns(&self) -> bool {
        self.dns
    }

    pub fn has_tls(&self) -> bool {
        self.tls
    }

    pub fn has_dhcpv4(&self) -> bool {
        self.dhcpv4
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn capture_length(&self) -> usize {
        self.capture_length
    }
}
