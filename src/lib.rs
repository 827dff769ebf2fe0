//! Packet classification and summary library
//!
//! Takes packets that an external capture-and-decode layer has already
//! split into protocol layers, derives a best-fit transport/network
//! protocol label and application-layer label, and assembles a printable
//! per-packet summary.

pub mod network;

pub use network::classify::{classify_application, classify_protocol};
pub use network::packet::{DecodedPacket, EthernetLayer, Ipv4Layer, MacAddr, TcpLayer};
pub use network::summary::{summarize, PacketSummary};
pub use network::types::{Application, Protocol};
