//! Protocol and application label types.
//!
//! Each enum renders to its canonical label through `Display`; the
//! rendered strings are part of the output contract and must not change.

use std::fmt;

/// Best-fit network/transport protocol for one packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)] // Protocol names are standardized
pub enum Protocol {
    TCP,
    UDP,
    ICMPv4,
    ICMPv6,
    DNS,
    TLS,
    Unknown,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::TCP => write!(f, "TCP"),
            Protocol::UDP => write!(f, "UDP"),
            Protocol::ICMPv4 => write!(f, "ICMPv4"),
            Protocol::ICMPv6 => write!(f, "ICMPv6"),
            Protocol::DNS => write!(f, "DNS"),
            Protocol::TLS => write!(f, "TLS"),
            Protocol::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Best-fit application-layer protocol for one packet.
///
/// Port-guessed variants carry the port in their label so the output
/// distinguishes an explicit layer detection from a heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Application {
    Dns,
    Tls,
    Dhcp,
    Http,
    Https,
    Ssh,
    Unknown,
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Application::Dns => write!(f, "DNS"),
            Application::Tls => write!(f, "TLS/SSL"),
            Application::Dhcp => write!(f, "DHCP"),
            Application::Http => write!(f, "HTTP (port 80)"),
            Application::Https => write!(f, "HTTPS (port 443)"),
            Application::Ssh => write!(f, "SSH (port 22)"),
            Application::Unknown => write!(f, "Unknown Application"),
        }
    }
}
