//! Integration tests for pktlens

use chrono::{TimeZone, Utc};
use pktlens::{summarize, Application, DecodedPacket, MacAddr, Protocol};

#[test]
fn test_http_over_ethernet_end_to_end() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let packet = DecodedPacket::new(ts, 128)
        .with_ethernet(
            MacAddr([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
            MacAddr([0x11, 0x22, 0x33, 0x44, 0x55, 0x66]),
        )
        .with_ipv4("10.0.0.1".parse().unwrap(), "10.0.0.2".parse().unwrap())
        .with_tcp(51000, 80);

    let summary = summarize(&packet);
    assert_eq!(summary.protocol, Protocol::TCP);
    assert_eq!(summary.application, Application::Http);

    let rendered = summary.to_string();
    assert!(rendered.contains("IP: 10.0.0.1 -> 10.0.0.2"));
    assert!(rendered.contains("MAC: aa:bb:cc:dd:ee:ff -> 11:22:33:44:55:66"));
    assert!(rendered.contains("Protocol: TCP | HTTP (port 80)"));
    assert!(rendered.contains("Length: 128"));
}

#[test]
fn test_icmp_packet_end_to_end() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let packet = DecodedPacket::new(ts, 98)
        .with_ipv4("10.0.0.1".parse().unwrap(), "10.0.0.2".parse().unwrap())
        .with_icmpv4();

    let summary = summarize(&packet);
    assert_eq!(summary.protocol, Protocol::ICMPv4);
    assert_eq!(summary.application, Application::Unknown);
    assert!(summary
        .to_string()
        .contains("Protocol: ICMPv4 | Unknown Application"));
}

#[test]
fn test_https_port_guess_end_to_end() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let packet = DecodedPacket::new(ts, 1500)
        .with_ipv4(
            "192.168.1.10".parse().unwrap(),
            "93.184.216.34".parse().unwrap(),
        )
        .with_tcp(51000, 443);

    let summary = summarize(&packet);
    assert_eq!(summary.application, Application::Https);
}

#[test]
fn test_no_ethernet_renders_empty_macs() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let packet = DecodedPacket::new(ts, 75)
        .with_ipv4("10.0.0.1".parse().unwrap(), "8.8.8.8".parse().unwrap())
        .with_udp()
        .with_dns();

    let summary = summarize(&packet);
    assert_eq!(summary.src_mac, "");
    assert_eq!(summary.dst_mac, "");
    assert!(summary.to_string().contains("  * MAC:  -> \n"));
}

#[test]
fn test_summaries_compare_by_value() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let packet = DecodedPacket::new(ts, 128).with_tcp(51000, 22);

    let first = summarize(&packet);
    let second = summarize(&packet);
    assert_eq!(first, second);

    let other = summarize(&packet.clone().with_dns());
    assert_ne!(first, other);
}
