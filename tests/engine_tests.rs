//! Tests for the exchange engine
//!
//! These tests verify:
//! - Per-line acknowledgment with the `ok` token
//! - Abort on the first negative acknowledgment, nothing further sent
//! - Reply collection of a known line count
//! - Timeouts are terminal with no partial reply

mod common;

use common::ScriptedTransport;
use memlink::config::SessionConfig;
use memlink::protocol::{Command, Exchange, ExchangeState};
use memlink::MemlinkError;

// =============================================================================
// Acknowledgment Flow Tests
// =============================================================================

#[test]
fn test_single_line_command_with_reply() {
    let mut transport = ScriptedTransport::new(["ok", "001f"]);
    let mut exchange = Exchange::new();

    let reply = exchange
        .run(&mut transport, &["addr".to_string()], 1)
        .unwrap();

    assert_eq!(transport.sent, vec!["addr"]);
    assert_eq!(reply, vec!["001f"]);
    assert_eq!(exchange.state(), ExchangeState::Done);
}

#[test]
fn test_wmem_sends_all_chunks_then_terminator() {
    // 40 hex chars at max_line_len 16: three data lines of 16, 16 and 8
    let payload = "00112233445566778899aabbccddeeff00112233".to_string();
    let outgoing = Command::WriteMem { payload }.render(&SessionConfig::new(16));

    // One ack per outgoing line: verb + 3 data lines + empty terminator
    let mut transport = ScriptedTransport::new(["ok"; 5]);
    let mut exchange = Exchange::new();

    let reply = exchange.run(&mut transport, &outgoing, 0).unwrap();

    assert!(reply.is_empty());
    assert_eq!(transport.sent.len(), 5);
    assert_eq!(transport.sent[0], "wmem");
    assert_eq!(transport.sent[1].len(), 16);
    assert_eq!(transport.sent[2].len(), 16);
    assert_eq!(transport.sent[3].len(), 8);
    assert_eq!(transport.sent[4], "");
    assert_eq!(exchange.state(), ExchangeState::Done);
}

#[test]
fn test_negative_ack_aborts_mid_sequence() {
    // Device rejects the second data line
    let payload = "00112233445566778899aabbccddeeff00112233".to_string();
    let outgoing = Command::WriteMem { payload }.render(&SessionConfig::new(16));

    let mut transport = ScriptedTransport::new(["ok", "ok", "ko"]);
    let mut exchange = Exchange::new();

    let err = exchange.run(&mut transport, &outgoing, 0).unwrap_err();

    assert!(matches!(err, MemlinkError::Protocol(_)));
    assert_eq!(exchange.state(), ExchangeState::Failed);

    // Verb and two data lines went out; the third data line and the
    // terminator were never sent.
    assert_eq!(transport.sent.len(), 3);
    assert_eq!(transport.sent[0], "wmem");
    assert_eq!(transport.sent[2].len(), 16);
    assert_eq!(transport.remaining(), 0);
}

#[test]
fn test_negative_ack_reads_no_reply() {
    let mut transport = ScriptedTransport::new(["ko", "deadbeef"]);
    let mut exchange = Exchange::new();

    let err = exchange
        .run(&mut transport, &["rmem 0004".to_string()], 1)
        .unwrap_err();

    assert!(matches!(err, MemlinkError::Protocol(_)));
    // The scripted reply line was never consumed
    assert_eq!(transport.remaining(), 1);
}

// =============================================================================
// Reply Collection Tests
// =============================================================================

#[test]
fn test_collects_expected_reply_count_in_order() {
    let mut transport =
        ScriptedTransport::new(["ok", "11111111", "22222222", "33333333"]);
    let mut exchange = Exchange::new();

    let reply = exchange
        .run(&mut transport, &["rmem 000c".to_string()], 3)
        .unwrap();

    assert_eq!(reply, vec!["11111111", "22222222", "33333333"]);
    assert_eq!(exchange.state(), ExchangeState::Done);
}

#[test]
fn test_zero_reply_command_reads_nothing() {
    let mut transport = ScriptedTransport::new(["ok", "leftover"]);
    let mut exchange = Exchange::new();

    let reply = exchange
        .run(&mut transport, &["addr 0010".to_string()], 0)
        .unwrap();

    assert!(reply.is_empty());
    assert_eq!(transport.remaining(), 1);
}

// =============================================================================
// Timeout Tests
// =============================================================================

#[test]
fn test_timeout_waiting_for_ack() {
    let mut transport = ScriptedTransport::new(Vec::<String>::new());
    let mut exchange = Exchange::new();

    let err = exchange
        .run(&mut transport, &["rrom".to_string()], 1)
        .unwrap_err();

    assert!(matches!(err, MemlinkError::Timeout));
    assert_eq!(exchange.state(), ExchangeState::Failed);
}

#[test]
fn test_timeout_mid_reply_returns_no_partial() {
    // Two reply lines expected, the second never arrives
    let mut transport = ScriptedTransport::new(["ok", "11111111"]);
    transport.push_timeout();
    let mut exchange = Exchange::new();

    let err = exchange
        .run(&mut transport, &["rmem 0008".to_string()], 2)
        .unwrap_err();

    assert!(matches!(err, MemlinkError::Timeout));
    assert_eq!(exchange.state(), ExchangeState::Failed);
}
