//! Serialization tests for the construction-time configuration.
//!
//! Only built with `--features serde`.

#![cfg(feature = "serde")]

use lib65816::{Address, CpuConfig, FlatMemory, StatusFlags, CPU};

#[test]
fn test_empty_config_uses_defaults() {
    let config: CpuConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, CpuConfig::default());
    assert!(!config.trace);
    assert_eq!(config.vectors.emulation.reset, 0xFFFC);
}

#[test]
fn test_partial_config_overrides_trace() {
    let config: CpuConfig = serde_json::from_str(r#"{ "trace": true }"#).unwrap();
    assert!(config.trace);
    assert_eq!(config.vectors, CpuConfig::default().vectors);
}

#[test]
fn test_config_round_trip_and_use() {
    let mut config = CpuConfig::default();
    config.vectors.emulation.reset = 0xFFF0;

    let json = serde_json::to_string(&config).unwrap();
    let restored: CpuConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, config);

    let mut memory = FlatMemory::new();
    memory.load(0x00FFF0, &[0x00, 0xC0]);
    let cpu = CPU::with_config(memory, restored);
    assert_eq!(cpu.pc(), 0xC000);
}

#[test]
fn test_status_flags_serialize_by_name() {
    let flags = StatusFlags::default();
    let value = serde_json::to_value(flags).unwrap();

    assert_eq!(value["emulation"], true);
    assert_eq!(value["irq_disable"], true);
    assert_eq!(value["carry"], false);
}

#[test]
fn test_address_serializes_as_bank_and_offset() {
    let json = serde_json::to_string(&Address::new(0x7E, 0x1234)).unwrap();
    let restored: Address = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, Address::new(0x7E, 0x1234));
    assert!(json.contains("\"bank\":126"));
}
