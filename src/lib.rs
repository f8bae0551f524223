//! # 65816 CPU Emulator Core
//!
//! An instruction-level WDC 65C816 CPU emulator with a 24-bit addressable bus,
//! designed for modularity, clarity, and WebAssembly portability.
//!
//! This crate provides the processor state and interpreter, a trait-based memory
//! bus abstraction with a device-dispatching implementation, and a table-driven
//! opcode metadata system covering all 256 opcodes.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib65816::{CPU, FlatMemory};
//!
//! // Create a flat 16 MB address space
//! let mut memory = FlatMemory::new();
//!
//! // Emulation-mode reset vector points to the program at $00:1000
//! memory.load(0x00FFFC, &[0x00, 0x10]);
//! memory.load(0x001000, &[0xA9, 0x42]); // LDA #$42
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x1000);
//! assert!(cpu.emulation());
//!
//! // Execute one instruction
//! assert_eq!(cpu.step(), 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Bus dispatch**: `SystemBus` routes accesses to flat regions and `Device`s
//! - **Cycle counting**: Every step returns the cycles it consumed
//! - **Table-Driven Design**: All opcode metadata in a single source of truth
//!
//! ## Modules
//!
//! - `address` - 24-bit bank/offset addresses
//! - `status` - Processor status flags
//! - `stack` - Stack pointer and push/pull
//! - `memory` - MemoryBus trait and flat memory
//! - `devices` - Device trait, memory regions, RAM and ROM devices
//! - `bus` - SystemBus dispatching to regions and devices
//! - `addressing` - Addressing modes and effective address resolution
//! - `opcodes` - Opcode metadata table
//! - `cpu` - CPU state and execution logic
//! - `vectors` - Interrupt vector locations
//! - `control` - Thread-safe pause/step/cycle handle
//! - `trace` - Per-instruction trace lines

pub mod address;
pub mod addressing;
pub mod bus;
pub mod control;
pub mod cpu;
pub mod devices;
pub mod memory;
pub mod opcodes;
pub mod stack;
pub mod status;
pub mod trace;
pub mod vectors;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use address::Address;
pub use addressing::AddressingMode;
pub use bus::SystemBus;
pub use control::CpuHandle;
pub use cpu::{CpuConfig, Interrupt, CPU};
pub use devices::{BusError, Device, MemoryRegion, RamDevice, RomDevice};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use stack::Stack;
pub use status::StatusFlags;
pub use trace::TraceLine;
pub use vectors::{InterruptVectors, VectorTables};
