//! WebAssembly bindings for the lib65816 emulator.
//!
//! This module provides JavaScript-callable interfaces to the 65816 CPU emulator,
//! enabling browser-based execution of 65816 machine code.

pub mod api;

pub use api::Emulator65816;
