//! WASM API for the 65816 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, pin control and
//! state inspection.

use crate::{Address, MemoryBus, RamDevice, SystemBus, TraceLine, CPU};
use wasm_bindgen::prelude::*;

/// Banks 0 and 1 are backed by RAM.
const RAM_SIZE: usize = 0x2_0000;

/// Default program start written to the reset vector.
const PROGRAM_START: u16 = 0x0600;

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator65816 {
    cpu: CPU<SystemBus>,
    program_start: u32,
    program_end: u32,
}

#[wasm_bindgen]
impl Emulator65816 {
    /// Create a new 65816 emulator with 128 KB of RAM in banks $00-$01
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut bus = SystemBus::new();
        bus.register_device(Box::new(RamDevice::flat(0x00_0000, RAM_SIZE)));

        let [low, high] = PROGRAM_START.to_le_bytes();
        bus.load(0x00_FFFC, &[low, high]);

        Emulator65816 {
            cpu: CPU::new(bus),
            program_start: PROGRAM_START as u32,
            program_end: PROGRAM_START as u32,
        }
    }

    /// Execute a single instruction and return the cycles it took
    pub fn step(&mut self) -> u32 {
        self.cpu.step() as u32
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> u32 {
        self.cpu.run_for_cycles(cycles as u64) as u32
    }

    /// Run the reset sequence. Memory is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u16 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u16 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u16 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn d(&self) -> u16 {
        self.cpu.d()
    }

    #[wasm_bindgen(getter)]
    pub fn dbr(&self) -> u8 {
        self.cpu.dbr()
    }

    #[wasm_bindgen(getter)]
    pub fn pbr(&self) -> u8 {
        self.cpu.pbr()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn emulation(&self) -> bool {
        self.cpu.emulation()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn waiting(&self) -> bool {
        self.cpu.is_waiting()
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.cpu.is_stopped()
    }

    // Register setters

    /// Set the program bank and counter
    pub fn jump(&mut self, addr: u32) {
        self.cpu.jump(Address::from_integer(addr));
    }

    // Pins

    pub fn set_irq(&mut self, asserted: bool) {
        self.cpu.set_irq_pin(asserted);
    }

    pub fn set_nmi(&mut self, asserted: bool) {
        self.cpu.set_nmi_pin(asserted);
    }

    pub fn set_abort(&mut self, asserted: bool) {
        self.cpu.set_abort_pin(asserted);
    }

    pub fn set_reset(&mut self, asserted: bool) {
        self.cpu.set_reset_pin(asserted);
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.cpu.set_ready_pin(ready);
    }

    // Memory access methods

    /// Read a single byte without side effects
    pub fn read_memory(&self, addr: u32) -> u8 {
        self.cpu.memory().peek_byte(Address::from_integer(addr))
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u32, value: u8) {
        self.cpu
            .memory_mut()
            .store_byte(Address::from_integer(addr), value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u32) -> js_sys::Uint8Array {
        let start = Address::from_integer(page << 8);
        let bytes: Vec<u8> = (0..256)
            .map(|i| self.cpu.memory().peek_byte(start.with_offset_no_wrap(i)))
            .collect();
        js_sys::Uint8Array::from(&bytes[..])
    }

    /// Load a program into memory and jump to it
    pub fn load_program(&mut self, program: &[u8], start_addr: u32) {
        self.cpu.memory_mut().load(start_addr, program);
        self.cpu.jump(Address::from_integer(start_addr));
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u32);
    }

    /// Trace line for the instruction at the current program address
    pub fn trace_line(&self) -> String {
        TraceLine::capture(&self.cpu).to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u32 {
        self.program_start
    }

    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u32 {
        self.program_end
    }
}

impl Default for Emulator65816 {
    fn default() -> Self {
        Self::new()
    }
}
