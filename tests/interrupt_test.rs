//! Integration tests for CPU interrupt support.
//!
//! These tests verify the interrupt implementation including:
//! - IRQ level sampling at instruction boundaries, masked by the I flag
//! - NMI and ABORT edge latching
//! - Priority ABORT > NMI > IRQ
//! - Frame layout and cycle cost in emulation vs native mode
//! - Device IRQ lines routed through the system bus, with acknowledgment
//! - WAI wake-up

use lib65816::{
    Address, CpuConfig, Device, FlatMemory, InterruptVectors, MemoryBus, RamDevice, SystemBus,
    VectorTables, CPU,
};

/// Mock interrupt device for testing.
///
/// This device exposes a simple memory-mapped interface:
/// - Offset 0 (STATUS): Read interrupt pending (bit 7)
/// - Offset 1 (CONTROL): Write bit 0 to raise the interrupt, bit 7 to clear it
struct MockInterruptDevice {
    base: u32,
    interrupt_pending: bool,
}

impl MockInterruptDevice {
    // Register offsets
    const STATUS_REG: u32 = 0;
    const CONTROL_REG: u32 = 1;

    // Bit positions
    const INTERRUPT_PENDING_BIT: u8 = 7;
    const INTERRUPT_RAISE_BIT: u8 = 0;
    const INTERRUPT_ACK_BIT: u8 = 7;

    fn new(base: u32) -> Self {
        Self {
            base,
            interrupt_pending: false,
        }
    }

    fn status(&self) -> u8 {
        if self.interrupt_pending {
            1 << Self::INTERRUPT_PENDING_BIT
        } else {
            0
        }
    }
}

impl Device for MockInterruptDevice {
    fn decode(&self, address: Address) -> Option<u32> {
        let addr = address.as_integer();
        (self.base..self.base + 2)
            .contains(&addr)
            .then(|| addr - self.base)
    }

    fn read_byte(&mut self, local: u32) -> (u8, Option<&[u8]>) {
        match local {
            Self::STATUS_REG => (self.status(), None),
            _ => (0x00, None),
        }
    }

    fn store_byte(&mut self, local: u32, value: u8) -> Option<&mut [u8]> {
        if local == Self::CONTROL_REG {
            if value & (1 << Self::INTERRUPT_ACK_BIT) != 0 {
                self.interrupt_pending = false;
            } else if value & (1 << Self::INTERRUPT_RAISE_BIT) != 0 {
                self.interrupt_pending = true;
            }
        }
        None
    }

    fn peek_byte(&self, local: u32) -> u8 {
        match local {
            Self::STATUS_REG => self.status(),
            _ => 0x00,
        }
    }

    fn irq_active(&self) -> bool {
        self.interrupt_pending
    }
}

const DEVICE_BASE: u32 = 0x01_0000;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x00FFFC, &[0x00, 0x80]);
    // Emulation IRQ/BRK, NMI, ABORT handlers
    memory.load(0x00FFFE, &[0x00, 0x90]);
    memory.load(0x00FFFA, &[0x00, 0xA0]);
    memory.load(0x00FFF8, &[0x00, 0xB0]);
    // Native IRQ, NMI, ABORT handlers
    memory.load(0x00FFEE, &[0x00, 0x91]);
    memory.load(0x00FFEA, &[0x00, 0xA1]);
    memory.load(0x00FFE8, &[0x00, 0xB1]);
    memory.load(0x008000, &[0xEA; 0x20]);
    CPU::new(memory)
}

/// CPU on a system bus: flat RAM for bank 0 plus the mock device in bank 1
fn setup_bus_cpu() -> CPU<SystemBus> {
    let mut bus = SystemBus::new();
    bus.register_device(Box::new(RamDevice::flat(0x00_0000, 0x1_0000)));
    bus.register_device(Box::new(MockInterruptDevice::new(DEVICE_BASE)));

    bus.load(0x00FFFC, &[0x00, 0x80]);
    bus.load(0x00FFFE, &[0x00, 0x90]);
    CPU::new(bus)
}

fn byte_at(cpu: &CPU<FlatMemory>, address: usize) -> u8 {
    cpu.memory().as_slice()[address]
}

// ========== IRQ Tests ==========

#[test]
fn test_irq_taken_when_enabled() {
    let mut cpu = setup_cpu();
    cpu.set_status(0x01); // C set, I clear
    cpu.set_irq_pin(true);

    assert_eq!(cpu.step(), 7);

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0x01FC);
    // Return address is the instruction that was about to run
    assert_eq!(byte_at(&cpu, 0x01FF), 0x80);
    assert_eq!(byte_at(&cpu, 0x01FE), 0x00);
    // B clear for a hardware interrupt
    assert_eq!(byte_at(&cpu, 0x01FD), 0x21);
    assert!(cpu.flags().irq_disable);
}

#[test]
fn test_irq_masked_by_i_flag() {
    let mut cpu = setup_cpu();
    cpu.set_irq_pin(true);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.sp(), 0x01FF);
}

#[test]
fn test_irq_level_retriggers_after_cli() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x009000, &[0x58, 0xEA]); // CLI inside the handler
    cpu.set_status(0x00);
    cpu.set_irq_pin(true);

    cpu.step();
    assert_eq!(cpu.pc(), 0x9000);

    cpu.step();
    // Line is still asserted, so the handler is re-entered
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0x01F9);
}

#[test]
fn test_irq_native_frame_and_cycles() {
    let mut cpu = setup_cpu();
    cpu.set_emulation(false);
    cpu.set_status(0x00);
    cpu.set_pbr(0x02);
    cpu.set_pc(0x1234);
    cpu.set_irq_pin(true);

    assert_eq!(cpu.step(), 8);

    assert_eq!((cpu.pbr(), cpu.pc()), (0x00, 0x9100));
    assert_eq!(cpu.sp(), 0x01FB);
    assert_eq!(byte_at(&cpu, 0x01FF), 0x02);
    assert_eq!(byte_at(&cpu, 0x01FE), 0x12);
    assert_eq!(byte_at(&cpu, 0x01FD), 0x34);
    assert_eq!(byte_at(&cpu, 0x01FC), 0x00);
}

#[test]
fn test_irq_rti_round_trip() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x009000, &[0x40]);
    cpu.set_status(0x08); // D set, I clear
    cpu.set_irq_pin(true);

    cpu.step();
    assert!(!cpu.flags().decimal);

    cpu.set_irq_pin(false);
    assert_eq!(cpu.step(), 6);

    assert_eq!(cpu.pc(), 0x8000);
    assert!(cpu.flags().decimal);
    assert!(!cpu.flags().irq_disable);
    assert_eq!(cpu.sp(), 0x01FF);
}

// ========== NMI Tests ==========

#[test]
fn test_nmi_ignores_i_flag() {
    let mut cpu = setup_cpu();
    cpu.set_nmi_pin(true);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_nmi_is_edge_triggered() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x00A000, &[0xEA; 4]);

    cpu.set_nmi_pin(true);
    cpu.step();
    assert_eq!(cpu.pc(), 0xA000);

    // Holding the line does not re-enter
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0xA001);

    cpu.set_nmi_pin(false);
    cpu.set_nmi_pin(true);
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0xA000);
}

#[test]
fn test_nmi_native_vector() {
    let mut cpu = setup_cpu();
    cpu.set_emulation(false);
    cpu.set_nmi_pin(true);

    assert_eq!(cpu.step(), 8);
    assert_eq!(cpu.pc(), 0xA100);
}

// ========== Priority Tests ==========

#[test]
fn test_abort_beats_nmi_beats_irq() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x00A000, &[0xEA; 2]);
    cpu.set_status(0x00);
    cpu.set_irq_pin(true);
    cpu.set_nmi_pin(true);
    cpu.set_abort_pin(true);

    cpu.step();
    assert_eq!(cpu.pc(), 0xB000);

    cpu.step();
    assert_eq!(cpu.pc(), 0xA000);

    // I is now set, so the IRQ stays pending and the handler runs
    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0xA001);
}

#[test]
fn test_abort_is_edge_latched() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x00B000, &[0xEA; 2]);

    cpu.set_abort_pin(true);
    cpu.step();
    assert_eq!(cpu.pc(), 0xB000);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0xB001);
}

// ========== WAI Tests ==========

#[test]
fn test_wai_woken_by_nmi_returns_after_wai() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0xCB]);

    cpu.step();
    assert!(cpu.is_waiting());
    assert_eq!(cpu.run_for_cycles(50), 0);

    cpu.set_nmi_pin(true);
    assert_eq!(cpu.step(), 7);

    assert!(!cpu.is_waiting());
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(byte_at(&cpu, 0x01FE), 0x01);
}

#[test]
fn test_wai_woken_by_enabled_irq_services_it() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x008000, &[0x58, 0xCB]); // CLI, WAI

    cpu.step();
    cpu.step();
    assert!(cpu.is_waiting());

    cpu.set_irq_pin(true);
    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
}

// ========== Device IRQ Tests ==========

#[test]
fn test_device_irq_serviced_and_acknowledged() {
    let mut cpu = setup_bus_cpu();
    // CLI, NOP, NOP
    cpu.memory_mut().load(0x008000, &[0x58, 0xEA, 0xEA]);
    // Handler: LDA $010000, LDA #$80, STA $010001, RTI
    cpu.memory_mut().load(
        0x009000,
        &[0xAF, 0x00, 0x00, 0x01, 0xA9, 0x80, 0x8F, 0x01, 0x00, 0x01, 0x40],
    );

    cpu.step(); // CLI
    assert!(!cpu.memory().irq_active());

    cpu.memory_mut()
        .store_byte(Address::new(0x01, 0x0001), 0x01);
    assert!(cpu.memory().irq_active());

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);

    cpu.step();
    assert_eq!(cpu.a() & 0xFF, 0x80);

    cpu.step();
    cpu.step();
    assert!(!cpu.memory().irq_active());

    cpu.step(); // RTI
    assert_eq!(cpu.pc(), 0x8001);
    assert!(!cpu.flags().irq_disable);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_device_status_visible_to_peek() {
    let mut cpu = setup_bus_cpu();
    cpu.memory_mut()
        .store_byte(Address::new(0x01, 0x0001), 0x01);

    assert_eq!(cpu.memory().peek_byte(Address::new(0x01, 0x0000)), 0x80);
}

// ========== Vector Configuration Tests ==========

#[test]
fn test_custom_vector_locations() {
    let mut emulation = InterruptVectors::EMULATION;
    emulation.irq = 0xFF00;
    let config = CpuConfig {
        vectors: VectorTables {
            emulation,
            ..VectorTables::default()
        },
        trace: false,
    };

    let mut memory = FlatMemory::new();
    memory.load(0x00FFFC, &[0x00, 0x80]);
    memory.load(0x00FF00, &[0x00, 0xC0]);
    memory.load(0x008000, &[0x00, 0x00]); // BRK shares the IRQ vector

    let mut cpu = CPU::with_config(memory, config);
    cpu.step();

    assert_eq!(cpu.pc(), 0xC000);
}
