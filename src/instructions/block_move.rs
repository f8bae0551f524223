//! # Block Move Instructions
//!
//! - MVN: Move block, incrementing X and Y
//! - MVP: Move block, decrementing X and Y
//!
//! The operand bytes are the destination bank, then the source bank. X holds
//! the source offset, Y the destination offset, and C holds the byte count
//! minus one. The whole block is copied within one step; C ends at 0xFFFF and
//! DBR at the destination bank.
//!
//! Cycle timing: 7 cycles per byte moved

use crate::{Address, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the MVN (Block Move Next) instruction.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]);
/// memory.load(0x008000, &[0x54, 0x7E, 0x01]); // MVN $7E,$01
/// memory.load(0x012000, b"65816");
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_emulation(false);
/// cpu.set_status(0x00); // 16-bit registers
/// cpu.set_a(0x0004); // five bytes
/// cpu.set_x(0x2000);
/// cpu.set_y(0x3000);
///
/// assert_eq!(cpu.step(), 35);
/// assert_eq!(&cpu.memory().as_slice()[0x7E3000..0x7E3005], b"65816");
/// assert_eq!(cpu.a(), 0xFFFF);
/// assert_eq!(cpu.x(), 0x2005);
/// assert_eq!(cpu.y(), 0x3005);
/// assert_eq!(cpu.dbr(), 0x7E);
/// ```
pub(crate) fn execute_mvn<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    move_block(cpu, opcode, 1);
}

/// Executes the MVP (Block Move Previous) instruction.
///
/// X and Y start at the last byte of each block and count down.
pub(crate) fn execute_mvp<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8) {
    move_block(cpu, opcode, -1);
}

fn move_block<M: MemoryBus>(cpu: &mut CPU<M>, opcode: u8, direction: i16) {
    let metadata = &OPCODE_TABLE[opcode as usize];

    let destination_bank = cpu.operand_byte();
    let source_bank = cpu
        .memory
        .read_byte(cpu.program_address().with_offset_wrap(2));
    cpu.dbr = destination_bank;

    loop {
        let value = cpu.memory.read_byte(Address::new(source_bank, cpu.x));
        cpu.memory
            .store_byte(Address::new(destination_bank, cpu.y), value);

        cpu.x = cpu.index_value(cpu.x.wrapping_add_signed(direction));
        cpu.y = cpu.index_value(cpu.y.wrapping_add_signed(direction));
        cpu.a = cpu.a.wrapping_sub(1);
        cpu.cycles += metadata.base_cycles as u64;

        if cpu.a == 0xFFFF {
            break;
        }
    }

    cpu.advance_pc(metadata.size_bytes as u16);
}
