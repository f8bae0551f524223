//! # Addressing Modes
//!
//! This module defines the addressing modes of the 65816 and the resolver that
//! turns a mode plus the current CPU state into the effective 24-bit address of
//! an instruction's operand.
//!
//! ## Bank selection
//!
//! - Absolute and indirect data accesses use the data bank register (DBR)
//! - Direct page and stack accesses always use bank 0
//! - Long modes carry their own bank byte
//! - Jump targets stay in the program bank unless the mode is long
//!
//! ## Index arithmetic
//!
//! Indexing a data address carries into the next bank (`with_offset_no_wrap`).
//! Direct page and stack arithmetic wraps inside bank 0. In emulation mode the
//! direct page behaves like the 6502 zero page: the D register is ignored and
//! `dp + index` wraps inside page 0.

use crate::{Address, MemoryBus, CPU};

/// 65816 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator, StackImplied
/// - **1 byte**: Direct page family, StackRelative family, Relative, Interrupt
///   (signature byte), Immediate (8-bit)
/// - **2 bytes**: Absolute family, RelativeLong, BlockMove, StackAbsolute,
///   StackProgramCounterRelative, Immediate (16-bit)
/// - **3 bytes**: AbsoluteLong, AbsoluteLongX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, INX, XBA
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, INC A
    Accumulator,

    /// Constant operand following the opcode, 8 or 16 bits wide depending on
    /// the width flag of the target register.
    ///
    /// Example: LDA #$1234
    Immediate,

    /// Signed 8-bit branch displacement.
    Relative,

    /// Signed 16-bit branch displacement (BRL).
    RelativeLong,

    /// 16-bit offset in the data bank.
    ///
    /// Example: LDA $1234 (load from DBR:1234)
    Absolute,

    /// Absolute indexed by X, may carry into the next bank.
    AbsoluteX,

    /// Absolute indexed by Y, may carry into the next bank.
    AbsoluteY,

    /// Full 24-bit address.
    ///
    /// Example: LDA $7E1234
    AbsoluteLong,

    /// 24-bit address indexed by X.
    AbsoluteLongX,

    /// JMP ($1234): 16-bit pointer in bank 0, target in the program bank.
    AbsoluteIndirect,

    /// JML [$1234]: 24-bit pointer in bank 0.
    AbsoluteIndirectLong,

    /// JMP ($1234,X) / JSR ($1234,X): pointer in the program bank.
    AbsoluteIndexedIndirect,

    /// Direct page: `D + dp` in bank 0.
    Direct,

    /// Direct page indexed by X.
    DirectX,

    /// Direct page indexed by Y.
    DirectY,

    /// (dp): 16-bit pointer in the direct page, target in the data bank.
    DirectIndirect,

    /// [dp]: 24-bit pointer in the direct page.
    DirectIndirectLong,

    /// (dp,X): X indexes the pointer location.
    DirectIndexedIndirect,

    /// (dp),Y: Y indexes the target.
    DirectIndirectIndexed,

    /// [dp],Y: 24-bit pointer, Y indexes the target.
    DirectIndirectLongIndexed,

    /// d,S: `S + d` in bank 0.
    StackRelative,

    /// (d,S),Y: pointer at `S + d`, target in the data bank indexed by Y.
    StackRelativeIndirectIndexed,

    /// MVN/MVP: destination bank byte then source bank byte.
    BlockMove,

    /// Push/pull with no operand (PHA, PLP, RTS, ...).
    StackImplied,

    /// PEA: 16-bit immediate word pushed on the stack.
    StackAbsolute,

    /// PEI: 16-bit word read from the direct page and pushed.
    StackDirectIndirect,

    /// PER: 16-bit displacement from the next instruction, pushed.
    StackProgramCounterRelative,

    /// BRK/COP: one signature byte, ignored by the CPU.
    Interrupt,
}

impl AddressingMode {
    /// Returns true for modes that form their address from the direct page
    /// register. These pay one extra cycle when the low byte of D is nonzero.
    pub fn is_direct_page(&self) -> bool {
        matches!(
            self,
            AddressingMode::Direct
                | AddressingMode::DirectX
                | AddressingMode::DirectY
                | AddressingMode::DirectIndirect
                | AddressingMode::DirectIndirectLong
                | AddressingMode::DirectIndexedIndirect
                | AddressingMode::DirectIndirectIndexed
                | AddressingMode::DirectIndirectLongIndexed
                | AddressingMode::StackDirectIndirect
        )
    }

    /// Returns true for modes whose operand itself lives in bank 0 and whose
    /// 16-bit accesses wrap at the end of the bank instead of carrying.
    pub fn wraps_in_bank_zero(&self) -> bool {
        matches!(
            self,
            AddressingMode::Direct
                | AddressingMode::DirectX
                | AddressingMode::DirectY
                | AddressingMode::StackRelative
        )
    }

    /// Returns true for the indexed modes that pay one extra cycle on a read
    /// whose index crosses a page.
    pub fn has_page_cross_penalty(&self) -> bool {
        matches!(
            self,
            AddressingMode::AbsoluteX
                | AddressingMode::AbsoluteY
                | AddressingMode::DirectIndirectIndexed
        )
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Computes the effective address of the operand of the instruction at the
    /// current program address, for the given addressing mode.
    ///
    /// Pointers are read from the bus, but the operand itself is not. For modes
    /// with no memory operand the program address is returned; for modes whose
    /// operand follows the opcode the address of that operand is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65816::{Address, AddressingMode, CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x00FFFC, &[0x00, 0x80]);
    /// memory.load(0x008000, &[0xBD, 0x00, 0x20]); // LDA $2000,X
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.set_dbr(0x7E);
    /// cpu.set_x(0x10);
    ///
    /// assert_eq!(cpu.effective_address(AddressingMode::AbsoluteX), Address::new(0x7E, 0x2010));
    /// ```
    pub fn effective_address(&mut self, mode: AddressingMode) -> Address {
        self.resolve(mode).0
    }

    /// Resolves the effective address and reports whether the index crossed a
    /// page between the base and final offsets.
    ///
    /// Every pointer and operand byte is read exactly once. Only AbsoluteX,
    /// AbsoluteY and (dp),Y can report a crossing.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> (Address, bool) {
        let address = match mode {
            AddressingMode::Implied
            | AddressingMode::Accumulator
            | AddressingMode::StackImplied
            | AddressingMode::Interrupt => self.program_address(),

            AddressingMode::Immediate
            | AddressingMode::Relative
            | AddressingMode::RelativeLong
            | AddressingMode::BlockMove
            | AddressingMode::StackAbsolute
            | AddressingMode::StackProgramCounterRelative => self.operand_address(),

            AddressingMode::Absolute => Address::new(self.dbr, self.operand_word()),

            AddressingMode::AbsoluteX => {
                let base = Address::new(self.dbr, self.operand_word());
                return indexed(base, self.x);
            }

            AddressingMode::AbsoluteY => {
                let base = Address::new(self.dbr, self.operand_word());
                return indexed(base, self.y);
            }

            AddressingMode::AbsoluteLong => self.operand_long(),

            AddressingMode::AbsoluteLongX => {
                let index = self.x;
                self.operand_long().with_offset_no_wrap(index as i32)
            }

            AddressingMode::AbsoluteIndirect => {
                let pointer = self.operand_word();
                Address::new(self.pbr, self.read_bank0_word(pointer))
            }

            AddressingMode::AbsoluteIndirectLong => {
                let pointer = self.operand_word();
                self.read_bank0_long(pointer)
            }

            AddressingMode::AbsoluteIndexedIndirect => {
                let pointer = Address::new(self.pbr, self.operand_word().wrapping_add(self.x));
                Address::new(self.pbr, self.read_word_in_bank(pointer))
            }

            AddressingMode::Direct | AddressingMode::StackDirectIndirect => {
                let displacement = self.operand_byte();
                self.direct_address(displacement, 0)
            }

            AddressingMode::DirectX => {
                let displacement = self.operand_byte();
                self.direct_address(displacement, self.x)
            }

            AddressingMode::DirectY => {
                let displacement = self.operand_byte();
                self.direct_address(displacement, self.y)
            }

            AddressingMode::DirectIndirect => {
                let displacement = self.operand_byte();
                let pointer = self.direct_address(displacement, 0);
                Address::new(self.dbr, self.read_direct_pointer(pointer))
            }

            AddressingMode::DirectIndirectLong => {
                let displacement = self.operand_byte();
                let pointer = self.direct_address(displacement, 0);
                self.read_bank0_long(pointer.offset)
            }

            AddressingMode::DirectIndexedIndirect => {
                let displacement = self.operand_byte();
                let pointer = self.direct_address(displacement, self.x);
                Address::new(self.dbr, self.read_direct_pointer(pointer))
            }

            AddressingMode::DirectIndirectIndexed => {
                let displacement = self.operand_byte();
                let pointer = self.direct_address(displacement, 0);
                let base = Address::new(self.dbr, self.read_direct_pointer(pointer));
                return indexed(base, self.y);
            }

            AddressingMode::DirectIndirectLongIndexed => {
                let displacement = self.operand_byte();
                let pointer = self.direct_address(displacement, 0);
                let index = self.y;
                self.read_bank0_long(pointer.offset)
                    .with_offset_no_wrap(index as i32)
            }

            AddressingMode::StackRelative => {
                let displacement = self.operand_byte();
                self.stack_relative_address(displacement)
            }

            AddressingMode::StackRelativeIndirectIndexed => {
                let displacement = self.operand_byte();
                let pointer = self.stack_relative_address(displacement);
                let base = Address::new(self.dbr, self.read_bank0_word(pointer.offset));
                let index = self.y;
                base.with_offset_no_wrap(index as i32)
            }
        };

        (address, false)
    }

    /// Returns true if the indexed access of the current instruction crosses a
    /// 256-byte page between its base and final offsets.
    ///
    /// Only AbsoluteX, AbsoluteY and (dp),Y have a page-crossing penalty. Asking
    /// about any other mode is a programming error: it is logged and answered
    /// with `false`. The check reads the operand and any pointer from the bus,
    /// so instruction handlers take the answer from their own resolution of
    /// the operand instead.
    pub fn crosses_page_boundary(&mut self, mode: AddressingMode) -> bool {
        if !mode.has_page_cross_penalty() {
            log::error!("page boundary check requested for {:?}", mode);
            return false;
        }

        self.resolve(mode).1
    }

    /// Direct page address for displacement `dp` plus `index`, always in bank 0.
    pub(crate) fn direct_address(&self, displacement: u8, index: u16) -> Address {
        if self.flags.emulation {
            Address::new(0x00, (displacement as u16).wrapping_add(index) & 0x00FF)
        } else {
            Address::new(
                0x00,
                self.d.wrapping_add(displacement as u16).wrapping_add(index),
            )
        }
    }

    fn stack_relative_address(&self, displacement: u8) -> Address {
        Address::new(0x00, self.stack.pointer().wrapping_add(displacement as u16))
    }

    /// Reads a 16-bit pointer stored in the direct page. In emulation mode the
    /// high byte wraps inside page 0 like a 6502 zero-page pointer.
    fn read_direct_pointer(&mut self, pointer: Address) -> u16 {
        if self.flags.emulation && pointer.offset & 0x00FF == 0x00FF {
            let low = self.memory.read_byte(pointer) as u16;
            let high = self
                .memory
                .read_byte(Address::new(0x00, pointer.offset & 0xFF00)) as u16;
            (high << 8) | low
        } else {
            self.read_bank0_word(pointer.offset)
        }
    }

    /// Reads a little-endian word from bank 0, wrapping at the end of the bank.
    pub(crate) fn read_bank0_word(&mut self, offset: u16) -> u16 {
        self.read_word_in_bank(Address::new(0x00, offset))
    }

    /// Reads a packed 24-bit pointer from bank 0, wrapping at the end of the bank.
    fn read_bank0_long(&mut self, offset: u16) -> Address {
        self.read_pointer_in_bank(Address::new(0x00, offset))
    }
}

/// Indexes `base` without bank wrap, noting whether the 16-bit offset stage
/// moved to another page.
fn indexed(base: Address, index: u16) -> (Address, bool) {
    let crossed =
        Address::offsets_are_on_different_pages(base.offset, base.offset.wrapping_add(index));
    (base.with_offset_no_wrap(index as i32), crossed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load(0x00FFFC, &[0x00, 0x80]);
        memory.load(0x008000, program);
        CPU::new(memory)
    }

    fn native(cpu: &mut CPU<FlatMemory>) {
        cpu.set_emulation(false);
        cpu.set_status(0x00);
    }

    #[test]
    fn test_mode_classification() {
        assert!(AddressingMode::DirectIndirectLongIndexed.is_direct_page());
        assert!(AddressingMode::StackDirectIndirect.is_direct_page());
        assert!(!AddressingMode::StackRelative.is_direct_page());
        assert!(AddressingMode::StackRelative.wraps_in_bank_zero());
        assert!(!AddressingMode::AbsoluteX.wraps_in_bank_zero());
        assert!(AddressingMode::DirectIndirectIndexed.has_page_cross_penalty());
        assert!(!AddressingMode::AbsoluteLongX.has_page_cross_penalty());
    }

    #[test]
    fn test_no_operand_modes_return_program_address() {
        let mut cpu = setup_cpu(&[0xEA]);
        cpu.set_pbr(0x12);
        assert_eq!(
            cpu.effective_address(AddressingMode::Implied),
            Address::new(0x12, 0x8000)
        );
        assert_eq!(
            cpu.effective_address(AddressingMode::Immediate),
            Address::new(0x12, 0x8001)
        );
    }

    #[test]
    fn test_absolute_uses_data_bank() {
        let mut cpu = setup_cpu(&[0xAD, 0x34, 0x12]);
        cpu.set_dbr(0x7E);
        assert_eq!(
            cpu.effective_address(AddressingMode::Absolute),
            Address::new(0x7E, 0x1234)
        );
    }

    #[test]
    fn test_absolute_indexed_carries_into_bank() {
        let mut cpu = setup_cpu(&[0xBD, 0xF0, 0xFF]);
        native(&mut cpu);
        cpu.set_dbr(0x01);
        cpu.set_x(0x0020);
        assert_eq!(
            cpu.effective_address(AddressingMode::AbsoluteX),
            Address::new(0x02, 0x0010)
        );
        assert!(cpu.crosses_page_boundary(AddressingMode::AbsoluteX));
    }

    #[test]
    fn test_absolute_long_indexed() {
        let mut cpu = setup_cpu(&[0xBF, 0x00, 0x10, 0x7F]);
        cpu.set_x(0x05);
        assert_eq!(
            cpu.effective_address(AddressingMode::AbsoluteLongX),
            Address::new(0x7F, 0x1005)
        );
    }

    #[test]
    fn test_direct_page_native_uses_d() {
        let mut cpu = setup_cpu(&[0xB5, 0x10]);
        native(&mut cpu);
        cpu.set_d(0x2000);
        cpu.set_x(0x0004);
        assert_eq!(
            cpu.effective_address(AddressingMode::DirectX),
            Address::new(0x00, 0x2014)
        );
    }

    #[test]
    fn test_direct_page_emulation_wraps_in_page_zero() {
        let mut cpu = setup_cpu(&[0xB5, 0xF0]);
        cpu.set_d(0x2000);
        cpu.set_x(0x20);
        assert_eq!(
            cpu.effective_address(AddressingMode::DirectX),
            Address::new(0x00, 0x0010)
        );
    }

    #[test]
    fn test_direct_indirect_indexed() {
        let mut cpu = setup_cpu(&[0xB1, 0x40]);
        cpu.memory_mut().load(0x000040, &[0xF0, 0x30]);
        cpu.set_dbr(0x05);
        cpu.set_y(0x20);
        assert_eq!(
            cpu.effective_address(AddressingMode::DirectIndirectIndexed),
            Address::new(0x05, 0x3110)
        );
        assert!(cpu.crosses_page_boundary(AddressingMode::DirectIndirectIndexed));
    }

    #[test]
    fn test_direct_indexed_indirect_pointer_wraps_in_zero_page() {
        let mut cpu = setup_cpu(&[0xA1, 0xFE]);
        cpu.set_x(0x01);
        cpu.memory_mut().load(0x0000FF, &[0x34]);
        cpu.memory_mut().load(0x000000, &[0x12]);
        assert_eq!(
            cpu.effective_address(AddressingMode::DirectIndexedIndirect),
            Address::new(0x00, 0x1234)
        );
    }

    #[test]
    fn test_direct_indirect_long_indexed() {
        let mut cpu = setup_cpu(&[0xB7, 0x10]);
        cpu.memory_mut().load(0x000010, &[0xFF, 0xFF, 0x12]);
        cpu.set_y(0x01);
        assert_eq!(
            cpu.effective_address(AddressingMode::DirectIndirectLongIndexed),
            Address::new(0x13, 0x0000)
        );
    }

    #[test]
    fn test_stack_relative_modes() {
        let mut cpu = setup_cpu(&[0xB3, 0x02]);
        native(&mut cpu);
        cpu.set_sp(0x1F00);
        cpu.set_dbr(0x7E);
        cpu.set_y(0x0003);
        cpu.memory_mut().load(0x001F02, &[0x00, 0x40]);

        assert_eq!(
            cpu.effective_address(AddressingMode::StackRelative),
            Address::new(0x00, 0x1F02)
        );
        assert_eq!(
            cpu.effective_address(AddressingMode::StackRelativeIndirectIndexed),
            Address::new(0x7E, 0x4003)
        );
    }

    #[test]
    fn test_jump_indirect_modes() {
        let mut cpu = setup_cpu(&[0x6C, 0x00, 0x30]);
        cpu.set_pbr(0x02);
        cpu.memory_mut().load(0x028000, &[0x6C, 0x00, 0x30]);
        cpu.memory_mut().load(0x003000, &[0x78, 0x56, 0x34]);
        assert_eq!(
            cpu.effective_address(AddressingMode::AbsoluteIndirect),
            Address::new(0x02, 0x5678)
        );
        assert_eq!(
            cpu.effective_address(AddressingMode::AbsoluteIndirectLong),
            Address::new(0x34, 0x5678)
        );
    }

    #[test]
    fn test_absolute_indexed_indirect_reads_program_bank() {
        let mut cpu = setup_cpu(&[0x7C, 0x00, 0x30]);
        cpu.set_x(0x02);
        cpu.memory_mut().load(0x003002, &[0xAA, 0xBB]);
        assert_eq!(
            cpu.effective_address(AddressingMode::AbsoluteIndexedIndirect),
            Address::new(0x00, 0xBBAA)
        );
    }

    #[test]
    fn test_page_cross_check_rejects_other_modes() {
        let mut cpu = setup_cpu(&[0xA5, 0x10]);
        assert!(!cpu.crosses_page_boundary(AddressingMode::Direct));
        assert!(!cpu.crosses_page_boundary(AddressingMode::AbsoluteLongX));
    }
}
