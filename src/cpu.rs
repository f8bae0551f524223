//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 65816 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (C, seen as A when 8-bit), index registers (X, Y),
//!   direct page (D), data bank (DBR), program bank (PBR)
//! - **Program counter** (PC): 16-bit offset inside the program bank
//! - **Stack**: 16-bit pointer in bank 0, confined to page 1 in emulation mode
//! - **Status flags**: N, V, M, X, D, I, Z, C plus E (individual bool fields)
//! - **Pins**: RES, RDY, IRQ, NMI, ABORT, sampled at instruction boundaries
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: service one pending interrupt, or execute one instruction
//! - `run_for_cycles()`: step until the cycle budget is exhausted
//!
//! Nothing fails across the step boundary. A step that cannot make progress
//! (reset held, RDY low, waiting, stopped) consumes zero cycles.

use crate::instructions::{
    alu, block_move, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::opcodes::Operation;
use crate::stack::STACK_POINTER_POWER_ON;
use crate::status::bits;
use crate::trace::TraceLine;
use crate::{
    Address, AddressingMode, CpuHandle, MemoryBus, OpcodeMetadata, Stack, StatusFlags,
    VectorTables, OPCODE_TABLE,
};

/// Construction-time settings for a [`CPU`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    /// Bank-0 locations of the interrupt vectors
    pub vectors: VectorTables,

    /// Emit one trace line per executed instruction through `log::trace!`
    pub trace: bool,
}

/// Interrupt sources, hardware and software.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// ABORT pin
    Abort,
    /// Non-maskable interrupt pin
    Nmi,
    /// Maskable interrupt request line
    Irq,
    /// BRK instruction
    Brk,
    /// COP instruction
    Cop,
}

impl Interrupt {
    fn vector(&self, tables: &VectorTables, emulation: bool) -> u16 {
        let table = tables.for_mode(emulation);
        match self {
            Interrupt::Abort => table.abort,
            Interrupt::Nmi => table.nmi,
            Interrupt::Irq => table.irq,
            Interrupt::Brk => tables.brk(emulation),
            Interrupt::Cop => table.cop,
        }
    }
}

/// Input pin levels. `true` means asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pins {
    reset: bool,
    ready: bool,
    irq: bool,
    nmi: bool,
    abort: bool,
}

impl Default for Pins {
    fn default() -> Self {
        Self {
            reset: false,
            ready: true,
            irq: false,
            nmi: false,
            abort: false,
        }
    }
}

/// 65816 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags, program
/// counter, stack and cycle counter. It is generic over the memory implementation via
/// the `MemoryBus` trait.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
///
/// // Create memory and set the emulation-mode reset vector
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]); // PC = $8000
///
/// // Initialize CPU - runs the reset sequence
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0x01FF);
/// assert!(cpu.emulation());
/// assert!(cpu.flags().irq_disable);
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator (C). The low byte is A, the high byte is B.
    pub(crate) a: u16,

    /// X index register
    pub(crate) x: u16,

    /// Y index register
    pub(crate) y: u16,

    /// Direct page register
    pub(crate) d: u16,

    /// Data bank register
    pub(crate) dbr: u8,

    /// Program bank register
    pub(crate) pbr: u8,

    /// Program counter (offset of next instruction in the program bank)
    pub(crate) pc: u16,

    /// Stack pointer and push/pull logic
    pub(crate) stack: Stack,

    /// Processor status
    pub(crate) flags: StatusFlags,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Interrupt vector locations
    pub(crate) vectors: VectorTables,

    /// Parked by WAI until an interrupt line is active
    pub(crate) waiting: bool,

    /// Halted by STP until reset
    pub(crate) stopped: bool,

    pins: Pins,
    nmi_pending: bool,
    abort_pending: bool,
    trace: bool,
    handle: CpuHandle,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and default configuration.
    ///
    /// The CPU is initialized to the 65816 power-on state and then reset:
    /// - Emulation mode, 8-bit accumulator and index registers
    /// - Interrupt disable set, decimal clear
    /// - DBR, PBR and D zero, stack pointer 0x01FF
    /// - Program counter loaded from the emulation reset vector in bank 0
    /// - Cycle counter zero
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with explicit vector tables and trace setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65816::{CpuConfig, FlatMemory, InterruptVectors, VectorTables, CPU};
    ///
    /// let mut emulation = InterruptVectors::EMULATION;
    /// emulation.reset = 0xFFF0;
    ///
    /// let config = CpuConfig {
    ///     vectors: VectorTables { emulation, ..VectorTables::default() },
    ///     trace: false,
    /// };
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x00FFF0, &[0x34, 0x12]);
    ///
    /// let cpu = CPU::with_config(memory, config);
    /// assert_eq!(cpu.pc(), 0x1234);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0x0000,
            x: 0x0000,
            y: 0x0000,
            d: 0x0000,
            dbr: 0x00,
            pbr: 0x00,
            pc: 0x0000,
            stack: Stack::new(STACK_POINTER_POWER_ON, true),
            flags: StatusFlags::default(),
            cycles: 0,
            memory,
            vectors: config.vectors,
            waiting: false,
            stopped: false,
            pins: Pins::default(),
            nmi_pending: false,
            abort_pending: false,
            trace: config.trace,
            handle: CpuHandle::new(),
        };
        cpu.reset();
        cpu
    }

    /// Runs the reset sequence.
    ///
    /// Forces emulation mode with 8-bit registers, clears the high bytes of X
    /// and Y, re-homes the stack to page 1, clears DBR, PBR and D, and loads PC
    /// from the emulation reset vector. A and the cycle counter are preserved.
    pub fn reset(&mut self) {
        self.flags.emulation = true;
        self.flags.accumulator_width = true;
        self.flags.index_width = true;
        self.flags.irq_disable = true;
        self.flags.decimal = false;
        self.flags.break_flag = false;
        self.normalize_index_registers();
        self.stack.set_emulation(true);

        self.dbr = 0x00;
        self.pbr = 0x00;
        self.d = 0x0000;
        self.pc = self.read_bank0_word(self.vectors.emulation.reset);

        self.waiting = false;
        self.stopped = false;
        self.nmi_pending = false;
        self.abort_pending = false;

        log::debug!("reset, PC={}", self.program_address());
    }

    /// Services one pending interrupt or executes one instruction.
    ///
    /// Interrupt lines are sampled first, in priority order ABORT > NMI > IRQ.
    /// IRQ is level-triggered and masked by the I flag; NMI and ABORT are
    /// latched on their rising edge. A step that enters an interrupt handler
    /// does not also execute an instruction.
    ///
    /// # Returns
    ///
    /// The number of cycles consumed. Zero when reset is held, RDY is low, the
    /// core is stopped, or it is waiting with no interrupt line active.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65816::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x00FFFC, &[0x00, 0x10]);
    /// memory.load(0x001000, &[0xA9, 0x42]); // LDA #$42
    ///
    /// let mut cpu = CPU::new(memory);
    /// assert_eq!(cpu.step(), 2);
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.pc(), 0x1002);
    /// ```
    pub fn step(&mut self) -> u64 {
        if self.pins.reset || !self.pins.ready || self.stopped {
            return 0;
        }

        let start_cycles = self.cycles;
        let irq_line = self.pins.irq || self.memory.irq_active();

        if self.waiting {
            if !(self.abort_pending || self.nmi_pending || irq_line) {
                return 0;
            }
            self.waiting = false;
        }

        if self.abort_pending {
            self.abort_pending = false;
            self.service_interrupt(Interrupt::Abort, self.pc);
        } else if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(Interrupt::Nmi, self.pc);
        } else if irq_line && !self.flags.irq_disable {
            self.service_interrupt(Interrupt::Irq, self.pc);
        } else {
            let opcode = self.memory.read_byte(self.program_address());
            if self.trace {
                log::trace!("{}", TraceLine::capture(self));
            }
            self.execute(opcode);
        }

        self.handle.publish_cycles(self.cycles);
        self.cycles - start_cycles
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Steps until the cycle budget is spent, the core stops making progress
    /// (waiting, stopped, held in reset or not ready), or the [`CpuHandle`] is
    /// paused. While paused, one pending single-step request is honored.
    /// Returns the actual number of cycles consumed, which may slightly exceed
    /// the budget due to instruction granularity.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65816::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x00FFFC, &[0x00, 0x80]);
    /// memory.load(0x008000, &[0xEA; 16]); // NOPs
    ///
    /// let mut cpu = CPU::new(memory);
    /// assert_eq!(cpu.run_for_cycles(10), 10);
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles.saturating_add(cycle_budget);

        while self.cycles < target_cycles {
            if self.handle.is_paused() {
                if !self.handle.take_step_request() {
                    break;
                }
                if self.step() == 0 {
                    break;
                }
                continue;
            }

            if self.step() == 0 {
                break;
            }
        }

        self.cycles - start_cycles
    }

    /// Sets the program bank and counter, as an external `sys`-style call does.
    ///
    /// Also wakes a core parked by WAI.
    pub fn jump(&mut self, address: Address) {
        self.pbr = address.bank;
        self.pc = address.offset;
        self.waiting = false;
    }

    fn execute(&mut self, opcode: u8) {
        let metadata = &OPCODE_TABLE[opcode as usize];

        match metadata.operation {
            Operation::Adc => alu::execute_adc(self, opcode),
            Operation::Sbc => alu::execute_sbc(self, opcode),
            Operation::And => alu::execute_and(self, opcode),
            Operation::Ora => alu::execute_ora(self, opcode),
            Operation::Eor => alu::execute_eor(self, opcode),
            Operation::Cmp => alu::execute_cmp(self, opcode),
            Operation::Cpx => alu::execute_cpx(self, opcode),
            Operation::Cpy => alu::execute_cpy(self, opcode),
            Operation::Bit => alu::execute_bit(self, opcode),
            Operation::Tsb => alu::execute_tsb(self, opcode),
            Operation::Trb => alu::execute_trb(self, opcode),

            Operation::Bcc => branches::execute_bcc(self, opcode),
            Operation::Bcs => branches::execute_bcs(self, opcode),
            Operation::Beq => branches::execute_beq(self, opcode),
            Operation::Bne => branches::execute_bne(self, opcode),
            Operation::Bmi => branches::execute_bmi(self, opcode),
            Operation::Bpl => branches::execute_bpl(self, opcode),
            Operation::Bvc => branches::execute_bvc(self, opcode),
            Operation::Bvs => branches::execute_bvs(self, opcode),
            Operation::Bra => branches::execute_bra(self, opcode),
            Operation::Brl => branches::execute_brl(self, opcode),

            Operation::Asl => shifts::execute_asl(self, opcode),
            Operation::Lsr => shifts::execute_lsr(self, opcode),
            Operation::Rol => shifts::execute_rol(self, opcode),
            Operation::Ror => shifts::execute_ror(self, opcode),

            Operation::Lda => load_store::execute_lda(self, opcode),
            Operation::Ldx => load_store::execute_ldx(self, opcode),
            Operation::Ldy => load_store::execute_ldy(self, opcode),
            Operation::Sta => load_store::execute_sta(self, opcode),
            Operation::Stx => load_store::execute_stx(self, opcode),
            Operation::Sty => load_store::execute_sty(self, opcode),
            Operation::Stz => load_store::execute_stz(self, opcode),

            Operation::Inc => inc_dec::execute_inc(self, opcode),
            Operation::Dec => inc_dec::execute_dec(self, opcode),
            Operation::Inx => inc_dec::execute_inx(self, opcode),
            Operation::Iny => inc_dec::execute_iny(self, opcode),
            Operation::Dex => inc_dec::execute_dex(self, opcode),
            Operation::Dey => inc_dec::execute_dey(self, opcode),

            Operation::Jmp => control::execute_jmp(self, opcode),
            Operation::Jml => control::execute_jml(self, opcode),
            Operation::Jsr => control::execute_jsr(self, opcode),
            Operation::Jsl => control::execute_jsl(self, opcode),
            Operation::Rts => control::execute_rts(self, opcode),
            Operation::Rtl => control::execute_rtl(self, opcode),
            Operation::Rti => control::execute_rti(self, opcode),
            Operation::Brk => control::execute_brk(self, opcode),
            Operation::Cop => control::execute_cop(self, opcode),
            Operation::Nop => control::execute_nop(self, opcode),
            Operation::Wdm => control::execute_wdm(self, opcode),
            Operation::Wai => control::execute_wai(self, opcode),
            Operation::Stp => control::execute_stp(self, opcode),

            Operation::Pha => stack::execute_pha(self, opcode),
            Operation::Phx => stack::execute_phx(self, opcode),
            Operation::Phy => stack::execute_phy(self, opcode),
            Operation::Pla => stack::execute_pla(self, opcode),
            Operation::Plx => stack::execute_plx(self, opcode),
            Operation::Ply => stack::execute_ply(self, opcode),
            Operation::Php => stack::execute_php(self, opcode),
            Operation::Plp => stack::execute_plp(self, opcode),
            Operation::Phb => stack::execute_phb(self, opcode),
            Operation::Plb => stack::execute_plb(self, opcode),
            Operation::Phd => stack::execute_phd(self, opcode),
            Operation::Pld => stack::execute_pld(self, opcode),
            Operation::Phk => stack::execute_phk(self, opcode),
            Operation::Pea => stack::execute_pea(self, opcode),
            Operation::Pei => stack::execute_pei(self, opcode),
            Operation::Per => stack::execute_per(self, opcode),

            Operation::Clc => flags::execute_clc(self, opcode),
            Operation::Sec => flags::execute_sec(self, opcode),
            Operation::Cli => flags::execute_cli(self, opcode),
            Operation::Sei => flags::execute_sei(self, opcode),
            Operation::Cld => flags::execute_cld(self, opcode),
            Operation::Sed => flags::execute_sed(self, opcode),
            Operation::Clv => flags::execute_clv(self, opcode),
            Operation::Rep => flags::execute_rep(self, opcode),
            Operation::Sep => flags::execute_sep(self, opcode),
            Operation::Xce => flags::execute_xce(self, opcode),

            Operation::Tax => transfer::execute_tax(self, opcode),
            Operation::Tay => transfer::execute_tay(self, opcode),
            Operation::Txa => transfer::execute_txa(self, opcode),
            Operation::Tya => transfer::execute_tya(self, opcode),
            Operation::Tsx => transfer::execute_tsx(self, opcode),
            Operation::Txs => transfer::execute_txs(self, opcode),
            Operation::Txy => transfer::execute_txy(self, opcode),
            Operation::Tyx => transfer::execute_tyx(self, opcode),
            Operation::Tcd => transfer::execute_tcd(self, opcode),
            Operation::Tdc => transfer::execute_tdc(self, opcode),
            Operation::Tcs => transfer::execute_tcs(self, opcode),
            Operation::Tsc => transfer::execute_tsc(self, opcode),
            Operation::Xba => transfer::execute_xba(self, opcode),

            Operation::Mvn => block_move::execute_mvn(self, opcode),
            Operation::Mvp => block_move::execute_mvp(self, opcode),
        }
    }

    /// Pushes the interrupt frame and vectors through the handler for `kind`.
    ///
    /// Native mode pushes PBR, PC and P (4 bytes); emulation mode pushes PC and
    /// P (3 bytes). In emulation mode the pushed P has bit 4 set only for BRK.
    pub(crate) fn service_interrupt(&mut self, kind: Interrupt, return_pc: u16) {
        let emulation = self.flags.emulation;

        if !emulation {
            self.stack.push_byte(&mut self.memory, self.pbr);
        }
        self.stack.push_word(&mut self.memory, return_pc);

        let mut status = self.flags.register_value();
        if emulation {
            if kind == Interrupt::Brk {
                status |= bits::X;
            } else {
                status &= !bits::X;
            }
        }
        self.stack.push_byte(&mut self.memory, status);

        self.flags.irq_disable = true;
        self.flags.decimal = false;
        self.pbr = 0x00;

        let vector = kind.vector(&self.vectors, emulation);
        self.pc = self.read_bank0_word(vector);
        self.cycles += if emulation { 7 } else { 8 };

        log::debug!(
            "{:?} entered via ${:04X} in {} mode, handler {}",
            kind,
            vector,
            if emulation { "emulation" } else { "native" },
            self.program_address()
        );
    }

    // ========== Instruction Helpers ==========

    /// Address of the opcode byte of the current instruction.
    pub(crate) fn program_address(&self) -> Address {
        Address::new(self.pbr, self.pc)
    }

    /// Address of the first operand byte. Wraps inside the program bank.
    pub(crate) fn operand_address(&self) -> Address {
        self.program_address().with_offset_wrap(1)
    }

    pub(crate) fn operand_byte(&mut self) -> u8 {
        self.memory.read_byte(self.operand_address())
    }

    pub(crate) fn operand_word(&mut self) -> u16 {
        self.read_word_in_bank(self.operand_address())
    }

    pub(crate) fn operand_long(&mut self) -> Address {
        self.read_pointer_in_bank(self.operand_address())
    }

    /// Reads a little-endian word whose high byte wraps to the start of the
    /// same bank. Goes through the bus word path unless the word straddles
    /// the end of the bank.
    pub(crate) fn read_word_in_bank(&mut self, address: Address) -> u16 {
        if address.offset == 0xFFFF {
            let low = self.memory.read_byte(address) as u16;
            let high = self.memory.read_byte(address.with_offset_wrap(1)) as u16;
            (high << 8) | low
        } else {
            self.memory.read_word(address)
        }
    }

    /// Writes a little-endian word whose high byte wraps to the start of the
    /// same bank.
    pub(crate) fn store_word_in_bank(&mut self, address: Address, value: u16) {
        if address.offset == 0xFFFF {
            self.memory.store_byte(address, value as u8);
            self.memory
                .store_byte(address.with_offset_wrap(1), (value >> 8) as u8);
        } else {
            self.memory.store_word(address, value);
        }
    }

    /// Reads a packed 24-bit pointer (offset low, offset high, bank) that
    /// wraps inside the bank of `address`.
    pub(crate) fn read_pointer_in_bank(&mut self, address: Address) -> Address {
        if address.offset <= 0xFFFD {
            return self.memory.read_address_at(address);
        }
        let offset = self.read_word_in_bank(address);
        let bank = self.memory.read_byte(address.with_offset_wrap(2));
        Address::new(bank, offset)
    }

    /// Advances PC past an instruction of `size` bytes, wrapping in the bank.
    pub(crate) fn advance_pc(&mut self, size: u16) {
        self.pc = self.pc.wrapping_add(size);
    }

    /// Advances PC past the current instruction as encoded under the current flags.
    pub(crate) fn finish_instruction(&mut self, metadata: &OpcodeMetadata) {
        let size = metadata.instruction_size(&self.flags);
        self.advance_pc(size);
    }

    /// Reads an 8- or 16-bit data operand at `address`.
    ///
    /// 16-bit operands of the direct page and stack-relative modes wrap at the
    /// end of bank 0; all others carry into the next bank.
    pub(crate) fn read_data(&mut self, address: Address, mode: AddressingMode, is_8bit: bool) -> u16 {
        if is_8bit {
            self.memory.read_byte(address) as u16
        } else if mode.wraps_in_bank_zero() {
            self.read_word_in_bank(address)
        } else {
            self.memory.read_word(address)
        }
    }

    /// Writes an 8- or 16-bit data operand at `address`.
    pub(crate) fn write_data(
        &mut self,
        address: Address,
        mode: AddressingMode,
        value: u16,
        is_8bit: bool,
    ) {
        if is_8bit {
            self.memory.store_byte(address, value as u8);
        } else if mode.wraps_in_bank_zero() {
            self.store_word_in_bank(address, value);
        } else {
            self.memory.store_word(address, value);
        }
    }

    /// Reads the operand of the current instruction: the immediate value that
    /// follows the opcode, or the data at the effective address.
    ///
    /// Also returns whether an indexed address crossed a page, for the cycle
    /// penalty.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode, is_8bit: bool) -> (u16, bool) {
        if mode == AddressingMode::Immediate {
            let value = if is_8bit {
                self.operand_byte() as u16
            } else {
                self.operand_word()
            };
            return (value, false);
        }

        let (address, page_crossed) = self.resolve(mode);
        (self.read_data(address, mode, is_8bit), page_crossed)
    }

    /// Accumulator value at its effective width.
    pub(crate) fn accumulator(&self) -> u16 {
        if self.flags.accumulator_is_8bit() {
            self.a & 0x00FF
        } else {
            self.a
        }
    }

    /// Stores into the accumulator at its effective width. In 8-bit mode the
    /// high byte (B) is preserved.
    pub(crate) fn store_accumulator(&mut self, value: u16) {
        if self.flags.accumulator_is_8bit() {
            self.a = (self.a & 0xFF00) | (value & 0x00FF);
        } else {
            self.a = value;
        }
    }

    /// Masks a value to the effective index register width.
    pub(crate) fn index_value(&self, value: u16) -> u16 {
        if self.flags.index_is_8bit() {
            value & 0x00FF
        } else {
            value
        }
    }

    /// Clears the high bytes of X and Y when the index registers are 8-bit.
    pub(crate) fn normalize_index_registers(&mut self) {
        if self.flags.index_is_8bit() {
            self.x &= 0x00FF;
            self.y &= 0x00FF;
        }
    }

    /// Enters or leaves emulation mode. Entering forces 8-bit registers and
    /// moves the stack to page 1.
    pub(crate) fn switch_emulation_mode(&mut self, emulation: bool) {
        self.flags.emulation = emulation;
        if emulation {
            self.flags.accumulator_width = true;
            self.flags.index_width = true;
        }
        self.normalize_index_registers();
        self.stack.set_emulation(emulation);
    }

    /// One extra cycle for a 16-bit operation.
    pub(crate) fn width_penalty(&self, is_8bit: bool) -> u64 {
        if is_8bit {
            0
        } else {
            1
        }
    }

    /// One extra cycle for direct-page modes when the low byte of D is nonzero.
    pub(crate) fn direct_page_penalty(&self, mode: AddressingMode) -> u64 {
        if !self.flags.emulation && mode.is_direct_page() && self.d & 0x00FF != 0 {
            1
        } else {
            0
        }
    }

    // ========== Register Getters ==========

    /// Returns the full 16-bit accumulator (C). In 8-bit mode A is the low byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib65816::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// assert_eq!(cpu.a(), 0x0000); // Initial value
    /// ```
    pub fn a(&self) -> u16 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u16 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u16 {
        self.y
    }

    /// Returns the direct page register.
    pub fn d(&self) -> u16 {
        self.d
    }

    /// Returns the data bank register.
    pub fn dbr(&self) -> u8 {
        self.dbr
    }

    /// Returns the program bank register.
    pub fn pbr(&self) -> u8 {
        self.pbr
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer. The stack always lives in bank 0.
    pub fn sp(&self) -> u16 {
        self.stack.pointer()
    }

    /// Returns the status register in its packed 8-bit form.
    ///
    /// Bit layout: native `NVMXDIZC`, emulation `NV1BDIZC`.
    pub fn status(&self) -> u8 {
        self.flags.register_value()
    }

    /// Returns the status flags record.
    pub fn flags(&self) -> &StatusFlags {
        &self.flags
    }

    /// Returns true in emulation mode.
    pub fn emulation(&self) -> bool {
        self.flags.emulation
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns true while WAI is waiting for an interrupt.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Returns true after STP, until the next reset.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Returns true if per-instruction trace lines are being emitted.
    pub fn trace_enabled(&self) -> bool {
        self.trace
    }

    /// Returns a thread-safe handle for observing and pausing this CPU.
    pub fn handle(&self) -> CpuHandle {
        self.handle.clone()
    }

    /// Returns the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns the memory bus for direct manipulation (loading programs, tests).
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Register Setters ==========

    /// Sets the full 16-bit accumulator, regardless of the M flag.
    pub fn set_a(&mut self, value: u16) {
        self.a = value;
    }

    /// Sets X. The value is masked to 8 bits while the index registers are 8-bit.
    pub fn set_x(&mut self, value: u16) {
        self.x = self.index_value(value);
    }

    /// Sets Y. The value is masked to 8 bits while the index registers are 8-bit.
    pub fn set_y(&mut self, value: u16) {
        self.y = self.index_value(value);
    }

    /// Sets the direct page register.
    pub fn set_d(&mut self, value: u16) {
        self.d = value;
    }

    /// Sets the data bank register.
    pub fn set_dbr(&mut self, value: u8) {
        self.dbr = value;
    }

    /// Sets the program bank register.
    pub fn set_pbr(&mut self, value: u8) {
        self.pbr = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer. In emulation mode the high byte stays 0x01.
    pub fn set_sp(&mut self, value: u16) {
        self.stack.relocate(value);
    }

    /// Loads the packed status register, applying width side effects.
    pub fn set_status(&mut self, value: u8) {
        self.flags.set_register_value(value);
        self.normalize_index_registers();
    }

    /// Switches between emulation and native mode, as XCE does.
    pub fn set_emulation(&mut self, emulation: bool) {
        self.switch_emulation_mode(emulation);
    }

    /// Turns the per-instruction trace log on or off.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    // ========== Pins ==========

    /// Drives the RES pin. While asserted, `step` does nothing; releasing it
    /// runs the reset sequence.
    pub fn set_reset_pin(&mut self, asserted: bool) {
        let released = self.pins.reset && !asserted;
        self.pins.reset = asserted;
        if released {
            log::debug!("RES released");
            self.reset();
        }
    }

    /// Drives the RDY pin. While low, `step` does nothing.
    pub fn set_ready_pin(&mut self, ready: bool) {
        self.pins.ready = ready;
    }

    /// Drives the IRQ pin (level-triggered, masked by the I flag).
    pub fn set_irq_pin(&mut self, asserted: bool) {
        self.pins.irq = asserted;
    }

    /// Drives the NMI pin. An interrupt is latched on the rising edge.
    pub fn set_nmi_pin(&mut self, asserted: bool) {
        if asserted && !self.pins.nmi {
            log::debug!("NMI edge latched");
            self.nmi_pending = true;
        }
        self.pins.nmi = asserted;
    }

    /// Drives the ABORT pin. An abort is latched on the rising edge and taken
    /// at the next instruction boundary.
    pub fn set_abort_pin(&mut self, asserted: bool) {
        if asserted && !self.pins.abort {
            log::debug!("ABORT latched");
            self.abort_pending = true;
        }
        self.pins.abort = asserted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load(0x00FFFC, &[0x00, 0x80]);
        CPU::new(memory)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.pbr(), 0x00);
        assert_eq!(cpu.dbr(), 0x00);
        assert_eq!(cpu.d(), 0x0000);
        assert_eq!(cpu.sp(), 0x01FF);
        assert_eq!(cpu.a(), 0x0000);
        assert_eq!(cpu.x(), 0x0000);
        assert_eq!(cpu.y(), 0x0000);
        assert_eq!(cpu.cycles(), 0);

        assert!(cpu.emulation());
        assert!(cpu.flags().irq_disable);
        assert!(!cpu.flags().decimal);
        assert_eq!(cpu.status(), 0x24);
    }

    #[test]
    fn test_reset_restores_emulation_state() {
        let mut cpu = setup_cpu();
        cpu.set_emulation(false);
        cpu.set_status(0x00);
        cpu.set_x(0x1234);
        cpu.set_y(0xABCD);
        cpu.set_sp(0x1FFF);
        cpu.set_d(0x2000);
        cpu.set_dbr(0x7E);
        cpu.set_pbr(0x01);

        cpu.reset();

        assert!(cpu.emulation());
        assert!(cpu.flags().accumulator_is_8bit());
        assert!(cpu.flags().index_is_8bit());
        assert_eq!(cpu.x(), 0x0034);
        assert_eq!(cpu.y(), 0x00CD);
        assert_eq!(cpu.sp(), 0x01FF);
        assert_eq!(cpu.d(), 0x0000);
        assert_eq!(cpu.dbr(), 0x00);
        assert_eq!(cpu.pbr(), 0x00);
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_step_nop() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x008000, &[0xEA]);

        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.cycles(), 2);
        assert_eq!(cpu.handle().cycles(), 2);
    }

    #[test]
    fn test_run_for_cycles() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x008000, &[0xEA; 0x10]);

        let consumed = cpu.run_for_cycles(9);
        assert_eq!(consumed, 10);
        assert_eq!(cpu.pc(), 0x8005);
    }

    #[test]
    fn test_reset_pin_holds_and_releases() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x008000, &[0xEA, 0xEA]);
        cpu.step();
        assert_eq!(cpu.pc(), 0x8001);

        cpu.set_reset_pin(true);
        assert_eq!(cpu.step(), 0);
        assert_eq!(cpu.pc(), 0x8001);

        cpu.set_reset_pin(false);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.step(), 2);
    }

    #[test]
    fn test_ready_pin_low_stalls() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x008000, &[0xEA]);

        cpu.set_ready_pin(false);
        assert_eq!(cpu.step(), 0);
        assert_eq!(cpu.run_for_cycles(100), 0);

        cpu.set_ready_pin(true);
        assert_eq!(cpu.step(), 2);
    }

    #[test]
    fn test_paused_handle_honors_single_step() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x008000, &[0xEA; 4]);
        let handle = cpu.handle();

        handle.pause();
        assert_eq!(cpu.run_for_cycles(100), 0);

        handle.request_step();
        assert_eq!(cpu.run_for_cycles(100), 2);
        assert_eq!(cpu.pc(), 0x8001);
        assert!(!handle.step_pending());

        handle.resume();
        assert_eq!(cpu.run_for_cycles(4), 4);
    }

    #[test]
    fn test_jump_sets_program_address() {
        let mut cpu = setup_cpu();
        cpu.jump(Address::new(0x12, 0x3456));
        assert_eq!(cpu.pbr(), 0x12);
        assert_eq!(cpu.pc(), 0x3456);
    }

    #[test]
    fn test_set_x_respects_index_width() {
        let mut cpu = setup_cpu();
        cpu.set_x(0x1234);
        assert_eq!(cpu.x(), 0x0034);

        cpu.set_emulation(false);
        cpu.set_status(0x00);
        cpu.set_x(0x1234);
        assert_eq!(cpu.x(), 0x1234);

        // Narrowing the index registers drops the high byte
        cpu.set_status(0x10);
        assert_eq!(cpu.x(), 0x0034);
    }

    #[test]
    fn test_trace_toggle_does_not_change_semantics() {
        let mut memory = FlatMemory::new();
        memory.load(0x00FFFC, &[0x00, 0x80]);
        memory.load(0x008000, &[0xA9, 0x42]);
        let mut cpu = CPU::with_config(
            memory,
            CpuConfig {
                trace: true,
                ..CpuConfig::default()
            },
        );
        assert!(cpu.trace_enabled());

        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.a(), 0x0042);

        cpu.set_trace(false);
        assert!(!cpu.trace_enabled());
    }
}
