//! # Execution Control
//!
//! The CPU itself is owned by the thread that steps it. The few pieces of state
//! other threads may look at or poke (the cycle counter, pause/resume, the
//! debugger's single-step trigger) live in a [`CpuHandle`] instead, built on
//! atomics so no lock is held across a step.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct SharedState {
    cycles: AtomicU64,
    paused: AtomicBool,
    step_requested: AtomicBool,
}

/// Cloneable, thread-safe view of a running CPU.
///
/// # Examples
///
/// ```
/// use lib65816::{CPU, FlatMemory};
/// use std::thread;
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x00FFFC, &[0x00, 0x80]);
///
/// let mut cpu = CPU::new(memory);
/// let handle = cpu.handle();
///
/// // Another thread pauses the core
/// thread::spawn(move || handle.pause()).join().unwrap();
///
/// // A paused core does not advance
/// assert_eq!(cpu.run_for_cycles(100), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpuHandle {
    shared: Arc<SharedState>,
}

impl CpuHandle {
    /// Creates a handle for a fresh, running core with a zero cycle count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cycle count published after the last completed step.
    pub fn cycles(&self) -> u64 {
        self.shared.cycles.load(Ordering::Acquire)
    }

    /// Stops `run_for_cycles` at the next instruction boundary.
    pub fn pause(&self) {
        self.shared.paused.store(true, Ordering::Release);
    }

    /// Lets `run_for_cycles` execute freely again.
    pub fn resume(&self) {
        self.shared.paused.store(false, Ordering::Release);
    }

    /// Returns true while the core is paused.
    pub fn is_paused(&self) -> bool {
        self.shared.paused.load(Ordering::Acquire)
    }

    /// Allows exactly one instruction to run while paused.
    pub fn request_step(&self) {
        self.shared.step_requested.store(true, Ordering::Release);
    }

    /// Returns true if a single step is waiting to be taken.
    pub fn step_pending(&self) -> bool {
        self.shared.step_requested.load(Ordering::Acquire)
    }

    pub(crate) fn publish_cycles(&self, cycles: u64) {
        self.shared.cycles.store(cycles, Ordering::Release);
    }

    /// Consumes a pending single-step request.
    pub(crate) fn take_step_request(&self) -> bool {
        self.shared.step_requested.swap(false, Ordering::AcqRel)
    }
}
