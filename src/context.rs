use core::marker::PhantomData;

use crate::arch::ArchImpl;

/// The addresses the kernel hands a process exactly once, at start.
///
/// None of them are read or validated here. They are kept for later initialization stages.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Handoff {
    memory_start: usize,
    app_heap_break: usize,
    kernel_memory_break: usize,
}
impl Handoff {
    pub const fn new(
        memory_start: usize,
        app_heap_break: usize,
        kernel_memory_break: usize,
    ) -> Self {
        Handoff {
            memory_start,
            app_heap_break,
            kernel_memory_break,
        }
    }

    /// Builds the handoff from the raw argument registers of `_start`.
    pub fn from_kernel(
        memory_start: *mut u8,
        app_heap_break: *mut u8,
        kernel_memory_break: *mut u8,
    ) -> Self {
        Handoff::new(
            memory_start.expose_provenance(),
            app_heap_break.expose_provenance(),
            kernel_memory_break.expose_provenance(),
        )
    }

    /// Start of the process memory region.
    pub const fn memory_start(&self) -> usize {
        self.memory_start
    }

    /// Current end of the heap-growable region.
    pub const fn app_heap_break(&self) -> usize {
        self.app_heap_break
    }

    /// End of the memory the kernel currently grants the process.
    pub const fn kernel_memory_break(&self) -> usize {
        self.kernel_memory_break
    }
}

/// Base address of the process global data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalDataBase(usize);
impl GlobalDataBase {
    #[cfg(any(
        test,
        all(target_os = "none", any(target_arch = "arm", target_arch = "riscv32"))
    ))]
    pub(crate) const fn new(addr: usize) -> Self {
        GlobalDataBase(addr)
    }
}
impl From<GlobalDataBase> for usize {
    fn from(val: GlobalDataBase) -> Self {
        val.0
    }
}

/// Proof that the process runtime is initialized.
///
/// Only the trampoline creates one, after the global data base is established, and moves it into
/// the application entry routine. It stays on the single execution context it was created on.
#[derive(Debug)]
pub struct ProcessContext {
    handoff: Handoff,
    global_data: GlobalDataBase,
    _local: PhantomData<*mut ()>,
}
impl ProcessContext {
    /// Establishes the global data base and takes ownership of the handoff.
    /// # Safety
    /// Must be called once, by the trampoline, before any code touches global or static data.
    /// `initial_stack_pointer` is sp as the kernel handed it to `_start`.
    pub(crate) unsafe fn establish<A: ArchImpl>(
        handoff: Handoff,
        initial_stack_pointer: usize,
    ) -> Self {
        let global_data = unsafe { A::establish_global_data(initial_stack_pointer) };
        ProcessContext {
            handoff,
            global_data,
            _local: PhantomData,
        }
    }

    pub fn handoff(&self) -> &Handoff {
        &self.handoff
    }

    pub fn global_data_base(&self) -> GlobalDataBase {
        self.global_data
    }
}
