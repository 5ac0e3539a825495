use core::fmt::Debug;

use crate::context::GlobalDataBase;

pub trait ArchImpl: Debug + Clone + Copy + Default {
    /// Makes sure the global data register holds the base of the process global data table and
    /// returns that base.
    ///
    /// The kernel places the table immediately above the initial stack, so the base is
    /// `initial_stack_pointer`, the value sp held on entry to `_start`.
    /// # Safety
    /// Must only be called by the trampoline, before any code that may touch global or static
    /// data runs.
    unsafe fn establish_global_data(initial_stack_pointer: usize) -> GlobalDataBase;

    /// Cedes the processor to the kernel. Returns once the process is scheduled again.
    fn yield_now();

    /// Yields to the kernel forever.
    fn park() -> ! {
        loop {
            Self::yield_now();
        }
    }
}


cfg_if::cfg_if! {
    if #[cfg(test)] {
        pub use test::Arch;
    } else if #[cfg(all(target_arch = "arm", target_os = "none"))] {
        mod arm;
        pub use arm::Arch;
    } else if #[cfg(all(target_arch = "riscv32", target_os = "none"))] {
        mod riscv32;
        pub use riscv32::Arch;
    }
}
