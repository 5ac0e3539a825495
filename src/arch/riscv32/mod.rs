use core::arch::{asm, naked_asm};

use crate::context::GlobalDataBase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Arch;
impl super::ArchImpl for Arch {
    unsafe fn establish_global_data(initial_stack_pointer: usize) -> GlobalDataBase {
        // `_start` loaded gp. Linker relaxation against gp is off, see `.cargo/config.toml`.
        GlobalDataBase::new(initial_stack_pointer)
    }

    fn yield_now() {
        unsafe {
            asm!(
                "li a0, 0",
                "ecall",
                clobber_abi("C")
            );
        }
    }
}

/// Process entry point the kernel jumps to.
///
/// Same contract as the Arm entry, with gp as the global data register and the initial sp in a3.
/// gp no longer holds `__global_pointer$`, so code must not be linked with gp relaxation.
/// # Safety
/// Only the kernel may call this, exactly once, on a fresh process stack.
#[unsafe(naked)]
#[unsafe(no_mangle)]
#[unsafe(link_section = ".start")]
pub unsafe extern "C" fn _start(
    _memory_start: *mut u8,
    _app_heap_break: *mut u8,
    _kernel_memory_break: *mut u8,
) -> ! {
    naked_asm!(
        "mv gp, sp",
        "mv a3, sp",
        "call {rust_start}",
        "unimp",
        rust_start = sym crate::start::rust_start,
    )
}
