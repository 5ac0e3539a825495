use core::arch::{asm, naked_asm};

use crate::context::GlobalDataBase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Arch;
impl super::ArchImpl for Arch {
    unsafe fn establish_global_data(initial_stack_pointer: usize) -> GlobalDataBase {
        // `_start` loaded r9 before any compiled code ran. r9 stays reserved as the static base
        // under `relocation-model=ropi-rwpi`, see `.cargo/config.toml`.
        GlobalDataBase::new(initial_stack_pointer)
    }

    fn yield_now() {
        unsafe {
            asm!("svc 0", clobber_abi("C"));
        }
    }
}

/// Process entry point the kernel jumps to.
///
/// Points r9 at the global data table sitting right above the initial stack, then hands the
/// untouched argument registers, plus the initial sp in r3, to the Rust side, which never
/// returns.
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
        "mov r9, sp",
        "mov r3, sp",
        "bl {rust_start}",
        "udf #0",
        rust_start = sym crate::start::rust_start,
    )
}
