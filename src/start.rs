use crate::{Arch, Handoff, ProcessContext, trampoline};

unsafe extern "Rust" {
    // Defined by `entry!` in the application.
    fn __crt0_main(ctx: ProcessContext);
}

/// Takes the kernel handoff and runs the process lifecycle.
/// # Safety
/// Only `_start` may call this, after it has loaded the global data register, passing the
/// initial sp as `initial_stack_pointer`.
pub unsafe extern "C" fn rust_start(
    memory_start: *mut u8,
    app_heap_break: *mut u8,
    kernel_memory_break: *mut u8,
    initial_stack_pointer: usize,
) -> ! {
    let handoff = Handoff::from_kernel(memory_start, app_heap_break, kernel_memory_break);
    // SAFETY: this is the single process entry and nothing has touched global data yet.
    unsafe {
        trampoline::run::<Arch, _, _>(handoff, initial_stack_pointer, |ctx| __crt0_main(ctx))
    }
}
