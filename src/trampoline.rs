use crate::arch::ArchImpl;
use crate::context::{Handoff, ProcessContext};

/// Runs the process lifecycle on top of `A` and never returns.
///
/// The global data base is established from `initial_stack_pointer` before `main` is called, and
/// `main` receives the resulting [`ProcessContext`]. Whatever `main` returns is discarded and the
/// process then yields to the kernel forever.
/// # Safety
/// Must be entered once per process, from the entry stub, before any code touches global or
/// static data.
pub unsafe fn run<A, F, R>(handoff: Handoff, initial_stack_pointer: usize, main: F) -> !
where
    A: ArchImpl,
    F: FnOnce(ProcessContext) -> R,
{
    let ctx = unsafe { ProcessContext::establish::<A>(handoff, initial_stack_pointer) };
    call_main(main, ctx);
    log::debug!("Application main returned, parking the process.");
    A::park()
}

/// Calls the application routine and drops its result, whatever the type.
#[doc(hidden)]
pub fn call_main<F, R>(main: F, ctx: ProcessContext)
where
    F: FnOnce(ProcessContext) -> R,
{
    let _ = main(ctx);
}
