#![cfg_attr(not(test), no_std)]

pub mod arch;
pub use arch::ArchImpl;
pub mod context;
pub use context::{GlobalDataBase, Handoff, ProcessContext};
pub mod logger;
pub mod trampoline;

cfg_if::cfg_if! {
    if #[cfg(test)] {
        pub use arch::Arch;
    } else if #[cfg(all(target_os = "none", any(target_arch = "arm", target_arch = "riscv32")))] {
        pub use arch::Arch;
        #[doc(hidden)]
        pub mod start;
        #[cfg(feature = "panic-handler")]
        mod lang_item;
    }
}

/// Registers the application entry routine started by `_start`.
///
/// The routine receives the [`ProcessContext`] and may return any value, which is ignored.
/// Once it returns the process parks forever.
///
/// ```ignore
/// fn main(ctx: crt0::ProcessContext) -> i32 {
///     0
/// }
/// crt0::entry!(main);
/// ```
#[macro_export]
macro_rules! entry {
    ($func:path) => {
        #[unsafe(export_name = "__crt0_main")]
        fn __crt0_main(ctx: $crate::ProcessContext) {
            $crate::trampoline::call_main($func, ctx)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::arch::test::{Arch, Event, unwind_payload};
    use crate::{Handoff, ProcessContext};

    const STACK_TOP: usize = 0x2000_8000;

    #[derive(Debug)]
    struct Diverged;

    fn status_main(ctx: ProcessContext) -> i32 {
        assert_eq!(ctx.handoff(), &Handoff::new(0x1000, 0x2000, 0x3000));
        Arch::record(Event::Main);
        42
    }

    crate::entry!(status_main);

    fn diverging_main(_ctx: ProcessContext) -> ! {
        Arch::record(Event::Main);
        std::panic::resume_unwind(Box::new(Diverged))
    }

    fn context() -> ProcessContext {
        let handoff = Handoff::new(0x1000, 0x2000, 0x3000);
        unsafe { ProcessContext::establish::<Arch>(handoff, STACK_TOP) }
    }

    #[test]
    fn entry_runs_routine_and_drops_status() {
        Arch::reset(0);
        let exported: fn(ProcessContext) = __crt0_main;
        exported(context());
        assert_eq!(
            Arch::events(),
            [Event::GlobalDataEstablished(STACK_TOP), Event::Main]
        );
    }

    #[test]
    fn diverging_routine_is_accepted() {
        Arch::reset(0);
        let ctx = context();
        let payload = unwind_payload(|| crate::trampoline::call_main(diverging_main, ctx));
        assert!(payload.is::<Diverged>());
        assert_eq!(
            Arch::events(),
            [Event::GlobalDataEstablished(STACK_TOP), Event::Main]
        );
    }
}
