use crt0::ProcessContext;

fn main_forever(_ctx: ProcessContext) -> ! {
    loop {
        core::hint::spin_loop();
    }
}

crt0::entry!(main_forever);

#[test]
fn entry_exports_diverging_routine() {
    let exported: fn(ProcessContext) = __crt0_main;
    assert!(!(exported as *const ()).is_null());
}
