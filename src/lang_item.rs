use crate::arch::Arch;
use crate::arch::ArchImpl;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    log::error!("Panic occurred: {info}");

    Arch::park()
}
