#![no_std]
#![no_main]

use crt0::ProcessContext;

fn main(_ctx: ProcessContext) -> i32 {
    0
}

crt0::entry!(main);
