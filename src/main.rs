use anyhow::Result;
use gloc::cli::Cli;

fn main() -> Result<()> {
    gloc::logging::init();
    // The first Ctrl-C only raises the interrupt flag so the scratch clone
    // can be removed on the way out; a second one terminates.
    // SAFETY: installed once, before any other thread is spawned.
    let _interrupt = unsafe { gix::interrupt::init_handler(1, || {})? };
    let cli = Cli::parse();
    cli.execute()
}
