use std::io;

use rootcompare::demo::{self, DemoCfg, DemoError};

fn main() -> Result<(), DemoError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = DemoCfg::new();
    let stdout = io::stdout();
    demo::run(&cfg, &mut stdout.lock())?;
    Ok(())
}
