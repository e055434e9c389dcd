//! Cube match-3 demo runner (default binary).
//!
//! Deals a cube, settles one face through a headless surface and plays the first
//! available move. Settings come from `CUBE_MATCH3_*` variables, then flags.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::tty::IsTty;

use cube_match3::core::CubeConfig;
use cube_match3::demo::{parse_demo_args, run_demo};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let demo = parse_demo_args(&args, CubeConfig::from_env())?;

    let stdout = io::stdout();
    let colored = stdout.is_tty();
    let mut out = stdout.lock();
    run_demo(&demo, colored, &mut out)?;
    out.flush()?;
    Ok(())
}
