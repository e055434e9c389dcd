//! Demo driver: deal a cube, settle one face and play one move.

use std::io::Write;

use anyhow::{anyhow, Result};

use crate::core::matching::available_moves;
use crate::core::{Cube, CubeConfig, HeadlessSurface, SwapOutcome, SwapRule};
use crate::term::{render_face, render_face_colored};
use crate::types::Face;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoArgs {
    pub config: CubeConfig,
    pub face: Face,
}

/// Parse `--seed N`, `--extent N` and `--face X` over a base configuration
pub fn parse_demo_args(args: &[String], base: CubeConfig) -> Result<DemoArgs> {
    let mut config = base;
    let mut face = Face::A;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("demo: missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("demo: invalid --seed value: {}", v))?;
            }
            "--extent" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("demo: missing value for --extent"))?;
                config.extent = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("demo: invalid --extent value: {}", v))?;
            }
            "--face" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("demo: missing value for --face"))?;
                face = Face::from_str(v)
                    .ok_or_else(|| anyhow!("demo: invalid --face value: {}", v))?;
            }
            other => {
                return Err(anyhow!("demo: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(DemoArgs { config, face })
}

/// Run the demo, writing a transcript to `out`
pub fn run_demo(args: &DemoArgs, colored: bool, out: &mut impl Write) -> Result<()> {
    let mut cube = Cube::new(args.config.clone())?;
    let mut surface = HeadlessSurface::new();
    for board in cube.boards() {
        surface.mirror_board(board);
    }

    let face = args.face;
    let show = |cube: &Cube, out: &mut dyn Write| -> Result<()> {
        let board = cube.board(face);
        let text = if colored {
            render_face_colored(board)?
        } else {
            render_face(board)
        };
        write!(out, "{}", text)?;
        Ok(())
    };

    writeln!(out, "dealt with seed {}", args.config.seed)?;
    show(&cube, &mut *out)?;

    cube.board_mut(face).rules_mut().swap_rule = SwapRule::MustCreateMatch;
    let settled = cube.resolve(face, &mut surface)?;
    writeln!(
        out,
        "settled: {} rounds, {} cells cleared{}",
        settled.rounds,
        settled.removed,
        if settled.truncated { " (truncated)" } else { "" }
    )?;

    let moves = available_moves(cube.board(face));
    writeln!(out, "{} moves available", moves.len())?;
    let Some(&(a, b)) = moves.first() else {
        return Ok(());
    };

    match cube.try_swap(face, a, b, &mut surface)? {
        SwapOutcome::Swapped(report) => {
            writeln!(
                out,
                "swapped {} <-> {}: {} rounds, {} cells cleared",
                a, b, report.rounds, report.removed
            )?;
        }
        SwapOutcome::Rejected(reason) => {
            writeln!(out, "swap {} <-> {} rejected: {}", a, b, reason.message())?;
        }
    }
    show(&cube, &mut *out)?;
    Ok(())
}
