use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use eyre::{Context, Result, bail};
use itertools::Itertools;
use magiccube_core::{
    Cube, Move, ScrambleParams, discover_sticker_identities, format_moves, parse_moves,
};
use magiccube_life::{LifeSimulation, NeighborGraph, StepOutcome};
use magiccube_strip::{LineProtocolSink, StripController};
use serde::Serialize;

use crate::prefs::Preferences;

/// MagicCube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// YAML preferences file to layer over the defaults.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves to a solved cube and print the color of each sticker slot.
    State {
        /// Cube size (overrides preferences).
        #[arg(short = 'n', long)]
        size: Option<usize>,
        /// Moves such as `R U' 2F2`.
        moves: Vec<String>,
    },
    /// Scramble a cube, print the moves and resulting state, and check that
    /// undoing the scramble solves it again.
    Scramble {
        /// Cube size (overrides preferences).
        #[arg(short = 'n', long)]
        size: Option<usize>,
        /// Random seed. A new one is generated if omitted.
        #[arg(short, long)]
        seed: Option<String>,
        /// Number of moves (overrides preferences).
        #[arg(short, long)]
        length: Option<u32>,
        /// Twist inner layers too.
        #[arg(long)]
        all_layers: bool,
    },
    /// Discover which piece each sticker slot of a 3x3x3 belongs to and print
    /// the result as JSON.
    Discover,
    /// Run the Game of Life on the sticker surface and print live cells.
    Life {
        /// Random seed for the initial population.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Number of ticks to run.
        #[arg(short, long, default_value_t = 20)]
        ticks: u32,
    },
    /// Send cube states to an LED strip using the Arduino line protocol.
    Strip {
        /// Number of LEDs (overrides preferences).
        #[arg(long)]
        leds: Option<usize>,
        /// Device or file to write to, use '-' for stdout.
        #[arg(short, long, value_parser, default_value = "-")]
        output: clio::Output,
        /// Show a rainbow before the cube.
        #[arg(long)]
        rainbow: bool,
        /// Moves to apply, sending the state after each one.
        moves: Vec<String>,
    },
    /// Print the effective preferences as YAML.
    Prefs,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref())?;

    match args.subcommand {
        Subcommand::State { size, moves } => {
            let mut cube = prefs.new_cube(size)?;
            cube.apply_moves(&parse_move_args(&moves)?)?;
            println!("{}", format_moves(cube.history().moves()));
            println!("{}", format_state(&cube));
            Ok(())
        }

        Subcommand::Scramble {
            size,
            seed,
            length,
            all_layers,
        } => {
            let mut cube = prefs.new_cube(size)?;
            let params = ScrambleParams {
                seed: seed.unwrap_or_else(ScrambleParams::random_seed),
                length: length.unwrap_or(prefs.scramble.length),
                all_layers: all_layers || prefs.scramble.all_layers,
            };
            let moves = cube.scramble(&params)?;
            println!("seed: {}", params.seed);
            println!("moves: {}", format_moves(&moves));
            println!("state: {}", format_state(&cube));

            cube.undo_all()?;
            if !cube.is_reset() {
                bail!("undoing the scramble did not restore the cube");
            }
            Ok(())
        }

        Subcommand::Discover => {
            let mut cube = prefs.new_cube(Some(3))?;
            let identities = discover_sticker_identities(&mut cube)?;
            write_json_output(&identities)
        }

        Subcommand::Life { seed, ticks } => {
            let cube = prefs.new_cube(None)?;
            let graph = NeighborGraph::from_cube(&cube);
            let mut sim = LifeSimulation::new(graph, seed, prefs.life.max_ticks);
            print_live_cells(&sim);
            for _ in 0..ticks {
                match sim.step() {
                    StepOutcome::Ticked => (),
                    outcome => println!("{outcome:?}; restarting"),
                }
                print_live_cells(&sim);
            }
            Ok(())
        }

        Subcommand::Strip {
            leds,
            output,
            rainbow,
            moves,
        } => {
            let moves = parse_move_args(&moves)?;
            let led_count = leds.unwrap_or(prefs.strip.led_count);
            let sink = LineProtocolSink::write_only(output);
            let mut strip = StripController::new(sink, led_count)?;
            if rainbow {
                strip.rainbow(0)?;
            }

            let mut cube = prefs.new_cube(None)?;
            let palette = prefs.strip_palette();
            strip.show_cube_state(cube.color_state(), &palette)?;

            let strip = Rc::new(RefCell::new(strip));
            let error = Rc::new(RefCell::new(None));
            cube.set_on_change({
                let strip = Rc::clone(&strip);
                let error = Rc::clone(&error);
                move |state| {
                    if let Err(e) = strip.borrow_mut().show_cube_state(state, &palette) {
                        log::error!("error updating LED strip: {e}");
                        error.borrow_mut().get_or_insert(e);
                    }
                }
            });

            for mv in moves {
                cube.apply_move(mv)?;
                if let Some(e) = error.borrow_mut().take() {
                    return Err(e).wrap_err_with(|| format!("error sending state after {mv}"));
                }
            }
            cube.clear_on_change();
            Ok(())
        }

        Subcommand::Prefs => {
            print!("{}", prefs.to_yaml()?);
            Ok(())
        }
    }
}

fn parse_move_args(args: &[String]) -> Result<Vec<Move>> {
    parse_moves(&args.join(" ")).wrap_err("error parsing moves")
}

fn format_state(cube: &Cube) -> String {
    cube.color_state().iter().join(" ")
}

fn print_live_cells(sim: &LifeSimulation) {
    let cells = sim
        .live()
        .iter()
        .map(|(cell, age)| format!("{cell}:{age}"))
        .join(" ");
    println!("{} {cells}", sim.ticks());
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .wrap_err("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
