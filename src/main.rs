//! Voxel Structure Matching Trainer
//!
//! Command-line front end for the spatial-reasoning training core: generates
//! random-walk target structures, checks a built structure against a target
//! under all 24 cube rotations, prints the cell-level diff, and logs scored
//! sessions to disk.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use voxmatch::display::{format_diff, format_structure};
use voxmatch::generator::generate_structure;
use voxmatch::rotation::{rotate_structure, NUM_ROTATIONS, ROTATIONS};
use voxmatch::session::{self, compute_score, GameMode, SessionRecord};
use voxmatch::{check_match, compute_diff, MatchResult, Structure};

/// Checks voxel structures for congruence under cube rotations.
#[derive(Parser)]
#[command(name = "voxmatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a random target structure and print it.
    Generate {
        /// Number of voxels in the target.
        #[arg(long, default_value_t = 8)]
        size: usize,
        /// Seed for a reproducible target.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a target, rebuild it from another orientation, and run the
    /// full check/diff/score pipeline.
    Demo {
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check a built structure against a target and log the session.
    Check {
        /// Text file with the built structure, one `x y z` triple per line.
        #[arg(long)]
        built: PathBuf,
        /// Text file with the target structure.
        #[arg(long)]
        target: PathBuf,
        /// Build time in seconds, feeds the score's time bonus.
        #[arg(long, default_value_t = 0)]
        seconds: u64,
        /// Score the round as timed instead of practice.
        #[arg(long)]
        timed: bool,
    },
    /// Show the saved session log.
    Sessions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Generate { size, seed }) => {
            run_generate(size, seed);
            ExitCode::SUCCESS
        }
        Some(Command::Demo { size, seed }) => run_demo(size, seed),
        Some(Command::Check {
            built,
            target,
            seconds,
            timed,
        }) => run_check(&built, &target, seconds, timed),
        Some(Command::Sessions) => {
            run_sessions();
            ExitCode::SUCCESS
        }
        // default: a quick demo round
        None => run_demo(8, None),
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Generates and prints a target structure.
fn run_generate(size: usize, seed: Option<u64>) {
    let target = generate_structure(size, &mut rng_from(seed));
    print!("{}", format_structure(&target));
    println!();
    println!("# coordinates, one voxel per line");
    let mut voxels: Vec<_> = target.iter().collect();
    voxels.sort();
    for v in voxels {
        println!("{} {} {}", v.x, v.y, v.z);
    }
}

/// Runs the whole pipeline against a generated target: once with an exact
/// rebuild seen from a random orientation, once with a deliberately
/// mistaken one.
fn run_demo(size: usize, seed: Option<u64>) -> ExitCode {
    let mut rng = rng_from(seed);
    let target = generate_structure(size, &mut rng);
    println!("Target:");
    print!("{}", format_structure(&target));

    let rotation_index = rng.gen_range(0..NUM_ROTATIONS);
    let built = rotate_structure(&target, &ROTATIONS[rotation_index]);
    println!("\nBuilt (target seen from orientation {rotation_index}):");
    print!("{}", format_structure(&built));
    if report_round(&built, &target, Duration::from_secs(12)).is_err() {
        return ExitCode::FAILURE;
    }

    // knock one voxel out and add a stray neighbour for a near miss
    let mut mistaken = built.clone();
    let sacrifice = mistaken.iter().next().copied();
    if let Some(sacrifice) = sacrifice {
        mistaken.remove(&sacrifice);
        mistaken.insert(sacrifice.translated(0, 0, size as i32 + 1));
    }
    println!("\nBuilt (with a misplaced voxel):");
    print!("{}", format_structure(&mistaken));
    if report_round(&mistaken, &target, Duration::from_secs(12)).is_err() {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Checks one round and prints the outcome, diff, and score.
fn report_round(
    built: &Structure,
    target: &Structure,
    time_taken: Duration,
) -> Result<MatchResult, ()> {
    let result = match check_match(built, target) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Check failed: {e}");
            return Err(());
        }
    };
    let diff = match compute_diff(built, target, result.rotation_index) {
        Ok(diff) => diff,
        Err(e) => {
            eprintln!("Diff failed: {e}");
            return Err(());
        }
    };

    if result.matched {
        println!("\nMatched (rotation {})", result.rotation_index);
    } else {
        println!(
            "\nNo match; closest orientation is rotation {}",
            result.rotation_index
        );
    }
    print!("{}", format_diff(&diff));
    println!(
        "Correct {}, extra {}, missing {}; score {}",
        result.correct_count,
        result.extra_count,
        result.missing_count,
        compute_score(&result, time_taken)
    );

    Ok(result)
}

/// Checks two structure files against each other and appends a session
/// record.
fn run_check(built_path: &PathBuf, target_path: &PathBuf, seconds: u64, timed: bool) -> ExitCode {
    let built = match session::read_structure(built_path) {
        Ok(structure) => structure,
        Err(e) => {
            eprintln!("Failed to read {}: {}", built_path.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let target = match session::read_structure(target_path) {
        Ok(structure) => structure,
        Err(e) => {
            eprintln!("Failed to read {}: {}", target_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let time_taken = Duration::from_secs(seconds);
    let Ok(result) = report_round(&built, &target, time_taken) else {
        return ExitCode::FAILURE;
    };

    let record = SessionRecord {
        mode: if timed {
            GameMode::Timed
        } else {
            GameMode::Practice
        },
        time_taken_ms: time_taken.as_millis() as u64,
        mistakes: (result.extra_count + result.missing_count) as u32,
        score: compute_score(&result, time_taken),
    };
    if let Err(e) = session::append(record) {
        eprintln!("Failed to save session: {e}");
    } else {
        println!("Logged {} session", record.mode.label());
    }

    ExitCode::SUCCESS
}

/// Prints the saved session log.
fn run_sessions() {
    match session::load_all() {
        Some(records) => {
            println!("{} sessions", records.len());
            for (i, record) in records.iter().enumerate() {
                println!(
                    "Session {}: mode={} time={}ms mistakes={} score={}",
                    i + 1,
                    record.mode.label(),
                    record.time_taken_ms,
                    record.mistakes,
                    record.score
                );
            }
        }
        None => {
            eprintln!("No sessions.bin found. Run 'voxmatch check' first.");
        }
    }
}
