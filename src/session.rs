//! Session scoring and score-log persistence.
//!
//! Binary format for `sessions.bin` (little endian):
//! - u32: record count
//! - repeat per record:
//!   - u8: mode tag (0 = practice, 1 = timed)
//!   - u64: time taken in milliseconds
//!   - u32: mistakes (extra + missing cells)
//!   - u32: score

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::time::Duration;

use crate::matcher::MatchResult;
use crate::voxel::{Structure, Voxel};

const SESSIONS_BIN: &str = "sessions.bin";
const SESSIONS_TXT: &str = "sessions.txt";

/// Points per correctly placed voxel.
const POINTS_PER_CORRECT: u32 = 10;
/// Penalty per extraneous or missing voxel.
const MISTAKE_PENALTY: u32 = 5;
/// A matched build finished under this many seconds earns the remainder as
/// a time bonus.
const TIME_BONUS_WINDOW_SECS: u64 = 60;

/// How a round was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Practice,
    Timed,
}

impl GameMode {
    fn tag(self) -> u8 {
        match self {
            GameMode::Practice => 0,
            GameMode::Timed => 1,
        }
    }

    fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(GameMode::Practice),
            1 => Some(GameMode::Timed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Practice => "practice",
            GameMode::Timed => "timed",
        }
    }
}

/// One finished round, as handed to the score log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRecord {
    pub mode: GameMode,
    pub time_taken_ms: u64,
    pub mistakes: u32,
    pub score: u32,
}

/// Scores a round from its match outcome and elapsed time.
///
/// Correct cells earn points, mistakes cost points, and a matched build
/// gets a bonus for every second left inside the bonus window. The total
/// floors at zero.
pub fn compute_score(result: &MatchResult, time_taken: Duration) -> u32 {
    let base = result.correct_count as u32 * POINTS_PER_CORRECT;
    let penalty = (result.extra_count + result.missing_count) as u32 * MISTAKE_PENALTY;
    let bonus = if result.matched {
        TIME_BONUS_WINDOW_SECS.saturating_sub(time_taken.as_secs()) as u32
    } else {
        0
    };
    (base + bonus).saturating_sub(penalty)
}

/// Saves the full session log to both binary and text files.
pub fn save(records: &[SessionRecord]) -> io::Result<()> {
    save_text(records)?;
    save_binary(records)?;
    Ok(())
}

/// Appends one record, rewriting both files.
pub fn append(record: SessionRecord) -> io::Result<()> {
    let mut records = load_all().unwrap_or_default();
    records.push(record);
    save(&records)
}

/// Saves the session log in human-readable text format.
fn save_text(records: &[SessionRecord]) -> io::Result<()> {
    let mut file = File::create(SESSIONS_TXT)?;
    writeln!(file, "{} sessions:\n", records.len())?;
    for (i, record) in records.iter().enumerate() {
        writeln!(
            file,
            "Session {}: mode={} time={}ms mistakes={} score={}",
            i + 1,
            record.mode.label(),
            record.time_taken_ms,
            record.mistakes,
            record.score
        )?;
    }
    Ok(())
}

/// Saves the session log in compact binary format for fast loading.
fn save_binary(records: &[SessionRecord]) -> io::Result<()> {
    let mut file = File::create(SESSIONS_BIN)?;

    file.write_all(&(records.len() as u32).to_le_bytes())?;
    for record in records {
        file.write_all(&[record.mode.tag()])?;
        file.write_all(&record.time_taken_ms.to_le_bytes())?;
        file.write_all(&record.mistakes.to_le_bytes())?;
        file.write_all(&record.score.to_le_bytes())?;
    }

    Ok(())
}

/// Loads all session records from the binary file.
pub fn load_all() -> Option<Vec<SessionRecord>> {
    let mut file = File::open(SESSIONS_BIN).ok()?;
    let mut u32_buffer = [0u8; 4];
    let mut u64_buffer = [0u8; 8];

    file.read_exact(&mut u32_buffer).ok()?;
    let record_count = u32::from_le_bytes(u32_buffer) as usize;

    let mut records = Vec::with_capacity(record_count);
    for _ in 0..record_count {
        let mut tag = [0u8; 1];
        file.read_exact(&mut tag).ok()?;
        let mode = GameMode::from_tag(tag[0])?;

        file.read_exact(&mut u64_buffer).ok()?;
        let time_taken_ms = u64::from_le_bytes(u64_buffer);

        file.read_exact(&mut u32_buffer).ok()?;
        let mistakes = u32::from_le_bytes(u32_buffer);

        file.read_exact(&mut u32_buffer).ok()?;
        let score = u32::from_le_bytes(u32_buffer);

        records.push(SessionRecord {
            mode,
            time_taken_ms,
            mistakes,
            score,
        });
    }

    Some(records)
}

/// Returns the number of saved sessions without loading them all.
pub fn count() -> Option<usize> {
    let mut file = File::open(SESSIONS_BIN).ok()?;
    let mut u32_buffer = [0u8; 4];
    file.read_exact(&mut u32_buffer).ok()?;
    Some(u32::from_le_bytes(u32_buffer) as usize)
}

/// Reads a structure from a text file: one `x y z` triple per line, with
/// blank lines and `#` comments ignored. Duplicate triples collapse into
/// the set.
pub fn read_structure(path: &Path) -> io::Result<Structure> {
    let file = File::open(path)?;
    let mut structure = Structure::default();

    for (line_number, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace().map(str::parse::<i32>);
        let (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "{}:{}: expected three integers per line",
                    path.display(),
                    line_number + 1
                ),
            ));
        };
        structure.insert(Voxel::new(x, y, z));
    }

    Ok(structure)
}
