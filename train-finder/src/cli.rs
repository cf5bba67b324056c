//! Line-oriented terminal interface.
//!
//! Prompts for the departure station, arrival station and criterion (one
//! line each), runs the query and prints either the error or one line per
//! train.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::domain::Train;
use crate::finder::{FindError, TrainFinder};
use crate::records::RecordSource;

pub const DEPARTURE_PROMPT: &str = "Enter departure station ID";
pub const ARRIVAL_PROMPT: &str = "Enter arrival station ID";
pub const CRITERION_PROMPT: &str = "Enter criteria";

/// Prefix printed before input validation errors.
pub const INPUT_ERROR_PREFIX: &str = "entered incorrect parameters";

/// Errors from the terminal itself, not from the query.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// How a session ended.
#[derive(Debug)]
pub enum Outcome {
    /// The query succeeded; the trains were printed (possibly none).
    Trains(Vec<Train>),
    /// The query failed; the error was printed.
    Failed(FindError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Trains(_))
    }
}

/// Run one prompt/query/print session.
pub fn run<R, W, S>(
    mut input: R,
    mut output: W,
    finder: &TrainFinder<S>,
) -> Result<Outcome, CliError>
where
    R: BufRead,
    W: Write,
    S: RecordSource,
{
    let departure = prompt(&mut input, &mut output, DEPARTURE_PROMPT)?;
    let arrival = prompt(&mut input, &mut output, ARRIVAL_PROMPT)?;
    let criterion = prompt(&mut input, &mut output, CRITERION_PROMPT)?;

    let outcome = match finder.find(&departure, &arrival, &criterion) {
        Ok(trains) => {
            for train in &trains {
                writeln!(output, "{train}")?;
            }
            info!(count = trains.len(), "printed trains");
            Outcome::Trains(trains)
        }
        Err(err) => {
            if err.is_input_error() {
                writeln!(output, "{INPUT_ERROR_PREFIX}: {err}")?;
            } else {
                writeln!(output, "{err}")?;
            }
            Outcome::Failed(err)
        }
    };

    output.flush()?;
    Ok(outcome)
}

/// Print a prompt and read one line.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<String> {
    writeln!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Read one line without its terminator. End of input reads as "".
fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
