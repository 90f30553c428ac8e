//! Simple interactive CLI mode
//!
//! Prompts for a start and target word, then prints the shortest ladder.

use crate::core::Dictionary;
use crate::ladder::{Ladder, LadderError, find_ladder, parse_pair};
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Solved(Ladder),
    NoPath,
    Rejected(LadderError),
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<L>(load: L) -> io::Result<SessionOutcome>
where
    L: FnOnce(usize) -> Dictionary,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), load)
}

/// Run one prompt/solve/report round over arbitrary input and output
///
/// A rejected pair is reported to `output` and returned without loading a
/// dictionary or searching. End of input reads as an empty word.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_session<R, W, L>(mut input: R, mut output: W, load: L) -> io::Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
    L: FnOnce(usize) -> Dictionary,
{
    writeln!(output, "== Word Ladder Solver (BFS) ==")?;

    let start = get_user_input(&mut input, &mut output, "Enter start word")?;
    let goal = get_user_input(&mut input, &mut output, "Enter target word")?;

    let (start, goal) = match parse_pair(&start, &goal) {
        Ok(pair) => pair,
        Err(e) => {
            writeln!(output, "Error: {e}")?;
            return Ok(SessionOutcome::Rejected(e));
        }
    };

    let dictionary = load(start.len());

    if let Some(ladder) = find_ladder(&start, &goal, &dictionary) {
        writeln!(output, "\nTransformation found!")?;
        writeln!(output, "{ladder}")?;
        writeln!(output, "Steps required: {}", ladder.steps())?;
        Ok(SessionOutcome::Solved(ladder))
    } else {
        writeln!(output, "\nNo valid transformation path found!")?;
        Ok(SessionOutcome::NoPath)
    }
}

/// Get user input with a prompt
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(line.trim().to_lowercase())
}
