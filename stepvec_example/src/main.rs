//! Interactive console demonstration for the `stepvec` container.
//!
//! Reads an initial size and growth step, then integer values until the
//! sentinel, and prints the resulting sequence back through the container's
//! indexed accessors.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use stepvec::{checked_len, StepVec};

/// Input value that stops the read loop without being stored.
const SENTINEL: i64 = -1;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

fn run(mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut tokens = Tokens::new();

    write!(out, "Enter the initial size of the sequence: ")?;
    out.flush()?;
    let size = tokens
        .next(&mut input)?
        .context("missing initial size")?;
    write!(out, "Enter the growth step: ")?;
    out.flush()?;
    let step = tokens.next(&mut input)?.context("missing growth step")?;

    let mut seq: StepVec<i64> = StepVec::new();
    seq.set_size(checked_len(size)?, checked_len(step)?);

    write!(out, "Enter values to add ({SENTINEL} to stop): ")?;
    out.flush()?;
    while let Some(value) = tokens.next(&mut input)? {
        if value == SENTINEL {
            break;
        }
        seq.push(value);
    }

    writeln!(out, "Sequence size: {}", seq.len())?;
    write!(out, "Sequence elements:")?;
    for index in 0..seq.len() {
        write!(out, " {}", seq.get(index)?)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Whitespace-separated integer reader over line-oriented input.
struct Tokens {
    pending: VecDeque<String>,
}

impl Tokens {
    fn new() -> Self {
        Tokens {
            pending: VecDeque::new(),
        }
    }

    /// Returns the next integer, or `None` once the input is exhausted.
    fn next(&mut self, input: &mut impl BufRead) -> Result<Option<i64>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                let value = token
                    .parse::<i64>()
                    .with_context(|| format!("not an integer: {token:?}"))?;
                return Ok(Some(value));
            }
            let mut line = String::new();
            if input.read_line(&mut line).context("reading input")? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run;
    use std::io::Cursor;

    fn run_with(input: &str) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn echoes_values_up_to_the_sentinel() {
        let out = run_with("0 1\n10 20 30 -1\n").unwrap();
        assert!(out.contains("Sequence size: 3"));
        assert!(out.contains("Sequence elements: 10 20 30"));
    }

    #[test]
    fn initial_size_prefills_default_slots() {
        let out = run_with("2 1\n7 -1\n").unwrap();
        assert!(out.contains("Sequence size: 3"));
        assert!(out.contains("Sequence elements: 0 0 7"));
    }

    #[test]
    fn end_of_input_stops_reading_without_the_sentinel() {
        let out = run_with("0 1\n4 5").unwrap();
        assert!(out.contains("Sequence size: 2"));
        assert!(out.contains("Sequence elements: 4 5"));
    }

    #[test]
    fn values_after_the_sentinel_are_ignored() {
        let out = run_with("0 2\n1 2 -1 3 4\n").unwrap();
        assert!(out.contains("Sequence size: 2"));
        assert!(out.contains("Sequence elements: 1 2"));
    }

    #[test]
    fn rejects_a_negative_size() {
        let err = run_with("-3 1\n-1\n").unwrap_err();
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn rejects_a_negative_step() {
        assert!(run_with("2 -2\n-1\n").is_err());
    }

    #[test]
    fn rejects_non_integer_input() {
        let err = run_with("three 1\n-1\n").unwrap_err();
        assert!(err.to_string().contains("three"));
    }

    #[test]
    fn missing_counts_are_reported() {
        assert!(run_with("").is_err());
        assert!(run_with("3").is_err());
    }
}
