/*!
 * Terminal Input
 * Line-oriented prompt collection of simulation parameters
 */

use crate::core::errors::{ConfigError, Result};
use crate::core::limits::MAX_PROCESSES;
use crate::core::types::{ProcessSpec, SimulationConfig, Ticks};
use std::io::{BufRead, Write};

/// Permissive numeric parse: malformed input degrades to 0.
///
/// The zero is never trusted; configuration validation rejects it through
/// the invalid-configuration path instead of treating it as a value.
fn parse_or_zero(line: &str) -> Ticks {
    line.trim().parse().unwrap_or(0)
}

fn prompt_value<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Ticks>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_or_zero(&line))
}

/// Collect a full simulation configuration from line-oriented prompts.
///
/// The process count is bounded before any per-process prompting so an
/// oversized count cannot drive unbounded reading or allocation; the
/// engine re-validates everything else at construction.
pub fn read_config<R, W>(input: &mut R, output: &mut W) -> Result<SimulationConfig>
where
    R: BufRead,
    W: Write,
{
    let count = prompt_value(input, output, "Enter the number of processes: ")? as usize;
    if count > MAX_PROCESSES {
        return Err(ConfigError::BatchTooLarge {
            requested: count,
            limit: MAX_PROCESSES,
        }
        .into());
    }

    let mut processes = Vec::with_capacity(count);
    for pid in 1..=count {
        let burst_time =
            prompt_value(input, output, &format!("Enter burst time for process {pid}: "))?;
        let arrival_time = prompt_value(
            input,
            output,
            &format!("Enter arrival time for process {pid}: "),
        )?;
        processes.push(ProcessSpec::new(burst_time, arrival_time));
    }

    let base_quantum = prompt_value(input, output, "Enter the base time quantum: ")?;

    Ok(SimulationConfig {
        base_quantum,
        processes,
    })
}
