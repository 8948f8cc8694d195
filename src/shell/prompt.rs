//! Line prompting over arbitrary readers and writers
//!
//! Generic over `BufRead`/`Write` so the shell can be driven from a script
//! in tests as easily as from a terminal.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Print a prompt and read one line, without its line ending.
///
/// Returns `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt user for text input
///
/// Falls back to `default` when the user just presses Enter.
pub fn prompt_text<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: Option<&str>,
) -> Result<Option<String>> {
    let label = match default {
        Some(d) => format!("{} [{}]: ", prompt, d),
        None => format!("{}: ", prompt),
    };
    let Some(line) = prompt_line(input, output, &label)? else {
        return Ok(None);
    };
    let line = line.trim();
    match default {
        Some(d) if line.is_empty() => Ok(Some(d.to_string())),
        _ => Ok(Some(line.to_string())),
    }
}

/// Read lines until one consisting of a single `.` or end of input
pub fn read_multiline<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    writeln!(output, "(finish with a line containing only '.')")?;
    let mut lines = Vec::new();
    while let Some(line) = prompt_line(input, output, "| ")? {
        if line == "." {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Prompt for a 1-based choice from a list of options.
///
/// Re-prompts on invalid input; returns `None` at end of input.
pub fn select_option<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    options: &[&str],
) -> Result<Option<usize>> {
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, option)?;
    }
    loop {
        let Some(line) = prompt_line(input, output, &format!("{} [1-{}]: ", prompt, options.len()))?
        else {
            return Ok(None);
        };
        if let Ok(choice) = line.trim().parse::<usize>()
            && (1..=options.len()).contains(&choice)
        {
            return Ok(Some(choice - 1));
        }
        writeln!(
            output,
            "Invalid input. Please enter a number between 1 and {}.",
            options.len()
        )?;
    }
}
