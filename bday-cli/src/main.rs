mod render;

use anyhow::Result;
use bday_core::{Validator, render::format_hint};
use clap::Parser;
use render::{ColorMode, RenderOptions, Renderer};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

/// bday - checks that a typed date is a real, non-future calendar date
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Prints the accepted input formats
    #[arg(long, short, exclusive = true)]
    formats: bool,
    /// Question to ask on stdin (overrides the configured prompt)
    #[arg(long)]
    prompt: Option<String>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Date text to validate (e.g., `bday 1990-05-04`). Prompts on stdin when omitted.
    text: Vec<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("bday: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let validator = Validator::new()?;

    let use_color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() {
                false
            } else {
                io::stdout().is_terminal()
            }
        }
    };
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: validator.config.date_format.clone(),
        use_color,
    }));

    if cli.formats {
        renderer.print_info(&format_hint(&validator.config.input_date_formats));
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = if !cli.text.is_empty() {
        let inline = cli.text.join(" ");
        validator.validate(Some(&inline), None)
    } else {
        let question = cli
            .prompt
            .unwrap_or_else(|| validator.config.prompt.clone());
        validator.validate_with(|| ask(&question), None)
    };

    match outcome {
        Ok(moment) => {
            renderer.print_moment(&moment);
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            renderer.print_failure(&failure);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Input collaborator: asks the question on stderr and reads one line from
/// stdin. EOF (ctrl-d) counts as a cancelled prompt.
fn ask(question: &str) -> Option<String> {
    eprint!("{question} ");
    io::stderr().flush().ok();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}
