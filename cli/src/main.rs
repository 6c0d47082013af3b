use clap::Parser;
use invoice_calc::{Engine, EngineOptions, Limits, render_error};
use miette::{Diagnostic, Result};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::BufRead;
use std::io::BufReader;
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;

/// Invoice Calc - evaluate invoice totals written with Roman numerals and integers
#[derive(Parser, Debug)]
#[command(name = "invoice-calc")]
#[command(about = "Evaluate invoice total expressions such as \"X + V + 3\"", long_about = None)]
struct Args {
    /// Print the normalized expression alongside the total
    #[arg(long)]
    normalized: bool,

    /// Print the token sequence (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Maximum expression length, in characters
    #[arg(
        long,
        default_value_t = Limits::DEFAULT_MAX_LENGTH as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_length: u64,

    /// Maximum number of tokens in an expression
    #[arg(
        long,
        default_value_t = Limits::DEFAULT_MAX_TOKENS as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    max_tokens: u64,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            limits: Limits {
                max_length: usize::try_from(self.max_length).unwrap_or(usize::MAX),
                max_tokens: usize::try_from(self.max_tokens).unwrap_or(usize::MAX),
            },
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("failed to read expression from stdin")]
    #[diagnostic(code(invoice_calc::stdin))]
    Stdin(#[source] std::io::Error),

    #[error("line editor failed")]
    #[diagnostic(code(invoice_calc::repl))]
    Repl(#[source] std::io::Error),
}

/// Evaluate one expression, printing the total or the rendered error.
///
/// Returns `true` when the expression was accepted.
fn interpret_input(engine: &Engine, input: &str, args: &Args) -> bool {
    if args.debug_tokens {
        // Lexing errors are reported by the evaluation below.
        if let Ok(tokens) = engine.tokenize(input) {
            println!("=== Tokens ===");
            for token in &tokens {
                println!("{:?}", token);
            }
            println!();
        }
    }

    match engine.evaluate(input) {
        Ok(result) => {
            if args.normalized {
                println!("{}", result);
            } else {
                println!("{}", result.total);
            }
            true
        }
        Err(e) => {
            debug!(code = e.kind.code(), "rejected expression");
            render_error(input, &e);
            false
        }
    }
}

fn run_repl(engine: &Engine, args: &Args) -> Result<(), CliError> {
    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("invoice".to_string()),
        DefaultPromptSegment::Empty,
    );

    println!("Invoice Calc REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

    loop {
        match line_editor.read_line(&prompt).map_err(CliError::Repl)? {
            Signal::Success(buffer) => {
                if !buffer.trim().is_empty() {
                    interpret_input(engine, &buffer, args);
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                return Ok(());
            }
        }
    }
}

/// Evaluate every non-blank line; `false` if any line was rejected.
fn run_pipe(engine: &Engine, args: &Args, input: impl BufRead) -> Result<bool, CliError> {
    let mut all_ok = true;
    for line in input.lines() {
        let line = line.map_err(CliError::Stdin)?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= interpret_input(engine, &line, args);
    }
    Ok(all_ok)
}

fn exit_code(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(args.engine_options());

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        return Ok(exit_code(interpret_input(&engine, expr, &args)));
    }

    // Otherwise, check if we're in interactive or pipe mode
    if atty::is(atty::Stream::Stdin) {
        run_repl(&engine, &args)?;
        Ok(ExitCode::SUCCESS)
    } else {
        let stdin = std::io::stdin();
        let ok = run_pipe(&engine, &args, BufReader::new(stdin.lock()))?;
        Ok(exit_code(ok))
    }
}
