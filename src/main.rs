// c2js: C-subset to JavaScript translator with a terminal viewer

mod args;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser as _;
use color_eyre::eyre::{bail, Result, WrapErr};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use args::{Args, Mode};
use c2js::parser::{parse, tokenize};
use c2js::ui::App;
use c2js::CompileError;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    // The viewer owns the terminal; log lines would tear the display
    if args.mode != Mode::View {
        env_logger::Builder::new()
            .filter_level(args.logging().log_level_filter())
            .parse_default_env()
            .init();
    }

    let source = read_source(&args.input, args.max_input)?;
    log::info!("read {} ({} bytes)", args.input.display(), source.len());

    let rendered = match args.mode {
        Mode::View => {
            run_viewer(&args, source)?;
            return Ok(ExitCode::SUCCESS);
        }
        Mode::Check => match c2js::check(&source) {
            Ok(()) => "ok".to_string(),
            Err(err) => return Ok(report(&args.input, &err)),
        },
        Mode::Compile => match c2js::compile(&source) {
            Ok(js) => js,
            Err(err) => return Ok(report(&args.input, &err)),
        },
        Mode::Tokens => match tokenize(&source) {
            Ok(tokens) => tokens
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(err) => return Ok(report(&args.input, &CompileError::from(err))),
        },
        Mode::Ast => {
            let program = tokenize(&source)
                .map_err(CompileError::from)
                .and_then(|tokens| parse(tokens).map_err(CompileError::from));
            match program {
                Ok(program) => format!("{:#?}", program),
                Err(err) => return Ok(report(&args.input, &err)),
            }
        }
    };

    write_output(args.output.as_deref(), &rendered)?;
    Ok(ExitCode::SUCCESS)
}

/// Read the input file, rejecting anything over `max_chars` characters.
fn read_source(path: &Path, max_chars: usize) -> Result<String> {
    let source = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read '{}'", path.display()))?;

    let length = source.chars().count();
    if length > max_chars {
        bail!(
            "'{}' is {} characters long; the limit is {} (see --max-input)",
            path.display(),
            length,
            max_chars
        );
    }
    Ok(source)
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{}\n", text))
            .wrap_err_with(|| format!("Failed to write '{}'", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            Ok(())
        }
    }
}

/// Print a compile diagnostic and pick the failing exit code.
fn report(path: &Path, err: &CompileError) -> ExitCode {
    log::debug!("{} stage failed", err.stage());
    eprintln!("{}: {}", path.display(), err);
    ExitCode::FAILURE
}

fn run_viewer(args: &Args, source: String) -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(args.input.clone(), source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.wrap_err("Viewer failed")
}
