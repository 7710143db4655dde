//! Command-line front end: renders invocations found in files or stdin.
//!
//! ```text
//! echo 'build colorize "bold;green" "passed"' | colorize
//! colorize --function style notes.txt
//! colorize --check templates/*.txt
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colorize::{
    AnsiColorizer, ColorWriter, ColorizeError, Colorizer, ColorizerOption, PlainColorizer,
    DEFAULT_FUNCTION_NAME,
};
use colorize_input::{read_file_lines, read_lines};
use log::{Level, LevelFilter, Metadata, Record};

/// Render colorize invocations as ANSI styling
#[derive(Parser)]
#[command(name = "colorize", version)]
struct Cli {
    /// Files to read; stdin is read when none are given
    files: Vec<PathBuf>,

    /// Invocation marker to recognize
    #[arg(short, long, default_value = DEFAULT_FUNCTION_NAME)]
    function: String,

    /// Render invocations but strip the resulting escape codes
    #[arg(long)]
    plain: bool,

    /// Report unknown modifiers instead of rendering
    #[arg(long, conflicts_with_all = ["plain", "jinja"])]
    check: bool,

    /// Treat each input as a MiniJinja template
    #[arg(long)]
    jinja: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

struct Source {
    label: String,
    lines: Vec<String>,
}

fn read_sources(files: &[PathBuf]) -> anyhow::Result<Vec<Source>> {
    if files.is_empty() {
        let lines = read_lines(io::stdin().lock()).context("reading stdin")?;
        return Ok(vec![Source {
            label: "<stdin>".to_string(),
            lines,
        }]);
    }

    files
        .iter()
        .map(|path| -> anyhow::Result<Source> {
            Ok(Source {
                label: path.display().to_string(),
                lines: read_file_lines(path)?,
            })
        })
        .collect()
}

fn check(colorizer: &AnsiColorizer, sources: &[Source]) -> ExitCode {
    let mut failed = false;

    for source in sources {
        for (index, line) in source.lines.iter().enumerate() {
            if let Err(ColorizeError::UnknownModifiers(unknown)) = colorizer.validate(line) {
                failed = true;
                for err in unknown.errors {
                    eprintln!(
                        "{}:{}:{}: unknown modifier '{}'",
                        source.label,
                        index + 1,
                        err.offset + 1,
                        err.name
                    );
                }
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let colorizer =
        AnsiColorizer::with_options([ColorizerOption::custom_function_name(&cli.function)]);
    let sources = read_sources(&cli.files)?;

    if cli.check {
        return Ok(check(&colorizer, &sources));
    }

    let engine: Box<dyn Colorizer> = if cli.plain {
        Box::new(PlainColorizer::new(colorizer.clone()))
    } else {
        Box::new(colorizer.clone())
    };
    let mut writer = ColorWriter::new(io::stdout().lock(), engine);

    for source in &sources {
        if cli.jinja {
            let rendered = colorizer
                .render_template(&source.lines.join("\n"), minijinja::context! {})
                .with_context(|| format!("rendering {}", source.label))?;
            writeln!(writer, "{}", rendered)?;
        } else {
            for line in &source.lines {
                writeln!(writer, "{}", line)?;
            }
        }
    }

    writer.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.verbose {
        init_logger();
    }

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("colorize: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
