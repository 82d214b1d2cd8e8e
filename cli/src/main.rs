use std::io::{self, Write};
use std::process;

use clap::Parser;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use formatters::Format;
use siboom::{Converter, Document};

#[derive(Parser)]
#[command(name = "siboom", version, about = "Convert siboom markup to HTML or plain text")]
struct Cli {
    /// Siboom source file to convert
    file: String,

    /// Output format: html or txt
    format: Format,

    /// Disable colored error output
    #[arg(long)]
    no_color: bool,

    /// Log conversion progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose forces DEBUG, otherwise RUST_LOG decides. Logs go to stderr so
    // stdout only ever carries the rendered document.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    // Read source
    let source = match std::fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", cli.file, e);
            process::exit(1);
        }
    };

    let document = Document::from_source(&source);

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(cli.file.clone(), document.source());
    debug!(file = %cli.file, format = %cli.format, lines = document.len(), "converting");

    let formatter = cli.format.formatter();
    let output = match Converter::new(formatter.as_ref(), file_id).convert(&document) {
        Ok(output) => output,
        Err(error) => {
            let writer = StandardStream::stderr(color_choice);
            let config = term::Config::default();
            let diagnostic = error.to_diagnostic();
            let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&output) {
        eprintln!("error: cannot write output: {}", e);
        process::exit(1);
    }
}

/// Print the rendered document, ending it with a newline if it lacks one.
fn write_output(output: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
