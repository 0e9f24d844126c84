//! Restack CLI - stack multi-column HTML tables into label/value layouts

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use restack::{
    diagnostics::{check_options, format_diagnostics},
    stack_document, stack_table_with_options, HtmlTable, MergeSpec, MoveSpec, StackOptions,
    Structure,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "restack")]
#[command(version)]
#[command(about = "Restack - stack multi-column HTML tables into label/value layouts", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Merge spec, repeatable: TARGET:SRC,SRC (applied in flag order)
    #[arg(long = "merge", value_name = "TARGET:SRC,SRC")]
    merge: Vec<String>,

    /// Span columns, comma-separated indices (post-merge numbering)
    #[arg(long, value_delimiter = ',', value_name = "IDX")]
    span: Vec<usize>,

    /// Move spec, repeatable: FROM:TO (applied in flag order)
    #[arg(long = "move", value_name = "FROM:TO")]
    moves: Vec<String>,

    /// Skip columns, comma-separated indices
    #[arg(long, value_delimiter = ',', value_name = "IDX")]
    skip: Vec<usize>,

    /// Load options from a JSON file (flags extend the loaded specs)
    #[cfg(feature = "config")]
    #[arg(short, long)]
    config: Option<String>,

    /// Check mode - report spec issues against the input table, no output
    #[arg(long)]
    check: bool,

    /// Use colored output (for check mode)
    #[arg(long, default_value_t = true)]
    color: bool,

    /// Emit the whole document with the clone spliced in, instead of just
    /// the clone
    #[arg(short = 'd', long)]
    document: bool,
}

#[cfg(feature = "cli")]
fn parse_merge_flag(raw: &str) -> Result<MergeSpec, String> {
    let (target, sources) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected TARGET:SRC,SRC - got '{}'", raw))?;
    let target = target
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("bad merge target '{}'", target))?;
    let sources = sources
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| format!("bad merge source '{}'", s))
        })
        .collect::<Result<Vec<usize>, String>>()?;
    Ok(MergeSpec::new(target, sources))
}

#[cfg(feature = "cli")]
fn parse_move_flag(raw: &str) -> Result<MoveSpec, String> {
    let (from, to) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO - got '{}'", raw))?;
    let from = from
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("bad move source '{}'", from))?;
    let to = to
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("bad move destination '{}'", to))?;
    Ok(MoveSpec::new(from, to))
}

#[cfg(feature = "cli")]
fn build_options(cli: &Cli) -> Result<StackOptions, String> {
    #[cfg(feature = "config")]
    let mut options = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
            StackOptions::from_json(&json).map_err(|e| e.to_string())?
        }
        None => StackOptions::default(),
    };
    #[cfg(not(feature = "config"))]
    let mut options = StackOptions::default();

    for raw in &cli.merge {
        options.merge.push(parse_merge_flag(raw)?);
    }
    for raw in &cli.moves {
        options.moves.push(parse_move_flag(raw)?);
    }
    options.span.extend_from_slice(&cli.span);
    options.skip.extend_from_slice(&cli.skip);

    Ok(options)
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = match build_options(&cli) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    };

    // If check mode, analyze the specs against the table and report
    if cli.check {
        let column_count = match HtmlTable::parse(&input) {
            Ok(table) => Structure::extract(&table).column_count(),
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        };

        let result = check_options(&options, column_count);
        println!("{}", format_diagnostics(&result, cli.color));

        if result.has_errors() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = if cli.document {
        stack_document(&input, &options)
    } else {
        stack_table_with_options(&input, &options)
    };

    let result = match result {
        Ok(html) => html,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install restack --features cli");
    eprintln!("  restack [OPTIONS] [INPUT_FILE]");
}
