//! CLI tool to query salary statistics from a CSV file of job postings.
//!
//! Usage:
//!   salary-insights max <jobs.csv>
//!   salary-insights min <jobs.csv>
//!   salary-insights stats <jobs.csv>
//!   salary-insights filter <jobs.csv> --salary 60000 [-o matches.csv]

use clap::{Args, Parser, Subcommand};
use salary_insights::{
    CsvOptions, CsvReader, filter_by_salary_range, get_max_salary, get_min_salary,
    get_salary_stats, write_jobs,
};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Salary statistics and salary-range filtering for job postings.
#[derive(Parser)]
#[command(name = "salary-insights", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log read and filter details on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the highest numeric max_salary
    Max(Input),
    /// Print the lowest numeric min_salary
    Min(Input),
    /// Print both the lowest min_salary and the highest max_salary
    Stats(Input),
    /// Write the jobs whose salary range contains a salary
    Filter {
        #[command(flatten)]
        input: Input,

        /// Salary that must fall within [min_salary, max_salary]
        #[arg(short, long)]
        salary: String,

        /// Write matching jobs to file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Args)]
struct Input {
    /// CSV file with a header row including min_salary and max_salary
    path: String,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be one ASCII character, got {value:?}")),
    }
}

impl Input {
    fn reader(&self) -> CsvReader {
        CsvReader::with_options(CsvOptions {
            delimiter: self.delimiter,
            ..CsvOptions::default()
        })
    }
}

fn setup_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Command::Max(input) => match get_max_salary(&input.reader(), &input.path) {
            Ok(max) => println!("{max}"),
            Err(e) => fail(&e),
        },
        Command::Min(input) => match get_min_salary(&input.reader(), &input.path) {
            Ok(min) => println!("{min}"),
            Err(e) => fail(&e),
        },
        Command::Stats(input) => match get_salary_stats(&input.reader(), &input.path) {
            Ok(stats) => println!("min={} max={}", stats.min, stats.max),
            Err(e) => fail(&e),
        },
        Command::Filter {
            input,
            salary,
            output,
        } => run_filter(&input, &salary, output.as_deref()),
    }
}

fn run_filter(input: &Input, salary: &str, output: Option<&str>) {
    let (headers, jobs) = match input.reader().read_table(&input.path) {
        Ok(table) => table,
        Err(e) => fail(&e),
    };

    let matched = filter_by_salary_range(&jobs, salary);
    let text = match write_jobs(&headers, matched.iter().copied(), input.delimiter) {
        Ok(text) => text,
        Err(e) => fail(&e),
    };

    if let Err(e) = write_output(output, &text) {
        match output {
            Some(out_path) => eprintln!("Error writing output file '{out_path}': {e}"),
            None => eprintln!("Error writing output: {e}"),
        }
        process::exit(1);
    }

    tracing::info!(
        input = jobs.len(),
        matched = matched.len(),
        salary,
        "filtered jobs by salary range"
    );
}

/// Write `text` to `output`, creating its parent directory, or to stdout.
fn write_output(output: Option<&str>, text: &str) -> io::Result<()> {
    let Some(out_path) = output else {
        return io::stdout().write_all(text.as_bytes());
    };
    if let Some(parent) = Path::new(out_path).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, text)
}

fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("Error: {err}");
    process::exit(1);
}
