use clap::{ArgAction, Parser as ClapParser, Subcommand};
use fiql_parser::cli::{self, CheckOptions, CheckResult, CliError, OutputFormat};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "fiql")]
#[command(about = "fiql - Parse, validate and evaluate FIQL filters")]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a filter, or run it against JSON input
    Check {
        /// The FIQL filter
        query: String,

        /// JSON input (reads from stdin if piped)
        #[arg(short, long)]
        input: Option<String>,

        /// Output format for the validated filter
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Reject bare selectors without a comparison
        #[arg(long)]
        strict: bool,

        /// Maximum group nesting
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'fiql docs' to list categories)
        category: String,
    },
}

fn setup_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(log_level).init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            query,
            input,
            format,
            pretty,
            strict,
            max_depth,
        } => run_check(CheckOptions {
            query,
            input,
            format,
            pretty,
            strict,
            max_depth,
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(mut options: CheckOptions) -> Result<(), CliError> {
    if options.input.is_none() && !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        if !buffer.trim().is_empty() {
            options.input = Some(buffer);
        }
    }

    match cli::execute_check(&options)? {
        CheckResult::Valid(rendered) => println!("{}", rendered),
        CheckResult::Matches(records) => {
            let json = if options.pretty {
                serde_json::to_string_pretty(&records)
            } else {
                serde_json::to_string(&records)
            }?;
            println!("{}", json);
        }
    }
    Ok(())
}
