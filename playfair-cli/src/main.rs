//! A command-line interface for the Playfair cipher.

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use log::{error, info};
use playfair_core::{CipherOutput, KeySquare, decrypt, encrypt};
use std::io::{self, Write};
use std::path::PathBuf;

mod display;
mod error;
mod input;
mod interactive;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Encrypt a message\nplayfair-cli encrypt --key PLAYFAIR \"Hide the gold in the tree stump\"\n\n# Decrypt and show the key square and digraphs\nplayfair-cli decrypt --key PLAYFAIR --show-work EBIMQMGHVRIRONKGODKUKNNZEF\n\n# Encrypt a file, printing a JSON report\nplayfair-cli --format json encrypt --key ARLATHAN --input ./message.txt\n\n# Start the interactive menu\nplayfair-cli interactive"
)]
struct Cli {
    /// How cipher results are printed.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain text
    Text,
    /// Pretty-printed JSON with the key square and digraphs
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message with a keyword
    Encrypt {
        #[command(flatten)]
        args: CipherArgs,
    },
    /// Decrypt a message with a keyword
    Decrypt {
        #[command(flatten)]
        args: CipherArgs,
    },
    /// Print the key square for a keyword
    Table {
        /// The keyword the square is built from
        #[arg(short, long)]
        key: String,
    },
    /// Run the built-in reference vectors
    SelfTest,
    /// Start the interactive menu
    Interactive,
}

#[derive(clap::Args)]
struct CipherArgs {
    /// The keyword the key square is built from
    #[arg(short, long)]
    key: String,

    /// The message. If omitted, it is read from --input or stdin.
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Read the message from a file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the key square and digraphs along with the result
    #[arg(long)]
    show_work: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Encrypt { args } => {
            let (key, message) = resolve(args)?;
            info!("Encrypting {} char(s)", message.chars().count());
            emit(&mut out, &encrypt(&message, key), cli.format, args.show_work)
        }
        Commands::Decrypt { args } => {
            let (key, message) = resolve(args)?;
            info!("Decrypting {} char(s)", message.chars().count());
            let output = decrypt(&message, key)?;
            emit(&mut out, &output, cli.format, args.show_work)
        }
        Commands::Table { key } => {
            let square = KeySquare::from_keyword(input::require_non_empty("Key", key)?);
            match cli.format {
                OutputFormat::Text => write!(out, "{}", display::render_square(&square))?,
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&square)?)?;
                }
            }
            Ok(())
        }
        Commands::SelfTest => {
            let results = self_test::run_all();
            let failed = self_test::report(&mut out, &results)?;
            if failed > 0 {
                return Err(CliError::SelfTestFailed {
                    failed,
                    total: results.len(),
                });
            }
            Ok(())
        }
        Commands::Interactive => interactive::run(&mut io::stdin().lock(), &mut out),
    }
}

/// Validates the key and loads the message for a cipher command.
fn resolve(args: &CipherArgs) -> Result<(&str, String), CliError> {
    let key = input::require_non_empty("Key", &args.key)?;
    let message =
        input::read_message(args.text.as_deref(), args.input.as_deref(), io::stdin())?;
    input::require_non_empty("Message", &message)?;
    Ok((key, message))
}

fn emit(
    out: &mut impl Write,
    output: &CipherOutput,
    format: OutputFormat,
    show_work: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write!(out, "{}", display::render_output(output, show_work))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(output)?)?,
    }
    Ok(())
}
