use clap::Parser;
use color_eyre::Report;
use color_eyre::eyre::{WrapErr as _, bail};
use meme_errors::ReportableError as _;
use meme_lexer::{Lexer, SourceRef, Token};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const FRONTEND_ERROR: u8 = 65;
const EXTENSION: &str = "meme";

#[derive(Debug, Parser)]
#[clap(name = "meme", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: CLCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum CLCommand {
    /// Print the tokens of each meme description file.
    Tokenize {
        #[clap(required = true)]
        paths: Vec<PathBuf>,
        /// Whether to lex each file in one go or a token at a time.
        #[clap(long, value_enum, default_value_t = Protocol::Eager)]
        protocol: Protocol,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Protocol {
    Eager,
    Incremental,
}

fn main() -> Result<ExitCode, Report> {
    color_eyre::install()?;
    let args = CLArgs::parse();

    let filter = EnvFilter::builder().from_env()?;
    tracing_subscriber::registry()
        .with(fmt::layer().without_time())
        .with(filter)
        .init();

    match args.routine {
        CLCommand::Tokenize { paths, protocol } => {
            let mut succeeded = true;
            for path in paths {
                eprintln!("Tokenizing {}...", path.display());
                succeeded &= tokenize(&path, protocol)?;
            }
            if !succeeded {
                return Ok(ExitCode::from(FRONTEND_ERROR));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Read a meme file along with its identity.
fn read_source(path: &Path) -> Result<(SourceRef, String), Report> {
    if path.extension().is_none_or(|ext| ext != OsStr::new(EXTENSION)) {
        bail!("`{}` is not a meme file", path.display());
    }
    let absolute = fs::canonicalize(path)
        .wrap_err_with(|| format!("file `{}` does not exist", path.display()))?;
    if !absolute.is_file() {
        bail!("`{}` is not a file", absolute.display());
    }
    let text = fs::read_to_string(&absolute)
        .wrap_err_with(|| format!("failed to read `{}`", absolute.display()))?;

    let source = SourceRef {
        file_name: absolute
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_path: absolute.display().to_string(),
    };
    tracing::debug!("Read {} bytes from {}", text.len(), source.file_path);
    Ok((source, text))
}

fn tokenize(path: &Path, protocol: Protocol) -> Result<bool, Report> {
    let (source, text) = read_source(path)?;
    let path = source.file_path.clone();
    let mut lexer = Lexer::new(&text).with_source_ref(source);

    let mut succeeded = true;
    match protocol {
        Protocol::Eager => {
            for token in lexer.tokenize() {
                succeeded &= print_token(&lexer, &token, &path)?;
            }
        }
        Protocol::Incremental => {
            while let Some(token) = lexer.next_token() {
                succeeded &= print_token(&lexer, &token, &path)?;
            }
        }
    }
    Ok(succeeded)
}

/// Print a token to stdout, or a report to stderr if it is an error.
fn print_token(lexer: &Lexer<'_>, token: &Token, path: &str) -> Result<bool, Report> {
    if let Some(error) = token.as_error() {
        let mut report = String::new();
        error.report(&mut report, path, lexer.get_source());
        eprint!("{report}");
        return Ok(false);
    }

    let mut buffer = String::new();
    lexer.dump_token(&mut buffer, token)?;
    println!("{buffer}");
    Ok(true)
}
