//! sm64-save-convert - byte-swap a Super Mario 64 EEPROM save
//!
//! # Usage
//!
//! ```bash
//! # Convert in place
//! sm64-save-convert mario.eep
//!
//! # Convert into a new file
//! sm64-save-convert mario.eep mario_pc.eep
//!
//! # Only validate and report the byte order
//! sm64-save-convert --check mario.eep
//! ```
//!
//! Set `RUST_LOG` (or pass `-v`) for per-record logging.

use anyhow::{Context, Result};
use clap::Parser;
use sm64_save_rs::{
    read_save, write_save, ConvertConfig, Endianness, SaveConverter, SaveError,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a Super Mario 64 EEPROM save between big and little endian
#[derive(Parser, Debug)]
#[command(name = "sm64-save-convert")]
#[command(about = "Convert a Super Mario 64 EEPROM save between big and little endian")]
#[command(version)]
struct Cli {
    /// Save file to read
    infile: PathBuf,

    /// Where to write the converted save (defaults to converting in place)
    outfile: Option<PathBuf>,

    /// Byte order to produce instead of flipping the input's
    #[arg(long, value_name = "little|big")]
    to: Option<Endianness>,

    /// Validate and report the byte order without writing anything
    #[arg(long)]
    check: bool,

    /// Skip re-validating the converted save
    #[arg(long)]
    no_verify: bool,

    /// Log every record as it is processed
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too and are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // validation failures were already listed record by record
            if !matches!(err.downcast_ref::<SaveError>(), Some(SaveError::Validation(_))) {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    if cli.check && cli.outfile.is_some() {
        return Err(SaveError::Usage("--check does not write an output file".into()).into());
    }

    let outfile = cli.outfile.as_ref().unwrap_or(&cli.infile);
    let mut config = ConvertConfig::default().with_verify(!cli.no_verify);
    if let Some(target) = cli.to {
        config = config.with_target(target);
    }
    let converter = SaveConverter::new(config);

    let mut save = read_save(&cli.infile)
        .with_context(|| format!("failed to read {}", cli.infile.display()))?;

    print!("Validating input save file: ");

    if cli.check {
        let source = report_validation(converter.check(&save))?;
        println!("Input file endianness: {} endian", source);
        return Ok(());
    }

    let conversion = report_validation(converter.convert(&mut save))?;
    println!("Input file endianness: {} endian", conversion.source);

    if !conversion.swapped {
        println!("Save is already {} endian, writing it unchanged", conversion.target);
    }

    write_save(outfile, &save)?;
    println!();
    println!(
        "Saved {} endian save file to: {}",
        conversion.target,
        outfile.display()
    );

    Ok(())
}

/// Print the validation verdict, listing every bad record on failure
fn report_validation<T>(result: sm64_save_rs::Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            println!("OK");
            Ok(value)
        }
        Err(SaveError::Validation(report)) => {
            println!("Failed");
            for diagnostic in report.diagnostics() {
                eprintln!("  {}", diagnostic);
            }
            println!("Save file is probably corrupted. Try again after loading it once in the game.");
            Err(SaveError::Validation(report).into())
        }
        Err(err) => {
            println!("Failed");
            Err(err.into())
        }
    }
}
