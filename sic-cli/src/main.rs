mod error;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use color_print::ceprintln;
use sic::assembler::{assemble, Assembly};
use sic::frame::instruction::Catalog;
use tracing::{debug, info, Level};

use error::Error;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Instruction definition table
    instructions: PathBuf,

    /// Assembly source file
    source: PathBuf,

    /// Also write the object program to this file
    #[arg(short, long)]
    object: Option<PathBuf>,

    /// One of `TRACE`, `DEBUG`, `INFO`, `WARN`, or `ERROR`
    #[arg(short, long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ceprintln!("<r,s>error</>: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let table = fs::read(&args.instructions)
        .map_err(|e| Error::InstructionTable(args.instructions.clone(), e))?;
    let catalog = Catalog::load(&table);

    let source = fs::read(&args.source).map_err(|e| Error::Source(args.source.clone(), e))?;
    info!(source = %args.source.display(), "assembling");

    let assembly = assemble(&catalog, &source);
    for symbol in assembly.symbols.iter() {
        debug!("{:<6} {:04X}", symbol.name, symbol.address);
    }

    write_listing(&assembly).map_err(Error::Listing)?;

    if let Some(ref path) = args.object {
        write_object_program(&assembly, path)
            .map_err(|e| Error::ObjectProgram(path.clone(), e))?;
        info!(object = %path.display(), "object program written");
    }

    Ok(())
}

fn write_listing(assembly: &Assembly) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    assembly.write_listing(&mut out)?;
    out.flush()
}

fn write_object_program(assembly: &Assembly, path: &Path) -> io::Result<()> {
    let mut out = io::BufWriter::new(fs::File::create(path)?);
    assembly.write_object_program(&mut out)?;
    out.flush()
}
