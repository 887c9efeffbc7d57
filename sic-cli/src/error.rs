use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open instruction table: {}", .0.display())]
    InstructionTable(PathBuf, #[source] io::Error),

    #[error("cannot open source: {}", .0.display())]
    Source(PathBuf, #[source] io::Error),

    #[error("failed to write listing")]
    Listing(#[source] io::Error),

    #[error("failed to write object program: {}", .0.display())]
    ObjectProgram(PathBuf, #[source] io::Error),
}

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InstructionTable(..) => 2,
            Error::Source(..) => 3,
            Error::Listing(_) | Error::ObjectProgram(..) => 4,
        }
    }
}
