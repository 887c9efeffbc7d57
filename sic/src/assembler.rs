use std::io::{self, Write};

use tracing::debug;

use crate::config::AssemblerOptions;
use crate::frame::instruction::Catalog;
use crate::frame::record::{ListingLine, ObjectRecord};
use crate::frame::tokenize::{decode, encode};
use crate::frame::*;
use crate::frameformer::symbol::{resolve_symbols, Header, SymbolTable};
use crate::frameformer::translate::{translate_to_listing, translate_to_record};

/// Everything one assembly run produces.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub frames: Vec<Frame>,
    pub symbols: SymbolTable,
    pub header: Header,
    pub listing: Vec<ListingLine>,
}

impl Assembly {
    /// The listing text: address, object code, source line.
    pub fn listing(&self) -> String {
        self.listing.iter().map(|line| line.to_string()).collect()
    }

    pub fn records(&self) -> Vec<ObjectRecord> {
        translate_to_record(&self.frames, &self.listing, &self.symbols, &self.header)
    }

    /// H, T and E records, one per line.
    pub fn object_program(&self) -> String {
        self.records()
            .iter()
            .map(|record| format!("{}\n", record))
            .collect()
    }

    /// Writes the listing with every source byte as it was read.
    pub fn write_listing(&self, out: &mut impl Write) -> io::Result<()> {
        for line in &self.listing {
            out.write_all(&encode(&line.to_string()))?;
        }
        Ok(())
    }

    pub fn write_object_program(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(&encode(&self.object_program()))
    }
}

pub fn assemble(catalog: &Catalog, source: impl AsRef<[u8]>) -> Assembly {
    assemble_with(catalog, source, &AssemblerOptions::default())
}

/// Tokenizes every line, then runs pass 1 to completion before pass 2.
///
/// `source` is raw bytes: it need not be UTF-8, and every byte counts as one
/// character.
pub fn assemble_with(
    catalog: &Catalog,
    source: impl AsRef<[u8]>,
    options: &AssemblerOptions,
) -> Assembly {
    let frames = source
        .as_ref()
        .split_inclusive(|&b| b == b'\n')
        .enumerate()
        .map(|(i, line)| Frame::from_source(&decode(line), i, catalog))
        .collect::<Vec<_>>();
    debug!(lines = frames.len(), "source tokenized");

    let (symbols, header) = resolve_symbols(&frames, options);
    let listing = translate_to_listing(&frames, &symbols, &header, options);

    Assembly {
        frames,
        symbols,
        header,
        listing,
    }
}
