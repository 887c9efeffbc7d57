use tracing::debug;

use super::symbol::{Header, SymbolTable};
use crate::config::{AssemblerOptions, UnresolvedSymbolPolicy};
use crate::frame::{
    directive::Directive,
    number,
    record::{EndRecord, HeaderRecord, ListingLine, ObjectRecord, TextRecord},
    *,
};

/// Address field of an instruction.
const ADDRESS_BITS: i32 = 0x7FFF;

/// Text records hold at most this many bytes.
const MAX_TEXT_LENGTH: usize = 30;

/// Pass 2: encodes every frame up to the first `END`.
///
/// Needs the symbol table from pass 1 complete, forward references resolve
/// through it.
pub fn translate_to_listing(
    program: &[Frame],
    symtab: &SymbolTable,
    header: &Header,
    options: &AssemblerOptions,
) -> Vec<ListingLine> {
    let mut listing = Vec::with_capacity(program.len());

    let mut locctr = header.locctr;
    for frame in program {
        let mut address = Some(locctr);
        let mut data = vec![];

        match frame.inner {
            FrameInner::Comment | FrameInner::Empty => address = None,
            FrameInner::Instruction(ref i) => {
                let target = match i.target {
                    Some(ref operand) => resolve_operand(operand, symtab, options),
                    None => 0,
                };
                let code = (i.opcode as i32) << 16
                    | (i.indexed as i32) << 15
                    | (target & ADDRESS_BITS);
                data = word_bytes(code);
            }
            FrameInner::Directive(ref d) => match d {
                Directive::END(_) => {
                    listing.push(ListingLine {
                        line: frame.line,
                        address: None,
                        data,
                        source: frame.source.clone(),
                    });
                    break;
                }
                Directive::WORD(w) => data = word_bytes(w.word),
                Directive::BYTE(b) => data = b.literal.data().to_vec(),
                Directive::START(_) | Directive::RESB(_) | Directive::RESW(_) => {}
            },
            FrameInner::Unknown => {}
        }

        listing.push(ListingLine {
            line: frame.line,
            address,
            data,
            source: frame.source.clone(),
        });

        locctr = locctr.wrapping_add(frame.size(options.unquoted_byte));
    }

    debug!(lines = listing.len(), "pass 2 done");

    listing
}

/// Symbol address, else the unresolved-symbol default for names, else a
/// decimal literal.
pub fn resolve_operand(operand: &str, symtab: &SymbolTable, options: &AssemblerOptions) -> i32 {
    if let Some(address) = symtab.find(operand) {
        return address;
    }

    if operand.starts_with(|c: char| c.is_ascii_alphabetic()) {
        match options.unresolved_symbol {
            UnresolvedSymbolPolicy::DefaultZero => {
                debug!(operand, "undefined symbol, using address 0");
                0
            }
        }
    } else {
        number::decimal(operand)
    }
}

/// Low 24 bits, most significant byte first.
fn word_bytes(value: i32) -> Vec<u8> {
    vec![(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

/// Builds the H, T and E records from the listing.
///
/// Object bytes at contiguous addresses share a text record; reservations
/// leave a gap and start a new one.
pub fn translate_to_record(
    program: &[Frame],
    listing: &[ListingLine],
    symtab: &SymbolTable,
    header: &Header,
) -> Vec<ObjectRecord> {
    let mut records = vec![ObjectRecord::Header(HeaderRecord {
        name: header.name.clone(),
        start: header.start,
        length: header.length,
    })];

    let mut current: Option<TextRecord> = None;
    for line in listing {
        let address = match line.address {
            Some(address) if !line.data.is_empty() => address,
            _ => continue,
        };

        for (offset, byte) in line.data.iter().enumerate() {
            let address = address.wrapping_add(offset as i32);
            let contiguous = current.as_ref().is_some_and(|r| {
                r.start.wrapping_add(r.data.len() as i32) == address
                    && r.data.len() < MAX_TEXT_LENGTH
            });

            if !contiguous {
                if let Some(record) = current.take() {
                    records.push(ObjectRecord::Text(record));
                }
                current = Some(TextRecord {
                    start: address,
                    data: vec![],
                });
            }

            if let Some(ref mut record) = current {
                record.data.push(*byte);
            }
        }
    }
    if let Some(record) = current {
        records.push(ObjectRecord::Text(record));
    }

    let first = program
        .iter()
        .find_map(|frame| match frame.inner {
            FrameInner::Directive(Directive::END(ref e)) => Some(e),
            _ => None,
        })
        .and_then(|e| e.first.as_deref())
        .and_then(|first| symtab.find(first))
        .unwrap_or(header.start);
    records.push(ObjectRecord::End(EndRecord { first }));

    records
}
