use std::collections::HashMap;

use tracing::debug;

use super::number;
use super::tokenize::decode;
use crate::config::{DEFAULT_FORMAT, MAX_MNEMONIC_LEN, ZERO_OPERAND_MNEMONIC};

/// One record of the instruction-definition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionDef {
    pub mnemonic: String,
    pub opcode: u8,
    /// As written in the table. The encoder emits 3 bytes regardless.
    pub format: u8,
    /// 0 or 1.
    pub arity: u8,
}

impl InstructionDef {
    /// Parses `<mnemonic> <kind> <format> <opcode>`.
    /// Returns None if the record has fewer than four fields. The mnemonic is
    /// cut to [`MAX_MNEMONIC_LEN`] bytes.
    pub fn parse(record: &str) -> Option<InstructionDef> {
        let mut fields = record.split_ascii_whitespace();
        let mnemonic = fields.next()?.chars().take(MAX_MNEMONIC_LEN).collect::<String>();
        let _kind = fields.next()?;
        let format = fields.next()?;
        let opcode = fields.next()?;

        let format = if format.starts_with(|c: char| c.is_ascii_digit()) {
            number::decimal(format) as u8
        } else {
            DEFAULT_FORMAT
        };
        let arity = if mnemonic == ZERO_OPERAND_MNEMONIC { 0 } else { 1 };

        Some(InstructionDef {
            mnemonic,
            opcode: number::hex(opcode) as u8,
            format,
            arity,
        })
    }
}

/// Instruction table keyed by mnemonic.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, InstructionDef>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Loads an instruction-definition table.
    ///
    /// Blank lines and lines starting with `#` are comments. Records that
    /// cannot be parsed are dropped and the load carries on. When a mnemonic
    /// is defined twice the first record is kept.
    pub fn load(records: impl AsRef<[u8]>) -> Catalog {
        let records = decode(records.as_ref());
        let mut catalog = Catalog::new();

        for (i, record) in records.lines().enumerate() {
            if record.bytes().all(|b| b.is_ascii_whitespace()) || record.starts_with('#') {
                continue;
            }

            match InstructionDef::parse(record) {
                Some(def) => catalog.insert(def),
                None => debug!(line = i + 1, record, "skipping malformed instruction record"),
            }
        }

        debug!(instructions = catalog.len(), "instruction catalog loaded");
        catalog
    }

    /// Adds a definition unless its mnemonic is already known.
    pub fn insert(&mut self, def: InstructionDef) {
        self.entries.entry(def.mnemonic.clone()).or_insert(def);
    }

    pub fn find(&self, mnemonic: &str) -> Option<&InstructionDef> {
        self.entries.get(mnemonic)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
