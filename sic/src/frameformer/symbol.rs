use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::AssemblerOptions;
use crate::frame::directive::Directive;
use crate::frame::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub address: i32,
}

/// Label addresses in definition order. The first definition of a name is
/// permanent.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn find(&self, name: &str) -> Option<i32> {
        self.index.get(name).map(|&i| self.entries[i].address)
    }

    /// Does nothing if `name` is already defined.
    pub fn add(&mut self, name: &str, address: i32) {
        if self.index.contains_key(name) {
            debug!(name, address, "ignoring redefinition of symbol");
            return;
        }

        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(SymbolEntry {
            name: name.to_string(),
            address,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Written at the end of pass 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub start: i32,
    /// Where pass 2 starts counting. Same as `start`.
    pub locctr: i32,
    pub length: i32,
}

/// Pass 1: assigns an address to every label.
///
/// The first `START` gives the start address and the program name. Counting
/// then runs from the top of the source, skips lines without an operator and
/// every `START`, and stops at the first `END`.
pub fn resolve_symbols(program: &[Frame], options: &AssemblerOptions) -> (SymbolTable, Header) {
    let mut symtab = SymbolTable::new();
    let mut header = Header::default();

    // find START
    for frame in program {
        if let FrameInner::Directive(Directive::START(ref s)) = frame.inner {
            header.start = s.address;
            header.locctr = s.address;
            if let Some(ref name) = frame.label {
                header.name = name.clone();
                symtab.add(name, s.address);
            }
            break;
        }
    }

    // assign addresses
    let mut locctr = header.locctr;
    for frame in program {
        if frame.operator.is_none() || frame.is_start() {
            continue;
        }
        if frame.is_end() {
            break;
        }

        if let Some(ref label) = frame.label {
            trace!(line = frame.line, label = label.as_str(), address = locctr, "define");
            symtab.add(label, locctr);
        }

        locctr = locctr.wrapping_add(frame.size(options.unquoted_byte));
    }

    header.length = locctr.wrapping_sub(header.locctr);

    debug!(
        name = %header.name,
        start = header.start,
        length = header.length,
        symbols = symtab.len(),
        "pass 1 done"
    );

    (symtab, header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::instruction::Catalog;

    fn frames(source: &str) -> Vec<Frame> {
        let catalog = Catalog::load("LDA M 3 00\nSTA M 3 0C\nRSUB M 3 4C\n");
        source
            .split_inclusive('\n')
            .enumerate()
            .map(|(i, line)| Frame::from_source(line, i, &catalog))
            .collect()
    }

    #[test]
    fn first_definition_is_permanent() {
        let mut symtab = SymbolTable::new();
        symtab.add("LOOP", 0x1003);
        symtab.add("LOOP", 0x2000);

        assert_eq!(symtab.find("LOOP"), Some(0x1003));
        assert_eq!(symtab.len(), 1);
    }

    #[test]
    fn lookup_is_exact() {
        let mut symtab = SymbolTable::new();
        symtab.add("ALPHA", 6);

        assert_eq!(symtab.find("ALPHA"), Some(6));
        assert_eq!(symtab.find("alpha"), None);
        assert_eq!(symtab.find("ALPH"), None);
    }

    #[test]
    fn keeps_definition_order() {
        let mut symtab = SymbolTable::new();
        symtab.add("B", 2);
        symtab.add("A", 1);

        let names = symtab.iter().map(|s| s.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn concrete_program() {
        let program = frames(
            "PROG  START 1000\n\
             FIRST LDA   FIVE\n      \
             STA   ALPHA\n\
             ALPHA WORD  5\n\
             FIVE  RESW  1\n      \
             END   FIRST\n",
        );
        let (symtab, header) = resolve_symbols(&program, &AssemblerOptions::default());

        assert_eq!(symtab.find("PROG"), Some(0x1000));
        assert_eq!(symtab.find("FIRST"), Some(0x1000));
        assert_eq!(symtab.find("ALPHA"), Some(0x1006));
        assert_eq!(symtab.find("FIVE"), Some(0x1009));
        assert_eq!(
            header,
            Header {
                name: "PROG".to_string(),
                start: 0x1000,
                locctr: 0x1000,
                length: 0xC,
            }
        );
    }

    #[test]
    fn sequential_instructions() {
        let mut source = String::from("PROG START 1000\n");
        for _ in 0..5 {
            source.push_str("     LDA  PROG\n");
        }
        source.push_str("     RSUB\n");
        let (_, header) = resolve_symbols(&frames(&source), &AssemblerOptions::default());

        assert_eq!(header.length, 6 * 3);
    }

    #[test]
    fn duplicate_label_keeps_first_address() {
        let program = frames(
            "PROG  START 0\n\
             TWICE LDA   TWICE\n\
             TWICE STA   TWICE\n",
        );
        let (symtab, _) = resolve_symbols(&program, &AssemblerOptions::default());

        assert_eq!(symtab.find("TWICE"), Some(0));
    }

    #[test]
    fn no_start_counts_from_zero() {
        let program = frames("A     LDA   B\nB     WORD  1\n");
        let (symtab, header) = resolve_symbols(&program, &AssemblerOptions::default());

        assert_eq!(symtab.find("A"), Some(0));
        assert_eq!(symtab.find("B"), Some(3));
        assert_eq!(header.name, "");
        assert_eq!(header.length, 6);
    }

    #[test]
    fn stops_at_end() {
        let program = frames(
            "P     START 100\n\
             A     RESB  10\n\
             LAST  END   A\n\
             B     WORD  1\n",
        );
        let (symtab, header) = resolve_symbols(&program, &AssemblerOptions::default());

        assert_eq!(symtab.find("A"), Some(0x100));
        assert_eq!(symtab.find("LAST"), None);
        assert_eq!(symtab.find("B"), None);
        assert_eq!(header.length, 10);
    }

    #[test]
    fn label_only_lines_are_not_defined() {
        let program = frames("P START 0\nHERE\nTHERE LDA HERE\n");
        let (symtab, _) = resolve_symbols(&program, &AssemblerOptions::default());

        assert_eq!(symtab.find("HERE"), None);
        assert_eq!(symtab.find("THERE"), Some(0));
    }

    #[test]
    fn second_start_is_skipped() {
        let program = frames(
            "P     START 200\n\
             A     WORD  1\n\
             Q     START 900\n\
             B     WORD  2\n",
        );
        let (symtab, header) = resolve_symbols(&program, &AssemblerOptions::default());

        assert_eq!(header.start, 0x200);
        assert_eq!(symtab.find("Q"), None);
        assert_eq!(symtab.find("B"), Some(0x203));
    }
}
