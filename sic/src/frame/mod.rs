pub mod directive;
pub mod instruction;
pub mod number;
pub mod record;
pub mod tokenize;

use directive::*;
use instruction::*;
use tokenize::*;

use crate::config::{UnquotedBytePolicy, INSTRUCTION_SIZE};

/// One tokenized source line.
/// Frames are immutable and kept in source order, one per line.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// 0-based line index.
    pub line: usize,
    /// The line as read, terminator included, one `char` per source byte.
    pub source: String,
    pub label: Option<String>,
    pub operator: Option<String>,
    pub operands: Vec<String>,
    pub inner: FrameInner,
}

/// What a line does, resolved once while tokenizing.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameInner {
    /// A line whose first non-blank character is `.`.
    Comment,
    /// A blank or label-only line.
    Empty,
    Instruction(Instruction),
    Directive(Directive),
    /// An operator that is neither an instruction nor a directive.
    Unknown,
}

/// An instruction line ready to be encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub opcode: u8,
    /// First operand, resolved against the symbol table in pass 2.
    pub target: Option<String>,
    /// Second operand is exactly `X`.
    pub indexed: bool,
}

impl Frame {
    /// Tokenizes one source line.
    ///
    /// Whether the first word is a label depends on the catalog: if it names
    /// an instruction the line has no label, otherwise it is the label and the
    /// second word is the operator. An unlabeled `END FIRST` therefore reads
    /// as label `END` with operator `FIRST`.
    pub fn from_source(source: &str, line: usize, catalog: &Catalog) -> Frame {
        if is_comment(source) {
            return Frame {
                line,
                source: source.to_string(),
                label: None,
                operator: None,
                operands: vec![],
                inner: FrameInner::Comment,
            };
        }

        let words = split_words(source);
        let (label, operator, operands) = if catalog.find(words.first).is_some() {
            let operands = split_operands(words.second.into_iter().chain([words.rest]));
            (None, Some(words.first), operands)
        } else {
            let label = (!words.first.is_empty()).then_some(words.first);
            (label, words.second, split_operands([words.rest]))
        };

        let inner = match operator {
            Some(operator) => Frame::parse_inner(operator, &operands, catalog),
            None => FrameInner::Empty,
        };

        Frame {
            line,
            source: source.to_string(),
            label: label.map(str::to_string),
            operator: operator.map(str::to_string),
            operands,
            inner,
        }
    }

    /// `START` and `END` win over the catalog, the catalog wins over the data
    /// directives.
    pub fn parse_inner(operator: &str, operands: &[String], catalog: &Catalog) -> FrameInner {
        let first = operands.first().map(String::as_str).unwrap_or("");

        if matches!(operator, "START" | "END") {
            if let Some(directive) = Directive::parse(operator, first) {
                return FrameInner::Directive(directive);
            }
        }

        if let Some(def) = catalog.find(operator) {
            return FrameInner::Instruction(Instruction {
                opcode: def.opcode,
                target: operands.first().cloned(),
                indexed: operands.get(1).is_some_and(|o| o == "X"),
            });
        }

        match Directive::parse(operator, first) {
            Some(directive) => FrameInner::Directive(directive),
            None => FrameInner::Unknown,
        }
    }

    /// Bytes the frame occupies. Both passes advance by this amount.
    pub fn size(&self, policy: UnquotedBytePolicy) -> i32 {
        match &self.inner {
            FrameInner::Instruction(_) => INSTRUCTION_SIZE,
            FrameInner::Directive(d) => d.size(policy),
            FrameInner::Comment | FrameInner::Empty | FrameInner::Unknown => 0,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self.inner, FrameInner::Directive(Directive::START(_)))
    }

    pub fn is_end(&self) -> bool {
        matches!(self.inner, FrameInner::Directive(Directive::END(_)))
    }
}
