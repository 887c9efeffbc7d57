use super::number;
use super::tokenize::encode;
use crate::config::{UnquotedBytePolicy, WORD_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    START(START),
    END(END),
    BYTE(BYTE),
    WORD(WORD),
    RESB(RESB),
    RESW(RESW),
}

#[derive(Debug, Clone, PartialEq)]
pub struct START {
    pub address: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct END {
    pub first: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BYTE {
    pub literal: ByteLiteral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WORD {
    pub word: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RESB {
    pub bytes: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RESW {
    pub words: i32,
}

/// Operand forms of `BYTE`.
#[derive(Debug, Clone, PartialEq)]
pub enum ByteLiteral {
    /// `C'EOF'`, one byte per character.
    Char(Vec<u8>),
    /// `X'F1'`, hex digits paired from the left.
    Hex(Vec<u8>),
    /// `C'...` or `X'...` without a closing quote. Reserves one byte.
    Malformed,
    /// Anything else, e.g. `BYTE 5`.
    Unquoted,
}

impl ByteLiteral {
    pub fn parse(operand: &str) -> ByteLiteral {
        if operand.starts_with("C'") {
            match quoted(operand) {
                Some(text) => ByteLiteral::Char(encode(text)),
                None => ByteLiteral::Malformed,
            }
        } else if operand.starts_with("X'") {
            match quoted(operand) {
                Some(digits) => ByteLiteral::Hex(hex_pairs(digits)),
                None => ByteLiteral::Malformed,
            }
        } else {
            ByteLiteral::Unquoted
        }
    }

    /// Object bytes, empty when the literal carries no data.
    pub fn data(&self) -> &[u8] {
        match self {
            ByteLiteral::Char(data) | ByteLiteral::Hex(data) => data,
            ByteLiteral::Malformed | ByteLiteral::Unquoted => &[],
        }
    }

    pub fn size(&self, policy: UnquotedBytePolicy) -> i32 {
        match self {
            ByteLiteral::Char(data) | ByteLiteral::Hex(data) => data.len() as i32,
            ByteLiteral::Malformed => 1,
            ByteLiteral::Unquoted => match policy {
                UnquotedBytePolicy::ZeroWidth => 0,
                UnquotedBytePolicy::OneByte => 1,
            },
        }
    }
}

/// Text between the first and the last quote, if there are two of them.
fn quoted(operand: &str) -> Option<&str> {
    let open = operand.find('\'')?;
    let close = operand.rfind('\'')?;
    (close > open).then(|| &operand[open + 1..close])
}

/// `ABC` becomes `[0xAB, 0x0C]`: an odd trailing digit is a byte on its own.
fn hex_pairs(digits: &str) -> Vec<u8> {
    digits
        .as_bytes()
        .chunks(2)
        .map(|chunk| {
            let pair = String::from_utf8_lossy(chunk);
            number::hex(&pair) as u8
        })
        .collect()
}

impl Directive {
    /// Recognises the data and layout directives. `operand` is the first
    /// operand, empty when the line has none.
    pub fn parse(operator: &str, operand: &str) -> Option<Directive> {
        let directive = match operator {
            "START" => Directive::START(START {
                address: number::hex(operand),
            }),
            "END" => Directive::END(END {
                first: (!operand.is_empty()).then(|| operand.to_string()),
            }),
            "BYTE" => Directive::BYTE(BYTE {
                literal: ByteLiteral::parse(operand),
            }),
            "WORD" => Directive::WORD(WORD {
                word: number::decimal(operand),
            }),
            "RESB" => Directive::RESB(RESB {
                bytes: number::decimal(operand),
            }),
            "RESW" => Directive::RESW(RESW {
                words: number::decimal(operand),
            }),
            _ => return None,
        };

        Some(directive)
    }

    /// Bytes this directive moves the location counter by.
    pub fn size(&self, policy: UnquotedBytePolicy) -> i32 {
        match self {
            Directive::START(_) => 0,
            Directive::END(_) => 0,
            Directive::BYTE(b) => b.literal.size(policy),
            Directive::WORD(_) => WORD_SIZE,
            Directive::RESB(r) => r.bytes,
            Directive::RESW(r) => r.words.wrapping_mul(WORD_SIZE),
        }
    }
}

/// Size of a directive from its name and first operand.
///
/// | Directive     | Size                       |
/// |---------------|----------------------------|
/// | `WORD`        | 3                          |
/// | `RESW n`      | 3 × n                      |
/// | `RESB n`      | n                          |
/// | `BYTE C'..'`  | characters between quotes  |
/// | `BYTE X'..'`  | ceil(hex digits / 2)       |
/// | `BYTE` other  | 1                          |
/// | anything else | 0                          |
///
/// The passes size frames with [`Directive::size`] instead, where the width
/// of an unquoted `BYTE` follows [`UnquotedBytePolicy`].
pub fn size_of(directive: &str, operand: &str) -> i32 {
    match Directive::parse(directive, operand) {
        Some(Directive::BYTE(b)) => b.literal.size(UnquotedBytePolicy::OneByte),
        Some(d @ (Directive::WORD(_) | Directive::RESB(_) | Directive::RESW(_))) => {
            d.size(UnquotedBytePolicy::OneByte)
        }
        _ => 0,
    }
}
