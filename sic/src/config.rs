/// Operands kept per line, extra ones are dropped.
pub const MAX_OPERANDS: usize = 3;

/// Each operand is cut to this many bytes.
/// Long `C'...'` literals lose their closing quote this way and degrade like
/// any other malformed literal.
pub const MAX_OPERAND_LEN: usize = 19;

/// Catalog mnemonics are cut to this many bytes.
pub const MAX_MNEMONIC_LEN: usize = 9;

/// Every SIC instruction is encoded in 3 bytes, whatever its catalog format.
pub const INSTRUCTION_SIZE: i32 = 3;

pub const WORD_SIZE: i32 = 3;

/// Format used when the catalog record has no digit in the format column.
pub const DEFAULT_FORMAT: u8 = 3;

/// The only mnemonic that takes no operand.
pub const ZERO_OPERAND_MNEMONIC: &str = "RSUB";

/// What an instruction operand that names no known symbol encodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedSymbolPolicy {
    /// Address bits are 0, nothing is reported.
    #[default]
    DefaultZero,
}

/// Width of a `BYTE` whose operand is neither `C'...'` nor `X'...'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnquotedBytePolicy {
    /// Takes no space in either pass.
    #[default]
    ZeroWidth,
    /// Reserves one byte in both passes, still without object code.
    OneByte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblerOptions {
    pub unresolved_symbol: UnresolvedSymbolPolicy,
    pub unquoted_byte: UnquotedBytePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_silent() {
        let options = AssemblerOptions::default();
        assert_eq!(
            options.unresolved_symbol,
            UnresolvedSymbolPolicy::DefaultZero
        );
        assert_eq!(options.unquoted_byte, UnquotedBytePolicy::ZeroWidth);
    }
}
