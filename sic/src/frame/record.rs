use std::fmt::Display;

/// One line of the assembly listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingLine {
    /// 0-based source line index.
    pub line: usize,
    /// None for comments, lines without an operator, and `END`.
    pub address: Option<i32>,
    /// Object bytes. Empty for reservations, `START`, `END` and unknown
    /// operators.
    pub data: Vec<u8>,
    /// The source line verbatim, terminator included, one `char` per byte.
    pub source: String,
}

impl ListingLine {
    pub fn object_code(&self) -> String {
        hex_string(&self.data)
    }
}

impl Display for ListingLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.address {
            Some(address) => write!(f, "{:04X}", address)?,
            None => write!(f, "    ")?,
        }
        write!(f, "  {:<6}  {}", self.object_code(), self.source)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectRecord {
    Header(HeaderRecord),
    Text(TextRecord),
    End(EndRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRecord {
    pub name: String,
    pub start: i32,
    pub length: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRecord {
    pub start: i32,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndRecord {
    pub first: i32,
}

/// Object records use 6 hex digits per address.
const ADDRESS_MASK: i32 = 0xFFFFFF;

impl Display for ObjectRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectRecord::Header(r) => {
                let name = r.name.chars().take(6).collect::<String>();
                write!(
                    f,
                    "H{: <6}{:06X}{:06X}",
                    name,
                    r.start & ADDRESS_MASK,
                    r.length & ADDRESS_MASK
                )
            }
            ObjectRecord::Text(r) => write!(
                f,
                "T{:06X}{:02X}{}",
                r.start & ADDRESS_MASK,
                r.data.len(),
                hex_string(&r.data)
            ),
            ObjectRecord::End(r) => write!(f, "E{:06X}", r.first & ADDRESS_MASK),
        }
    }
}

pub fn hex_string(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<String>>()
        .join("")
}
