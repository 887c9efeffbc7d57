//! Two-pass assembler for the SIC teaching machine.
//!
//! ```
//! use sic::assembler::assemble;
//! use sic::frame::instruction::Catalog;
//!
//! let catalog = Catalog::load("LDA M 3 00\nSTA M 3 0C\n");
//! let assembly = assemble(
//!     &catalog,
//!     "PROG  START 1000\nFIRST LDA   FIVE\n      STA   FIVE\nFIVE  RESW  1\n",
//! );
//!
//! assert_eq!(assembly.symbols.find("FIVE"), Some(0x1006));
//! assert_eq!(assembly.header.length, 9);
//! ```

pub mod assembler;
pub mod config;
pub mod frame;
pub mod frameformer;
