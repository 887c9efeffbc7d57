pub mod symbol;
pub mod translate;
