pub mod assembler;
pub mod snapshot;
