pub mod gate;
pub mod manifest;
