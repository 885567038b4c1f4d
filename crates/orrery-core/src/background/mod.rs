pub mod field;
pub mod noise;
