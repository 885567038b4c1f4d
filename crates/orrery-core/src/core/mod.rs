pub mod body;
pub mod registry;
pub mod smoothing;
pub mod time;
