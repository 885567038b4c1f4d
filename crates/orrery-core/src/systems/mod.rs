pub mod audio;
pub mod frame;
pub mod lighting;
pub mod orbit_hint;
