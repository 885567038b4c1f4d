pub mod controller;
pub mod manual;
