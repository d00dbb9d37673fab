pub mod float_ext;
pub mod grid;
pub mod time;
