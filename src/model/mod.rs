pub mod level;
pub mod note;
pub mod swing;
