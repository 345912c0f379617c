pub mod audio;
pub mod lighting;
pub mod render;
pub mod spin;
