pub mod fs;
pub mod trace;
