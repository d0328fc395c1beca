pub mod date;
pub mod formatting;
pub mod fs_utils;
pub mod path;
pub mod time;
