pub mod detect;
pub mod init;
pub mod scan;
pub mod serve;
mod command_result;

pub use command_result::*;
