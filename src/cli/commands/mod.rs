pub mod init;
pub mod languages;
pub mod resolve;
pub mod translate;

mod shared;
