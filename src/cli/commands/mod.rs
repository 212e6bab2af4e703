pub mod init;
pub mod print;
pub mod strip;
