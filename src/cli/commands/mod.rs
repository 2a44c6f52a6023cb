pub mod audit;
pub mod consolidate;
pub mod delete;
pub mod init;
