pub mod add;
pub mod components;
pub mod init;
pub mod lint;
pub mod preset;
pub mod remove;
