pub mod catalog;
pub mod hash;
pub mod helper;
pub mod init;
pub mod keys;
pub mod transform;
