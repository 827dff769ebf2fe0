pub mod classify;
pub mod packet;
pub mod summary;
pub mod types;
