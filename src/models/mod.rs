pub mod catalog;
pub mod export;
pub mod outline;
pub mod presenter;
