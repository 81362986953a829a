pub mod config;
pub mod key;
pub mod record;
pub mod report;
pub mod value;
