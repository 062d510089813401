pub mod config;
pub mod logging;

pub mod checksum;
pub mod download;
pub mod filename;
pub mod http;
pub mod listing;
pub mod report;
pub mod retry;
pub mod suite;
