//! CLI command handlers. Each command is in its own file for clarity.

mod checksum;
mod download;
mod list;
mod run;
mod special;

pub use checksum::run_checksum;
pub use download::run_download;
pub use list::run_list;
pub use run::run_suite;
pub use special::run_special;
