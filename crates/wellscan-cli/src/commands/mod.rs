//! Command implementations.

pub mod config;
pub mod extract;
pub mod list;
pub mod scan;
pub mod show;

pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::list::execute_list;
pub use self::scan::execute_scan;
pub use self::show::execute_show;
