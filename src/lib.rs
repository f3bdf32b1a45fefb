pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{fetch_all_pages, ApiClient, ApiResponse, PagedList, PageQuery};
pub use utils::error::{ClientError, Result};
