pub mod buildings;
pub mod client;
pub mod programs;
pub mod requests;
pub mod tms;
pub mod ui;

pub use crate::domain::envelope::{ApiResponse, PagedList, PageQuery};
pub use crate::domain::ports::ApiConfig;
pub use crate::utils::error::Result;
pub use client::{fetch_all_pages, ApiClient};
