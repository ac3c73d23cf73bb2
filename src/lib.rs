//! # mysql-catalog
//!
//! Small helpers for applications that build MySQL statements dynamically.
//!
//! ## Features
//!
//! - **Table Existence**: Ask `information_schema` whether a table exists
//! - **Column Listing**: Fetch a table's column names, sorted A to Z
//! - **Identifier Checks**: Reject names containing anything other than Latin
//!   letters, numbers and underscores
//! - **Backtick Screening**: Double backticks inside backtick-quoted text
//!
//! Catalog lookups bind schema and table names as statement parameters. The
//! connection is always supplied by the caller; this crate never opens, pools
//! or closes one.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mysql_catalog::{ConnectionConfig, check_identifier, table_column_names, table_exists};
//! use sqlx::MySqlPool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConnectionConfig::builder("shop")
//!         .user("app")
//!         .password("secret")
//!         .build()?;
//!     let pool = MySqlPool::connect_with(config.connect_options()).await?;
//!
//!     if table_exists(&pool, "shop", "orders").await? {
//!         for column in table_column_names(&pool, "shop", "orders").await? {
//!             check_identifier(&column)?;
//!             println!("{column}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod sql;

pub use catalog::{QUERY_TABLE_COLUMN_NAMES, QUERY_TABLE_EXISTS, table_column_names, table_exists};
pub use config::{ConnectionConfig, ConnectionConfigBuilder};
pub use error::{CatalogError, Result};
pub use sql::sanitize::{
    check_identifier, check_table_name, identifier_is_good, screen_backtick_quotes,
};
