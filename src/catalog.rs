//! Catalog lookups against `information_schema`
//!
//! Both lookups take any MySQL executor (a pool, a pooled connection or a
//! transaction) and bind schema and table names as statement parameters, so
//! the names never become part of the SQL text. Statements are issued as
//! non-persistent: the prepared statement lives only for the duration of the
//! call and is closed by the driver before the future completes.

use sqlx::{Executor, MySql};

use crate::error::Result;

/// Counts tables named `table_name` in schema `table_schema`
pub const QUERY_TABLE_EXISTS: &str = r#"
SELECT COUNT(*)
FROM information_schema.tables
WHERE
    (table_schema = ?) AND
    (table_name = ?)
"#;

/// Lists the column names of one table, A to Z
///
/// `COLUMN_NAME` is cast to `CHAR` because some server versions report
/// `information_schema` text columns with a binary type.
pub const QUERY_TABLE_COLUMN_NAMES: &str = r#"
SELECT
    CAST(COLUMN_NAME AS CHAR) AS col
FROM information_schema.columns
WHERE
    (table_schema = ?) AND
    (table_name = ?)
ORDER BY col ASC
"#;

/// Check whether a table exists
///
/// Returns `true` only when the catalog reports exactly one matching table.
///
/// # Example
/// ```rust,no_run
/// # async fn run(pool: sqlx::MySqlPool) -> mysql_catalog::Result<()> {
/// let exists = mysql_catalog::table_exists(&pool, "shop", "orders").await?;
/// # Ok(())
/// # }
/// ```
pub async fn table_exists<'e, E>(executor: E, schema_name: &str, table_name: &str) -> Result<bool>
where
    E: Executor<'e, Database = MySql>,
{
    let (tables_count,): (i64,) = sqlx::query_as(QUERY_TABLE_EXISTS)
        .bind(schema_name)
        .bind(table_name)
        .persistent(false)
        .fetch_one(executor)
        .await?;

    tracing::debug!(
        schema = schema_name,
        table = table_name,
        tables_count,
        "table existence checked"
    );

    Ok(single_table(tables_count))
}

// Exactly one catalog row counts as existing; anything else does not.
fn single_table(tables_count: i64) -> bool {
    tables_count == 1
}

/// List a table's column names sorted alphabetically (A to Z)
///
/// The ordering comes from the catalog query. A table that does not exist
/// yields an empty list rather than an error.
pub async fn table_column_names<'e, E>(
    executor: E,
    schema_name: &str,
    table_name: &str,
) -> Result<Vec<String>>
where
    E: Executor<'e, Database = MySql>,
{
    let column_names: Vec<String> = sqlx::query_scalar(QUERY_TABLE_COLUMN_NAMES)
        .bind(schema_name)
        .bind(table_name)
        .persistent(false)
        .fetch_all(executor)
        .await?;

    tracing::debug!(
        schema = schema_name,
        table = table_name,
        columns = column_names.len(),
        "table columns listed"
    );

    Ok(column_names)
}
