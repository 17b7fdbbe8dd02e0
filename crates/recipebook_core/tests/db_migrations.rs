use recipebook_core::db::migrations::latest_version;
use recipebook_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "unit_of_measure");
    assert_table_exists(&conn, "category");
    assert_table_exists(&conn, "recipe");
    assert_table_exists(&conn, "notes");
    assert_table_exists(&conn, "ingredient");
    assert_table_exists(&conn, "recipe_category");
}

#[test]
fn migrations_install_reference_rows() {
    let conn = open_db_in_memory().unwrap();

    for description in [
        "Each",
        "Tablespoon",
        "Teaspoon",
        "Dash",
        "Pint",
        "Cup",
        "Ounce",
        "Pinch",
    ] {
        assert!(
            reference_row_exists(&conn, "unit_of_measure", description),
            "unit of measure `{description}` missing after migration"
        );
    }

    for description in ["American", "Italian", "Mexican", "Fast Food"] {
        assert!(
            reference_row_exists(&conn, "category", description),
            "category `{description}` missing after migration"
        );
    }
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipebook.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "recipe");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

fn reference_row_exists(conn: &Connection, table: &str, description: &str) -> bool {
    let exists: i64 = conn
        .query_row(
            &format!(
                "SELECT EXISTS(SELECT 1 FROM {table} WHERE description = ?1);"
            ),
            [description],
            |row| row.get(0),
        )
        .unwrap();
    exists == 1
}
