// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search history reads and upserts.

use rusqlite::{params, Connection};

use crate::models::SearchHistoryItem;

/// All rows in insertion order.
pub fn select_all(conn: &Connection) -> Result<Vec<SearchHistoryItem>, rusqlite::Error> {
    let mut stmt =
        conn.prepare("SELECT _id, search_query FROM search_history_entry ORDER BY _id ASC")?;
    let items = stmt
        .query_map([], |row| {
            Ok(SearchHistoryItem {
                id: row.get(0)?,
                query: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

/// Inserts `query`, replacing the row that already holds it.
///
/// A replaced row is deleted and re-inserted, so it gets a new `_id` and
/// moves to the end of the insertion order. Returns the new `_id`.
pub fn upsert(conn: &Connection, query: &str) -> Result<i64, rusqlite::Error> {
    conn.execute(
        "INSERT OR REPLACE INTO search_history_entry (search_query) VALUES (?1)",
        params![query],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Number of stored rows.
pub fn count(conn: &Connection) -> Result<i64, rusqlite::Error> {
    conn.query_row("SELECT COUNT(*) FROM search_history_entry", [], |row| {
        row.get(0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE search_history_entry (
                _id INTEGER PRIMARY KEY,
                search_query TEXT NOT NULL UNIQUE
            )",
        )
        .unwrap();
        conn
    }

    fn queries(conn: &Connection) -> Vec<String> {
        select_all(conn)
            .unwrap()
            .into_iter()
            .map(|item| item.query)
            .collect()
    }

    #[test]
    fn select_all_on_empty_table() {
        let conn = setup();
        assert!(select_all(&conn).unwrap().is_empty());
        assert_eq!(count(&conn).unwrap(), 0);
    }

    #[test]
    fn upsert_assigns_increasing_ids() {
        let conn = setup();
        let first = upsert(&conn, "octocat").unwrap();
        let second = upsert(&conn, "torvalds").unwrap();
        assert!(second > first);

        let items = select_all(&conn).unwrap();
        assert_eq!(
            items,
            vec![
                SearchHistoryItem {
                    id: first,
                    query: "octocat".into()
                },
                SearchHistoryItem {
                    id: second,
                    query: "torvalds".into()
                },
            ]
        );
    }

    #[test]
    fn duplicate_query_replaces_row() {
        let conn = setup();
        let old_id = upsert(&conn, "octocat").unwrap();
        upsert(&conn, "torvalds").unwrap();
        let new_id = upsert(&conn, "octocat").unwrap();

        assert_eq!(count(&conn).unwrap(), 2);
        assert_ne!(old_id, new_id);
        assert_eq!(queries(&conn), vec!["torvalds", "octocat"]);
    }

    #[test]
    fn queries_are_case_sensitive() {
        let conn = setup();
        upsert(&conn, "Octocat").unwrap();
        upsert(&conn, "octocat").unwrap();
        assert_eq!(count(&conn).unwrap(), 2);
    }

    #[test]
    fn empty_query_is_stored() {
        let conn = setup();
        upsert(&conn, "").unwrap();
        assert_eq!(queries(&conn), vec![""]);
    }

    #[test]
    fn missing_table_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(select_all(&conn).is_err());
        assert!(upsert(&conn, "octocat").is_err());
    }
}
