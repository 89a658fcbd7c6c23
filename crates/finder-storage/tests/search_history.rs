// SPDX-FileCopyrightText: 2026 Finder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end behaviour of the SQLite search history through the data source trait.

use std::sync::Arc;

use finder_config::StorageConfig;
use finder_core::{ResourceStatus, SearchHistoryDataSource, SearchHistoryItem};
use finder_storage::SqliteSearchHistory;
use tempfile::tempdir;

fn open(dir: &tempfile::TempDir) -> Arc<dyn SearchHistoryDataSource> {
    let config = StorageConfig {
        database_path: dir
            .path()
            .join("search_history.db")
            .to_string_lossy()
            .into_owned(),
        wal_mode: true,
        busy_timeout_ms: 1000,
    };
    Arc::new(SqliteSearchHistory::new(config).expect("data source should start"))
}

async fn all_queries(history: &dyn SearchHistoryDataSource) -> Vec<String> {
    history
        .get_all()
        .settled()
        .await
        .into_success()
        .expect("read should succeed")
        .into_iter()
        .map(|item| item.query)
        .collect()
}

#[tokio::test]
async fn n_distinct_adds_yield_n_items() {
    let dir = tempdir().unwrap();
    let history = open(&dir);

    for login in ["octocat", "torvalds", "gaearon", "sindresorhus", "tj"] {
        let status = history.add(SearchHistoryItem::new(login)).settled().await.status();
        assert_eq!(status, ResourceStatus::Success);
    }

    assert_eq!(
        all_queries(history.as_ref()).await,
        vec!["octocat", "torvalds", "gaearon", "sindresorhus", "tj"]
    );
}

#[tokio::test]
async fn re_adding_a_query_replaces_it() {
    let dir = tempdir().unwrap();
    let history = open(&dir);

    history.add(SearchHistoryItem::new("octocat")).settled().await;
    history.add(SearchHistoryItem::new("torvalds")).settled().await;
    history.add(SearchHistoryItem::new("octocat")).settled().await;

    let items = history.get_all().settled().await.into_success().unwrap();
    assert_eq!(items.len(), 2, "duplicate query must not add a row");
    assert_eq!(items[0].query, "torvalds");
    assert_eq!(items[1].query, "octocat");
    assert!(items[1].id > items[0].id);
}

/// Calls issued without awaiting still run in call order.
#[tokio::test]
async fn unawaited_calls_are_applied_in_call_order() {
    let dir = tempdir().unwrap();
    let history = open(&dir);

    let before = history.get_all();
    let adds: Vec<_> = (0..10)
        .map(|i| history.add(SearchHistoryItem::new(format!("user{i}"))))
        .collect();
    let after = history.get_all();

    assert!(before.settled().await.into_success().unwrap().is_empty());
    for add in adds {
        assert_eq!(add.settled().await.status(), ResourceStatus::Success);
    }
    assert_eq!(after.settled().await.into_success().unwrap().len(), 10);
}

/// Reads racing with writes from other tasks only ever see whole rows, and
/// the row count they observe never goes backwards.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_are_serialized() {
    let dir = tempdir().unwrap();
    let history = open(&dir);

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let history = Arc::clone(&history);
            tokio::spawn(async move {
                for i in 0..25 {
                    let query = format!("writer{w}-query{i}");
                    history.add(SearchHistoryItem::new(query)).settled().await;
                }
            })
        })
        .collect();

    let reader = {
        let history = Arc::clone(&history);
        tokio::spawn(async move {
            let mut last_len = 0;
            for _ in 0..30 {
                let items = history.get_all().settled().await.into_success().unwrap();
                assert!(items.len() >= last_len, "history shrank between reads");
                assert!(items.iter().all(|item| item.query.starts_with("writer")));
                assert!(items.windows(2).all(|pair| pair[0].id < pair[1].id));
                last_len = items.len();
            }
        })
    };

    for writer in writers {
        writer.await.unwrap();
    }
    reader.await.unwrap();

    assert_eq!(all_queries(history.as_ref()).await.len(), 100);
}

#[tokio::test]
async fn every_call_emits_documented_states() {
    let dir = tempdir().unwrap();
    let history = open(&dir);

    let mut read = history.get_all();
    assert_eq!(read.next().await.map(|r| r.status()), Some(ResourceStatus::Loading));
    assert_eq!(read.next().await.map(|r| r.status()), Some(ResourceStatus::Success));
    assert!(read.next().await.is_none());

    let mut write = history.add(SearchHistoryItem::new("octocat"));
    assert_eq!(write.next().await.map(|r| r.status()), Some(ResourceStatus::Success));
    assert!(write.next().await.is_none());
}

/// Results reach the observer on the presentation runtime's thread, not on
/// the database thread or the storage runtime.
#[test]
fn observer_runs_on_presentation_thread() {
    let storage_rt = tokio::runtime::Runtime::new().unwrap();
    let ui_rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    let history = {
        let _guard = storage_rt.enter();
        SqliteSearchHistory::new(StorageConfig::in_memory()).unwrap()
    };
    history.add(SearchHistoryItem::new("octocat"));

    let ui_thread = std::thread::current().id();
    let (tx, rx) = std::sync::mpsc::channel();
    let task = history.get_all().observe_on(ui_rt.handle(), move |resource| {
        let count = resource.clone().into_success().map(|items| items.len());
        tx.send((std::thread::current().id(), resource.status(), count))
            .unwrap();
    });
    ui_rt.block_on(task).unwrap();

    let seen: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        seen,
        vec![
            (ui_thread, ResourceStatus::Loading, None),
            (ui_thread, ResourceStatus::Success, Some(1)),
        ]
    );
}
