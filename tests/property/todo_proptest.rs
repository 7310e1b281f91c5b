//! Ordering and partial-update properties, checked against a fresh
//! in-memory store per case

use proptest::prelude::*;
use todoflow::backend::server::config::load_database;
use todoflow::backend::todos::db;
use todoflow::shared::{NewTodo, TodoPatch};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn item_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 ]{0,30}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_listing_never_goes_forward_in_time(
        texts in prop::collection::vec(item_text(), 1..12),
    ) {
        let listed = runtime().block_on(async {
            let pool = load_database("sqlite::memory:").await.unwrap();
            for text in &texts {
                db::insert_todo(&pool, &NewTodo { text: text.clone(), completed: false })
                    .await
                    .unwrap();
            }
            db::list_todos(&pool).await.unwrap()
        });

        prop_assert_eq!(listed.len(), texts.len());
        for pair in listed.windows(2) {
            prop_assert!(pair[0].created_at >= pair[1].created_at);
        }
        let newest_first: Vec<&String> = texts.iter().rev().collect();
        let listed_texts: Vec<&String> = listed.iter().map(|t| &t.text).collect();
        prop_assert_eq!(listed_texts, newest_first);
    }

    #[test]
    fn test_completion_update_never_alters_text(
        text in item_text(),
        flips in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        let (original, updates) = runtime().block_on(async {
            let pool = load_database("sqlite::memory:").await.unwrap();
            let original = db::insert_todo(&pool, &NewTodo { text: text.clone(), completed: false })
                .await
                .unwrap();

            let mut updates = Vec::new();
            for completed in &flips {
                let patch = TodoPatch { text: None, completed: Some(*completed) };
                updates.push(db::update_todo(&pool, original.id, &patch).await.unwrap().unwrap());
            }
            (original, updates)
        });

        for (updated, completed) in updates.iter().zip(&flips) {
            prop_assert_eq!(&updated.text, &original.text);
            prop_assert_eq!(updated.completed, *completed);
            prop_assert_eq!(updated.created_at, original.created_at);
        }
    }
}
