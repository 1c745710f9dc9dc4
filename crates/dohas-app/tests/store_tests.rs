// Rust guideline compliant 2026-02-09

mod common;

use common::{dataset, ids, store_with, Reply};
use dohas_app::{ErrorCode, InitialState, NoticeKind};
use dohas_core::{bundled, sort_and_flatten, Challenge, DeckMode, Language, Slot, SortOrder};
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

fn with_data(challenges: Vec<Challenge>) -> InitialState {
    InitialState {
        challenges: Some(challenges),
        ..InitialState::default()
    }
}

#[test]
fn test_filter_then_toggle_sort_on_bundled_hindi() {
    let (mut store, _, _) = store_with(InitialState::default());
    assert_eq!(
        store.state().challenges_data,
        bundled::challenges(Language::Hindi)
    );

    store.set_filter_string("1,2,3");
    assert_eq!(ids(&store.state().selected_challenges), vec![1, 2, 3]);

    store.toggle_sort();
    assert_eq!(store.state().sort_order, SortOrder::Desc);
    assert_eq!(ids(&store.state().selected_challenges), vec![3, 2, 1]);
    assert_eq!(store.state().dohas[0].challenge_id, 3);
    assert_eq!(store.state().dohas[0].sequence, 1);
}

#[test]
fn test_filter_rederives_from_authoritative_data() {
    let (mut store, _, _) = store_with(with_data(dataset("base")));

    store.set_filter_string("1");
    assert_eq!(ids(&store.state().selected_challenges), vec![1]);

    store.set_filter_string("2-3");
    assert_eq!(ids(&store.state().selected_challenges), vec![2, 3]);
    assert_eq!(store.state().dohas.len(), 3);
}

#[test]
fn test_malformed_filter_selects_everything() {
    let (mut store, _, _) = store_with(with_data(dataset("base")));
    store.set_filter_string("1");

    for junk in ["1--3", "1, 2", "-1", "१", "२-४"] {
        store.set_filter_string(junk);
        assert_eq!(ids(&store.state().selected_challenges), vec![1, 2, 3]);
        assert_eq!(store.state().filter_string, junk);
    }
}

#[test]
fn test_filter_clears_randomized_and_resets_deck() {
    let (mut store, _, _) = store_with(with_data(dataset("base")));
    store.set_randomized(true);
    store.shuffle();

    store.set_filter_string("1-2");
    assert!(!store.state().randomized);
    assert_eq!(store.state().deck.priorities(), [0, 1, 2]);
    assert_eq!(
        store.state().dohas,
        sort_and_flatten(&store.state().selected_challenges, SortOrder::Asc)
    );
}

#[test]
fn test_randomize_and_restore() {
    let (mut store, _, _) = store_with(InitialState::default());
    let canonical = store.state().dohas.clone();

    store.set_randomized(true);
    assert!(store.state().randomized);
    let mut shuffled = store.state().dohas.clone();
    assert_eq!(shuffled.len(), canonical.len());
    shuffled.sort_by_key(|d| d.key());
    assert_eq!(shuffled, canonical);

    store.set_randomized(false);
    assert!(!store.state().randomized);
    assert_eq!(store.state().dohas, canonical);
}

#[test]
fn test_seeded_stores_shuffle_alike() {
    let initial = InitialState {
        randomized: Some(true),
        ..InitialState::default()
    };
    let (first, _, _) = store_with(initial.clone());
    let (second, _, _) = store_with(initial);
    assert!(first.state().randomized);
    assert_eq!(first.state().dohas, second.state().dohas);
}

#[test]
fn test_go_backwards_moves_last_to_front() {
    let (mut store, _, _) = store_with(InitialState::default());
    let before = store.state().dohas.clone();

    store.go_backwards();
    let after = &store.state().dohas;
    assert_eq!(after.len(), before.len());
    assert_eq!(after.first(), before.last());
    assert_eq!(&after[1..], &before[..before.len() - 1]);
}

#[test]
fn test_deck_rotation_through_store() {
    let (mut store, _, _) = store_with(InitialState::default());
    store.shuffle();
    assert_eq!(store.state().deck.priorities(), [2, 0, 1]);
    store.shuffle();
    store.shuffle();
    assert_eq!(store.state().deck.priorities(), [0, 1, 2]);
    assert_eq!(store.state().deck.data_indices(), [3, 4, 5]);

    let dohas = store.state().dohas.clone();
    let cards = store.visible_cards();
    assert_eq!(cards[0], Some(&dohas[3]));
    assert_eq!(cards[2], Some(&dohas[5]));
}

#[test]
fn test_set_data_index_wraps() {
    let (mut store, _, _) = store_with(InitialState::default());
    let len = store.state().dohas.len() as i64;

    store.set_data_index(Slot::Two, -1);
    assert_eq!(store.state().deck.data_index(Slot::Two) as i64, len - 1);

    store.set_data_index(Slot::Three, len + 2);
    assert_eq!(store.state().deck.data_index(Slot::Three), 2);
}

#[test]
fn test_empty_selection_is_safe() {
    let (mut store, _, _) = store_with(InitialState {
        filter_string: Some("99".to_string()),
        ..InitialState::default()
    });
    assert!(store.state().is_empty());
    assert!(store.state().dohas.is_empty());

    store.set_data_index(Slot::One, 5);
    assert_eq!(store.state().deck.data_index(Slot::One), 0);

    store.shuffle();
    store.go_backwards();
    assert_eq!(store.visible_cards(), [None, None, None]);
}

#[test]
fn test_set_mode() {
    let (mut store, _, _) = store_with(InitialState::default());
    store.set_mode(DeckMode::Quiz);
    assert_eq!(store.state().mode, DeckMode::Quiz);
}

#[tokio::test]
async fn test_initialize_prefers_stored_data() {
    let (mut store, storage, _) = store_with(InitialState {
        filter_string: Some("2".to_string()),
        ..InitialState::default()
    });
    storage.put_challenges(Language::Hindi, &dataset("stored"));

    store.initialize_challenges().await;
    assert_eq!(store.state().challenges_data, dataset("stored"));
    assert_eq!(store.state().selected_challenges[0].title, "stored two");
    assert_eq!(store.state().dohas.len(), 2);
}

#[tokio::test]
async fn test_initialize_falls_back_on_read_failure() {
    let (mut store, storage, _) = store_with(with_data(dataset("old")));
    storage.put_challenges(Language::Hindi, &dataset("stored"));
    storage.fail_reads.store(true, Ordering::SeqCst);

    store.initialize_challenges().await;
    assert_eq!(
        store.state().challenges_data,
        bundled::challenges(Language::Hindi)
    );
}

#[tokio::test]
async fn test_initialize_falls_back_on_unreadable_json() {
    let (mut store, storage, _) = store_with(with_data(dataset("old")));
    storage.put(&Language::Hindi.storage_key(), "{not json");

    store.initialize_challenges().await;
    assert_eq!(store.state().challenges_data[0].title, "भक्ति चैलेंज");
}

#[tokio::test]
async fn test_set_language_keeps_selection() {
    let (mut store, _, _) = store_with(InitialState {
        filter_string: Some("2".to_string()),
        ..InitialState::default()
    });
    store.shuffle();

    store.set_language(Language::English).await;
    let state = store.state();
    assert_eq!(state.language, Language::English);
    assert_eq!(ids(&state.selected_challenges), vec![2]);
    assert_eq!(state.selected_challenges[0].title, "Gyan Challenge");
    assert!(state.dohas.iter().all(|d| d.line1.is_ascii()));
    assert_eq!(state.deck.priorities(), [2, 0, 1]);
}

#[tokio::test]
async fn test_fetch_success_persists_and_reconciles() {
    let (mut store, storage, remote) = store_with(InitialState {
        filter_string: Some("1,3".to_string()),
        ..with_data(dataset("old"))
    });
    remote.reply(Language::Hindi, Reply::Data(dataset("remote-hi")));
    remote.reply(Language::English, Reply::Data(dataset("remote-en")));

    store.fetch_remote_content().await.unwrap();

    assert_eq!(remote.calls.load(Ordering::SeqCst), 2);
    assert_eq!(storage.writes.load(Ordering::SeqCst), 2);
    assert!(storage.raw("contentData_english").is_some());
    assert!(storage.raw("contentData_hindi").is_some());

    let state = store.state();
    assert_eq!(state.challenges_data, dataset("remote-hi"));
    assert_eq!(ids(&state.selected_challenges), vec![1, 3]);
    assert_eq!(state.selected_challenges[1].title, "remote-hi three");
    assert_eq!(state.dohas.len(), 3);
    assert!(!state.is_fetching_remote);

    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Successfully updated challenges!");
}

#[tokio::test]
async fn test_fetch_null_result_fails() {
    let (mut store, storage, remote) = store_with(with_data(dataset("old")));
    remote.reply(Language::Hindi, Reply::Data(dataset("remote-hi")));
    remote.reply(Language::English, Reply::Null);

    let err = store.fetch_remote_content().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmptyResponse);
    assert_eq!(
        err.to_string(),
        "Failed to fetch English challenges: Empty or invalid response"
    );

    assert_eq!(storage.writes.load(Ordering::SeqCst), 0);
    assert_eq!(store.state().challenges_data, dataset("old"));
    assert!(!store.state().is_fetching_remote);
    let notice = store.state().notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.message, "Failed to fetch challenges from remote.");
}

#[tokio::test]
async fn test_fetch_empty_result_fails() {
    let (mut store, _, remote) = store_with(with_data(dataset("old")));
    remote.reply(Language::Hindi, Reply::Data(Vec::new()));
    remote.reply(Language::English, Reply::Data(dataset("remote-en")));

    let err = store.fetch_remote_content().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmptyResponse);
    assert_eq!(store.state().challenges_data, dataset("old"));
}

#[tokio::test]
async fn test_fetch_network_failure_leaves_data_untouched() {
    let (mut store, storage, remote) = store_with(with_data(dataset("old")));
    remote.reply(Language::Hindi, Reply::Fail("connection reset".to_string()));
    remote.reply(Language::English, Reply::Data(dataset("remote-en")));

    let err = store.fetch_remote_content().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::RemoteError);
    assert_eq!(
        err.to_string(),
        "Failed to fetch Hindi challenges: connection reset"
    );
    assert_eq!(storage.writes.load(Ordering::SeqCst), 0);
    assert_eq!(store.state().challenges_data, dataset("old"));
    assert!(!store.state().is_fetching_remote);
}

#[tokio::test]
async fn test_fetch_invalid_dataset_fails() {
    let (mut store, _, remote) = store_with(with_data(dataset("old")));
    let mut duplicated = dataset("remote-hi");
    duplicated.push(Challenge::new(1, "again"));
    remote.reply(Language::Hindi, Reply::Data(duplicated));
    remote.reply(Language::English, Reply::Data(dataset("remote-en")));

    let err = store.fetch_remote_content().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[tokio::test]
async fn test_fetch_storage_write_failure_surfaces() {
    let (mut store, storage, remote) = store_with(with_data(dataset("old")));
    remote.reply(Language::Hindi, Reply::Data(dataset("remote-hi")));
    remote.reply(Language::English, Reply::Data(dataset("remote-en")));
    storage.fail_writes.store(true, Ordering::SeqCst);

    let err = store.fetch_remote_content().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PersistError);
    assert_eq!(
        err.to_string(),
        "Failed to save challenges data to local storage"
    );
    assert!(!store.state().is_fetching_remote);
    assert_eq!(
        store.state().notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Failure)
    );
}

#[tokio::test]
async fn test_busy_flag_is_observable() {
    for succeed in [true, false] {
        let (mut store, _, remote) = store_with(with_data(dataset("old")));
        remote.reply(Language::Hindi, Reply::Data(dataset("remote-hi")));
        if succeed {
            remote.reply(Language::English, Reply::Data(dataset("remote-en")));
        }

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _subscription = store.subscribe(
            |s| s.is_fetching_remote,
            move |new, old| sink.lock().unwrap().push((*new, *old)),
        );

        let outcome = store.fetch_remote_content().await;
        assert_eq!(outcome.is_ok(), succeed);
        assert_eq!(*seen.lock().unwrap(), vec![(true, false), (false, true)]);
    }
}

#[test]
fn test_subscribe_fires_on_change_only() {
    let (mut store, _, _) = store_with(InitialState::default());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _subscription = store.subscribe(
        |s| s.mode,
        move |new, old| sink.lock().unwrap().push((*new, *old)),
    );

    store.set_mode(DeckMode::Default);
    store.shuffle();
    assert!(seen.lock().unwrap().is_empty());

    store.set_mode(DeckMode::Quiz);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(DeckMode::Quiz, DeckMode::Default)]
    );
}

#[test]
fn test_unsubscribe_detaches_listener() {
    let (mut store, _, _) = store_with(InitialState::default());
    let seen = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(
        |s| s.filter_string.clone(),
        move |_, _| *sink.lock().unwrap() += 1,
    );

    store.set_filter_string("1");
    assert_eq!(*seen.lock().unwrap(), 1);
    assert_eq!(store.subscriber_count(), 1);

    assert!(subscription.unsubscribe());
    assert_eq!(store.subscriber_count(), 0);
    store.set_filter_string("2");
    assert_eq!(*seen.lock().unwrap(), 1);
}

#[test]
fn test_subscription_detaches_when_store_dropped() {
    let (store, _, _) = store_with(InitialState::default());
    let subscription = store.subscribe(|s| s.language, |_, _| {});
    assert!(subscription.is_attached());

    drop(store);
    assert!(!subscription.is_attached());
    assert!(!subscription.unsubscribe());
}

#[tokio::test]
async fn test_dismiss_notice() {
    let (mut store, _, _) = store_with(with_data(dataset("old")));
    let _ = store.fetch_remote_content().await;
    assert!(store.state().notice.is_some());

    store.dismiss_notice();
    assert!(store.state().notice.is_none());
}
