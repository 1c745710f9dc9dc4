// Rust guideline compliant 2026-02-06

//! Unit tests for the three-slot deck rotator.

use dohas_core::{sort_and_flatten, Challenge, DeckRotator, Slot, SortOrder, DECK_SIZE};

#[test]
fn test_shuffle_sequence_matches_reference() {
    let mut rotator = DeckRotator::new();

    rotator.shuffle();
    assert_eq!(rotator.priorities(), [2, 0, 1]);
    assert_eq!(rotator.data_indices(), [0, 1, 2]);

    rotator.shuffle();
    assert_eq!(rotator.priorities(), [1, 2, 0]);
    assert_eq!(rotator.data_indices(), [3, 4, 2]);

    rotator.shuffle();
    assert_eq!(rotator.priorities(), [0, 1, 2]);
    assert_eq!(rotator.data_indices(), [3, 4, 5]);
}

#[test]
fn test_three_shuffles_advance_a_full_deck() {
    let mut rotator = DeckRotator::new();
    for round in 1..=5 {
        for _ in 0..DECK_SIZE {
            rotator.shuffle();
        }
        assert_eq!(rotator.priorities(), [0, 1, 2]);
        let base = round * DECK_SIZE;
        assert_eq!(rotator.data_indices(), [base, base + 1, base + 2]);
    }
}

#[test]
fn test_front_card_follows_flattened_order() {
    let challenges = vec![
        Challenge::new(1, "One").with_doha(1, "a", "").with_doha(2, "b", "").with_doha(3, "c", ""),
        Challenge::new(2, "Two").with_doha(4, "d", "").with_doha(5, "e", ""),
    ];
    let dohas = sort_and_flatten(&challenges, SortOrder::Asc);
    let mut rotator = DeckRotator::new();
    let mut seen = Vec::new();

    for _ in 0..7 {
        let front = Slot::ALL
            .into_iter()
            .find(|slot| rotator.priority(*slot) == 0)
            .and_then(|slot| rotator.resolve(slot, dohas.len()))
            .map(|i| dohas[i].id);
        seen.push(front);
        rotator.shuffle();
    }

    // Five cards wrap around to the start.
    let expected: Vec<Option<u32>> = [1, 2, 3, 4, 5, 1, 2].into_iter().map(Some).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_visible_wraps_modulo_length() {
    let challenges = vec![Challenge::new(1, "One").with_doha(1, "a", "").with_doha(2, "b", "")];
    let dohas = sort_and_flatten(&challenges, SortOrder::Asc);
    let rotator = DeckRotator::new();

    let visible: Vec<u32> = rotator.visible(&dohas).iter().flatten().map(|d| d.id).collect();
    assert_eq!(visible, vec![1, 2, 1]);
}

#[test]
fn test_set_data_index_on_empty_sequence() {
    let mut rotator = DeckRotator::new();
    assert_eq!(rotator.set_data_index(Slot::One, 5, 0), 0);
    assert_eq!(rotator.set_data_index(Slot::Two, -7, 0), 0);
    assert_eq!(rotator.set_data_index(Slot::Three, i64::MAX, 0), 0);
    assert_eq!(rotator.data_indices(), [0, 0, 0]);
}

#[test]
fn test_set_data_index_wraps() {
    let mut rotator = DeckRotator::new();
    assert_eq!(rotator.set_data_index(Slot::One, 5, 4), 1);
    assert_eq!(rotator.set_data_index(Slot::Two, 7, 4), 3);
    assert_eq!(rotator.set_data_index(Slot::Three, -1, 4), 3);
}

#[test]
fn test_reset_restores_initial_registers() {
    let mut rotator = DeckRotator::new();
    rotator.shuffle();
    rotator.shuffle();
    rotator.reset();
    assert_eq!(rotator, DeckRotator::new());
}
