//! Property tests for the tree token codec.
//!
//! 1. Any valid tree state survives encode then decode unchanged.
//! 2. Percent-encoding a token (legacy double-encoded links) is tolerated.
//! 3. Encoding is deterministic.
//! 4. Inputs outside the token alphabet never decode and fall back to editing.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use proptest::prelude::*;
use std::collections::BTreeSet;
use textmas_core::{decode, encode, Session, TreeState, MAX_CONTENT_CHARS};

fn topper_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("⭐".to_string()),
        Just("🎅🏽".to_string()),
        Just("👨‍👩‍👧".to_string()),
        Just("🇨🇳".to_string()),
        "\\PC",
    ]
}

fn content_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        1 => prop::collection::vec(any::<char>(), MAX_CONTENT_CHARS)
            .prop_map(|chars| chars.into_iter().collect::<String>()),
        2 => "[圣诞快乐新年 \n\tA-Za-z0-9🎄✨]{0,120}",
        4 => prop::collection::vec(any::<char>(), 0..=MAX_CONTENT_CHARS)
            .prop_map(|chars| chars.into_iter().collect::<String>()),
    ]
}

fn highlights_strategy() -> impl Strategy<Value = BTreeSet<usize>> {
    prop_oneof![
        Just(BTreeSet::new()),
        prop::collection::btree_set(0usize..1_275, 0..64),
        prop::collection::btree_set(any::<u32>().prop_map(|value| value as usize), 0..400),
    ]
}

fn tree_strategy() -> impl Strategy<Value = TreeState> {
    (
        topper_strategy(),
        content_strategy(),
        highlights_strategy(),
        prop::option::of(any::<i64>()),
    )
        .prop_map(|(topper, content, highlights, style_index)| TreeState {
            topper,
            content,
            highlights,
            style_index,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_024))]

    #[test]
    fn decode_inverts_encode(tree in tree_strategy()) {
        let token = encode(&tree).expect("encode");
        let decoded = decode(&token).expect("decode");
        prop_assert_eq!(decoded, tree);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn percent_encoded_tokens_decode(tree in tree_strategy()) {
        let token = encode(&tree).expect("encode");
        let escaped = utf8_percent_encode(&token, NON_ALPHANUMERIC).to_string();
        prop_assert_eq!(decode(&escaped).expect("decode escaped"), tree);
    }

    #[test]
    fn encoding_is_deterministic(tree in tree_strategy()) {
        let again = tree.clone();
        prop_assert_eq!(encode(&tree).expect("first"), encode(&again).expect("second"));
    }

    #[test]
    fn out_of_alphabet_input_never_decodes(garbage in "[!#&*()<>?,;:'~^|]{1,40}") {
        prop_assert!(decode(&garbage).is_err());
        prop_assert_eq!(
            Session::from_fragment(&format!("#tree={}", garbage)),
            Session::from_fragment("")
        );
    }
}
