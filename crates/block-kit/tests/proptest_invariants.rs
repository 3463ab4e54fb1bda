//! Property-based invariant tests for validation and option resolution.
//!
//! 1. Option lists of 1 to 100 valid options pass; 0 or 101 fail.
//! 2. Options with empty or over-long text or value fail.
//! 3. Block id uniqueness agrees with a naive pairwise check and names the duplicate.
//! 4. Initial-selection resolution is idempotent.
//! 5. Multi-select resolution preserves option order, not request order.
//! 6. Numeric and string values match on their string form.
//! 7. Grouping by capacity yields ceil(n / capacity) sub-groups and keeps order.
//! 8. Modal titles: missing fails as required, 1 to 24 passes, over 24 fails as a bound.
//! 9. A confirmation dialog missing any one field fails.

use block_kit::builder::ViewBuilder;
use block_kit::config::{ConfirmDialog, ViewConfig};
use block_kit::model::{Block, DividerBlock, OptionList, ViewType};
use block_kit::options::{
    InitialSelection, OptionInput, Options, SelectionState, group_by_capacity, normalize, resolve_initial,
};
use block_kit::validate::nodes::validate_confirm_dialog;
use block_kit::validate::{require_option_list, require_unique_identifiers};
use block_kit::{OptionValue, ViolationKind};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn option_strategy() -> impl Strategy<Value = OptionInput> {
    ("[a-zA-Z ]{1,40}", "[a-z0-9_]{1,40}").prop_map(|(text, value)| OptionInput::new(text, value))
}

/// Options valued `"0"`, `"1"`, … so values are unique.
fn numbered_options(n: usize) -> Vec<OptionInput> {
    (0..n).map(|i| OptionInput::new(format!("Option {i}"), i.to_string())).collect()
}

fn values(options: &[block_kit::OptionObject]) -> Vec<String> {
    options.iter().map(|o| o.value.to_string()).collect()
}

fn divider(id: Option<String>) -> Block {
    Block::Divider(DividerBlock { block_id: id })
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Option list bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn option_list_within_bounds_passes(options in prop::collection::vec(option_strategy(), 1..=100)) {
        prop_assert!(require_option_list(&Options::Flat(options), 100).is_ok());
    }

    #[test]
    fn option_list_outside_bounds_fails(len in prop_oneof![Just(0usize), Just(101usize)]) {
        let err = require_option_list(&Options::Flat(numbered_options(len)), 100).unwrap_err();
        prop_assert_eq!(err.kind(), ViolationKind::Bound);
    }

    #[test]
    fn option_with_bad_text_fails(
        mut options in prop::collection::vec(option_strategy(), 1..=20),
        index in any::<prop::sample::Index>(),
        text_len in prop_oneof![Just(0usize), 151usize..=300],
    ) {
        let i = index.index(options.len());
        options[i].text = "x".repeat(text_len);
        let err = require_option_list(&Options::Flat(options), 100).unwrap_err();
        prop_assert_eq!(err.kind(), ViolationKind::Bound);
    }

    #[test]
    fn option_with_long_value_fails(mut options in prop::collection::vec(option_strategy(), 1..=20)) {
        options[0].value = OptionValue::from("v".repeat(151));
        prop_assert!(require_option_list(&Options::Flat(options), 100).is_err());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Block id uniqueness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unique_identifiers_match_pairwise_check(
        ids in prop::collection::vec(prop::option::of("[abc]{0,2}"), 0..12),
    ) {
        let blocks: Vec<Block> = ids.iter().cloned().map(divider).collect();
        let present: Vec<&String> = ids.iter().flatten().filter(|id| !id.is_empty()).collect();
        let has_duplicate = present
            .iter()
            .enumerate()
            .any(|(i, a)| present[i + 1..].iter().any(|b| a == b));

        prop_assert_eq!(require_unique_identifiers(&blocks).is_ok(), !has_duplicate);
    }

    #[test]
    fn duplicate_identifier_is_named(
        id in "[a-z]{1,10}",
        mut others in prop::collection::vec("[0-9]{1,4}", 0..8),
        at in any::<prop::sample::Index>(),
    ) {
        others.sort();
        others.dedup();
        let mut blocks: Vec<Block> = others.into_iter().map(|o| divider(Some(o))).collect();
        blocks.push(divider(Some(id.clone())));
        let position = at.index(blocks.len() + 1);
        blocks.insert(position, divider(Some(id.clone())));

        let err = require_unique_identifiers(&blocks).unwrap_err();
        prop_assert_eq!(err.kind(), ViolationKind::Uniqueness);
        prop_assert!(err.to_string().contains(&id));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-6. Initial selection resolution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolution_is_idempotent(
        n in 1usize..30,
        wanted in prop::collection::vec(0usize..40, 0..10),
        multi in any::<bool>(),
    ) {
        let options = normalize(&Options::Flat(numbered_options(n)));
        let initial = if multi {
            InitialSelection::from(wanted.iter().map(|w| w.to_string()).collect::<Vec<_>>())
        } else {
            wanted.first().map_or(InitialSelection::None, |w| InitialSelection::from(w.to_string()))
        };
        let first = resolve_initial(&options, &initial, multi);
        let second = resolve_initial(&options, &initial, multi);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn multi_resolution_keeps_option_order(
        n in 1usize..30,
        wanted in prop::collection::vec(0usize..30, 1..10),
    ) {
        let options = normalize(&Options::Flat(numbered_options(n)));
        let initial = InitialSelection::from(wanted.iter().rev().map(|w| w.to_string()).collect::<Vec<_>>());

        let expected: Vec<String> = (0..n).filter(|i| wanted.contains(i)).map(|i| i.to_string()).collect();
        match resolve_initial(&options, &initial, true) {
            SelectionState::Multi(selected) => prop_assert_eq!(values(&selected), expected),
            SelectionState::Empty => prop_assert!(expected.is_empty()),
            SelectionState::Single(_) => prop_assert!(false, "multi select resolved to a single option"),
        }
    }

    #[test]
    fn numeric_selection_matches_string_value(n in 1i64..50, pick in 0i64..50) {
        let inputs: Vec<OptionInput> = (0..n).map(|i| OptionInput::new(format!("#{i}"), i.to_string())).collect();
        let options = normalize(&Options::Flat(inputs));
        let state = resolve_initial(&options, &InitialSelection::Single(OptionValue::from(pick)), false);
        if pick < n {
            let selected = state.into_single();
            prop_assert_eq!(selected.map(|o| o.value), Some(OptionValue::from(pick.to_string())));
        } else {
            prop_assert!(state.is_empty());
        }
    }

    #[test]
    fn single_value_with_multi_selects_nothing(n in 1usize..20, pick in 0usize..20) {
        let options = normalize(&Options::Flat(numbered_options(n)));
        let state = resolve_initial(&options, &InitialSelection::from(pick.to_string()), true);
        prop_assert!(state.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Grouping by capacity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grouping_splits_and_preserves_order(n in 1usize..400, capacity in 1usize..150) {
        let inputs = numbered_options(n);
        let groups = group_by_capacity(inputs.clone(), |_| Some("Zone".to_string()), capacity);

        prop_assert_eq!(groups.len(), n.div_ceil(capacity));
        prop_assert!(groups.iter().all(|g| !g.options.is_empty() && g.options.len() <= capacity));
        if groups.len() == 1 {
            prop_assert_eq!(groups[0].label.as_str(), "Zone");
        } else {
            for (i, group) in groups.iter().enumerate() {
                prop_assert_eq!(group.label.clone(), format!("Zone-{}", i + 1));
            }
        }

        let flattened: Vec<OptionInput> = groups.into_iter().flat_map(|g| g.options).collect();
        prop_assert_eq!(flattened, inputs);
    }
}

#[test]
fn grouping_250_items_by_100() {
    let groups = group_by_capacity(numbered_options(250), |_| Some("Asia".to_string()), 100);
    let shape: Vec<(&str, usize)> = groups.iter().map(|g| (g.label.as_str(), g.options.len())).collect();
    assert_eq!(shape, vec![("Asia-1", 100), ("Asia-2", 100), ("Asia-3", 50)]);

    let grouped = normalize(&Options::Grouped(groups));
    assert!(matches!(grouped, OptionList::Grouped(_)));
    let order: Vec<String> = grouped.iter().map(|o| o.value.to_string()).collect();
    let expected: Vec<String> = (0..250).map(|i| i.to_string()).collect();
    assert_eq!(order, expected);
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Modal titles
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn modal_title_bounds(len in 0usize..60) {
        let config = ViewConfig {
            title: (len > 0).then(|| "t".repeat(len)),
            ..Default::default()
        };
        let result = ViewBuilder::with_config(ViewType::Modal, config)
            .block(divider(None))
            .build();
        match len {
            0 => prop_assert_eq!(result.unwrap_err().kind(), ViolationKind::RequiredField),
            1..=24 => prop_assert!(result.is_ok()),
            _ => prop_assert_eq!(result.unwrap_err().kind(), ViolationKind::Bound),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Confirmation dialogs are all-or-nothing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn confirm_dialog_missing_one_field_fails(missing in 0usize..4, title in "[A-Za-z]{1,20}") {
        let mut dialog = ConfirmDialog::new(title, "Are you sure?", "Yes", "No");
        match missing {
            0 => dialog.title = None,
            1 => dialog.description = None,
            2 => dialog.confirm_text = None,
            _ => dialog.cancel_text = None,
        }
        let err = validate_confirm_dialog(&dialog).unwrap_err();
        prop_assert_eq!(err.kind(), ViolationKind::RequiredField);
    }
}

#[test]
fn confirm_dialog_missing_cancel_text() {
    let dialog = ConfirmDialog {
        cancel_text: None,
        ..ConfirmDialog::new("Delete?", "This is permanent", "Delete", "Keep")
    };
    assert!(validate_confirm_dialog(&dialog).is_err());
    assert!(validate_confirm_dialog(&ConfirmDialog::default()).is_ok());
}
