//! Normalization and initial-selection resolution.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::model::{OptionGroupObject, OptionList, OptionObject, TextObject};
use crate::options::{InitialSelection, OptionInput, Options, SelectionState};

/// How an option's display text is rendered, and which optional fields survive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFormat {
    /// `plain_text` with `emoji: true` (flat select menus).
    PlainEmoji,
    /// `plain_text` (option groups, radio buttons, accessory menus).
    Plain,
    /// `plain_text` plus `url` (overflow menus).
    Link,
    /// `mrkdwn` text and description (checkboxes).
    Markdown,
}

/// Renders one input option.
pub fn render_option(option: &OptionInput, format: OptionFormat) -> OptionObject {
    let text = match format {
        OptionFormat::PlainEmoji => TextObject::plain_emoji(&option.text),
        OptionFormat::Plain | OptionFormat::Link => TextObject::plain(&option.text),
        OptionFormat::Markdown => TextObject::mrkdwn(&option.text),
    };
    let description = match format {
        OptionFormat::Markdown => option.description.as_deref().filter(|d| !d.is_empty()).map(TextObject::mrkdwn),
        _ => None,
    };
    let url = match format {
        OptionFormat::Link => option.url.clone().filter(|u| !u.is_empty()),
        _ => None,
    };
    OptionObject {
        text,
        value: option.value.clone(),
        description,
        url,
    }
}

/// Renders a flat list of input options, preserving order.
pub fn render_options(options: &[OptionInput], format: OptionFormat) -> Vec<OptionObject> {
    options.iter().map(|o| render_option(o, format)).collect()
}

/// Normalizes options into display form.
///
/// Flat options get `plain_text` with emoji; grouped options keep the
/// caller's group order and per-group option order, with plain labels.
/// Values pass through unchanged.
pub fn normalize(options: &Options) -> OptionList {
    match options {
        Options::Flat(list) => OptionList::Flat(render_options(list, OptionFormat::PlainEmoji)),
        Options::Grouped(groups) => OptionList::Grouped(
            groups
                .iter()
                .map(|group| OptionGroupObject {
                    label: TextObject::plain(&group.label),
                    options: render_options(&group.options, OptionFormat::Plain),
                })
                .collect(),
        ),
    }
}

/// Resolves the initial selection against normalized options.
///
/// Groups are flattened first. See [`resolve_initial_in`] for the rules.
pub fn resolve_initial(options: &OptionList, initial: &InitialSelection, multi: bool) -> SelectionState {
    resolve_initial_in(options.iter(), initial, multi)
}

/// Resolves the initial selection against a sequence of options.
///
/// - multi with a non-empty list: every option whose value matches one of
///   the requested values, in option order (not request order).
/// - single with one value: the first matching option.
/// - anything else, or no match: empty.
///
/// Values are compared by string form, so `1` selects an option valued `"1"`.
pub fn resolve_initial_in<'a, I>(options: I, initial: &InitialSelection, multi: bool) -> SelectionState
where
    I: IntoIterator<Item = &'a OptionObject>,
{
    let state = match (initial, multi) {
        (InitialSelection::Multi(values), true) if !values.is_empty() => {
            let wanted: FxHashSet<_> = values.iter().map(|v| v.as_key()).collect();
            let selected: Vec<OptionObject> = options
                .into_iter()
                .filter(|o| wanted.contains(&*o.value.as_key()))
                .cloned()
                .collect();
            if selected.is_empty() {
                SelectionState::Empty
            } else {
                SelectionState::Multi(selected)
            }
        }
        (InitialSelection::Single(value), false) => options
            .into_iter()
            .find(|o| o.value.matches(value))
            .cloned()
            .map_or(SelectionState::Empty, SelectionState::Single),
        _ => SelectionState::Empty,
    };
    if state.is_empty() && !initial.is_none() {
        trace!(?initial, multi, "initial selection matched no option");
    }
    state
}
