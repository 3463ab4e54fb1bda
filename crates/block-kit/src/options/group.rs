//! Capacity-bounded grouping of large option lists.
//!
//! The platform rejects any option group holding more than
//! [`OPTION_GROUP_CAPACITY`] options. Reference-data pickers therefore group
//! their options by a natural key (time-zone prefix, country initial) and
//! split any oversized group into numbered sub-groups. The split is
//! deterministic and order-preserving.

use std::ops::RangeInclusive;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::limits::OPTION_GROUP_CAPACITY;
use crate::options::{OptionGroupInput, OptionInput};
use crate::reference::{Country, TimeZone};

/// Partitions options by `key`, then splits each group to at most `capacity`.
///
/// Groups appear in order of their key's first occurrence; options keep
/// their input order. Options for which `key` returns `None` are dropped.
/// A group larger than `capacity` becomes `"<label>-1"`, `"<label>-2"`, ….
pub fn group_by_capacity<I, F>(options: I, mut key: F, capacity: usize) -> Vec<OptionGroupInput>
where
    I: IntoIterator<Item = OptionInput>,
    F: FnMut(&OptionInput) -> Option<String>,
{
    let mut groups: Vec<(String, Vec<OptionInput>)> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    for option in options {
        let Some(label) = key(&option) else {
            continue;
        };
        match index.get(&label) {
            Some(&i) => groups[i].1.push(option),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push((label, vec![option]));
            }
        }
    }

    groups
        .into_iter()
        .flat_map(|(label, options)| split_by_capacity(label, options, capacity))
        .collect()
}

/// Splits one group into sequentially suffixed sub-groups of at most `capacity`.
///
/// A group that already fits is returned unchanged under its own label.
pub fn split_by_capacity(label: String, options: Vec<OptionInput>, capacity: usize) -> Vec<OptionGroupInput> {
    let capacity = capacity.max(1);
    if options.len() <= capacity {
        return vec![OptionGroupInput { label, options }];
    }

    debug!(label = %label, size = options.len(), capacity, "splitting option group");
    options
        .chunks(capacity)
        .enumerate()
        .map(|(i, chunk)| OptionGroupInput {
            label: format!("{}-{}", label, i + 1),
            options: chunk.to_vec(),
        })
        .collect()
}

/// A labelled range of initial letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: &'static str,
    /// Lowercase ASCII letters this bucket accepts.
    pub letters: RangeInclusive<char>,
}

impl Bucket {
    /// Returns true if `name` starts with a letter in this bucket (case-insensitive).
    pub fn matches(&self, name: &str) -> bool {
        name.chars()
            .next()
            .and_then(|c| c.to_lowercase().next())
            .is_some_and(|c| self.letters.contains(&c))
    }
}

/// Country buckets, evaluated in order.
pub const COUNTRY_BUCKETS: &[Bucket] = &[
    Bucket { label: "A-C", letters: 'a'..='c' },
    Bucket { label: "D-J", letters: 'd'..='j' },
    Bucket { label: "K-O", letters: 'k'..='o' },
    Bucket { label: "P-S", letters: 'p'..='s' },
    Bucket { label: "T-Z", letters: 't'..='z' },
];

/// Returns the label of the first bucket matching `name`.
pub fn classify(buckets: &[Bucket], name: &str) -> Option<&'static str> {
    buckets.iter().find(|b| b.matches(name)).map(|b| b.label)
}

/// Returns the grouping key of a zone name: the segment before the first `/`.
pub fn timezone_key(zone_name: &str) -> &str {
    zone_name.split('/').next().unwrap_or(zone_name)
}

/// Groups time zones by prefix, each option's text and value being the zone name.
pub fn timezone_groups(zones: &[TimeZone]) -> Vec<OptionGroupInput> {
    group_by_capacity(
        zones
            .iter()
            .map(|z| OptionInput::new(z.zone_name.as_str(), z.zone_name.as_str())),
        |o| Some(timezone_key(&o.text).to_string()),
        OPTION_GROUP_CAPACITY,
    )
}

/// Groups countries by [`COUNTRY_BUCKETS`]; text is the name, value the id.
///
/// Countries whose name starts outside `a`–`z` fall in no bucket and are left out.
pub fn country_groups(countries: &[Country]) -> Vec<OptionGroupInput> {
    group_by_capacity(
        countries
            .iter()
            .map(|c| OptionInput::new(c.value.as_str(), c.id.as_str())),
        |o| classify(COUNTRY_BUCKETS, &o.text).map(str::to_string),
        OPTION_GROUP_CAPACITY,
    )
}
