//! Read-only filtering over the table (the search/filter panel).

use crate::item::{Category, Item};
use crate::table::Table;

/// Filter criteria for one query.
///
/// `None` on either field is the "all" sentinel: no name filter, or all
/// categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub name_contains: Option<String>,
    pub category: Option<Category>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(needle) = &self.name_contains {
            // Case-insensitive substring match; an empty needle matches all.
            if !needle.is_empty()
                && !item.name.to_lowercase().contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        true
    }
}

/// Produce a filtered view of the table. Pure: no mutation, no persistence.
pub fn filter<'a>(table: &'a Table, criteria: &ItemFilter) -> Vec<&'a Item> {
    table
        .items()
        .iter()
        .filter(|item| criteria.matches(item))
        .collect()
}
