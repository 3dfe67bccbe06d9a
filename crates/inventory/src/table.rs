//! The in-memory table of consumable rows and the mutations defined on it.
//!
//! The table never persists itself: callers load it from the record store,
//! apply exactly one mutation, and save it back. Every mutation targets a
//! row by its stable id; a missing target is reported as `NotFound`, never
//! treated as a crash.

use larder_core::{DomainError, DomainResult, ItemId};

use crate::item::{Item, NewItem};

/// Ordered collection of items for one interaction cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    items: Vec<Item>,
}

/// Result of a decrease: the quantity left and whether auto-delete fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecreaseOutcome {
    pub remaining: u32,
    pub removed: bool,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from already-persisted rows (record store load path).
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn position(&self, id: ItemId) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(DomainError::not_found)
    }

    /// Append a validated draft as a new row and return its fresh id.
    pub fn add(&mut self, draft: NewItem) -> DomainResult<ItemId> {
        draft.validate()?;
        let id = ItemId::new();
        self.items.push(draft.into_item(id));
        Ok(id)
    }

    /// Raise the quantity of the targeted row by `amount` (`>= 1`).
    ///
    /// Returns the new quantity.
    pub fn increase(&mut self, id: ItemId, amount: u32) -> DomainResult<u32> {
        if amount < 1 {
            return Err(DomainError::validation("amount must be at least 1"));
        }
        let idx = self.position(id)?;
        let item = &mut self.items[idx];
        item.quantity += amount;
        Ok(item.quantity)
    }

    /// Lower the quantity of the targeted row by `amount` (`>= 1`).
    ///
    /// Quantity clamps at zero (the one documented silent coercion). When
    /// `auto_delete` is set and the result is exactly zero, the row is
    /// removed from the table.
    pub fn decrease(
        &mut self,
        id: ItemId,
        amount: u32,
        auto_delete: bool,
    ) -> DomainResult<DecreaseOutcome> {
        if amount < 1 {
            return Err(DomainError::validation("amount must be at least 1"));
        }
        let idx = self.position(id)?;
        let item = &mut self.items[idx];
        item.quantity = item.quantity.saturating_sub(amount);
        let remaining = item.quantity;

        let removed = auto_delete && remaining == 0;
        if removed {
            self.items.remove(idx);
        }

        Ok(DecreaseOutcome { remaining, removed })
    }

    /// Remove the targeted row. The confirmation gate lives at the boundary;
    /// by the time this runs the deletion is final.
    pub fn remove(&mut self, id: ItemId) -> DomainResult<Item> {
        let idx = self.position(id)?;
        Ok(self.items.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Category, DEFAULT_ALERT_THRESHOLD};

    fn draft(name: &str, quantity: u32) -> NewItem {
        NewItem {
            name: name.to_string(),
            quantity,
            category: Category::Food,
            expiry: None,
            note: String::new(),
            image_path: None,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }

    #[test]
    fn add_appends_row_and_returns_its_id() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 5)).unwrap();

        assert_eq!(table.len(), 1);
        let item = table.get(id).unwrap();
        assert_eq!(item.name, "お米");
        assert_eq!(item.quantity, 5);
    }

    #[test]
    fn add_rejects_invalid_draft() {
        let mut table = Table::new();
        let err = table.add(draft("", 5)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn increase_raises_quantity() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 5)).unwrap();

        let qty = table.increase(id, 3).unwrap();
        assert_eq!(qty, 8);
        assert_eq!(table.get(id).unwrap().quantity, 8);
    }

    #[test]
    fn increase_rejects_zero_amount() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 5)).unwrap();

        assert!(matches!(
            table.increase(id, 0),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn decrease_clamps_at_zero() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 2)).unwrap();

        let outcome = table.decrease(id, 100, false).unwrap();
        assert_eq!(outcome.remaining, 0);
        assert!(!outcome.removed);
        assert_eq!(table.get(id).unwrap().quantity, 0);
    }

    #[test]
    fn decrease_to_zero_with_auto_delete_removes_row() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 2)).unwrap();

        let outcome = table.decrease(id, 2, true).unwrap();
        assert_eq!(outcome.remaining, 0);
        assert!(outcome.removed);
        assert!(table.is_empty());
    }

    #[test]
    fn decrease_to_zero_without_auto_delete_keeps_row() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 2)).unwrap();

        let outcome = table.decrease(id, 2, false).unwrap();
        assert!(!outcome.removed);
        assert_eq!(table.get(id).unwrap().quantity, 0);
    }

    #[test]
    fn decrease_above_zero_never_auto_deletes() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 5)).unwrap();

        let outcome = table.decrease(id, 3, true).unwrap();
        assert_eq!(outcome.remaining, 2);
        assert!(!outcome.removed);
    }

    #[test]
    fn remove_drops_the_row() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 5)).unwrap();
        let other = table.add(draft("しょうゆ", 1)).unwrap();

        let removed = table.remove(id).unwrap();
        assert_eq!(removed.name, "お米");
        assert_eq!(table.len(), 1);
        assert!(table.get(other).is_some());
    }

    #[test]
    fn operations_on_missing_id_are_not_found() {
        let mut table = Table::new();
        let stale = ItemId::new();

        assert!(matches!(table.increase(stale, 1), Err(DomainError::NotFound)));
        assert!(matches!(
            table.decrease(stale, 1, true),
            Err(DomainError::NotFound)
        ));
        assert!(matches!(table.remove(stale), Err(DomainError::NotFound)));
    }

    #[test]
    fn stale_id_after_removal_is_not_found_and_leaves_table_untouched() {
        let mut table = Table::new();
        let id = table.add(draft("お米", 5)).unwrap();
        table.remove(id).unwrap();
        let before = table.clone();

        assert!(matches!(table.increase(id, 1), Err(DomainError::NotFound)));
        assert_eq!(table, before);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Quantity never goes below zero, whatever the decrease amount.
            #[test]
            fn decrease_never_underflows(start in 1u32..10_000, amount in 1u32..1_000_000) {
                let mut table = Table::new();
                let id = table.add(draft("item", start)).unwrap();

                let outcome = table.decrease(id, amount, false).unwrap();
                prop_assert_eq!(outcome.remaining, start.saturating_sub(amount));
            }

            /// Increase then decrease by the same amount restores the original
            /// quantity exactly (no auto-delete when the result is positive).
            #[test]
            fn increase_then_decrease_restores_quantity(start in 1u32..10_000, amount in 1u32..10_000) {
                let mut table = Table::new();
                let id = table.add(draft("item", start)).unwrap();

                table.increase(id, amount).unwrap();
                let outcome = table.decrease(id, amount, true).unwrap();

                prop_assert_eq!(outcome.remaining, start);
                prop_assert!(!outcome.removed);
                prop_assert_eq!(table.get(id).unwrap().quantity, start);
            }
        }
    }
}
