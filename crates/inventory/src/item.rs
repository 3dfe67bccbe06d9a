use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_core::{DomainError, ItemId};

/// Alert threshold assigned to rows persisted before the column existed.
pub const DEFAULT_ALERT_THRESHOLD: u32 = 3;

/// Consumable category.
///
/// The wire labels are the localized strings the persisted table has always
/// carried; they are preserved verbatim for file compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "食品")]
    Food,
    #[serde(rename = "洗剤")]
    Detergent,
    #[serde(rename = "トイレットペーパー")]
    ToiletPaper,
    #[serde(rename = "調味料")]
    Seasoning,
    #[serde(rename = "その他")]
    Other,
}

impl Category {
    /// Every known category, in the order the shell presents them.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Detergent,
        Category::ToiletPaper,
        Category::Seasoning,
        Category::Other,
    ];

    /// The localized wire label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "食品",
            Category::Detergent => "洗剤",
            Category::ToiletPaper => "トイレットペーパー",
            Category::Seasoning => "調味料",
            Category::Other => "その他",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}

/// One row of the consumables table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable surrogate key; operations target this, never a row position.
    pub id: ItemId,
    /// User-supplied display name, not guaranteed unique.
    pub name: String,
    /// Current stock count. Non-negative by type; decrease clamps at zero.
    pub quantity: u32,
    pub category: Category,
    /// Absence means "no expiry".
    pub expiry: Option<NaiveDate>,
    /// Free text, may be empty.
    pub note: String,
    /// Relative path to a stored image file. A reference only; the image
    /// store owns the bytes.
    pub image_path: Option<String>,
    /// Low-stock alert floor, `>= 1`.
    pub alert_threshold: u32,
}

/// Validated input for the Add operation, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: u32,
    pub category: Category,
    pub expiry: Option<NaiveDate>,
    pub note: String,
    pub image_path: Option<String>,
    pub alert_threshold: u32,
}

impl NewItem {
    /// Boundary validation for user-supplied fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.quantity < 1 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if self.alert_threshold < 1 {
            return Err(DomainError::validation("alert threshold must be at least 1"));
        }
        Ok(())
    }

    pub(crate) fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            quantity: self.quantity,
            category: self.category,
            expiry: self.expiry,
            note: self.note,
            image_path: self.image_path,
            alert_threshold: self.alert_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn draft() -> NewItem {
        NewItem {
            name: "せっけん".to_string(),
            quantity: 2,
            category: Category::Detergent,
            expiry: None,
            note: String::new(),
            image_path: None,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }

    #[test]
    fn category_labels_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_str(cat.label()).unwrap(), cat);
        }
    }

    #[test]
    fn unknown_category_label_is_rejected()  {
        let err = Category::from_str("文房具").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_draft_passes_validation() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut d = draft();
        d.quantity = 0;
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let mut d = draft();
        d.alert_threshold = 0;
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }
}
