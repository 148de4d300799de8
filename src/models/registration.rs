//! Registration data models
//!
//! The persisted row shape plus the two enums that pin down its value
//! space: which flow produced the row and which category it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two registration flows the bot offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Chair,
    Locker,
}

impl FlowKind {
    /// Value persisted in the ledger's `kind` column
    pub fn as_str(self) -> &'static str {
        match self {
            FlowKind::Chair => "chair",
            FlowKind::Locker => "locker",
        }
    }

    /// Label shown on the operation menu keyboard for this flow
    pub fn menu_label(self) -> &'static str {
        match self {
            FlowKind::Chair => "توزيع الكراسي",
            FlowKind::Locker => "توزيع الخزنات",
        }
    }

    /// Resolve a menu label back to its flow
    pub fn from_menu_label(text: &str) -> Option<Self> {
        [FlowKind::Chair, FlowKind::Locker]
            .into_iter()
            .find(|kind| kind.menu_label() == text)
    }
}

/// School year category a registration belongs to
///
/// The four labels are fixed and double as both the keyboard buttons and
/// the ledger cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "الأولى")]
    First,
    #[serde(rename = "الانِيـة")]
    Second,
    #[serde(rename = "الثالثة")]
    Third,
    #[serde(rename = "الرابعة")]
    Fourth,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::First,
        Category::Second,
        Category::Third,
        Category::Fourth,
    ];

    /// Button label and ledger cell value for this category
    pub fn label(self) -> &'static str {
        match self {
            Category::First => "الأولى",
            Category::Second => "الانِيـة",
            Category::Third => "الثالثة",
            Category::Fourth => "الرابعة",
        }
    }

    /// Resolve user input to a category
    ///
    /// Matching is byte-exact: diacritics and letter forms must agree with
    /// the keyboard labels, which is what the buttons send.
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == text)
    }
}

/// A completed registration, one row in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub timestamp: DateTime<Utc>,
    pub kind: FlowKind,
    pub registrant: String,
    pub category: Category,
    pub partner1: String,
    pub partner2: String,
}

impl RegistrationRecord {
    /// Build a chair registration; the second partner column stays empty
    pub fn chair(registrant: String, category: Category, partner: String) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: FlowKind::Chair,
            registrant,
            category,
            partner1: partner,
            partner2: String::new(),
        }
    }

    /// Build a locker registration with both partner columns filled
    pub fn locker(
        registrant: String,
        category: Category,
        partner1: String,
        partner2: String,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            kind: FlowKind::Locker,
            registrant,
            category,
            partner1,
            partner2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chair_record_has_empty_partner2() {
        let record =
            RegistrationRecord::chair("Ali".to_string(), Category::First, "Sara".to_string());
        assert_eq!(record.kind, FlowKind::Chair);
        assert_eq!(record.partner1, "Sara");
        assert_eq!(record.partner2, "");
    }

    #[test]
    fn test_locker_record_fills_both_partners() {
        let record = RegistrationRecord::locker(
            "Omar".to_string(),
            Category::Third,
            "Hana".to_string(),
            "Lina".to_string(),
        );
        assert_eq!(record.kind, FlowKind::Locker);
        assert_eq!(record.partner1, "Hana");
        assert_eq!(record.partner2, "Lina");
    }

    #[test]
    fn test_category_parse_is_exact() {
        assert_eq!(Category::parse("الأولى"), Some(Category::First));
        assert_eq!(Category::parse("الرابعة"), Some(Category::Fourth));
        assert_eq!(Category::parse("غير صحيح"), None);
        // Same word without the hamza is a different string
        assert_eq!(Category::parse("الاولى"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_menu_label_round_trip() {
        assert_eq!(
            FlowKind::from_menu_label("توزيع الكراسي"),
            Some(FlowKind::Chair)
        );
        assert_eq!(
            FlowKind::from_menu_label("توزيع الخزنات"),
            Some(FlowKind::Locker)
        );
        assert_eq!(FlowKind::from_menu_label("anything else"), None);
    }

    #[test]
    fn test_kind_column_values() {
        assert_eq!(FlowKind::Chair.as_str(), "chair");
        assert_eq!(FlowKind::Locker.as_str(), "locker");
    }
}
