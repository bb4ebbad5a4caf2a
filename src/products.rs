//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, as issued by the catalog endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name, conventionally `"<Name> - <Weight>"`
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Image URI
    pub image: String,

    /// Optional category tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Split the product name into its display parts.
    pub fn display_name(&self) -> DisplayName<'_> {
        DisplayName::parse(&self.name)
    }
}

/// A product name split on its first hyphen for display.
///
/// `"Brocolli - 1 Kg"` has the title `Brocolli` and the weight `1 Kg`. Names
/// without a hyphen have no weight, and a name with nothing before the hyphen
/// keeps the whole name as its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayName<'a> {
    /// Text before the first hyphen, trimmed.
    pub title: &'a str,

    /// Text after the first hyphen, trimmed. `None` when missing or blank.
    pub weight: Option<&'a str>,
}

impl<'a> DisplayName<'a> {
    /// Parse a raw product name.
    pub fn parse(name: &'a str) -> Self {
        let (title, weight) = match name.split_once('-') {
            Some((title, weight)) => (title.trim(), Some(weight.trim())),
            None => (name.trim(), None),
        };

        let title = if title.is_empty() { name.trim() } else { title };

        Self {
            title,
            weight: weight.filter(|weight| !weight.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_catalog_entry() -> TestResult {
        let json = r#"{
            "id": 1,
            "name": "Brocolli - 1 Kg",
            "price": 15.99,
            "image": "https://example.com/broccoli.jpg",
            "category": "vegetables"
        }"#;

        let product: Product = serde_json::from_str(json)?;

        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.price, Decimal::new(1599, 2));
        assert_eq!(product.category.as_deref(), Some("vegetables"));

        Ok(())
    }

    #[test]
    fn category_is_optional() -> TestResult {
        let json = r#"{"id": 7, "name": "Tomato - 1 Kg", "price": 10, "image": "tomato.jpg"}"#;

        let product: Product = serde_json::from_str(json)?;

        assert_eq!(product.category, None);
        assert_eq!(product.price, Decimal::from(10));

        Ok(())
    }

    #[test]
    fn rejects_entry_without_id() {
        let json = r#"{"name": "Tomato - 1 Kg", "price": 10, "image": "tomato.jpg"}"#;

        let result = serde_json::from_str::<Product>(json);

        assert!(result.is_err(), "a product without an id must not decode");
    }

    #[test]
    fn display_name_splits_on_first_hyphen() {
        let name = DisplayName::parse("Brocolli - 1 Kg");

        assert_eq!(name.title, "Brocolli");
        assert_eq!(name.weight, Some("1 Kg"));
    }

    #[test]
    fn display_name_keeps_text_after_later_hyphens() {
        let name = DisplayName::parse("Sugar-free Gum - 50 g");

        assert_eq!(name.title, "Sugar");
        assert_eq!(name.weight, Some("free Gum - 50 g"));
    }

    #[test]
    fn display_name_without_weight() {
        let name = DisplayName::parse("Cauliflower");

        assert_eq!(name.title, "Cauliflower");
        assert_eq!(name.weight, None);
    }

    #[test]
    fn display_name_with_blank_parts() {
        assert_eq!(
            DisplayName::parse("Carrot - "),
            DisplayName {
                title: "Carrot",
                weight: None
            }
        );

        assert_eq!(
            DisplayName::parse("- 1 Kg"),
            DisplayName {
                title: "- 1 Kg",
                weight: Some("1 Kg")
            }
        );
    }
}
