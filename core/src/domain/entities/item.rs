//! Catalog items.

use serde::{Deserialize, Serialize};

/// Item as submitted by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

/// Item as stored and returned by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub tax: Option<f64>,
    /// Present only when a non-zero tax was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        let price_with_tax = item
            .tax
            .filter(|tax| *tax != 0.0)
            .map(|tax| item.price + tax);

        Self {
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
            price_with_tax,
        }
    }
}

/// One page of catalog items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPage {
    pub items: Vec<ItemRecord>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tax: Option<f64>) -> Item {
        Item {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 10.0,
            tax,
        }
    }

    #[test]
    fn test_price_with_tax_added_for_nonzero_tax() {
        let record = ItemRecord::from(item(Some(2.5)));
        assert_eq!(record.price_with_tax, Some(12.5));
    }

    #[test]
    fn test_no_price_with_tax_for_zero_or_missing_tax() {
        assert_eq!(ItemRecord::from(item(Some(0.0))).price_with_tax, None);
        assert_eq!(ItemRecord::from(item(None)).price_with_tax, None);

        let json = serde_json::to_value(ItemRecord::from(item(None))).unwrap();
        assert!(json.get("price_with_tax").is_none());
        assert!(json["tax"].is_null());
    }
}
