use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// ITEM RECORDS
// ═══════════════════════════════════════════════════════════════════════════

/// An item as held by the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by the store on create
    pub id: Option<u64>,
    pub name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    /// Overwrite name, price and quantity with the values of `update`.
    ///
    /// The id is never touched. Absent values clear the stored ones, so the
    /// record always equals the validated payload.
    pub fn apply(&mut self, update: &Item) {
        self.name = update.name.clone();
        self.price = update.price;
        self.quantity = update.quantity;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INPUT PAYLOADS
// ═══════════════════════════════════════════════════════════════════════════

/// Typed input payload for create and update requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, alias = "itemName")]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i32>,
    #[serde(default)]
    pub quantity: Option<i32>,
}

impl ItemForm {
    /// Map an accepted payload onto a fresh, unsaved item
    pub fn into_item(self) -> Item {
        Item {
            id: None,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl From<ItemForm> for Item {
    fn from(form: ItemForm) -> Self {
        form.into_item()
    }
}

/// Form-encoded payload as submitted by a browser.
///
/// Every value is kept as the raw text so a rejected submission can be echoed
/// back exactly as typed. See [`crate::validation::binding`] for conversion
/// into an [`ItemForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItemForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "itemName")]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
}

impl From<&Item> for RawItemForm {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.map(|id| id.to_string()),
            name: item.name.clone(),
            price: item.price.map(|price| price.to_string()),
            quantity: item.quantity.map(|quantity| quantity.to_string()),
        }
    }
}
