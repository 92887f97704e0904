//! Product model - one collectible (or a batch of identical ones).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{CollectionId, Condition, ProductId, ProductType, Status, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub product_name: String,
    pub description: String,
    pub quantity: u32,
    /// Characters depicted, free-form (a figure can show several).
    pub character_name: Vec<String>,
    /// Franchises / licenses, free-form.
    pub license_name: Vec<String>,
    pub product_type: Vec<ProductType>,
    pub condition: Condition,
    pub status: Status,
    pub storage_location: String,
    pub purchase_location: String,
    pub purchase_date: DateTime<Utc>,
    pub purchase_price: f64,
    pub sell_location: Option<String>,
    pub sell_date: Option<DateTime<Utc>>,
    pub sell_price: Option<f64>,
    /// Restock alert threshold for batched items.
    pub threshold: u32,
    pub photo: Option<String>,
    pub collection_id: Option<CollectionId>,
    pub owner_user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(attrs: ProductAttributes) -> Self {
        Self {
            id: ProductId::new(),
            product_name: attrs.product_name,
            description: attrs.description,
            quantity: attrs.quantity,
            character_name: attrs.character_name,
            license_name: attrs.license_name,
            product_type: attrs.product_type,
            condition: attrs.condition,
            status: attrs.status,
            storage_location: attrs.storage_location,
            purchase_location: attrs.purchase_location,
            purchase_date: attrs.purchase_date,
            purchase_price: attrs.purchase_price,
            sell_location: attrs.sell_location,
            sell_date: attrs.sell_date,
            sell_price: attrs.sell_price,
            threshold: attrs.threshold,
            photo: attrs.photo,
            collection_id: attrs.collection_id,
            owner_user_id: attrs.owner_user_id,
            created_at: Utc::now(),
        }
    }
}

/// Everything a stored product carries except its id and creation time.
#[derive(Debug, Clone)]
pub struct ProductAttributes {
    pub product_name: String,
    pub description: String,
    pub quantity: u32,
    pub character_name: Vec<String>,
    pub license_name: Vec<String>,
    pub product_type: Vec<ProductType>,
    pub condition: Condition,
    pub status: Status,
    pub storage_location: String,
    pub purchase_location: String,
    pub purchase_date: DateTime<Utc>,
    pub purchase_price: f64,
    pub sell_location: Option<String>,
    pub sell_date: Option<DateTime<Utc>>,
    pub sell_price: Option<f64>,
    pub threshold: u32,
    pub photo: Option<String>,
    pub collection_id: Option<CollectionId>,
    pub owner_user_id: UserId,
}

/// Request body for product creation.
///
/// `target_user_id` lets an administrator register a product on another
/// member's behalf; it is resolved to the owner and never stored itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub product_name: String,
    pub description: String,
    pub quantity: u32,
    pub character_name: Vec<String>,
    pub license_name: Vec<String>,
    pub product_type: Vec<ProductType>,
    pub condition: Condition,
    pub status: Status,
    pub storage_location: String,
    pub purchase_location: String,
    pub purchase_date: DateTime<Utc>,
    pub purchase_price: f64,
    #[serde(default)]
    pub sell_location: Option<String>,
    #[serde(default)]
    pub sell_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sell_price: Option<f64>,
    pub threshold: u32,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub collection_id: Option<CollectionId>,
    #[serde(default)]
    pub target_user_id: Option<UserId>,
}

impl CreateProduct {
    /// Resolves the create request into storable attributes for `owner`.
    pub fn into_attributes(self, owner: UserId) -> ProductAttributes {
        ProductAttributes {
            product_name: self.product_name,
            description: self.description,
            quantity: self.quantity,
            character_name: self.character_name,
            license_name: self.license_name,
            product_type: self.product_type,
            condition: self.condition,
            status: self.status,
            storage_location: self.storage_location,
            purchase_location: self.purchase_location,
            purchase_date: self.purchase_date,
            purchase_price: self.purchase_price,
            sell_location: self.sell_location,
            sell_date: self.sell_date,
            sell_price: self.sell_price,
            threshold: self.threshold,
            photo: self.photo,
            collection_id: self.collection_id,
            owner_user_id: owner,
        }
    }
}

/// Field-mask update. Absent fields keep their stored value; optional
/// columns cannot be cleared through a patch, matching the sync rules for
/// every other partial write in the system.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<u32>,
    pub character_name: Option<Vec<String>>,
    pub license_name: Option<Vec<String>>,
    pub product_type: Option<Vec<ProductType>>,
    pub condition: Option<Condition>,
    pub status: Option<Status>,
    pub storage_location: Option<String>,
    pub purchase_location: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_price: Option<f64>,
    pub sell_location: Option<String>,
    pub sell_date: Option<DateTime<Utc>>,
    pub sell_price: Option<f64>,
    pub threshold: Option<u32>,
    pub photo: Option<String>,
    pub collection_id: Option<CollectionId>,
    /// Ownership transfer, restricted to administrators by the service.
    pub owner_user_id: Option<UserId>,
}

impl ProductPatch {
    /// True when no field is present; such an update is a successful no-op.
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.character_name.is_none()
            && self.license_name.is_none()
            && self.product_type.is_none()
            && self.condition.is_none()
            && self.status.is_none()
            && self.storage_location.is_none()
            && self.purchase_location.is_none()
            && self.purchase_date.is_none()
            && self.purchase_price.is_none()
            && self.sell_location.is_none()
            && self.sell_date.is_none()
            && self.sell_price.is_none()
            && self.threshold.is_none()
            && self.photo.is_none()
            && self.collection_id.is_none()
            && self.owner_user_id.is_none()
    }

    /// Applies every present field onto a stored row.
    pub fn apply(&self, product: &mut Product) {
        if let Some(v) = &self.product_name {
            product.product_name = v.clone();
        }
        if let Some(v) = &self.description {
            product.description = v.clone();
        }
        if let Some(v) = self.quantity {
            product.quantity = v;
        }
        if let Some(v) = &self.character_name {
            product.character_name = v.clone();
        }
        if let Some(v) = &self.license_name {
            product.license_name = v.clone();
        }
        if let Some(v) = &self.product_type {
            product.product_type = v.clone();
        }
        if let Some(v) = self.condition {
            product.condition = v;
        }
        if let Some(v) = self.status {
            product.status = v;
        }
        if let Some(v) = &self.storage_location {
            product.storage_location = v.clone();
        }
        if let Some(v) = &self.purchase_location {
            product.purchase_location = v.clone();
        }
        if let Some(v) = self.purchase_date {
            product.purchase_date = v;
        }
        if let Some(v) = self.purchase_price {
            product.purchase_price = v;
        }
        if let Some(v) = &self.sell_location {
            product.sell_location = Some(v.clone());
        }
        if let Some(v) = self.sell_date {
            product.sell_date = Some(v);
        }
        if let Some(v) = self.sell_price {
            product.sell_price = Some(v);
        }
        if let Some(v) = self.threshold {
            product.threshold = v;
        }
        if let Some(v) = &self.photo {
            product.photo = Some(v.clone());
        }
        if let Some(v) = self.collection_id {
            product.collection_id = Some(v);
        }
        if let Some(v) = self.owner_user_id {
            product.owner_user_id = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_attrs(owner: UserId) -> ProductAttributes {
        ProductAttributes {
            product_name: "Saber Figure".to_string(),
            description: "1/7 scale".to_string(),
            quantity: 1,
            character_name: vec!["Saber".to_string()],
            license_name: vec!["Fate/stay night".to_string()],
            product_type: vec![ProductType::Prepainted],
            condition: Condition::Sealed,
            status: Status::InCollection,
            storage_location: "Shelf A".to_string(),
            purchase_location: "Mandarake".to_string(),
            purchase_date: Utc::now(),
            purchase_price: 120.0,
            sell_location: None,
            sell_date: None,
            sell_price: None,
            threshold: 0,
            photo: None,
            collection_id: None,
            owner_user_id: owner,
        }
    }

    #[test]
    fn test_empty_patch_is_empty() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            quantity: Some(3),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut product = Product::new(sample_attrs(UserId::new()));
        let patch = ProductPatch {
            status: Some(Status::ForEventSale),
            sell_price: Some(80.0),
            ..Default::default()
        };

        patch.apply(&mut product);

        assert_eq!(product.status, Status::ForEventSale);
        assert_eq!(product.sell_price, Some(80.0));
        assert_eq!(product.product_name, "Saber Figure");
        assert_eq!(product.quantity, 1);
    }

    #[test]
    fn test_create_resolves_owner() {
        let owner = UserId::new();
        let create = CreateProduct {
            product_name: "Nendoroid".to_string(),
            description: "boxed".to_string(),
            quantity: 1,
            character_name: vec![],
            license_name: vec![],
            product_type: vec![ProductType::ActionDoll],
            condition: Condition::New,
            status: Status::InStock,
            storage_location: "Bin 3".to_string(),
            purchase_location: "AmiAmi".to_string(),
            purchase_date: Utc::now(),
            purchase_price: 45.5,
            sell_location: None,
            sell_date: None,
            sell_price: None,
            threshold: 1,
            photo: None,
            collection_id: None,
            target_user_id: None,
        };

        let attrs = create.into_attributes(owner);
        assert_eq!(attrs.owner_user_id, owner);
    }
}
