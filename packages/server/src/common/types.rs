//! Closed vocabulary enums shared by every domain.
//!
//! The schema is intentionally closed: roles, conditions, statuses and
//! product types are fixed lists, and their wire strings are the exact
//! labels stored in user documents and shown to clients. Each enum
//! exposes an `ALL` table plus `as_str`/`FromStr`, and [`schema_options`]
//! gives uniform access to the raw option lists by schema name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not part of a schema vocabulary.
#[derive(Debug, Clone, Error)]
#[error("unknown {kind} option: {value}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownOption {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Role
// ============================================================================

/// Membership role carried by every user document.
///
/// Synced from the identity provider's public metadata; unrecognized or
/// missing role hints fall back to `Guest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Administrator")]
    Administrator,
    #[serde(rename = "Board of directors")]
    BoardOfDirectors,
    #[serde(rename = "Founding members")]
    FoundingMembers,
    #[serde(rename = "Member representative")]
    MemberRepresentative,
    #[serde(rename = "Member")]
    Member,
    #[serde(rename = "Unregistered")]
    Unregistered,
    #[default]
    #[serde(rename = "Guest")]
    Guest,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Administrator,
        Role::BoardOfDirectors,
        Role::FoundingMembers,
        Role::MemberRepresentative,
        Role::Member,
        Role::Unregistered,
        Role::Guest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::BoardOfDirectors => "Board of directors",
            Role::FoundingMembers => "Founding members",
            Role::MemberRepresentative => "Member representative",
            Role::Member => "Member",
            Role::Unregistered => "Unregistered",
            Role::Guest => "Guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownOption::new("role", s))
    }
}

// ============================================================================
// Condition
// ============================================================================

/// Physical condition of a collectible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "New")]
    New,
    #[serde(rename = "Used")]
    Used,
    #[serde(rename = "Damaged")]
    Damaged,
    #[serde(rename = "Refurbished")]
    Refurbished,
    #[serde(rename = "Mint")]
    Mint,
    #[serde(rename = "Unopened")]
    Unopened,
    #[serde(rename = "Sealed")]
    Sealed,
    #[serde(rename = "Vintage")]
    Vintage,
    #[serde(rename = "Limited Edition")]
    LimitedEdition,
    #[serde(rename = "Damaged Box")]
    DamagedBox,
    #[serde(rename = "Damaged Item")]
    DamagedItem,
}

impl Condition {
    pub const ALL: [Condition; 11] = [
        Condition::New,
        Condition::Used,
        Condition::Damaged,
        Condition::Refurbished,
        Condition::Mint,
        Condition::Unopened,
        Condition::Sealed,
        Condition::Vintage,
        Condition::LimitedEdition,
        Condition::DamagedBox,
        Condition::DamagedItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
            Condition::Damaged => "Damaged",
            Condition::Refurbished => "Refurbished",
            Condition::Mint => "Mint",
            Condition::Unopened => "Unopened",
            Condition::Sealed => "Sealed",
            Condition::Vintage => "Vintage",
            Condition::LimitedEdition => "Limited Edition",
            Condition::DamagedBox => "Damaged Box",
            Condition::DamagedItem => "Damaged Item",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .iter()
            .copied()
            .find(|condition| condition.as_str() == s)
            .ok_or_else(|| UnknownOption::new("condition", s))
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status shared by products and sale listings.
///
/// Products carry a status in the inventory; event sale listings reuse the
/// same vocabulary, where `On Sale`, `Reserved` and `Sold` drive the sale
/// lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Sold")]
    Sold,
    #[serde(rename = "Reserved")]
    Reserved,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "On Sale")]
    OnSale,
    #[serde(rename = "In Collection")]
    InCollection,
    #[serde(rename = "Archived")]
    Archived,
    #[serde(rename = "Pre-Order")]
    PreOrder,
    #[serde(rename = "In Auction")]
    InAuction,
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Shipped")]
    Shipped,
    #[serde(rename = "Discontinued")]
    Discontinued,
    #[serde(rename = "For Event Sale")]
    ForEventSale,
}

impl Status {
    pub const ALL: [Status; 13] = [
        Status::InStock,
        Status::Sold,
        Status::Reserved,
        Status::OutOfStock,
        Status::OnSale,
        Status::InCollection,
        Status::Archived,
        Status::PreOrder,
        Status::InAuction,
        Status::Pending,
        Status::Shipped,
        Status::Discontinued,
        Status::ForEventSale,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InStock => "In Stock",
            Status::Sold => "Sold",
            Status::Reserved => "Reserved",
            Status::OutOfStock => "Out of Stock",
            Status::OnSale => "On Sale",
            Status::InCollection => "In Collection",
            Status::Archived => "Archived",
            Status::PreOrder => "Pre-Order",
            Status::InAuction => "In Auction",
            Status::Pending => "Pending",
            Status::Shipped => "Shipped",
            Status::Discontinued => "Discontinued",
            Status::ForEventSale => "For Event Sale",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownOption::new("status", s))
    }
}

// ============================================================================
// ProductType
// ============================================================================

/// Category tags for collectibles. A product carries a list of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Prepainted")]
    Prepainted,
    #[serde(rename = "Action/Doll")]
    ActionDoll,
    #[serde(rename = "Trading Card")]
    TradingCard,
    #[serde(rename = "Garage Kit")]
    GarageKit,
    #[serde(rename = "Model Kit")]
    ModelKit,
    #[serde(rename = "Accessory")]
    Accessory,
    #[serde(rename = "Plushie")]
    Plushie,
    #[serde(rename = "Linen")]
    Linen,
    #[serde(rename = "Dish")]
    Dish,
    #[serde(rename = "Hanged up / On Wall")]
    HangedUpOnWall,
    #[serde(rename = "Apparel")]
    Apparel,
    #[serde(rename = "Stationery")]
    Stationery,
    #[serde(rename = "Books")]
    Books,
    #[serde(rename = "Music")]
    Music,
    #[serde(rename = "Video")]
    Video,
    #[serde(rename = "Game")]
    Game,
    #[serde(rename = "Software")]
    Software,
    #[serde(rename = "Miscellaneous")]
    Miscellaneous,
}

impl ProductType {
    pub const ALL: [ProductType; 18] = [
        ProductType::Prepainted,
        ProductType::ActionDoll,
        ProductType::TradingCard,
        ProductType::GarageKit,
        ProductType::ModelKit,
        ProductType::Accessory,
        ProductType::Plushie,
        ProductType::Linen,
        ProductType::Dish,
        ProductType::HangedUpOnWall,
        ProductType::Apparel,
        ProductType::Stationery,
        ProductType::Books,
        ProductType::Music,
        ProductType::Video,
        ProductType::Game,
        ProductType::Software,
        ProductType::Miscellaneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Prepainted => "Prepainted",
            ProductType::ActionDoll => "Action/Doll",
            ProductType::TradingCard => "Trading Card",
            ProductType::GarageKit => "Garage Kit",
            ProductType::ModelKit => "Model Kit",
            ProductType::Accessory => "Accessory",
            ProductType::Plushie => "Plushie",
            ProductType::Linen => "Linen",
            ProductType::Dish => "Dish",
            ProductType::HangedUpOnWall => "Hanged up / On Wall",
            ProductType::Apparel => "Apparel",
            ProductType::Stationery => "Stationery",
            ProductType::Books => "Books",
            ProductType::Music => "Music",
            ProductType::Video => "Video",
            ProductType::Game => "Game",
            ProductType::Software => "Software",
            ProductType::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductType::ALL
            .iter()
            .copied()
            .find(|product_type| product_type.as_str() == s)
            .ok_or_else(|| UnknownOption::new("product type", s))
    }
}

// ============================================================================
// Schema option lists
// ============================================================================

pub const ROLE_OPTIONS: [&str; 7] = [
    "Administrator",
    "Board of directors",
    "Founding members",
    "Member representative",
    "Member",
    "Unregistered",
    "Guest",
];

pub const CONDITION_OPTIONS: [&str; 11] = [
    "New",
    "Used",
    "Damaged",
    "Refurbished",
    "Mint",
    "Unopened",
    "Sealed",
    "Vintage",
    "Limited Edition",
    "Damaged Box",
    "Damaged Item",
];

pub const STATUS_OPTIONS: [&str; 13] = [
    "In Stock",
    "Sold",
    "Reserved",
    "Out of Stock",
    "On Sale",
    "In Collection",
    "Archived",
    "Pre-Order",
    "In Auction",
    "Pending",
    "Shipped",
    "Discontinued",
    "For Event Sale",
];

pub const PRODUCT_TYPE_OPTIONS: [&str; 18] = [
    "Prepainted",
    "Action/Doll",
    "Trading Card",
    "Garage Kit",
    "Model Kit",
    "Accessory",
    "Plushie",
    "Linen",
    "Dish",
    "Hanged up / On Wall",
    "Apparel",
    "Stationery",
    "Books",
    "Music",
    "Video",
    "Game",
    "Software",
    "Miscellaneous",
];

/// Look up the raw option list for a schema vocabulary by its table name.
///
/// Clients use this to populate pickers without hardcoding the lists.
pub fn schema_options(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "roles" => Some(&ROLE_OPTIONS),
        "conditions" => Some(&CONDITION_OPTIONS),
        "status" => Some(&STATUS_OPTIONS),
        "productTypes" => Some(&PRODUCT_TYPE_OPTIONS),
        _ => None,
    }
}
