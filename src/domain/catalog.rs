use super::money::Money;
use crate::error::CateringError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub type PackageId = u32;
pub type MenuItemId = u32;

/// Identity value of a record that has not been stored yet.
pub const UNASSIGNED: u32 = 0;

/// Pricing mode of a menu item.
///
/// Parsing is case-insensitive. Tags outside the known set are kept verbatim
/// in `Other` and priced per unit like `PerTray` and `Fixed`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitType {
    PerPerson,
    PerTray,
    Fixed,
    Other(String),
}

impl UnitType {
    pub fn as_str(&self) -> &str {
        match self {
            UnitType::PerPerson => "per_person",
            UnitType::PerTray => "per_tray",
            UnitType::Fixed => "fixed",
            UnitType::Other(tag) => tag,
        }
    }

    pub fn is_per_person(&self) -> bool {
        matches!(self, UnitType::PerPerson)
    }
}

impl FromStr for UnitType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Ok(if tag.eq_ignore_ascii_case("per_person") {
            UnitType::PerPerson
        } else if tag.eq_ignore_ascii_case("per_tray") {
            UnitType::PerTray
        } else if tag.eq_ignore_ascii_case("fixed") {
            UnitType::Fixed
        } else {
            UnitType::Other(tag.to_string())
        })
    }
}

impl From<String> for UnitType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(unit) => unit,
            Err(never) => match never {},
        }
    }
}

impl From<UnitType> for String {
    fn from(value: UnitType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry with a unit cost and a pricing mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub cost_per_unit: Money,
    pub unit_type: UnitType,
    pub active: bool,
}

impl MenuItem {
    /// Creates an active, not yet stored menu item.
    pub fn new(name: impl Into<String>, cost_per_unit: Money, unit_type: UnitType) -> Self {
        Self {
            id: UNASSIGNED,
            name: name.into(),
            description: String::new(),
            cost_per_unit,
            unit_type,
            active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn validate(&self) -> Result<(), CateringError> {
        if self.name.trim().is_empty() {
            return Err(CateringError::ValidationError(
                "Menu item name is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A fixed-price catering bundle with an advisory guest capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,
    pub name: String,
    pub description: String,
    /// Base cost, independent of the guest count.
    pub price: Money,
    pub capacity: u32,
    pub included_items: String,
    pub active: bool,
}

impl Package {
    /// Creates an active, not yet stored package.
    pub fn new(name: impl Into<String>, price: Money, capacity: u32) -> Self {
        Self {
            id: UNASSIGNED,
            name: name.into(),
            description: String::new(),
            price,
            capacity,
            included_items: String::new(),
            active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_included_items(mut self, included_items: impl Into<String>) -> Self {
        self.included_items = included_items.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn validate(&self) -> Result<(), CateringError> {
        if self.name.trim().is_empty() {
            return Err(CateringError::ValidationError(
                "Package name is required".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(CateringError::ValidationError(
                "Package capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Case-insensitive ascending comparison used to order catalog listings.
pub fn compare_names(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
