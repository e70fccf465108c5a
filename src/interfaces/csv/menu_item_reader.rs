use crate::domain::catalog::{MenuItem, UnitType};
use crate::domain::money::Money;
use crate::error::{CateringError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of a menu import file.
#[derive(Debug, Deserialize)]
pub struct MenuItemRecord {
    name: String,
    #[serde(default)]
    description: String,
    cost_per_unit: Decimal,
    unit_type: String,
    #[serde(default = "default_active")]
    active: Option<bool>,
}

fn default_active() -> Option<bool> {
    Some(true)
}

impl TryFrom<MenuItemRecord> for MenuItem {
    type Error = CateringError;

    fn try_from(record: MenuItemRecord) -> Result<Self> {
        let unit_type: UnitType = record.unit_type.into();
        let mut item = MenuItem::new(record.name, Money::new(record.cost_per_unit)?, unit_type)
            .with_description(record.description);
        item.active = record.active.unwrap_or(true);
        item.validate()?;
        Ok(item)
    }
}

/// Reads menu items from a CSV source.
///
/// Expects the header `name,description,cost_per_unit,unit_type,active`.
/// `description` and `active` may be left empty; an empty `active` means active.
pub struct MenuItemReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MenuItemReader<R> {
    /// Creates a new `MenuItemReader` from any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates menu items.
    ///
    /// Items come back unsaved, with an unassigned id.
    pub fn menu_items(self) -> impl Iterator<Item = Result<MenuItem>> {
        self.reader
            .into_deserialize::<MenuItemRecord>()
            .map(|result| result.map_err(CateringError::from).and_then(MenuItem::try_from))
    }
}
