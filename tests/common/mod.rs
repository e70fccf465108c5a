#![allow(dead_code)]

use catering_engine::application::engine::CateringEngine;
use catering_engine::domain::catalog::{MenuItem, Package, UnitType};
use catering_engine::domain::money::Money;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::{Error, Write};
use std::path::Path;

pub fn money(value: Decimal) -> Money {
    Money::new(value).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn add_menu_item(
    engine: &CateringEngine,
    name: &str,
    cost: Decimal,
    unit: UnitType,
) -> MenuItem {
    engine
        .create_or_update_menu_item(MenuItem::new(name, money(cost), unit))
        .await
        .unwrap()
}

pub async fn add_package(engine: &CateringEngine, name: &str, price: Decimal) -> Package {
    engine
        .create_or_update_package(Package::new(name, money(price), 100))
        .await
        .unwrap()
}

pub fn write_menu_csv(path: &Path, rows: &[[&str; 5]]) -> Result<(), Error> {
    let mut file = std::fs::File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(&mut file);
    wtr.write_record(["name", "description", "cost_per_unit", "unit_type", "active"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    drop(wtr);
    file.flush()
}
