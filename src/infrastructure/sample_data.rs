//! Demo catalog and booking loaded at startup unless disabled.

use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::catalog::{MenuItem, Package, UnitType};
use crate::domain::money::Money;
use crate::error::Result;
use chrono::{Days, NaiveDate};
use rust_decimal_macros::dec;

pub fn menu_items() -> Result<Vec<MenuItem>> {
    Ok(vec![
        MenuItem::new("Steamed Rice", Money::new(dec!(50.00))?, UnitType::PerPerson)
            .with_description("Fluffy white steamed rice."),
        MenuItem::new("Lechon Belly (Small)", Money::new(dec!(4500.00))?, UnitType::Fixed)
            .with_description("Crispy roasted pork belly, good for 15-20 pax."),
        MenuItem::new("Beef Caldereta", Money::new(dec!(3000.00))?, UnitType::PerTray)
            .with_description("Classic beef stew in tomato sauce, good for 20-25 pax."),
        MenuItem::new("Iced Tea (Pitcher)", Money::new(dec!(150.00))?, UnitType::Fixed)
            .with_description("Standard house blend iced tea."),
        MenuItem::new("Fruit Salad", Money::new(dec!(1000.00))?, UnitType::PerTray)
            .with_description("Creamy mixed fruit salad.")
            .inactive(),
    ])
}

pub fn packages() -> Result<Vec<Package>> {
    Ok(vec![
        Package::new("Basic Birthday Bash", Money::new(dec!(7500.00))?, 50)
            .with_description("A simple package perfect for small birthday celebrations.")
            .with_included_items("Rice, Beef Caldereta, 1 Pitcher Iced Tea"),
        Package::new("Fiesta Feast", Money::new(dec!(15000.00))?, 100)
            .with_description("A more complete package for larger gatherings.")
            .with_included_items("Rice, Lechon Belly (Small), Beef Caldereta, 2 Pitchers Iced Tea"),
        Package::new("Grand Celebration (Old)", Money::new(dec!(25000.00))?, 150)
            .with_description("Previous premium package.")
            .with_included_items("Extensive menu, contact for details.")
            .inactive(),
    ])
}

/// A confirmed booking two weeks after `today` for the given package.
pub fn booking(today: NaiveDate, package: &Package) -> Booking {
    let event_date = today.checked_add_days(Days::new(14)).unwrap_or(today);
    Booking {
        customer_contact: "09171234567".to_string(),
        event_time: Some("18:00".to_string()),
        venue_address: "Sample Function Hall, Naga City".to_string(),
        theme: "Blue and Silver".to_string(),
        package_id: Some(package.id),
        base_package_cost: package.price,
        additional_items_cost: Money::ZERO,
        total_cost: package.price,
        status: BookingStatus::Confirmed,
        custom_requests: "Need extra chairs.".to_string(),
        ..Booking::new("Juan Dela Cruz", event_date, 45)
    }
}
