//! Flat views of bookings for tabular output.

use crate::domain::booking::{Booking, BookingId, BookingItem, BookingItemId, BookingStatus};
use crate::domain::money::Money;
use chrono::NaiveDate;
use serde::Serialize;

/// A flat output row with a fixed column set.
///
/// `HEADERS` must list the serialized field names in declaration order.
pub trait Row: Serialize {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct BookingSummary {
    pub id: BookingId,
    pub customer: String,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<String>,
    pub package: Option<String>,
    pub guests: u32,
    pub base: Money,
    pub additional: Money,
    pub total: Money,
    pub status: BookingStatus,
}

impl Row for BookingSummary {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "customer",
        "event_date",
        "event_time",
        "package",
        "guests",
        "base",
        "additional",
        "total",
        "status",
    ];
}

impl From<&Booking> for BookingSummary {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            customer: booking.customer_name.clone(),
            event_date: booking.event_date,
            event_time: booking.event_time.clone(),
            package: booking.package_name().map(str::to_string),
            guests: booking.guest_count,
            base: booking.base_package_cost,
            additional: booking.additional_items_cost,
            total: booking.total_cost,
            status: booking.status,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct BookingItemRow {
    pub id: BookingItemId,
    pub booking: BookingId,
    pub item: String,
    pub unit_type: Option<String>,
    pub quantity: u32,
    pub cost: Money,
}

impl Row for BookingItemRow {
    const HEADERS: &'static [&'static str] =
        &["id", "booking", "item", "unit_type", "quantity", "cost"];
}

impl From<&BookingItem> for BookingItemRow {
    fn from(item: &BookingItem) -> Self {
        Self {
            id: item.id,
            booking: item.booking_id,
            item: item.item_name().to_string(),
            unit_type: item.menu_item.as_ref().map(|m| m.unit_type.to_string()),
            quantity: item.quantity,
            cost: item.calculated_cost,
        }
    }
}
