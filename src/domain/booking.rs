use super::catalog::{MenuItem, MenuItemId, Package, PackageId, UNASSIGNED};
use super::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub type BookingId = u32;
pub type BookingItemId = u32;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ]
        .into_iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("Unknown booking status: {s}"))
    }
}

/// One line item attaching a menu item, with a quantity, to a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingItem {
    pub id: BookingItemId,
    /// Owning booking. Always overwritten by the store on save.
    pub booking_id: BookingId,
    pub menu_item_id: MenuItemId,
    /// Ignored for pricing when the menu item is priced per person.
    pub quantity: u32,
    pub calculated_cost: Money,
    /// Resolved catalog record, cached for display and costing.
    pub menu_item: Option<MenuItem>,
}

impl BookingItem {
    /// Creates an unsaved line item for `menu_item`, costed for `guest_count`.
    pub fn new(menu_item: &MenuItem, quantity: u32, guest_count: u32) -> Self {
        Self {
            id: UNASSIGNED,
            booking_id: UNASSIGNED,
            menu_item_id: menu_item.id,
            quantity,
            calculated_cost: super::cost::line_cost(Some(menu_item), quantity, guest_count),
            menu_item: Some(menu_item.clone()),
        }
    }

    pub fn item_name(&self) -> &str {
        self.menu_item
            .as_ref()
            .map(|item| item.name.as_str())
            .unwrap_or("Unknown item")
    }
}

/// A customer's scheduled event with its package, line items and costs.
///
/// The cost fields are snapshots written by the caller at save time; the
/// store keeps them as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Booking {
    pub id: BookingId,
    pub customer_name: String,
    pub customer_contact: String,
    pub event_date: Option<NaiveDate>,
    /// `HH:mm`, stored as text and never parsed.
    pub event_time: Option<String>,
    pub venue_address: String,
    pub theme: String,
    pub guest_count: u32,
    pub package_id: Option<PackageId>,
    pub base_package_cost: Money,
    pub additional_items_cost: Money,
    pub total_cost: Money,
    pub status: BookingStatus,
    pub custom_requests: String,
    pub items: Vec<BookingItem>,
    /// Resolved from `package_id` on read; never stored.
    pub package: Option<Package>,
}

impl Booking {
    pub fn new(customer_name: impl Into<String>, event_date: NaiveDate, guest_count: u32) -> Self {
        Self {
            customer_name: customer_name.into(),
            event_date: Some(event_date),
            guest_count,
            ..Default::default()
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == UNASSIGNED
    }

    pub fn package_name(&self) -> Option<&str> {
        self.package.as_ref().map(|p| p.name.as_str())
    }
}

/// Dashboard counters over all bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
}

impl BookingStats {
    pub fn from_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        bookings
            .into_iter()
            .fold(Self::default(), |mut stats, booking| {
                stats.total += 1;
                match booking.status {
                    BookingStatus::Confirmed => stats.confirmed += 1,
                    BookingStatus::Pending => stats.pending += 1,
                    _ => {}
                }
                stats
            })
    }
}

fn nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.cmp(x),
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Listing order: latest event first, then latest time; missing values last.
pub fn newest_first(a: &Booking, b: &Booking) -> Ordering {
    nulls_last(&a.event_date, &b.event_date, true)
        .then_with(|| nulls_last(&a.event_time, &b.event_time, true))
}

/// Schedule order: earliest event first, then earliest time; missing times last.
pub fn soonest_first(a: &Booking, b: &Booking) -> Ordering {
    nulls_last(&a.event_date, &b.event_date, false)
        .then_with(|| nulls_last(&a.event_time, &b.event_time, false))
}
