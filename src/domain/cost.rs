//! Booking cost computation.
//!
//! Pure functions with no stored state. Per-person line items are priced from
//! the guest count at the time of the call, so callers recompute before every
//! display and before every save rather than caching a stale figure.

use super::booking::BookingItem;
use super::catalog::MenuItem;
use super::money::Money;

/// Cost of a single line item.
///
/// Per-person items cost `cost_per_unit * guest_count` and ignore `quantity`;
/// every other unit type costs `cost_per_unit * quantity`. A missing menu item
/// or a zero quantity costs nothing.
pub fn line_cost(menu_item: Option<&MenuItem>, quantity: u32, guest_count: u32) -> Money {
    match menu_item {
        Some(_) if quantity == 0 => Money::ZERO,
        Some(item) if item.unit_type.is_per_person() => item.cost_per_unit.times(guest_count),
        Some(item) => item.cost_per_unit.times(quantity),
        None => Money::ZERO,
    }
}

/// Re-prices every per-person item against `guest_count`.
///
/// Returns `true` if at least one stored cost actually changed.
pub fn recalculate_per_person_costs(items: &mut [BookingItem], guest_count: u32) -> bool {
    let mut changed = false;
    for item in items.iter_mut() {
        let Some(menu_item) = item.menu_item.as_ref() else {
            continue;
        };
        if !menu_item.unit_type.is_per_person() {
            continue;
        }
        let new_cost = menu_item.cost_per_unit.times(guest_count);
        if new_cost != item.calculated_cost {
            item.calculated_cost = new_cost;
            changed = true;
        }
    }
    changed
}

pub fn additional_items_total(items: &[BookingItem]) -> Money {
    items.iter().map(|item| item.calculated_cost).sum()
}

pub fn booking_total(base_package_cost: Money, additional_items_total: Money) -> Money {
    base_package_cost + additional_items_total
}
