use crate::domain::booking::{self, Booking, BookingId, BookingItem, BookingStats};
use crate::domain::catalog::{self, MenuItem, MenuItemId, Package, PackageId};
use crate::domain::cost;
use crate::domain::money::Money;
use crate::domain::ports::{BookingStoreBox, CatalogStoreBox};
use crate::error::{CateringError, Result};
use crate::infrastructure::in_memory::{InMemoryBookingStore, InMemoryCatalogStore};
use crate::infrastructure::sample_data;
use chrono::NaiveDate;

/// Number of bookings the dashboard shows as upcoming.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// The single entry point the presentation layer talks to.
///
/// `CateringEngine` owns a catalog store and a booking store. The two stores do
/// not know about each other; the engine mediates where they meet, namely the
/// in-use check before a package is deleted and the package and menu item
/// lookups that resolve package references on bookings.
pub struct CateringEngine {
    catalog: CatalogStoreBox,
    bookings: BookingStoreBox,
}

impl CateringEngine {
    /// Creates a new `CateringEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The store for packages and menu items.
    /// * `bookings` - The store for bookings and their line items.
    pub fn new(catalog: CatalogStoreBox, bookings: BookingStoreBox) -> Self {
        Self { catalog, bookings }
    }

    /// Creates an engine over empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(InMemoryCatalogStore::new()),
            Box::new(InMemoryBookingStore::new()),
        )
    }

    // --- packages ---

    /// All packages sorted by name, case-insensitively.
    pub async fn list_packages(&self, include_inactive: bool) -> Result<Vec<Package>> {
        tracing::info!(include_inactive, "Fetching packages");
        let mut packages: Vec<Package> = self
            .catalog
            .all_packages()
            .await?
            .into_iter()
            .filter(|p| include_inactive || p.active)
            .collect();
        packages.sort_by(|a, b| catalog::compare_names(&a.name, &b.name));
        Ok(packages)
    }

    pub async fn list_active_packages(&self) -> Result<Vec<Package>> {
        self.list_packages(false).await
    }

    pub async fn get_package(&self, id: PackageId) -> Result<Option<Package>> {
        self.catalog.get_package(id).await
    }

    /// Inserts a package with an unassigned id, otherwise overwrites it.
    pub async fn create_or_update_package(&self, package: Package) -> Result<Package> {
        self.catalog.save_package(package).await
    }

    /// Deletes a package, or deactivates it while any booking still selects it.
    ///
    /// Returns `false` only when no package is stored under `id`.
    pub async fn remove_package(&self, id: PackageId) -> Result<bool> {
        tracing::info!(package_id = id, "Attempting to delete package");
        if self.catalog.get_package(id).await?.is_none() {
            tracing::warn!(package_id = id, "Package not found for deletion");
            return Ok(false);
        }

        if self.bookings.references_package(id).await? {
            let deactivated = self.catalog.set_package_active(id, false).await?;
            tracing::warn!(
                package_id = id,
                "Package is in use, marked inactive instead of deleting"
            );
            Ok(deactivated)
        } else {
            let removed = self.catalog.remove_package(id).await?;
            tracing::info!(package_id = id, "Package deleted");
            Ok(removed)
        }
    }

    pub async fn set_package_active(&self, id: PackageId, active: bool) -> Result<bool> {
        let updated = self.catalog.set_package_active(id, active).await?;
        if updated {
            tracing::info!(package_id = id, active, "Set package active status");
        } else {
            tracing::warn!(package_id = id, "Package not found for status update");
        }
        Ok(updated)
    }

    // --- menu items ---

    /// All menu items sorted by name, case-insensitively.
    pub async fn list_menu_items(&self, include_inactive: bool) -> Result<Vec<MenuItem>> {
        tracing::info!(include_inactive, "Fetching menu items");
        let mut items: Vec<MenuItem> = self
            .catalog
            .all_menu_items()
            .await?
            .into_iter()
            .filter(|i| include_inactive || i.active)
            .collect();
        items.sort_by(|a, b| catalog::compare_names(&a.name, &b.name));
        Ok(items)
    }

    pub async fn list_active_menu_items(&self) -> Result<Vec<MenuItem>> {
        self.list_menu_items(false).await
    }

    pub async fn get_menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>> {
        let item = self.catalog.get_menu_item(id).await?;
        if item.is_none() {
            tracing::warn!(item_id = id, "Menu item not found");
        }
        Ok(item)
    }

    pub async fn create_or_update_menu_item(&self, item: MenuItem) -> Result<MenuItem> {
        self.catalog.save_menu_item(item).await
    }

    // --- bookings ---

    /// Brings a booking's costs up to date before display or save.
    ///
    /// Resolves the selected package and every item's menu item, re-prices
    /// per-person items against the current guest count, and writes the base,
    /// additional and total costs onto `booking`. Returns whether any line cost
    /// changed.
    pub async fn price_booking(
        &self,
        booking: &mut Booking,
        items: &mut [BookingItem],
    ) -> Result<bool> {
        booking.package = self.resolve_package(booking.package_id).await?;
        for item in items.iter_mut() {
            self.resolve_menu_item(item).await?;
        }

        let changed = cost::recalculate_per_person_costs(items, booking.guest_count);
        let base = booking
            .package
            .as_ref()
            .map(|p| p.price)
            .unwrap_or(Money::ZERO);
        let additional = cost::additional_items_total(items);

        booking.base_package_cost = base;
        booking.additional_items_cost = additional;
        booking.total_cost = cost::booking_total(base, additional);
        Ok(changed)
    }

    /// Stores a booking together with a private copy of `items`.
    ///
    /// The cost fields are stored as given; see [`CateringEngine::price_booking`].
    pub async fn create_or_update_booking(
        &self,
        booking: Booking,
        items: &[BookingItem],
    ) -> Result<Booking> {
        let mut items = items.to_vec();
        for item in items.iter_mut() {
            self.resolve_menu_item(item).await?;
        }
        let mut saved = self.bookings.save(booking, &items).await?;
        self.fill_package(&mut saved).await?;
        Ok(saved)
    }

    /// Like [`CateringEngine::create_or_update_booking`] but only for stored bookings.
    pub async fn update_booking(&self, booking: Booking, items: &[BookingItem]) -> Result<Booking> {
        if booking.is_new() {
            tracing::warn!("update_booking called for a booking without an id");
            return Err(CateringError::ValidationError(
                "Cannot update a booking that has not been saved".to_string(),
            ));
        }
        self.create_or_update_booking(booking, items).await
    }

    /// All bookings, latest event first.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        tracing::info!("Fetching all bookings");
        let mut bookings = self.bookings.all().await?;
        for booking in bookings.iter_mut() {
            self.fill_package(booking).await?;
        }
        bookings.sort_by(booking::newest_first);
        Ok(bookings)
    }

    pub async fn get_booking(&self, id: BookingId) -> Result<Option<Booking>> {
        tracing::info!(booking_id = id, "Fetching booking");
        match self.bookings.get(id).await? {
            Some(mut booking) => {
                self.fill_package(&mut booking).await?;
                Ok(Some(booking))
            }
            None => {
                tracing::warn!(booking_id = id, "Booking not found");
                Ok(None)
            }
        }
    }

    /// A copy of the line items stored with a booking; empty if it is unknown.
    pub async fn booking_items(&self, id: BookingId) -> Result<Vec<BookingItem>> {
        Ok(self
            .bookings
            .get(id)
            .await?
            .map(|booking| booking.items)
            .unwrap_or_default())
    }

    pub async fn remove_booking(&self, id: BookingId) -> Result<bool> {
        tracing::info!(booking_id = id, "Attempting to delete booking");
        let removed = self.bookings.remove(id).await?;
        if removed {
            tracing::info!(booking_id = id, "Booking deleted");
        } else {
            tracing::warn!(booking_id = id, "Booking not found for deletion");
        }
        Ok(removed)
    }

    /// Bookings on or after `today`, soonest first, at most `limit` of them.
    pub async fn upcoming_bookings(&self, today: NaiveDate, limit: usize) -> Result<Vec<Booking>> {
        let mut upcoming: Vec<Booking> = self
            .list_bookings()
            .await?
            .into_iter()
            .filter(|b| b.event_date.is_some_and(|date| date >= today))
            .collect();
        upcoming.sort_by(booking::soonest_first);
        upcoming.truncate(limit);
        Ok(upcoming)
    }

    pub async fn booking_stats(&self) -> Result<BookingStats> {
        let bookings = self.bookings.all().await?;
        Ok(BookingStats::from_bookings(&bookings))
    }

    /// Loads the demo catalog and one confirmed booking two weeks after `today`.
    pub async fn seed_sample_data(&self, today: NaiveDate) -> Result<()> {
        tracing::info!("Loading sample data");
        for item in sample_data::menu_items()? {
            self.catalog.save_menu_item(item).await?;
        }

        let mut featured = None;
        for package in sample_data::packages()? {
            let saved = self.catalog.save_package(package).await?;
            if featured.is_none() {
                featured = Some(saved);
            }
        }

        if let Some(package) = featured {
            self.create_or_update_booking(sample_data::booking(today, &package), &[])
                .await?;
        }
        tracing::info!("Sample data loaded");
        Ok(())
    }

    async fn resolve_package(&self, id: Option<PackageId>) -> Result<Option<Package>> {
        match id {
            Some(id) => self.catalog.get_package(id).await,
            None => Ok(None),
        }
    }

    async fn resolve_menu_item(&self, item: &mut BookingItem) -> Result<()> {
        if item.menu_item.is_none() {
            item.menu_item = self.catalog.get_menu_item(item.menu_item_id).await?;
        }
        Ok(())
    }

    /// Attaches the package as the catalog holds it now, so renames and
    /// deactivations show up on every read.
    async fn fill_package(&self, booking: &mut Booking) -> Result<()> {
        booking.package = self.resolve_package(booking.package_id).await?;
        Ok(())
    }
}
