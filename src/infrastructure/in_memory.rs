use crate::domain::booking::{Booking, BookingId, BookingItem};
use crate::domain::catalog::{MenuItem, MenuItemId, Package, PackageId, UNASSIGNED};
use crate::domain::ports::{BookingStore, CatalogStore};
use crate::error::{CateringError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

/// Monotonic identity allocator.
///
/// Starts at 1. Each allocation is a single atomic update, so concurrent
/// callers never receive the same value. The counter never wraps: once the
/// id space is spent, allocation fails instead of handing out a used id.
#[derive(Debug)]
pub struct IdCounter {
    next: AtomicU32,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&self) -> Result<u32> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map_err(|_| {
                CateringError::Unexpected(Box::new(std::io::Error::other(
                    "identity space exhausted",
                )))
            })
    }

    /// Records an externally chosen id so later allocations skip past it.
    ///
    /// Rejects an id with no successor, since the counter could not move past it.
    pub fn observe(&self, id: u32) -> Result<()> {
        let successor = id.checked_add(1).ok_or_else(|| {
            CateringError::ValidationError(format!("Identity {id} is out of range"))
        })?;
        self.next.fetch_max(successor, Ordering::SeqCst);
        Ok(())
    }

    fn assign(&self, id: &mut u32) -> Result<()> {
        if *id == UNASSIGNED {
            *id = self.allocate()?;
            Ok(())
        } else {
            self.observe(*id)
        }
    }
}

/// A thread-safe in-memory store for packages and menu items.
///
/// Each collection sits behind its own `RwLock`, so package writes never
/// block menu item reads. `Clone` shares the underlying maps and counters.
#[derive(Default, Clone)]
pub struct InMemoryCatalogStore {
    packages: Arc<RwLock<HashMap<PackageId, Package>>>,
    menu_items: Arc<RwLock<HashMap<MenuItemId, MenuItem>>>,
    package_ids: Arc<IdCounter>,
    menu_item_ids: Arc<IdCounter>,
}

impl InMemoryCatalogStore {
    /// Creates a new, empty in-memory catalog store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn save_package(&self, mut package: Package) -> Result<Package> {
        package.validate()?;
        let is_new = package.id == UNASSIGNED;
        self.package_ids.assign(&mut package.id)?;
        if is_new {
            tracing::info!(package_id = package.id, "Inserting new package");
        } else {
            tracing::info!(package_id = package.id, "Updating package");
        }

        let mut packages = self.packages.write().await;
        packages.insert(package.id, package.clone());
        Ok(package)
    }

    async fn get_package(&self, id: PackageId) -> Result<Option<Package>> {
        let packages = self.packages.read().await;
        Ok(packages.get(&id).cloned())
    }

    async fn all_packages(&self) -> Result<Vec<Package>> {
        let packages = self.packages.read().await;
        Ok(packages.values().cloned().collect())
    }

    async fn remove_package(&self, id: PackageId) -> Result<bool> {
        let mut packages = self.packages.write().await;
        Ok(packages.remove(&id).is_some())
    }

    async fn set_package_active(&self, id: PackageId, active: bool) -> Result<bool> {
        let mut packages = self.packages.write().await;
        match packages.get_mut(&id) {
            Some(package) => {
                package.active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn save_menu_item(&self, mut item: MenuItem) -> Result<MenuItem> {
        item.validate()?;
        let is_new = item.id == UNASSIGNED;
        self.menu_item_ids.assign(&mut item.id)?;
        if is_new {
            tracing::info!(item_id = item.id, "Inserting new menu item");
        } else {
            tracing::info!(item_id = item.id, "Updating menu item");
        }

        let mut menu_items = self.menu_items.write().await;
        menu_items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn get_menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>> {
        let menu_items = self.menu_items.read().await;
        Ok(menu_items.get(&id).cloned())
    }

    async fn all_menu_items(&self) -> Result<Vec<MenuItem>> {
        let menu_items = self.menu_items.read().await;
        Ok(menu_items.values().cloned().collect())
    }
}

/// A thread-safe in-memory store for bookings.
///
/// Line items live inside their booking record, so a save replaces a booking
/// and all of its items under a single write lock. Packages are kept by id
/// only; the stored record never carries a package copy.
#[derive(Default, Clone)]
pub struct InMemoryBookingStore {
    bookings: Arc<RwLock<HashMap<BookingId, Booking>>>,
    booking_ids: Arc<IdCounter>,
    item_ids: Arc<IdCounter>,
}

impl InMemoryBookingStore {
    /// Creates a new, empty in-memory booking store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn save(&self, mut booking: Booking, items: &[BookingItem]) -> Result<Booking> {
        let is_new = booking.is_new();
        self.booking_ids.assign(&mut booking.id)?;
        if is_new {
            tracing::info!(booking_id = booking.id, "Inserting new booking");
        } else {
            tracing::info!(booking_id = booking.id, "Updating booking");
        }

        let booking_id = booking.id;
        booking.items = items
            .iter()
            .cloned()
            .map(|mut item| {
                self.item_ids.assign(&mut item.id)?;
                item.booking_id = booking_id;
                Ok(item)
            })
            .collect::<Result<Vec<_>>>()?;
        // held by id only; readers resolve the package through the catalog
        booking.package = None;

        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn get(&self, id: BookingId) -> Result<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.values().cloned().collect())
    }

    async fn remove(&self, id: BookingId) -> Result<bool> {
        let mut bookings = self.bookings.write().await;
        Ok(bookings.remove(&id).is_some())
    }

    async fn references_package(&self, package_id: PackageId) -> Result<bool> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .values()
            .any(|booking| booking.package_id == Some(package_id)))
    }
}
