use super::booking::{Booking, BookingId, BookingItem};
use super::catalog::{MenuItem, MenuItemId, Package, PackageId};
use crate::error::Result;
use async_trait::async_trait;

/// Owns packages and menu items.
///
/// Saving a record whose id is unassigned allocates a fresh id; saving one with
/// an id overwrites the record stored under it.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn save_package(&self, package: Package) -> Result<Package>;
    async fn get_package(&self, id: PackageId) -> Result<Option<Package>>;
    async fn all_packages(&self) -> Result<Vec<Package>>;
    /// Hard removal. Returns `false` if nothing was stored under `id`.
    async fn remove_package(&self, id: PackageId) -> Result<bool>;
    /// Returns `false` if nothing was stored under `id`.
    async fn set_package_active(&self, id: PackageId, active: bool) -> Result<bool>;

    async fn save_menu_item(&self, item: MenuItem) -> Result<MenuItem>;
    async fn get_menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>>;
    async fn all_menu_items(&self) -> Result<Vec<MenuItem>>;
}

/// Owns bookings and their embedded line items.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Stores `booking` with a private copy of `items` as its line items.
    ///
    /// Allocates the booking id when unassigned, allocates ids for items that
    /// lack one and links every item to the booking. The previous record under
    /// the same id is replaced as a whole.
    async fn save(&self, booking: Booking, items: &[BookingItem]) -> Result<Booking>;
    async fn get(&self, id: BookingId) -> Result<Option<Booking>>;
    async fn all(&self) -> Result<Vec<Booking>>;
    /// Returns `false` if nothing was stored under `id`.
    async fn remove(&self, id: BookingId) -> Result<bool>;
    /// Whether any booking selects `package_id`.
    async fn references_package(&self, package_id: PackageId) -> Result<bool>;
}

pub type CatalogStoreBox = Box<dyn CatalogStore>;
pub type BookingStoreBox = Box<dyn BookingStore>;
