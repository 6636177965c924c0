//! Core domain types for Kostkita
//!
//! Entities serialize with the marketplace's original wire names (camelCase
//! fields, SCREAMING status values) so exported JSON stays compatible with
//! existing seed data and consumers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Tenant,
    Owner,
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tenant" => Ok(UserRole::Tenant),
            "owner" => Ok(UserRole::Owner),
            _ => Err(format!("Invalid role: '{}'. Valid options: tenant, owner", s)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Tenant => write!(f, "tenant"),
            UserRole::Owner => write!(f, "owner"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: Option<String>,
}

/// A facility a property can offer (WiFi, AC, ...). The catalog of known
/// facilities lives in [`crate::seed::facility_catalog`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Deluxe,
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "deluxe" => Ok(RoomType::Deluxe),
            _ => Err(format!(
                "Invalid room type: '{}'. Valid options: single, double, deluxe",
                s
            )),
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomType::Single => write!(f, "SINGLE"),
            RoomType::Double => write!(f, "DOUBLE"),
            RoomType::Deluxe => write!(f, "DELUXE"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub property_id: String,
    pub room_number: String,
    /// Monthly price in rupiah
    pub price: u64,
    pub is_available: bool,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub current_tenant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    /// Snapshot of the author's display name at submission time
    pub user_name: String,
    /// Integer rating in 1..=5
    pub rating: u8,
    pub comment: String,
    /// Submission date, ISO date only (YYYY-MM-DD)
    pub date: String,
}

/// Who a property accepts: women only, men only, or mixed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GenderPolicy {
    Putri,
    Putra,
    Campur,
}

impl std::fmt::Display for GenderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenderPolicy::Putri => write!(f, "Putri"),
            GenderPolicy::Putra => write!(f, "Putra"),
            GenderPolicy::Campur => write!(f, "Campur"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub area: String,
    pub description: String,
    pub image_url: String,
    /// Lowest advertised monthly price in rupiah
    pub base_price: u64,
    /// Facility ids, see [`crate::seed::facility_catalog`]
    pub facilities: Vec<String>,
    /// Derived: mean of review ratings rounded to one decimal, 0.0 without reviews
    pub rating: f64,
    pub rooms: Vec<Room>,
    pub reviews: Vec<Review>,
    pub lat: f64,
    pub lng: f64,
    pub gender: GenderPolicy,
    pub rooms_left: u32,
    pub promo_text: Option<String>,
}

impl Property {
    /// Recompute the aggregate rating from the current reviews.
    ///
    /// Mean of all review ratings rounded to one decimal place; 0.0 when
    /// there are no reviews. Called every time a review is appended.
    pub fn recalculate_rating(&mut self) {
        if self.reviews.is_empty() {
            self.rating = 0.0;
            return;
        }
        let sum: u32 = self.reviews.iter().map(|r| r.rating as u32).sum();
        let mean = sum as f64 / self.reviews.len() as f64;
        self.rating = (mean * 10.0).round() / 10.0;
    }

    /// Whether the property currently carries a non-empty promo text
    pub fn has_promo(&self) -> bool {
        self.promo_text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(format!(
                "Invalid booking status: '{}'. Valid options: pending, confirmed, cancelled, completed",
                s
            )),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "PENDING"),
            BookingStatus::Confirmed => write!(f, "CONFIRMED"),
            BookingStatus::Cancelled => write!(f, "CANCELLED"),
            BookingStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unpaid" => Ok(PaymentStatus::Unpaid),
            "paid" => Ok(PaymentStatus::Paid),
            _ => Err(format!(
                "Invalid payment status: '{}'. Valid options: unpaid, paid",
                s
            )),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Unpaid => write!(f, "UNPAID"),
            PaymentStatus::Paid => write!(f, "PAID"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub tenant_id: String,
    pub property_id: String,
    pub room_id: String,
    /// ISO 8601 timestamp
    pub start_date: String,
    /// ISO 8601 timestamp
    pub end_date: String,
    pub total_price: u64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
}

/// A booking as submitted by a tenant, before the store assigns an id
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub tenant_id: String,
    pub property_id: String,
    pub room_id: String,
    pub start_date: String,
    pub end_date: String,
    pub total_price: u64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
}

impl NewBooking {
    pub(crate) fn into_booking(self) -> Booking {
        Booking {
            id: Uuid::new_v4().to_string(),
            tenant_id: self.tenant_id,
            property_id: self.property_id,
            room_id: self.room_id,
            start_date: self.start_date,
            end_date: self.end_date,
            total_price: self.total_price,
            status: self.status,
            payment_status: self.payment_status,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Booking,
    Payment,
    System,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Booking => write!(f, "BOOKING"),
            NotificationKind::Payment => write!(f, "PAYMENT"),
            NotificationKind::System => write!(f, "SYSTEM"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// Recipient user id
    pub user_id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    /// Creation timestamp, ISO 8601
    pub date: String,
}

/// A notification payload; the store assigns id, date, and is_read
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

/// A review payload; the store assigns id, date, and the user-name snapshot
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
}
