//! Application state store
//!
//! `AppStore` is the single source of truth for the current session user and
//! the three top-level collections (properties, bookings, notifications).
//! Every mutation runs to completion before the next one is observed; the
//! store is process-local and single-writer, so no locking is needed.
//!
//! Not-found lookups are silent no-ops by design, never errors. The only
//! fallible operations are login/logout, which touch durable session storage.

use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::session::SessionStore;
use crate::types::{
    Booking, BookingStatus, NewBooking, NewNotification, NewReview, Notification,
    NotificationKind, PaymentStatus, Property, Review, User, UserRole,
};

pub struct AppStore {
    user: Option<User>,
    properties: Vec<Property>,
    bookings: Vec<Booking>,
    /// Newest first
    notifications: Vec<Notification>,
    session: Box<dyn SessionStore>,
}

impl AppStore {
    /// Create an empty store, restoring any saved session (read once)
    pub fn new(session: Box<dyn SessionStore>) -> Result<Self> {
        let user = session.load()?;
        if let Some(ref user) = user {
            tracing::debug!(user = %user.id, "restored saved session");
        }
        Ok(Self {
            user,
            properties: Vec::new(),
            bookings: Vec::new(),
            notifications: Vec::new(),
            session,
        })
    }

    /// Create a store pre-populated with the seed listings
    pub fn seeded(session: Box<dyn SessionStore>) -> Result<Self> {
        let mut store = Self::new(session)?;
        store.properties = crate::seed::seed_properties();
        store.bookings = crate::seed::seed_bookings();
        Ok(store)
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn find_property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn find_booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Log in with a deterministic mock identity for the role.
    ///
    /// There is no real identity provider; the fabricated users mirror the
    /// seed data (`admin1` owns the seed properties). Persists the session
    /// and emits a SYSTEM welcome notification to the new user.
    pub fn login(&mut self, email: &str, role: UserRole) -> Result<User> {
        let user = mock_user(email, role);
        self.session.save(&user)?;
        self.user = Some(user.clone());

        self.add_notification(NewNotification {
            user_id: user.id.clone(),
            title: "Sistem Aktif".to_string(),
            message: format!("Selamat datang kembali, {}.", user.name),
            kind: NotificationKind::System,
        });

        tracing::info!(user = %user.id, role = %user.role, "logged in");
        Ok(user)
    }

    /// Clear the session user, the saved session, and the notification feed.
    ///
    /// Notifications are session-scoped, so the whole feed goes with the
    /// session.
    pub fn logout(&mut self) -> Result<()> {
        self.session.clear()?;
        self.user = None;
        self.notifications.clear();
        tracing::info!("logged out");
        Ok(())
    }

    /// Append a booking and notify the property owner.
    ///
    /// Does not flip room availability; the booking flow calls
    /// [`update_room_status`](Self::update_room_status) separately.
    pub fn add_booking(&mut self, new: NewBooking) -> Booking {
        let booking = new.into_booking();
        self.bookings.push(booking.clone());

        if let Some(prop) = self.properties.iter().find(|p| p.id == booking.property_id) {
            let owner_id = prop.owner_id.clone();
            let prop_name = prop.name.clone();
            self.add_notification(NewNotification {
                user_id: owner_id,
                title: "Pesanan Masuk".to_string(),
                message: format!(
                    "Ada pesanan kamar baru di {}. Silakan cek manajemen penyewa.",
                    prop_name
                ),
                kind: NotificationKind::Booking,
            });
        }

        tracing::info!(booking = %booking.id, property = %booking.property_id, "booking created");
        booking
    }

    /// Replace both status fields on the matching booking; no-op on unknown
    /// ids. A Paid payment status notifies the tenant.
    pub fn update_booking_status(
        &mut self,
        id: &str,
        status: BookingStatus,
        payment: PaymentStatus,
    ) {
        let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) else {
            tracing::debug!(booking = id, "update ignored, no such booking");
            return;
        };
        booking.status = status;
        booking.payment_status = payment;
        let tenant_id = booking.tenant_id.clone();

        if payment == PaymentStatus::Paid {
            self.add_notification(NewNotification {
                user_id: tenant_id,
                title: "Pembayaran Dikonfirmasi".to_string(),
                message: format!(
                    "Terima kasih! Pembayaran untuk booking {} telah kami terima.",
                    id
                ),
                kind: NotificationKind::Payment,
            });
        }
    }

    /// Append a fully-formed property; the store performs no uniqueness checks
    pub fn add_property(&mut self, property: Property) {
        tracing::info!(property = %property.id, "property added");
        self.properties.push(property);
    }

    /// Set a room's availability; no-op when either id is absent
    pub fn update_room_status(&mut self, property_id: &str, room_id: &str, available: bool) {
        let Some(prop) = self.properties.iter_mut().find(|p| p.id == property_id) else {
            return;
        };
        let Some(room) = prop.rooms.iter_mut().find(|r| r.id == room_id) else {
            return;
        };
        room.is_available = available;
        tracing::debug!(property = property_id, room = room_id, available, "room status set");
    }

    /// Assign id/date/unread and prepend, keeping the feed newest-first
    pub fn add_notification(&mut self, new: NewNotification) {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            title: new.title,
            message: new.message,
            kind: new.kind,
            is_read: false,
            date: Utc::now().to_rfc3339(),
        };
        self.notifications.insert(0, notification);
    }

    /// Mark every notification read, regardless of recipient.
    ///
    /// Deliberately unscoped: the feed is session-local and cleared wholesale
    /// on logout, so per-recipient scoping never became observable behavior.
    pub fn mark_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    /// Append a review under the current session user and recompute the
    /// property rating. No-op without a session or on an unknown property.
    pub fn add_review(&mut self, property_id: &str, new: NewReview) {
        let Some(user) = self.user.as_ref() else {
            tracing::debug!("review ignored, no session user");
            return;
        };
        let user_name = user.name.clone();

        let Some(prop) = self.properties.iter_mut().find(|p| p.id == property_id) else {
            return;
        };
        prop.reviews.push(Review {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            user_name,
            rating: new.rating,
            comment: new.comment,
            date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
        });
        prop.recalculate_rating();
    }
}

/// Fabricated identity, a deterministic function of the role.
///
/// Mock boundary standing in for an identity provider, not a design to
/// emulate.
fn mock_user(email: &str, role: UserRole) -> User {
    match role {
        UserRole::Owner => User {
            id: "admin1".to_string(),
            name: "Budi Pemilik".to_string(),
            email: email.to_string(),
            role,
            avatar: Some("https://ui-avatars.com/api/?name=BP".to_string()),
        },
        UserRole::Tenant => User {
            id: "user1".to_string(),
            name: "Andi Penyewa".to_string(),
            email: email.to_string(),
            role,
            avatar: Some("https://ui-avatars.com/api/?name=AP".to_string()),
        },
    }
}
