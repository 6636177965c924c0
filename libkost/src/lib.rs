//! Kostkita - boarding-house (kost) rental marketplace core
//!
//! This library provides the domain model, application state store, and
//! derived view computations shared by the kost-* command line tools.

pub mod ai;
pub mod config;
pub mod error;
pub mod logging;
pub mod reminders;
pub mod seed;
pub mod session;
pub mod store;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use error::{KostError, Result};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use store::AppStore;
pub use types::{
    Booking, BookingStatus, Notification, NotificationKind, PaymentStatus, Property, Review,
    Room, RoomType, User, UserRole,
};
