//! Integration tests for the unpaid-payment reminder rule

use libkost::store::AppStore;
use libkost::types::{BookingStatus, NewBooking, NotificationKind, PaymentStatus, UserRole};
use libkost::MemorySessionStore;

fn unpaid(tenant_id: &str) -> NewBooking {
    NewBooking {
        tenant_id: tenant_id.to_string(),
        property_id: "p1".to_string(),
        room_id: "r1".to_string(),
        start_date: "2025-06-01T00:00:00Z".to_string(),
        end_date: "2025-07-01T00:00:00Z".to_string(),
        total_price: 1_700_000,
        status: BookingStatus::Pending,
        payment_status: PaymentStatus::Unpaid,
    }
}

#[test]
fn reminder_emitted_once_per_session_per_booking() {
    let mut store = AppStore::seeded(Box::new(MemorySessionStore::new())).unwrap();
    store.login("andi@example.com", UserRole::Tenant).unwrap();

    let booking = store.add_booking(unpaid("user1"));

    // The feed so far: welcome SYSTEM + owner BOOKING, no PAYMENT yet
    assert_eq!(store.sync_payment_reminders(), 1);

    let reminders: Vec<_> = store
        .notifications()
        .iter()
        .filter(|n| n.kind == NotificationKind::Payment && n.user_id == "user1")
        .collect();
    assert_eq!(reminders.len(), 1);
    assert!(reminders[0].message.contains(&booking.id));
    assert_eq!(reminders[0].title, "Peringatan Pembayaran");

    // Re-running with unchanged state is a no-op: the existing message
    // already contains the booking id
    assert_eq!(store.sync_payment_reminders(), 0);
    assert_eq!(store.sync_payment_reminders(), 0);
}

#[test]
fn reminder_dedup_survives_mark_read() {
    let mut store = AppStore::seeded(Box::new(MemorySessionStore::new())).unwrap();
    store.login("andi@example.com", UserRole::Tenant).unwrap();
    store.add_booking(unpaid("user1"));

    store.sync_payment_reminders();
    store.mark_notifications_read();

    // Read state plays no part in the dedup key
    assert_eq!(store.sync_payment_reminders(), 0);
}

#[test]
fn reminder_stops_after_payment() {
    let mut store = AppStore::seeded(Box::new(MemorySessionStore::new())).unwrap();
    store.login("andi@example.com", UserRole::Tenant).unwrap();
    let booking = store.add_booking(unpaid("user1"));

    store.update_booking_status(&booking.id, BookingStatus::Confirmed, PaymentStatus::Paid);
    assert_eq!(store.sync_payment_reminders(), 0);
}

#[test]
fn new_session_reminds_again_after_logout() {
    let mut store = AppStore::seeded(Box::new(MemorySessionStore::new())).unwrap();
    store.login("andi@example.com", UserRole::Tenant).unwrap();
    store.add_booking(unpaid("user1"));
    assert_eq!(store.sync_payment_reminders(), 1);

    // Logout clears the feed; the next session has no matching notification
    // and the rule fires again. One reminder per unpaid booking per session.
    store.logout().unwrap();
    store.login("andi@example.com", UserRole::Tenant).unwrap();
    assert_eq!(store.sync_payment_reminders(), 1);
}

#[test]
fn reminders_scope_to_session_tenant() {
    let mut store = AppStore::seeded(Box::new(MemorySessionStore::new())).unwrap();
    store.add_booking(unpaid("user1"));
    store.add_booking(unpaid("stranger"));

    // No session: nothing
    assert_eq!(store.sync_payment_reminders(), 0);

    // Owner session: nothing
    store.login("budi@example.com", UserRole::Owner).unwrap();
    assert_eq!(store.sync_payment_reminders(), 0);
    store.logout().unwrap();

    // Tenant session: only their own booking
    store.login("andi@example.com", UserRole::Tenant).unwrap();
    assert_eq!(store.sync_payment_reminders(), 1);
}
