//! Automatic unpaid-payment reminders
//!
//! When the session belongs to a tenant, every one of their Unpaid bookings
//! must have a matching reminder in the feed. The dedup key is the booking id
//! appearing as a literal substring of an existing PAYMENT notification's
//! message, so the message template below and the check can't be changed
//! independently.

use crate::store::AppStore;
use crate::types::{NewNotification, NotificationKind, PaymentStatus, UserRole};

const REMINDER_TITLE: &str = "Peringatan Pembayaran";

fn reminder_message(booking_id: &str) -> String {
    format!(
        "Booking dengan ID {} belum dibayar. Mohon segera selesaikan pembayaran.",
        booking_id
    )
}

impl AppStore {
    /// Ensure one payment reminder exists per unpaid booking of the session
    /// tenant. Returns the number of reminders emitted; re-running with
    /// unchanged state emits nothing.
    pub fn sync_payment_reminders(&mut self) -> usize {
        let Some(user) = self.user() else {
            return 0;
        };
        if user.role != UserRole::Tenant {
            return 0;
        }
        let user_id = user.id.clone();

        let unpaid: Vec<String> = self
            .bookings()
            .iter()
            .filter(|b| b.tenant_id == user_id && b.payment_status == PaymentStatus::Unpaid)
            .map(|b| b.id.clone())
            .collect();

        let mut emitted = 0;
        for booking_id in unpaid {
            let already_notified = self.notifications().iter().any(|n| {
                n.user_id == user_id
                    && n.kind == NotificationKind::Payment
                    && n.message.contains(&booking_id)
            });
            if already_notified {
                continue;
            }

            self.add_notification(NewNotification {
                user_id: user_id.clone(),
                title: REMINDER_TITLE.to_string(),
                message: reminder_message(&booking_id),
                kind: NotificationKind::Payment,
            });
            emitted += 1;
        }

        if emitted > 0 {
            tracing::info!(count = emitted, "payment reminders emitted");
        }
        emitted
    }
}
