//! Derived view computations
//!
//! Pure functions over current state, recomputed on every call. Nothing here
//! mutates the store or caches results.

use serde::Serialize;

use crate::types::{Booking, BookingStatus, PaymentStatus, Property};

/// Free-text search combined with an optional exact city filter.
///
/// A property matches when the query is a case-insensitive substring of its
/// name or area, AND (when a city filter is given) its city equals the
/// filter. An empty query matches everything.
pub fn search_properties<'a>(
    properties: &'a [Property],
    query: &str,
    city: Option<&str>,
) -> Vec<&'a Property> {
    let needle = query.to_lowercase();
    properties
        .iter()
        .filter(|p| {
            let text_match = needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.area.to_lowercase().contains(&needle);
            let city_match = city.map_or(true, |c| p.city == c);
            text_match && city_match
        })
        .collect()
}

/// Properties currently carrying a non-empty promo text
pub fn promo_properties(properties: &[Property]) -> Vec<&Property> {
    properties.iter().filter(|p| p.has_promo()).collect()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of totalPrice over Paid bookings, in rupiah
    pub total_revenue: u64,
    /// Bookings that are Pending or Confirmed
    pub active_bookings: usize,
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    /// Occupied / total rooms × 100; 0.0 when there are no rooms
    pub occupancy_rate: f64,
}

pub fn dashboard_stats(properties: &[Property], bookings: &[Booking]) -> DashboardStats {
    let total_revenue = bookings
        .iter()
        .filter(|b| b.payment_status == PaymentStatus::Paid)
        .map(|b| b.total_price)
        .sum();

    let active_bookings = bookings
        .iter()
        .filter(|b| matches!(b.status, BookingStatus::Pending | BookingStatus::Confirmed))
        .count();

    let total_rooms: usize = properties.iter().map(|p| p.rooms.len()).sum();
    let occupied_rooms: usize = properties
        .iter()
        .map(|p| p.rooms.iter().filter(|r| !r.is_available).count())
        .sum();

    let occupancy_rate = if total_rooms == 0 {
        0.0
    } else {
        occupied_rooms as f64 / total_rooms as f64 * 100.0
    };

    DashboardStats {
        total_revenue,
        active_bookings,
        total_rooms,
        occupied_rooms,
        occupancy_rate,
    }
}

/// Occupied/total room counts for one property
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOccupancy {
    pub property_id: String,
    pub name: String,
    pub occupied: usize,
    pub total: usize,
}

/// Per-property occupancy pairs, in property order
pub fn occupancy_by_property(properties: &[Property]) -> Vec<PropertyOccupancy> {
    properties
        .iter()
        .map(|p| PropertyOccupancy {
            property_id: p.id.clone(),
            name: p.name.clone(),
            occupied: p.rooms.iter().filter(|r| !r.is_available).count(),
            total: p.rooms.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenderPolicy, Room, RoomType};

    fn property(id: &str, name: &str, city: &str, area: &str, rooms: &[bool]) -> Property {
        Property {
            id: id.to_string(),
            owner_id: "admin1".to_string(),
            name: name.to_string(),
            address: String::new(),
            city: city.to_string(),
            area: area.to_string(),
            description: String::new(),
            image_url: String::new(),
            base_price: 1_500_000,
            facilities: vec![],
            rating: 0.0,
            rooms: rooms
                .iter()
                .enumerate()
                .map(|(n, &available)| Room {
                    id: format!("{}-r{}", id, n),
                    property_id: id.to_string(),
                    room_number: format!("{}", 100 + n),
                    price: 1_500_000,
                    is_available: available,
                    room_type: RoomType::Single,
                    current_tenant_id: None,
                })
                .collect(),
            reviews: vec![],
            lat: 0.0,
            lng: 0.0,
            gender: GenderPolicy::Campur,
            rooms_left: 1,
            promo_text: None,
        }
    }

    fn booking(status: BookingStatus, payment: PaymentStatus, price: u64) -> Booking {
        Booking {
            id: uuid::Uuid::new_v4().to_string(),
            tenant_id: "user1".to_string(),
            property_id: "p1".to_string(),
            room_id: "r1".to_string(),
            start_date: "2025-06-01T00:00:00Z".to_string(),
            end_date: "2025-07-01T00:00:00Z".to_string(),
            total_price: price,
            status,
            payment_status: payment,
        }
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let props = vec![property("p1", "Kost Sukamahi", "Bekasi", "Cikarang Pusat", &[])];

        assert_eq!(search_properties(&props, "kos", None).len(), 1);
        assert_eq!(search_properties(&props, "SUKAMAHI", None).len(), 1);
        assert_eq!(search_properties(&props, "villa", None).len(), 0);
    }

    #[test]
    fn test_search_matches_area() {
        let props = vec![property("p1", "Kost Sukamahi", "Bekasi", "Cikarang Pusat", &[])];
        assert_eq!(search_properties(&props, "cikarang", None).len(), 1);
    }

    #[test]
    fn test_search_city_filter_is_and_not_or() {
        let props = vec![
            property("p1", "Kost Imajo", "Yogyakarta", "Depok", &[]),
            property("p2", "Kost Sukamahi", "Bekasi", "Cikarang Pusat", &[]),
        ];

        // Name matches but city excludes the Yogyakarta property
        let hits = search_properties(&props, "kost", Some("Bekasi"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p2");
    }

    #[test]
    fn test_search_no_city_filter_means_all_cities() {
        let props = vec![
            property("p1", "Kost Imajo", "Yogyakarta", "Depok", &[]),
            property("p2", "Kost Sukamahi", "Bekasi", "Cikarang Pusat", &[]),
        ];
        assert_eq!(search_properties(&props, "kost", None).len(), 2);
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let props = vec![
            property("p1", "Kost Imajo", "Yogyakarta", "Depok", &[]),
            property("p2", "Kost Sukamahi", "Bekasi", "Cikarang Pusat", &[]),
        ];
        assert_eq!(search_properties(&props, "", None).len(), 2);
        assert_eq!(search_properties(&props, "", Some("Bekasi")).len(), 1);
    }

    #[test]
    fn test_promo_filter() {
        let mut with_promo = property("p1", "A", "Bekasi", "X", &[]);
        with_promo.promo_text = Some("Promo Akhir Tahun".to_string());
        let mut empty_promo = property("p2", "B", "Bekasi", "X", &[]);
        empty_promo.promo_text = Some(String::new());
        let no_promo = property("p3", "C", "Bekasi", "X", &[]);

        let props = vec![with_promo, empty_promo, no_promo];
        let hits = promo_properties(&props);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p1");
    }

    #[test]
    fn test_dashboard_occupancy_rate() {
        // (2 occupied / 3 total) and (0 / 2) -> 2/5 = 40%
        let props = vec![
            property("p1", "A", "Bekasi", "X", &[false, false, true]),
            property("p2", "B", "Bekasi", "X", &[true, true]),
        ];

        let stats = dashboard_stats(&props, &[]);
        assert_eq!(stats.total_rooms, 5);
        assert_eq!(stats.occupied_rooms, 2);
        assert_eq!(stats.occupancy_rate, 40.0);
    }

    #[test]
    fn test_dashboard_no_rooms_no_division_fault() {
        let stats = dashboard_stats(&[], &[]);
        assert_eq!(stats.occupancy_rate, 0.0);
        assert_eq!(stats.total_rooms, 0);
    }

    #[test]
    fn test_dashboard_revenue_counts_paid_only() {
        let bookings = vec![
            booking(BookingStatus::Confirmed, PaymentStatus::Paid, 1_700_000),
            booking(BookingStatus::Completed, PaymentStatus::Paid, 1_800_000),
            booking(BookingStatus::Pending, PaymentStatus::Unpaid, 9_999_999),
        ];

        let stats = dashboard_stats(&[], &bookings);
        assert_eq!(stats.total_revenue, 3_500_000);
    }

    #[test]
    fn test_dashboard_active_bookings() {
        let bookings = vec![
            booking(BookingStatus::Pending, PaymentStatus::Unpaid, 0),
            booking(BookingStatus::Confirmed, PaymentStatus::Paid, 0),
            booking(BookingStatus::Cancelled, PaymentStatus::Unpaid, 0),
            booking(BookingStatus::Completed, PaymentStatus::Paid, 0),
        ];

        let stats = dashboard_stats(&[], &bookings);
        assert_eq!(stats.active_bookings, 2);
    }

    #[test]
    fn test_occupancy_by_property_keeps_order() {
        let props = vec![
            property("p1", "A", "Bekasi", "X", &[false, true]),
            property("p2", "B", "Bekasi", "X", &[true]),
        ];

        let occ = occupancy_by_property(&props);
        assert_eq!(occ.len(), 2);
        assert_eq!(occ[0].property_id, "p1");
        assert_eq!(occ[0].occupied, 1);
        assert_eq!(occ[0].total, 2);
        assert_eq!(occ[1].occupied, 0);
        assert_eq!(occ[1].total, 1);
    }
}
