//! Seed listings and facility catalog
//!
//! Mock data standing in for a listings backend so every tool starts from
//! the same browsable state. Domain data is in-memory only; nothing here is
//! persisted.

use crate::types::{Facility, GenderPolicy, Property, Room, RoomType};

/// The known facility ids with display names and icons
pub fn facility_catalog() -> Vec<Facility> {
    let entries = [
        ("wifi", "WiFi", "📶"),
        ("ac", "AC", "❄️"),
        ("bathroom_in", "K. Mandi Dalam", "🚿"),
        ("parking", "Parkir", "🅿️"),
        ("laundry", "Laundry", "🧺"),
        ("security", "Satpam 24h", "👮"),
        ("closet", "Kloset Duduk", "🚽"),
        ("bed", "Kasur", "🛏️"),
    ];
    entries
        .iter()
        .map(|(id, name, icon)| Facility {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}

fn standard_facilities() -> Vec<String> {
    ["wifi", "ac", "bathroom_in", "closet", "bed"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn single_room(id: &str, property_id: &str, room_number: &str, price: u64) -> Room {
    Room {
        id: id.to_string(),
        property_id: property_id.to_string(),
        room_number: room_number.to_string(),
        price,
        is_available: true,
        room_type: RoomType::Single,
        current_tenant_id: None,
    }
}

pub fn seed_properties() -> Vec<Property> {
    vec![
        Property {
            id: "p1".to_string(),
            owner_id: "admin1".to_string(),
            name: "Kost Sukamahi Deltamas Vvip".to_string(),
            address: "Jl. Sukamahi".to_string(),
            city: "Bekasi".to_string(),
            area: "Cikarang Pusat".to_string(),
            description: "Kost Vvip dengan fasilitas lengkap di Deltamas.".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?auto=format&fit=crop&q=80&w=800"
                    .to_string(),
            base_price: 1_700_000,
            facilities: standard_facilities(),
            rating: 4.8,
            rooms: vec![single_room("r1", "p1", "101", 1_700_000)],
            reviews: vec![],
            lat: -6.1847,
            lng: 106.8332,
            gender: GenderPolicy::Putri,
            rooms_left: 1,
            promo_text: Some("Promo Akhir Tahun".to_string()),
        },
        Property {
            id: "p2".to_string(),
            owner_id: "admin1".to_string(),
            name: "Kost GiiC Sudut Nyaman Vvip".to_string(),
            address: "Jl. GiiC No. 12".to_string(),
            city: "Bekasi".to_string(),
            area: "Cikarang Pusat".to_string(),
            description: "Hunian nyaman di kawasan industri GiiC.".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1598928506311-c55ded91a20c?auto=format&fit=crop&q=80&w=800"
                    .to_string(),
            base_price: 1_800_000,
            facilities: standard_facilities(),
            rating: 4.5,
            rooms: vec![single_room("r4", "p2", "A1", 1_800_000)],
            reviews: vec![],
            lat: -6.3725,
            lng: 106.8317,
            gender: GenderPolicy::Putri,
            rooms_left: 1,
            promo_text: Some("Promo Awal Tahun".to_string()),
        },
        Property {
            id: "p3".to_string(),
            owner_id: "admin2".to_string(),
            name: "Kost Kamarku Superior Kano".to_string(),
            address: "Gading Serpong".to_string(),
            city: "Tangerang".to_string(),
            area: "Kelapa Dua".to_string(),
            description: "Kost superior dengan desain modern.".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1554995207-c18c203602cb?auto=format&fit=crop&q=80&w=800"
                    .to_string(),
            base_price: 2_600_000,
            facilities: standard_facilities(),
            rating: 5.0,
            rooms: vec![single_room("r7", "p3", "B1", 2_600_000)],
            reviews: vec![],
            lat: -6.2345,
            lng: 106.6789,
            gender: GenderPolicy::Campur,
            rooms_left: 1,
            promo_text: Some("Promo Awal Tahun".to_string()),
        },
        Property {
            id: "p4".to_string(),
            owner_id: "admin3".to_string(),
            name: "Kost THE IMAJO Yogyakarta".to_string(),
            address: "Jl. Gejayan".to_string(),
            city: "Yogyakarta".to_string(),
            area: "Depok".to_string(),
            description: "Kost strategis di jantung kota Yogyakarta.".to_string(),
            image_url:
                "https://images.unsplash.com/photo-1626593371158-662241baf73a?auto=format&fit=crop&q=80&w=800"
                    .to_string(),
            base_price: 1_600_000,
            facilities: standard_facilities(),
            rating: 4.9,
            rooms: vec![single_room("r10", "p4", "C1", 1_600_000)],
            reviews: vec![],
            lat: -7.7956,
            lng: 110.3695,
            gender: GenderPolicy::Putri,
            rooms_left: 2,
            promo_text: Some("gratis 1 bulan".to_string()),
        },
    ]
}

pub fn seed_bookings() -> Vec<crate::types::Booking> {
    Vec::new()
}
