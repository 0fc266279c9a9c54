//! Line geometries through real Las Vegas locations.
//!
//! Coordinates sourced from OpenStreetMap. Lines follow the street grid
//! loosely; they are drawn the way a planner would sketch a new route.

use scenario_builder::traits::Coordinate;

/// A named vertex of a drawn line.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lng, self.lat)
    }
}

// ============================================================================
// Strip shuttle, MGM Grand north to Encore
// ============================================================================

pub const STRIP_SHUTTLE: &[Location] = &[
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Hard Rock Cafe", 36.1041592, -115.1722166),
    Location::new("P.F. Chang's", 36.1103352, -115.1723830),
    Location::new("Bellagio", 36.1126, -115.1767),
    Location::new("Caesars Palace", 36.1162, -115.1745),
    Location::new("Guy Fieri's Vegas Kitchen", 36.1184064, -115.1722088),
    Location::new("Public House", 36.1219193, -115.1689317),
    Location::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Location::new("Encore at Wynn", 36.1289345, -115.1653620),
];

// ============================================================================
// East crosstown, Strip to Longhorn Casino along Tropicana/Boulder
// ============================================================================

pub const EAST_CROSSTOWN: &[Location] = &[
    Location::new("MGM Grand", 36.1023654, -115.1688720),
    Location::new("Tropicana & Koval", 36.1009, -115.1580),
    Location::new("Tropicana & Eastern", 36.1004, -115.1195),
    Location::new("Boulder Hwy & Sahara", 36.1066, -115.0780),
    Location::new("Longhorn Casino", 36.1070664, -115.0591256),
];

pub fn coordinates(line: &[Location]) -> Vec<Coordinate> {
    line.iter().map(Location::coordinate).collect()
}

/// Sum of haversine segment lengths, in kilometers.
pub fn length_km(line: &[Coordinate]) -> f64 {
    use scenario_builder::haversine::Haversine;
    use scenario_builder::traits::DistanceProvider;

    let haversine = Haversine::default();
    line.windows(2)
        .map(|pair| haversine.distance_km(pair[0], pair[1]))
        .sum()
}
