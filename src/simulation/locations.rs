//! Fixed set of monitoring locations.

/// A point of presence used for simulated latency samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitoringLocation {
    pub city: &'static str,
    pub country: &'static str,
    /// Two-letter continent code (NA, SA, EU, AS, OC)
    pub region: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn location(
    city: &'static str,
    country: &'static str,
    region: &'static str,
    latitude: f64,
    longitude: f64,
) -> MonitoringLocation {
    MonitoringLocation {
        city,
        country,
        region,
        latitude,
        longitude,
    }
}

pub static MONITORING_LOCATIONS: &[MonitoringLocation] = &[
    // Americas
    location("Dulles, VA", "United States", "NA", 38.9445, -77.4558),
    location("São Paulo", "Brazil", "SA", -23.5505, -46.6333),
    location("Toronto", "Canada", "NA", 43.6532, -79.3832),
    location("Los Angeles", "United States", "NA", 34.0522, -118.2437),
    location("Miami", "United States", "NA", 25.7617, -80.1918),
    // Europe
    location("London", "United Kingdom", "EU", 51.5074, -0.1278),
    location("Frankfurt", "Germany", "EU", 50.1109, 8.6821),
    location("Paris", "France", "EU", 48.8566, 2.3522),
    location("Amsterdam", "Netherlands", "EU", 52.3676, 4.9041),
    location("Stockholm", "Sweden", "EU", 59.3293, 18.0686),
    // Asia-Pacific
    location("Tokyo", "Japan", "AS", 35.6762, 139.6503),
    location("Sydney", "Australia", "OC", -33.8688, 151.2093),
    location("Singapore", "Singapore", "AS", 1.3521, 103.8198),
    location("Mumbai", "India", "AS", 19.0760, 72.8777),
    location("Hong Kong", "China", "AS", 22.3193, 114.1694),
    location("Seoul", "South Korea", "AS", 37.5665, 126.9780),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_locations() {
        assert_eq!(MONITORING_LOCATIONS.len(), 16);
    }

    #[test]
    fn test_coordinates_in_range() {
        for loc in MONITORING_LOCATIONS {
            assert!((-90.0..=90.0).contains(&loc.latitude), "{}", loc.city);
            assert!((-180.0..=180.0).contains(&loc.longitude), "{}", loc.city);
        }
    }

    #[test]
    fn test_cities_unique() {
        let mut cities: Vec<&str> = MONITORING_LOCATIONS.iter().map(|l| l.city).collect();
        cities.sort_unstable();
        cities.dedup();
        assert_eq!(cities.len(), MONITORING_LOCATIONS.len());
    }
}
