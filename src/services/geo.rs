//! Geographic calculations for provider distance and ETA

use crate::types::{Coordinates, TravelMode, TravelSummary};

/// Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average urban driving speed in km/h
const DRIVING_SPEED_KMH: f64 = 40.0;

/// Average walking speed in km/h
const WALKING_SPEED_KMH: f64 = 5.0;

/// Round half toward +∞, so -1.5 becomes -1 rather than -2
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Calculate Haversine distance between two points in kilometers (unrounded)
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = to_radians(to.lat - from.lat);
    let d_lon = to_radians(to.lng - from.lng);

    let lat1 = to_radians(from.lat);
    let lat2 = to_radians(to.lat);

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in km, rounded to one decimal place
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let distance = haversine_distance(&Coordinates::new(lat1, lon1), &Coordinates::new(lat2, lon2));
    round_half_up(distance * 10.0) / 10.0
}

fn speed_kmh(mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Driving => DRIVING_SPEED_KMH,
        TravelMode::Walking => WALKING_SPEED_KMH,
    }
}

/// Estimate travel time in whole minutes. Negative distances are not clamped.
pub fn estimate_travel_time(distance_km: f64, mode: TravelMode) -> i64 {
    round_half_up((distance_km / speed_kmh(mode)) * 60.0) as i64
}

/// "500m" below one kilometer, "2.3km" otherwise
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m", round_half_up(distance_km * 1000.0) as i64)
    } else {
        format!("{}km", distance_km)
    }
}

/// "~30 min", "~1 hour", "~2 hours" or "~1h 30m"
pub fn format_travel_time(minutes: i64) -> String {
    if minutes < 60 {
        return format!("~{} min", minutes);
    }

    let hours = minutes / 60;
    let mins = minutes % 60;

    if mins == 0 {
        let unit = if hours == 1 { "hour" } else { "hours" };
        format!("~{} {}", hours, unit)
    } else {
        format!("~{}h {}m", hours, mins)
    }
}

/// Distance and ETA from `from` to `to`, with display labels
pub fn travel_summary(from: &Coordinates, to: &Coordinates, mode: TravelMode) -> TravelSummary {
    let distance_km = calculate_distance(from.lat, from.lng, to.lat, to.lng);
    let minutes = estimate_travel_time(distance_km, mode);

    TravelSummary {
        distance_km,
        minutes,
        distance_label: format_distance(distance_km),
        time_label: format_travel_time(minutes),
        mode,
    }
}

/// Sort items nearest-first relative to `origin`. Stable for equal distances.
pub fn sort_by_distance<T, F>(origin: &Coordinates, items: &mut [T], location: F)
where
    F: Fn(&T) -> Coordinates,
{
    items.sort_by(|a, b| {
        let da = haversine_distance(origin, &location(a));
        let db = haversine_distance(origin, &location(b));
        da.total_cmp(&db)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ikeja() -> Coordinates {
        Coordinates { lat: 6.6018, lng: 3.3515 }
    }

    fn ogba() -> Coordinates {
        Coordinates { lat: 6.6128, lng: 3.3615 }
    }

    fn is_one_decimal(value: f64) -> bool {
        ((value * 10.0).round() - value * 10.0).abs() < 1e-9
    }

    #[test]
    fn test_haversine_lagos_abuja() {
        let lagos = Coordinates { lat: 6.5244, lng: 3.3792 };
        let abuja = Coordinates { lat: 9.0765, lng: 7.3986 };

        let distance = haversine_distance(&lagos, &abuja);

        // Lagos to Abuja is approximately 525 km in a straight line
        assert!((distance - 525.0).abs() < 10.0, "got {} km", distance);
    }

    #[test]
    fn test_calculate_distance_same_point() {
        assert_eq!(calculate_distance(6.6018, 3.3515, 6.6018, 3.3515), 0.0);
        assert_eq!(calculate_distance(-33.9, 151.2, -33.9, 151.2), 0.0);
    }

    #[test]
    fn test_calculate_distance_rounded_and_symmetric() {
        let forward = calculate_distance(6.6018, 3.3515, 6.6128, 3.3615);
        let back = calculate_distance(6.6128, 3.3615, 6.6018, 3.3515);

        assert!(forward > 0.0);
        assert!(is_one_decimal(forward));
        assert_eq!(forward, back);
        assert_eq!(forward, 1.6);
    }

    #[test]
    fn test_estimate_travel_time() {
        assert_eq!(estimate_travel_time(40.0, TravelMode::Driving), 60);
        assert_eq!(estimate_travel_time(5.0, TravelMode::Walking), 60);
        assert_eq!(estimate_travel_time(0.0, TravelMode::Driving), 0);
        assert_eq!(estimate_travel_time(10.0, TravelMode::default()), 15);
    }

    #[test]
    fn test_estimate_travel_time_negative_not_clamped() {
        assert_eq!(estimate_travel_time(-5.0, TravelMode::Walking), -60);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.5), "500m");
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(2.3), "2.3km");
        assert_eq!(format_distance(1.0), "1km");
        assert_eq!(format_distance(12.0), "12km");
    }

    #[test]
    fn test_negative_halves_round_toward_positive_infinity() {
        assert_eq!(estimate_travel_time(-1.0, TravelMode::Driving), -1);
        assert_eq!(estimate_travel_time(1.0, TravelMode::Driving), 2);
        assert_eq!(format_distance(-0.0005), "0m");
        assert_eq!(format_distance(0.0005), "1m");
    }

    #[test]
    fn test_format_travel_time() {
        assert_eq!(format_travel_time(30), "~30 min");
        assert_eq!(format_travel_time(60), "~1 hour");
        assert_eq!(format_travel_time(120), "~2 hours");
        assert_eq!(format_travel_time(90), "~1h 30m");
        assert_eq!(format_travel_time(0), "~0 min");
    }

    #[test]
    fn test_travel_summary() {
        let summary = travel_summary(&ikeja(), &ogba(), TravelMode::Walking);

        assert_eq!(summary.distance_km, 1.6);
        assert_eq!(summary.minutes, 19);
        assert_eq!(summary.distance_label, "1.6km");
        assert_eq!(summary.time_label, "~19 min");
        assert_eq!(summary.mode, TravelMode::Walking);
    }

    #[test]
    fn test_sort_by_distance() {
        let far = Coordinates { lat: 9.0765, lng: 7.3986 };
        let near = ogba();
        let mut providers = vec![("far", far), ("here", ikeja()), ("near", near)];

        sort_by_distance(&ikeja(), &mut providers, |(_, c)| *c);

        let order: Vec<_> = providers.iter().map(|(name, _)| *name).collect();
        assert_eq!(order, vec!["here", "near", "far"]);
    }
}
