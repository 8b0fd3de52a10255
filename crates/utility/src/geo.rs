/// Mean earth radius used by all great-circle calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn is_valid_latitude(latitude: f64) -> bool {
    (MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude)
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}

/// Great-circle distance in kilometers between two points given in degrees.
///
/// No range checks are done here. Any finite input yields a finite,
/// non-negative result, identical points yield `0.0`.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push `a` slightly outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
