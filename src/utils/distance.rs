// Distance calculation utilities

use crate::models::Location;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle (haversine) distance between two locations in kilometers
pub fn great_circle_distance(p1: &Location, p2: &Location) -> f64 {
    let rad_lat1 = p1.latitude.to_radians();
    let rad_lat2 = p2.latitude.to_radians();
    let a = rad_lat1 - rad_lat2;
    let b = p1.longitude.to_radians() - p2.longitude.to_radians();

    let central_angle = 2.0
        * ((a / 2.0).sin().powi(2) + rad_lat1.cos() * rad_lat2.cos() * (b / 2.0).sin().powi(2))
            .sqrt()
            .asin();

    (central_angle * EARTH_RADIUS_KM).abs()
}
