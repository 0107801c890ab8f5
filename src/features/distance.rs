use crate::dataset::{Column, Dataset};
use crate::error::DatasetError;

/// Mean Earth radius in kilometers (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance in kilometers between two (lat, lon) points,
/// both in degrees, on a spherical Earth.
///
/// NaN in any coordinate propagates to a NaN distance.
fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Add a `driver_distance` column: the great-circle distance in
/// kilometers between the driver position and the pickup point.
///
/// Requires the Float columns `driver_latitude`, `driver_longitude`,
/// `pickup_latitude` and `pickup_longitude`. Coordinates are not
/// validated; NaN coordinates yield a NaN distance for that row. Row
/// count and order are preserved.
pub fn driver_distance_to_pickup(df: &Dataset) -> Result<Dataset, DatasetError> {
    let driver_lat = df.float_column("driver_latitude")?;
    let driver_lon = df.float_column("driver_longitude")?;
    let pickup_lat = df.float_column("pickup_latitude")?;
    let pickup_lon = df.float_column("pickup_longitude")?;

    let distances: Vec<f64> = (0..df.n_rows())
        .map(|i| haversine_km(driver_lat[i], driver_lon[i], pickup_lat[i], pickup_lon[i]))
        .collect();

    let mut out = df.clone();
    out.insert_column("driver_distance", Column::Float(distances))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_known_pair() {
        // Jakarta city centre to Soekarno-Hatta airport, roughly 20 km.
        let d = haversine_km(-6.1754, 106.8272, -6.1256, 106.6559);
        assert!(d > 18.0 && d < 22.0, "distance = {}", d);
    }

    #[test]
    fn haversine_same_point_is_zero() {
        let d = haversine_km(-6.2, 106.8, -6.2, 106.8);
        assert!(d.abs() < 1e-9, "distance = {}", d);
    }

    #[test]
    fn haversine_nan_propagates() {
        let d = haversine_km(f64::NAN, 106.8, -6.2, 106.8);
        assert!(d.is_nan());
    }
}
