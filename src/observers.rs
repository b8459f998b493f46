//! # Observing sites
//!
//! Ground-station geometry for topocentric work. The central type is
//! [`GeodeticLocation`], which stores a site's geodetic coordinates and a **precomputed
//! Earth-fixed** position vector on the WGS84 reference ellipsoid. The ellipsoid is
//! oblate: the body-fixed vector accounts for flattening via the prime-vertical radius
//! of curvature, so a site at ±45° latitude is measurably closer to the Earth's center
//! than a spherical model would place it.
//!
//! ## Units
//!
//! - Latitude, longitude: **degrees** (longitude east positive).
//! - Height: **meters** above the reference ellipsoid.
//! - Body-fixed position: **kilometers**, ECEF axes (x through the Greenwich meridian,
//!   z through the north pole).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use overpass::observers::GeodeticLocation;
//!
//! let site = GeodeticLocation::new(-104.883, 39.007, 2187.0, None)?;
//! println!("site at {:.3} km from Earth center", site.site_ecef().norm());
//! # Ok::<(), overpass::overpass_errors::OverpassError>(())
//! ```
//!
//! Out-of-range coordinates are rejected at construction with
//! [`GeodeticRangeError`], so a built [`GeodeticLocation`] is always usable.

use nalgebra::Vector3;
use thiserror::Error;

use crate::constants::{Degree, Kilometer, Meter, EARTH_FLATTENING, EARTH_MAJOR_AXIS_KM};
use crate::overpass_errors::OverpassError;

/// Geodetic coordinates outside their physical or supported range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeodeticRangeError {
    #[error("latitude {0} degrees outside [-90, 90]")]
    Latitude(Degree),
    #[error("longitude {0} degrees outside [-180, 360]")]
    Longitude(Degree),
    #[error("height {0} meters outside the supported range (above -1000 m)")]
    Height(Meter),
}

/// A ground site on the WGS84 ellipsoid with its precomputed Earth-fixed position.
///
/// Units
/// -----
/// * `latitude`, `longitude`: degrees (east positive).
/// * `height`: meters above the ellipsoid.
/// * body-fixed position (via [`GeodeticLocation::site_ecef`]): kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct GeodeticLocation {
    /// Optional human-readable site name.
    pub name: Option<String>,

    /// Geodetic longitude in **degrees** east of Greenwich.
    pub longitude: Degree,

    /// Geodetic latitude in **degrees**.
    pub latitude: Degree,

    /// Height above the reference ellipsoid in **meters**.
    pub height: Meter,

    /// Precomputed ECEF position of the site in **kilometers**.
    body_fixed: Vector3<Kilometer>,
}

impl GeodeticLocation {
    /// Create a site from geodetic coordinates.
    ///
    /// The Earth-fixed position is computed once here, on the oblate WGS84 ellipsoid:
    /// with `e² = f(2−f)` and `C = a / √(1 − e²·sin²φ)` the site sits at
    ///
    /// ```text
    /// x = (C + h)·cosφ·cosλ
    /// y = (C + h)·cosφ·sinλ
    /// z = (C(1−e²) + h)·sinφ
    /// ```
    ///
    /// Arguments
    /// -----------------
    /// * `longitude`: Geodetic longitude in **degrees** (east positive), in [-180°, 360°].
    /// * `latitude`: Geodetic latitude in **degrees**, in [-90°, 90°].
    /// * `height`: Height above the ellipsoid in **meters**, above -1000 m.
    /// * `name`: Optional site name.
    ///
    /// Return
    /// ----------
    /// * A [`GeodeticLocation`] with its body-fixed vector ready for topocentric use.
    ///
    /// Errors
    /// ----------
    /// * [`OverpassError::GeodeticRange`] when a coordinate is out of range (NaN included).
    pub fn new(
        longitude: Degree,
        latitude: Degree,
        height: Meter,
        name: Option<String>,
    ) -> Result<GeodeticLocation, OverpassError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeodeticRangeError::Latitude(latitude).into());
        }
        if !(-180.0..=360.0).contains(&longitude) {
            return Err(GeodeticRangeError::Longitude(longitude).into());
        }
        // written with contains/negation so NaN falls into the error arm
        if !(height > -1000.0) {
            return Err(GeodeticRangeError::Height(height).into());
        }

        let lat_rad = latitude.to_radians();
        let lon_rad = longitude.to_radians();
        let sin_lat = lat_rad.sin();
        let cos_lat = lat_rad.cos();

        // Prime-vertical radius of curvature on the oblate ellipsoid.
        let e2 = EARTH_FLATTENING * (2.0 - EARTH_FLATTENING);
        let c = EARTH_MAJOR_AXIS_KM / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let s = c * (1.0 - e2);
        let height_km = height * 1e-3;

        let body_fixed = Vector3::new(
            (c + height_km) * cos_lat * lon_rad.cos(),
            (c + height_km) * cos_lat * lon_rad.sin(),
            (s + height_km) * sin_lat,
        );

        Ok(GeodeticLocation {
            name,
            longitude,
            latitude,
            height,
            body_fixed,
        })
    }

    /// Earth-fixed Cartesian position of the site, in **kilometers**.
    pub fn site_ecef(&self) -> &Vector3<Kilometer> {
        &self.body_fixed
    }
}

#[cfg(test)]
mod observers_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_site_ecef_reference() {
        let site = GeodeticLocation::new(-104.883, 39.007, 2187.0, None).unwrap();
        let r = site.site_ecef();

        assert_relative_eq!(r.x, -1275.1219100, epsilon = 1e-6);
        assert_relative_eq!(r.y, -4797.9890269, epsilon = 1e-6);
        assert_relative_eq!(r.z, 3994.2974512, epsilon = 1e-6);
    }

    #[test]
    fn test_site_ecef_equator() {
        let site = GeodeticLocation::new(0.0, 0.0, 0.0, None).unwrap();
        let r = site.site_ecef();

        assert_eq!(r.x, EARTH_MAJOR_AXIS_KM);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.z, 0.0);
    }

    #[test]
    fn test_site_ecef_oblateness() {
        // at 45° the oblate radius is shorter than the equatorial one
        let site = GeodeticLocation::new(0.0, 45.0, 0.0, None).unwrap();
        let r = site.site_ecef().norm();
        assert!(r < EARTH_MAJOR_AXIS_KM);
        assert!(r > EARTH_MAJOR_AXIS_KM * (1.0 - EARTH_FLATTENING));
    }

    #[test]
    fn test_site_ecef_continuity() {
        let site = GeodeticLocation::new(-104.883, 39.007, 2187.0, None).unwrap();
        let nudged = GeodeticLocation::new(-104.883, 39.007 + 1e-6, 2187.0, None).unwrap();
        // one microdegree of latitude is about 0.11 m on the ground
        assert!((site.site_ecef() - nudged.site_ecef()).norm() < 1e-3);

        let again = GeodeticLocation::new(-104.883, 39.007, 2187.0, None).unwrap();
        assert_eq!(site.site_ecef(), again.site_ecef());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = GeodeticLocation::new(0.0, 90.0001, 0.0, None).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::GeodeticRange(GeodeticRangeError::Latitude(_))
        ));

        let err = GeodeticLocation::new(420.0, 0.0, 0.0, None).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::GeodeticRange(GeodeticRangeError::Longitude(_))
        ));

        let err = GeodeticLocation::new(0.0, 0.0, -1200.0, None).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::GeodeticRange(GeodeticRangeError::Height(_))
        ));

        assert!(GeodeticLocation::new(0.0, f64::NAN, 0.0, None).is_err());

        // poles and the date line stay valid
        assert!(GeodeticLocation::new(359.9, -90.0, 0.0, None).is_ok());
    }
}
