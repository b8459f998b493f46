//! # Reference frames and topocentric geometry
//!
//! Frame machinery connecting the propagation output to a ground observer:
//!
//! - [`rotmt`] builds principal-axis rotation matrices (the only primitive needed here).
//! - [`teme_to_ecef`] rotates an inertial (true-equator, mean-equinox) vector into the
//!   Earth-fixed frame through the sidereal rotation angle.
//! - [`topocentric`] projects a satellite state onto an observer's local horizon, yielding
//!   azimuth, elevation and range as a [`TopocentricObservation`].
//!
//! ## Conventions
//!
//! - Azimuth is measured **clockwise from geodetic north**, in `[0, 2π)`.
//! - Elevation is positive above the local horizon, in `[-π/2, π/2]`.
//! - The sidereal angle fed to [`teme_to_ecef`] is a function of **UT1**; see
//!   [`crate::time::gmst`] and [`crate::time::ut1_mjd`] for the scale handling.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Kilometer, Radian, DPI, MJD};
use crate::observers::GeodeticLocation;
use crate::propagation::InertialState;
use crate::time::gmst;

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// The returned matrix represents an **active rotation** by `alpha` in the direct
/// (trigonometric) sense: the rotated vector is `x' = R · x` in a fixed frame.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `k` - Index of the axis of rotation:
///   * `0` → X-axis
///   * `1` → Y-axis
///   * `2` → Z-axis
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: f64, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotate an inertial position into the Earth-fixed frame.
///
/// The inertial frame shares the Earth-fixed z-axis; the two frames differ by the sidereal
/// rotation angle about it, so the transform is a single z-rotation by `-gast`.
///
/// Arguments
/// ---------
/// * `r_teme`: position vector in the true-equator, mean-equinox inertial frame [km]
/// * `gast`: Greenwich sidereal angle at the epoch of the vector [radians]
///
/// Return
/// ------
/// * The same position expressed on ECEF axes [km].
pub fn teme_to_ecef(r_teme: &Vector3<Kilometer>, gast: Radian) -> Vector3<Kilometer> {
    rotmt(-gast, 2) * r_teme
}

/// A satellite position expressed on an observer's local horizon.
///
/// Units
/// -----
/// * `azimuth`: radians, clockwise from north, in `[0, 2π)`.
/// * `elevation`: radians above the horizon, in `[-π/2, π/2]`.
/// * `range`: kilometers from the site to the satellite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopocentricObservation {
    pub azimuth: Radian,
    pub elevation: Radian,
    pub range: Kilometer,
}

/// Project an inertial satellite state onto an observer's local horizon.
///
/// The satellite position is rotated into the Earth-fixed frame with the sidereal angle
/// at `mjd_ut1`, differenced with the site's precomputed ECEF vector, then rotated into
/// the site's south/east/zenith axes. Azimuth follows the surveyor convention (clockwise
/// from north); an observation below the horizon simply carries a negative elevation.
///
/// `mjd_ut1` must be a **UT1** day count. Element-set epochs are UTC; feeding a UTC value
/// here shifts the sidereal rotation by the (sub-second) UT1-UTC offset, which maps to a
/// few hundred meters of ground track. Use [`crate::time::ut1_mjd`] when Earth-orientation
/// data is available, or accept the UTC approximation knowingly.
///
/// Arguments
/// ---------
/// * `state`: propagated satellite state (inertial frame)
/// * `site`: observing site with its precomputed Earth-fixed position
/// * `mjd_ut1`: epoch of the state as a Modified Julian Date, UT1 scale
///
/// Return
/// ------
/// * Azimuth, elevation and range of the satellite as seen from the site.
///
/// See also
/// --------
/// * [`crate::satellite::Satellite::observe`] – drives this from a session state.
pub fn topocentric(
    state: &InertialState,
    site: &GeodeticLocation,
    mjd_ut1: MJD,
) -> TopocentricObservation {
    let gast = gmst(mjd_ut1);

    // Satellite and site on the same Earth-fixed axes
    let sat_ecef = teme_to_ecef(&state.position, gast);
    let rho_ecef = sat_ecef - site.site_ecef();

    // Line of sight in the local south/east/zenith frame
    let lat = site.latitude.to_radians();
    let lon = site.longitude.to_radians();
    let rho_sez = rotmt(lat - std::f64::consts::FRAC_PI_2, 1) * (rotmt(-lon, 2) * rho_ecef);

    let range = rho_sez.norm();
    let elevation = (rho_sez.z / range).asin();
    let mut azimuth = rho_sez.y.atan2(-rho_sez.x);
    if azimuth < 0.0 {
        azimuth += DPI;
    }

    TopocentricObservation {
        azimuth,
        elevation,
        range,
    }
}
