use hifitime::ut1::Ut1Provider;
use hifitime::Epoch;

use crate::constants::{Radian, DPI, JDTOMJD, MINUTES_PER_DAY, MJD, T2000};

/// A Julian date split into a coarse and a fine part to preserve precision.
///
/// `day` carries the half-integer day boundary (a value ending in `.5`, the start of the
/// astronomical day), `frac` the elapsed fraction of that day. Keeping the two parts separate
/// retains sub-microsecond resolution over epochs where a single `f64` Julian date would not.
///
/// Units:
/// * `day`: Julian days
/// * `frac`: fraction of a day, in `[0, 1)` for dates built by this crate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    pub day: f64,
    pub frac: f64,
}

impl JulianDate {
    /// Build a split Julian date from a calendar year and a (fractional) day of year.
    ///
    /// The integer day of year starts at 1 for January 1st. The fractional part is carried
    /// into `frac` untouched, so a fraction obtained by parsing a digit string survives
    /// bit-for-bit.
    ///
    /// Arguments
    /// ---------
    /// * `year`: full calendar year (e.g. 2021)
    /// * `day_of_year`: day number within the year, January 1st = 1
    /// * `day_fraction`: elapsed fraction of that day, in `[0, 1)`
    ///
    /// Return
    /// ------
    /// * The split Julian date of `year`/`day_of_year` at `day_fraction` of the day.
    pub fn from_year_day(year: i32, day_of_year: u32, day_fraction: f64) -> JulianDate {
        let y = year as i64;
        // JD at 0h on January 1st of `year`, valid for the Gregorian calendar
        let jd_jan1 = (367 * y - (7 * y) / 4 + 1721044) as f64 + 0.5;
        JulianDate {
            day: jd_jan1 + (day_of_year as f64 - 1.0),
            frac: day_fraction,
        }
    }

    /// Sum of both parts as a single `f64` Julian date.
    pub fn total(&self) -> f64 {
        self.day + self.frac
    }

    /// Convert to a Modified Julian Date.
    ///
    /// The coarse part is rebased first so the subtraction of `JDTOMJD` stays exact for
    /// half-integer days.
    pub fn to_mjd(&self) -> MJD {
        (self.day - JDTOMJD) + self.frac
    }

    /// Offset this date by a number of minutes, carrying whole days out of the fraction.
    ///
    /// Negative offsets are allowed; the returned `frac` is always in `[0, 1)` and `day`
    /// keeps its half-integer form.
    pub fn plus_minutes(&self, minutes: f64) -> JulianDate {
        let frac = self.frac + minutes / MINUTES_PER_DAY;
        let carry = frac.floor();
        JulianDate {
            day: self.day + carry,
            frac: frac - carry,
        }
    }
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT1 time scale).
///
/// This function implements the IAU 1982 polynomial formula
/// for the mean sidereal time at 0h UT1, plus the fractional-day
/// correction term due to Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. Use a cubic polynomial (coefficients C0–C3) to get GMST at 0h UT1
///    in seconds for the given date.
/// 2. Add the contribution of Earth's rotation during the fractional day
///    using the factor `RAP`, which converts solar days to sidereal days.
///
/// # References
/// * IAU 1982, IERS Conventions 1996/2000.
/// * Explanatory Supplement to the Astronomical Almanac (1992).
pub fn gmst(tjm: MJD) -> Radian {
    // Polynomial coefficients for GMST at 0h UT1 (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    // Extract the integer MJD (0h UT1) and compute centuries since J2000.0
    let itjm = tjm.floor();
    let t = (itjm - T2000) / 36525.0;

    // GMST at 0h UT1 from the polynomial, converted from seconds to radians
    let mut gmst0 = ((C3 * t + C2) * t + C1) * t + C0;
    gmst0 *= DPI / 86400.0;

    // Contribution of the elapsed fraction of the day, scaled to the sidereal rate
    let h = tjm.fract() * DPI;
    let gmst = gmst0 + h * RAP;

    // Normalize to [0, 2π)
    gmst - (gmst / DPI).floor() * DPI
}

/// Express a `hifitime` epoch as a Modified Julian Date in the UT1 time scale.
///
/// This is the conversion expected by [`gmst`] and by the topocentric projection: the
/// sidereal rotation angle is a function of UT1, and feeding it a UTC day count biases the
/// rotation by up to ±0.9 s of Earth rotation (about 400 m of ground track for a LEO pass).
///
/// Arguments
/// ---------
/// * `epoch`: the epoch to convert, in any of hifitime's time scales
/// * `ut1_provider`: Earth-orientation data source (e.g. `Ut1Provider::download_from_jpl`)
///
/// Return
/// ------
/// * The epoch expressed as MJD (UT1).
///
/// See also
/// --------
/// * [`gmst`] – consumer of the returned day count.
pub fn ut1_mjd(epoch: &Epoch, ut1_provider: &Ut1Provider) -> MJD {
    let epoch_ut1 = epoch.to_ut1(ut1_provider.to_owned());
    epoch_ut1.to_mjd_tai_days()
}
