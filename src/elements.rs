//! # Element-set parsing and normalization
//!
//! This module turns the two catalog representations of mean orbital elements into one
//! normalized, dimensionally consistent structure:
//!
//! - [`OrbitalElementSet::from_text`] parses the fixed-column two-line element (TLE) format,
//!   checksums included.
//! - [`OrbitalElementSet::from_record`] accepts the same logical fields pre-parsed (an
//!   [`OmmRecord`], the shape structured catalogs distribute).
//!
//! Both paths converge on the same normalization code, so equivalent inputs yield
//! **bit-for-bit identical** element sets. Angles are stored in radians, mean motion in
//! radians/minute, the epoch as a split Julian date. [`OrbitalElementSet::to_tle`] renders a
//! set back into catalog text, reproducing the original lines byte-for-byte.
//!
//! Parser failures are wrapped into [`OverpassError::Parsing`](crate::overpass_errors::OverpassError::Parsing)
//! with a [`TleParseError`] payload for precise diagnostics (line number, offending field
//! text); physically invalid values surface as [`ValidationError`].

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{Degree, Radian, MINUTES_PER_DAY, XPDOTP};
use crate::overpass_errors::OverpassError;
use crate::time::JulianDate;

/// Line-level parsing errors for two-line element text.
///
/// Variants
/// -----------------
/// * `InvalidLine` – The line is shorter than 69 characters or contains non-ASCII bytes.
/// * `InvalidLineNumber` – The line does not start with the expected `1 ` / `2 ` tag.
/// * `ChecksumMismatch` – The mod-10 checksum digit does not match the line content.
/// * `InvalidField` – A field failed to parse; payload carries the offending slice.
/// * `ObjectNumberMismatch` – The two lines do not describe the same object.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TleParseError {
    #[error("line {line} must be at least 69 ASCII characters")]
    InvalidLine { line: u8 },
    #[error("line {line} must start with '{expected} '")]
    InvalidLineNumber { line: u8, expected: char },
    #[error("checksum mismatch on line {line}: computed {computed}, found {found:?}")]
    ChecksumMismatch { line: u8, computed: u8, found: char },
    #[error("cannot read {field} from {value:?}")]
    InvalidField { field: &'static str, value: String },
    #[error("object number differs between lines: {line1} and {line2}")]
    ObjectNumberMismatch { line1: u64, line2: u64 },
}

/// Physically invalid element values, rejected by both input paths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("eccentricity {0} outside [0, 1)")]
    Eccentricity(f64),
    #[error("inclination {0} degrees outside [0, 180]")]
    Inclination(Degree),
}

/// A structured orbital-elements record, the pre-parsed twin of the two-line text format.
///
/// This is the interface to catalogs that distribute elements in tabular or JSON form
/// (orbit mean-elements messages). All fields keep their native catalog units; the
/// normalization to radians and radians/minute happens in
/// [`OrbitalElementSet::from_record`].
///
/// Units:
/// * `epoch_jd`: Julian days, the half-integer day boundary (…​.5)
/// * `epoch_fraction`: fraction of that day, `[0, 1)`
/// * `mean_motion_dot`: revolutions/day²
/// * `mean_motion_ddot`: revolutions/day³
/// * `drag_term`: B*, 1/Earth-radii
/// * `inclination`, `right_ascension`, `argument_of_perigee`, `mean_anomaly`: degrees
/// * `mean_motion`: revolutions/day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmmRecord {
    pub object_number: u64,
    pub classification: char,
    pub international_designator: String,
    pub epoch_jd: f64,
    pub epoch_fraction: f64,
    pub mean_motion_dot: f64,
    pub mean_motion_ddot: f64,
    pub drag_term: f64,
    pub inclination: Degree,
    pub right_ascension: Degree,
    pub eccentricity: f64,
    pub argument_of_perigee: Degree,
    pub mean_anomaly: Degree,
    pub mean_motion: f64,
    pub ephemeris_type: u8,
    pub element_number: u64,
    pub revolution_number: u64,
}

/// Normalized mean orbital elements, immutable once built.
///
/// Produced by [`OrbitalElementSet::from_text`] or [`OrbitalElementSet::from_record`]; a new
/// propagation target requires a new element set, not a mutation.
///
/// Units:
/// * `epoch`: split Julian date (UTC)
/// * `mean_motion_dot`: radians/minute²
/// * `mean_motion_ddot`: radians/minute³
/// * `drag_term`: B*, 1/Earth-radii
/// * `inclination`, `right_ascension`, `argument_of_perigee`, `mean_anomaly`: radians
/// * `mean_motion`: radians/minute (Kozai convention, as published)
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElementSet {
    pub object_number: u64,
    pub classification: char,
    pub international_designator: String,
    pub epoch: JulianDate,
    pub mean_motion_dot: f64,
    pub mean_motion_ddot: f64,
    pub drag_term: f64,
    pub inclination: Radian,
    pub right_ascension: Radian,
    pub eccentricity: f64,
    pub argument_of_perigee: Radian,
    pub mean_anomaly: Radian,
    pub mean_motion: f64,
    pub ephemeris_type: u8,
    pub element_number: u64,
    pub revolution_number: u64,
}

/// Mod-10 checksum of the first 68 characters of a TLE line.
///
/// Digits count their value, `-` counts one, everything else counts zero.
pub fn tle_checksum(line: &str) -> u8 {
    let sum: u32 = line
        .bytes()
        .take(68)
        .map(|b| match b {
            b'0'..=b'9' => (b - b'0') as u32,
            b'-' => 1,
            _ => 0,
        })
        .sum();
    (sum % 10) as u8
}

/// Parse one fixed-width field, trimmed, into any `FromStr` type.
fn field<T: std::str::FromStr>(
    line: &str,
    range: Range<usize>,
    name: &'static str,
) -> Result<T, TleParseError> {
    let raw = line[range].trim();
    raw.parse().map_err(|_| TleParseError::InvalidField {
        field: name,
        value: raw.to_string(),
    })
}

/// Decode a compressed-exponent field (`±NNNNN±E` → `±0.NNNNN × 10^±E`).
///
/// The decimal point before the mantissa is implied, so `" 42487-4"` decodes to `0.42487e-4`.
/// A blank field decodes to zero. The decoded value is the correctly rounded double of the
/// decimal the field denotes, which keeps the text path bit-identical to a record carrying
/// the same decimal.
fn decode_exp_field(raw: &str, name: &'static str) -> Result<f64, TleParseError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0.0);
    }
    let invalid = || TleParseError::InvalidField {
        field: name,
        value: raw.to_string(),
    };
    if s.len() < 3 {
        return Err(invalid());
    }
    let (mantissa_part, exponent_part) = s.split_at(s.len() - 2);
    let negative = mantissa_part.starts_with('-');
    let digits = mantissa_part.trim_start_matches(['+', '-']);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}0.{digits}e{exponent_part}")
        .parse()
        .map_err(|_| invalid())
}

/// Encode a value into the compressed-exponent field, inverse of [`decode_exp_field`].
fn encode_exp_field(v: f64, name: &'static str) -> Result<String, OverpassError> {
    if v == 0.0 {
        return Ok(" 00000-0".to_string());
    }
    let sign = if v < 0.0 { '-' } else { ' ' };
    let magnitude = v.abs();
    let mut exponent = magnitude.log10().floor() as i32 + 1;
    let mut mantissa = (magnitude / 10f64.powi(exponent) * 1e5).round() as i64;
    if mantissa == 100_000 {
        mantissa = 10_000;
        exponent += 1;
    }
    if exponent.abs() > 9 || mantissa > 99_999 {
        return Err(OverpassError::UnrenderableField { field: name });
    }
    let exp_sign = if exponent <= 0 { '-' } else { '+' };
    Ok(format!("{sign}{mantissa:05}{exp_sign}{}", exponent.abs()))
}

/// Reject lines that are too short, non-ASCII, mistagged or corrupted.
fn check_line(line: &str, line_no: u8, expected: char) -> Result<(), TleParseError> {
    if line.len() < 69 || !line.is_ascii() {
        return Err(TleParseError::InvalidLine { line: line_no });
    }
    if !line.starts_with(expected) || line.as_bytes()[1] != b' ' {
        return Err(TleParseError::InvalidLineNumber {
            line: line_no,
            expected,
        });
    }
    let computed = tle_checksum(line);
    let found = line.as_bytes()[68] as char;
    if found.to_digit(10) != Some(computed as u32) {
        return Err(TleParseError::ChecksumMismatch {
            line: line_no,
            computed,
            found,
        });
    }
    Ok(())
}

impl OrbitalElementSet {
    /// Parse and normalize a two-line element set.
    ///
    /// Field positions and the checksum algorithm follow the standard fixed-column layout.
    /// The epoch is read as (two-digit year, day of year, fractional day) and converted to a
    /// split Julian date; angular fields are converted from degrees to radians, the mean
    /// motion and its derivatives from revolutions/day to radians/minute; the
    /// compressed-exponent drag fields are decoded into plain floats.
    ///
    /// Arguments
    /// ---------
    /// * `line1`: first TLE line (`1 …`), at least 69 characters
    /// * `line2`: second TLE line (`2 …`), at least 69 characters
    ///
    /// Return
    /// ------
    /// * The normalized element set.
    ///
    /// Errors
    /// ------
    /// * [`OverpassError::Parsing`] when line length, tag, checksum or a field is invalid.
    /// * [`OverpassError::Validation`] when eccentricity or inclination is out of range.
    pub fn from_text(line1: &str, line2: &str) -> Result<OrbitalElementSet, OverpassError> {
        check_line(line1, 1, '1')?;
        check_line(line2, 2, '2')?;

        let object_number: u64 = field(line1, 2..7, "object number")?;
        let object_number_2: u64 = field(line2, 2..7, "object number")?;
        if object_number != object_number_2 {
            return Err(TleParseError::ObjectNumberMismatch {
                line1: object_number,
                line2: object_number_2,
            }
            .into());
        }

        let classification = line1.as_bytes()[7] as char;
        let international_designator = line1[9..17].trim().to_string();

        let epoch_year: i32 = field(line1, 18..20, "epoch year")?;
        let epoch_day: u32 = field(line1, 20..23, "epoch day")?;
        // The fractional day keeps its own digit string so the parsed double matches a
        // record carrying the same decimal bit-for-bit.
        let epoch_fraction: f64 = field(line1, 23..32, "epoch fraction")?;
        let year = if epoch_year < 57 {
            2000 + epoch_year
        } else {
            1900 + epoch_year
        };
        let epoch = JulianDate::from_year_day(year, epoch_day, epoch_fraction);

        let mean_motion_dot: f64 = field(line1, 33..43, "mean motion derivative")?;
        let mean_motion_ddot = decode_exp_field(&line1[44..52], "mean motion second derivative")?;
        let drag_term = decode_exp_field(&line1[53..61], "drag term")?;
        let ephemeris_type = if line1[62..63].trim().is_empty() {
            0
        } else {
            field(line1, 62..63, "ephemeris type")?
        };
        let element_number: u64 = field(line1, 64..68, "element number")?;

        let inclination: Degree = field(line2, 8..16, "inclination")?;
        let right_ascension: Degree = field(line2, 17..25, "right ascension")?;
        // implied leading "0."
        let ecc_raw = line2[26..33].trim();
        if ecc_raw.is_empty() || !ecc_raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TleParseError::InvalidField {
                field: "eccentricity",
                value: ecc_raw.to_string(),
            }
            .into());
        }
        let eccentricity: f64 = format!("0.{ecc_raw}")
            .parse()
            .map_err(|_| TleParseError::InvalidField {
                field: "eccentricity",
                value: ecc_raw.to_string(),
            })?;
        let argument_of_perigee: Degree = field(line2, 34..42, "argument of perigee")?;
        let mean_anomaly: Degree = field(line2, 42..51, "mean anomaly")?;
        let mean_motion: f64 = field(line2, 52..63, "mean motion")?;
        let revolution_number: u64 = field(line2, 63..68, "revolution number")?;

        OrbitalElementSet::from_record(&OmmRecord {
            object_number,
            classification,
            international_designator,
            epoch_jd: epoch.day,
            epoch_fraction: epoch.frac,
            mean_motion_dot,
            mean_motion_ddot,
            drag_term,
            inclination,
            right_ascension,
            eccentricity,
            argument_of_perigee,
            mean_anomaly,
            mean_motion,
            ephemeris_type,
            element_number,
            revolution_number,
        })
    }

    /// Normalize a pre-parsed elements record.
    ///
    /// Applies the exact unit conversions of [`OrbitalElementSet::from_text`] without any
    /// text handling; equivalent text and record inputs therefore produce bit-for-bit
    /// identical element sets.
    ///
    /// Errors
    /// ------
    /// * [`OverpassError::Validation`] when eccentricity ∉ [0, 1) or inclination ∉ [0°, 180°].
    pub fn from_record(record: &OmmRecord) -> Result<OrbitalElementSet, OverpassError> {
        if !(0.0..1.0).contains(&record.eccentricity) {
            return Err(ValidationError::Eccentricity(record.eccentricity).into());
        }
        if !(0.0..=180.0).contains(&record.inclination) {
            return Err(ValidationError::Inclination(record.inclination).into());
        }

        Ok(OrbitalElementSet {
            object_number: record.object_number,
            classification: record.classification,
            international_designator: record.international_designator.clone(),
            epoch: JulianDate {
                day: record.epoch_jd,
                frac: record.epoch_fraction,
            },
            mean_motion_dot: record.mean_motion_dot / (XPDOTP * MINUTES_PER_DAY),
            mean_motion_ddot: record.mean_motion_ddot
                / (XPDOTP * MINUTES_PER_DAY * MINUTES_PER_DAY),
            drag_term: record.drag_term,
            inclination: record.inclination.to_radians(),
            right_ascension: record.right_ascension.to_radians(),
            eccentricity: record.eccentricity,
            argument_of_perigee: record.argument_of_perigee.to_radians(),
            mean_anomaly: record.mean_anomaly.to_radians(),
            mean_motion: record.mean_motion / XPDOTP,
            ephemeris_type: record.ephemeris_type,
            element_number: record.element_number,
            revolution_number: record.revolution_number,
        })
    }

    /// Render the element set back into two-line element text.
    ///
    /// The output reproduces the fixed-column catalog format exactly, checksum digits
    /// recomputed, so `from_text` followed by `to_tle` round-trips the input lines
    /// byte-for-byte.
    ///
    /// Errors
    /// ------
    /// * [`OverpassError::UnrenderableField`] when a value does not fit its fixed-width
    ///   column (object number above 99999, epoch year outside 1957–2056, …​); no value is
    ///   ever truncated silently.
    pub fn to_tle(&self) -> Result<(String, String), OverpassError> {
        if self.object_number > 99_999 {
            return Err(OverpassError::UnrenderableField {
                field: "object number",
            });
        }
        if self.element_number > 9_999 {
            return Err(OverpassError::UnrenderableField {
                field: "element number",
            });
        }
        if self.revolution_number > 99_999 {
            return Err(OverpassError::UnrenderableField {
                field: "revolution number",
            });
        }
        if self.ephemeris_type > 9 {
            return Err(OverpassError::UnrenderableField {
                field: "ephemeris type",
            });
        }
        if self.international_designator.len() > 8 || !self.international_designator.is_ascii() {
            return Err(OverpassError::UnrenderableField {
                field: "international designator",
            });
        }

        // Back out calendar year and day of year from the split epoch.
        let mut year = ((self.epoch.day - 1721045.0) / 365.25).floor() as i32;
        while JulianDate::from_year_day(year + 1, 1, 0.0).day <= self.epoch.day {
            year += 1;
        }
        while JulianDate::from_year_day(year, 1, 0.0).day > self.epoch.day {
            year -= 1;
        }
        if !(1957..=2056).contains(&year) {
            return Err(OverpassError::UnrenderableField { field: "epoch year" });
        }
        let day_of_year = self.epoch.day - JulianDate::from_year_day(year, 1, 0.0).day + 1.0;
        let epoch_field = format!("{:02}{:012.8}", year % 100, day_of_year + self.epoch.frac);

        let ndot = self.mean_motion_dot * (XPDOTP * MINUTES_PER_DAY);
        if ndot.abs() >= 1.0 {
            return Err(OverpassError::UnrenderableField {
                field: "mean motion derivative",
            });
        }
        let ndot_str = format!("{:.8}", ndot.abs());
        let ndot_field = format!(
            "{}{}",
            if ndot.is_sign_negative() { '-' } else { ' ' },
            &ndot_str[1..]
        );
        let nddot = self.mean_motion_ddot * (XPDOTP * MINUTES_PER_DAY * MINUTES_PER_DAY);
        let nddot_field = encode_exp_field(nddot, "mean motion second derivative")?;
        let bstar_field = encode_exp_field(self.drag_term, "drag term")?;

        let body1 = format!(
            "1 {:05}{} {:<8} {} {} {} {} {} {:4}",
            self.object_number,
            self.classification,
            self.international_designator,
            epoch_field,
            ndot_field,
            nddot_field,
            bstar_field,
            self.ephemeris_type,
            self.element_number
        );
        let line1 = format!("{body1}{}", tle_checksum(&body1));

        let mean_motion = self.mean_motion * XPDOTP;
        if !(0.0..100.0).contains(&mean_motion) {
            return Err(OverpassError::UnrenderableField {
                field: "mean motion",
            });
        }
        let ecc_str = format!("{:.7}", self.eccentricity);
        let body2 = format!(
            "2 {:05} {:8.4} {:8.4} {} {:8.4} {:8.4} {:11.8}{:5}",
            self.object_number,
            self.inclination.to_degrees(),
            self.right_ascension.to_degrees(),
            &ecc_str[2..],
            self.argument_of_perigee.to_degrees(),
            self.mean_anomaly.to_degrees(),
            mean_motion,
            self.revolution_number
        );
        let line2 = format!("{body2}{}", tle_checksum(&body2));

        Ok((line1, line2))
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;
    use approx::assert_relative_eq;

    const ISS_L1: &str = "1 25544U 98067A   21201.46980141  .00001879  00000-0  42487-4 0  9993";
    const ISS_L2: &str = "2 25544  51.6426 178.1369 0001717 174.7410 330.7918 15.48826828293750";

    fn iss_record() -> OmmRecord {
        OmmRecord {
            object_number: 25544,
            classification: 'U',
            international_designator: "98067A".to_string(),
            epoch_jd: 2459415.5,
            epoch_fraction: 0.46980141,
            mean_motion_dot: 0.00001879,
            mean_motion_ddot: 0.0,
            drag_term: 4.2487e-5,
            inclination: 51.6426,
            right_ascension: 178.1369,
            eccentricity: 0.0001717,
            argument_of_perigee: 174.7410,
            mean_anomaly: 330.7918,
            mean_motion: 15.48826828,
            ephemeris_type: 0,
            element_number: 999,
            revolution_number: 29375,
        }
    }

    #[test]
    fn test_checksum() {
        assert_eq!(tle_checksum(ISS_L1), 3);
        assert_eq!(tle_checksum(ISS_L2), 0);
    }

    #[test]
    fn test_from_text_iss() {
        let set = OrbitalElementSet::from_text(ISS_L1, ISS_L2).unwrap();

        assert_eq!(set.object_number, 25544);
        assert_eq!(set.classification, 'U');
        assert_eq!(set.international_designator, "98067A");
        assert_eq!(set.epoch.day, 2459415.5);
        assert_eq!(set.epoch.frac, 0.46980141);
        assert_eq!(set.drag_term, 4.2487e-5);
        assert_eq!(set.mean_motion_ddot, 0.0);
        assert_eq!(set.ephemeris_type, 0);
        assert_eq!(set.element_number, 999);
        assert_eq!(set.revolution_number, 29375);

        assert_relative_eq!(set.inclination.to_degrees(), 51.6426, epsilon = 1e-4);
        assert_relative_eq!(set.right_ascension.to_degrees(), 178.1369, epsilon = 1e-4);
        assert_relative_eq!(set.argument_of_perigee.to_degrees(), 174.7410, epsilon = 1e-4);
        assert_relative_eq!(set.mean_anomaly.to_degrees(), 330.7918, epsilon = 1e-4);
        assert_eq!(set.eccentricity, 0.0001717);

        // rev/day → rad/min → rev/day round trip
        assert!((set.mean_motion * XPDOTP - 15.48826828).abs() < 1e-6);
    }

    #[test]
    fn test_text_record_bit_identity() {
        let from_text = OrbitalElementSet::from_text(ISS_L1, ISS_L2).unwrap();
        let from_record = OrbitalElementSet::from_record(&iss_record()).unwrap();
        assert_eq!(from_text, from_record);
    }

    #[test]
    fn test_render_roundtrip() {
        let set = OrbitalElementSet::from_text(ISS_L1, ISS_L2).unwrap();
        let (line1, line2) = set.to_tle().unwrap();
        assert_eq!(line1, ISS_L1);
        assert_eq!(line2, ISS_L2);
    }

    #[test]
    fn test_checksum_rejects_corruption() {
        // flip one digit of the inclination field
        let corrupted = ISS_L2.replace("51.6426", "51.6427");
        let err = OrbitalElementSet::from_text(ISS_L1, &corrupted).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::Parsing(TleParseError::ChecksumMismatch { line: 2, .. })
        ));
    }

    #[test]
    fn test_line_shape_errors() {
        let err = OrbitalElementSet::from_text("1 25544U", ISS_L2).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::Parsing(TleParseError::InvalidLine { line: 1 })
        ));

        let err = OrbitalElementSet::from_text(ISS_L2, ISS_L1).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::Parsing(TleParseError::InvalidLineNumber {
                line: 1,
                expected: '1'
            })
        ));
    }

    #[test]
    fn test_object_number_mismatch() {
        let other_l2 = "2 25545  51.6426 178.1369 0001717 174.7410 330.7918 15.48826828293751";
        let err = OrbitalElementSet::from_text(ISS_L1, other_l2).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::Parsing(TleParseError::ObjectNumberMismatch {
                line1: 25544,
                line2: 25545
            })
        ));
    }

    #[test]
    fn test_exp_field_decode() {
        assert_eq!(decode_exp_field(" 42487-4", "drag term").unwrap(), 4.2487e-5);
        assert_eq!(decode_exp_field("-11606-4", "drag term").unwrap(), -1.1606e-5);
        assert_eq!(decode_exp_field(" 00000-0", "drag term").unwrap(), 0.0);
        assert_eq!(decode_exp_field(" 00000+0", "drag term").unwrap(), 0.0);
        assert_eq!(decode_exp_field("        ", "drag term").unwrap(), 0.0);
        assert_eq!(decode_exp_field(" 12345+2", "drag term").unwrap(), 12.345);

        assert!(decode_exp_field(" 4248x-4", "drag term").is_err());
    }

    #[test]
    fn test_exp_field_encode() {
        assert_eq!(encode_exp_field(4.2487e-5, "drag term").unwrap(), " 42487-4");
        assert_eq!(encode_exp_field(-1.1606e-5, "drag term").unwrap(), "-11606-4");
        assert_eq!(encode_exp_field(0.0, "drag term").unwrap(), " 00000-0");
        assert_eq!(encode_exp_field(12.345, "drag term").unwrap(), " 12345+2");
    }

    #[test]
    fn test_validation() {
        let mut record = iss_record();
        record.eccentricity = 1.0;
        let err = OrbitalElementSet::from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::Validation(ValidationError::Eccentricity(e)) if e == 1.0
        ));

        let mut record = iss_record();
        record.inclination = 180.5;
        let err = OrbitalElementSet::from_record(&record).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::Validation(ValidationError::Inclination(i)) if i == 180.5
        ));

        // boundary values stay valid
        let mut record = iss_record();
        record.inclination = 180.0;
        record.eccentricity = 0.0;
        assert!(OrbitalElementSet::from_record(&record).is_ok());
    }

    #[test]
    fn test_unrenderable_fields() {
        let mut record = iss_record();
        record.object_number = 123_456;
        // bypass the five-digit text field by building from the record
        let set = OrbitalElementSet::from_record(&record).unwrap();
        let err = set.to_tle().unwrap_err();
        assert!(matches!(
            err,
            OverpassError::UnrenderableField {
                field: "object number"
            }
        ));
    }
}
