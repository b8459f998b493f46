//! # Constants and type definitions for Overpass
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `Overpass` library.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants
//! - Unit conversions (degrees ↔ radians, revolutions/day ↔ radians/minute)
//! - Core type aliases used across the crate
//!
//! Two Earth models coexist on purpose: site geometry uses the WGS84 ellipsoid, while the
//! sub-orbital perigee check mirrors the WGS72 geopotential the perturbation model is built on.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of minutes in a Julian day
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Revolutions/day → radians/minute divisor (1440 / 2π)
pub const XPDOTP: f64 = MINUTES_PER_DAY / DPI;

/// Earth equatorial radius in kilometers (WGS84), used for site geometry
pub const EARTH_MAJOR_AXIS_KM: f64 = 6378.137;

/// Earth flattening (WGS84), used for site geometry
pub const EARTH_FLATTENING: f64 = 1.0 / 298.257223563;

/// Earth equatorial radius in kilometers (WGS72), the perturbation model's value
pub const MODEL_EARTH_RADIUS_KM: f64 = 6378.135;

/// Square root of the gravitational parameter in Earth-radii^1.5/min (WGS72 `ke`)
pub const MODEL_KE: f64 = 0.07436691613317342;

/// Second gravitational zonal harmonic J2 (WGS72)
pub const MODEL_J2: f64 = 0.001082616;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;

/// Modified Julian Date (days)
pub type MJD = f64;
