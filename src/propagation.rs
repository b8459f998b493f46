//! # Propagation model adapter
//!
//! Bridges normalized element sets to the analytic SGP4 propagation theory. The adapter
//! has two halves with deliberately different failure behavior:
//!
//! - [`Propagator::init`] converts an [`OrbitalElementSet`] into the model's internal
//!   state. Everything knowable from the elements alone fails **here**: an orbit whose
//!   perigee sits inside the Earth, an epoch the calendar cannot represent, or element
//!   combinations the theory rejects. A session never gets hold of a half-initialized
//!   model.
//! - [`Propagator::propagate`] evaluates the model at a signed minute offset from the
//!   element epoch. Offsets are not clamped; negative and multi-week values are legal
//!   inputs, and failures here ([`PropagationError`]) are per-call, not terminal.
//!
//! [`Sgp4`] is the stock implementation. The propagation theory itself lives in the
//! `sgp4` crate; this module owns the unit denormalization (radians back to the degrees
//! and revolutions/day the model expects), the epoch conversion, and the decay checks.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use nalgebra::Vector3;
use thiserror::Error;

use crate::constants::{
    Kilometer, JDTOMJD, MINUTES_PER_DAY, MODEL_EARTH_RADIUS_KM, MODEL_J2, MODEL_KE,
    SECONDS_PER_DAY, XPDOTP,
};
use crate::elements::OrbitalElementSet;
use crate::time::JulianDate;

/// Failures while turning an element set into model state.
///
/// These are terminal for the element set: retrying with the same elements cannot succeed.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("perigee radius {perigee_km:.1} km is inside the Earth")]
    SubOrbital { perigee_km: Kilometer },
    #[error("element epoch JD {jd} cannot be represented as a calendar datetime")]
    EpochOutOfRange { jd: f64 },
    #[error("propagation model rejected the element set: {0}")]
    Model(#[from] sgp4::ElementsError),
}

/// Failures while evaluating the model at one time offset.
///
/// Unlike [`InitError`] these are per-call: the same model may still be queried at other
/// offsets afterwards.
#[derive(Error, Debug)]
pub enum PropagationError {
    #[error("model error {minutes} minutes from epoch: {source}")]
    Model {
        minutes: f64,
        #[source]
        source: sgp4::Error,
    },
    #[error("satellite decayed: radius {radius_km:.1} km at {minutes} minutes from epoch")]
    Decayed { minutes: f64, radius_km: Kilometer },
}

/// Satellite state in the true-equator, mean-equinox inertial frame.
///
/// Units
/// -----
/// * `position`: kilometers.
/// * `velocity`: kilometers/second.
/// * `minutes_since_epoch`: signed offset from the element epoch carried in `epoch`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertialState {
    pub epoch: JulianDate,
    pub minutes_since_epoch: f64,
    pub position: Vector3<Kilometer>,
    pub velocity: Vector3<f64>,
}

impl InertialState {
    /// Absolute time of this state as a split Julian date.
    pub fn time(&self) -> JulianDate {
        self.epoch.plus_minutes(self.minutes_since_epoch)
    }
}

/// Adapter seam between normalized element sets and an analytic propagation model.
///
/// Implementations own their model constants; a value of the implementing type is proof
/// that initialization succeeded.
pub trait Propagator: Sized {
    /// Build the model state from a normalized element set.
    ///
    /// All element-level rejections happen here, so that a constructed propagator can be
    /// driven without re-validating.
    fn init(elements: &OrbitalElementSet) -> Result<Self, InitError>;

    /// Evaluate the model `minutes_since_epoch` minutes from the element epoch.
    ///
    /// The offset is signed and unclamped.
    fn propagate(&self, minutes_since_epoch: f64) -> Result<InertialState, PropagationError>;
}

/// The SGP4/SDP4 analytic theory, as implemented by the `sgp4` crate.
#[derive(Debug, Clone)]
pub struct Sgp4 {
    constants: sgp4::Constants,
    epoch: JulianDate,
}

/// Recover the un-Kozai'd semi-major axis, in Earth radii, from the published mean motion.
///
/// Element sets carry the Kozai mean motion; the secular J2 contribution has to be backed
/// out before the semi-major axis (and hence the perigee radius) is meaningful.
fn unkozai_semimajor_axis(elements: &OrbitalElementSet) -> f64 {
    const K2: f64 = MODEL_J2 / 2.0;

    let no_kozai = elements.mean_motion;
    let cos_i = elements.inclination.cos();
    let x3thm1 = 3.0 * cos_i * cos_i - 1.0;
    let beta2 = 1.0 - elements.eccentricity * elements.eccentricity;
    let beta = beta2.sqrt();

    let a1 = (MODEL_KE / no_kozai).powf(2.0 / 3.0);
    let del1 = 1.5 * K2 * x3thm1 / (a1 * a1 * beta * beta2);
    let ao = a1 * (1.0 - del1 * (1.0 / 3.0 + del1 * (1.0 + 134.0 / 81.0 * del1)));
    let delo = 1.5 * K2 * x3thm1 / (ao * ao * beta * beta2);
    let no_unkozai = no_kozai / (1.0 + delo);

    (MODEL_KE / no_unkozai).powf(2.0 / 3.0)
}

/// Express a split Julian date as a calendar datetime (UTC), at nanosecond resolution.
fn epoch_datetime(epoch: &JulianDate) -> Option<NaiveDateTime> {
    let mjd_origin = NaiveDate::from_ymd_opt(1858, 11, 17)?.and_hms_opt(0, 0, 0)?;
    let whole_days = (epoch.day - JDTOMJD).floor();
    if !whole_days.is_finite() || whole_days.abs() > 1e8 {
        return None;
    }
    let day_nanos = (epoch.frac * SECONDS_PER_DAY * 1e9).round() as i64;
    mjd_origin
        .checked_add_signed(Duration::try_days(whole_days as i64)?)?
        .checked_add_signed(Duration::nanoseconds(day_nanos))
}

impl Propagator for Sgp4 {
    fn init(elements: &OrbitalElementSet) -> Result<Sgp4, InitError> {
        let perigee = unkozai_semimajor_axis(elements) * (1.0 - elements.eccentricity);
        if perigee < 1.0 {
            return Err(InitError::SubOrbital {
                perigee_km: perigee * MODEL_EARTH_RADIUS_KM,
            });
        }

        let datetime = epoch_datetime(&elements.epoch).ok_or(InitError::EpochOutOfRange {
            jd: elements.epoch.total(),
        })?;

        let classification = match elements.classification {
            'C' => sgp4::Classification::Classified,
            'S' => sgp4::Classification::Secret,
            _ => sgp4::Classification::Unclassified,
        };
        let international_designator = if elements.international_designator.is_empty() {
            None
        } else {
            Some(elements.international_designator.clone())
        };

        // The model consumes catalog units, so the normalization is undone here.
        let sgp4_elements = sgp4::Elements {
            object_name: None,
            international_designator,
            norad_id: elements.object_number,
            classification,
            datetime,
            mean_motion_dot: elements.mean_motion_dot * (XPDOTP * MINUTES_PER_DAY),
            mean_motion_ddot: elements.mean_motion_ddot
                * (XPDOTP * MINUTES_PER_DAY * MINUTES_PER_DAY),
            drag_term: elements.drag_term,
            element_set_number: elements.element_number,
            inclination: elements.inclination.to_degrees(),
            right_ascension: elements.right_ascension.to_degrees(),
            eccentricity: elements.eccentricity,
            argument_of_perigee: elements.argument_of_perigee.to_degrees(),
            mean_anomaly: elements.mean_anomaly.to_degrees(),
            mean_motion: elements.mean_motion * XPDOTP,
            revolution_number: elements.revolution_number,
            ephemeris_type: elements.ephemeris_type,
        };

        Ok(Sgp4 {
            constants: sgp4::Constants::from_elements(&sgp4_elements)?,
            epoch: elements.epoch,
        })
    }

    fn propagate(&self, minutes_since_epoch: f64) -> Result<InertialState, PropagationError> {
        let prediction = self
            .constants
            .propagate(sgp4::MinutesSinceEpoch(minutes_since_epoch))
            .map_err(|source| PropagationError::Model {
                minutes: minutes_since_epoch,
                source,
            })?;

        let position = Vector3::from(prediction.position);
        let velocity = Vector3::from(prediction.velocity);

        // negated comparison so a non-finite radius also lands in the error arm
        let radius = position.norm();
        if !(radius >= MODEL_EARTH_RADIUS_KM) {
            return Err(PropagationError::Decayed {
                minutes: minutes_since_epoch,
                radius_km: radius,
            });
        }

        Ok(InertialState {
            epoch: self.epoch,
            minutes_since_epoch,
            position,
            velocity,
        })
    }
}
