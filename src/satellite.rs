//! # Satellite session
//!
//! The stateful unit a caller drives to sample a trajectory. A [`Satellite`] binds one
//! normalized [`OrbitalElementSet`](crate::elements::OrbitalElementSet) to an initialized
//! propagation model and remembers the last successfully computed state, so repeated
//! sampling, observation and reporting all work off one value.
//!
//! The failure contract is asymmetric on purpose:
//!
//! - **Construction is the terminal gate.** Parsing, validation and model initialization
//!   all happen before a `Satellite` value exists; a session that cannot work is never
//!   handed out, so there is no faulted state to check for.
//! - **Propagation failures are per-call.** A rejected offset (decay, model divergence)
//!   returns an error and leaves both the session and its last good state untouched;
//!   other offsets may still succeed afterwards.
//!
//! ```rust
//! use overpass::observers::GeodeticLocation;
//! use overpass::satellite::Satellite;
//!
//! let mut sat = Satellite::from_tle(
//!     "1 25544U 98067A   21201.46980141  .00001879  00000-0  42487-4 0  9993",
//!     "2 25544  51.6426 178.1369 0001717 174.7410 330.7918 15.48826828293750",
//! )?;
//! let site = GeodeticLocation::new(-104.883, 39.007, 2187.0, None)?;
//!
//! sat.propagate_to(15.0)?;
//! let look = sat.observe(&site)?;
//! println!("{} | az {:.1}", sat.summary_line()?, look.azimuth.to_degrees());
//! # Ok::<(), overpass::overpass_errors::OverpassError>(())
//! ```

use hifitime::ut1::Ut1Provider;
use hifitime::Epoch;

use crate::elements::OrbitalElementSet;
use crate::observers::GeodeticLocation;
use crate::overpass_errors::OverpassError;
use crate::propagation::{InertialState, Propagator, Sgp4};
use crate::ref_system::{topocentric, TopocentricObservation};
use crate::time::ut1_mjd;

/// A propagation session: one element set, one model, the last good state.
///
/// The model is chosen by the type parameter and defaults to the stock [`Sgp4`] adapter;
/// [`Satellite::with_model`] builds a session over any other [`Propagator`].
#[derive(Debug, Clone)]
pub struct Satellite<P: Propagator = Sgp4> {
    elements: OrbitalElementSet,
    model: P,
    current: Option<InertialState>,
}

impl Satellite<Sgp4> {
    /// Parse a two-line element set and open a session over the stock model.
    ///
    /// Arguments
    /// ---------
    /// * `line1`, `line2`: the two catalog lines, checksums included
    ///
    /// Return
    /// ------
    /// * A ready session at the element epoch, nothing propagated yet.
    ///
    /// Errors
    /// ------
    /// * [`OverpassError::Parsing`] / [`OverpassError::Validation`] for bad text.
    /// * [`OverpassError::ModelInit`] when the model rejects the elements (for example a
    ///   perigee inside the Earth). Construction errors are terminal for this element set.
    pub fn from_tle(line1: &str, line2: &str) -> Result<Satellite<Sgp4>, OverpassError> {
        let elements = OrbitalElementSet::from_text(line1, line2)?;
        Satellite::new(elements)
    }

    /// Open a session over the stock model from an already normalized element set.
    pub fn new(elements: OrbitalElementSet) -> Result<Satellite<Sgp4>, OverpassError> {
        Satellite::with_model(elements)
    }
}

impl<P: Propagator> Satellite<P> {
    /// Open a session with a caller-chosen propagation model.
    pub fn with_model(elements: OrbitalElementSet) -> Result<Satellite<P>, OverpassError> {
        let model = P::init(&elements)?;
        Ok(Satellite {
            elements,
            model,
            current: None,
        })
    }

    /// The normalized element set this session was built from.
    pub fn elements(&self) -> &OrbitalElementSet {
        &self.elements
    }

    /// Propagate to a signed minute offset from the element epoch.
    ///
    /// On success the returned state also becomes [`Satellite::current_state`]. On failure
    /// the previous state is kept and the session stays usable; the same session may be
    /// driven at any offsets in any order, and equal offsets give bit-identical states.
    ///
    /// Arguments
    /// ---------
    /// * `minutes_since_epoch`: signed offset in minutes; not clamped
    ///
    /// Errors
    /// ------
    /// * [`OverpassError::Propagation`] when the model cannot produce a state at this
    ///   offset (decayed orbit, numerical divergence).
    pub fn propagate_to(
        &mut self,
        minutes_since_epoch: f64,
    ) -> Result<InertialState, OverpassError> {
        let state = self.model.propagate(minutes_since_epoch)?;
        self.current = Some(state);
        Ok(state)
    }

    /// Last successfully propagated state, `None` before the first success.
    pub fn current_state(&self) -> Option<&InertialState> {
        self.current.as_ref()
    }

    /// Azimuth, elevation and range of the current state as seen from `site`.
    ///
    /// The sidereal rotation is evaluated at the state's own timestamp, taken as UT1.
    /// Element epochs are UTC, so this carries the sub-second UT1-UTC approximation
    /// described at [`crate::ref_system::topocentric`]; use [`Satellite::observe_ut1`]
    /// when Earth-orientation data is at hand.
    ///
    /// Errors
    /// ------
    /// * [`OverpassError::InvalidState`] before the first successful propagation.
    pub fn observe(
        &self,
        site: &GeodeticLocation,
    ) -> Result<TopocentricObservation, OverpassError> {
        let state = self.state_or_invalid()?;
        Ok(topocentric(state, site, state.time().to_mjd()))
    }

    /// Like [`Satellite::observe`], with the state timestamp properly converted to UT1.
    pub fn observe_ut1(
        &self,
        site: &GeodeticLocation,
        ut1_provider: &Ut1Provider,
    ) -> Result<TopocentricObservation, OverpassError> {
        let state = self.state_or_invalid()?;
        let epoch = Epoch::from_mjd_in_time_scale(state.time().to_mjd(), hifitime::TimeScale::UTC);
        Ok(topocentric(state, site, ut1_mjd(&epoch, ut1_provider)))
    }

    /// One-line state report: object number, state MJD, offset, position, velocity.
    ///
    /// Fixed-width columns, kilometers and kilometers/second:
    ///
    /// ```text
    /// 25544  59415.480218     15.000    2456.16023402 ...
    /// ```
    ///
    /// Errors
    /// ------
    /// * [`OverpassError::InvalidState`] before the first successful propagation.
    pub fn summary_line(&self) -> Result<String, OverpassError> {
        let state = self.state_or_invalid()?;
        Ok(format!(
            "{:5} {:13.6} {:10.3} {:16.8} {:16.8} {:16.8} {:12.9} {:12.9} {:12.9}",
            self.elements.object_number,
            state.time().to_mjd(),
            state.minutes_since_epoch,
            state.position.x,
            state.position.y,
            state.position.z,
            state.velocity.x,
            state.velocity.y,
            state.velocity.z,
        ))
    }

    fn state_or_invalid(&self) -> Result<&InertialState, OverpassError> {
        self.current
            .as_ref()
            .ok_or(OverpassError::InvalidState("no state propagated yet"))
    }
}

#[cfg(test)]
mod satellite_test {
    use super::*;
    use crate::constants::DPI;
    use std::f64::consts::FRAC_PI_2;

    const ISS_L1: &str = "1 25544U 98067A   21201.46980141  .00001879  00000-0  42487-4 0  9993";
    const ISS_L2: &str = "2 25544  51.6426 178.1369 0001717 174.7410 330.7918 15.48826828293750";

    // Perigee below the surface; must be refused at construction.
    const SINKER_L1: &str =
        "1 90009U 21001A   21201.50000000  .00000000  00000-0  10000-3 0  9997";
    const SINKER_L2: &str =
        "2 90009  51.6000 100.0000 0200000   0.0000   0.0000 16.80000000    11";

    // Initially orbital, but with an absurd drag term; long offsets decay it.
    const BURNER_L1: &str =
        "1 90010U 21001B   21201.50000000  .00000000  00000-0  10000+0 0  9995";
    const BURNER_L2: &str =
        "2 90010  51.6000 100.0000 0000000   0.0000   0.0000 16.40000000    17";

    fn falcon_site() -> GeodeticLocation {
        GeodeticLocation::new(-104.883, 39.007, 2187.0, None).unwrap()
    }

    #[test]
    fn test_session_lifecycle() {
        let mut sat = Satellite::from_tle(ISS_L1, ISS_L2).unwrap();
        assert!(sat.current_state().is_none());

        let state = sat.propagate_to(0.0).unwrap();
        assert_eq!(sat.current_state(), Some(&state));

        let radius = state.position.norm();
        assert!(radius > 6500.0 && radius < 7200.0);

        // same offset again, after moving elsewhere, stays bit-identical
        sat.propagate_to(42.0).unwrap();
        let replay = sat.propagate_to(0.0).unwrap();
        assert_eq!(replay, state);
    }

    #[test]
    fn test_no_state_before_first_propagation() {
        let sat = Satellite::from_tle(ISS_L1, ISS_L2).unwrap();

        assert!(sat.current_state().is_none());
        assert!(matches!(
            sat.summary_line().unwrap_err(),
            OverpassError::InvalidState(_)
        ));
        assert!(matches!(
            sat.observe(&falcon_site()).unwrap_err(),
            OverpassError::InvalidState(_)
        ));
    }

    #[test]
    fn test_suborbital_rejected_at_construction() {
        let err = Satellite::from_tle(SINKER_L1, SINKER_L2).unwrap_err();
        assert!(matches!(
            err,
            OverpassError::ModelInit(crate::propagation::InitError::SubOrbital { .. })
        ));
    }

    #[test]
    fn test_failed_offset_keeps_previous_state() {
        let mut sat = Satellite::from_tle(BURNER_L1, BURNER_L2).unwrap();

        let good = sat.propagate_to(10.0).unwrap();

        // thirty days of B* = 0.1 drag is far past decay
        let err = sat.propagate_to(43_200.0).unwrap_err();
        assert!(matches!(err, OverpassError::Propagation(_)));
        assert_eq!(sat.current_state(), Some(&good));

        // the session is still usable at sane offsets
        let again = sat.propagate_to(10.0).unwrap();
        assert_eq!(again, good);
    }

    #[test]
    fn test_observe_current_state() {
        let mut sat = Satellite::from_tle(ISS_L1, ISS_L2).unwrap();
        sat.propagate_to(30.0).unwrap();

        let look = sat.observe(&falcon_site()).unwrap();
        assert!((0.0..DPI).contains(&look.azimuth));
        assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&look.elevation));
        assert!(look.range > 300.0 && look.range < 15_000.0, "range {}", look.range);
    }

    #[test]
    fn test_summary_line_shape() {
        let mut sat = Satellite::from_tle(ISS_L1, ISS_L2).unwrap();
        sat.propagate_to(15.0).unwrap();
        let line = sat.summary_line().unwrap();

        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields.len(), 9, "line {line:?}");
        assert_eq!(fields[0], "25544");

        let state = *sat.current_state().unwrap();
        assert!((fields[2].parse::<f64>().unwrap() - 15.0).abs() < 1e-9);
        assert!((fields[3].parse::<f64>().unwrap() - state.position.x).abs() < 1e-6);
        assert!((fields[8].parse::<f64>().unwrap() - state.velocity.z).abs() < 1e-6);
    }
}
