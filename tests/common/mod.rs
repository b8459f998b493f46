//! Shared fixtures for the integration suites.

/// ISS (ZARYA) catalog lines from 2021-07-20, both checksums valid.
pub const ISS_L1: &str = "1 25544U 98067A   21201.46980141  .00001879  00000-0  42487-4 0  9993";
pub const ISS_L2: &str = "2 25544  51.6426 178.1369 0001717 174.7410 330.7918 15.48826828293750";
