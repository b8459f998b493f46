pub mod constants;
pub mod elements;
pub mod observers;
pub mod overpass_errors;
pub mod propagation;
pub mod ref_system;
pub mod satellite;
pub mod time;
