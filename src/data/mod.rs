//! Data module - CSV loading and observation records

mod loader;
mod observation;

pub use loader::DataLoader;
pub use observation::{min_max, Observation, ObservationTable};
