//! Data module - dataset loading and record types

mod loader;

pub use loader::{quarter_label, Dataset, DatasetError, RegistrationRecord};
