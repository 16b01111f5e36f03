pub mod error;
pub mod name;
pub mod policy;

pub use error::{ModelError, Result};
pub use name::{NameField, NameInput, NameOutput};
pub use policy::{AirlinePolicy, airline_keys, airlines, policy};
