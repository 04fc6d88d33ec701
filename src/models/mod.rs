//! Domain model types for parcel scheduling.
//!
//! Provides parcels with volumes and destinations, trucks with capacity
//! tracking, routes as ordered city sequences, and a fleet that reports
//! aggregate statistics once scheduling is done.

mod error;
mod fleet;
mod parcel;
mod route;
mod truck;

pub use error::{ModelError, ReportError};
pub use fleet::Fleet;
pub use parcel::Parcel;
pub use route::Route;
pub use truck::Truck;
