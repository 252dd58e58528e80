//! Enhanced telemetry: pairing carrier reports with telemetry messages and
//! unpacking the sensor values they carry.

mod coreceive;
mod correlate;
mod decode;
mod error;
mod filter;
mod import;
mod pipeline;
mod request;
mod types;

pub use error::TelemetryError;
pub use pipeline::fetch_enhanced_telemetry;
pub use request::TelemetryRequest;
pub use types::{CarrierReceiver, DecodedSpot, Telemetry};
