mod band;
mod callsign;
mod channel;
mod error;
mod power;

pub use band::Band;
pub use callsign::Callsign;
pub use channel::Channel;
pub use error::RequestError;
pub use power::{power_index, LEGAL_POWERS_DBM};
