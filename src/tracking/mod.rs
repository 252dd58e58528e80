//! Plain position tracking from ordinary reception reports.

mod error;
mod flight_time;
mod request;
mod track;
mod types;

pub use error::TrackError;
pub use request::TrackRequest;
pub use track::fetch_track;
pub use types::{Reception, Track, TrackPoint};
