use serde::Serialize;

use super::{Band, RequestError};

pub const CHANNEL_COUNT: u32 = 600;

const TELEMETRY_PREFIXES: [char; 3] = ['0', '1', 'Q'];

/// Telemetry channel, selecting both the pseudo-callsign pattern and the
/// transmit slot within the ten-minute cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Channel(u32);

impl Channel {
    pub fn new(number: u32) -> Result<Self, RequestError> {
        if number < CHANNEL_COUNT {
            Ok(Channel(number))
        } else {
            Err(RequestError::InvalidChannel(number))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// First and third character of the pseudo-callsign used by this channel.
    pub fn telemetry_prefix(self) -> (char, char) {
        let first = TELEMETRY_PREFIXES[(self.0 / 200) as usize];
        let third = char::from_digit((self.0 / 20) % 10, 10).unwrap_or('0');
        (first, third)
    }

    /// Minute (mod 10) of the carrier position report.
    pub fn carrier_minute(self, band: Band) -> u32 {
        (band.slot_base() + (self.0 % 5) * 2) % 10
    }

    /// Minute (mod 10) of the telemetry message: the slot preceding the
    /// carrier slot, which the correlator's lookback window covers.
    ///
    /// Other trackers query the slot at `carrier + 2`. This offset must stay
    /// paired with the direction of `MATCH_WINDOW` in the correlator.
    pub fn telemetry_minute(self, band: Band) -> u32 {
        (self.carrier_minute(band) + 8) % 10
    }
}
