use super::types::{CarrierReceiver, TelemetryReceiver};

/// Two reports of the same receiver closer than this are taken to be the same
/// channel heard twice.
pub const CORECEIVE_TOLERANCE_HZ: u64 = 5;

/// A receiver entry as far as coreception is concerned.
pub trait Reception {
    fn callsign(&self) -> &str;
    fn frequency_hz(&self) -> u64;
}

impl Reception for CarrierReceiver {
    fn callsign(&self) -> &str {
        &self.callsign
    }

    fn frequency_hz(&self) -> u64 {
        self.frequency_hz
    }
}

impl Reception for TelemetryReceiver {
    fn callsign(&self) -> &str {
        &self.callsign
    }

    fn frequency_hz(&self) -> u64 {
        self.frequency_hz
    }
}

/// True when some receiver heard both transmissions on nearly the same
/// frequency.
pub fn is_coreceived<A: Reception, B: Reception>(a: &[A], b: &[B]) -> bool {
    a.iter().any(|ra| {
        b.iter().any(|rb| {
            ra.callsign() == rb.callsign()
                && ra.frequency_hz().abs_diff(rb.frequency_hz()) < CORECEIVE_TOLERANCE_HZ
        })
    })
}
