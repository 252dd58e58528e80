use log::debug;

use super::types::{CarrierRecord, DecodedSpot, Telemetry, TelemetryRecord};
use crate::grid::project_locator;
use crate::wspr::{power_index, LEGAL_POWERS_DBM};

const ENCODED_CALLSIGN_LEN: usize = 6;
const POSITION_DIVISOR: u32 = 1068;
const ALTITUDE_STEP_M: u32 = 20;
const SUBSQUARES_PER_AXIS: u32 = 24;
const FIELD_RADIX: u32 = 18;
const POWER_RADIX: u32 = LEGAL_POWERS_DBM.len() as u32;
const KNOTS_TO_KMH: f64 = 1.852;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReadings {
    pub speed_kmh: f64,
    pub voltage_v: f64,
    pub temperature_c: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    CallsignLength,
    MalformedCallsign,
    MalformedLocator,
    IllegalPower,
    NoGpsLock,
    SubsquareOutOfRange,
}

/// Unpack the sensor word carried by locator and power.
///
/// Returns `None` when the GPS-lock bit (bit 1) is clear.
pub fn decode_sensor_word(n: u32) -> Option<SensorReadings> {
    if (n / 2) % 2 == 0 {
        return None;
    }
    Some(SensorReadings {
        speed_kmh: f64::from((n / 4) % 42) * 2.0 * KNOTS_TO_KMH,
        voltage_v: f64::from((n / 168 + 20) % 40) * 0.05 + 3.0,
        temperature_c: (n / 6720 % 90) as i32 - 50,
    })
}

/// Decode a correlated carrier record into a spot.
///
/// Without telemetry only the carrier's own locator is projected. With
/// telemetry the spot is positioned on the recovered sub-square; any
/// malformed field or a clear GPS-lock bit yields a spot with `valid` unset
/// and no derived fields.
pub fn decode(record: CarrierRecord) -> DecodedSpot {
    let locator: String = record.locator.chars().take(4).collect();

    let (telemetry, valid) = match &record.telemetry {
        None => (None, true),
        Some(t) => match unpack(&locator, t) {
            Ok(telemetry) => (Some(telemetry), true),
            Err(rejection) => {
                debug!(
                    "Dropping telemetry {} at {}: {:?}",
                    t.callsign, t.timestamp, rejection
                );
                (None, false)
            }
        },
    };

    let position = if valid {
        project_locator(telemetry.as_ref().map_or(&locator, |t| &t.locator6))
    } else {
        None
    };

    DecodedSpot {
        timestamp: record.timestamp,
        locator,
        power_dbm: record.power_dbm,
        receivers: record.receivers,
        longitude: position.map(|c| c.longitude),
        latitude: position.map(|c| c.latitude),
        telemetry,
        valid,
    }
}

pub fn decode_all(records: Vec<CarrierRecord>) -> Vec<DecodedSpot> {
    records.into_iter().map(decode).collect()
}

fn unpack(locator: &str, record: &TelemetryRecord) -> Result<Telemetry, Rejection> {
    if record.callsign.chars().count() != ENCODED_CALLSIGN_LEN {
        return Err(Rejection::CallsignLength);
    }
    let m = callsign_word(&record.callsign).ok_or(Rejection::MalformedCallsign)?;
    let power = power_index(record.power_dbm).ok_or(Rejection::IllegalPower)?;
    let n = locator_word(&record.locator, power as u32).ok_or(Rejection::MalformedLocator)?;
    let readings = decode_sensor_word(n).ok_or(Rejection::NoGpsLock)?;

    let subsquare = m / POSITION_DIVISOR;
    if subsquare >= SUBSQUARES_PER_AXIS * SUBSQUARES_PER_AXIS {
        return Err(Rejection::SubsquareOutOfRange);
    }
    let locator6 = format!(
        "{}{}{}",
        locator,
        subsquare_letter(subsquare / SUBSQUARES_PER_AXIS),
        subsquare_letter(subsquare % SUBSQUARES_PER_AXIS),
    );

    Ok(Telemetry {
        encoded_callsign: record.callsign.clone(),
        locator6,
        altitude_m: (m % POSITION_DIVISOR) * ALTITUDE_STEP_M,
        speed_kmh: readings.speed_kmh,
        voltage_v: readings.voltage_v,
        temperature_c: readings.temperature_c,
    })
}

/// Mixed-radix value of callsign positions 1, 3, 4 and 5.
fn callsign_word(callsign: &str) -> Option<u32> {
    let chars: Vec<char> = callsign.chars().collect();
    let mut m = alphanumeric_value(chars[1])?;
    for &c in &chars[3..ENCODED_CALLSIGN_LEN] {
        m = m * 26 + letter_value(c)?;
    }
    Some(m)
}

/// Mixed-radix value of the 4-char locator followed by the power index.
fn locator_word(locator: &str, power: u32) -> Option<u32> {
    let chars: Vec<char> = locator.chars().take(4).collect();
    if chars.len() < 4 {
        return None;
    }
    let g0 = letter_value(chars[0]).filter(|&v| v < FIELD_RADIX)?;
    let g1 = letter_value(chars[1]).filter(|&v| v < FIELD_RADIX)?;
    let g2 = chars[2].to_digit(10)?;
    let g3 = chars[3].to_digit(10)?;
    Some((((g0 * FIELD_RADIX + g1) * 10 + g2) * 10 + g3) * POWER_RADIX + power)
}

fn letter_value(c: char) -> Option<u32> {
    let c = c.to_ascii_uppercase();
    c.is_ascii_uppercase().then(|| c as u32 - 'A' as u32)
}

fn alphanumeric_value(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => Some(d as u32 - '0' as u32),
        l @ 'A'..='Z' => Some(l as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

fn subsquare_letter(index: u32) -> char {
    char::from(b'a' + index as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::types::CarrierReceiver;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, m, s).unwrap()
    }

    fn carrier(telemetry: Option<TelemetryRecord>) -> CarrierRecord {
        CarrierRecord {
            timestamp: at(12, 10, 0),
            locator: "JO22".to_string(),
            power_dbm: 13,
            receivers: vec![CarrierReceiver {
                callsign: "K1ABC".to_string(),
                locator: "FN20".to_string(),
                frequency_hz: 14_095_600,
                snr_db: -10,
            }],
            telemetry,
        }
    }

    fn telemetry(callsign: &str, locator: &str, power_dbm: i32) -> TelemetryRecord {
        TelemetryRecord {
            timestamp: at(12, 8, 30),
            callsign: callsign.to_string(),
            locator: locator.to_string(),
            power_dbm,
            receivers: None,
        }
    }

    /// Pack physical values the way a tracker would transmit them.
    fn encode(
        subsquare: (u32, u32),
        altitude_m: u32,
        speed_knots: u32,
        voltage_v: f64,
        temperature_c: i32,
    ) -> (String, String, i32) {
        let p = subsquare.0 * SUBSQUARES_PER_AXIS + subsquare.1;
        let m = p * POSITION_DIVISOR + altitude_m / ALTITUDE_STEP_M;
        let letter = |v: u32| char::from(b'A' + v as u8);
        let lead = m / (26 * 26 * 26);
        let lead = if lead < 10 {
            char::from(b'0' + lead as u8)
        } else {
            letter(lead - 10)
        };
        let callsign = format!(
            "0{}3{}{}{}",
            lead,
            letter((m / 676) % 26),
            letter((m / 26) % 26),
            letter(m % 26)
        );

        let voltage_steps = ((voltage_v - 3.0) / 0.05).round() as u32;
        let voltage_index = (voltage_steps + 20) % 40;
        let temperature_index = (temperature_c + 50) as u32;
        let n = ((temperature_index * 40 + voltage_index) * 42 + speed_knots / 2) * 4 + 2;

        let power = LEGAL_POWERS_DBM[(n % POWER_RADIX) as usize];
        let rest = n / POWER_RADIX;
        let locator = format!(
            "{}{}{}{}",
            letter(rest / 1800),
            letter((rest / 100) % 18),
            (rest / 10) % 10,
            rest % 10
        );
        (callsign, locator, power)
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn reference_pair_decodes_deterministically() {
        let spot = decode(carrier(Some(telemetry("0Y3XYZ", "KM45", 37))));
        assert!(spot.valid);

        let t = spot.telemetry.unwrap();
        assert_eq!(t.locator6, "JO22xw");
        assert_eq!(t.altitude_m, 14_980);
        assert_close(t.speed_kmh, 24.0 * 2.0 * 1.852, 1e-9);
        assert_close(t.voltage_v, 4.8, 1e-9);
        assert_eq!(t.temperature_c, 4);

        assert_close(spot.longitude.unwrap(), 4.0 + 23.0 * 5.0 / 60.0 + 2.5 / 60.0, 1e-9);
        assert_close(spot.latitude.unwrap(), 52.0 + 22.0 * 2.5 / 60.0 + 1.25 / 60.0, 1e-9);
    }

    #[test]
    fn physical_values_survive_encode_and_decode() {
        let cases = [
            ((0, 0), 0, 0, 3.0, -50),
            ((12, 7), 12_340, 36, 4.15, 21),
            ((23, 23), 21_340, 82, 4.95, 39),
            ((5, 18), 980, 10, 3.55, -12),
        ];

        for (subsquare, altitude, knots, volts, temp) in cases {
            let (callsign, locator, power) = encode(subsquare, altitude, knots, volts, temp);
            let spot = decode(carrier(Some(telemetry(&callsign, &locator, power))));
            assert!(spot.valid, "{callsign} {locator} {power}");

            let t = spot.telemetry.unwrap();
            assert_eq!(t.altitude_m, altitude);
            assert_close(t.speed_kmh, f64::from(knots) * 1.852, 1e-9);
            assert_close(t.voltage_v, volts, 1e-9);
            assert_eq!(t.temperature_c, temp);

            let expected_suffix: String = [subsquare.0, subsquare.1]
                .iter()
                .map(|&i| char::from(b'a' + i as u8))
                .collect();
            assert_eq!(t.locator6, format!("JO22{expected_suffix}"));
        }
    }

    #[test]
    fn cleared_gps_bit_is_always_invalid() {
        for n in 0..20_000u32 {
            let readings = decode_sensor_word(n);
            assert_eq!(readings.is_some(), (n >> 1) & 1 == 1, "n = {n}");
        }
    }

    #[test]
    fn cleared_gps_bit_invalidates_the_spot() {
        // KM45 with power 33 gives n = 365665, whose bit 1 is clear.
        let spot = decode(carrier(Some(telemetry("0Y3XYZ", "KM45", 33))));
        assert!(!spot.valid);
        assert!(spot.telemetry.is_none());
        assert!(spot.longitude.is_none());
    }

    #[test]
    fn wrong_length_callsign_is_invalid() {
        let spot = decode(carrier(Some(telemetry("0Y3XY", "KM45", 37))));
        assert!(!spot.valid);
        let spot = decode(carrier(Some(telemetry("0Y3XYZA", "KM45", 37))));
        assert!(!spot.valid);
    }

    #[test]
    fn malformed_fields_are_invalid_not_fatal() {
        assert!(!decode(carrier(Some(telemetry("0Y3X1Z", "KM45", 37)))).valid);
        assert!(!decode(carrier(Some(telemetry("0Y3XYZ", "KM4", 37)))).valid);
        assert!(!decode(carrier(Some(telemetry("0Y3XYZ", "ZZ45", 37)))).valid);
        assert!(!decode(carrier(Some(telemetry("0Y3XYZ", "KM45", 36)))).valid);
    }

    #[test]
    fn subsquare_past_x_is_invalid() {
        // m = 615167 is the last value mapping into sub-square "xx".
        let spot = decode(carrier(Some(telemetry("0Z3AAH", "KM45", 37))));
        assert!(spot.valid);
        let t = spot.telemetry.unwrap();
        assert_eq!(t.locator6, "JO22xx");
        assert_eq!(t.altitude_m, 1067 * ALTITUDE_STEP_M);
        assert!(spot.longitude.is_some());

        let spot = decode(carrier(Some(telemetry("0Z3AAI", "KM45", 37))));
        assert!(!spot.valid);
        assert!(spot.telemetry.is_none());

        assert!(!decode(carrier(Some(telemetry("0Z3ZZZ", "KM45", 37)))).valid);
    }

    #[test]
    fn unmatched_carrier_gets_plain_coordinates_only() {
        let spot = decode(carrier(None));
        assert!(spot.valid);
        assert!(spot.telemetry.is_none());
        assert_close(spot.longitude.unwrap(), 4.0, 1e-9);
        assert_close(spot.latitude.unwrap(), 52.0, 1e-9);
    }

    #[test]
    fn carrier_locator_is_cut_to_four_characters() {
        let mut record = carrier(None);
        record.locator = "JO22ab".to_string();
        let spot = decode(record);
        assert_eq!(spot.locator, "JO22");
        assert_close(spot.longitude.unwrap(), 4.0, 1e-9);
    }
}
