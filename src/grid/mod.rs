//! Maidenhead locator projection.

use serde::Serialize;

const FIELD_COUNT: u32 = 18;
const SUBSQUARE_COUNT: u32 = 24;
const SUBSQUARE_LON_DEG: f64 = 5.0 / 60.0;
const SUBSQUARE_LAT_DEG: f64 = 2.5 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

/// Project a 4- or 6-character locator to coordinates.
///
/// Field and square resolve to the south-west corner of the square. When a
/// sub-square is present the result is the centre of that sub-square.
/// Returns `None` for locators shorter than 4 characters or containing
/// characters outside the locator alphabet.
pub fn project_locator(locator: &str) -> Option<Coordinates> {
    let chars: Vec<char> = locator.trim().chars().collect();
    if chars.len() < 4 {
        return None;
    }

    let field_lon = letter_offset(chars[0], FIELD_COUNT)?;
    let field_lat = letter_offset(chars[1], FIELD_COUNT)?;
    let square_lon = chars[2].to_digit(10)?;
    let square_lat = chars[3].to_digit(10)?;

    let mut longitude = f64::from(field_lon) * 20.0 - 180.0 + f64::from(square_lon) * 2.0;
    let mut latitude = f64::from(field_lat) * 10.0 - 90.0 + f64::from(square_lat);

    if chars.len() >= 6 {
        let sub_lon = letter_offset(chars[4], SUBSQUARE_COUNT)?;
        let sub_lat = letter_offset(chars[5], SUBSQUARE_COUNT)?;
        longitude += f64::from(sub_lon) * SUBSQUARE_LON_DEG + SUBSQUARE_LON_DEG / 2.0;
        latitude += f64::from(sub_lat) * SUBSQUARE_LAT_DEG + SUBSQUARE_LAT_DEG / 2.0;
    }

    Some(Coordinates {
        longitude,
        latitude,
    })
}

fn letter_offset(c: char, count: u32) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return None;
    }
    let offset = upper as u32 - 'A' as u32;
    (offset < count).then_some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn four_char_locator_gives_south_west_corner() {
        let c = project_locator("JO22").unwrap();
        assert_close(c.longitude, 4.0);
        assert_close(c.latitude, 52.0);

        let c = project_locator("FN20").unwrap();
        assert_close(c.longitude, -76.0);
        assert_close(c.latitude, 40.0);
    }

    #[test]
    fn six_char_locator_gives_subsquare_centre() {
        let c = project_locator("JO22aa").unwrap();
        assert_close(c.longitude, 4.0 + 2.5 / 60.0);
        assert_close(c.latitude, 52.0 + 1.25 / 60.0);

        let c = project_locator("JO22XX").unwrap();
        assert_close(c.longitude, 4.0 + 23.0 * 5.0 / 60.0 + 2.5 / 60.0);
        assert_close(c.latitude, 52.0 + 23.0 * 2.5 / 60.0 + 1.25 / 60.0);
    }

    #[test]
    fn lowercase_field_is_accepted() {
        assert_eq!(project_locator("jo22"), project_locator("JO22"));
    }

    #[test]
    fn short_or_malformed_locators_do_not_project() {
        assert_eq!(project_locator(""), None);
        assert_eq!(project_locator("JO2"), None);
        assert_eq!(project_locator("ZZ22"), None);
        assert_eq!(project_locator("JOAB"), None);
        assert_eq!(project_locator("JO22ya"), None);
    }
}
