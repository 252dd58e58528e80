use super::types::DecodedSpot;
use crate::window::TimeWindow;

/// Keep valid spots whose timestamp lies inside the requested window.
pub fn retain_valid(spots: Vec<DecodedSpot>, window: &TimeWindow) -> Vec<DecodedSpot> {
    spots
        .into_iter()
        .filter(|spot| spot.valid && window.contains(spot.timestamp))
        .collect()
}
