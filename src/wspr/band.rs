use serde::{Deserialize, Serialize};

/// Amateur bands that carry enhanced telemetry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    clap::ValueEnum,
    utoipa::ToSchema,
)]
pub enum Band {
    #[serde(rename = "160m")]
    #[strum(serialize = "160m")]
    #[value(name = "160m")]
    Meters160,
    #[serde(rename = "80m")]
    #[strum(serialize = "80m")]
    #[value(name = "80m")]
    Meters80,
    #[serde(rename = "60m")]
    #[strum(serialize = "60m")]
    #[value(name = "60m")]
    Meters60,
    #[serde(rename = "40m")]
    #[strum(serialize = "40m")]
    #[value(name = "40m")]
    Meters40,
    #[serde(rename = "30m")]
    #[strum(serialize = "30m")]
    #[value(name = "30m")]
    Meters30,
    #[serde(rename = "20m")]
    #[strum(serialize = "20m")]
    #[value(name = "20m")]
    Meters20,
    #[serde(rename = "17m")]
    #[strum(serialize = "17m")]
    #[value(name = "17m")]
    Meters17,
    #[serde(rename = "15m")]
    #[strum(serialize = "15m")]
    #[value(name = "15m")]
    Meters15,
    #[serde(rename = "12m")]
    #[strum(serialize = "12m")]
    #[value(name = "12m")]
    Meters12,
    #[serde(rename = "10m")]
    #[strum(serialize = "10m")]
    #[value(name = "10m")]
    Meters10,
    #[serde(rename = "6m")]
    #[strum(serialize = "6m")]
    #[value(name = "6m")]
    Meters6,
}

impl Band {
    /// Slot minute (mod 10) at which channel 0 transmits on this band.
    pub fn slot_base(self) -> u32 {
        self.info().0
    }

    /// Band identifier used by the wspr.live `band` column.
    pub fn wspr_live_id(self) -> u32 {
        self.info().1
    }

    fn info(self) -> (u32, u32) {
        match self {
            Band::Meters160 => (8, 1),
            Band::Meters80 => (2, 3),
            Band::Meters60 => (6, 5),
            Band::Meters40 => (0, 7),
            Band::Meters30 => (4, 10),
            Band::Meters20 => (8, 14),
            Band::Meters17 => (2, 18),
            Band::Meters15 => (6, 21),
            Band::Meters12 => (0, 24),
            Band::Meters10 => (4, 28),
            Band::Meters6 => (8, 50),
        }
    }
}
