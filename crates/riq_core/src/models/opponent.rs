//! Opponent descriptors and the built-in opponent book.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Broad stylistic identity of an opponent's system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SystemStyle {
    ZonePressure,
    PhysicalForwards,
    TempoEdge,
    GuardCreation,
    InteriorControl,
    Balanced,
}

impl SystemStyle {
    pub fn label(&self) -> &'static str {
        match self {
            SystemStyle::ZonePressure => "Zone / Run-and-Gun",
            SystemStyle::PhysicalForwards => "Physical Forwards",
            SystemStyle::TempoEdge => "Tempo Edge",
            SystemStyle::GuardCreation => "Guard Creation",
            SystemStyle::InteriorControl => "Interior Control",
            SystemStyle::Balanced => "Balanced",
        }
    }
}

/// Scouting profile of a single opponent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpponentProfile {
    pub name: String,
    pub division: String,
    pub style: SystemStyle,
    pub kpi: f32,
    /// Last season's record, wins-losses.
    pub record: Option<(u16, u16)>,
    pub conference: String,
}

impl OpponentProfile {
    pub fn new(
        name: impl Into<String>,
        division: impl Into<String>,
        style: SystemStyle,
        kpi: f32,
        record: Option<(u16, u16)>,
        conference: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            division: division.into(),
            style,
            kpi,
            record,
            conference: conference.into(),
        }
    }
}

static OPPONENT_BOOK: Lazy<Vec<OpponentProfile>> = Lazy::new(|| {
    vec![
        OpponentProfile::new(
            "Howard College",
            "D1",
            SystemStyle::ZonePressure,
            78.9,
            Some((18, 12)),
            "SWAC",
        ),
        OpponentProfile::new(
            "Odessa JC",
            "JUCO",
            SystemStyle::PhysicalForwards,
            80.2,
            Some((22, 8)),
            "WJCAC",
        ),
        OpponentProfile::new(
            "Clarendon JC",
            "JUCO",
            SystemStyle::TempoEdge,
            77.5,
            Some((19, 11)),
            "WJCAC",
        ),
        OpponentProfile::new(
            "Dallas CC",
            "JUCO",
            SystemStyle::GuardCreation,
            81.0,
            Some((24, 6)),
            "NTJCAC",
        ),
        OpponentProfile::new(
            "Midland JC",
            "JUCO",
            SystemStyle::InteriorControl,
            75.8,
            Some((16, 14)),
            "WJCAC",
        ),
    ]
});

/// The scouting book shipped with the engine; a ready-made schedule for
/// projections before any real opponents are entered.
pub fn builtin_opponents() -> &'static [OpponentProfile] {
    &OPPONENT_BOOK
}
