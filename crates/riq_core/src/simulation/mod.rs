//! Game and season projection: the matchup simulator, the season projector
//! and the advisory narrative layer.

pub mod matchup;
pub mod narrative;
pub mod season;

pub use matchup::{MatchupResult, MatchupSimulator};
pub use narrative::{ImpactNote, SeasonCommentary};
pub use season::{GameProjection, SeasonProjector, SeasonResult, LEAGUE_SIZE};
