//! Player evaluation: the KPI/fit engine, archetype catalog and financial
//! suggestion formulas.

pub mod archetype;
pub mod engine;
pub mod financial;

pub use archetype::{derive_archetype, derive_badges, ArchetypeProfile, Badge};
pub use engine::{EvaluationEngine, MIN_NAME_LEN};
