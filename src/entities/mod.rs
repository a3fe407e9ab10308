//! Concrete resources exposed by the API

pub mod church_stats;
pub mod temple;

pub use church_stats::{ChurchStats, CountryStatsChanges, NewCountryStats};
pub use temple::{NewTemple, TempleChanges, Temples};
