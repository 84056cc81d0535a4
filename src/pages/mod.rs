//! Page components for Cerveau.

mod challenges;
mod home;
mod journal;
mod settings;
mod statistics;

pub use challenges::Challenges;
pub use home::Home;
pub use journal::Journal;
pub use settings::Settings;
pub use statistics::Statistics;
