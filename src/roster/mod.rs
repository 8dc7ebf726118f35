//! Roster entities: squadron members and the missions they can take on

pub mod loader;
pub mod member;
pub mod mission;

pub use loader::{load_roster, parse_roster, RosterFile};
pub use member::Member;
pub use mission::Mission;
