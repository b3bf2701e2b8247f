// Export components
pub mod availability;
pub mod roster;

// Re-export the projector
pub use availability::{Projector, ProjectorSettings};
// Re-export the roster
pub use roster::Roster;
