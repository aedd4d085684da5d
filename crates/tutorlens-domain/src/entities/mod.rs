//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Transcript`] | Ordered learner/tutor dialogue |
//! | [`Turn`] | One message attributed to a [`Role`] |
//! | [`Exchange`] | Stored chat-log record (learner message + tutor reply) |
//! | [`TranscriptInput`] | Free text or message sequence, before normalization |

/// Transcript and turn types
pub mod transcript;

pub use transcript::{Exchange, Role, Transcript, TranscriptInput, Turn};
