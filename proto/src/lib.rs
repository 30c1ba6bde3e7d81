//! Host boundary messages for Neon Pong
//!
//! Uses postcard for efficient binary serialization between the page's
//! JavaScript (input, menu, renderer) and the wasm simulation.

use postcard::{from_bytes, to_allocvec};

// ============================================================================
// Host events (page to simulation)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Level {
    Easy,
    Normal,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HostEvent {
    /// Key pressed, identified by its legacy key code
    KeyDown { code: u32 },

    /// Key released
    KeyUp { code: u32 },

    /// Difficulty menu opened; the match pauses
    OpenDifficultyMenu,

    /// Difficulty chosen; starts the match or retunes the running one
    SelectDifficulty { level: Level },
}

// ============================================================================
// Frame snapshot (simulation to renderer)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrailSample {
    pub x: f32,
    pub y: f32,
    pub alpha: f32,
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    pub player: Rect,
    pub computer: Rect,
    pub ball: Rect,
    pub trail: Vec<TrailSample>, // oldest first
    pub player_score: u32,
    pub computer_score: u32,
    pub paused: bool,
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl HostEvent {
    /// Serialize host event to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize host event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl FrameSnapshot {
    /// Serialize snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize snapshot from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_event_serialization() {
        let msg = HostEvent::SelectDifficulty { level: Level::Hard };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = HostEvent::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_snapshot_serialization() {
        let msg = FrameSnapshot {
            player: Rect {
                x: 22.0,
                y: 255.0,
                width: 18.0,
                height: 90.0,
            },
            computer: Rect {
                x: 760.0,
                y: 255.0,
                width: 18.0,
                height: 90.0,
            },
            ball: Rect {
                x: 394.0,
                y: 294.0,
                width: 12.0,
                height: 12.0,
            },
            trail: vec![TrailSample {
                x: 400.0,
                y: 300.0,
                alpha: 0.8,
            }],
            player_score: 3,
            computer_score: 5,
            paused: true,
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = FrameSnapshot::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded.trail.len(), 1);
        assert_eq!(decoded.computer_score, 5);
        assert!(decoded.paused);
    }

    #[test]
    fn test_truncated_event_is_rejected() {
        let bytes = HostEvent::KeyDown { code: 38 }.to_bytes().unwrap();
        assert!(HostEvent::from_bytes(&bytes[..0]).is_err());
    }
}
