use bevy::math::Vec2;

pub const HAND_TRAIL_COUNTDOWN: i32 = 20;

/// Fading marker left where a hand was seen. No physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandTrailMarker {
    pub position: Vec2,
    pub countdown: i32,
}

impl HandTrailMarker {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            countdown: HAND_TRAIL_COUNTDOWN,
        }
    }

    /// Remaining fraction of the marker's life in `[0, 1]`.
    #[inline]
    pub fn strength(&self) -> f32 {
        (self.countdown as f32 / HAND_TRAIL_COUNTDOWN as f32).clamp(0.0, 1.0)
    }

    pub fn advance(&mut self) -> bool {
        self.countdown -= 1;
        self.countdown > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_countdown() {
        let mut m = HandTrailMarker::new(1.0, 2.0);
        let mut alive_ticks = 0;
        while m.advance() {
            alive_ticks += 1;
        }
        assert_eq!(alive_ticks, HAND_TRAIL_COUNTDOWN - 1);
        assert_eq!(m.strength(), 0.0);
    }
}
