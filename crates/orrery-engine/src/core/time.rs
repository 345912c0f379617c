/// Frame counter driven by the host's refresh callback.
///
/// Animation advances per call, never per elapsed second, so the host's
/// frame delta is not tracked here.
pub struct FrameClock {
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { frames: 0 }
    }

    /// Record one frame invocation. Returns the new frame count.
    pub fn advance(&mut self) -> u64 {
        self.frames += 1;
        self.frames
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_invocation() {
        let mut clock = FrameClock::new();
        clock.advance();
        clock.advance();
        assert_eq!(clock.advance(), 3);
        assert_eq!(clock.frames(), 3);
    }
}
