use std::fmt;

/// A sample time split into a whole frame and a sub-frame offset.
///
/// Key times are real-valued frame numbers; the host clock is stepped with
/// an integer frame plus a fractional remainder in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub frame: i32,
    pub subframe: f32,
}

impl FrameTime {
    /// First frame of a clip; the clock returns here after every bake.
    pub const START: FrameTime = FrameTime {
        frame: 1,
        subframe: 0.0,
    };

    /// Splits a real-valued frame number into its integer and fractional parts.
    #[must_use]
    pub fn from_value(time: f32) -> Self {
        let whole = time.floor();
        Self {
            frame: whole as i32,
            subframe: time - whole,
        }
    }

    #[must_use]
    pub fn from_frame(frame: i32) -> Self {
        Self {
            frame,
            subframe: 0.0,
        }
    }

    /// Reconstructs the real-valued frame number.
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.frame as f32 + self.subframe
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for FrameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subframe == 0.0 {
            write!(f, "{}", self.frame)
        } else {
            write!(f, "{}+{:.3}", self.frame, self.subframe)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fractional_frames() {
        let t = FrameTime::from_value(12.25);
        assert_eq!(t.frame, 12);
        assert!((t.subframe - 0.25).abs() < 1e-6);
        assert!((t.value() - 12.25).abs() < 1e-6);
    }

    #[test]
    fn negative_times_keep_subframe_positive() {
        let t = FrameTime::from_value(-0.5);
        assert_eq!(t.frame, -1);
        assert!((t.subframe - 0.5).abs() < 1e-6);
    }

    #[test]
    fn whole_frames_have_zero_subframe() {
        let t = FrameTime::from_value(3.0);
        assert_eq!(t, FrameTime::from_frame(3));
        assert_eq!(t.to_string(), "3");
    }
}
