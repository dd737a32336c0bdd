use rootbake_core::FrameTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Constant,
}

/// A single scalar key: real-valued frame time and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    #[must_use]
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }

    #[inline]
    #[must_use]
    pub fn frame_time(&self) -> FrameTime {
        FrameTime::from_value(self.time)
    }
}

/// Scalar keys along one channel, sorted by strictly increasing time.
#[derive(Debug, Clone)]
pub struct KeyframeChannel {
    keys: Vec<Keyframe>,
    pub interpolation: InterpolationMode,
}

impl KeyframeChannel {
    #[must_use]
    pub fn new(interpolation: InterpolationMode) -> Self {
        Self {
            keys: Vec::new(),
            interpolation,
        }
    }

    /// Builds a linear channel from `(time, value)` pairs in any order.
    /// Later duplicates of a time overwrite earlier ones.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut channel = Self::new(InterpolationMode::Linear);
        for (time, value) in pairs {
            channel.insert(time, value);
        }
        channel
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        self.keys.iter().map(|k| k.time)
    }

    /// Mutable access to key values only; times stay untouched.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut f32> + '_ {
        self.keys.iter_mut().map(|k| &mut k.value)
    }

    /// Inserts a key, or replaces the value of the key already at `time`.
    pub fn insert(&mut self, time: f32, value: f32) {
        let idx = self.keys.partition_point(|k| k.time < time);
        match self.keys.get_mut(idx) {
            Some(existing) if existing.time == time => existing.value = value,
            _ => self.keys.insert(idx, Keyframe::new(time, value)),
        }
    }

    /// Evaluates the channel at `time`, clamping outside the key range.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<f32> {
        let first = self.keys.first()?;
        let len = self.keys.len();

        // partition_point finds the first index where t > time, i.e. next_index
        let next_idx = self.keys.partition_point(|k| k.time <= time);
        if next_idx == 0 {
            return Some(first.value);
        }
        if next_idx >= len {
            return Some(self.keys[len - 1].value);
        }

        let k0 = self.keys[next_idx - 1];
        let k1 = self.keys[next_idx];
        match self.interpolation {
            InterpolationMode::Constant => Some(k0.value),
            InterpolationMode::Linear => {
                let dt = k1.time - k0.time;
                // Prevent division by zero
                let t = if dt > 1e-6 { (time - k0.time) / dt } else { 0.0 };
                let t = t.clamp(0.0, 1.0);
                Some(k0.value + (k1.value - k0.value) * t)
            }
        }
    }
}

impl Default for KeyframeChannel {
    fn default() -> Self {
        Self::new(InterpolationMode::Linear)
    }
}
