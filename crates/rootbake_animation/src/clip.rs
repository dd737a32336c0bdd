use crate::tracks::KeyframeChannel;

/// Host-style address of an animated property component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelAddress {
    pub data_path: String,
    pub array_index: usize,
    pub group: Option<String>,
}

/// A keyed scalar property: one component of one bone's translation.
#[derive(Debug, Clone)]
pub struct Channel {
    pub address: ChannelAddress,
    pub keys: KeyframeChannel,
}

impl Channel {
    #[must_use]
    pub fn new(address: ChannelAddress, keys: KeyframeChannel) -> Self {
        Self { address, keys }
    }
}

/// A named bundle of channels.
#[derive(Debug, Clone, Default)]
pub struct AnimationClip {
    pub name: String,
    channels: Vec<Channel>,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channels: Vec::new(),
        }
    }

    /// Appends a channel and returns its index.
    pub fn add_channel(&mut self, channel: Channel) -> usize {
        self.channels.push(channel);
        self.channels.len() - 1
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[must_use]
    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    pub fn channel_mut(&mut self, index: usize) -> Option<&mut Channel> {
        self.channels.get_mut(index)
    }

    /// First and last key time over every channel.
    #[must_use]
    pub fn frame_range(&self) -> Option<(f32, f32)> {
        self.channels
            .iter()
            .filter_map(|c| Some((c.keys.keys().first()?.time, c.keys.keys().last()?.time)))
            .reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)))
    }
}
