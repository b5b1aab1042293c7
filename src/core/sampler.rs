use rand::Rng;

use crate::domain::model::Color;
use crate::domain::ports::ChannelSource;

/// Channel source backed by the process-wide thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl ChannelSource for ThreadRngSource {
    fn next_channel(&mut self) -> u8 {
        rand::rng().random()
    }
}

/// Sample one color, drawing the r, g and b channels in that order.
pub fn random_color<S: ChannelSource>(source: &mut S) -> Color {
    let r = source.next_channel();
    let g = source.next_channel();
    let b = source.next_channel();
    Color::new(r, g, b)
}
