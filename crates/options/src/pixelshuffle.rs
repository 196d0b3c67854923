//! Options for rearranging channels into spatial resolution.

use serde::{Deserialize, Serialize};

/// Options for the `PixelShuffle` module.
///
/// ```
/// use options::PixelShuffleOptions;
///
/// let options = PixelShuffleOptions::new(5);
/// assert_eq!(options.upscale_factor, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelShuffleOptions {
    /// Factor to increase spatial resolution by.
    pub upscale_factor: i64,
}

impl PixelShuffleOptions {
    pub fn new(upscale_factor: i64) -> Self {
        Self { upscale_factor }
    }

    setters! {
        with_upscale_factor => upscale_factor: i64,
    }
}
