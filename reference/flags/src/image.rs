//! Flag image values.

use bytes::Bytes;

/// Display width of a flag, in pixels.
pub const FLAG_WIDTH: u32 = 32;
/// Display height of a flag, in pixels.
pub const FLAG_HEIGHT: u32 = 24;
/// Fill colour of the placeholder (`#cccccc`).
pub const PLACEHOLDER_COLOR: [u8; 3] = [0xcc, 0xcc, 0xcc];

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// A displayable flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagImage {
    /// Encoded PNG as served by the icon source.
    Png(Bytes),
    /// Solid-colour stand-in.
    Placeholder {
        width: u32,
        height: u32,
        color: [u8; 3],
    },
}

impl FlagImage {
    /// The grey placeholder used when a flag can't be loaded.
    pub fn placeholder() -> Self {
        FlagImage::Placeholder {
            width: FLAG_WIDTH,
            height: FLAG_HEIGHT,
            color: PLACEHOLDER_COLOR,
        }
    }

    /// Check whether the bytes start with the PNG signature.
    pub fn is_png(data: &[u8]) -> bool {
        data.starts_with(PNG_SIGNATURE)
    }

    /// Check whether this is the placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, FlagImage::Placeholder { .. })
    }
}
