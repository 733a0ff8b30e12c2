//! Color constants used by the standard toy tables.

use palette::Srgb;

/// LED off.
pub const OFF: Srgb<u8> = Srgb::new(0x00, 0x00, 0x00);

/// Full red.
pub const RED: Srgb<u8> = Srgb::new(0xFF, 0x00, 0x00);

/// Dim red.
pub const RED_LOW: Srgb<u8> = Srgb::new(0x0F, 0x00, 0x00);

/// Full green.
pub const GREEN: Srgb<u8> = Srgb::new(0x00, 0xFF, 0x00);

/// Dim green.
pub const GREEN_LOW: Srgb<u8> = Srgb::new(0x00, 0x0F, 0x00);

/// Full blue.
pub const BLUE: Srgb<u8> = Srgb::new(0x00, 0x00, 0xFF);

/// Dim blue.
pub const BLUE_LOW: Srgb<u8> = Srgb::new(0x00, 0x00, 0x0F);

/// Red with half blue, used by the victory blink.
pub const MAGENTA: Srgb<u8> = Srgb::new(0xFF, 0x00, 0x7F);
