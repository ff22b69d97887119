//! Packed RGB color helpers
//!
//! Sprite tints travel as `0xRRGGBB` integers so the stage layer can
//! hand them straight to a renderer without a color struct in between.

/// Packs three 8-bit channels into a `0xRRGGBB` value.
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Splits a `0xRRGGBB` value back into channels.
pub const fn rgb_channels(tint: u32) -> (u8, u8, u8) {
    (
        ((tint >> 16) & 0xFF) as u8,
        ((tint >> 8) & 0xFF) as u8,
        (tint & 0xFF) as u8,
    )
}
