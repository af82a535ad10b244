//! Gamma decode for 8-bit channels
//!
//! The table is generated by build.rs; scans are 8-bit so every channel value
//! has an exact entry and no interpolation is needed.

include!(concat!(env!("OUT_DIR"), "/gamma_table.rs"));

/// IEC 61966-2-1 gamma decode for a channel in 0.0..=1.0.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Gamma decode for an 8-bit channel via the precomputed table.
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}
