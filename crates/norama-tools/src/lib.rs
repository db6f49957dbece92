#![deny(missing_docs)]
//! Shared helpers for the norama command line tools

/// The background pixel for RGB processing, from the clear color options.
///
/// Without the clear switch the created image content defaults to black.
pub fn clear_color_rgb(clear: bool, red: u8, green: u8, blue: u8) -> [f32; 3] {
    if clear {
        [red as f32, green as f32, blue as f32]
    } else {
        [0.0; 3]
    }
}

/// The background pixel for grayscale processing, as the Rec. 601 luma of
/// the clear color options.
pub fn clear_color_mono(clear: bool, red: u8, green: u8, blue: u8) -> [f32; 1] {
    if clear {
        [0.299 * red as f32 + 0.587 * green as f32 + 0.114 * blue as f32]
    } else {
        [0.0]
    }
}
