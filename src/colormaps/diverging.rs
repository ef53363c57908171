//! Diverging ramps (two-hue progression with center).
//!
//! These ramps are suitable for data that diverges from a critical value,
//! such as anomalies or signed differences. The critical value is stored as
//! a position in `[0, 1]` along the ramp.

use colorgrad::Gradient;

/// Position of the neutral color for all built-in diverging ramps
pub const CRITICAL_VALUE: f64 = 0.5;

/// Coolwarm - blue to red through light gray, good for temperature data
pub const COOLWARM: &[[u8; 3]] = &[
    [59, 76, 192], // Dark blue
    [68, 90, 204],
    [77, 104, 215],
    [87, 117, 225],
    [98, 130, 234],
    [108, 142, 241],
    [119, 154, 247],
    [130, 165, 251],
    [141, 176, 254],
    [152, 185, 255],
    [163, 194, 255],
    [174, 201, 253],
    [184, 208, 249],
    [194, 213, 244],
    [204, 217, 238],
    [213, 219, 230],
    [221, 221, 221], // Gray in the middle
    [229, 216, 209],
    [236, 211, 197],
    [241, 204, 185],
    [245, 196, 173],
    [247, 187, 160],
    [247, 177, 148],
    [247, 166, 135],
    [244, 154, 123],
    [241, 141, 111],
    [236, 127, 99],
    [229, 112, 88],
    [222, 96, 77],
    [213, 80, 66],
    [203, 62, 56],
    [192, 40, 47], // Dark red
];

/// Seismic - blue-white-red for anomalies
pub const SEISMIC: &[[u8; 3]] = &[
    [0, 0, 127], // Dark blue
    [0, 0, 191],
    [0, 63, 255],
    [0, 127, 255],
    [0, 191, 255],
    [127, 223, 255],
    [191, 239, 255],
    [255, 255, 255], // White in the middle
    [255, 239, 191],
    [255, 223, 127],
    [255, 191, 0],
    [255, 127, 0],
    [255, 63, 0],
    [191, 0, 0],
    [127, 0, 0], // Dark red
];

/// Fixed diverging palettes
pub const PALETTES: &[(&str, &[[u8; 3]])] = &[("coolwarm", COOLWARM), ("seismic", SEISMIC)];

/// Diverging gradients generated on demand
pub const GRADIENTS: &[(&str, fn() -> Gradient)] = &[
    ("rdbu", colorgrad::rd_bu),
    ("rdylbu", colorgrad::rd_yl_bu),
    ("rdylgn", colorgrad::rd_yl_gn),
    ("rdgy", colorgrad::rd_gy),
    ("spectral", colorgrad::spectral),
    ("brbg", colorgrad::br_bg),
    ("piyg", colorgrad::pi_yg),
    ("prgn", colorgrad::pr_gn),
    ("puor", colorgrad::pu_or),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_are_symmetric_around_center() {
        // Seismic has an odd length with pure white exactly in the middle
        assert_eq!(SEISMIC[SEISMIC.len() / 2], [255, 255, 255]);

        // Both palettes run from blue to red
        for (name, colors) in PALETTES {
            let first = colors[0];
            let last = colors[colors.len() - 1];
            assert!(first[2] > first[0], "{} should start blue", name);
            assert!(last[0] > last[2], "{} should end red", name);
        }
    }

    #[test]
    fn test_gradients_have_neutral_center() {
        for (name, gradient) in GRADIENTS {
            let center = gradient().at(CRITICAL_VALUE).to_rgba8();
            // The neutral midpoint is light in every ColorBrewer diverging scheme
            let lightness = center[0] as u32 + center[1] as u32 + center[2] as u32;
            assert!(lightness > 450, "{} center too dark: {:?}", name, center);
        }
    }
}
