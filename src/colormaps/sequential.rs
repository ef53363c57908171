//! Sequential and cyclic ramps, generated from parametric gradients.
//!
//! Sequential ramps progress from low to high and suit graduated
//! classifications. Cyclic ramps wrap around and suit angular data such as
//! aspect or wind direction.

use colorgrad::Gradient;

/// Sequential gradients
pub const GRADIENTS: &[(&str, fn() -> Gradient)] = &[
    // Perceptually uniform, colorblind-friendly
    ("viridis", colorgrad::viridis),
    ("inferno", colorgrad::inferno),
    ("magma", colorgrad::magma),
    ("plasma", colorgrad::plasma),
    ("cividis", colorgrad::cividis),
    ("turbo", colorgrad::turbo),
    ("warm", colorgrad::warm),
    ("cool", colorgrad::cool),
    ("cubehelix", colorgrad::cubehelix_default),
    // ColorBrewer single hue
    ("blues", colorgrad::blues),
    ("greens", colorgrad::greens),
    ("greys", colorgrad::greys),
    ("oranges", colorgrad::oranges),
    ("purples", colorgrad::purples),
    ("reds", colorgrad::reds),
    // ColorBrewer multi hue
    ("bugn", colorgrad::bu_gn),
    ("bupu", colorgrad::bu_pu),
    ("gnbu", colorgrad::gn_bu),
    ("orrd", colorgrad::or_rd),
    ("pubu", colorgrad::pu_bu),
    ("pubugn", colorgrad::pu_bu_gn),
    ("purd", colorgrad::pu_rd),
    ("rdpu", colorgrad::rd_pu),
    ("ylgn", colorgrad::yl_gn),
    ("ylgnbu", colorgrad::yl_gn_bu),
    ("ylorbr", colorgrad::yl_or_br),
    ("ylorrd", colorgrad::yl_or_rd),
];

/// Cyclic gradients
pub const CYCLIC: &[(&str, fn() -> Gradient)] = &[
    ("rainbow", colorgrad::rainbow),
    ("sinebow", colorgrad::sinebow),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        let g = colorgrad::viridis();
        let (dmin, dmax) = g.domain();
        let start = g.at(dmin).to_rgba8();
        let end = g.at(dmax).to_rgba8();

        // Viridis runs from dark purple to bright yellow
        assert!(start[2] > start[1], "start should be purple: {:?}", start);
        assert!(end[0] > 200 && end[1] > 200, "end should be yellow: {:?}", end);
    }

    #[test]
    fn test_cyclic_wraps() {
        for (name, gradient) in CYCLIC {
            let g = gradient();
            let (dmin, dmax) = g.domain();
            let a = g.at(dmin).to_rgba8();
            let b = g.at(dmax).to_rgba8();
            let diff: i32 = (0..3).map(|i| (a[i] as i32 - b[i] as i32).abs()).sum();
            assert!(diff < 30, "{} does not wrap: {:?} vs {:?}", name, a, b);
        }
    }
}
