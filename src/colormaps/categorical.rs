//! Fixed categorical palettes.
//!
//! Categorized layers take these colors verbatim, one per category, so that
//! each category keeps a distinct hue instead of an interpolated shade.

/// Tableau 10
pub const TABLEAU10: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f",
    "#edc948", "#b07aa1", "#ff9da7", "#9c755f", "#bab0ac",
];

/// D3 Category 10
pub const CATEGORY10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// ColorBrewer Set1
pub const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00",
    "#ffff33", "#a65628", "#f781bf", "#999999",
];

/// ColorBrewer Set2
pub const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854",
    "#ffd92f", "#e5c494", "#b3b3b3",
];

/// ColorBrewer Set3
pub const SET3: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3",
    "#fdb462", "#b3de69", "#fccde5", "#d9d9d9", "#bc80bd",
    "#ccebc5", "#ffed6f",
];

/// ColorBrewer Pastel1
pub const PASTEL1: &[&str] = &[
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6",
    "#ffffcc", "#e5d8bd", "#fddaec", "#f2f2f2",
];

/// ColorBrewer Pastel2
pub const PASTEL2: &[&str] = &[
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9",
    "#fff2ae", "#f1e2cc", "#cccccc",
];

/// ColorBrewer Dark2
pub const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e",
    "#e6ab02", "#a6761d", "#666666",
];

/// ColorBrewer Paired
pub const PAIRED: &[&str] = &[
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99",
    "#e31a1c", "#fdbf6f", "#ff7f00", "#cab2d6", "#6a3d9a",
    "#ffff99", "#b15928",
];

/// ColorBrewer Accent
pub const ACCENT: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0",
    "#f0027f", "#bf5b17", "#666666",
];

/// Every categorical palette with its catalog name
pub const PALETTES: &[(&str, &[&str])] = &[
    ("tableau10", TABLEAU10),
    ("category10", CATEGORY10),
    ("set1", SET1),
    ("set2", SET2),
    ("set3", SET3),
    ("pastel1", PASTEL1),
    ("pastel2", PASTEL2),
    ("dark2", DARK2),
    ("paired", PAIRED),
    ("accent", ACCENT),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::Rgba;

    #[test]
    fn test_palettes_parse() {
        for (name, colors) in PALETTES {
            assert!(!colors.is_empty(), "{} is empty", name);
            for hex in colors.iter() {
                assert!(Rgba::from_hex(hex).is_ok(), "{}: bad color {}", name, hex);
            }
        }
    }

    #[test]
    fn test_palette_names_unique() {
        let mut names: Vec<&str> = PALETTES.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PALETTES.len());
    }
}
