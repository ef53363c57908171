//! Stop lists: ordered `(threshold, color)` pairs.
//!
//! Edits do not keep the list sorted. Interactive authoring moves stops
//! around freely and the list is sorted once, with
//! [`StopList::sort_by_threshold`], when the edit is committed.

use serde::{Deserialize, Serialize};
use std::slice;

use crate::colormaps::Color;
use crate::error::{ensure_finite, Result, SymbologyError};

/// A threshold and the color applied from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub threshold: f64,
    pub color: Color,
}

impl Stop {
    pub fn new(threshold: f64, color: impl Into<Color>) -> Self {
        Self {
            threshold,
            color: color.into(),
        }
    }
}

/// An ordered sequence of stops
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopList(Vec<Stop>);

impl StopList {
    /// An empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair breaks with colors positionally.
    ///
    /// Both slices must have the same length and every break must be finite.
    pub fn build(breaks: &[f64], colors: &[Color]) -> Result<Self> {
        if breaks.len() != colors.len() {
            return Err(SymbologyError::LengthMismatch {
                breaks: breaks.len(),
                colors: colors.len(),
            });
        }
        ensure_finite(breaks, "breaks")?;

        Ok(breaks
            .iter()
            .zip(colors)
            .map(|(&threshold, color)| Stop::new(threshold, color.clone()))
            .collect())
    }

    /// Add a stop at the front of the list, without re-sorting
    pub fn insert(mut self, stop: Stop) -> Self {
        self.0.insert(0, stop);
        self
    }

    /// Stable ascending sort by threshold
    pub fn sort_by_threshold(mut self) -> Self {
        self.0.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        self
    }

    /// Remove the stop at `index`
    pub fn remove_at(mut self, index: usize) -> Result<Self> {
        self.check_index(index)?;
        self.0.remove(index);
        Ok(self)
    }

    /// Move the stop at `index` to a new threshold, without re-sorting
    pub fn set_threshold(mut self, index: usize, threshold: f64) -> Result<Self> {
        self.check_index(index)?;
        ensure_finite(&[threshold], "threshold")?;
        self.0[index].threshold = threshold;
        Ok(self)
    }

    /// Recolor the stop at `index`
    pub fn set_color(mut self, index: usize, color: impl Into<Color>) -> Result<Self> {
        self.check_index(index)?;
        self.0[index].color = color.into();
        Ok(self)
    }

    /// Round every threshold to `decimals` decimal places
    pub fn round_thresholds(mut self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals as i32);
        for stop in &mut self.0 {
            stop.threshold = (stop.threshold * factor).round() / factor;
        }
        self
    }

    /// Whether thresholds are non-decreasing
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|w| w[0].threshold <= w[1].threshold)
    }

    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Stop> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Stop] {
        &self.0
    }

    /// Thresholds in list order
    pub fn thresholds(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.threshold).collect()
    }

    /// Colors in list order
    pub fn colors(&self) -> Vec<Color> {
        self.0.iter().map(|s| s.color.clone()).collect()
    }

    pub fn into_inner(self) -> Vec<Stop> {
        self.0
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.0.len() {
            return Err(SymbologyError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<Stop>> for StopList {
    fn from(stops: Vec<Stop>) -> Self {
        Self(stops)
    }
}

impl FromIterator<Stop> for StopList {
    fn from_iter<I: IntoIterator<Item = Stop>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for StopList {
    type Item = Stop;
    type IntoIter = std::vec::IntoIter<Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StopList {
    type Item = &'a Stop;
    type IntoIter = slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::Rgba;

    fn colors(n: usize) -> Vec<Color> {
        (0..n)
            .map(|i| Color::Rgba(Rgba::opaque(i as u8 * 10, 0, 0)))
            .collect()
    }

    #[test]
    fn test_build_zips_positionally() {
        let list = StopList::build(&[1.0, 2.0, 3.0], &colors(3)).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.thresholds(), vec![1.0, 2.0, 3.0]);
        assert_eq!(list.get(2).unwrap().color, colors(3)[2]);
    }

    #[test]
    fn test_build_length_mismatch() {
        let err = StopList::build(&[1.0, 2.0], &colors(3)).unwrap_err();
        assert!(matches!(
            err,
            SymbologyError::LengthMismatch {
                breaks: 2,
                colors: 3
            }
        ));
    }

    #[test]
    fn test_build_rejects_nan() {
        let err = StopList::build(&[1.0, f64::NAN], &colors(2)).unwrap_err();
        assert!(matches!(err, SymbologyError::NonFiniteValue { .. }));
    }

    #[test]
    fn test_insert_does_not_sort() {
        let list = StopList::build(&[1.0, 2.0], &colors(2))
            .unwrap()
            .insert(Stop::new(5.0, "#ffffff"));
        assert_eq!(list.thresholds(), vec![5.0, 1.0, 2.0]);
        assert!(!list.is_sorted());

        let list = list.sort_by_threshold();
        assert_eq!(list.thresholds(), vec![1.0, 2.0, 5.0]);
        assert!(list.is_sorted());
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let list: StopList = vec![
            Stop::new(2.0, "a"),
            Stop::new(1.0, "b"),
            Stop::new(2.0, "c"),
            Stop::new(0.5, "d"),
        ]
        .into();

        let once = list.sort_by_threshold();
        let names: Vec<String> = once.colors().iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["d", "b", "a", "c"]);

        let twice = once.clone().sort_by_threshold();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_at() {
        let list = StopList::build(&[1.0, 2.0, 3.0], &colors(3)).unwrap();
        let list = list.remove_at(1).unwrap();
        assert_eq!(list.thresholds(), vec![1.0, 3.0]);

        let err = list.remove_at(2).unwrap_err();
        assert!(matches!(
            err,
            SymbologyError::IndexOutOfRange { index: 2, len: 2 }
        ));
    }

    #[test]
    fn test_edits() {
        let list = StopList::build(&[1.0, 2.0], &colors(2))
            .unwrap()
            .set_threshold(0, 4.0)
            .unwrap()
            .set_color(1, "#00ff00")
            .unwrap();
        assert_eq!(list.thresholds(), vec![4.0, 2.0]);
        assert_eq!(list.get(1).unwrap().color, Color::from("#00ff00"));

        assert!(list.clone().set_threshold(0, f64::INFINITY).is_err());
        assert!(list.set_color(9, "#000000").is_err());
    }

    #[test]
    fn test_round_thresholds() {
        let list = StopList::build(&[1.23456, 2.0, 3.005001], &colors(3))
            .unwrap()
            .round_thresholds(2);
        assert_eq!(list.thresholds(), vec![1.23, 2.0, 3.01]);
    }

    #[test]
    fn test_serde_is_a_plain_array() {
        let list = StopList::build(&[0.5], &[Color::from("#ff0000")]).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r##"[{"threshold":0.5,"color":"#ff0000"}]"##);

        let back: StopList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
