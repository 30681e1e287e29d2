//! Per-column extent extraction: the vertical span of dark pixels in each
//! image column, read left to right as a sample sequence.

use crate::config::TraceConfig;
use crate::raster::Raster;

/// Scan every column of the raster and emit its (min, max) dark-row pair.
///
/// Output length is 2·width: element 2i is the smallest row index of a dark
/// pixel in column i, element 2i+1 the largest. A column with no dark pixel
/// keeps the init values — min = height, max = 0. That sentinel pair is
/// observable downstream and deliberate, not an error.
pub fn extract_extents<R: Raster>(raster: &R, config: &TraceConfig) -> Vec<u32> {
    let width = raster.width();
    let height = raster.height();
    let mut values = Vec::with_capacity(2 * width as usize);

    for x in 0..width {
        let mut min = height;
        let mut max = 0;

        for y in 0..height {
            if raster.brightness(x, y) < config.dark_threshold {
                min = min.min(y);
                max = max.max(y);
            }
        }

        values.push(min);
        values.push(max);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Raster backed by a set of dark coordinates; everything else is white.
    struct DotRaster {
        width: u32,
        height: u32,
        dark: Vec<(u32, u32)>,
    }

    impl Raster for DotRaster {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn brightness(&self, x: u32, y: u32) -> f32 {
            if self.dark.contains(&(x, y)) { 0.0 } else { 1.0 }
        }
    }

    #[test]
    fn test_column_min_max() {
        let raster = DotRaster {
            width: 1,
            height: 10,
            dark: vec![(0, 2), (0, 5), (0, 7)],
        };
        let values = extract_extents(&raster, &TraceConfig::default());
        assert_eq!(values, vec![2, 7]);
    }

    #[test]
    fn test_empty_column_sentinel_pair() {
        let raster = DotRaster {
            width: 3,
            height: 8,
            dark: vec![(1, 4)],
        };
        let values = extract_extents(&raster, &TraceConfig::default());
        // Columns 0 and 2 have no dark pixels: (height, 0) exactly.
        assert_eq!(values, vec![8, 0, 4, 4, 8, 0]);
    }

    #[test]
    fn test_output_length_is_twice_width() {
        let raster = DotRaster {
            width: 5,
            height: 3,
            dark: vec![],
        };
        let values = extract_extents(&raster, &TraceConfig::default());
        assert_eq!(values.len(), 10);
    }

    #[test]
    fn test_single_dark_pixel_collapses_span() {
        let raster = DotRaster {
            width: 1,
            height: 10,
            dark: vec![(0, 6)],
        };
        let values = extract_extents(&raster, &TraceConfig::default());
        assert_eq!(values, vec![6, 6]);
    }
}
