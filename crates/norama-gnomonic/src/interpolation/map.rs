use norama_image::ImageSize;

/// A per-pixel source coordinate map for remapping operations.
///
/// For each destination pixel the map stores the floating source coordinates
/// to sample from. Destination pixels with no source, such as view directions
/// falling outside an equirectangular tile, carry non-finite coordinates and
/// receive the background color during remapping.
#[derive(Debug, Clone)]
pub struct PixelMap {
    x: Vec<f32>,
    y: Vec<f32>,
    size: ImageSize,
}

impl PixelMap {
    /// Build a coordinate map by evaluating `f` at every destination pixel.
    ///
    /// `f` returns the source coordinates for a destination pixel, or `None`
    /// when the pixel has no source.
    pub fn from_fn(size: ImageSize, f: impl Fn(usize, usize) -> Option<(f32, f32)>) -> Self {
        let mut x = Vec::with_capacity(size.width * size.height);
        let mut y = Vec::with_capacity(size.width * size.height);

        for r in 0..size.height {
            for c in 0..size.width {
                match f(c, r) {
                    Some((sx, sy)) => {
                        x.push(sx);
                        y.push(sy);
                    }
                    None => {
                        x.push(f32::NAN);
                        y.push(f32::NAN);
                    }
                }
            }
        }

        Self { x, y, size }
    }

    /// The size of the destination grid.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Source x-coordinates, row-major.
    pub fn x(&self) -> &[f32] {
        &self.x
    }

    /// Source y-coordinates, row-major.
    pub fn y(&self) -> &[f32] {
        &self.y
    }
}

#[cfg(test)]
mod tests {
    use super::PixelMap;
    use norama_image::ImageSize;

    #[test]
    fn from_fn_layout() {
        let map = PixelMap::from_fn(
            ImageSize {
                width: 2,
                height: 2,
            },
            |x, y| Some((x as f32, y as f32)),
        );
        assert_eq!(map.x(), &[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(map.y(), &[0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn from_fn_marks_missing_sources() {
        let map = PixelMap::from_fn(
            ImageSize {
                width: 2,
                height: 1,
            },
            |x, _| if x == 0 { Some((0.0, 0.0)) } else { None },
        );
        assert!(map.x()[1].is_nan());
        assert!(map.y()[1].is_nan());
    }
}
