//! Rectilinear view extraction from equirectangular mappings.
//!
//! The inverse gnomonic projection renders a camera-like view from an
//! equirectangular mapping or a tile of one. Every output pixel is lifted to
//! a direction on the tangent plane of the virtual camera, rotated into the
//! sphere frame, converted back to longitude and latitude and sampled from
//! the mapping.

use crate::coords::{lonlat_from_direction, lonlat_to_pixel, pixel_to_lonlat, wrap_x, Rotation};
use crate::error::GnomonicError;
use crate::interpolation::{remap, BorderMode, InterpolationMode, PixelMap};
use crate::parallel::ExecutionStrategy;
use norama_image::{Image, ImageSize};

/// Placement of an equirectangular image within the full mapping.
///
/// A whole panorama is the trivial tile at offset zero. A tile is a crop of
/// the full mapping, used to render views from large panoramas without
/// loading the entire image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquirectGeometry {
    /// Size of the full equirectangular mapping in pixels.
    pub full_size: ImageSize,
    /// Offset of the tile within the full mapping in pixels.
    pub tile_offset: (i64, i64),
}

impl EquirectGeometry {
    /// Geometry of a whole equirectangular image.
    pub fn whole(size: ImageSize) -> Self {
        Self {
            full_size: size,
            tile_offset: (0, 0),
        }
    }

    /// Geometry of a tile at the given offset within the full mapping.
    pub fn tile(full_size: ImageSize, offset: (i64, i64)) -> Self {
        Self {
            full_size,
            tile_offset: offset,
        }
    }

    /// Check that a tile of the given size fits inside the full mapping.
    pub fn validate(&self, tile_size: ImageSize) -> Result<(), GnomonicError> {
        let (ox, oy) = self.tile_offset;
        let fits = ox >= 0
            && oy >= 0
            && ox as usize + tile_size.width <= self.full_size.width
            && oy as usize + tile_size.height <= self.full_size.height;

        if !fits {
            return Err(GnomonicError::InvalidTile(
                tile_size.width,
                tile_size.height,
                ox,
                oy,
                self.full_size.width,
                self.full_size.height,
            ));
        }

        Ok(())
    }
}

/// The virtual rectilinear camera of the inverse projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectilinearCamera {
    /// Size of the rendered view in pixels.
    pub size: ImageSize,
    /// Focal length expressed in output pixels.
    pub focal_px: f64,
}

impl RectilinearCamera {
    /// Camera from a horizontal aperture angle in degrees.
    ///
    /// The gnomonic projection is only defined for apertures below half a
    /// turn.
    pub fn from_aperture(size: ImageSize, aperture_deg: f64) -> Result<Self, GnomonicError> {
        if !(aperture_deg > 0.0 && aperture_deg < 180.0) {
            return Err(GnomonicError::InvalidAperture(aperture_deg));
        }

        let focal_px = size.width as f64 / 2.0 / (aperture_deg.to_radians() / 2.0).tan();
        Ok(Self { size, focal_px })
    }

    /// Camera from a focal length and a pixel pitch, both in millimeters.
    pub fn from_focal(
        size: ImageSize,
        focal_mm: f64,
        pixel_mm: f64,
    ) -> Result<Self, GnomonicError> {
        if !(focal_mm > 0.0 && pixel_mm > 0.0) {
            return Err(GnomonicError::InvalidFocal(focal_mm, pixel_mm));
        }

        Ok(Self {
            size,
            focal_px: focal_mm / pixel_mm,
        })
    }
}

/// Derive view azimuth and elevation, in degrees, from a sight position on
/// the full equirectangular mapping.
///
/// The sight position is given in floating pixels. The heading angle is an
/// azimuth correction added on top of the longitude of the sight pixel.
pub fn view_from_sight(
    geometry: &EquirectGeometry,
    sight_x: f64,
    sight_y: f64,
    heading_deg: f64,
) -> (f64, f64) {
    let (lon, lat) = pixel_to_lonlat(sight_x, sight_y, geometry.full_size);
    (lon.to_degrees() + heading_deg, lat.to_degrees())
}

/// Render a rectilinear view from an equirectangular mapping tile.
///
/// # Arguments
///
/// * `src` - The equirectangular tile with shape (height, width, C).
/// * `dst` - The output rectilinear view; its size must match the camera.
/// * `geometry` - Placement of the tile within the full mapping.
/// * `camera` - The virtual rectilinear camera.
/// * `rotation` - View orientation from azimuth, elevation and roll.
/// * `interpolation` - The interpolation mode to use.
/// * `strategy` - The execution strategy for the per-row processing.
/// * `background` - The pixel written where the view leaves the tile.
///
/// # Errors
///
/// The tile must fit inside the full mapping and the destination size must
/// match the camera size.
#[allow(clippy::too_many_arguments)]
pub fn invert_gnomonic<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    geometry: &EquirectGeometry,
    camera: &RectilinearCamera,
    rotation: &Rotation,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
    background: [f32; C],
) -> Result<(), GnomonicError> {
    geometry.validate(src.size())?;

    if dst.size() != camera.size {
        return Err(norama_image::ImageError::InvalidImageSize(
            camera.size.width,
            camera.size.height,
            dst.width(),
            dst.height(),
        )
        .into());
    }

    let full = geometry.full_size;
    let (tile_w, tile_h) = (src.width(), src.height());
    let (off_x, off_y) = geometry.tile_offset;

    // a tile spanning the full mapping width wraps across the longitude seam
    let spans_width = off_x == 0 && tile_w == full.width;
    let spans_height = off_y == 0 && tile_h == full.height;

    let border = if spans_width {
        BorderMode::WrapX
    } else {
        BorderMode::Clamp
    };

    let cx = (camera.size.width as f64 - 1.0) / 2.0;
    let cy = (camera.size.height as f64 - 1.0) / 2.0;
    let focal = camera.focal_px;

    let map = PixelMap::from_fn(camera.size, |u, v| {
        // tangent plane direction: x forward, y screen-right, z screen-up
        let su = u as f64 - cx;
        let sv = v as f64 - cy;
        let dir = rotation.apply([focal, su, -sv]);

        let (lon, lat) = lonlat_from_direction(dir);
        let (xf, yf) = lonlat_to_pixel(lon, lat, full);

        let xt = wrap_x(xf, full.width) - off_x as f64;

        let mut yt = yf - off_y as f64;
        if spans_height {
            yt = yt.min((tile_h - 1) as f64);
        }

        // with a seam-wrapping tile every longitude has a source column
        let inside_x = spans_width || (0.0..=(tile_w - 1) as f64).contains(&xt);
        let inside_y = (0.0..=(tile_h - 1) as f64).contains(&yt);
        (inside_x && inside_y).then_some((xt as f32, yt as f32))
    });

    remap(src, dst, &map, interpolation, border, strategy, background)
}
