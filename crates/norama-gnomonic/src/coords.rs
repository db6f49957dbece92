//! Spherical and equirectangular coordinate conversions.
//!
//! The equirectangular mapping is the linear chart between pixel coordinates
//! and spherical angles: longitude spans `[-pi, pi)` over the mapping width
//! and latitude spans `[pi/2, -pi/2]` from the top row to the bottom row.
//! Directions are unit vectors with x pointing at longitude/latitude zero and
//! z pointing at the north pole.

use std::f64::consts::PI;

use norama_image::ImageSize;

/// Convert a pixel position on the full equirectangular mapping into
/// longitude and latitude in radians.
///
/// # Arguments
///
/// * `x` - The x-coordinate of the pixel, in floating pixels.
/// * `y` - The y-coordinate of the pixel, in floating pixels.
/// * `size` - The size of the full equirectangular mapping.
pub fn pixel_to_lonlat(x: f64, y: f64, size: ImageSize) -> (f64, f64) {
    let lon = x / size.width as f64 * 2.0 * PI - PI;
    let lat = PI / 2.0 - y / size.height as f64 * PI;
    (lon, lat)
}

/// Convert longitude and latitude in radians into a pixel position on the
/// full equirectangular mapping.
///
/// The inverse of [`pixel_to_lonlat`]. The returned coordinates are not
/// wrapped nor clamped to the mapping bounds.
pub fn lonlat_to_pixel(lon: f64, lat: f64, size: ImageSize) -> (f64, f64) {
    let x = (lon + PI) / (2.0 * PI) * size.width as f64;
    let y = (PI / 2.0 - lat) / PI * size.height as f64;
    (x, y)
}

/// Unit direction vector for the given longitude and latitude in radians.
pub fn direction(lon: f64, lat: f64) -> [f64; 3] {
    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

/// Longitude and latitude in radians of the given direction vector.
///
/// The vector does not need to be normalized. Latitude is clamped at the
/// poles to guard against rounding outside `[-1, 1]` after rotations.
pub fn lonlat_from_direction(dir: [f64; 3]) -> (f64, f64) {
    let norm = (dir[0] * dir[0] + dir[1] * dir[1] + dir[2] * dir[2]).sqrt();
    let lon = dir[1].atan2(dir[0]);
    let lat = (dir[2] / norm).clamp(-1.0, 1.0).asin();
    (lon, lat)
}

/// Wrap a floating pixel x-coordinate into `[0, width)` across the
/// longitude seam of the mapping.
pub fn wrap_x(x: f64, width: usize) -> f64 {
    let width = width as f64;
    let x = x % width;
    if x < 0.0 {
        x + width
    } else {
        x
    }
}

/// A 3D rotation composed from the azimuth, elevation and roll angles of
/// the panorama tools.
///
/// Azimuth rotates about the z axis (positive pans toward increasing
/// longitude), elevation about the y axis (positive tilts up) and roll about
/// the x axis (the view axis), applied in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation([[f64; 3]; 3]);

impl Rotation {
    /// The identity rotation.
    pub fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Build the rotation from azimuth, elevation and roll angles in degrees.
    pub fn from_angles_deg(azimuth: f64, elevation: f64, roll: f64) -> Self {
        let az = azimuth.to_radians();
        let el = elevation.to_radians();
        let rl = roll.to_radians();

        let (sin_az, cos_az) = az.sin_cos();
        let (sin_el, cos_el) = el.sin_cos();
        let (sin_rl, cos_rl) = rl.sin_cos();

        // Rz(azimuth), Ry(-elevation) so that positive elevation tilts the
        // view toward the north pole, Rx(roll).
        let rz = [
            [cos_az, -sin_az, 0.0],
            [sin_az, cos_az, 0.0],
            [0.0, 0.0, 1.0],
        ];
        let ry = [
            [cos_el, 0.0, -sin_el],
            [0.0, 1.0, 0.0],
            [sin_el, 0.0, cos_el],
        ];
        let rx = [
            [1.0, 0.0, 0.0],
            [0.0, cos_rl, -sin_rl],
            [0.0, sin_rl, cos_rl],
        ];

        Self(mat_mul(&mat_mul(&rz, &ry), &rx))
    }

    /// The inverse rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Apply the rotation to a direction vector.
    pub fn apply(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }
}

fn mat_mul(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SIZE: ImageSize = ImageSize {
        width: 1024,
        height: 512,
    };

    #[test]
    fn pixel_lonlat_round_trip() {
        for &(x, y) in &[(0.0, 0.0), (512.0, 256.0), (1023.5, 511.5), (100.25, 3.5)] {
            let (lon, lat) = pixel_to_lonlat(x, y, SIZE);
            let (xb, yb) = lonlat_to_pixel(lon, lat, SIZE);
            assert_relative_eq!(xb, x, epsilon = 1e-9);
            assert_relative_eq!(yb, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn mapping_center_is_origin() {
        let (lon, lat) = pixel_to_lonlat(512.0, 256.0, SIZE);
        assert_relative_eq!(lon, 0.0, epsilon = 1e-12);
        assert_relative_eq!(lat, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn top_row_is_north_pole() {
        let (_, lat) = pixel_to_lonlat(0.0, 0.0, SIZE);
        assert_relative_eq!(lat, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn direction_round_trip() {
        for &(lon, lat) in &[(0.0, 0.0), (1.2, -0.7), (-2.9, 1.1), (3.0, 0.2)] {
            let (lon_b, lat_b) = lonlat_from_direction(direction(lon, lat));
            assert_relative_eq!(lon_b, lon, epsilon = 1e-12);
            assert_relative_eq!(lat_b, lat, epsilon = 1e-12);
        }
    }

    #[test]
    fn wrap_x_seam() {
        assert_relative_eq!(wrap_x(-1.0, 1024), 1023.0);
        assert_relative_eq!(wrap_x(1024.5, 1024), 0.5);
        assert_relative_eq!(wrap_x(100.0, 1024), 100.0);
    }

    #[test]
    fn azimuth_pans_toward_increasing_longitude() {
        let rot = Rotation::from_angles_deg(90.0, 0.0, 0.0);
        let v = rot.apply(direction(0.0, 0.0));
        let (lon, lat) = lonlat_from_direction(v);
        assert_relative_eq!(lon, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(lat, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn elevation_tilts_up() {
        let rot = Rotation::from_angles_deg(0.0, 45.0, 0.0);
        let v = rot.apply(direction(0.0, 0.0));
        let (lon, lat) = lonlat_from_direction(v);
        assert_relative_eq!(lon, 0.0, epsilon = 1e-12);
        assert_relative_eq!(lat, std::f64::consts::FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn roll_keeps_view_axis() {
        let rot = Rotation::from_angles_deg(30.0, -20.0, 75.0);
        let no_roll = Rotation::from_angles_deg(30.0, -20.0, 0.0);
        let v = rot.apply(direction(0.0, 0.0));
        let v_ref = no_roll.apply(direction(0.0, 0.0));
        for k in 0..3 {
            assert_relative_eq!(v[k], v_ref[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn transpose_inverts() {
        let rot = Rotation::from_angles_deg(12.0, 34.0, 56.0);
        let inv = rot.transpose();
        let v = [0.3, -0.5, 0.81];
        let back = inv.apply(rot.apply(v));
        for k in 0..3 {
            assert_relative_eq!(back[k], v[k], epsilon = 1e-12);
        }
    }
}
