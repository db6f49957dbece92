use argh::FromArgs;
use std::path::PathBuf;

use norama_gnomonic::coords::Rotation;
use norama_gnomonic::interpolation::InterpolationMode;
use norama_gnomonic::parallel::ExecutionStrategy;
use norama_gnomonic::projection::{
    invert_gnomonic, view_from_sight, EquirectGeometry, RectilinearCamera,
};
use norama_image::{Image, ImageSize};
use norama_io::functional as F;
use norama_io::GenericImage;
use norama_tools::{clear_color_mono, clear_color_rgb};

#[derive(FromArgs)]
/// Extract a rectilinear view from an equirectangular panorama
struct Args {
    /// input equirectangular image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// output rectilinear image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// azimuth angle in degrees, rotation along the z axis
    #[argh(option, short = 'a', default = "0.0")]
    azimuth: f64,

    /// elevation angle in degrees, rotation along the y axis
    #[argh(option, short = 'e', default = "0.0")]
    elevation: f64,

    /// roll angle in degrees, rotation along the x axis
    #[argh(option, short = 'r', default = "0.0")]
    roll: f64,

    /// heading angle in degrees, azimuth correction for the sight mode
    #[argh(option, short = 'd', default = "0.0")]
    heading: f64,

    /// aperture angle of the view in degrees
    #[argh(option, short = 'u')]
    aperture: Option<f64>,

    /// rectilinear focal length in millimeters
    #[argh(option, short = 'f')]
    focal: Option<f64>,

    /// rectilinear pixel length in millimeters
    #[argh(option, short = 'p')]
    pixel: Option<f64>,

    /// projection x-sight in floating pixels on the full mapping
    #[argh(option, short = 'x')]
    sight_x: Option<f64>,

    /// projection y-sight in floating pixels on the full mapping
    #[argh(option, short = 'y')]
    sight_y: Option<f64>,

    /// rectilinear image width in pixels
    #[argh(option, short = 'k', default = "512")]
    width: usize,

    /// rectilinear image height in pixels
    #[argh(option, short = 'l', default = "512")]
    height: usize,

    /// entire equirectangular mapping width in pixels
    #[argh(option, short = 'W')]
    map_width: Option<usize>,

    /// entire equirectangular mapping height in pixels
    #[argh(option, short = 'H')]
    map_height: Option<usize>,

    /// equirectangular tile x-position in pixels
    #[argh(option, short = 'X', default = "0")]
    tile_x: i64,

    /// equirectangular tile y-position in pixels
    #[argh(option, short = 'Y', default = "0")]
    tile_y: i64,

    /// number of threads, zero selects the global pool
    #[argh(option, short = 't', default = "0")]
    threads: usize,

    /// interpolation method tag, defaults to bicubicf
    #[argh(option, short = 'n', default = "String::from(\"bicubicf\")")]
    interpolation: String,

    /// force the input image into the RGB format
    #[argh(switch, short = 'F')]
    force_rgb: bool,

    /// clear the created image content with the clear color
    #[argh(switch, short = 'C')]
    clear: bool,

    /// red component of the clear color
    #[argh(option, short = 'R', default = "0")]
    red: u8,

    /// green component of the clear color
    #[argh(option, short = 'G', default = "0")]
    green: u8,

    /// blue component of the clear color
    #[argh(option, short = 'B', default = "0")]
    blue: u8,
}

fn render<const C: usize>(
    src: &Image<u8, C>,
    args: &Args,
    background: [f32; C],
) -> Result<Image<u8, C>, Box<dyn std::error::Error>> {
    let geometry = EquirectGeometry::tile(
        ImageSize {
            width: args.map_width.unwrap_or(src.width()),
            height: args.map_height.unwrap_or(src.height()),
        },
        (args.tile_x, args.tile_y),
    );

    let out_size = ImageSize {
        width: args.width,
        height: args.height,
    };

    // projection mode: sight position, then focal length, then aperture
    let (camera, azimuth, elevation) = match (
        args.sight_x,
        args.sight_y,
        args.focal,
        args.pixel,
        args.aperture,
    ) {
        (Some(sx), Some(sy), Some(focal), Some(pixel), _) => {
            let (az, el) = view_from_sight(&geometry, sx, sy, args.heading);
            (RectilinearCamera::from_focal(out_size, focal, pixel)?, az, el)
        }
        (None, None, Some(focal), Some(pixel), _) => (
            RectilinearCamera::from_focal(out_size, focal, pixel)?,
            args.azimuth,
            args.elevation,
        ),
        (None, None, None, None, Some(aperture)) => (
            RectilinearCamera::from_aperture(out_size, aperture)?,
            args.azimuth,
            args.elevation,
        ),
        _ => {
            return Err(
                "expected either an aperture angle, a focal and pixel length, \
                 or a sight position with a focal and pixel length"
                    .into(),
            )
        }
    };

    let rotation = Rotation::from_angles_deg(azimuth, elevation, args.roll);
    log::debug!(
        "focal {:.3} px, azimuth {:.3} deg, elevation {:.3} deg, roll {:.3} deg",
        camera.focal_px,
        azimuth,
        elevation,
        args.roll
    );

    let srcf = src.cast::<f32>()?;
    let mut dst = Image::from_size_val(out_size, 0.0f32)?;

    invert_gnomonic(
        &srcf,
        &mut dst,
        &geometry,
        &camera,
        &rotation,
        InterpolationMode::from_tag(&args.interpolation),
        ExecutionStrategy::from_threads(args.threads),
        background,
    )?;

    Ok(dst.to_u8())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    env_logger::init();

    let src = F::read_image_any(&args.input)?;
    let src = if args.force_rgb {
        GenericImage::Rgb8(src.into_rgb8()?)
    } else {
        src
    };
    log::info!("loaded {} ({})", args.input.display(), src.size());

    let out = match src {
        GenericImage::Mono8(img) => GenericImage::Mono8(render(
            &img,
            &args,
            clear_color_mono(args.clear, args.red, args.green, args.blue),
        )?),
        GenericImage::Rgb8(img) => GenericImage::Rgb8(render(
            &img,
            &args,
            clear_color_rgb(args.clear, args.red, args.green, args.blue),
        )?),
    };

    F::write_image_any(&args.output, &out)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
