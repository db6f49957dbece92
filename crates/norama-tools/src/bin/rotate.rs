use argh::FromArgs;
use std::path::PathBuf;

use norama_gnomonic::coords::Rotation;
use norama_gnomonic::interpolation::InterpolationMode;
use norama_gnomonic::parallel::ExecutionStrategy;
use norama_gnomonic::transform::rotate_equirect;
use norama_image::Image;
use norama_io::functional as F;
use norama_io::GenericImage;

#[derive(FromArgs)]
/// Rotate an equirectangular panorama mapping
struct Args {
    /// input equirectangular mapping image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// output equirectangular mapping image
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

    /// number of threads, zero selects the global pool
    #[argh(option, short = 't', default = "0")]
    threads: usize,

    /// interpolation method tag, defaults to bicubicf
    #[argh(option, short = 'n', default = "String::from(\"bicubicf\")")]
    interpolation: String,

    /// force the input image into the RGB format
    #[argh(switch, short = 'F')]
    force_rgb: bool,
}

fn render<const C: usize>(
    src: &Image<u8, C>,
    args: &Args,
) -> Result<Image<u8, C>, Box<dyn std::error::Error>> {
    let rotation = Rotation::from_angles_deg(args.azimuth, args.elevation, args.roll);

    let srcf = src.cast::<f32>()?;
    let mut dst = Image::from_size_val(src.size(), 0.0f32)?;

    rotate_equirect(
        &srcf,
        &mut dst,
        &rotation,
        InterpolationMode::from_tag(&args.interpolation),
        ExecutionStrategy::from_threads(args.threads),
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
        GenericImage::Mono8(img) => GenericImage::Mono8(render(&img, &args)?),
        GenericImage::Rgb8(img) => GenericImage::Rgb8(render(&img, &args)?),
    };

    F::write_image_any(&args.output, &out)?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
