use std::path::Path;

use norama_image::{Image, ImageSize};

use crate::error::IoError;
use crate::jpeg::{write_image_jpeg_mono8, write_image_jpeg_rgb8};
use crate::png::{write_image_png_mono8, write_image_png_rgb8};

const JPEG_QUALITY: u8 = 95;

/// A decoded image in one of the pixel formats supported by the tools.
pub enum GenericImage {
    /// 8-bit grayscale image
    Mono8(Image<u8, 1>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
}

impl GenericImage {
    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::Mono8(img) => img.size(),
            GenericImage::Rgb8(img) => img.size(),
        }
    }

    /// Force the image into the RGB pixel format.
    pub fn into_rgb8(self) -> Result<Image<u8, 3>, IoError> {
        match self {
            GenericImage::Mono8(img) => Ok(img.to_rgb()?),
            GenericImage::Rgb8(img) => Ok(img),
        }
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image
/// crate. Grayscale files decode as mono8 and everything else as rgb8.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image in one of the supported pixel formats.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        image::ColorType::L8 | image::ColorType::L16 | image::ColorType::La8 => {
            GenericImage::Mono8(Image::new(size, img.into_luma8().into_raw())?)
        }
        _ => GenericImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?),
    };

    Ok(image)
}

/// Reads an image from the given file path and forces the RGB pixel format.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A RGB image with three channels (rgb8).
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    read_image_any(file_path)?.into_rgb8()
}

/// Writes an image to the given file path, dispatching on the extension.
///
/// PNG and JPEG files are supported; any other extension is rejected.
///
/// # Arguments
///
/// * `file_path` - The destination path with a `png`, `jpg` or `jpeg`
///   extension.
/// * `image` - The image to write.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &GenericImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let ext = file_path
        .extension()
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    match (ext.to_str(), image) {
        (Some("png"), GenericImage::Mono8(img)) => write_image_png_mono8(file_path, img),
        (Some("png"), GenericImage::Rgb8(img)) => write_image_png_rgb8(file_path, img),
        (Some("jpg" | "jpeg"), GenericImage::Mono8(img)) => {
            write_image_jpeg_mono8(file_path, img, JPEG_QUALITY)
        }
        (Some("jpg" | "jpeg"), GenericImage::Rgb8(img)) => {
            write_image_jpeg_rgb8(file_path, img, JPEG_QUALITY)
        }
        _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }
}
