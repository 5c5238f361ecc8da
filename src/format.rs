use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader, RgbaImage};

use crate::eps::write_eps;
use crate::error::SaveFailure;
use crate::{HexstickerError, HexstickerResult};

/// Output file types a sticker can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickerFormat {
    Jpeg,
    Png,
    Tiff,
    Gif,
    Bmp,
    Eps,
}

/// Extensions recognized by [`StickerFormat::from_path`], as listed in error messages.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["jpg", "png", "jpeg", "tiff", "gif", "bmp", "eps"];

impl StickerFormat {
    /// Determine the file type from the extension of `path`.
    pub fn from_path(path: &Path) -> HexstickerResult<Self> {
        let extension = path.extension().ok_or_else(|| {
            HexstickerError::UnknownFileType(format!(
                "Unable to determine file type from file {:?}",
                path.display().to_string()
            ))
        })?;
        let extension = extension.to_string_lossy().to_lowercase();

        match extension.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "tiff" => Ok(Self::Tiff),
            "gif" => Ok(Self::Gif),
            "bmp" => Ok(Self::Bmp),
            "eps" => Ok(Self::Eps),
            other => Err(HexstickerError::UnknownFileType(format!(
                "Unknown file type {other:?}, supported are: {}",
                SUPPORTED_EXTENSIONS.join(", ")
            ))),
        }
    }

    /// The `image` encoder for this file type. EPS has none and is written
    /// by [`write_eps`] instead.
    pub fn image_format(self) -> Option<ImageFormat> {
        match self {
            Self::Jpeg => Some(ImageFormat::Jpeg),
            Self::Png => Some(ImageFormat::Png),
            Self::Tiff => Some(ImageFormat::Tiff),
            Self::Gif => Some(ImageFormat::Gif),
            Self::Bmp => Some(ImageFormat::Bmp),
            Self::Eps => None,
        }
    }
}

impl fmt::Display for StickerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Tiff => "tiff",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Eps => "eps",
        };
        f.write_str(name)
    }
}

/// Derive the default output path, `<stem>-sticker.<ext>` next to the input.
pub fn derive_output_path(input: &Path) -> HexstickerResult<PathBuf> {
    let (Some(stem), Some(extension)) = (input.file_stem(), input.extension()) else {
        return Err(save_error(
            input,
            SaveFailure::OutputName(format!(
                "The input file name {:?} has no extension - unable to construct output file name",
                input.display().to_string()
            )),
        ));
    };
    let filename = format!(
        "{}-sticker.{}",
        stem.to_string_lossy(),
        extension.to_string_lossy()
    );
    Ok(input.with_file_name(filename))
}

/// Open and decode `path`, converting the pixels to RGBA.
pub fn load_rgba(path: &Path) -> HexstickerResult<RgbaImage> {
    let decode = || -> Result<RgbaImage, image::ImageError> {
        let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(image.to_rgba8())
    };
    decode().map_err(|source| HexstickerError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode `img` as `format` into a newly created file at `path`.
///
/// The file is created before encoding starts, so a failed encode can leave a
/// partial file behind.
pub fn save_rgba(img: &RgbaImage, path: &Path, format: StickerFormat) -> HexstickerResult<()> {
    let file = File::create(path).map_err(|err| save_error(path, err))?;
    let mut writer = BufWriter::new(file);
    match format.image_format() {
        Some(image_format) => img
            .write_to(&mut writer, image_format)
            .map_err(|err| save_error(path, err))?,
        None => write_eps(img, &mut writer).map_err(|err| save_error(path, err))?,
    }
    writer.flush().map_err(|err| save_error(path, err))?;
    Ok(())
}

fn save_error(path: &Path, source: impl Into<SaveFailure>) -> HexstickerError {
    HexstickerError::Save {
        path: path.to_path_buf(),
        source: source.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod from_path {
        use super::*;

        fn unknown(path: &str) -> String {
            match StickerFormat::from_path(Path::new(path)).unwrap_err() {
                HexstickerError::UnknownFileType(message) => message,
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn supported_extensions() {
            let cases = [
                ("a.png", StickerFormat::Png),
                ("a.jpeg", StickerFormat::Jpeg),
                ("a.tiff", StickerFormat::Tiff),
                ("a.gif", StickerFormat::Gif),
                ("a.bmp", StickerFormat::Bmp),
                ("a.eps", StickerFormat::Eps),
            ];
            for (path, expected) in cases {
                assert_eq!(StickerFormat::from_path(Path::new(path)).unwrap(), expected);
            }
        }

        #[test]
        fn jpg_normalizes_to_jpeg() {
            let format = StickerFormat::from_path(Path::new("photo.jpg")).unwrap();
            assert_eq!(format, StickerFormat::Jpeg);
            assert_eq!(format.to_string(), "jpeg");
        }

        #[test]
        fn extension_is_case_insensitive() {
            assert_eq!(
                StickerFormat::from_path(Path::new("PHOTO.PNG")).unwrap(),
                StickerFormat::Png
            );
        }

        #[test]
        fn unsupported_extension_lists_supported() {
            let message = unknown("image.xyz");
            assert!(message.contains("xyz"));
            assert!(message.contains("png"));
        }

        #[test]
        fn missing_extension() {
            assert!(unknown("image").contains("image"));
        }

        #[test]
        fn only_last_extension_counts() {
            assert_eq!(
                StickerFormat::from_path(Path::new("archive.tar.png")).unwrap(),
                StickerFormat::Png
            );
        }
    }

    mod derive_output_path {
        use super::*;

        #[test]
        fn appends_sticker_suffix() {
            assert_eq!(
                derive_output_path(Path::new("photo.png")).unwrap(),
                PathBuf::from("photo-sticker.png")
            );
        }

        #[test]
        fn keeps_directory_and_extension_case() {
            assert_eq!(
                derive_output_path(Path::new("some.dir/cat.JPG")).unwrap(),
                PathBuf::from("some.dir/cat-sticker.JPG")
            );
        }

        #[test]
        fn no_extension_is_a_save_error() {
            assert!(matches!(
                derive_output_path(Path::new("dir/photo")),
                Err(HexstickerError::Save {
                    source: SaveFailure::OutputName(_),
                    ..
                })
            ));
        }
    }

    mod save_rgba {
        use super::*;
        use image::Rgba;

        fn sample() -> RgbaImage {
            RgbaImage::from_pixel(7, 9, Rgba([1, 2, 3, 255]))
        }

        #[test]
        fn png_round_trip_keeps_dimensions() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("out.png");
            save_rgba(&sample(), &path, StickerFormat::Png).unwrap();

            let loaded = load_rgba(&path).unwrap();
            assert_eq!(loaded.dimensions(), (7, 9));
            assert_eq!(loaded, sample());
        }

        #[test]
        fn eps_is_written_as_postscript() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("out.eps");
            save_rgba(&sample(), &path, StickerFormat::Eps).unwrap();

            let doc = std::fs::read_to_string(&path).unwrap();
            assert!(doc.starts_with("%!PS-Adobe-3.0 EPSF-3.0\n"));
            assert!(doc.contains("%%BoundingBox: 0 0 7 9"));
            assert!(doc.contains("010203"));
        }

        #[test]
        fn missing_directory_keeps_io_cause() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("missing").join("out.png");
            let err = save_rgba(&sample(), &path, StickerFormat::Png).unwrap_err();

            let HexstickerError::Save { path: failed, .. } = &err else {
                panic!("unexpected error: {err:?}");
            };
            assert_eq!(*failed, path);
            let cause = std::error::Error::source(&err).expect("save error keeps its cause");
            let io = cause
                .downcast_ref::<SaveFailure>()
                .and_then(|failure| match failure {
                    SaveFailure::Io(io) => Some(io.kind()),
                    _ => None,
                });
            assert_eq!(io, Some(std::io::ErrorKind::NotFound));
        }
    }

    mod load_rgba {
        use super::*;

        #[test]
        fn missing_file_is_a_load_error() {
            let err = load_rgba(Path::new("does-not-exist.png")).unwrap_err();
            assert!(matches!(err, HexstickerError::Load { .. }));
        }

        #[test]
        fn garbage_is_a_load_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("broken.png");
            std::fs::write(&path, b"definitely not a png").unwrap();

            let err = load_rgba(&path).unwrap_err();
            match err {
                HexstickerError::Load { path: failed, .. } => assert_eq!(failed, path),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
