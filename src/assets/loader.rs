//! Directory scanning and image decoding for card textures

use std::path::{Path, PathBuf};
use image::RgbaImage;

/// Error type for asset loading
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{} is {width}x{height}, textures are limited to 65535x65535", path.display())]
    TooLarge { path: PathBuf, width: u32, height: u32 },
}

/// List the files directly inside `dir` whose extension matches `extension`
/// (case-insensitive), in lexical order.
pub fn scan_directory<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>, AssetError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .collect();

    paths.sort();
    Ok(paths)
}

/// Texture name for an image file: its base name without the extension
pub fn texture_name<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Decode an image file into an RGBA buffer small enough to upload
pub fn decode_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage, AssetError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(AssetError::TooLarge { path: path.to_path_buf(), width, height });
    }
    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("card-table-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = scratch_dir("scan");
        for file in ["cardSpades3.png", "cardJoker1.PNG", "notes.txt", "cardSpades10.png"] {
            fs::write(dir.join(file), b"").unwrap();
        }
        fs::create_dir_all(dir.join("nested.png")).unwrap();

        let names: Vec<String> = scan_directory(&dir, "png")
            .unwrap()
            .iter()
            .map(texture_name)
            .collect();
        assert_eq!(names, vec!["cardJoker1", "cardSpades10", "cardSpades3"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_scan_missing_directory_is_io_error() {
        let err = scan_directory("definitely/not/here", "png").unwrap_err();
        assert!(matches!(err, AssetError::Io(_)));
    }

    #[test]
    fn test_texture_name_strips_extension() {
        assert_eq!(texture_name("res/cards/table/cardHearts12.png"), "cardHearts12");
        assert_eq!(texture_name("cardBack_blue.v2.png"), "cardBack_blue.v2");
        assert_eq!(texture_name(""), "");
    }

    #[test]
    fn test_decode_png() {
        let dir = scratch_dir("decode");
        let path = dir.join("tiny.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([255, 0, 0, 255]));
        img.save(&path).unwrap();

        let decoded = decode_rgba(&path).unwrap();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1), &image::Rgba([255, 0, 0, 255]));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let dir = scratch_dir("garbage");
        let path = dir.join("broken.png");
        fs::write(&path, b"not a png").unwrap();

        let err = decode_rgba(&path).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
