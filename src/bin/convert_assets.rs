//! SVG to PNG conversion for the game sprites
//!
//! One-off tool: rasterizes each vector asset at its own pixel size so the
//! runtime only ever loads raster images.

#[cfg(not(target_arch = "wasm32"))]
mod convert {
    use std::path::{Path, PathBuf};

    use thiserror::Error;

    /// The sprites the game loads at runtime
    pub const ASSETS: [&str; 4] = ["player", "flower", "cloud", "background"];

    #[derive(Debug, Error)]
    pub enum ConvertError {
        #[error("io error: {0}")]
        Io(#[from] std::io::Error),
        #[error("svg parse error: {0}")]
        Svg(#[from] resvg::usvg::Error),
        #[error("invalid raster size {0}x{1}")]
        InvalidSize(u32, u32),
        #[error("png encode failed: {0}")]
        Encode(String),
    }

    /// Rasterize one SVG at the pixel size declared in the document
    pub fn convert(svg_path: &Path, png_path: &Path) -> Result<(), ConvertError> {
        let data = std::fs::read(svg_path)?;
        let tree = resvg::usvg::Tree::from_data(&data, &resvg::usvg::Options::default())?;

        let size = tree.size().to_int_size();
        let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
            .ok_or(ConvertError::InvalidSize(size.width(), size.height()))?;

        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::default(),
            &mut pixmap.as_mut(),
        );
        pixmap
            .save_png(png_path)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        Ok(())
    }

    pub fn asset_paths(name: &str) -> (PathBuf, PathBuf) {
        (
            PathBuf::from(format!("assets/{name}.svg")),
            PathBuf::from(format!("assets/{name}.png")),
        )
    }

    pub fn convert_all() -> Result<(), ConvertError> {
        for name in ASSETS {
            let (svg, png) = asset_paths(name);
            convert(&svg, &png)?;
            log::info!("rasterized {} -> {}", svg.display(), png.display());
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn asset_paths_map_name_to_both_formats() {
            let (svg, png) = asset_paths("flower");
            assert_eq!(svg, PathBuf::from("assets/flower.svg"));
            assert_eq!(png, PathBuf::from("assets/flower.png"));
        }

        #[test]
        fn converts_a_minimal_svg() {
            let dir = std::env::temp_dir();
            let svg = dir.join("petal_dash_convert_test.svg");
            let png = dir.join("petal_dash_convert_test.png");
            std::fs::write(
                &svg,
                r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8" fill="#ff69b4"/></svg>"##,
            )
            .unwrap();

            convert(&svg, &png).unwrap();
            assert!(png.exists());

            let _ = std::fs::remove_file(&svg);
            let _ = std::fs::remove_file(&png);
        }

        #[test]
        fn missing_input_is_an_io_error() {
            let err = convert(
                Path::new("assets/does_not_exist.svg"),
                Path::new("assets/out.png"),
            )
            .unwrap_err();
            assert!(matches!(err, ConvertError::Io(_)));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = convert::convert_all() {
        eprintln!("asset conversion failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
