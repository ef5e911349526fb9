use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{NinePatchError, NinePatchResult};

/// Renders a vector file into a PNG of an exact pixel size.
pub trait Rasterizer {
    /// Render `input` into `output` as a `width`×`height` PNG, overwriting `output`.
    fn render(&self, input: &Path, output: &Path, width: u32, height: u32) -> NinePatchResult<()>;
}

/// In-process rasterizer backed by `usvg` + `resvg`.
#[derive(Clone, Debug, Default)]
pub struct ResvgRasterizer;

impl ResvgRasterizer {
    /// Create a rasterizer using the system font database for `<text>`.
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for ResvgRasterizer {
    #[tracing::instrument(skip(self))]
    fn render(&self, input: &Path, output: &Path, width: u32, height: u32) -> NinePatchResult<()> {
        let bytes = std::fs::read(input)
            .with_context(|| format!("read svg '{}'", input.display()))?;

        let resources_dir = input.parent().map(Path::to_path_buf);
        let fontdb = build_svg_fontdb(resources_dir.as_deref());
        let opts = usvg::Options {
            resources_dir,
            fontdb,
            ..Default::default()
        };

        let tree = usvg::Tree::from_data(&bytes, &opts)
            .map_err(|e| NinePatchError::raster(format!("parse svg tree: {e}")))?;

        let rgba = rasterize_tree_to_rgba8(&tree, width, height)?;

        image::save_buffer_with_format(
            output,
            &rgba,
            width,
            height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", output.display()))?;

        tracing::debug!(width, height, "rasterized svg");
        Ok(())
    }
}

// System fonts plus any font files next to the input (or in its `fonts/` subdirectory).
fn build_svg_fontdb(resources_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    if let Some(dir) = resources_dir {
        load_fonts_from_dir(&mut db, dir);
        load_fonts_from_dir(&mut db, &dir.join("fonts"));
    }

    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        let is_font = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
            .unwrap_or(false);
        if path.is_file() && is_font {
            let _ = db.load_font_file(&path);
        }
    }
}

/// Rasterize `tree` stretched to `width`×`height`, returning straight (non-premultiplied) RGBA8.
pub fn rasterize_tree_to_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> NinePatchResult<Vec<u8>> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        NinePatchError::invalid_dimensions(format!("cannot allocate {width}x{height} pixmap"))
    })?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut out = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(out)
}

/// Rasterizer that shells out to the `inkscape` binary (1.x command line).
#[derive(Clone, Debug)]
pub struct InkscapeRasterizer {
    program: String,
}

impl Default for InkscapeRasterizer {
    fn default() -> Self {
        Self {
            program: "inkscape".to_string(),
        }
    }
}

impl InkscapeRasterizer {
    /// Use a specific `inkscape` executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to inkscape for one export.
    pub fn export_args(input: &Path, output: &Path, width: u32, height: u32) -> Vec<String> {
        vec![
            "--export-area-page".to_string(),
            "--export-type=png".to_string(),
            format!("--export-width={width}"),
            format!("--export-height={height}"),
            format!("--export-filename={}", output.display()),
            input.display().to_string(),
        ]
    }
}

impl Rasterizer for InkscapeRasterizer {
    #[tracing::instrument(skip(self))]
    fn render(&self, input: &Path, output: &Path, width: u32, height: u32) -> NinePatchResult<()> {
        let out = Command::new(&self.program)
            .args(Self::export_args(input, output, width, height))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                NinePatchError::raster(format!("failed to spawn '{}': {e}", self.program))
            })?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            return Err(NinePatchError::raster(format!(
                "{} exited with status {}: {}",
                self.program,
                out.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Return `true` when `inkscape --version` runs successfully.
pub fn is_inkscape_on_path() -> bool {
    Command::new("inkscape")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterize.rs"]
mod tests;
