use std::path::PathBuf;
use std::sync::Arc;

/// Platform font files probed in order by [`PathFontProvider::platform_defaults`].
pub const PLATFORM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "C:/Windows/Fonts/arial.ttf",
];

/// Raw font file contents plus the face index inside a collection.
#[derive(Clone, Debug)]
pub struct FontBytes {
    /// Font file bytes (TTF/OTF/TTC).
    pub data: Arc<Vec<u8>>,
    /// Face index within `data`.
    pub index: u32,
    /// Human-readable origin for logs.
    pub source: String,
}

/// A best-effort source of label font data.
///
/// Providers never error. They yield candidates best-first and lazily, so a consumer that
/// rejects one (bytes that do not parse as a font) can keep asking for the next.
pub trait FontProvider: Send {
    /// Font candidates in preference order.
    fn candidates(&self) -> Box<dyn Iterator<Item = FontBytes> + '_>;

    /// The first candidate, if any.
    fn load(&self) -> Option<FontBytes> {
        self.candidates().next()
    }
}

/// Reads font files from an ordered path list; missing and empty files are skipped.
#[derive(Clone, Debug)]
pub struct PathFontProvider {
    paths: Vec<PathBuf>,
}

impl PathFontProvider {
    /// Probe exactly `paths`, in order.
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Probe [`PLATFORM_FONT_PATHS`].
    pub fn platform_defaults() -> Self {
        Self::new(PLATFORM_FONT_PATHS.iter().copied())
    }
}

impl FontProvider for PathFontProvider {
    fn candidates(&self) -> Box<dyn Iterator<Item = FontBytes> + '_> {
        Box::new(self.paths.iter().filter_map(|p| match std::fs::read(p) {
            Ok(data) if !data.is_empty() => Some(FontBytes {
                data: Arc::new(data),
                index: 0,
                source: p.display().to_string(),
            }),
            Ok(_) => None,
            Err(e) => {
                tracing::trace!(path = %p.display(), error = %e, "font path unavailable");
                None
            }
        }))
    }
}

/// Asks the host's installed fonts for a sans-serif face via `fontdb`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemFontProvider;

impl FontProvider for SystemFontProvider {
    fn candidates(&self) -> Box<dyn Iterator<Item = FontBytes> + '_> {
        Box::new(std::iter::once_with(query_sans_serif).flatten())
    }
}

fn query_sans_serif() -> Option<FontBytes> {
    use usvg::fontdb;

    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let id = db.query(&fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    })?;
    let source = db
        .face(id)
        .map(|f| format!("system:{}", f.post_script_name))
        .unwrap_or_else(|| "system".to_string());
    db.with_face_data(id, |data, index| FontBytes {
        data: Arc::new(data.to_vec()),
        index,
        source,
    })
}

/// Never yields a font; labels are omitted.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFonts;

impl FontProvider for NoFonts {
    fn candidates(&self) -> Box<dyn Iterator<Item = FontBytes> + '_> {
        Box::new(std::iter::empty())
    }
}

/// Yields every provider's candidates in chain order; an exhausted chain means "no text".
pub struct FallbackFonts {
    chain: Vec<Box<dyn FontProvider>>,
}

impl FallbackFonts {
    /// Chain the given providers.
    pub fn new(chain: Vec<Box<dyn FontProvider>>) -> Self {
        Self { chain }
    }

    /// Platform paths first, then the system font database.
    pub fn platform() -> Self {
        Self::with_paths(PathFontProvider::platform_defaults())
    }

    /// `paths` first, then the system font database.
    pub fn with_paths(paths: PathFontProvider) -> Self {
        Self::new(vec![Box::new(paths), Box::new(SystemFontProvider)])
    }
}

impl Default for FallbackFonts {
    fn default() -> Self {
        Self::platform()
    }
}

impl FontProvider for FallbackFonts {
    fn candidates(&self) -> Box<dyn Iterator<Item = FontBytes> + '_> {
        Box::new(self.chain.iter().flat_map(|p| p.candidates()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
