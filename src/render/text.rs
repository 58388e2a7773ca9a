use crate::foundation::core::Rgb8;
use crate::foundation::error::{PanelError, PanelResult};
use crate::render::fonts::FontBytes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgb8> for TextBrushRgba8 {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// A font registered with a [`TextLayoutEngine`] and ready for glyph rendering.
#[derive(Clone)]
pub(crate) struct RegisteredFont {
    pub(crate) family: String,
    pub(crate) data: vello_cpu::peniko::FontData,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and return the handle used for layout and rendering.
    pub(crate) fn register(&mut self, font: &FontBytes) -> PanelResult<RegisteredFont> {
        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.data.to_vec()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PanelError::render(format!("no font families registered from '{}'", font.source))
        })?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PanelError::render("registered font family has no name"))?
            .to_string();

        Ok(RegisteredFont {
            family,
            data: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(font.data.to_vec()),
                font.index,
            ),
        })
    }

    /// Shape and lay out a single line of plain text.
    pub(crate) fn layout_plain(
        &mut self,
        text: &str,
        family: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> PanelResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PanelError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}
