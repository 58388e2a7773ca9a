use kurbo::Shape;

use crate::foundation::core::{Canvas, Point, Rect, Rgb8};
use crate::foundation::error::{PanelError, PanelResult};
use crate::panel::control::{Control, ControlState};
use crate::panel::model::Panel;
use crate::render::backend::FrameRGBA;
use crate::render::controls::draw_control;
use crate::render::fonts::FontProvider;
use crate::render::text::{RegisteredFont, TextLayoutEngine};

/// Inset of the panel border from the canvas edge.
pub const FRAME_INSET_PX: f64 = 20.0;
/// Stroke width of the panel border.
pub const FRAME_STROKE_PX: f64 = 3.0;
/// Panel border color.
pub const FRAME_COLOR: Rgb8 = Rgb8::new(80, 80, 90);

/// Which of a control's stored states a static render shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateSelector {
    /// The first image of a task pair.
    Initial,
    /// The final image of a task pair.
    Target,
}

impl StateSelector {
    /// Pick the stored state of `control`.
    pub fn resolve(self, control: &Control) -> ControlState {
        match self {
            Self::Initial => control.initial_state,
            Self::Target => control.target_state,
        }
    }
}

/// A sized font handle for one control's text.
#[derive(Clone)]
pub struct LabelFont {
    font: RegisteredFont,
    size_px: f32,
}

impl LabelFont {
    /// Font size in pixels.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

/// One in-progress frame.
///
/// Obtained from [`PanelRenderer::begin_frame`], which has already painted the background and
/// border. Draw controls with [`draw_control`], then call [`Surface::finish`].
pub struct Surface<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
    text: &'a mut TextLayoutEngine,
    width: u16,
    height: u16,
}

impl Surface<'_> {
    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    pub(crate) fn fill(&mut self, shape: &impl Shape, color: Rgb8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&shape_to_cpu(shape));
    }

    pub(crate) fn stroke(&mut self, shape: &impl Shape, width: f64, color: Rgb8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&shape_to_cpu(shape));
    }

    /// Lay out `text` and draw it with its top-left corner at `place(width, height)`.
    pub(crate) fn text(
        &mut self,
        text: &str,
        font: &LabelFont,
        color: Rgb8,
        place: impl FnOnce(f64, f64) -> Point,
    ) -> PanelResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let layout =
            self.text
                .layout_plain(text, &font.font.family, font.size_px, color.into())?;
        let origin = place(f64::from(layout.width()), f64::from(layout.height()));

        self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            origin.x.round(),
            origin.y.round(),
        )));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font.font.data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    /// Rasterize everything drawn so far.
    pub fn finish(self) -> FrameRGBA {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

/// Renders panels onto a fixed-size canvas.
pub struct PanelRenderer {
    canvas: Canvas,
    background: Rgb8,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    text: TextLayoutEngine,
    font: Option<RegisteredFont>,
}

impl PanelRenderer {
    /// Create a renderer, resolving the label font once through `fonts`.
    ///
    /// Candidates are tried in order until one parses as a font. A chain with no usable
    /// candidate leaves the renderer in no-text mode.
    pub fn new(canvas: Canvas, background: Rgb8, fonts: &dyn FontProvider) -> PanelResult<Self> {
        let width = u16::try_from(canvas.width)
            .ok()
            .filter(|w| *w > 0)
            .ok_or_else(|| PanelError::validation("canvas width must be in 1..=65535"))?;
        let height = u16::try_from(canvas.height)
            .ok()
            .filter(|h| *h > 0)
            .ok_or_else(|| PanelError::validation("canvas height must be in 1..=65535"))?;

        let mut text = TextLayoutEngine::new();
        let font = fonts.candidates().find_map(|bytes| match text.register(&bytes) {
            Ok(font) => {
                tracing::debug!(source = %bytes.source, family = %font.family, "label font ready");
                Some(font)
            }
            Err(e) => {
                tracing::warn!(source = %bytes.source, error = %e, "font rejected; trying next");
                None
            }
        });
        if font.is_none() {
            tracing::warn!("no usable font; labels disabled");
        }

        Ok(Self {
            canvas,
            background,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            text,
            font,
        })
    }

    /// Canvas this renderer draws.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Return `true` when labels will be drawn.
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Font sized for `control`, or `None` in no-text mode.
    pub fn label_font(&self, control: &Control) -> Option<LabelFont> {
        self.font.as_ref().map(|font| LabelFont {
            font: font.clone(),
            size_px: control.font_size_px(),
        })
    }

    /// Start a frame: background fill plus the inset border.
    pub fn begin_frame(&mut self) -> Surface<'_> {
        self.ctx.reset();
        let mut surface = Surface {
            ctx: &mut self.ctx,
            text: &mut self.text,
            width: self.width,
            height: self.height,
        };
        surface.fill(&self.canvas.rect(), self.background);
        let w = f64::from(self.canvas.width);
        let h = f64::from(self.canvas.height);
        surface.stroke(
            &Rect::new(FRAME_INSET_PX, FRAME_INSET_PX, w - FRAME_INSET_PX, h - FRAME_INSET_PX),
            FRAME_STROKE_PX,
            FRAME_COLOR,
        );
        surface
    }

    /// Render every control of `panel` in its initial or target state.
    pub fn render(&mut self, panel: &Panel, which: StateSelector) -> PanelResult<FrameRGBA> {
        self.render_with(panel, |control| which.resolve(control))
    }

    /// Render every control of `panel` with a caller-resolved state.
    pub fn render_with(
        &mut self,
        panel: &Panel,
        mut resolve: impl FnMut(&Control) -> ControlState,
    ) -> PanelResult<FrameRGBA> {
        let fonts: Vec<Option<LabelFont>> =
            panel.controls().iter().map(|c| self.label_font(c)).collect();
        let mut surface = self.begin_frame();
        for (control, font) in panel.controls().iter().zip(&fonts) {
            draw_control(
                &mut surface,
                control,
                resolve(control),
                &control.label,
                font.as_ref(),
            )?;
        }
        Ok(surface.finish())
    }
}

fn paint(c: Rgb8) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn shape_to_cpu(shape: &impl Shape) -> vello_cpu::kurbo::BezPath {
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        p.push(el);
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
