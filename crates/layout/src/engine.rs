//! The layout interpreter.
//!
//! A [`Renderer`] walks a [`CommandList`] once per `execute`, tracking the
//! current color, font and cursor, and writes positioned fragments into a
//! bounded pool of slots. Slots survive between executions so a list laid
//! out every frame reuses the same fragments instead of reallocating them.

use crate::config::RendererConfig;
use crate::fragment::{Fragment, ImageFragment, TextFragment};
use crate::LayoutError;
use inkline_markup::{Command, CommandList};
use inkline_resource::{Context, FontCache, RegistryEntry};
use inkline_traits::{Canvas, FontHandle, ImageHandle};
use inkline_types::{Bounds, Color, Point, Rect};

/// Style and cursor state of one layout pass.
#[derive(Debug, Clone)]
pub struct RendererState<'ctx> {
    pub color: Color,
    pub font: FontHandle,
    pub font_size: u32,
    pub font_cache: &'ctx FontCache,
    pub draw_x: i32,
    pub draw_y: i32,
    pub bounds: Bounds,
}

impl<'ctx> RendererState<'ctx> {
    fn initial(ctx: &'ctx Context, config: &RendererConfig) -> Result<Self, LayoutError> {
        let font_cache = ctx.default_font().ok_or(LayoutError::NoDefaultFont)?;
        let font = font_cache.query(config.default_font_size)?;
        Ok(Self {
            color: config.default_color,
            font,
            font_size: config.default_font_size,
            font_cache,
            draw_x: 0,
            draw_y: 0,
            bounds: Bounds::default(),
        })
    }

    fn cursor(&self) -> Point {
        Point::new(self.draw_x, self.draw_y)
    }
}

pub struct Renderer<'ctx> {
    ctx: &'ctx Context,
    config: RendererConfig,
    /// Every slot allocated so far; its length is the high-water mark.
    fragments: Vec<Fragment>,
    /// Slots written by the current (or last) execution.
    written: usize,
    state: Option<RendererState<'ctx>>,
}

impl<'ctx> Renderer<'ctx> {
    pub fn new(ctx: &'ctx Context) -> Self {
        Self::with_config(ctx, RendererConfig::default())
    }

    pub fn with_config(ctx: &'ctx Context, config: RendererConfig) -> Self {
        Self {
            ctx,
            config,
            fragments: Vec::new(),
            written: 0,
            state: None,
        }
    }

    /// Lays out `list` from scratch and returns the bounds of the result.
    ///
    /// References to unregistered (or wrongly typed) resources are skipped.
    ///
    /// # Errors
    ///
    /// - `NoDefaultFont` if the context has no font registered
    /// - `FragmentPoolExhausted` if the list needs more slots than configured
    /// - `Font` if the font engine fails to measure a run
    /// - `CoordinateOverflow` if the cursor or bounds leave the `i32` range
    ///
    /// After an error no fragments are considered written.
    pub fn execute(&mut self, list: &CommandList) -> Result<Bounds, LayoutError> {
        self.written = 0;
        self.state = None;

        let mut state = RendererState::initial(self.ctx, &self.config)?;
        let result = list
            .iter()
            .try_for_each(|command| self.apply(&mut state, command));

        match result {
            Ok(()) => {
                log::debug!(
                    "Laid out {} commands into {} fragments ({} slots allocated), bounds {:?}",
                    list.len(),
                    self.written,
                    self.fragments.len(),
                    state.bounds
                );
                let bounds = state.bounds;
                self.state = Some(state);
                Ok(bounds)
            }
            Err(e) => {
                self.written = 0;
                Err(e)
            }
        }
    }

    fn apply(
        &mut self,
        state: &mut RendererState<'ctx>,
        command: &Command,
    ) -> Result<(), LayoutError> {
        let ctx = self.ctx;
        match command {
            Command::DrawText(text) => self.place_text(state, text)?,
            Command::UseStringRef(key) => match ctx.get(key) {
                Some(RegistryEntry::String(text)) => self.place_text(state, text)?,
                _ => log::trace!("Skipping unresolved string reference '{}'", key),
            },
            Command::SetColor(key) => match ctx.get(key) {
                Some(RegistryEntry::Color(color)) => state.color = *color,
                _ => log::trace!("Skipping unresolved color '{}'", key),
            },
            Command::SetFont(key) => match ctx.font(key) {
                Some(cache) => match cache.query(state.font_size) {
                    Ok(font) => {
                        state.font = font;
                        state.font_cache = cache;
                    }
                    Err(e) => {
                        log::warn!("Font '{}' unavailable at {}pt: {}", key, state.font_size, e)
                    }
                },
                None => log::trace!("Skipping unresolved font '{}'", key),
            },
            Command::SetSize(key) => match ctx.get(key) {
                Some(RegistryEntry::Size(point_size)) => match state.font_cache.query(*point_size) {
                    Ok(font) => {
                        state.font_size = *point_size;
                        state.font = font;
                    }
                    Err(e) => log::warn!(
                        "Font '{}' unavailable at {}pt: {}",
                        state.font_cache.name(),
                        point_size,
                        e
                    ),
                },
                _ => log::trace!("Skipping unresolved size '{}'", key),
            },
            Command::Newline => {
                state.draw_x = 0;
                state.draw_y = advance(state.draw_y, state.font.line_height(), self.written)?;
            }
            Command::DrawImage(key) => match ctx.get(key) {
                Some(RegistryEntry::Image(image)) => self.place_image(state, image)?,
                _ => log::trace!("Skipping unresolved image '{}'", key),
            },
        }
        Ok(())
    }

    fn next_slot(&mut self) -> Result<usize, LayoutError> {
        if self.written >= self.config.max_fragments {
            return Err(LayoutError::FragmentPoolExhausted(self.config.max_fragments));
        }
        let index = self.written;
        self.written += 1;
        Ok(index)
    }

    fn place_text(
        &mut self,
        state: &mut RendererState<'ctx>,
        content: &str,
    ) -> Result<(), LayoutError> {
        let index = self.next_slot()?;
        let metrics = state.font.measure(content)?;
        let position = state.cursor();
        let bounds = state
            .bounds
            .checked_extend(position.x, position.y, metrics.width, metrics.height)
            .ok_or(LayoutError::CoordinateOverflow(index))?;
        let draw_x = advance(state.draw_x, metrics.width, index)?;

        let font = state.font.clone();
        let color = state.color;
        match self.fragments.get_mut(index) {
            Some(Fragment::Text(slot)) => slot.update(font, content, color, position, metrics),
            Some(slot) => {
                *slot = Fragment::Text(TextFragment::new(font, content, color, position, metrics))
            }
            None => {
                log::trace!("Allocating fragment slot {}", index);
                let fragment = TextFragment::new(font, content, color, position, metrics);
                self.fragments.push(Fragment::Text(fragment));
            }
        }

        state.bounds = bounds;
        state.draw_x = draw_x;
        Ok(())
    }

    fn place_image(
        &mut self,
        state: &mut RendererState<'ctx>,
        image: &ImageHandle,
    ) -> Result<(), LayoutError> {
        let index = self.next_slot()?;
        let size = image.size();
        let line_height = state.font.line_height();

        // Centered on the current line; negative offsets for tall images are fine
        let position = Point::new(
            state.draw_x,
            (state.draw_y as f32 + (line_height / 2) as f32 - size.height / 2.0) as i32,
        );
        let (width, height) = (size.width as i32, size.height as i32);
        let bounds = state
            .bounds
            .checked_extend(position.x, position.y, width, height)
            .ok_or(LayoutError::CoordinateOverflow(index))?;
        let draw_x = advance(state.draw_x, width, index)?;

        let fragment = Fragment::Image(ImageFragment {
            image: image.clone(),
            position,
            size,
        });

        match self.fragments.get_mut(index) {
            Some(slot) => *slot = fragment,
            None => {
                log::trace!("Allocating fragment slot {}", index);
                self.fragments.push(fragment);
            }
        }

        state.bounds = bounds;
        state.draw_x = draw_x;
        Ok(())
    }

    /// Draws the fragments of the last execution, offset by `(x, y)`.
    pub fn render(&self, canvas: &mut dyn Canvas, x: f32, y: f32) {
        for fragment in self.fragments() {
            let pos = fragment.position();
            let (draw_x, draw_y) = (x + pos.x as f32, y + pos.y as f32);
            match fragment {
                Fragment::Text(t) => {
                    canvas.draw_text(&*t.font, &t.content, t.color, draw_x, draw_y)
                }
                Fragment::Image(i) => canvas.draw_image(
                    &*i.image,
                    Rect::new(draw_x, draw_y, i.size.width, i.size.height),
                ),
            }
        }
    }

    /// Bounds of the last successful execution.
    pub fn bounds(&self) -> Bounds {
        self.state.as_ref().map(|s| s.bounds).unwrap_or_default()
    }

    /// Style and cursor state at the end of the last successful execution.
    pub fn state(&self) -> Option<&RendererState<'ctx>> {
        self.state.as_ref()
    }

    /// The fragments written by the last execution, in layout order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments[..self.written]
    }

    /// Number of slots allocated so far. Never shrinks.
    pub fn allocated_fragments(&self) -> usize {
        self.fragments.len()
    }
}

/// `coord + delta`, or `CoordinateOverflow` reported at fragment `index`.
fn advance(coord: i32, delta: i32, index: usize) -> Result<i32, LayoutError> {
    coord
        .checked_add(delta)
        .ok_or(LayoutError::CoordinateOverflow(index))
}
