use inkline_traits::{FontHandle, ImageHandle, TextMetrics};
use inkline_types::{Color, Point, Size};
use serde::Serialize;

/// A measured run of text, drawn with one font and one color.
#[derive(Debug, Clone)]
pub struct TextFragment {
    pub font: FontHandle,
    pub content: String,
    pub color: Color,
    pub position: Point,
    pub metrics: TextMetrics,
}

impl TextFragment {
    pub fn new(
        font: FontHandle,
        content: &str,
        color: Color,
        position: Point,
        metrics: TextMetrics,
    ) -> Self {
        Self {
            font,
            content: content.to_string(),
            color,
            position,
            metrics,
        }
    }

    /// Rewrites a recycled slot in place, keeping the content allocation.
    pub(crate) fn update(
        &mut self,
        font: FontHandle,
        content: &str,
        color: Color,
        position: Point,
        metrics: TextMetrics,
    ) {
        self.font = font;
        self.content.clear();
        self.content.push_str(content);
        self.color = color;
        self.position = position;
        self.metrics = metrics;
    }
}

/// An inline image at its native size.
#[derive(Debug, Clone)]
pub struct ImageFragment {
    pub image: ImageHandle,
    pub position: Point,
    pub size: Size,
}

/// One positioned unit of layout output.
#[derive(Debug, Clone)]
pub enum Fragment {
    Text(TextFragment),
    Image(ImageFragment),
}

impl Fragment {
    pub fn position(&self) -> Point {
        match self {
            Fragment::Text(t) => t.position,
            Fragment::Image(i) => i.position,
        }
    }

    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Text(_) => FragmentKind::Text,
            Fragment::Image(_) => FragmentKind::Image,
        }
    }

    pub fn snapshot(&self) -> FragmentSnapshot {
        match self {
            Fragment::Text(t) => FragmentSnapshot {
                kind: FragmentKind::Text,
                text: Some(t.content.clone()),
                color: Some(t.color),
                point_size: Some(t.font.point_size()),
                x: t.position.x,
                y: t.position.y,
                width: t.metrics.width as f32,
                height: t.metrics.height as f32,
            },
            Fragment::Image(i) => FragmentSnapshot {
                kind: FragmentKind::Image,
                text: None,
                color: None,
                point_size: None,
                x: i.position.x,
                y: i.position.y,
                width: i.size.width,
                height: i.size.height,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Text,
    Image,
}

/// A plain-data copy of a fragment, for comparison and serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSnapshot {
    pub kind: FragmentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_size: Option<u32>,
    pub x: i32,
    pub y: i32,
    pub width: f32,
    pub height: f32,
}
