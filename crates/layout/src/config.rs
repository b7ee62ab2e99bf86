use inkline_types::Color;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererConfig {
    /// The number of fragment slots a renderer may hold. Slots are recycled
    /// across executions; an execution needing more than this fails.
    ///
    /// Defaults to `128`.
    pub max_fragments: usize,

    /// Point size every execution starts with. Defaults to `12`.
    pub default_font_size: u32,

    /// Color every execution starts with. Defaults to opaque white.
    pub default_color: Color,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            max_fragments: 128,
            default_font_size: 12,
            default_color: Color::WHITE,
        }
    }
}
