use super::{FakeFont, FakeTexture};
use inkline::{Context, Size};
use std::sync::Arc;

/// A context shaped like a typical game HUD setup: one 24pt font, the CSS
/// palette, a couple of sizes and strings, and a 16x16 icon.
pub fn hud_context() -> Context {
    let mut ctx = Context::new();
    ctx.register_font(FakeFont::handle("Roboto", 24), Some("main"))
        .expect("register main font");
    ctx.register_font(FakeFont::handle("Mono", 24), None)
        .expect("register mono font");
    ctx.register_css_colors();
    ctx.register_size("main", 24).expect("register size");
    ctx.register_size("accent", 36).expect("register size");
    ctx.register_string("player", "Ada").expect("register string");
    ctx.register_image("icon", Arc::new(FakeTexture(Size::new(16.0, 16.0))))
        .expect("register image");
    ctx
}

pub const HUD_MARKUP: &str = concat!(
    "{{font:main}}Hello World from {{image:icon}}!",
    "{{color:red}} This will be red.{{newline}}",
    "{{color:green}}{{size:accent}}This will be green and big",
);
