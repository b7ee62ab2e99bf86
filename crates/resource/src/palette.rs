use inkline_types::Color;

/// The named colors registered by `Context::register_css_colors`.
pub const CSS_COLORS: [(&str, Color); 23] = [
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(128, 128, 128)),
    ("darkred", Color::rgb(139, 0, 0)),
    ("darkgreen", Color::rgb(0, 100, 0)),
    ("darkblue", Color::rgb(0, 0, 139)),
    ("darkgray", Color::rgb(169, 169, 169)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("pink", Color::rgb(255, 192, 203)),
    ("brown", Color::rgb(165, 42, 42)),
    ("gold", Color::rgb(255, 215, 0)),
    ("silver", Color::rgb(192, 192, 192)),
    ("lightblue", Color::rgb(173, 216, 230)),
    ("lightgreen", Color::rgb(144, 238, 144)),
    ("transparent", Color::rgba(0, 0, 0, 0)),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Color {
        CSS_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
            .unwrap()
    }

    #[test]
    fn test_palette_matches_hex_table() {
        let table = [
            ("black", "#000000"),
            ("white", "#FFFFFF"),
            ("red", "#FF0000"),
            ("green", "#00FF00"),
            ("blue", "#0000FF"),
            ("yellow", "#FFFF00"),
            ("cyan", "#00FFFF"),
            ("magenta", "#FF00FF"),
            ("gray", "#808080"),
            ("darkred", "#8B0000"),
            ("darkgreen", "#006400"),
            ("darkblue", "#00008B"),
            ("darkgray", "#A9A9A9"),
            ("lightgray", "#D3D3D3"),
            ("orange", "#FFA500"),
            ("purple", "#800080"),
            ("pink", "#FFC0CB"),
            ("brown", "#A52A2A"),
            ("gold", "#FFD700"),
            ("silver", "#C0C0C0"),
            ("lightblue", "#ADD8E6"),
            ("lightgreen", "#90EE90"),
            ("transparent", "#00000000"),
        ];
        assert_eq!(table.len(), CSS_COLORS.len());
        for (name, hex) in table {
            assert_eq!(lookup(name), Color::parse_hex(hex).unwrap(), "{}", name);
        }
    }

    #[test]
    fn test_only_transparent_is_translucent() {
        for (name, color) in CSS_COLORS {
            let expected = if name == "transparent" { 0 } else { 255 };
            assert_eq!(color.a, expected, "{}", name);
        }
    }
}
