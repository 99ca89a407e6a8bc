// Helper utilities for segment components
use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse color from string
/// Accepts named colors and `#RRGGBB`; returns None for anything else
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(hex_color);
    }
    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}

/// Center a `width` x `height` box inside `area`, clipped to it
pub fn centered_in(width: u16, height: u16, area: ratatui::layout::Rect) -> ratatui::layout::Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    ratatui::layout::Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0x2A84D2), Color::Rgb(42, 132, 210));
    }

    #[test]
    fn test_parse_color_names_and_hex() {
        assert_eq!(parse_color("White"), Some(Color::White));
        assert_eq!(parse_color("#2D3E64"), Some(Color::Rgb(45, 62, 100)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#+ABCDE"), None);
        assert_eq!(parse_color("#-00000"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_centered_in() {
        let area = Rect { x: 10, y: 5, width: 20, height: 3 };
        assert_eq!(centered_in(6, 1, area), Rect { x: 17, y: 6, width: 6, height: 1 });
        assert_eq!(centered_in(40, 9, area), area);
    }
}
