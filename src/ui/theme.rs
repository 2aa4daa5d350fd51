use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub header_accent_bg: Color,
    pub header_accent_fg: Color,
    pub status_ok: Color,
    pub status_err: Color,
    pub statusbar_bg: Color,
    pub overlay_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub surface_bg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub cpu_line: Color,
    pub memory_line: Color,
    pub gpu_line: Color,
}

impl Theme {
    pub fn from_config(theme_name: &str) -> Self {
        match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            header_accent_bg: Color::Rgb(0x00, 0xad, 0xb5),
            header_accent_fg: Color::Rgb(0x22, 0x28, 0x31),
            status_ok: Color::Rgb(0xa6, 0xe3, 0xa1),
            status_err: Color::Rgb(0xf3, 0x8b, 0xa8),
            statusbar_bg: Color::Rgb(0x18, 0x18, 0x25),
            overlay_border: Color::Rgb(0x45, 0x47, 0x5a),
            text_primary: Color::Rgb(0xcd, 0xd6, 0xf4),
            text_secondary: Color::Rgb(0xa6, 0xad, 0xc8),
            accent: Color::Rgb(0x00, 0xad, 0xb5),
            pill_key_bg: Color::Rgb(0x00, 0xad, 0xb5),
            pill_key_fg: Color::Rgb(0x1e, 0x1e, 0x2e),
            pill_desc_fg: Color::Rgb(0xcd, 0xd6, 0xf4),
            surface_bg: Color::Rgb(0x1e, 0x1e, 0x2e),
            selection_bg: Color::Rgb(0x31, 0x32, 0x44),
            selection_fg: Color::Rgb(0xf5, 0xe0, 0xdc),
            cpu_line: Color::Rgb(0x00, 0xad, 0xb5),
            memory_line: Color::Rgb(0xff, 0x57, 0x22),
            gpu_line: Color::Rgb(0xff, 0xc1, 0x07),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            header_accent_bg: Color::Rgb(0x1e, 0x66, 0xf5),
            header_accent_fg: Color::Rgb(0xef, 0xf1, 0xf5),
            status_ok: Color::Rgb(0x40, 0xa0, 0x2b),
            status_err: Color::Rgb(0xd2, 0x0f, 0x39),
            statusbar_bg: Color::Rgb(0xe6, 0xe9, 0xef),
            overlay_border: Color::Rgb(0x9c, 0xa0, 0xb0),
            text_primary: Color::Rgb(0x4c, 0x4f, 0x69),
            text_secondary: Color::Rgb(0x6c, 0x6f, 0x85),
            accent: Color::Rgb(0x1e, 0x66, 0xf5),
            pill_key_bg: Color::Rgb(0x1e, 0x66, 0xf5),
            pill_key_fg: Color::Rgb(0xef, 0xf1, 0xf5),
            pill_desc_fg: Color::Rgb(0x4c, 0x4f, 0x69),
            surface_bg: Color::Rgb(0xef, 0xf1, 0xf5),
            selection_bg: Color::Rgb(0xcc, 0xd0, 0xda),
            selection_fg: Color::Rgb(0x4c, 0x4f, 0x69),
            cpu_line: Color::Rgb(0x04, 0xa5, 0xe5),
            memory_line: Color::Rgb(0xfe, 0x64, 0x0b),
            gpu_line: Color::Rgb(0xdf, 0x8e, 0x1d),
        }
    }
}
