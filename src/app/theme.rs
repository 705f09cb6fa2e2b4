//! UI colors in one place, overridable from the `theme` settings section.

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub gutter_fg: Color,
    /// Background of marked lines in the original pane.
    pub removed_bg: Color,
    /// Background of marked lines in the modified pane.
    pub added_bg: Color,
    pub marked_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub dialog_border: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
    pub error_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    let env = |name: &str| std::env::var(name).unwrap_or_default().to_ascii_lowercase();
    color_support_from(
        &env("CODETRACK_COLOR_SUPPORT"),
        &env("COLORTERM"),
        &env("TERM"),
    )
}

fn color_support_from(forced: &str, colorterm: &str, term: &str) -> TerminalColorSupport {
    match forced.trim() {
        "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
        "256" | "ansi256" => return TerminalColorSupport::Ansi256,
        "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
        _ => {}
    }

    let truecolor = ["truecolor", "24bit", "direct"];
    if truecolor
        .iter()
        .any(|tag| colorterm.contains(tag) || term.contains(tag))
    {
        TerminalColorSupport::TrueColor
    } else if term.contains("256color") {
        TerminalColorSupport::Ansi256
    } else {
        TerminalColorSupport::Ansi16
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            accent_fg: Color::Yellow,
            header_fg: Color::Cyan,
            gutter_fg: Color::DarkGray,
            removed_bg: Color::Rgb(0xF0, 0x80, 0x80),
            added_bg: Color::Rgb(0x90, 0xEE, 0x90),
            marked_fg: Color::Black,
            button_bg: Color::DarkGray,
            button_fg: Color::White,
            status_bg: Color::Reset,
            status_fg: Color::Gray,
            dialog_border: Color::Cyan,
            dialog_bg: Color::Reset,
            dialog_fg: Color::White,
            menu_selected_bg: Color::DarkGray,
            menu_selected_fg: Color::White,
            error_fg: Color::Red,
        }
    }
}

impl UiTheme {
    /// Theme from settings, downgraded to what the terminal can show.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme.apply_color_support(detect_terminal_color_support());
        theme
    }

    /// Override every color the settings name; unparsable values are skipped.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        fn set(slot: &mut Color, value: &Option<String>) {
            let Some(value) = value.as_deref() else {
                return;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value, "unknown theme color"),
            }
        }

        set(&mut self.focus_border, &settings.focus_border);
        set(&mut self.inactive_border, &settings.inactive_border);
        set(&mut self.accent_fg, &settings.accent_fg);
        set(&mut self.header_fg, &settings.header_fg);
        set(&mut self.gutter_fg, &settings.gutter_fg);
        set(&mut self.removed_bg, &settings.removed_bg);
        set(&mut self.added_bg, &settings.added_bg);
        set(&mut self.marked_fg, &settings.marked_fg);
        set(&mut self.button_bg, &settings.button_bg);
        set(&mut self.button_fg, &settings.button_fg);
        set(&mut self.status_bg, &settings.status_bg);
        set(&mut self.status_fg, &settings.status_fg);
        set(&mut self.dialog_border, &settings.dialog_border);
        set(&mut self.dialog_bg, &settings.dialog_bg);
        set(&mut self.dialog_fg, &settings.dialog_fg);
        set(&mut self.menu_selected_bg, &settings.menu_selected_bg);
        set(&mut self.menu_selected_fg, &settings.menu_selected_fg);
        set(&mut self.error_fg, &settings.error_fg);
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for slot in [
            &mut self.focus_border,
            &mut self.inactive_border,
            &mut self.accent_fg,
            &mut self.header_fg,
            &mut self.gutter_fg,
            &mut self.removed_bg,
            &mut self.added_bg,
            &mut self.marked_fg,
            &mut self.button_bg,
            &mut self.button_fg,
            &mut self.status_bg,
            &mut self.status_fg,
            &mut self.dialog_border,
            &mut self.dialog_bg,
            &mut self.dialog_fg,
            &mut self.menu_selected_bg,
            &mut self.menu_selected_fg,
            &mut self.error_fg,
        ] {
            *slot = map_color_for_support(*slot, support);
        }
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, c) => c,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(r, g, b, 0..=255))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(r, g, b, 0..=15))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_to_rgb(i);
            Color::Indexed(nearest_index(r, g, b, 0..=15))
        }
        // Named colors are already in the 16-color set.
        (_, c) => c,
    }
}

fn nearest_index(r: u8, g: u8, b: u8, candidates: std::ops::RangeInclusive<u8>) -> u8 {
    let distance = |i: &u8| {
        let (pr, pg, pb) = ansi256_to_rgb(*i);
        let d = |a: u8, b: u8| (i32::from(a) - i32::from(b)).pow(2) as u32;
        d(r, pr) + d(g, pg) + d(b, pb)
    };
    candidates.min_by_key(distance).unwrap_or(0)
}

fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    const ANSI16: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (205, 0, 0),
        (0, 205, 0),
        (205, 205, 0),
        (0, 0, 238),
        (205, 0, 205),
        (0, 205, 205),
        (229, 229, 229),
        (127, 127, 127),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (92, 92, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];
    const CUBE: [u8; 6] = [0, 95, 135, 175, 215, 255];

    match index {
        0..=15 => ANSI16[index as usize],
        16..=231 => {
            let i = index - 16;
            (
                CUBE[(i / 36) as usize],
                CUBE[((i / 6) % 6) as usize],
                CUBE[(i % 6) as usize],
            )
        }
        _ => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    }
}

/// Parse `#rrggbb` or a color name (`red`, `dark_gray`, `light_green`, ...).
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }

    let name = v.to_ascii_lowercase().replace(['-', ' '], "_");
    let color = match name.as_str() {
        "reset" | "default" | "none" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        "white" => Color::White,
        "light_coral" => Color::Rgb(0xF0, 0x80, 0x80),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
