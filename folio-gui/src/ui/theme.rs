pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Insets, Key};
use folio_core::{Palette, Rgb};

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const BLUE_LIGHT: Color = Color::rgb8(0x5c, 0xc4, 0xff);
pub const BLUE_DARK: Color = Color::rgb8(0x00, 0x8d, 0xdd);

pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");

pub const LINK_HOT_COLOR: Key<Color> = Key::new("app.link-hot-color");
pub const LINK_COLD_COLOR: Key<Color> = Key::new("app.link-cold-color");

fn color(rgb: Rgb) -> Color {
    Color::rgb8(rgb.0, rgb.1, rgb.2)
}

fn tint(rgb: Rgb, alpha: f64) -> Color {
    Color::rgba8(rgb.0, rgb.1, rgb.2, (alpha * 255.0).round() as u8)
}

/// Derives every color from the two palette slots, so switching mode only
/// swaps `dark` and `light`.
pub fn setup(env: &mut Env, palette: &Palette) {
    let dark = palette.dark;
    let light = palette.light;

    env.set(WINDOW_BACKGROUND_COLOR, color(light));
    env.set(LABEL_COLOR, color(dark));
    env.set(PLACEHOLDER_COLOR, tint(dark, 0.6));
    env.set(PRIMARY_LIGHT, BLUE_LIGHT);
    env.set(PRIMARY_DARK, BLUE_DARK);

    env.set(BACKGROUND_LIGHT, color(light));
    env.set(BACKGROUND_DARK, tint(dark, 0.06));
    env.set(FOREGROUND_LIGHT, color(dark));
    env.set(FOREGROUND_DARK, color(dark));

    env.set(BUTTON_DARK, tint(dark, 0.12));
    env.set(BUTTON_LIGHT, tint(dark, 0.04));
    env.set(BUTTON_BORDER_RADIUS, 4.0);
    env.set(BUTTON_BORDER_WIDTH, 1.0);

    env.set(BORDER_DARK, tint(dark, 0.2));
    env.set(BORDER_LIGHT, tint(dark, 0.1));

    env.set(SELECTION_COLOR, BLUE_LIGHT);
    env.set(SELECTION_TEXT_COLOR, Color::BLACK);

    env.set(CURSOR_COLOR, color(dark));

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(14.0)
            .with_weight(FontWeight::MEDIUM),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(TEXT_SIZE_NORMAL, 14.0);
    env.set(TEXT_SIZE_LARGE, 18.0);

    env.set(BASIC_WIDGET_HEIGHT, grid(3.0));
    env.set(WIDE_WIDGET_WIDTH, grid(12.0));
    env.set(BORDERED_WIDGET_HEIGHT, grid(4.0));

    env.set(TEXTBOX_BORDER_RADIUS, 4.0);
    env.set(TEXTBOX_BORDER_WIDTH, 1.0);
    env.set(TEXTBOX_INSETS, Insets::uniform_xy(grid(1.2), grid(1.0)));

    env.set(SCROLLBAR_COLOR, color(light));
    env.set(SCROLLBAR_BORDER_COLOR, tint(dark, 0.45));
    env.set(SCROLLBAR_MAX_OPACITY, 0.7);
    env.set(SCROLLBAR_FADE_DELAY, 1500u64);
    env.set(SCROLLBAR_WIDTH, 8.0);
    env.set(SCROLLBAR_PAD, 2.0);
    env.set(SCROLLBAR_RADIUS, 5.0);
    env.set(SCROLLBAR_EDGE_WIDTH, 1.0);

    env.set(WIDGET_PADDING_VERTICAL, grid(1.0));
    env.set(WIDGET_PADDING_HORIZONTAL, grid(1.0));
    env.set(WIDGET_CONTROL_COMPONENT_PADDING, grid(1.0));

    env.set(LINK_HOT_COLOR, tint(dark, 0.06));
    env.set(LINK_COLD_COLOR, tint(dark, 0.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Mode;

    #[test]
    fn palette_slots_map_to_opaque_colors() {
        let night = Mode::Night.palette();
        assert_eq!(color(night.light).as_rgba_u32(), 0x0a0a14ff);
        assert_eq!(color(night.dark).as_rgba_u32(), 0xffffffff);
    }

    #[test]
    fn tints_keep_the_slot_color() {
        assert_eq!(tint(Rgb::INK, 0.0).as_rgba_u32(), 0x0a0a1400);
        assert_eq!(tint(Rgb::INK, 1.0).as_rgba_u32(), 0x0a0a14ff);
        assert_eq!(tint(Rgb::PAPER, 0.6).as_rgba_u32() & 0xff, 153);
    }
}
