use iced::{widget::button, Background, Color, Theme};

pub const ACCENT: Color = Color::from_rgb8(0x06, 0x5f, 0x46);
pub const DRAWER_BG: Color = Color::from_rgb8(0x0b, 0x14, 0x12);
pub const DRAWER_ITEM_BG: Color = Color::from_rgb8(0x0f, 0x1f, 0x1a);
pub const DRAWER_TEXT_ACTIVE: Color = Color::from_rgb8(0xe6, 0xf4, 0xf1);
pub const DRAWER_TEXT_INACTIVE: Color = Color::from_rgb8(0xa5, 0xb3, 0xad);
pub const TEXT_ON_ACCENT: Color = Color::from_rgb8(0xe9, 0xf7, 0xf3);

// KPI status tokens.
pub const STATUS_ACHIEVED: Color = Color::from_rgb8(0x70, 0xad, 0x47);
pub const STATUS_IN_PROGRESS: Color = Color::from_rgb8(0xed, 0x7d, 0x31);

// Distribution slice palette.
pub const SLICE_PRIMARY: Color = Color::from_rgb8(0x44, 0x72, 0xc4);
pub const SLICE_SECONDARY: Color = Color::from_rgb8(0x70, 0xad, 0x47);
pub const SLICE_WARNING: Color = Color::from_rgb8(0xed, 0x7d, 0x31);

// Trend series colors.
pub const SERIES_TESTING: Color = Color::from_rgb8(0x5b, 0x9b, 0xd5);
pub const SERIES_INSPECTION: Color = Color::from_rgb8(0x70, 0xad, 0x47);
pub const SERIES_COVERAGE: Color = Color::from_rgb8(0xed, 0x7d, 0x31);
pub const SERIES_RELIABILITY: Color = Color::from_rgb8(0x70, 0x30, 0xa0);

// Error banner.
pub const BANNER_BG: Color = Color::from_rgb8(0x7f, 0x1d, 0x1d);
pub const BANNER_TEXT: Color = Color::from_rgb8(0xfe, 0xe2, 0xe2);

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let mut background = ACCENT;

    if matches!(status, button::Status::Hovered) {
        background.a = 0.85;
    }

    if matches!(status, button::Status::Pressed) {
        background.a = 0.7;
    }

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_ON_ACCENT,
        ..Default::default()
    }
}
