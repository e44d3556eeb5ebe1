//! Theme system for the customer panel
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

/// Heading font weight
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0f1115);
    pub const SURFACE: Color = color!(0x181b21);
    pub const BORDER: Color = color!(0x2a2e36);
    pub const TEXT_MUTED: Color = color!(0x8b909a);
    pub const TEXT_SECONDARY: Color = color!(0xb4b9c2);
    pub const TEXT_PRIMARY: Color = color!(0xf5f6f8);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf3f4f6);
    pub const BORDER: Color = color!(0xe5e7eb);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_SECONDARY: Color = color!(0x4b5563);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Indigo accent for primary actions and links
pub const ACCENT: Color = color!(0x4f46e5);

/// Accent hover color
pub const ACCENT_HOVER: Color = color!(0x6366f1);

pub fn background(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

/// Surface elevated color (for dialogs, toasts)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        Color::from_rgb(0.12, 0.13, 0.15)
    } else {
        Color::from_rgb(1.0, 1.0, 1.0)
    }
}

/// Surface container color (for input fields)
pub fn surface_container(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        Color::from_rgb(0.15, 0.16, 0.18)
    } else {
        Color::from_rgb(0.97, 0.97, 0.98)
    }
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        Color::from_rgb(0.94, 0.36, 0.36)
    } else {
        Color::from_rgb(0.86, 0.15, 0.15)
    }
}

pub fn danger_hover(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        Color::from_rgb(1.0, 0.45, 0.45)
    } else {
        Color::from_rgb(0.73, 0.11, 0.11)
    }
}

pub fn success() -> Color {
    Color::from_rgb(0.3, 0.8, 0.5)
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Overlay backdrop color
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark_theme(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, opacity)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, opacity * 0.6)
    }
}

pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// Dialog box with the fade progress applied to its background alpha
pub fn dialog_box(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity,
            ..surface_elevated(theme)
        })),
        border: Border {
            color: divider(theme),
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Rounded card holding the customer table
pub fn table_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        border: Border {
            color: border_color(theme),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color { a: 0.45, ..ACCENT })),
            text_color: Color {
                a: 0.7,
                ..Color::WHITE
            },
            ..base
        },
        button::Status::Active => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_muted(theme),
            ..base
        },
        button::Status::Active => base,
    }
}

/// Text button (no background, accent text; used for row actions)
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: if is_dark_theme(theme) {
            ACCENT_HOVER
        } else {
            ACCENT
        },
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Text button for destructive row actions
pub fn danger_text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: danger(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            text_color: danger_hover(theme),
            ..base
        },
        _ => base,
    }
}

/// Danger button (red for destructive actions)
pub fn danger_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(danger(theme))),
        text_color: Color::WHITE,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(danger_hover(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: 0.5,
                ..danger(theme)
            })),
            ..base
        },
        button::Status::Active => base,
    }
}

// ============================================================================
// Form Styles
// ============================================================================

pub fn form_text_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => ACCENT,
        _ => border_color(theme),
    };

    text_input::Style {
        background: Background::Color(surface_container(theme)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color { a: 0.4, ..ACCENT },
    }
}

/// Dropdown style - same surface as text inputs
pub fn form_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let border = match status {
        pick_list::Status::Opened { .. } => ACCENT,
        pick_list::Status::Hovered => text_muted(theme),
        pick_list::Status::Active => border_color(theme),
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(surface_container(theme)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border,
        },
    }
}

pub fn form_pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(surface_elevated(theme)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        selected_text_color: Color::WHITE,
        selected_background: Background::Color(ACCENT),
        shadow: Shadow::default(),
    }
}

/// Stand-in for a select whose options are not available
pub fn disabled_select(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        text_color: Some(text_muted(theme)),
        ..Default::default()
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

pub fn thin_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
