//! Toast notification widget
//!
//! Short-lived status line floating above the content. The shell owns at most
//! one toast at a time and hides it after a delay.

use std::time::Duration;

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
}

impl ToastStyle {
    /// Accent color for the indicator bar and icon only
    pub fn accent_color(&self) -> iced::Color {
        match self {
            ToastStyle::Success => theme::success(),
            ToastStyle::Error => theme::danger(&iced::Theme::Dark),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: ToastStyle::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: ToastStyle::Error,
        }
    }
}

/// Build a toast notification widget
///
/// - Elevated surface with a subtle border
/// - Accent color only on the bar and icon
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let accent_color = toast.style.accent_color();

    let accent_bar = container(Space::new().width(3).height(20)).style(move |_theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = text(toast.style.icon()).size(14).color(accent_color);

    let message_widget = text(toast.message.clone())
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
