//! Page header: title, subtitle and the table actions

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

pub fn view<'a>(locale: Locale, dark_mode: bool, fetching: bool) -> Element<'a, Message> {
    let title = text(locale.get(Key::HeaderTitle))
        .size(24)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let subtitle = text(locale.get(Key::HeaderSubtitle))
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let small = Padding::new(8.0).left(14.0).right(14.0);

    // Disabled while a fetch is already running
    let refresh_btn = button(text(locale.get(Key::Refresh)).size(13))
        .padding(small)
        .style(theme::secondary_button)
        .on_press_maybe((!fetching).then_some(Message::LoadCustomers));

    let theme_key = if dark_mode {
        Key::ThemeLight
    } else {
        Key::ThemeDark
    };
    let theme_btn = button(text(locale.get(theme_key)).size(13))
        .padding(small)
        .style(theme::secondary_button)
        .on_press(Message::ToggleTheme);

    let language_btn = button(text(locale.language.next().display_name()).size(13))
        .padding(small)
        .style(theme::secondary_button)
        .on_press(Message::ToggleLanguage);

    let add_btn = button(text(locale.get(Key::AddCustomerButton)).size(13))
        .padding(small)
        .style(theme::primary_button)
        .on_press(Message::OpenAddCustomer);

    row![
        column![title, Space::new().height(4), subtitle].width(Fill),
        row![language_btn, theme_btn, refresh_btn, add_btn]
            .spacing(8)
            .align_y(Alignment::Center),
    ]
    .align_y(Alignment::Center)
    .into()
}
