//! Customer table: one row per customer with Edit and Delete triggers

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Length};

use crate::api::Customer;
use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

const ACTIONS_WIDTH: f32 = 140.0;

/// What the table body shows when it has no rows to render
pub fn placeholder(rows: Option<&[Customer]>, fetching: bool, failed: bool) -> Option<Key> {
    match rows {
        Some(rows) if !rows.is_empty() => None,
        Some(_) => Some(Key::TableEmpty),
        None if failed && !fetching => Some(Key::TableLoadFailed),
        None => Some(Key::TableLoading),
    }
}

/// Build the table card
pub fn view<'a>(
    rows: Option<&'a [Customer]>,
    fetching: bool,
    failed: bool,
    locale: Locale,
) -> Element<'a, Message> {
    let heading = |key: Key| {
        text(locale.get(key).to_uppercase())
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
    };

    let header = row![
        container(heading(Key::TableName)).width(Length::FillPortion(3)),
        container(heading(Key::TableEmail)).width(Length::FillPortion(3)),
        Space::new().width(ACTIONS_WIDTH),
    ]
    .padding([12, 20]);

    let body: Element<'a, Message> = match placeholder(rows, fetching, failed) {
        Some(key) => {
            let line = text(locale.get(key)).size(14).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            });
            container(line).width(Fill).padding([24, 20]).into()
        }
        None => {
            let rows = rows.unwrap_or_default();
            scrollable(column(rows.iter().map(|customer| customer_row(customer, locale))))
                .style(theme::thin_scrollable)
                .height(Fill)
                .into()
        }
    };

    container(column![header, divider_line(), body])
        .width(Fill)
        .style(theme::table_card)
        .into()
}

fn divider_line<'a>() -> Element<'a, Message> {
    container(Space::new().height(1))
        .width(Fill)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::divider(theme))),
            ..Default::default()
        })
        .into()
}

fn customer_row(customer: &Customer, locale: Locale) -> Element<'_, Message> {
    let name = text(customer.full_name())
        .size(14)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let detail = text(format!("{} · {}", customer.title, customer.country))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let email = text(customer.email.as_str())
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let edit_btn = button(text(locale.get(Key::TableEdit)).size(14))
        .padding([4, 8])
        .style(theme::text_button)
        .on_press(Message::OpenEditCustomer(customer.clone()));

    let delete_btn = button(text(locale.get(Key::TableDelete)).size(14))
        .padding([4, 8])
        .style(theme::danger_text_button)
        .on_press(Message::RequestDeleteCustomer(customer.id.clone()));

    let actions = row![edit_btn, delete_btn]
        .spacing(4)
        .align_y(Alignment::Center);

    let line = row![
        column![name, Space::new().height(2), detail].width(Length::FillPortion(3)),
        container(email).width(Length::FillPortion(3)),
        container(actions)
            .width(ACTIONS_WIDTH)
            .align_x(Alignment::End),
    ]
    .align_y(Alignment::Center)
    .padding([14, 20]);

    column![line, divider_line()].into()
}
