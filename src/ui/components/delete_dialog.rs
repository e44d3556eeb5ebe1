//! Delete customer confirmation dialog

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use super::modal_overlay;
use crate::app::Message;
use crate::features::DeleteConfirmation;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

const DIALOG_WIDTH: f32 = 420.0;

/// Build the "Delete {id}" confirmation
pub fn view(
    dialog: &DeleteConfirmation,
    animation_progress: f32,
    locale: Locale,
) -> Element<'_, Message> {
    let title = text(format!(
        "{} {}",
        locale.get(Key::DeleteCustomerTitle),
        dialog.customer_id()
    ))
    .size(18)
    .font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    })
    .style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let message = text(locale.get(Key::DeleteCustomerMessage))
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let cancel_btn = button(text(locale.get(Key::Cancel)).size(14))
        .padding(Padding::new(9.0).left(18.0).right(18.0))
        .style(theme::secondary_button)
        .on_press(Message::CloseModal);

    let (delete_label, delete_action) = if dialog.is_deleting() {
        (Key::Deleting, None)
    } else {
        (Key::Delete, Some(Message::ConfirmDelete))
    };
    let delete_btn = button(text(locale.get(delete_label)).size(14))
        .padding(Padding::new(9.0).left(18.0).right(18.0))
        .style(theme::danger_button)
        .on_press_maybe(delete_action);

    let buttons = row![cancel_btn, Space::new().width(12), delete_btn].align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(12),
        message,
        Space::new().height(24),
        container(buttons).width(Fill).align_x(Alignment::End),
    ]
    .width(Fill);

    modal_overlay::view(content.into(), DIALOG_WIDTH, animation_progress)
}
