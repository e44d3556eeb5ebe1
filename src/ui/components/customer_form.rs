//! Add/Edit customer form modal

use iced::widget::{Space, button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use super::modal_overlay;
use crate::api::CustomerField;
use crate::app::Message;
use crate::features::{FormModal, ReferenceKind};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

const DIALOG_WIDTH: f32 = 560.0;

/// Build the form modal for the mounted form
pub fn view(form: &FormModal, animation_progress: f32, locale: Locale) -> Element<'_, Message> {
    let title = text(locale.get(form.header_key()))
        .size(20)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let names = row![
        text_field(form, CustomerField::FirstName, locale),
        Space::new().width(16),
        text_field(form, CustomerField::LastName, locale),
    ];

    let choices = row![
        select_field(form, CustomerField::Title, ReferenceKind::Titles, locale),
        Space::new().width(16),
        select_field(form, CustomerField::Country, ReferenceKind::Countries, locale),
    ];

    let error_line: Element<'_, Message> = if form.submit_failed() {
        text(locale.get(Key::FormSubmitFailed))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::danger(theme)),
            })
            .into()
    } else {
        Space::new().height(0).into()
    };

    let cancel_btn = button(text(locale.get(Key::Cancel)).size(14))
        .padding(Padding::new(9.0).left(18.0).right(18.0))
        .style(theme::secondary_button)
        .on_press(Message::CloseModal);

    let submit_label = if form.is_submitting() {
        Key::Submitting
    } else {
        Key::Submit
    };
    let submit_btn = button(text(locale.get(submit_label)).size(14))
        .padding(Padding::new(9.0).left(18.0).right(18.0))
        .style(theme::primary_button)
        .on_press_maybe(form.can_submit().then_some(Message::SubmitForm));

    let buttons = row![cancel_btn, Space::new().width(12), submit_btn].align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(20),
        names,
        Space::new().height(14),
        text_field(form, CustomerField::Email, locale),
        Space::new().height(14),
        choices,
        Space::new().height(16),
        error_line,
        Space::new().height(12),
        container(buttons).width(Fill).align_x(Alignment::End),
    ]
    .width(Fill);

    modal_overlay::view(content.into(), DIALOG_WIDTH, animation_progress)
}

fn label(field: CustomerField, locale: Locale) -> Element<'static, Message> {
    text(locale.get(Key::field_label(field)))
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

/// Controlled text input; every keystroke goes back through `FormFieldChanged`
fn text_field(form: &FormModal, field: CustomerField, locale: Locale) -> Element<'_, Message> {
    let input = text_input("", form.value(field))
        .on_input(move |value| Message::FormFieldChanged(field, value))
        .on_submit(Message::SubmitForm)
        .padding([10, 12])
        .size(14)
        .style(theme::form_text_input);

    column![label(field, locale), Space::new().height(6), input]
        .width(Fill)
        .into()
}

/// Enumerated choice; disabled with a status placeholder until its list has loaded
fn select_field(
    form: &FormModal,
    field: CustomerField,
    kind: ReferenceKind,
    locale: Locale,
) -> Element<'_, Message> {
    let list = form.reference(kind);

    let control: Element<'_, Message> = if list.is_selectable() {
        let selected = Some(form.value(field).to_string()).filter(|v| !v.is_empty());
        pick_list(list.options(), selected, move |value| {
            Message::FormFieldChanged(field, value)
        })
        .placeholder(locale.get(Key::SelectPlaceholder))
        .width(Fill)
        .padding([10, 12])
        .text_size(14)
        .style(theme::form_pick_list)
        .menu_style(theme::form_pick_list_menu)
        .into()
    } else {
        let status = if list.is_loading() {
            Key::SelectLoading
        } else {
            Key::SelectFailed
        };
        container(text(locale.get(status)).size(14))
            .width(Fill)
            .padding([10, 12])
            .style(theme::disabled_select)
            .into()
    };

    column![label(field, locale), Space::new().height(6), control]
        .width(Fill)
        .into()
}
