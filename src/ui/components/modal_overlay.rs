//! Backdrop + centered box shared by the form and delete modals

use iced::mouse::Interaction;
use iced::widget::{Space, container, mouse_area, opaque, stack};
use iced::{Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Wrap `content` in a dialog box over a dimmed backdrop
///
/// Clicking the backdrop closes the modal. The whole overlay swallows pointer
/// events so the table underneath neither scrolls nor reacts.
pub fn view<'a>(content: Element<'a, Message>, width: f32, progress: f32) -> Element<'a, Message> {
    let backdrop_opacity = 0.6 * progress;
    let backdrop = mouse_area(container(Space::new()).width(Fill).height(Fill).style(
        move |theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(
                theme,
                backdrop_opacity,
            ))),
            ..Default::default()
        },
    ))
    .on_press(Message::CloseModal);

    let dialog_box = container(content)
        .width(width)
        .padding(28)
        .style(move |theme| theme::dialog_box(theme, progress));

    // Clicks inside the box must not fall through to the backdrop
    let dialog_box = mouse_area(dialog_box).on_press(Message::Noop);

    let dialog_centered = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill);

    let dialog_stack = stack![backdrop, dialog_centered].width(Fill).height(Fill);

    let event_blocker = mouse_area(dialog_stack)
        .interaction(Interaction::Idle)
        .on_press(Message::Noop);

    opaque(event_blocker).into()
}
