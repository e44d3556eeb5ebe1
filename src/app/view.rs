// src/app/view.rs
//! Root view: header, customer table, modal and toast overlays

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::{App, Message, Modal};
use crate::cache::{CUSTOMERS_KEY, QueryStore};
use crate::ui::components::{customer_form, customers_table, delete_dialog, header_bar};
use crate::ui::{theme, widgets};

const CONTENT_MAX_WIDTH: f32 = 1100.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;
        let customers = &self.core.customers;
        let fetching = customers.is_fetching(CUSTOMERS_KEY);

        let header = header_bar::view(locale, self.core.settings.display.dark_mode, fetching);
        let table = customers_table::view(
            customers.get(CUSTOMERS_KEY).map(Vec::as_slice),
            fetching,
            customers.error(CUSTOMERS_KEY).is_some(),
            locale,
        );

        let main_layout = container(
            column![header, Space::new().height(24), table]
                .max_width(CONTENT_MAX_WIDTH)
                .height(Fill),
        )
        .padding(32)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .style(theme::main_content);

        // Always use the same stack structure so the table keeps its scroll position
        let progress = self.ui.modal_animation.progress();
        let modal_overlay: Element<'_, Message> = match &self.ui.modal {
            Some(Modal::Form(form)) => customer_form::view(form, progress, locale),
            Some(Modal::Delete(dialog)) => delete_dialog::view(dialog, progress, locale),
            None => Space::new().width(0).height(0).into(),
        };

        let toast_overlay: Element<'_, Message> = match &self.ui.toast {
            Some(toast) => container(widgets::view_toast(toast))
                .width(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .into(),
            None => Space::new().width(0).height(0).into(),
        };

        stack![main_layout, modal_overlay, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
