//! Message update handlers - thin dispatcher delegating to submodules

mod customers;
mod delete;
mod form;
mod shell;

use iced::Task;

use super::{App, Message, helpers};
use crate::cache::CUSTOMERS_KEY;
use crate::features::ReferenceKind;
use crate::ui::widgets::{TOAST_DURATION, Toast};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_customers(&message) {
            return task;
        }
        if let Some(task) = self.handle_form(&message) {
            return task;
        }
        if let Some(task) = self.handle_delete(&message) {
            return task;
        }
        if let Some(task) = self.handle_shell(&message) {
            return task;
        }

        Task::none()
    }

    /// Start a fetch of the customer collection; earlier in-flight fetches become outdated
    pub(super) fn refetch_customers(&mut self) -> Task<Message> {
        let ticket = self.core.customers.begin_fetch(CUSTOMERS_KEY);
        let api = self.core.api.clone();
        Task::perform(helpers::fetch_customers(api), move |result| {
            Message::CustomersLoaded(ticket, result)
        })
    }

    /// Fetch one reference list on behalf of form `session`
    fn load_reference(&self, session: u64, kind: ReferenceKind) -> Task<Message> {
        let api = self.core.api.clone();
        Task::perform(helpers::fetch_reference(api, kind), move |result| {
            Message::ReferenceLoaded(session, kind, result)
        })
    }

    /// Show a toast and schedule its removal
    fn flash_toast(&mut self, toast: Toast) -> Task<Message> {
        let seq = self.ui.show_toast(toast);
        Task::perform(
            async {
                tokio::time::sleep(TOAST_DURATION).await;
            },
            move |_| Message::HideToast(seq),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Customer, CustomerField};
    use crate::cache::QueryStore;
    use crate::features::Settings;
    use crate::features::customer_form::SubmitState;
    use crate::ui::widgets::toast::ToastStyle;
    use iced::keyboard::{Key, Modifiers, key::Named};

    fn app() -> App {
        App::with_settings(Settings::default()).0
    }

    fn customer(id: &str) -> Customer {
        Customer {
            id: id.into(),
            first_name: "Patricia".into(),
            last_name: "Brown".into(),
            email: "patricia.brown@example.com".into(),
            title: "Dynamic Metrics Orchestrator".into(),
            country: "Qatar".into(),
        }
    }

    /// Resolve the customer query so it is fresh
    fn settle_customers(app: &mut App) {
        let ticket = app.core.customers.begin_fetch(CUSTOMERS_KEY);
        app.core.customers.resolve(&ticket, Ok(vec![customer("2")]));
        assert!(!app.core.customers.is_stale(CUSTOMERS_KEY));
    }

    fn open_session(app: &App) -> u64 {
        app.ui.modal.as_ref().map(|m| m.session()).unwrap()
    }

    fn fill_add_form(app: &mut App) {
        for (field, value) in [
            (CustomerField::FirstName, "Bob"),
            (CustomerField::LastName, "Williams"),
            (CustomerField::Email, "bob.williams@example.com"),
            (CustomerField::Title, "Corporate Tactics Engineer"),
            (CustomerField::Country, "Malta"),
        ] {
            let _ = app.update(Message::FormFieldChanged(field, value.into()));
        }
    }

    #[test]
    fn startup_fetches_customers() {
        let app = app();
        assert!(app.core.customers.is_fetching(CUSTOMERS_KEY));
        assert!(app.ui.modal.is_none());
    }

    #[test]
    fn outdated_customer_fetch_is_ignored() {
        let mut app = app();
        let old = app.core.customers.begin_fetch(CUSTOMERS_KEY);
        let _ = app.update(Message::LoadCustomers);

        let _ = app.update(Message::CustomersLoaded(old, Ok(vec![customer("9")])));
        assert!(app.core.customers.get(CUSTOMERS_KEY).is_none());
        assert!(app.core.customers.is_fetching(CUSTOMERS_KEY));
    }

    #[test]
    fn successful_add_closes_form_and_refetches() {
        let mut app = app();
        settle_customers(&mut app);

        let _ = app.update(Message::OpenAddCustomer);
        let session = open_session(&app);
        fill_add_form(&mut app);
        let _ = app.update(Message::SubmitForm);
        assert!(app.ui.form_mut().is_some_and(|f| f.is_submitting()));

        let _ = app.update(Message::FormSubmitted(session, Ok(())));
        assert!(app.ui.modal.is_none());
        assert!(app.core.customers.is_stale(CUSTOMERS_KEY));
        assert!(app.core.customers.is_fetching(CUSTOMERS_KEY));
        assert_eq!(app.ui.toast.as_ref().map(|t| t.style), Some(ToastStyle::Success));
    }

    #[test]
    fn rejected_write_keeps_form_open() {
        let mut app = app();
        settle_customers(&mut app);

        let _ = app.update(Message::OpenAddCustomer);
        let session = open_session(&app);
        fill_add_form(&mut app);
        let _ = app.update(Message::SubmitForm);
        let _ = app.update(Message::FormSubmitted(session, Err("POST /customers returned 500".into())));

        let form = app.ui.form_for(session).unwrap();
        assert!(form.submit_failed());
        assert_eq!(form.value(CustomerField::FirstName), "Bob");
        assert!(!app.core.customers.is_stale(CUSTOMERS_KEY));
    }

    #[test]
    fn incomplete_form_does_not_submit() {
        let mut app = app();
        let _ = app.update(Message::OpenAddCustomer);
        let _ = app.update(Message::FormFieldChanged(CustomerField::FirstName, "Bob".into()));
        let _ = app.update(Message::SubmitForm);

        assert_eq!(app.ui.form_mut().map(|f| f.state().clone()), Some(SubmitState::Idle));
    }

    #[test]
    fn late_success_for_closed_form_still_invalidates() {
        let mut app = app();
        let _ = app.update(Message::OpenEditCustomer(customer("2")));
        let session = open_session(&app);
        let _ = app.update(Message::FormFieldChanged(CustomerField::LastName, "Brownz".into()));
        let _ = app.update(Message::SubmitForm);
        let _ = app.update(Message::CloseModal);
        settle_customers(&mut app);

        let _ = app.update(Message::FormSubmitted(session, Ok(())));
        assert!(app.ui.modal.is_none());
        assert!(app.core.customers.is_stale(CUSTOMERS_KEY));
    }

    #[test]
    fn late_failure_for_replaced_form_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::OpenAddCustomer);
        let old = open_session(&app);
        fill_add_form(&mut app);
        let _ = app.update(Message::SubmitForm);

        let _ = app.update(Message::OpenAddCustomer);
        let _ = app.update(Message::FormSubmitted(old, Err("timed out".into())));
        let _ = app.update(Message::ReferenceLoaded(
            old,
            ReferenceKind::Countries,
            Ok(vec!["Malta".into()]),
        ));

        let form = app.ui.form_mut().unwrap();
        assert_ne!(form.session(), old);
        assert_eq!(form.state(), &SubmitState::Idle);
        assert!(form.reference(ReferenceKind::Countries).is_loading());
    }

    #[test]
    fn reference_lists_reach_the_open_form() {
        let mut app = app();
        let _ = app.update(Message::OpenAddCustomer);
        let session = open_session(&app);

        let _ = app.update(Message::ReferenceLoaded(
            session,
            ReferenceKind::Titles,
            Ok(vec!["Corporate Tactics Engineer".into()]),
        ));
        let _ = app.update(Message::ReferenceLoaded(
            session,
            ReferenceKind::Countries,
            Err("GET /countries returned 503".into()),
        ));

        let form = app.ui.form_mut().unwrap();
        assert_eq!(
            form.reference(ReferenceKind::Titles).options(),
            ["Corporate Tactics Engineer".to_string()]
        );
        assert!(form.reference(ReferenceKind::Countries).is_failed());
    }

    #[test]
    fn delete_success_closes_dialog_and_invalidates() {
        let mut app = app();
        settle_customers(&mut app);

        let _ = app.update(Message::RequestDeleteCustomer("7".into()));
        let session = open_session(&app);
        let _ = app.update(Message::ConfirmDelete);
        assert!(app.ui.delete_mut().is_some_and(|d| d.is_deleting()));

        let _ = app.update(Message::DeleteFinished(session, Ok(())));
        assert!(app.ui.modal.is_none());
        assert!(app.core.customers.is_stale(CUSTOMERS_KEY));
    }

    #[test]
    fn delete_failure_keeps_dialog_and_shows_error() {
        let mut app = app();
        settle_customers(&mut app);

        let _ = app.update(Message::RequestDeleteCustomer("7".into()));
        let session = open_session(&app);
        let _ = app.update(Message::ConfirmDelete);
        let _ = app.update(Message::DeleteFinished(session, Err("404".into())));

        assert!(app.ui.delete_for(session).is_some());
        assert!(!app.core.customers.is_stale(CUSTOMERS_KEY));
        assert_eq!(app.ui.toast.as_ref().map(|t| t.style), Some(ToastStyle::Error));
    }

    /// Collects formatted log output for assertions
    #[derive(Clone, Default)]
    struct LogCapture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogCapture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    #[test]
    fn late_delete_failure_is_logged_as_error() {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut app = app();
            settle_customers(&mut app);

            let _ = app.update(Message::RequestDeleteCustomer("7".into()));
            let session = open_session(&app);
            let _ = app.update(Message::ConfirmDelete);
            let _ = app.update(Message::CloseModal);
            let _ = app.update(Message::DeleteFinished(session, Err("500".into())));

            assert!(app.ui.modal.is_none());
            assert!(app.ui.toast.is_none());
            assert!(!app.core.customers.is_stale(CUSTOMERS_KEY));
        });

        let logs = capture.contents();
        assert!(
            logs.lines()
                .any(|line| line.contains("ERROR") && line.contains("closed dialog")),
            "no error line in:\n{}",
            logs
        );
    }

    #[test]
    fn escape_closes_open_modal() {
        let mut app = app();
        let _ = app.update(Message::RequestDeleteCustomer("7".into()));
        let _ = app.update(Message::KeyPressed(
            Key::Named(Named::Escape),
            Modifiers::default(),
        ));
        assert!(app.ui.modal.is_none());
    }

    #[test]
    fn stale_hide_toast_keeps_newer_toast() {
        let mut app = app();
        let first = app.ui.show_toast(Toast::success("one"));
        let _second = app.ui.show_toast(Toast::success("two"));

        let _ = app.update(Message::HideToast(first));
        assert_eq!(app.ui.toast.as_ref().map(|t| t.message.as_str()), Some("two"));
    }
}
