//! Customer form modal controller
//!
//! Owns the draft for one mounted modal and drives the submission lifecycle:
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Succeeded (modal closes)
//!                      |  ^
//!                     err |
//!                      v  |
//!                     Failed --submit--
//! ```
//!
//! The controller never performs I/O. `submit` hands back the write request
//! to issue, and `complete` consumes its result.

use std::collections::BTreeSet;

use tracing::{info, warn};

use super::reference::{ReferenceData, ReferenceKind, ReferenceList};
use crate::api::{Customer, CustomerField, CustomerPatch, NewCustomer};
use crate::cache::{CUSTOMERS_KEY, QueryStore};
use crate::i18n::Key;

/// Add or Edit, decided once at mount time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// The user sees a fixed message; the error itself goes to the log
    Failed,
}

/// The single write a submit produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteRequest {
    Create(NewCustomer),
    Update { id: String, patch: CustomerPatch },
}

/// What the parent should do after a write result is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Write succeeded: close the modal
    Close,
    /// Write failed: keep the modal open with the error shown
    StayOpen,
    /// No write was in flight; nothing changed
    Ignored,
}

#[derive(Debug, Clone)]
pub struct FormModal {
    session: u64,
    mode: FormMode,
    draft: NewCustomer,
    touched: BTreeSet<CustomerField>,
    reference: ReferenceData,
    state: SubmitState,
}

impl FormModal {
    /// Mount in Edit mode when a customer is supplied, Add mode otherwise
    pub fn open(session: u64, customer: Option<&Customer>) -> Self {
        let (mode, draft) = match customer {
            Some(c) => (
                FormMode::Edit { id: c.id.clone() },
                NewCustomer::from_customer(c),
            ),
            None => (FormMode::Add, NewCustomer::default()),
        };
        info!("Opening customer form #{} in {:?} mode", session, mode);

        Self {
            session,
            mode,
            draft,
            touched: BTreeSet::new(),
            reference: ReferenceData::default(),
            state: SubmitState::Idle,
        }
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    #[cfg(test)]
    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn header_key(&self) -> Key {
        match self.mode {
            FormMode::Add => Key::AddCustomerTitle,
            FormMode::Edit { .. } => Key::EditCustomerTitle,
        }
    }

    #[cfg(test)]
    pub fn draft(&self) -> &NewCustomer {
        &self.draft
    }

    pub fn value(&self, field: CustomerField) -> &str {
        self.draft.get(field)
    }

    /// Fields the user has typed into or picked from, in declaration order
    pub fn touched(&self) -> impl Iterator<Item = CustomerField> + '_ {
        self.touched.iter().copied()
    }

    #[cfg(test)]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn submit_failed(&self) -> bool {
        matches!(self.state, SubmitState::Failed)
    }

    pub fn reference(&self, kind: ReferenceKind) -> &ReferenceList {
        self.reference.get(kind)
    }

    /// Controlled-input update; every change marks the field as edited
    pub fn set_field(&mut self, field: CustomerField, value: String) {
        if self.state == SubmitState::Succeeded {
            return;
        }
        self.draft.set(field, value);
        self.touched.insert(field);
    }

    pub fn set_reference(&mut self, kind: ReferenceKind, result: Result<Vec<String>, String>) {
        if let Err(e) = &result {
            warn!("Form #{}: failed to load {:?}: {}", self.session, kind, e);
        }
        self.reference.set(kind, ReferenceList::from_result(result));
    }

    /// Required-field check plus the in-flight guard
    pub fn can_submit(&self) -> bool {
        matches!(self.state, SubmitState::Idle | SubmitState::Failed)
            && self.draft.is_complete()
    }

    /// Enter Submitting and return the request to issue, or None when refused
    pub fn submit(&mut self) -> Option<WriteRequest> {
        if !self.can_submit() {
            return None;
        }

        let request = match &self.mode {
            FormMode::Add => WriteRequest::Create(self.draft.clone()),
            FormMode::Edit { id } => WriteRequest::Update {
                id: id.clone(),
                patch: CustomerPatch::from_fields(&self.draft, self.touched()),
            },
        };
        self.state = SubmitState::Submitting;
        info!("Form #{} submitting", self.session);
        Some(request)
    }

    /// Apply the write result. Success invalidates the customer collection.
    pub fn complete<V>(
        &mut self,
        result: Result<(), String>,
        cache: &mut impl QueryStore<V>,
    ) -> SubmitOutcome {
        if self.state != SubmitState::Submitting {
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(()) => {
                info!("Form #{} saved", self.session);
                cache.invalidate(CUSTOMERS_KEY);
                self.state = SubmitState::Succeeded;
                SubmitOutcome::Close
            }
            Err(e) => {
                warn!("Form #{} submit failed: {}", self.session, e);
                self.state = SubmitState::Failed;
                SubmitOutcome::StayOpen
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{QueryCache, QueryStore};
    use crate::i18n::{Language, Locale};

    fn cached() -> QueryCache<Vec<Customer>> {
        let mut cache = QueryCache::new();
        let ticket = cache.begin_fetch(CUSTOMERS_KEY);
        cache.resolve(&ticket, Ok(Vec::new()));
        cache
    }

    fn charlie() -> Customer {
        Customer {
            id: "2".into(),
            first_name: "Charlie".into(),
            last_name: "Brown".into(),
            email: "charlie.brown@example.com".into(),
            title: "Corporate Tactics Engineer".into(),
            country: "Malta".into(),
        }
    }

    fn fill_bob(form: &mut FormModal) {
        form.set_field(CustomerField::FirstName, "Bob".into());
        form.set_field(CustomerField::LastName, "Williams".into());
        form.set_field(CustomerField::Email, "bob.williams@example.com".into());
        form.set_field(CustomerField::Title, "Corporate Tactics Engineer".into());
        form.set_field(CustomerField::Country, "Malta".into());
    }

    fn bob() -> NewCustomer {
        NewCustomer {
            first_name: "Bob".into(),
            last_name: "Williams".into(),
            email: "bob.williams@example.com".into(),
            title: "Corporate Tactics Engineer".into(),
            country: "Malta".into(),
        }
    }

    mod mount {
        use super::*;

        #[test]
        fn add_mode_starts_empty_with_add_header() {
            let form = FormModal::open(1, None);
            let locale = Locale::new(Language::English);

            assert_eq!(locale.get(form.header_key()), "Add Customer");
            assert!(!form.is_edit());
            for field in CustomerField::ALL {
                assert_eq!(form.value(field), "", "{:?} should be empty", field);
            }
            assert_eq!(form.state(), &SubmitState::Idle);
        }

        #[test]
        fn edit_mode_prefills_every_field() {
            let customer = charlie();
            let form = FormModal::open(1, Some(&customer));
            let locale = Locale::new(Language::English);

            assert_eq!(locale.get(form.header_key()), "Edit Customer");
            assert_eq!(form.value(CustomerField::FirstName), "Charlie");
            assert_eq!(form.value(CustomerField::LastName), "Brown");
            assert_eq!(form.value(CustomerField::Email), "charlie.brown@example.com");
            assert_eq!(form.value(CustomerField::Title), "Corporate Tactics Engineer");
            assert_eq!(form.value(CustomerField::Country), "Malta");
            assert_eq!(form.touched().count(), 0);
        }
    }

    mod add_mode {
        use super::*;

        #[test]
        fn submit_creates_with_full_draft_and_closes_once() {
            let mut cache = cached();
            let mut form = FormModal::open(1, None);
            fill_bob(&mut form);

            let request = form.submit();
            assert_eq!(request, Some(WriteRequest::Create(bob())));
            assert!(form.is_submitting());

            assert_eq!(form.complete(Ok(()), &mut cache), SubmitOutcome::Close);
            assert!(cache.is_stale(CUSTOMERS_KEY));

            // a duplicate completion must not close twice
            assert_eq!(form.complete(Ok(()), &mut cache), SubmitOutcome::Ignored);
        }

        #[test]
        fn rejected_create_keeps_modal_open_and_cache_fresh() {
            let mut cache = cached();
            let mut form = FormModal::open(1, None);
            fill_bob(&mut form);
            form.submit();

            let outcome = form.complete(Err("Post failed".into()), &mut cache);
            assert_eq!(outcome, SubmitOutcome::StayOpen);
            assert!(form.submit_failed());
            assert!(!cache.is_stale(CUSTOMERS_KEY));
            assert_eq!(form.draft(), &bob());

            let locale = Locale::new(Language::English);
            assert_eq!(locale.get(Key::FormSubmitFailed), "Failed to submit the form");
        }

        #[test]
        fn failed_form_can_be_resubmitted() {
            let mut cache = cached();
            let mut form = FormModal::open(1, None);
            fill_bob(&mut form);
            form.submit();
            form.complete(Err("timeout".into()), &mut cache);

            assert_eq!(form.submit(), Some(WriteRequest::Create(bob())));
            assert_eq!(form.complete(Ok(()), &mut cache), SubmitOutcome::Close);
        }

        #[test]
        fn incomplete_draft_is_refused() {
            let mut form = FormModal::open(1, None);
            form.set_field(CustomerField::FirstName, "Bob".into());
            assert!(!form.can_submit());
            assert_eq!(form.submit(), None);
            assert_eq!(form.state(), &SubmitState::Idle);
        }

        #[test]
        fn second_submit_while_in_flight_is_a_no_op() {
            let mut form = FormModal::open(1, None);
            fill_bob(&mut form);

            assert!(form.submit().is_some());
            assert_eq!(form.submit(), None);
            assert!(form.is_submitting());
        }
    }

    mod edit_mode {
        use super::*;

        #[test]
        fn submit_patches_only_edited_fields() {
            let customer = charlie();
            let mut cache = cached();
            let mut form = FormModal::open(1, Some(&customer));
            form.set_field(CustomerField::FirstName, "Charliez".into());
            form.set_field(CustomerField::LastName, "Brownz".into());

            let Some(WriteRequest::Update { id, patch }) = form.submit() else {
                panic!("expected an update request");
            };
            assert_eq!(id, "2");
            assert_eq!(
                serde_json::to_value(&patch).unwrap(),
                serde_json::json!({ "firstName": "Charliez", "lastName": "Brownz" })
            );

            assert_eq!(form.complete(Ok(()), &mut cache), SubmitOutcome::Close);
            assert!(cache.is_stale(CUSTOMERS_KEY));
        }

        #[test]
        fn touched_fields_are_sent_even_when_unchanged() {
            let customer = charlie();
            let mut form = FormModal::open(1, Some(&customer));
            form.set_field(CustomerField::FirstName, "Charliez".into());
            form.set_field(CustomerField::LastName, "Brownz".into());
            form.set_field(CustomerField::Email, "charliez.brownz@example.com".into());
            form.set_field(CustomerField::Title, "Corporate Tactics Engineer".into());
            form.set_field(CustomerField::Country, "Malta".into());

            let Some(WriteRequest::Update { patch, .. }) = form.submit() else {
                panic!("expected an update request");
            };
            assert_eq!(
                serde_json::to_value(&patch).unwrap(),
                serde_json::json!({
                    "firstName": "Charliez",
                    "lastName": "Brownz",
                    "email": "charliez.brownz@example.com",
                    "title": "Corporate Tactics Engineer",
                    "country": "Malta"
                })
            );
        }

        #[test]
        fn untouched_edit_sends_empty_patch() {
            let customer = charlie();
            let mut form = FormModal::open(1, Some(&customer));
            match form.submit() {
                Some(WriteRequest::Update { id, patch }) => {
                    assert_eq!(id, "2");
                    assert!(patch.is_empty());
                }
                other => panic!("unexpected request {:?}", other),
            }
        }
    }

    mod reference_lists {
        use super::*;

        #[test]
        fn lists_load_independently() {
            let mut form = FormModal::open(1, None);
            form.set_reference(
                ReferenceKind::Countries,
                Ok(vec!["Malta".into(), "Tuvalu".into()]),
            );
            form.set_reference(ReferenceKind::Titles, Err("GET /titles failed".into()));

            assert!(form.reference(ReferenceKind::Countries).is_selectable());
            assert!(form.reference(ReferenceKind::Titles).is_failed());
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn field() -> impl Strategy<Value = CustomerField> {
            prop::sample::select(CustomerField::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn patch_keys_match_touched_fields(
                edits in prop::collection::vec((field(), "[a-z]{1,8}"), 0..12)
            ) {
                let customer = charlie();
                let mut form = FormModal::open(1, Some(&customer));
                for (f, value) in &edits {
                    form.set_field(*f, value.clone());
                }

                let Some(WriteRequest::Update { patch, .. }) = form.submit() else {
                    panic!("edit mode must produce an update");
                };
                let body = serde_json::to_value(&patch).unwrap();
                let object = body.as_object().unwrap();

                let expected: BTreeSet<CustomerField> = edits.iter().map(|(f, _)| *f).collect();
                prop_assert_eq!(object.len(), expected.len());
                for f in expected {
                    prop_assert_eq!(
                        object.get(f.json_name()).and_then(|v| v.as_str()),
                        Some(form.value(f))
                    );
                }
            }
        }
    }
}
