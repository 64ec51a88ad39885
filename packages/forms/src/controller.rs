//! # Form controller — the submit state machine
//!
//! One [`FormController`] drives one page. A submit walks
//! `Idle → Validating → (Invalid → Idle) | (Submitting → Succeeded | Failed → Idle)`:
//!
//! 1. A submit while another is in flight is ignored.
//! 2. Old errors are cleared and the submit control goes busy.
//! 3. Every field rule runs; failures are rendered and the control is
//!    restored without touching the network.
//! 4. Otherwise exactly one request goes to the [`AuthApi`]. Success
//!    navigates away (after storing the user, for sign-in); failure shows
//!    the server's message or the form's fallback as a global error.
//! 5. The control is restored on every path.
//!
//! The controller owns no page state itself. It reads from and writes to
//! its [`FormView`], which keeps it testable against [`MemoryView`](crate::MemoryView).

use std::future::Future;

use store::{save_session_user, KeyValueStore, SessionUser};

use crate::error::ApiError;
use crate::fields::{Field, FormKind, LoginInput, RegistrationInput};
use crate::render::{validation_errors, RenderInstruction};
use crate::validation::{validate_login, validate_registration, RegistrationRules, ValidationResult};
use crate::view::FormView;
use crate::visibility::Visibility;

/// The remote authentication service.
pub trait AuthApi {
    /// Create an account. Any 2xx response is success.
    fn register(&self, input: &RegistrationInput) -> impl Future<Output = Result<(), ApiError>>;

    /// Sign in, returning the server's user payload.
    fn login(&self, input: &LoginInput) -> impl Future<Output = Result<SessionUser, ApiError>>;
}

/// Where successful submissions lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirects {
    /// After registering.
    pub registered: String,
    /// After signing in.
    pub dashboard: String,
}

impl Default for Redirects {
    fn default() -> Self {
        Self {
            registered: "login.html?registered=true".to_string(),
            dashboard: "dashboard.html".to_string(),
        }
    }
}

/// Everything a controller is configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormConfig {
    pub redirects: Redirects,
    pub registration: RegistrationRules,
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous submit was still in flight.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid(ValidationResult),
    Succeeded { destination: String },
    /// The request failed; `message` is what the page shows.
    Failed { message: String },
}

/// Clear `field`'s error as soon as the user edits it.
pub fn handle_input(view: &mut impl FormView, field: Field) {
    view.apply(RenderInstruction::ClearFieldError(field));
}

/// Flip the password between obscured and plain text, returning the new mode.
pub fn toggle_password(view: &mut impl FormView) -> Visibility {
    let next = view.password_visibility().toggle();
    view.apply(RenderInstruction::SetPasswordVisibility(next));
    next
}

pub struct FormController<V, A, S> {
    kind: FormKind,
    view: V,
    api: A,
    store: S,
    config: FormConfig,
}

impl<V, A, S> FormController<V, A, S>
where
    V: FormView,
    A: AuthApi,
    S: KeyValueStore,
{
    pub fn new(kind: FormKind, view: V, api: A, store: S, config: FormConfig) -> Self {
        Self {
            kind,
            view,
            api,
            store,
            config,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn on_input(&mut self, field: Field) {
        handle_input(&mut self.view, field);
    }

    pub fn toggle_password(&mut self) -> Visibility {
        toggle_password(&mut self.view)
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.view.is_submitting() {
            tracing::debug!(form = ?self.kind, "submit ignored while a request is in flight");
            return SubmitOutcome::Ignored;
        }

        self.view.apply(RenderInstruction::ClearErrors);
        self.view.apply(RenderInstruction::Busy {
            label: self.kind.busy_label(),
        });

        let outcome = match self.kind {
            FormKind::Register => self.submit_registration().await,
            FormKind::Login => self.submit_login().await,
        };

        self.view.apply(RenderInstruction::Idle {
            label: self.kind.idle_label(),
        });
        outcome
    }

    async fn submit_registration(&mut self) -> SubmitOutcome {
        let input = RegistrationInput::read(&self.view);
        let result = validate_registration(&input, &self.config.registration);
        if !result.is_empty() {
            return self.reject(result);
        }

        tracing::info!("submitting registration");
        match self.api.register(&input).await {
            Ok(()) => {
                let destination = self.config.redirects.registered.clone();
                self.succeed(destination)
            }
            Err(err) => {
                tracing::warn!("registration failed: {}", err);
                self.fail(err.message())
            }
        }
    }

    async fn submit_login(&mut self) -> SubmitOutcome {
        let input = LoginInput::read(&self.view);
        let result = validate_login(&input);
        if !result.is_empty() {
            return self.reject(result);
        }

        tracing::info!("submitting sign-in");
        let user = match self.api.login(&input).await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!("sign-in failed: {}", err);
                return self.fail(err.message());
            }
        };

        if let Err(err) = save_session_user(&self.store, &user) {
            tracing::error!("failed to store signed-in user: {}", err);
            return self.fail(None);
        }

        let destination = self.config.redirects.dashboard.clone();
        self.succeed(destination)
    }

    fn reject(&mut self, result: ValidationResult) -> SubmitOutcome {
        tracing::debug!(form = ?self.kind, errors = result.len(), "validation failed");
        for instruction in validation_errors(&result) {
            self.view.apply(instruction);
        }
        SubmitOutcome::Invalid(result)
    }

    fn succeed(&mut self, destination: String) -> SubmitOutcome {
        tracing::info!(%destination, "submission accepted, navigating");
        self.view.navigate(&destination);
        SubmitOutcome::Succeeded { destination }
    }

    fn fail(&mut self, server_message: Option<&str>) -> SubmitOutcome {
        let message = server_message
            .unwrap_or(self.kind.fallback_error())
            .to_string();
        self.view
            .apply(RenderInstruction::ShowGlobalError(message.clone()));
        SubmitOutcome::Failed { message }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use serde_json::json;
    use store::{MemoryStore, StoreError, USER_KEY};

    use super::*;
    use crate::validation::{EMAIL_INVALID, NAME_REQUIRED, PASSWORD_REQUIRED};
    use crate::view::MemoryView;

    /// Scripted API that counts calls.
    struct FakeApi {
        register_result: Result<(), ApiError>,
        login_result: Result<SessionUser, ApiError>,
        calls: Cell<usize>,
    }

    impl FakeApi {
        fn accepting() -> Self {
            Self {
                register_result: Ok(()),
                login_result: Ok(SessionUser::new(json!({ "id": 1 }))),
                calls: Cell::new(0),
            }
        }

        fn rejecting(status: u16, message: Option<&str>) -> Self {
            let err = ApiError::Rejected {
                status,
                message: message.map(str::to_string),
            };
            Self {
                register_result: Err(err.clone()),
                login_result: Err(err),
                calls: Cell::new(0),
            }
        }
    }

    impl AuthApi for &FakeApi {
        async fn register(&self, _input: &RegistrationInput) -> Result<(), ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.register_result.clone()
        }

        async fn login(&self, _input: &LoginInput) -> Result<SessionUser, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.login_result.clone()
        }
    }

    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Js("QuotaExceededError".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn registration_view(name: &str) -> MemoryView {
        MemoryView::new(FormKind::Register)
            .with_value(Field::Name, name)
            .with_value(Field::Email, "a@b.com")
            .with_value(Field::Password, "123456")
            .with_value(Field::Dob, "2000-01-01")
            .with_value(Field::Gender, "f")
    }

    fn login_view() -> MemoryView {
        MemoryView::new(FormKind::Login)
            .with_value(Field::Email, "ada@example.com")
            .with_value(Field::Password, "secret")
    }

    #[tokio::test]
    async fn test_short_name_blocks_submission() {
        let api = FakeApi::accepting();
        let store = MemoryStore::new();
        let mut controller = FormController::new(
            FormKind::Register,
            registration_view("A"),
            &api,
            &store,
            FormConfig::default(),
        );

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(api.calls.get(), 0);
        let view = controller.into_view();
        assert_eq!(view.state.error(Field::Name), Some(NAME_REQUIRED));
        assert!(!view.state.submitting());
        assert_eq!(view.state.submit_label(), "Register");
        assert!(view.navigations.is_empty());
    }

    #[tokio::test]
    async fn test_every_invalid_field_is_rendered() {
        let api = FakeApi::accepting();
        let store = MemoryStore::new();
        let mut controller = FormController::new(
            FormKind::Login,
            MemoryView::new(FormKind::Login).with_value(Field::Email, "nope"),
            &api,
            &store,
            FormConfig::default(),
        );

        controller.submit().await;

        let view = controller.view();
        assert_eq!(view.state.error(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(view.state.error(Field::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_successful_registration_redirects_to_sign_in() {
        let api = FakeApi::accepting();
        let store = MemoryStore::new();
        let mut controller = FormController::new(
            FormKind::Register,
            registration_view("Ada"),
            &api,
            &store,
            FormConfig::default(),
        );

        let outcome = controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded {
                destination: "login.html?registered=true".into()
            }
        );
        assert_eq!(api.calls.get(), 1);
        let view = controller.into_view();
        assert_eq!(view.navigations, vec!["login.html?registered=true"]);
        assert!(!view.state.submitting());
        assert_eq!(view.state.submit_label(), "Register");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_registration_failure_uses_server_message() {
        let api = FakeApi::rejecting(409, Some("Email already registered"));
        let store = MemoryStore::new();
        let mut controller = FormController::new(
            FormKind::Register,
            registration_view("Ada"),
            &api,
            &store,
            FormConfig::default(),
        );

        controller.submit().await;

        let view = controller.into_view();
        assert_eq!(view.state.global_error(), Some("Email already registered"));
        assert!(!view.state.submitting());
        assert_eq!(view.state.submit_label(), "Register");
        assert!(view.navigations.is_empty());
    }

    #[tokio::test]
    async fn test_registration_failure_without_message_uses_fallback() {
        for api in [
            FakeApi::rejecting(500, None),
            FakeApi::rejecting(500, Some("")),
        ] {
            let store = MemoryStore::new();
            let mut controller = FormController::new(
                FormKind::Register,
                registration_view("Ada"),
                &api,
                &store,
                FormConfig::default(),
            );

            let outcome = controller.submit().await;

            assert_eq!(
                outcome,
                SubmitOutcome::Failed {
                    message: "Something went wrong. Try again.".into()
                }
            );
        }
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        let api = FakeApi {
            login_result: Err(ApiError::Transport("connection refused".into())),
            ..FakeApi::accepting()
        };
        let store = MemoryStore::new();
        let mut controller =
            FormController::new(FormKind::Login, login_view(), &api, &store, FormConfig::default());

        controller.submit().await;

        assert_eq!(controller.view().state.global_error(), Some("Login failed"));
    }

    #[tokio::test]
    async fn test_successful_login_stores_user_and_redirects() {
        let api = FakeApi::accepting();
        let store = MemoryStore::new();
        store.set(USER_KEY, r#"{"id":0}"#).unwrap();
        let mut controller =
            FormController::new(FormKind::Login, login_view(), &api, &store, FormConfig::default());

        let outcome = controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded {
                destination: "dashboard.html".into()
            }
        );
        assert_eq!(store.get(USER_KEY).unwrap().as_deref(), Some(r#"{"id":1}"#));
        assert_eq!(controller.view().navigations, vec!["dashboard.html"]);
    }

    #[tokio::test]
    async fn test_rejected_login_shows_message_and_restores_button() {
        let api = FakeApi::rejecting(401, Some("Invalid credentials"));
        let store = MemoryStore::new();
        let mut controller =
            FormController::new(FormKind::Login, login_view(), &api, &store, FormConfig::default());

        controller.submit().await;

        let view = controller.into_view();
        assert_eq!(view.state.global_error(), Some("Invalid credentials"));
        assert!(!view.state.submitting());
        assert_eq!(view.state.submit_label(), "Sign In");
        assert!(store.get(USER_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_storage_failure_after_login_is_reported() {
        let api = FakeApi::accepting();
        let mut controller = FormController::new(
            FormKind::Login,
            login_view(),
            &api,
            FullStore,
            FormConfig::default(),
        );

        let outcome = controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Login failed".into()
            }
        );
        assert!(controller.view().navigations.is_empty());
        assert!(!controller.view().state.submitting());
    }

    #[tokio::test]
    async fn test_submit_while_busy_is_ignored() {
        let api = FakeApi::accepting();
        let store = MemoryStore::new();
        let mut view = login_view();
        view.apply(RenderInstruction::Busy {
            label: FormKind::Login.busy_label(),
        });
        let mut controller =
            FormController::new(FormKind::Login, view, &api, &store, FormConfig::default());

        assert_eq!(controller.submit().await, SubmitOutcome::Ignored);
        assert_eq!(api.calls.get(), 0);
        assert!(controller.view().state.submitting());
    }

    #[tokio::test]
    async fn test_resubmit_clears_previous_errors() {
        let api = FakeApi::rejecting(503, None);
        let store = MemoryStore::new();
        let mut controller = FormController::new(
            FormKind::Register,
            registration_view("A"),
            &api,
            &store,
            FormConfig::default(),
        );
        controller.submit().await;
        assert!(controller.view().state.error(Field::Name).is_some());

        let mut view = controller.into_view();
        view.state.set_value(Field::Name, "Ada");
        let mut controller =
            FormController::new(FormKind::Register, view, &api, &store, FormConfig::default());
        controller.submit().await;

        let view = controller.into_view();
        assert!(view.state.error(Field::Name).is_none());
        assert_eq!(
            view.state.global_error(),
            Some("Something went wrong. Try again.")
        );
        assert_eq!(api.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_gender_is_optional_when_configured() {
        let api = FakeApi::accepting();
        let store = MemoryStore::new();
        let config = FormConfig {
            registration: RegistrationRules {
                require_gender: false,
            },
            ..FormConfig::default()
        };
        let view = registration_view("Ada").with_value(Field::Gender, "");
        let mut controller = FormController::new(FormKind::Register, view, &api, &store, config);

        let outcome = controller.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Succeeded { .. }));
        assert_eq!(api.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_custom_redirects_are_followed() {
        let api = FakeApi::accepting();
        let store = MemoryStore::new();
        let config = FormConfig {
            redirects: Redirects {
                registered: "/signin?welcome=1".into(),
                dashboard: "/home".into(),
            },
            ..FormConfig::default()
        };
        let mut controller = FormController::new(FormKind::Login, login_view(), &api, &store, config);

        controller.submit().await;

        assert_eq!(controller.view().navigations, vec!["/home"]);
    }

    #[test]
    fn test_input_clears_only_that_fields_error() {
        let mut view = MemoryView::new(FormKind::Register);
        for field in [Field::Name, Field::Email] {
            view.apply(RenderInstruction::SetFieldError {
                field,
                message: "bad".into(),
            });
        }

        handle_input(&mut view, Field::Name);

        assert!(view.state.error(Field::Name).is_none());
        assert_eq!(view.state.error(Field::Email), Some("bad"));
    }

    #[test]
    fn test_toggle_password_twice_restores_original() {
        let api = FakeApi::accepting();
        let store = MemoryStore::new();
        let mut controller = FormController::new(
            FormKind::Login,
            MemoryView::new(FormKind::Login),
            &api,
            &store,
            FormConfig::default(),
        );
        let original = controller.view().state.password_visibility();

        let shown = controller.toggle_password();
        assert_eq!(shown.input_type(), "text");
        assert_eq!(shown.icon().as_str(), "eye-off");

        let hidden = controller.toggle_password();
        assert_eq!(hidden, original);
        assert_eq!(hidden.input_type(), "password");
        assert_eq!(hidden.icon().as_str(), "eye");
    }
}
