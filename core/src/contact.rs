//! Contact form submission and the copy-address affordance.
//!
//! Both flows end in a status line and never propagate errors past the
//! triggering event. Network and clipboard access sit behind traits so the
//! browser and tests can supply their own.

use std::borrow::Cow;

pub const FORM_PLACEHOLDER: &str = "PUT_YOUR_FORM_ID_HERE";

pub const MSG_SENDING: &str = "Sending...";
pub const MSG_SENT: &str = "Sent ✅ I will reply soon.";
pub const MSG_COPIED: &str = "Email copied ✅";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Set your Formspree link in index.html first.")]
    NotConfigured,
    #[error("Failed to send. Try again.")]
    Rejected { status: u16 },
    #[error("Network error. Check internet and retry.")]
    Network(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Could not copy (browser blocked).")]
    Blocked(String),
}

/// The request never completed; carries the host's description.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(SubmitError),
}

impl SubmissionState {
    pub fn status_text(&self) -> Option<Cow<'static, str>> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Sending => Some(Cow::Borrowed(MSG_SENDING)),
            SubmissionState::Succeeded => Some(Cow::Borrowed(MSG_SENT)),
            SubmissionState::Failed(err) => Some(Cow::Owned(err.to_string())),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed(_))
    }
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// The endpoint to post to, or `NotConfigured` when the form still carries
/// no action or the placeholder marker.
pub fn resolve_endpoint<'a>(
    action: Option<&'a str>,
    placeholder: &str,
) -> Result<&'a str, SubmitError> {
    let action = action.map(str::trim).unwrap_or_default();
    if action.is_empty() || (!placeholder.is_empty() && action.contains(placeholder)) {
        return Err(SubmitError::NotConfigured);
    }
    Ok(action)
}

pub fn mailto_href(address: &str) -> String {
    format!("mailto:{address}")
}

/// Posts the form's fields to `endpoint` and reports the HTTP status.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_form(&self, endpoint: &str) -> Result<u16, TransportError>;
}

#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The visible parts of the form that the flows touch.
pub trait FormSurface {
    fn set_status(&self, text: &str);
    fn set_submit_enabled(&self, enabled: bool);
    fn reset_fields(&self);
}

impl<S: FormSurface + ?Sized> FormSurface for &S {
    fn set_status(&self, text: &str) {
        (**self).set_status(text)
    }

    fn set_submit_enabled(&self, enabled: bool) {
        (**self).set_submit_enabled(enabled)
    }

    fn reset_fields(&self) {
        (**self).reset_fields()
    }
}

pub struct ContactForm<T, S> {
    transport: T,
    surface: S,
    placeholder: String,
}

impl<T: FormTransport, S: FormSurface> ContactForm<T, S> {
    pub fn new(transport: T, surface: S) -> Self {
        Self::with_placeholder(transport, surface, FORM_PLACEHOLDER)
    }

    pub fn with_placeholder(transport: T, surface: S, placeholder: &str) -> Self {
        Self {
            transport,
            surface,
            placeholder: placeholder.to_string(),
        }
    }

    /// One best-effort attempt; the submit control is re-enabled on every
    /// terminal outcome.
    pub async fn submit(&self, action: Option<&str>) -> SubmissionState {
        let endpoint = match resolve_endpoint(action, &self.placeholder) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                let state = SubmissionState::Failed(err);
                self.show(&state);
                return state;
            }
        };

        self.surface.set_submit_enabled(false);
        self.show(&SubmissionState::Sending);

        let state = match self.transport.post_form(endpoint).await {
            Ok(status) if is_success_status(status) => {
                self.surface.reset_fields();
                SubmissionState::Succeeded
            }
            Ok(status) => SubmissionState::Failed(SubmitError::Rejected { status }),
            Err(TransportError(reason)) => SubmissionState::Failed(SubmitError::Network(reason)),
        };
        self.show(&state);
        self.surface.set_submit_enabled(true);
        state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn show(&self, state: &SubmissionState) {
        if let Some(text) = state.status_text() {
            self.surface.set_status(&text);
        }
    }
}

pub async fn copy_address<C, S>(clipboard: &C, surface: &S, address: &str) -> Result<(), ClipboardError>
where
    C: ClipboardWriter,
    S: FormSurface,
{
    match clipboard.write_text(address).await {
        Ok(()) => {
            surface.set_status(MSG_COPIED);
            Ok(())
        }
        Err(err) => {
            surface.set_status(&err.to_string());
            Err(err)
        }
    }
}
