//! Page seam and submit drivers
//!
//! [`FormPage`] is everything the validators need from the hosting page:
//! reading, clearing and focusing inputs, the server-rendered error text,
//! native submission and the modal alert. The browser crate implements it over
//! the DOM; tests implement it in memory.
//!
//! Submit handling is split in two. [`handle_submit`] runs synchronously inside
//! the submit event so the caller can cancel the native submission in time.
//! [`present`] is awaited afterwards and applies the dismissal side effects
//! only once the alert has been closed.

use std::future::Future;

use tracing::debug;

use crate::alert::Alert;
use crate::error::PageError;
use crate::verdict::{Blocked, DismissAction, Verdict};

/// Access to the page that hosts a form
pub trait FormPage {
    /// Current value of the input with this element id
    fn value(&self, element_id: &str) -> Result<String, PageError>;

    fn clear(&self, element_id: &str) -> Result<(), PageError>;

    fn focus(&self, element_id: &str) -> Result<(), PageError>;

    /// Text of the server-rendered error node, `None` when the node is absent
    fn server_error_text(&self) -> Option<String>;

    /// Submit the form natively, without dispatching a submit event
    fn submit(&self) -> Result<(), PageError>;

    /// Show the alert; resolves once the user has dismissed it
    fn show_alert(&self, alert: &Alert) -> impl Future<Output = Result<(), PageError>>;
}

/// A form validator bound to one page
pub trait FormValidator {
    type Form;

    /// Element id of the `<form>`
    const FORM_ID: &'static str;

    /// Whether every submit event is cancelled up front, with the form
    /// re-submitted programmatically once all checks pass
    const INTERCEPTS_SUBMIT: bool;

    fn read_form<P: FormPage>(&self, page: &P) -> Result<Self::Form, PageError>;

    fn on_submit(&self, form: &Self::Form) -> Verdict;

    /// Alert for a server-rendered error. `rendered` is the node's text, `None`
    /// when the page has no such node.
    fn server_error(&self, rendered: Option<&str>) -> Option<Blocked>;
}

/// What happened to a submit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Checks passed; the native submission continues untouched
    Proceed,
    /// Checks passed; the intercepted form was submitted programmatically
    Submitted,
    /// A check failed; the alert still has to be presented
    Blocked(Blocked),
}

impl Submission {
    /// Whether the native submit event must be cancelled
    pub fn cancels_native(&self) -> bool {
        !matches!(self, Submission::Proceed)
    }
}

/// Validate the form on `page` and submit it when an intercepting validator
/// passes. Must run synchronously inside the submit event.
pub fn handle_submit<V, P>(validator: &V, page: &P) -> Result<Submission, PageError>
where
    V: FormValidator,
    P: FormPage,
{
    let form = validator.read_form(page)?;

    match validator.on_submit(&form) {
        Verdict::Blocked(blocked) => {
            debug!(form = V::FORM_ID, violation = %blocked.violation, "submission blocked");
            Ok(Submission::Blocked(blocked))
        }
        Verdict::Passed if V::INTERCEPTS_SUBMIT => {
            debug!(form = V::FORM_ID, "all checks passed, submitting");
            page.submit()?;
            Ok(Submission::Submitted)
        }
        Verdict::Passed => Ok(Submission::Proceed),
    }
}

/// Show the blocking alert, wait for its dismissal, then apply the dismissal
/// side effects in order.
pub async fn present<P: FormPage>(page: &P, blocked: &Blocked) -> Result<(), PageError> {
    page.show_alert(&blocked.alert).await?;

    for action in &blocked.on_dismiss {
        match *action {
            DismissAction::Clear(id) => page.clear(id)?,
            DismissAction::Focus(id) => page.focus(id)?,
        }
    }

    Ok(())
}

/// Present the server-rendered error, if the page has one.
///
/// Returns whether an alert was shown.
pub async fn display_server_error<V, P>(validator: &V, page: &P) -> Result<bool, PageError>
where
    V: FormValidator,
    P: FormPage,
{
    let rendered = page.server_error_text();
    let Some(blocked) = validator.server_error(rendered.as_deref()) else {
        return Ok(false);
    };

    debug!(form = V::FORM_ID, "showing server-rendered error");
    present(page, &blocked).await?;
    Ok(true)
}
