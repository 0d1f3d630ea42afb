// File: src/dom.rs
// Purpose: FormPage over the live document

use std::future::Future;

use member_validation_core::{Alert, FormPage, PageError, SERVER_ERROR_SELECTOR};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::{js_error, swal};

/// One form page of the current document
pub struct DomPage {
    document: Document,
    form_id: &'static str,
}

impl DomPage {
    pub fn new(document: Document, form_id: &'static str) -> Self {
        Self { document, form_id }
    }

    fn element<T: JsCast>(&self, id: &str, expected: &'static str) -> Result<T, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))?
            .dyn_into::<T>()
            .map_err(|_| PageError::WrongElement {
                id: id.to_string(),
                expected,
            })
    }

    fn input(&self, id: &str) -> Result<HtmlInputElement, PageError> {
        self.element(id, "an <input>")
    }

    pub fn form(&self) -> Result<HtmlFormElement, PageError> {
        self.element(self.form_id, "a <form>")
    }
}

impl FormPage for DomPage {
    fn value(&self, element_id: &str) -> Result<String, PageError> {
        Ok(self.input(element_id)?.value())
    }

    fn clear(&self, element_id: &str) -> Result<(), PageError> {
        self.input(element_id)?.set_value("");
        Ok(())
    }

    fn focus(&self, element_id: &str) -> Result<(), PageError> {
        self.element::<HtmlElement>(element_id, "focusable")?
            .focus()
            .map_err(|e| PageError::Script(js_error(&e)))
    }

    fn server_error_text(&self) -> Option<String> {
        self.document
            .query_selector(SERVER_ERROR_SELECTOR)
            .ok()
            .flatten()
            .map(|node| node.text_content().unwrap_or_default())
    }

    /// `HTMLFormElement.submit()` does not fire a submit event, so the
    /// intercepting listener is bypassed.
    fn submit(&self) -> Result<(), PageError> {
        self.form()?
            .submit()
            .map_err(|e| PageError::Script(js_error(&e)))
    }

    fn show_alert(&self, alert: &Alert) -> impl Future<Output = Result<(), PageError>> {
        let opened = swal::fire(alert);
        async move {
            JsFuture::from(opened?)
                .await
                .map_err(|e| PageError::Alert(js_error(&e)))?;
            Ok(())
        }
    }
}
