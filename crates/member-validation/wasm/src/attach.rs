// File: src/attach.rs
// Purpose: Wire a validator to its form once the document is ready

use std::rc::Rc;

use member_validation_core::{display_server_error, handle_submit, present, FormValidator, PageError, Submission};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

use crate::dom::DomPage;
use crate::{js_error, report};

/// Attach now, or on `DOMContentLoaded` while the document is still loading
pub fn when_ready<V>(validator: V) -> Result<(), PageError>
where
    V: FormValidator + 'static,
{
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| PageError::Script("no document available".to_string()))?;

    if document.ready_state() != "loading" {
        return attach(validator, document);
    }

    let target = document.clone();
    let on_ready = Closure::once(move || {
        if let Err(err) = attach(validator, target) {
            report(&err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| PageError::Script(js_error(&e)))?;
    on_ready.forget();

    Ok(())
}

/// Show any server-rendered error and install the submit listener
fn attach<V>(validator: V, document: Document) -> Result<(), PageError>
where
    V: FormValidator + 'static,
{
    let page = Rc::new(DomPage::new(document, V::FORM_ID));
    let validator = Rc::new(validator);
    let form = page.form()?;

    {
        let page = Rc::clone(&page);
        let validator = Rc::clone(&validator);
        spawn_local(async move {
            if let Err(err) = display_server_error(&*validator, &*page).await {
                report(&err);
            }
        });
    }

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if V::INTERCEPTS_SUBMIT {
            event.prevent_default();
        }

        match handle_submit(&*validator, &*page) {
            Ok(Submission::Blocked(blocked)) => {
                event.prevent_default();
                let page = Rc::clone(&page);
                spawn_local(async move {
                    if let Err(err) = present(&*page, &blocked).await {
                        report(&err);
                    }
                });
            }
            Ok(Submission::Proceed | Submission::Submitted) => {}
            Err(err) => report(&err),
        }
    });
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|e| PageError::Script(js_error(&e)))?;
    // Lives as long as the page
    on_submit.forget();

    Ok(())
}
