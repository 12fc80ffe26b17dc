use crate::contact::{
    apply_edit, first_invalid, validate, ContactField, ContactForm, ContactResponse, ErrorMap,
    SubmitStatus,
};
use crate::frontend::{cancel_timeout, schedule_timeout};
use gloo_net::http::Request;
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

async fn deliver(payload: &ContactForm) -> Result<(), ()> {
    let request = Request::post("/api/contact").json(payload).map_err(|_| ())?;
    let response = request.send().await.map_err(|_| ())?;
    let body = response.json::<ContactResponse>().await.map_err(|_| ())?;

    if body.ok {
        Ok(())
    } else {
        Err(())
    }
}

fn focus_field(field: ContactField) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(field.input_id()))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    if let Some(element) = element {
        let _ = element.focus();
    }
}

fn field_value(event: &InputEvent, field: ContactField) -> String {
    match field {
        ContactField::Message => event
            .target_unchecked_into::<HtmlTextAreaElement>()
            .value(),
        _ => event.target_unchecked_into::<HtmlInputElement>().value(),
    }
}

/// The message form. Validation errors live in a per-field map that only
/// ever holds currently-failing fields; a keystroke on an errored field
/// clears that error in the same handler step. Delivery goes through the
/// server relay and surfaces as success/error banners that fall back to
/// the editable state on a timer.
#[function_component(ContactFormCard)]
pub fn contact_form_card() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(ErrorMap::new);
    let status = use_state_eq(|| SubmitStatus::Idle);

    let on_edit = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            let mut next_form = (*form).clone();
            let mut next_errors = (*errors).clone();
            apply_edit(&mut next_form, &mut next_errors, field, value);
            form.set(next_form);
            errors.set(next_errors);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if (*status).is_busy() {
                return;
            }

            let found = validate(&form);
            if let Some(field) = first_invalid(&found) {
                errors.set(found);
                focus_field(field);
                return;
            }

            errors.set(ErrorMap::new());
            status.set(SubmitStatus::Submitting);

            let payload = (*form).clone();
            let form = form.clone();
            let status = status.clone();
            spawn_local(async move {
                match deliver(&payload).await {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        status.set(SubmitStatus::Success);
                    }
                    Err(()) => status.set(SubmitStatus::Error),
                }
            });
        })
    };

    // Terminal display states fall back to Idle on a timer; the pending
    // timer is cancelled when the component unmounts.
    {
        let status_handle = status.clone();
        use_effect_with(*status, move |current| {
            let teardown: Box<dyn FnOnce()> = match current.reset_delay_ms() {
                Some(delay) => {
                    let closure = Closure::<dyn FnMut()>::new(move || {
                        status_handle.set(SubmitStatus::Idle);
                    });
                    let handle = schedule_timeout(&closure, delay as i32);

                    Box::new(move || {
                        if let Some(handle) = handle {
                            cancel_timeout(handle);
                        }
                        drop(closure);
                    })
                }
                None => Box::new(|| ()),
            };
            teardown
        });
    }

    let render_field = |field: ContactField| {
        let value = form.field(field).to_string();
        let error = errors.get(&field).copied();
        let oninput = {
            let on_edit = on_edit.clone();
            Callback::from(move |event: InputEvent| {
                on_edit.emit((field, field_value(&event, field)));
            })
        };

        let control = match field {
            ContactField::Message => html! {
                <textarea
                    id={field.input_id()}
                    rows="5"
                    value={value}
                    oninput={oninput}
                    aria-invalid={error.is_some().to_string()}
                ></textarea>
            },
            ContactField::Email => html! {
                <input
                    type="email"
                    id={field.input_id()}
                    value={value}
                    oninput={oninput}
                    aria-invalid={error.is_some().to_string()}
                />
            },
            _ => html! {
                <input
                    type="text"
                    id={field.input_id()}
                    value={value}
                    oninput={oninput}
                    aria-invalid={error.is_some().to_string()}
                />
            },
        };

        html! {
            <div class="field-row">
                <label for={field.input_id()}>{field.label()}</label>
                { control }
                if let Some(error) = error {
                    <p class="field-error" role="alert">{error.message()}</p>
                }
            </div>
        }
    };

    html! {
        <div class="contact-form-card">
            <h3>{"Send Me a Message"}</h3>

            if *status == SubmitStatus::Success {
                <div class="form-banner is-success" role="status">
                    {"Thank you for your message! I'll get back to you soon."}
                </div>
            }
            if *status == SubmitStatus::Error {
                <div class="form-banner is-error" role="alert">
                    {"Your message could not be sent. Please try again in a moment."}
                </div>
            }

            <form onsubmit={onsubmit} novalidate="novalidate">
                <div class="field-pair">
                    { render_field(ContactField::Name) }
                    { render_field(ContactField::Email) }
                </div>
                { render_field(ContactField::Subject) }
                { render_field(ContactField::Message) }

                <button class="btn btn-primary" type="submit" disabled={(*status).is_busy()}>
                    { if (*status).is_busy() { "Sending…" } else { "Send Message" } }
                </button>
            </form>
        </div>
    }
}
