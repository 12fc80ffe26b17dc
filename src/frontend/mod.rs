mod backdrop;
mod cursor;
mod form;
mod nav;
mod reveal;
mod sections;
mod view_mode;

use crate::theme::{Theme, THEME_KEY};
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Storage};
use yew::prelude::*;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<Theme> {
    let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Stored preference wins; the operating environment's scheme is the
/// fallback for first-time visitors.
fn resolve_theme() -> Theme {
    read_stored_theme().unwrap_or_else(|| {
        if system_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

pub(crate) fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::<dyn FnMut()>::new(move || {
        apply_theme(theme);
    });

    if start_view_transition
        .call1(&document_js, callback.as_ref().unchecked_ref())
        .is_err()
    {
        apply_theme(theme);
    }
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

pub(crate) fn schedule_timeout(closure: &Closure<dyn FnMut()>, delay_ms: i32) -> Option<i32> {
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        )
        .ok()
}

pub(crate) fn cancel_timeout(handle: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(handle);
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(resolve_theme);

    {
        // First client render: apply the resolved theme and write it back so
        // the stored value and the applied marker agree from the start.
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            persist_theme(current);
            || ()
        });
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <cursor::PointerOverlay />
            <nav::Navbar theme={*theme} on_toggle={on_toggle} />
            <main id="content">
                <sections::Hero theme={*theme} />
                <sections::About />
                <sections::Skills />
                <sections::Experience />
                <sections::Projects />
                <sections::Education />
                <sections::Certifications />
                <sections::Contact />
            </main>
            <nav::Footer />
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
