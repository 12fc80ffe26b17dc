use crate::frontend::prefers_reduced_motion;
use crate::motion::{RevealPreset, REVEAL_DURATION_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub preset: RevealPreset,
    #[prop_or(REVEAL_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(REVEAL_THRESHOLD)]
    pub threshold: f64,
    /// Animate only on first entry; otherwise replay on every re-entry.
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Defers the entrance animation of its children until they approach the
/// viewport. Until the mount effect has run, children render with no
/// animation styling at all.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state_eq(|| false);
    let ready = use_state_eq(|| false);
    let reduced = use_state_eq(|| false);

    {
        let visible = visible.clone();
        let ready = ready.clone();
        let reduced = reduced.clone();
        let node_ref = node_ref.clone();
        use_effect_with((props.threshold, props.once), move |(threshold, once)| {
            reduced.set(prefers_reduced_motion());
            ready.set(true);

            let mut watcher: Option<(
                IntersectionObserver,
                Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
            )> = None;

            if let Some(element) = node_ref.cast::<Element>() {
                let once = *once;
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                visible.set(true);
                                if once {
                                    observer.unobserve(&entry.target());
                                }
                            } else if !once {
                                visible.set(false);
                            }
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(*threshold));
                options.set_root_margin(REVEAL_ROOT_MARGIN);

                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    observer.observe(&element);
                    watcher = Some((observer, callback));
                }
            }

            move || {
                if let Some((observer, closure)) = watcher {
                    observer.disconnect();
                    drop(closure);
                }
            }
        });
    }

    let style = if *ready {
        let preset = props.preset.effective(*reduced);
        let (opacity, transform) = if *visible {
            ("1", "none")
        } else {
            ("0", preset.hidden_transform())
        };

        Some(format!(
            "opacity: {opacity}; transform: {transform}; \
             transition: opacity {duration}ms ease-out {delay}ms, \
             transform {duration}ms ease-out {delay}ms;",
            duration = props.duration_ms,
            delay = props.delay_ms,
        ))
    } else {
        None
    };

    html! {
        <div ref={node_ref} class={props.class.clone()} style={style}>
            { props.children.clone() }
        </div>
    }
}
