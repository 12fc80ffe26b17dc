use crate::motion::{spring_step, SpringState, DOT_SPRING_OMEGA, RING_SPRING_OMEGA};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, HtmlElement, MouseEvent};
use yew::prelude::*;

/// Starting point far off-screen so nothing flashes before the first
/// pointer move.
const OFFSCREEN: f64 = -100.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum CursorVariant {
    #[default]
    Default,
    Link,
    Button,
    Text,
    Image,
    Clicked,
}

impl CursorVariant {
    fn css_class(self) -> &'static str {
        match self {
            Self::Default => "is-default",
            Self::Link => "is-link",
            Self::Button => "is-button",
            Self::Text => "is-text",
            Self::Image => "is-image",
            Self::Clicked => "is-clicked",
        }
    }
}

fn variant_for_target(target: &Element) -> CursorVariant {
    let matches = |selector: &str| target.closest(selector).ok().flatten().is_some();

    if matches("button, .btn") {
        CursorVariant::Button
    } else if matches("a, .project-card") {
        CursorVariant::Link
    } else if matches("img, .project-media") {
        CursorVariant::Image
    } else if matches("p, h1, h2, h3, h4, h5, h6") {
        CursorVariant::Text
    } else {
        CursorVariant::Default
    }
}

fn has_fine_pointer() -> bool {
    window()
        .and_then(|w| w.match_media("(pointer: fine)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn write_transform(node_ref: &NodeRef, x: f64, y: f64) {
    if let Some(element) = node_ref.cast::<HtmlElement>() {
        let _ = element
            .style()
            .set_property("transform", &format!("translate3d({x:.1}px, {y:.1}px, 0)"));
    }
}

/// Replaces the platform pointer glyph on desktop-pointer viewports. The
/// dot chases the pointer through a critically-damped spring and the ring
/// follows with a softer constant; both are advanced from a single
/// requestAnimationFrame loop that writes transforms directly, so pointer
/// movement never re-renders the component tree.
#[function_component(PointerOverlay)]
pub fn pointer_overlay() -> Html {
    let enabled = use_state_eq(has_fine_pointer);
    let variant = use_state_eq(CursorVariant::default);
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let variant = variant.clone();
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with(*enabled, move |enabled| {
            let noop: Box<dyn FnOnce()> = Box::new(|| ());
            if !*enabled {
                return noop;
            }

            let Some(win) = window() else {
                return noop;
            };
            let Some(document) = win.document() else {
                return noop;
            };
            let Some(body) = document.body() else {
                return noop;
            };

            let _ = body.class_list().add_1("cursor-hidden");

            let target_pos = Rc::new(Cell::new((OFFSCREEN, OFFSCREEN)));
            let hover = Rc::new(Cell::new(CursorVariant::Default));
            let clicked = Rc::new(Cell::new(false));

            let mousemove = Closure::<dyn FnMut(MouseEvent)>::new({
                let target_pos = target_pos.clone();
                move |event: MouseEvent| {
                    target_pos.set((f64::from(event.client_x()), f64::from(event.client_y())));
                }
            });
            let _ = win
                .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());

            let mouseover = Closure::<dyn FnMut(MouseEvent)>::new({
                let hover = hover.clone();
                let clicked = clicked.clone();
                let variant = variant.clone();
                move |event: MouseEvent| {
                    let next = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .map(|el| variant_for_target(&el))
                        .unwrap_or_default();

                    hover.set(next);
                    if !clicked.get() {
                        variant.set(next);
                    }
                }
            });
            let _ = document
                .add_event_listener_with_callback("mouseover", mouseover.as_ref().unchecked_ref());

            let mousedown = Closure::<dyn FnMut(MouseEvent)>::new({
                let clicked = clicked.clone();
                let variant = variant.clone();
                move |_: MouseEvent| {
                    clicked.set(true);
                    variant.set(CursorVariant::Clicked);
                }
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref());

            let mouseup = Closure::<dyn FnMut(MouseEvent)>::new({
                let clicked = clicked.clone();
                let hover = hover.clone();
                let variant = variant.clone();
                move |_: MouseEvent| {
                    // Restore the hover context only while still clicked.
                    if clicked.get() {
                        clicked.set(false);
                        variant.set(hover.get());
                    }
                }
            });
            let _ = document
                .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref());

            let raf_handle = Rc::new(Cell::new(None::<i32>));
            let raf_closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            let dot_state = Rc::new(Cell::new((
                SpringState::at_rest(OFFSCREEN),
                SpringState::at_rest(OFFSCREEN),
            )));
            let ring_state = Rc::new(Cell::new((
                SpringState::at_rest(OFFSCREEN),
                SpringState::at_rest(OFFSCREEN),
            )));
            let last_tick = Rc::new(Cell::new(None::<f64>));

            let tick = Closure::<dyn FnMut(f64)>::new({
                let raf_closure = raf_closure.clone();
                let raf_handle = raf_handle.clone();
                let target_pos = target_pos.clone();
                let dot_state = dot_state.clone();
                let ring_state = ring_state.clone();
                let last_tick = last_tick.clone();
                let dot_ref = dot_ref.clone();
                let ring_ref = ring_ref.clone();
                move |timestamp: f64| {
                    let dt = match last_tick.get() {
                        Some(previous) => ((timestamp - previous) / 1_000.0).max(0.0),
                        None => 1.0 / 60.0,
                    };
                    last_tick.set(Some(timestamp));

                    let (tx, ty) = target_pos.get();

                    let (dx, dy) = dot_state.get();
                    let dx = spring_step(dx, tx, DOT_SPRING_OMEGA, dt);
                    let dy = spring_step(dy, ty, DOT_SPRING_OMEGA, dt);
                    dot_state.set((dx, dy));
                    write_transform(&dot_ref, dx.position, dy.position);

                    let (rx, ry) = ring_state.get();
                    let rx = spring_step(rx, tx, RING_SPRING_OMEGA, dt);
                    let ry = spring_step(ry, ty, RING_SPRING_OMEGA, dt);
                    ring_state.set((rx, ry));
                    write_transform(&ring_ref, rx.position, ry.position);

                    if let (Some(win), Some(closure)) = (window(), raf_closure.borrow().as_ref()) {
                        if let Ok(handle) =
                            win.request_animation_frame(closure.as_ref().unchecked_ref())
                        {
                            raf_handle.set(Some(handle));
                        }
                    }
                }
            });
            *raf_closure.borrow_mut() = Some(tick);

            if let Some(closure) = raf_closure.borrow().as_ref() {
                if let Ok(handle) = win.request_animation_frame(closure.as_ref().unchecked_ref()) {
                    raf_handle.set(Some(handle));
                }
            }

            Box::new(move || {
                if let Some(win) = window() {
                    if let Some(handle) = raf_handle.get() {
                        let _ = win.cancel_animation_frame(handle);
                    }
                    let _ = win.remove_event_listener_with_callback(
                        "mousemove",
                        mousemove.as_ref().unchecked_ref(),
                    );
                    if let Some(document) = win.document() {
                        let _ = document.remove_event_listener_with_callback(
                            "mouseover",
                            mouseover.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "mousedown",
                            mousedown.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "mouseup",
                            mouseup.as_ref().unchecked_ref(),
                        );
                        if let Some(body) = document.body() {
                            let _ = body.class_list().remove_1("cursor-hidden");
                        }
                    }
                }
                raf_closure.borrow_mut().take();
            })
        });
    }

    if !*enabled {
        return Html::default();
    }

    html! {
        <>
            <div
                ref={ring_ref}
                class={classes!("cursor-ring", (*variant).css_class())}
                aria-hidden="true"
            ></div>
            <div
                ref={dot_ref}
                class={classes!("cursor-dot", (*variant).css_class())}
                aria-hidden="true"
            ></div>
        </>
    }
}
