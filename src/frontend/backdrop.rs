use crate::motion::{
    centered_pointer, parallax_pointer_shift, parallax_scroll_shift, particle_count,
    particle_max_size, particle_opacity, particle_speed, scroll_factor, POINTER_THROTTLE_MS,
};
use crate::theme::Theme;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

const LINK_DISTANCE: f64 = 150.0;
const FLOATING_DOT_COUNT: usize = 10;

fn random() -> f64 {
    js_sys::Math::random()
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn current_scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
}

fn spawn_particle(width: f64, height: f64) -> Particle {
    let angle = random() * std::f64::consts::TAU;
    let pace = 0.2 + random() * 0.6;

    Particle {
        x: random() * width,
        y: random() * height,
        vx: angle.cos() * pace,
        vy: angle.sin() * pace,
        size: 1.0 + random() * 2.0,
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub theme: Theme,
}

/// Full-viewport canvas of drifting, linked particles. A read-only
/// consumer of the theme (color) and the scroll offset (parameter
/// scaling); it emits nothing. Renders an empty layer until the mount
/// effect has confirmed an interactive client.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let canvas_ref = use_node_ref();
    let mounted = use_state_eq(|| false);
    let particles = use_mut_ref(Vec::<Particle>::new);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let particles = particles.clone();
        use_effect_with((*mounted, props.theme), move |(mounted, theme)| {
            let noop: Box<dyn FnOnce()> = Box::new(|| ());
            if !*mounted {
                return noop;
            }
            let Some(win) = window() else {
                return noop;
            };
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return noop;
            };
            let Some(context) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|value| value.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                return noop;
            };

            let color = match theme {
                Theme::Dark => "#ffffff",
                Theme::Light => "#000000",
            };

            let fit_canvas = {
                let canvas = canvas.clone();
                move || {
                    let (width, height) = viewport_size();
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                }
            };
            fit_canvas();

            let resize = Closure::<dyn FnMut()>::new(fit_canvas);
            let _ = win.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

            let raf_handle = Rc::new(Cell::new(None::<i32>));
            let raf_closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));

            let tick = Closure::<dyn FnMut(f64)>::new({
                let raf_closure = raf_closure.clone();
                let raf_handle = raf_handle.clone();
                let particles = particles.clone();
                move |_timestamp: f64| {
                    let width = f64::from(canvas.width());
                    let height = f64::from(canvas.height());
                    let (_, viewport_height) = viewport_size();
                    let factor = scroll_factor(current_scroll_y(), viewport_height);

                    let wanted = particle_count(factor);
                    let speed = particle_speed(factor);
                    let opacity = particle_opacity(factor);
                    let max_size = particle_max_size(factor);

                    {
                        let mut swarm = particles.borrow_mut();
                        while swarm.len() < wanted {
                            swarm.push(spawn_particle(width, height));
                        }
                        swarm.truncate(wanted);

                        for particle in swarm.iter_mut() {
                            particle.x += particle.vx * speed;
                            particle.y += particle.vy * speed;

                            if particle.x <= 0.0 || particle.x >= width {
                                particle.vx = -particle.vx;
                                particle.x = particle.x.clamp(0.0, width);
                            }
                            if particle.y <= 0.0 || particle.y >= height {
                                particle.vy = -particle.vy;
                                particle.y = particle.y.clamp(0.0, height);
                            }
                        }

                        context.clear_rect(0.0, 0.0, width, height);
                        context.set_fill_style_str(color);
                        context.set_stroke_style_str(color);
                        context.set_line_width(1.0);

                        for particle in swarm.iter() {
                            context.set_global_alpha(opacity);
                            context.begin_path();
                            let _ = context.arc(
                                particle.x,
                                particle.y,
                                particle.size.min(max_size),
                                0.0,
                                std::f64::consts::TAU,
                            );
                            context.fill();
                        }

                        for (index, a) in swarm.iter().enumerate() {
                            for b in &swarm[index + 1..] {
                                let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                                if distance < LINK_DISTANCE {
                                    context.set_global_alpha(
                                        opacity * (1.0 - distance / LINK_DISTANCE),
                                    );
                                    context.begin_path();
                                    context.move_to(a.x, a.y);
                                    context.line_to(b.x, b.y);
                                    context.stroke();
                                }
                            }
                        }
                    }

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
                        "resize",
                        resize.as_ref().unchecked_ref(),
                    );
                }
                raf_closure.borrow_mut().take();
            })
        });
    }

    html! {
        <div class="particle-field" aria-hidden="true">
            if *mounted {
                <canvas ref={canvas_ref} class="particle-canvas"></canvas>
            }
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct FloatingDot {
    top: f64,
    left: f64,
    size: f64,
    duration: f64,
    drift: f64,
}

fn seed_dots() -> Vec<FloatingDot> {
    (0..FLOATING_DOT_COUNT)
        .map(|_| FloatingDot {
            top: random() * 100.0,
            left: random() * 100.0,
            size: 2.0 + random() * 10.0,
            duration: 5.0 + random() * 5.0,
            drift: 10.0 + random() * 40.0,
        })
        .collect()
}

/// Three radial-gradient layers shifted by scroll depth and a throttled,
/// centered pointer offset, plus a handful of slowly floating dots whose
/// positions are fixed once at mount.
#[function_component(ParallaxLayers)]
pub fn parallax_layers() -> Html {
    let mounted = use_state_eq(|| false);
    let scroll = use_state_eq(|| 0.0f64);
    let pointer = use_state_eq(|| (0.0f64, 0.0f64));
    let dots = use_state(Vec::new);

    {
        let mounted = mounted.clone();
        let scroll = scroll.clone();
        let pointer = pointer.clone();
        let dots = dots.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            dots.set(seed_dots());

            let Some(win) = window() else {
                let noop: Box<dyn FnOnce()> = Box::new(|| ());
                return noop;
            };

            let on_scroll = Closure::<dyn FnMut()>::new({
                let scroll = scroll.clone();
                move || scroll.set(current_scroll_y())
            });
            let _ =
                win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());

            let last_update = Rc::new(Cell::new(0.0f64));
            let on_pointer = Closure::<dyn FnMut(MouseEvent)>::new({
                let pointer = pointer.clone();
                move |event: MouseEvent| {
                    let now = js_sys::Date::now();
                    if now - last_update.get() < f64::from(POINTER_THROTTLE_MS) {
                        return;
                    }
                    last_update.set(now);

                    let (width, height) = viewport_size();
                    pointer.set((
                        centered_pointer(f64::from(event.client_x()), width),
                        centered_pointer(f64::from(event.client_y()), height),
                    ));
                }
            });
            let _ = win
                .add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref());

            let teardown: Box<dyn FnOnce()> = Box::new(move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "mousemove",
                        on_pointer.as_ref().unchecked_ref(),
                    );
                }
            });
            teardown
        });
    }

    if !*mounted {
        return html! { <div class="parallax-field" aria-hidden="true"></div> };
    }

    let (px, py) = *pointer;
    let layer = |index: usize, spread: f64| {
        let shift_y = parallax_scroll_shift(*scroll, index);
        let shift_x = parallax_pointer_shift(px, index);
        let cx = 50.0 + px * spread;
        let cy = 50.0 + py * spread;

        html! {
            <div
                class={classes!("parallax-layer", format!("parallax-layer-{index}"))}
                style={format!(
                    "transform: translate3d({shift_x:.1}px, {shift_y:.1}px, 0); \
                     background-image: radial-gradient(circle at {cx:.1}% {cy:.1}%, \
                     var(--parallax-{index}) 0%, transparent 60%);"
                )}
            ></div>
        }
    };

    html! {
        <div class="parallax-field" aria-hidden="true">
            { layer(0, 30.0) }
            { layer(1, 20.0) }
            { layer(2, 10.0) }
            { for dots.iter().map(|dot| {
                let shift = parallax_pointer_shift(px, 0) / 15.0 * dot.drift;
                html! {
                    <span
                        class="floating-dot"
                        style={format!(
                            "top: {:.1}%; left: {:.1}%; width: {size:.1}px; height: {size:.1}px; \
                             animation-duration: {:.1}s; transform: translateX({shift:.1}px);",
                            dot.top, dot.left, dot.duration, size = dot.size,
                        )}
                    ></span>
                }
            }) }
        </div>
    }
}

/// Slowly rotating decorative shapes, pure CSS animation; colors follow
/// the theme through custom properties.
#[function_component(RotatingShapes)]
pub fn rotating_shapes() -> Html {
    let mounted = use_state_eq(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            || ()
        });
    }

    if !*mounted {
        return html! { <div class="floating-shapes" aria-hidden="true"></div> };
    }

    html! {
        <div class="floating-shapes" aria-hidden="true">
            <div class="shape-cube">
                { for (0..6).map(|face| html! {
                    <div class={classes!("cube-face", format!("cube-face-{face}"))}></div>
                }) }
            </div>
            <div class="shape-ring"></div>
            <div class="shape-ring shape-ring-slow"></div>
        </div>
    }
}
