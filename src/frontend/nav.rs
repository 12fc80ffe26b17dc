use crate::model::{NAV_LINKS, PROFILE, SOCIAL_LINKS};
use crate::theme::Theme;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

/// Scroll depth past which the bar condenses.
const CONDENSE_OFFSET: f64 = 50.0;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let read_offset = move || {
                let offset = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                scrolled.set(offset > CONDENSE_OFFSET);
            };
            read_offset();

            let on_scroll = Closure::<dyn FnMut()>::new(read_offset);
            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_theme_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let on_menu_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let theme_button = html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={props.theme.toggle_label()}
            aria-pressed={props.theme.pressed().to_string()}
            onclick={on_theme_click}
        >
            <span aria-hidden="true">{props.theme.icon()}</span>
        </button>
    };

    html! {
        <nav class={classes!("site-nav", (*scrolled).then_some("is-condensed"))}>
            <div class="nav-inner">
                <a class="nav-brand" href="#home">{PROFILE.name}</a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a class="nav-link" href={link.anchor}>{link.name}</a>
                    }) }
                    { theme_button.clone() }
                </div>

                <div class="nav-mobile-controls">
                    { theme_button }
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={(*menu_open).to_string()}
                        onclick={on_menu_click}
                    >
                        <span aria-hidden="true">{ if *menu_open { "✕" } else { "☰" } }</span>
                    </button>
                </div>
            </div>

            <div class={classes!("nav-drawer", (*menu_open).then_some("is-open"))}>
                { for NAV_LINKS.iter().map(|link| html! {
                    <a
                        class="drawer-link"
                        href={link.anchor}
                        onclick={close_menu.clone()}
                    >
                        {link.name}
                    </a>
                }) }
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div>
                    <a class="footer-brand" href="#home">{PROFILE.name}</a>
                    <p class="footer-role">{PROFILE.role}</p>
                </div>
                <div class="footer-links">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a
                            class="footer-link"
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {link.label}
                        </a>
                    }) }
                </div>
                <p class="footer-copy">{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
            </div>
        </footer>
    }
}
