use crate::model::ViewMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ViewModeToggleProps<M: ViewMode> {
    pub active: M,
    pub on_select: Callback<M>,
    /// Accessible name for the button group.
    pub label: AttrValue,
}

/// One segmented control shared by every section that offers alternate
/// arrangements of its item list. Selecting a mode re-arranges the same
/// items; it never filters them.
#[function_component]
pub fn ViewModeToggle<M: ViewMode>(props: &ViewModeToggleProps<M>) -> Html {
    html! {
        <div class="view-toggle" role="group" aria-label={props.label.clone()}>
            { for M::ALL.iter().copied().map(|mode| {
                let is_active = mode == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_| on_select.emit(mode))
                };

                html! {
                    <button
                        type="button"
                        class={classes!("view-toggle-option", is_active.then_some("is-active"))}
                        aria-pressed={is_active.to_string()}
                        onclick={onclick}
                    >
                        { mode.label() }
                    </button>
                }
            }) }
        </div>
    }
}
