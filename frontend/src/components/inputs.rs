use shared::view::SelectOption;
use shared::Field;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Change handler for an `<input>` bound to `field`
pub fn input_change(on_input: &Callback<(Field, String)>, field: Field) -> Callback<Event> {
    let on_input = on_input.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_input.emit((field, input.value()));
    })
}

/// Change handler for a `<select>` bound to `field`
pub fn select_change(on_input: &Callback<(Field, String)>, field: Field) -> Callback<Event> {
    let on_input = on_input.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        on_input.emit((field, select.value()));
    })
}

/// Account picker; the first option is the empty placeholder
pub fn account_options(options: &[SelectOption], selected: &str) -> Html {
    html! {
        {for options.iter().map(|option| html! {
            <option value={option.value.clone()} selected={option.value == selected}>
                {&option.label}
            </option>
        })}
    }
}
