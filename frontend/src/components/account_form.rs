use shared::{AccountForm, AccountType, Field, FormMode};
use yew::prelude::*;

use super::inputs::{input_change, select_change};

#[derive(Properties, PartialEq)]
pub struct AccountFormSectionProps {
    pub form: AccountForm,
    pub on_input: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(AccountFormSection)]
pub fn account_form_section(props: &AccountFormSectionProps) -> Html {
    let form = &props.form;
    let visibility = form.visibility();
    let editing = matches!(form.mode(), FormMode::Edit(_));

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    let selected_type = form.account_type.label().to_string();
    let mut choices = AccountType::choices();
    if !choices.contains(&form.account_type) {
        choices.push(form.account_type.clone());
    }

    html! {
        <section class="account-form-section">
            <h2>{if editing { "Edit account" } else { "New account" }}</h2>
            <form id="accountForm" class="account-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="type">{"Type"}</label>
                    <select id="type" onchange={select_change(&props.on_input, Field::AccountType)}>
                        {for choices.iter().map(|choice| {
                            let label = choice.label().to_string();
                            html! {
                                <option value={label.clone()} selected={label == selected_type}>
                                    {label}
                                </option>
                            }
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="details">{"Details"}</label>
                    <input
                        id="details"
                        type="text"
                        placeholder="e.g. Savings at my bank"
                        value={form.details.clone()}
                        onchange={input_change(&props.on_input, Field::Details)}
                    />
                </div>

                {if visibility.stock_symbol {
                    html! {
                        <div class="form-group" id="stockSymbolGroup">
                            <label for="stockSymbol">{"Stock symbol"}</label>
                            <input
                                id="stockSymbol"
                                type="text"
                                value={form.stock_symbol.clone()}
                                onchange={input_change(&props.on_input, Field::StockSymbol)}
                            />
                        </div>
                    }
                } else { html! {} }}

                {if visibility.shares {
                    html! {
                        <div class="form-group" id="sharesGroup">
                            <label for="shares">{"Shares"}</label>
                            <input
                                id="shares"
                                type="number"
                                min="0"
                                step="1"
                                value={form.shares.clone()}
                                onchange={input_change(&props.on_input, Field::Shares)}
                            />
                        </div>
                    }
                } else { html! {} }}

                {if visibility.market_value {
                    html! {
                        <div class="form-group" id="marketValueGroup">
                            <label for="marketValue">{"Market value"}</label>
                            <input
                                id="marketValue"
                                type="number"
                                step="0.01"
                                value={form.market_value.clone()}
                                onchange={input_change(&props.on_input, Field::MarketValue)}
                            />
                        </div>
                    }
                } else { html! {} }}

                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary">{form.submit_label()}</button>
                    {if editing {
                        html! {
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                        }
                    } else { html! {} }}
                </div>
            </form>
        </section>
    }
}
