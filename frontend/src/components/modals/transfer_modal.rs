use shared::validation::TransferFormInput;
use shared::view::SelectOption;
use shared::Field;
use yew::prelude::*;

use super::modal::Modal;
use crate::components::inputs::{account_options, input_change, select_change};

#[derive(Properties, PartialEq)]
pub struct TransferModalProps {
    pub is_open: bool,
    pub from_options: Vec<SelectOption>,
    pub to_options: Vec<SelectOption>,
    pub input: TransferFormInput,
    pub on_input: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(TransferModal)]
pub fn transfer_modal(props: &TransferModalProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <Modal
            id="transferModal"
            title="Transfer between accounts"
            is_open={props.is_open}
            on_close={props.on_close.clone()}
        >
            <form id="transferForm" class="transfer-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="fromAccountId">{"From"}</label>
                    <select id="fromAccountId" onchange={select_change(&props.on_input, Field::TransferFrom)}>
                        {account_options(&props.from_options, &props.input.from_account_id)}
                    </select>
                </div>
                <div class="form-group">
                    <label for="toAccountId">{"To"}</label>
                    <select id="toAccountId" onchange={select_change(&props.on_input, Field::TransferTo)}>
                        {account_options(&props.to_options, &props.input.to_account_id)}
                    </select>
                </div>
                <div class="form-group">
                    <label for="transferAmount">{"Amount"}</label>
                    <input
                        id="transferAmount"
                        type="number"
                        step="0.01"
                        min="0"
                        value={props.input.amount.clone()}
                        onchange={input_change(&props.on_input, Field::TransferAmount)}
                    />
                </div>
                <button type="submit" class="btn btn-primary">{"Transfer"}</button>
            </form>
        </Modal>
    }
}
