use shared::validation::MoneyFormInput;
use shared::view::SelectOption;
use shared::Field;
use yew::prelude::*;

use super::modal::Modal;
use crate::components::inputs::{account_options, input_change, select_change};

/// Which side of the ledger the dialog records
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoneyKind {
    Income,
    Expense,
}

impl MoneyKind {
    fn title(self) -> &'static str {
        match self {
            MoneyKind::Income => "Record income",
            MoneyKind::Expense => "Record expense",
        }
    }

    fn id(self) -> &'static str {
        match self {
            MoneyKind::Income => "incomeModal",
            MoneyKind::Expense => "expenseModal",
        }
    }

    fn fields(self) -> (Field, Field, Field) {
        match self {
            MoneyKind::Income => (Field::IncomeAccount, Field::IncomeReason, Field::IncomeAmount),
            MoneyKind::Expense => (Field::ExpenseAccount, Field::ExpenseReason, Field::ExpenseAmount),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MoneyModalProps {
    pub kind: MoneyKind,
    pub is_open: bool,
    pub options: Vec<SelectOption>,
    pub input: MoneyFormInput,
    pub on_input: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(MoneyModal)]
pub fn money_modal(props: &MoneyModalProps) -> Html {
    let (account_field, reason_field, amount_field) = props.kind.fields();

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <Modal
            id={props.kind.id()}
            title={props.kind.title()}
            is_open={props.is_open}
            on_close={props.on_close.clone()}
        >
            <form class="money-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Account"}</label>
                    <select onchange={select_change(&props.on_input, account_field)}>
                        {account_options(&props.options, &props.input.account_id)}
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Reason"}</label>
                    <input
                        type="text"
                        value={props.input.reason.clone()}
                        onchange={input_change(&props.on_input, reason_field)}
                    />
                </div>
                <div class="form-group">
                    <label>{"Amount"}</label>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        value={props.input.amount.clone()}
                        onchange={input_change(&props.on_input, amount_field)}
                    />
                </div>
                <button type="submit" class="btn btn-primary">{"Submit"}</button>
            </form>
        </Modal>
    }
}
