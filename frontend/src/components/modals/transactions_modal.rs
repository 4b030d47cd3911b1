use shared::validation::DateRangeInput;
use shared::view::TransactionRow;
use shared::Field;
use yew::prelude::*;

use super::modal::Modal;
use crate::components::inputs::input_change;

#[derive(Properties, PartialEq)]
pub struct TransactionsModalProps {
    pub is_open: bool,
    pub range: DateRangeInput,
    pub rows: Vec<TransactionRow>,
    pub on_input: Callback<(Field, String)>,
    pub on_query: Callback<()>,
    pub on_close: Callback<()>,
}

/// Transaction history for an inclusive date range
#[function_component(TransactionsModal)]
pub fn transactions_modal(props: &TransactionsModalProps) -> Html {
    let on_query = {
        let on_query = props.on_query.clone();
        Callback::from(move |_: MouseEvent| on_query.emit(()))
    };

    html! {
        <Modal
            id="transactionsModal"
            title="Transactions"
            is_open={props.is_open}
            on_close={props.on_close.clone()}
        >
            <div class="date-range">
                <label for="startDate">{"From"}</label>
                <input
                    id="startDate"
                    type="date"
                    value={props.range.start.clone()}
                    onchange={input_change(&props.on_input, Field::QueryStart)}
                />
                <label for="endDate">{"To"}</label>
                <input
                    id="endDate"
                    type="date"
                    value={props.range.end.clone()}
                    onchange={input_change(&props.on_input, Field::QueryEnd)}
                />
                <button type="button" class="btn btn-primary" onclick={on_query}>{"Search"}</button>
            </div>

            <table id="transactionsTable" class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Account"}</th>
                        <th>{"Change"}</th>
                        <th>{"Balance"}</th>
                        <th>{"Reason"}</th>
                        <th>{"Time"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.rows.iter().map(|row| {
                        let change_class = if row.is_debit { "amount negative" } else { "amount positive" };
                        html! {
                            <tr>
                                <td>{&row.account}</td>
                                <td class={change_class}>{&row.change}</td>
                                <td class="amount">{&row.balance_after}</td>
                                <td>{&row.reason}</td>
                                <td>{&row.timestamp}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </Modal>
    }
}
