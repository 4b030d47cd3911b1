use shared::view::AccountsView;
use shared::AccountId;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountTableProps {
    pub accounts: AccountsView,
    pub on_edit: Callback<AccountId>,
    pub on_delete: Callback<AccountId>,
}

/// Accounts sorted by market value, with the grand total underneath
#[function_component(AccountTable)]
pub fn account_table(props: &AccountTableProps) -> Html {
    html! {
        <section class="accounts-section">
            <table id="accountsTable" class="accounts-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Type"}</th>
                        <th>{"Details"}</th>
                        <th>{"Stock symbol"}</th>
                        <th>{"Shares"}</th>
                        <th>{"Market value"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.accounts.rows.iter().map(|row| {
                        let id = row.id;
                        let on_edit = props.on_edit.reform(move |_: MouseEvent| id);
                        let on_delete = props.on_delete.reform(move |_: MouseEvent| id);
                        html! {
                            <tr key={id.to_string()}>
                                <td>{id}</td>
                                <td>{&row.account_type}</td>
                                <td>{&row.details}</td>
                                <td>{&row.stock_symbol}</td>
                                <td>{&row.shares}</td>
                                <td class="amount">{&row.market_value}</td>
                                <td class="actions">
                                    <button class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
                                    <button class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
            <p class="total-market-value">
                {"Total market value: "}
                <span id="totalMarketValue">{&props.accounts.total}</span>
            </p>
        </section>
    }
}
