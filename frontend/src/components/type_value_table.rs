use shared::view::TypeValueRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypeValueTableProps {
    pub rows: Vec<TypeValueRow>,
}

#[function_component(TypeValueTable)]
pub fn type_value_table(props: &TypeValueTableProps) -> Html {
    html! {
        <section class="type-values-section">
            <h2>{"Market value by type"}</h2>
            <table id="typeMarketValuesTable" class="type-values-table">
                <thead>
                    <tr>
                        <th>{"Type"}</th>
                        <th>{"Market value"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.rows.iter().map(|row| html! {
                        <tr>
                            <td>{&row.account_type}</td>
                            <td class="amount">{&row.market_value}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </section>
    }
}
