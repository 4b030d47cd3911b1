use std::rc::Rc;

use log::{error, LevelFilter};
use shared::{perform, AccountId, Action, Dashboard, Effect, Field, ModalKind};
use yew::prelude::*;

mod components;
mod services;

use components::modals::{DeleteConfirmModal, MoneyKind, MoneyModal, TransactionsModal, TransferModal};
use components::{AccountFormSection, AccountTable, MarketValueChart, TypeValueTable};
use services::api::ApiClient;
use services::logging::ConsoleLogger;
use services::{config, date_utils};

pub enum Msg {
    Dispatch(Action),
}

/// Owns the dashboard state and carries out the effects it asks for
pub struct App {
    dashboard: Dashboard,
    api: Rc<ApiClient>,
}

impl App {
    fn run_effects(&self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Call(call) => {
                    let api = Rc::clone(&self.api);
                    ctx.link()
                        .send_future(async move { Msg::Dispatch(perform(&*api, call).await) });
                }
                Effect::Notify(notice) => gloo::dialogs::alert(&notice.message),
            }
        }
    }

    fn header(&self, ctx: &Context<Self>) -> Html {
        let show = |kind: ModalKind| ctx.link().callback(move |_: MouseEvent| Msg::Dispatch(Action::ShowModal(kind)));
        let refresh = ctx
            .link()
            .callback(|_: MouseEvent| Msg::Dispatch(Action::RefreshMarketValues));

        html! {
            <header class="dashboard-header">
                <h1>{"Finance Dashboard"}</h1>
                <nav class="dashboard-actions">
                    <button class="btn" onclick={show(ModalKind::Income)}>{"Income"}</button>
                    <button class="btn" onclick={show(ModalKind::Expense)}>{"Expense"}</button>
                    <button class="btn" onclick={show(ModalKind::Transfer)}>{"Transfer"}</button>
                    <button class="btn" onclick={show(ModalKind::Transactions)}>{"Transactions"}</button>
                    <button id="refreshMarketValues" class="btn btn-secondary" onclick={refresh}>
                        {"Refresh market values"}
                    </button>
                </nav>
            </header>
        }
    }

    fn modals(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let dash = &self.dashboard;
        let selects = &dash.accounts().selects;
        let on_input = link.callback(|(field, value): (Field, String)| Msg::Dispatch(Action::Input(field, value)));
        let dispatch = |action: Action| link.callback(move |_: ()| Msg::Dispatch(action.clone()));
        let hide = |kind: ModalKind| dispatch(Action::HideModal(kind));

        html! {
            <>
                <MoneyModal
                    kind={MoneyKind::Income}
                    is_open={dash.modals().is_open(ModalKind::Income)}
                    options={selects.income.clone()}
                    input={dash.income_input().clone()}
                    on_input={on_input.clone()}
                    on_submit={dispatch(Action::SubmitIncome)}
                    on_close={hide(ModalKind::Income)}
                />
                <MoneyModal
                    kind={MoneyKind::Expense}
                    is_open={dash.modals().is_open(ModalKind::Expense)}
                    options={selects.expense.clone()}
                    input={dash.expense_input().clone()}
                    on_input={on_input.clone()}
                    on_submit={dispatch(Action::SubmitExpense)}
                    on_close={hide(ModalKind::Expense)}
                />
                <TransferModal
                    is_open={dash.modals().is_open(ModalKind::Transfer)}
                    from_options={selects.transfer_from.clone()}
                    to_options={selects.transfer_to.clone()}
                    input={dash.transfer_input().clone()}
                    on_input={on_input.clone()}
                    on_submit={dispatch(Action::SubmitTransfer)}
                    on_close={hide(ModalKind::Transfer)}
                />
                <TransactionsModal
                    is_open={dash.modals().is_open(ModalKind::Transactions)}
                    range={dash.query_input().clone()}
                    rows={dash.transactions().to_vec()}
                    on_input={on_input}
                    on_query={dispatch(Action::QueryTransactions)}
                    on_close={hide(ModalKind::Transactions)}
                />
                <DeleteConfirmModal
                    is_open={dash.modals().is_open(ModalKind::DeleteConfirm)}
                    on_confirm={dispatch(Action::ConfirmDelete)}
                    on_close={hide(ModalKind::DeleteConfirm)}
                />
            </>
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load();
        let api = Rc::new(ApiClient::from_config(&config));

        match date_utils::today() {
            Some(today) => ctx.link().send_message(Msg::Dispatch(Action::Load { today })),
            None => error!("❌ Could not determine today's date; dashboard not loaded"),
        }

        Self {
            dashboard: Dashboard::new(config),
            api,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Dispatch(action) => {
                let effects = self.dashboard.update(action);
                self.run_effects(ctx, effects);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let dash = &self.dashboard;

        let on_input = link.callback(|(field, value): (Field, String)| Msg::Dispatch(Action::Input(field, value)));
        let on_submit = link.callback(|_: ()| Msg::Dispatch(Action::SubmitAccountForm));
        let on_reset = link.callback(|_: ()| Msg::Dispatch(Action::ResetAccountForm));
        let on_edit = link.callback(|id: AccountId| Msg::Dispatch(Action::EditAccount(id)));
        let on_delete = link.callback(|id: AccountId| Msg::Dispatch(Action::RequestDelete(id)));

        html! {
            <div class="dashboard">
                {self.header(ctx)}
                <main class="dashboard-main">
                    <AccountFormSection
                        form={dash.form().clone()}
                        on_input={on_input}
                        on_submit={on_submit}
                        on_reset={on_reset}
                    />
                    <AccountTable
                        accounts={dash.accounts().clone()}
                        on_edit={on_edit}
                        on_delete={on_delete}
                    />
                    <TypeValueTable rows={dash.type_values().to_vec()} />
                    <MarketValueChart chart={dash.chart().cloned()} />
                </main>
                {self.modals(ctx)}
            </div>
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    ConsoleLogger::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
