use yew::prelude::*;

use super::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct DeleteConfirmModalProps {
    pub is_open: bool,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(DeleteConfirmModal)]
pub fn delete_confirm_modal(props: &DeleteConfirmModalProps) -> Html {
    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal
            id="deleteConfirmModal"
            title="Delete account"
            is_open={props.is_open}
            on_close={props.on_close.clone()}
        >
            <p>{"Delete this account? Its transactions stay in the history."}</p>
            <div class="modal-buttons">
                <button id="confirmDelete" class="btn btn-danger" onclick={on_confirm}>{"Delete"}</button>
                <button id="cancelDelete" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </Modal>
    }
}
