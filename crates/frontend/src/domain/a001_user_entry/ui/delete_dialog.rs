use super::details::RegistrationViewModel;
use crate::shared::modal_frame::ModalFrame;
use contracts::shared::config::ListLayout;
use leptos::prelude::*;

/// Confirmation dialog gating delete. Visible while a delete is staged.
#[component]
pub fn DeleteDialog(vm: RegistrationViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.is_delete_pending()>
            <ModalFrame
                on_close=Callback::new(move |_| vm.cancel_delete())
                modal_class="confirm-dialog".to_string()
            >
                <div class="modal-header">
                    <h2 class="modal-title">{"Confirm Delete"}</h2>
                </div>
                <div class="modal-body">
                    {move || match vm.layout.get() {
                        ListLayout::Cards => view! {
                            <p>
                                "Are you sure you want to delete "
                                <strong>{vm.pending_delete_name().unwrap_or_default()}</strong>
                                " from the list?"
                            </p>
                        }.into_any(),
                        ListLayout::Table => view! {
                            <p>"Are you sure you want to delete this user?"</p>
                        }.into_any(),
                    }}
                </div>
                <div class="modal-actions">
                    <button class="button button--secondary" on:click=move |_| vm.cancel_delete()>
                        {"Cancel"}
                    </button>
                    <button class="button button--danger" autofocus=true on:click=move |_| vm.confirm_delete_command()>
                        {"Delete"}
                    </button>
                </div>
            </ModalFrame>
        </Show>
    }
}
