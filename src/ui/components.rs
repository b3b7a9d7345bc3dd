/// Presentational components for the job panel, saved-job cards and auth dialog

use crate::job_data::RecordId;
use crate::render::{auth_dialog_labels, DetailField, JobCard};
use crate::state::{AuthDialog, AuthField};
use patternfly_yew::prelude::*;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct JobDetailsProps {
    pub fields: Vec<DetailField>,
}

#[function_component(JobDetails)]
pub fn job_details(props: &JobDetailsProps) -> Html {
    html! {
        <dl class="job-details">
            {for props.fields.iter().map(|field| html! {
                <div key={field.label.to_string()} class="job-detail-row">
                    <dt class="job-detail-label">{field.label}</dt>
                    <dd class="job-detail-value">{&field.value}</dd>
                </div>
            })}
        </dl>
    }
}

#[derive(Properties, PartialEq)]
pub struct SavedJobCardProps {
    pub card: JobCard,
    pub on_delete: Callback<RecordId>,
}

#[function_component(SavedJobCard)]
pub fn saved_job_card(props: &SavedJobCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class="saved-job-item">
            <h4 class="saved-job-title">{&card.heading}</h4>
            {for card.fields.iter().map(|field| html! {
                <p class="saved-job-field">
                    <strong>{format!("{}:", field.label)}</strong>
                    {" "}
                    {&field.value}
                </p>
            })}
            // Records without a backend id cannot be addressed for deletion
            if let Some(id) = card.id.clone() {
                <Button
                    onclick={props.on_delete.reform(move |_| id.clone())}
                    variant={ButtonVariant::Danger}
                >
                    {"🗑️ Delete"}
                </Button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthDialogViewProps {
    pub dialog: AuthDialog,
    pub on_edit: Callback<(AuthField, String)>,
    pub on_submit: Callback<()>,
    pub on_toggle: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(AuthDialogView)]
pub fn auth_dialog_view(props: &AuthDialogViewProps) -> Html {
    let AuthDialog::Open { mode, form, error } = &props.dialog else {
        return html! {};
    };
    let (title, submit_label, switch_label) = auth_dialog_labels(*mode);

    let on_input = |field: AuthField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_edit.emit((field, input.value()));
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="auth-modal">
            <div class="auth-modal-content">
                <div class="auth-modal-header">
                    <h2 class="auth-modal-title">{title}</h2>
                    <button class="auth-modal-close" onclick={props.on_close.reform(|_| ())}>
                        {"×"}
                    </button>
                </div>

                if let Some(message) = error.clone() {
                    <Alert r#type={AlertType::Danger} title={message} inline={true}>
                    </Alert>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <input
                        type="email"
                        placeholder="Email"
                        value={form.email.clone()}
                        oninput={on_input(AuthField::Email)}
                        class="auth-input"
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={form.password.clone()}
                        oninput={on_input(AuthField::Password)}
                        class="auth-input"
                    />
                    if props.dialog.shows_confirmation() {
                        <input
                            type="password"
                            placeholder="Confirm password"
                            value={form.confirmation.clone()}
                            oninput={on_input(AuthField::Confirmation)}
                            class="auth-input"
                        />
                    }
                    <div class="auth-actions">
                        <button type="submit" class="pf-v5-c-button pf-m-primary">
                            {submit_label}
                        </button>
                        <Button
                            onclick={props.on_toggle.reform(|_| ())}
                            variant={ButtonVariant::Link}
                        >
                            {switch_label}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
