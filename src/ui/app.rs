/// Root component: owns the view state and turns UI events into commands

use crate::api::{Backend, HttpClient};
use crate::config::ClientConfig;
use crate::controllers::{AppContext, Command};
use crate::job_data::{JobRecord, RecordId};
use crate::render::{
    fetch_button_label, job_detail_fields, list_button_label, save_button_label, saved_jobs_listing,
    SavedJobsListing,
};
use crate::session::SessionStore;
use crate::state::{AuthDialog, AuthField, AuthMode, FetchView, SaveStatus, SavedJobsPanel, ViewSlots};
use crate::timer::BrowserDelay;
use crate::ui::components::{AuthDialogView, JobDetails, SavedJobCard};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ClientConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let http = use_memo(props.config.clone(), HttpClient::new);
    let auth_dialog = use_state(AuthDialog::default);
    let signed_in_as = use_state(|| SessionStore::local().email());
    let fetch = use_state(FetchView::default);
    let current_job = use_state(|| None::<JobRecord>);
    let save_status = use_state(SaveStatus::default);
    let saved_jobs = use_state(SavedJobsPanel::default);
    let list_busy = use_state(|| false);
    let url_input = use_state(String::new);

    let api: Rc<dyn Backend> = http;
    let ctx = AppContext {
        api,
        session: SessionStore::local(),
        delay: Rc::new(BrowserDelay),
        views: ViewSlots {
            auth_dialog: Rc::new(auth_dialog.clone()),
            signed_in_as: Rc::new(signed_in_as.clone()),
            fetch: Rc::new(fetch.clone()),
            current_job: Rc::new(current_job.clone()),
            save_status: Rc::new(save_status.clone()),
            saved_jobs: Rc::new(saved_jobs.clone()),
            list_busy: Rc::new(list_busy.clone()),
        },
    };

    // Each command runs as its own task; failures are already on screen
    let dispatch = Callback::from(move |command: Command| {
        let ctx = ctx.clone();
        spawn_local(async move {
            if let Err(e) = ctx.dispatch(command).await {
                log::debug!("Command ended with error: {}", e);
            }
        });
    });

    let on_url_input = {
        let url_input = url_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                url_input.set(input.value());
            }
        })
    };

    let on_fetch = {
        let url_input = url_input.clone();
        dispatch.reform(move |_: MouseEvent| Command::FetchJob((*url_input).clone()))
    };

    let on_url_keypress = {
        let url_input = url_input.clone();
        let dispatch = dispatch.clone();
        let fetch = fetch.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !fetch.is_loading() {
                dispatch.emit(Command::FetchJob((*url_input).clone()));
            }
        })
    };

    let on_save = dispatch.reform(|_: MouseEvent| Command::SaveJob);
    let on_list = dispatch.reform(|_: MouseEvent| Command::ListJobs);
    let on_delete = dispatch.reform(Command::DeleteJob);
    let on_login = dispatch.reform(|_: MouseEvent| Command::OpenAuth(AuthMode::Login));
    let on_logout = dispatch.reform(|_: MouseEvent| Command::Logout);
    let on_auth_edit = dispatch.reform(|(field, value): (AuthField, String)| Command::EditAuth(field, value));
    let on_auth_submit = dispatch.reform(|_: ()| Command::SubmitAuth);
    let on_auth_toggle = dispatch.reform(|_: ()| Command::ToggleAuthMode);
    let on_auth_close = dispatch.reform(|_: ()| Command::CloseAuth);

    html! {
        <div class="container">
            <div class="header">
                <h1 class="main-title">{"Job Scraper"}</h1>
                if let Some(email) = (*signed_in_as).clone() {
                    <div class="auth-status">
                        <span class="signed-in-as">{email}</span>
                        <Button onclick={on_logout} variant={ButtonVariant::Secondary}>
                            {"Logout"}
                        </Button>
                    </div>
                } else {
                    <Button onclick={on_login} variant={ButtonVariant::Secondary}>
                        {"Login / Register"}
                    </Button>
                }
            </div>

            // URL entry
            <div class="search-container">
                <input
                    type="url"
                    placeholder="Paste a job posting URL..."
                    value={(*url_input).clone()}
                    oninput={on_url_input}
                    onkeypress={on_url_keypress}
                    class="search-input"
                />
                <Button onclick={on_fetch} disabled={fetch.is_loading()}>
                    {fetch_button_label(&fetch)}
                </Button>
            </div>

            // Extraction status
            {match &*fetch {
                FetchView::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Extracting job information..."}</p>
                    </div>
                },
                FetchView::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                FetchView::Result(job) => html! {
                    <div class="job-info">
                        <JobDetails fields={job_detail_fields(job)} />
                        <Button onclick={on_save} disabled={save_status.is_disabled()}>
                            {save_button_label(&save_status)}
                        </Button>
                        if let SaveStatus::Failed(message) = &*save_status {
                            <Alert r#type={AlertType::Danger} title={message.clone()} inline={true}>
                            </Alert>
                        }
                    </div>
                },
                FetchView::Idle => html! {}
            }}

            // Saved jobs
            <div class="saved-jobs">
                <Button onclick={on_list} disabled={*list_busy} variant={ButtonVariant::Secondary} block={true}>
                    {list_button_label(*list_busy)}
                </Button>

                if let Some(err) = saved_jobs.error.clone() {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err}
                    </Alert>
                }

                {match saved_jobs_listing(&saved_jobs) {
                    SavedJobsListing::Hidden => html! {},
                    SavedJobsListing::Empty(message) => html! {
                        <div class="empty-state">
                            <p>{message}</p>
                        </div>
                    },
                    SavedJobsListing::Cards(cards) => html! {
                        <div class="saved-jobs-list">
                            {for cards.into_iter().enumerate().map(|(index, card)| {
                                let key = card
                                    .id
                                    .as_ref()
                                    .map(RecordId::to_string)
                                    .unwrap_or_else(|| format!("unsaved-{}", index));
                                html! {
                                    <SavedJobCard key={key} card={card} on_delete={on_delete.clone()} />
                                }
                            })}
                        </div>
                    },
                }}
            </div>

            <AuthDialogView
                dialog={(*auth_dialog).clone()}
                on_edit={on_auth_edit}
                on_submit={on_auth_submit}
                on_toggle={on_auth_toggle}
                on_close={on_auth_close}
            />

            <p class="footer">
                {"Job Scraper v0.1.0"}
            </p>
        </div>
    }
}
