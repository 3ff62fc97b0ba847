use shared::{ApiError, GalleryImage, UploadResponse};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api;
use crate::components::toast::NoticeKind;
use crate::session::AdminSession;
use crate::utils;

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub session: AdminSession,
    /// Current gallery records, for the manage list
    pub images: Vec<GalleryImage>,
    /// Fired once per successful upload or removal
    pub on_refresh: Callback<()>,
    pub on_close: Callback<()>,
    pub on_logout: Callback<()>,
    pub on_notice: Callback<(NoticeKind, String)>,
}

pub enum AdminPanelMsg {
    UpdateDescription(String),
    FileChosen(Option<File>),
    Submit,
    Uploaded(Result<UploadResponse, ApiError>),
    RequestRemove(Uuid),
    CancelRemove,
    ConfirmRemove,
    Removed(Result<(), ApiError>),
}

/// Upload form plus a manage list of the current photos.
///
/// On a successful upload the form is cleared and the gallery re-fetched
/// exactly once; on failure the form (including the chosen file) is left as
/// entered so the admin can retry.
pub struct AdminPanel {
    description: String,
    file: Option<File>,
    uploading: bool,
    pending_remove: Option<Uuid>,
    file_input: NodeRef,
}

impl AdminPanel {
    /// A 401 means the token expired while the panel was open; any other
    /// failure is reported and the form/list left alone.
    fn report_failure(&self, ctx: &Context<Self>, err: &ApiError, fallback: &str) {
        if matches!(err, ApiError::Auth(_)) {
            ctx.props().on_notice.emit((
                NoticeKind::Error,
                "Session expired. Please log in again.".to_string(),
            ));
            ctx.props().on_logout.emit(());
        } else {
            ctx.props()
                .on_notice
                .emit((NoticeKind::Error, fallback.to_string()));
        }
    }
}

impl Component for AdminPanel {
    type Message = AdminPanelMsg;
    type Properties = AdminPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            description: String::new(),
            file: None,
            uploading: false,
            pending_remove: None,
            file_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AdminPanelMsg::UpdateDescription(description) => {
                self.description = description;
                true
            }
            AdminPanelMsg::FileChosen(file) => {
                self.file = file;
                true
            }
            AdminPanelMsg::Submit => {
                if self.uploading {
                    return false;
                }
                let Some(file) = self.file.clone() else {
                    ctx.props()
                        .on_notice
                        .emit((NoticeKind::Error, "Choose an image to upload".to_string()));
                    return true;
                };
                self.uploading = true;
                let token = ctx.props().session.token.clone();
                let description = self.description.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(AdminPanelMsg::Uploaded(
                        api::upload_image(&token, &file, &description).await,
                    ));
                });
                true
            }
            AdminPanelMsg::Uploaded(Ok(response)) => {
                self.uploading = false;
                log::debug!("Uploaded gallery image {:?}", response.id);
                self.description.clear();
                self.file = None;
                if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                ctx.props()
                    .on_notice
                    .emit((NoticeKind::Success, "Image uploaded successfully!".to_string()));
                ctx.props().on_refresh.emit(());
                true
            }
            AdminPanelMsg::Uploaded(Err(err)) => {
                self.uploading = false;
                log::error!("Upload failed: {}", err);
                self.report_failure(ctx, &err, "Upload failed");
                true
            }
            AdminPanelMsg::RequestRemove(id) => {
                self.pending_remove = Some(id);
                true
            }
            AdminPanelMsg::CancelRemove => {
                self.pending_remove = None;
                true
            }
            AdminPanelMsg::ConfirmRemove => {
                let Some(id) = self.pending_remove.take() else {
                    return false;
                };
                let token = ctx.props().session.token.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(AdminPanelMsg::Removed(
                        api::delete_image(&token, &id).await,
                    ));
                });
                true
            }
            AdminPanelMsg::Removed(Ok(())) => {
                ctx.props()
                    .on_notice
                    .emit((NoticeKind::Success, "Image removed.".to_string()));
                ctx.props().on_refresh.emit(());
                true
            }
            AdminPanelMsg::Removed(Err(err)) => {
                log::error!("Failed to remove image: {}", err);
                self.report_failure(ctx, &err, "Could not remove image");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.props().on_close.clone();
        let on_overlay_click = {
            let on_close = on_close.clone();
            Callback::from(move |_| on_close.emit(()))
        };
        let on_dialog_click = Callback::from(|e: MouseEvent| {
            e.stop_propagation();
        });

        let on_logout = ctx.props().on_logout.clone();
        let on_logout_click = Callback::from(move |_| on_logout.emit(()));

        let on_file_change = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AdminPanelMsg::FileChosen(input.files().and_then(|list| list.get(0)))
        });
        let on_description_input = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            AdminPanelMsg::UpdateDescription(area.value())
        });
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            AdminPanelMsg::Submit
        });

        html! {
            <div class="modal-overlay" onclick={on_overlay_click}>
                <div class="modal-dialog admin-panel" onclick={on_dialog_click}>
                    <div class="admin-panel-header">
                        <h3>{ "Admin Panel" }</h3>
                        <button class="logout-button" onclick={on_logout_click}>
                            { "Logout" }
                        </button>
                    </div>

                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="upload-image">{ "Select Image" }</label>
                            <input
                                ref={self.file_input.clone()}
                                type="file"
                                id="upload-image"
                                accept="image/*"
                                onchange={on_file_change}
                                required=true
                            />
                        </div>
                        <div class="form-group">
                            <label for="upload-description">{ "Description" }</label>
                            <textarea
                                id="upload-description"
                                rows="3"
                                placeholder="Describe the work..."
                                value={self.description.clone()}
                                oninput={on_description_input}
                            />
                        </div>
                        <div class="modal-actions">
                            <button
                                type="button"
                                class="cancel-button"
                                onclick={move |_| on_close.emit(())}
                            >
                                { "Close" }
                            </button>
                            <button type="submit" class="submit-button" disabled={self.uploading}>
                                { if self.uploading { "Uploading..." } else { "Upload Image" } }
                            </button>
                        </div>
                    </form>

                    <div class="admin-manage">
                        <h4>{ "Current Photos" }</h4>
                        {
                            if ctx.props().images.is_empty() {
                                html! {
                                    <p class="admin-manage-empty">
                                        { "No photos uploaded yet. Visitors see the sample gallery." }
                                    </p>
                                }
                            } else {
                                html! {
                                    <ul class="admin-manage-list">
                                        { for ctx.props().images.iter().map(|image| self.view_row(ctx, image)) }
                                    </ul>
                                }
                            }
                        }
                    </div>

                    if self.pending_remove.is_some() {
                        <div class="confirm-modal">
                            <p>{ "Remove this photo from the gallery?" }</p>
                            <div class="confirm-actions">
                                <button
                                    class="cancel-button"
                                    onclick={ctx.link().callback(|_| AdminPanelMsg::CancelRemove)}
                                >
                                    { "Cancel" }
                                </button>
                                <button
                                    class="confirm-button"
                                    onclick={ctx.link().callback(|_| AdminPanelMsg::ConfirmRemove)}
                                >
                                    { "Remove" }
                                </button>
                            </div>
                        </div>
                    }
                </div>
            </div>
        }
    }
}

impl AdminPanel {
    fn view_row(&self, ctx: &Context<Self>, image: &GalleryImage) -> Html {
        let id = image.id;
        let on_remove = ctx
            .link()
            .callback(move |_| AdminPanelMsg::RequestRemove(id));

        let label = image
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&image.filename);

        html! {
            <li key={id.to_string()} class="admin-manage-row">
                <img class="admin-thumb" src={image.data_uri()} alt={label.to_string()} />
                <span class="admin-photo-label">{ label }</span>
                <span class="admin-photo-date">
                    { if image.uploaded_at.is_empty() {
                        "—".to_string()
                    } else {
                        utils::format_timestamp(&image.uploaded_at)
                    } }
                </span>
                <button class="remove-button" onclick={on_remove}>
                    { "Remove" }
                </button>
            </li>
        }
    }
}
