use shared::{ApiError, LoginRequest, LoginResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::components::toast::NoticeKind;
use crate::session::AdminSession;

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    /// Fired with the fresh session once the backend accepts the credentials
    pub on_authenticated: Callback<AdminSession>,
    pub on_close: Callback<()>,
    pub on_notice: Callback<(NoticeKind, String)>,
}

pub enum AdminLoginMsg {
    UpdateUsername(String),
    UpdatePassword(String),
    Submit,
    Completed(Result<LoginResponse, ApiError>),
}

/// Modal credential form gating the admin panel.
///
/// A failed attempt produces exactly one notice and leaves every panel as it
/// was; there is no retry logic or lockout, the admin just tries again.
pub struct AdminLogin {
    username: String,
    password: String,
    submitting: bool,
}

impl Component for AdminLogin {
    type Message = AdminLoginMsg;
    type Properties = AdminLoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AdminLoginMsg::UpdateUsername(username) => {
                self.username = username;
                true
            }
            AdminLoginMsg::UpdatePassword(password) => {
                self.password = password;
                true
            }
            AdminLoginMsg::Submit => {
                if self.submitting || self.username.trim().is_empty() || self.password.is_empty() {
                    return false;
                }
                self.submitting = true;
                let request = LoginRequest {
                    username: self.username.trim().to_string(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(AdminLoginMsg::Completed(api::login(&request).await));
                });
                true
            }
            AdminLoginMsg::Completed(Ok(response)) => {
                self.submitting = false;
                if response.access_token.is_empty() {
                    // a 2xx with no token is still a rejection
                    ctx.props()
                        .on_notice
                        .emit((NoticeKind::Error, "Invalid credentials".to_string()));
                    return true;
                }
                let session = AdminSession::issue(response.access_token, js_sys::Date::now());
                ctx.props().on_authenticated.emit(session);
                true
            }
            AdminLoginMsg::Completed(Err(err)) => {
                self.submitting = false;
                log::error!("Admin login failed: {}", err);
                let text = match err {
                    ApiError::Network(_) => "Login failed",
                    _ => "Invalid credentials",
                };
                ctx.props()
                    .on_notice
                    .emit((NoticeKind::Error, text.to_string()));
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

        let on_username_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AdminLoginMsg::UpdateUsername(input.value())
        });
        let on_password_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AdminLoginMsg::UpdatePassword(input.value())
        });
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            AdminLoginMsg::Submit
        });

        html! {
            <div class="modal-overlay" onclick={on_overlay_click}>
                <div class="modal-dialog" onclick={on_dialog_click}>
                    <h3>{ "Admin Login" }</h3>
                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="admin-username">{ "Username" }</label>
                            <input
                                type="text"
                                id="admin-username"
                                value={self.username.clone()}
                                oninput={on_username_input}
                                required=true
                            />
                        </div>
                        <div class="form-group">
                            <label for="admin-password">{ "Password" }</label>
                            <input
                                type="password"
                                id="admin-password"
                                value={self.password.clone()}
                                oninput={on_password_input}
                                required=true
                            />
                        </div>
                        <div class="modal-actions">
                            <button
                                type="button"
                                class="cancel-button"
                                onclick={move |_| on_close.emit(())}
                            >
                                { "Cancel" }
                            </button>
                            <button type="submit" class="submit-button" disabled={self.submitting}>
                                { if self.submitting { "Signing in..." } else { "Login" } }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}
