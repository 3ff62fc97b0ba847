//! The single brochure page: price list, gallery, contact details, plus the
//! three overlays (admin login, admin panel, chat widget) and the notice
//! stack. Each interactive feature degrades on its own; a chat outage never
//! touches the gallery and vice versa.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::toast::{NoticeAction, NoticeKind, NoticeStack};
use crate::components::{
    AdminLogin, AdminPanel, ChatWidget, ContactSection, GalleryGrid, ServiceMenu, ToastStack,
};
use crate::hooks::{use_gallery, use_local_storage};
use crate::session::{self, AdminSession};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let gallery = use_gallery();
    let stored = use_local_storage::<Option<AdminSession>>(session::STORAGE_KEY);
    let show_login = use_state(|| false);
    let show_panel = use_state(|| false);
    let show_chat = use_state(|| false);
    let notices = use_reducer(NoticeStack::default);

    // One-shot backend probe; log-only, the page renders either way.
    use_effect_with((), move |_| {
        spawn_local(async {
            match api::health().await {
                Ok(health) => log::debug!("Backend reachable: {}", health.status),
                Err(err) => log::warn!("Backend health check failed: {}", err),
            }
        });
    });

    // A token left over from a previous visit counts as logged out once its
    // 24-hour grant has lapsed.
    {
        let value = stored.value.clone();
        let clear = stored.clear.clone();
        use_effect_with((), move |_| {
            if let Some(session) = value {
                if !session.is_live(js_sys::Date::now()) {
                    log::debug!("Discarding expired admin session");
                    clear.emit(());
                }
            }
        });
    }

    let admin_session = stored
        .value
        .clone()
        .filter(|s| s.is_live(js_sys::Date::now()));

    let notify = {
        let notices = notices.clone();
        Callback::from(move |(kind, text): (NoticeKind, String)| {
            notices.dispatch(NoticeAction::Push(kind, text));
        })
    };
    let on_dismiss_notice = {
        let notices = notices.clone();
        Callback::from(move |id: u32| notices.dispatch(NoticeAction::Dismiss(id)))
    };

    // Header actions. With a live session the admin button skips straight to
    // the panel; otherwise it opens the login form.
    let on_admin_click = {
        let has_session = admin_session.is_some();
        let show_login = show_login.clone();
        let show_panel = show_panel.clone();
        Callback::from(move |_| {
            if has_session {
                show_panel.set(true);
            } else {
                show_login.set(true);
            }
        })
    };
    let on_chat_toggle = {
        let show_chat = show_chat.clone();
        Callback::from(move |_| show_chat.set(!*show_chat))
    };

    let on_close_login = {
        let show_login = show_login.clone();
        Callback::from(move |_| show_login.set(false))
    };
    let on_close_panel = {
        let show_panel = show_panel.clone();
        Callback::from(move |_| show_panel.set(false))
    };
    let on_close_chat = {
        let show_chat = show_chat.clone();
        Callback::from(move |_| show_chat.set(false))
    };

    let on_authenticated = {
        let set_session = stored.set.clone();
        let show_login = show_login.clone();
        let show_panel = show_panel.clone();
        Callback::from(move |session: AdminSession| {
            set_session.emit(Some(session));
            show_login.set(false);
            show_panel.set(true);
        })
    };
    let on_logout = {
        let clear_session = stored.clear.clone();
        let show_panel = show_panel.clone();
        Callback::from(move |_| {
            clear_session.emit(());
            show_panel.set(false);
        })
    };

    html! {
        <div class="page">
            <header class="site-header">
                <h1 class="site-title">{ "Femina Beauty Impression" }</h1>
                <div class="header-actions">
                    <button class="chat-toggle" onclick={on_chat_toggle}>
                        { "💬 Chat Assistant" }
                    </button>
                    <button class="admin-button" onclick={on_admin_click}>
                        { if admin_session.is_some() { "Admin Panel" } else { "Admin Login" } }
                    </button>
                </div>
            </header>

            <section class="hero">
                <h2>{ "Your Beauty Journey Starts Here" }</h2>
                <p>
                    { "Professional beauty services including threading, waxing, facials, \
                       and makeup. Experience the finest beauty treatments in a relaxing \
                       environment." }
                </p>
                <div class="hero-actions">
                    <a href="#services" class="hero-link">{ "View Services" }</a>
                    <a href="tel:+447368594210" class="hero-link secondary">
                        { "📞 Book Appointment" }
                    </a>
                </div>
            </section>

            <ServiceMenu />
            <GalleryGrid phase={gallery.phase.clone()} />
            <ContactSection />

            <footer class="site-footer">
                <h3>{ "Femina Beauty Impression" }</h3>
                <p>{ "Your trusted beauty destination in London" }</p>
                <p class="footer-copyright">
                    { "© 2025 Femina Beauty Impression. All rights reserved." }
                </p>
            </footer>

            if *show_login {
                <AdminLogin
                    on_authenticated={on_authenticated}
                    on_close={on_close_login}
                    on_notice={notify.clone()}
                />
            }

            if *show_panel {
                if let Some(session) = admin_session.clone() {
                    <AdminPanel
                        session={session}
                        images={gallery.phase.records().to_vec()}
                        on_refresh={gallery.refresh.clone()}
                        on_close={on_close_panel}
                        on_logout={on_logout}
                        on_notice={notify.clone()}
                    />
                }
            }

            if *show_chat {
                <ChatWidget on_close={on_close_chat} />
            }

            <ToastStack
                notices={notices.notices.clone()}
                on_dismiss={on_dismiss_notice}
            />
        </div>
    }
}
