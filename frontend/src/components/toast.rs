//! Dismissible notice stack.
//!
//! Login, upload, and removal outcomes surface here instead of blocking
//! `alert()` dialogs; chat errors stay inline in the transcript. Notices
//! auto-expire after a few seconds and can be dismissed early.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast success",
            NoticeKind::Error => "toast error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

pub enum NoticeAction {
    Push(NoticeKind, String),
    Dismiss(u32),
}

/// Reducer state behind the stack; ids are assigned here so a dismiss can
/// never race a push.
#[derive(Debug, Default, PartialEq)]
pub struct NoticeStack {
    next_id: u32,
    pub notices: Vec<Notice>,
}

impl Reducible for NoticeStack {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: NoticeAction) -> Rc<Self> {
        match action {
            NoticeAction::Push(kind, text) => {
                let mut notices = self.notices.clone();
                notices.push(Notice {
                    id: self.next_id,
                    kind,
                    text,
                });
                Rc::new(Self {
                    next_id: self.next_id.wrapping_add(1),
                    notices,
                })
            }
            NoticeAction::Dismiss(id) => Rc::new(Self {
                next_id: self.next_id,
                notices: self
                    .notices
                    .iter()
                    .filter(|n| n.id != id)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.notice.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={props.notice.kind.class()}>
            <span class="toast-text">{ &props.notice.text }</span>
            <button class="toast-close" onclick={on_close}>{ "×" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.notices.iter().map(|notice| {
                html! {
                    <ToastItem
                        key={notice.id}
                        notice={notice.clone()}
                        on_dismiss={props.on_dismiss.clone()}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(stack: Rc<NoticeStack>, text: &str) -> Rc<NoticeStack> {
        stack.reduce(NoticeAction::Push(NoticeKind::Error, text.to_string()))
    }

    #[test]
    fn each_push_yields_exactly_one_notice() {
        let stack = push(Rc::new(NoticeStack::default()), "Invalid credentials");
        assert_eq!(stack.notices.len(), 1);
        assert_eq!(stack.notices[0].text, "Invalid credentials");
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let stack = push(push(Rc::new(NoticeStack::default()), "a"), "b");
        assert_eq!(stack.notices[0].id + 1, stack.notices[1].id);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let stack = push(push(Rc::new(NoticeStack::default()), "a"), "b");
        let keep = stack.notices[1].id;
        let target = stack.notices[0].id;
        let stack = stack.reduce(NoticeAction::Dismiss(target));
        assert_eq!(stack.notices.len(), 1);
        assert_eq!(stack.notices[0].id, keep);
    }

    #[test]
    fn dismissing_unknown_id_is_harmless() {
        let stack = push(Rc::new(NoticeStack::default()), "a");
        let stack = stack.reduce(NoticeAction::Dismiss(999));
        assert_eq!(stack.notices.len(), 1);
    }
}
