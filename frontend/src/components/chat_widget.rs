use shared::{ApiError, ChatResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::chat::{ChatLog, Sender, Submission, GREETING};

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub on_close: Callback<()>,
}

pub enum ChatWidgetMsg {
    UpdateInput(String),
    Submit,
    Settled(Result<ChatResponse, ApiError>),
}

/// Floating assistant widget.
///
/// All ordering and session-threading rules live in [`ChatLog`]; this
/// component only renders the transcript and moves messages between the log
/// and the network.
pub struct ChatWidget {
    log: ChatLog,
    input: String,
}

impl ChatWidget {
    fn dispatch(&self, ctx: &Context<Self>, message: String) {
        let request = self.log.request_for(message);
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(ChatWidgetMsg::Settled(api::send_chat(&request).await));
        });
    }
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ChatWidgetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            log: ChatLog::new(),
            input: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::UpdateInput(input) => {
                self.input = input;
                true
            }
            ChatWidgetMsg::Submit => match self.log.submit(&self.input) {
                Submission::Rejected => false,
                Submission::Queued => {
                    self.input.clear();
                    true
                }
                Submission::Dispatch(message) => {
                    self.input.clear();
                    self.dispatch(ctx, message);
                    true
                }
            },
            ChatWidgetMsg::Settled(outcome) => {
                if let Err(err) = &outcome {
                    log::error!("Chat request failed: {}", err);
                }
                if let Some(next) = self.log.settle(outcome) {
                    self.dispatch(ctx, next);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.props().on_close.clone();
        let on_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::UpdateInput(input.value())
        });
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatWidgetMsg::Submit
        });

        html! {
            <div class="chat-widget">
                <div class="chat-header">
                    <h4>{ "Beauty Assistant" }</h4>
                    <button class="chat-close" onclick={move |_| on_close.emit(())}>
                        { "✕" }
                    </button>
                </div>

                <div class="chat-messages">
                    if self.log.lines().is_empty() {
                        <div class="chat-greeting">{ GREETING }</div>
                    }
                    { for self.log.lines().iter().enumerate().map(|(i, line)| {
                        let bubble_class = match line.sender {
                            Sender::User => "chat-bubble user",
                            Sender::Bot => "chat-bubble bot",
                        };
                        html! {
                            <div key={i} class={bubble_class}>
                                { &line.text }
                            </div>
                        }
                    }) }
                </div>

                <form class="chat-input-row" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Ask about beauty tips or location..."
                        value={self.input.clone()}
                        oninput={on_input}
                    />
                    <button type="submit">{ "Send" }</button>
                </form>
            </div>
        }
    }
}
