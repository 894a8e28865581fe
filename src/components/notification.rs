use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::MouseEvent;
use yew::html::Scope;
use yew::prelude::*;

use crate::dom::Page;
use crate::error::Result;
use crate::toast::{Severity, ToastId, ToastSlot};

const NOTIFICATION_CSS: &str = r#"
    .notification {
        position: fixed;
        top: 20px;
        right: 20px;
        background: white;
        border-radius: 10px;
        padding: 15px 20px;
        box-shadow: 0 10px 25px rgba(0,0,0,0.1);
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 15px;
        max-width: 400px;
        z-index: 10000;
        transition: transform 0.3s cubic-bezier(0.68, -0.55, 0.265, 1.55);
        border-left: 4px solid #1a56db;
    }
    .notification-success {
        border-left-color: #10b981;
    }
    .notification-content {
        display: flex;
        align-items: center;
        gap: 10px;
        color: #1f2937;
        font-size: 0.95rem;
    }
    .notification-content i {
        font-size: 1.2rem;
        color: #1a56db;
    }
    .notification-success .notification-content i {
        color: #10b981;
    }
    .notification-close {
        background: none;
        border: none;
        color: #9ca3af;
        cursor: pointer;
        font-size: 1rem;
        padding: 5px;
        transition: color 0.2s;
    }
    .notification-close:hover {
        color: #374151;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub enter_delay_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

pub enum ToastMsg {
    Show { message: String, severity: Severity },
    Reveal(ToastId),
    Expire(ToastId),
    Close(ToastId),
    Remove(ToastId),
}

pub struct ToastHost {
    slot: ToastSlot,
    enter: Option<Timeout>,
    auto_dismiss: Option<Timeout>,
    exit: Option<Timeout>,
}

impl ToastHost {
    fn schedule(ctx: &Context<Self>, delay: u32, msg: ToastMsg) -> Timeout {
        let link = ctx.link().clone();
        Timeout::new(delay, move || link.send_message(msg))
    }

    fn begin_exit(&mut self, ctx: &Context<Self>, id: ToastId) -> bool {
        if !self.slot.dismiss(id) {
            return false;
        }
        self.exit = Some(Self::schedule(ctx, ctx.props().exit_ms, ToastMsg::Remove(id)));
        true
    }
}

impl Component for ToastHost {
    type Message = ToastMsg;
    type Properties = ToastHostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            slot: ToastSlot::default(),
            enter: None,
            auto_dismiss: None,
            exit: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let props = ctx.props();
        match msg {
            ToastMsg::Show { message, severity } => {
                // Dropping a pending timer clears it.
                drop(self.enter.take());
                drop(self.auto_dismiss.take());
                drop(self.exit.take());
                let id = self.slot.show(message, severity, Utc::now());
                self.enter = Some(Self::schedule(ctx, props.enter_delay_ms, ToastMsg::Reveal(id)));
                self.auto_dismiss = Some(Self::schedule(ctx, props.visible_ms, ToastMsg::Expire(id)));
                true
            }
            ToastMsg::Reveal(id) => self.slot.reveal(id),
            ToastMsg::Expire(id) => self.begin_exit(ctx, id),
            ToastMsg::Close(id) => {
                drop(self.auto_dismiss.take());
                self.begin_exit(ctx, id)
            }
            ToastMsg::Remove(id) => match self.slot.remove(id) {
                Some(toast) => {
                    let shown_for = Utc::now() - toast.created_at;
                    debug!("toast {} removed after {} ms", id, shown_for.num_milliseconds());
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(toast) = self.slot.current() else {
            return html! {};
        };
        let id = toast.id;
        let onclose = ctx.link().callback(move |_: MouseEvent| ToastMsg::Close(id));

        html! {
            <>
                <style>{NOTIFICATION_CSS}</style>
                <div
                    key={id.to_string()}
                    class={classes!("notification", format!("notification-{}", toast.severity.as_str()))}
                    style={format!("transform: {};", toast.phase.transform())}
                >
                    <div class="notification-content">
                        <i class={classes!("fas", toast.severity.icon())}></i>
                        <span>{ &toast.message }</span>
                    </div>
                    <button class="notification-close" onclick={onclose}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            </>
        }
    }
}

/// Cheap handle any component can use to put a toast on screen.
#[derive(Clone)]
pub struct Notifier {
    scope: Scope<ToastHost>,
}

impl Notifier {
    /// Creates the toast container under `<body>` and mounts the host into it.
    pub fn mount(page: &Page) -> Result<Self> {
        let root = page.document.create_element("div")?;
        root.set_class_name("notification-root");
        page.body()?.append_child(&root)?;

        let config = &page.config;
        let props = ToastHostProps {
            enter_delay_ms: config.toast_enter_delay_ms,
            visible_ms: config.toast_visible_ms,
            exit_ms: config.toast_exit_ms,
        };
        let handle = yew::Renderer::<ToastHost>::with_root_and_props(root, props).render();
        Ok(Self {
            scope: (*handle).clone(),
        })
    }

    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.scope.send_message(ToastMsg::Show {
            message: message.into(),
            severity,
        });
    }
}
