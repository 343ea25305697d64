//! Fixed-bottom stack of transient notifications.

use leptos::prelude::*;

use shared::notify::Severity;

use crate::state::notifications::use_notification_context;

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "alert alert-success",
        Severity::Error => "alert alert-error",
        Severity::Info => "alert alert-info",
        Severity::Warning => "alert alert-warning",
    }
}

#[component]
pub fn NotificationBox() -> impl IntoView {
    let notifications = use_notification_context();

    view! {
        <div class="notification-box" style="width: 100%; position: fixed; bottom: 8px; display: flex; align-items: center; justify-content: center; flex-direction: column;">
            {move || {
                notifications
                    .current()
                    .into_iter()
                    .filter(|n| n.visible)
                    .map(|n| {
                        view! {
                            <div class=severity_class(n.severity) role="alert">
                                <span>{n.message.clone()}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
