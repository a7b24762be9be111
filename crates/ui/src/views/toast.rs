use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::vm::{TOAST_DURATION_MS, ToastVm};

/// Shown when a progress write fails; play continues from memory.
pub const SAVE_FAILED: &str = "Progress could not be saved";

/// Show `message` and clear it after `TOAST_DURATION_MS` unless replaced.
///
/// The timer outlives the calling view so a toast raised just before
/// navigating still clears.
pub fn show_toast(mut toast: Signal<ToastVm>, message: &str) {
    let seq = toast.write().show(message);
    let _ = spawn_forever(async move {
        tokio::time::sleep(Duration::from_millis(TOAST_DURATION_MS)).await;
        toast.write().clear_if(seq);
    });
}

#[component]
pub fn Toast() -> Element {
    let toast = use_context::<Signal<ToastVm>>();
    let message = toast.read().message.clone();

    rsx! {
        div { class: "toast", role: "status", "{message}" }
    }
}
