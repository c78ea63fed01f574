//! Application Context
//!
//! Shared view state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Restaurant, Toast};

/// How long a toast stays up
const TOAST_MS: u32 = 3_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Restaurant shown in the header - read
    pub restaurant: ReadSignal<Restaurant>,
    /// Restaurant shown in the header - write
    set_restaurant: WriteSignal<Restaurant>,
    /// Current toast, if any - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Current toast, if any - write
    set_toast: WriteSignal<Option<Toast>>,
}

impl AppContext {
    pub fn new(
        restaurant: (ReadSignal<Restaurant>, WriteSignal<Restaurant>),
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
    ) -> Self {
        Self {
            restaurant: restaurant.0,
            set_restaurant: restaurant.1,
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    pub fn set_restaurant(&self, restaurant: Restaurant) {
        self.set_restaurant.set(restaurant);
    }

    /// Show a toast and hide it again after a few seconds
    pub fn show_toast(&self, message: String) {
        let id = self.toast.get_untracked().map_or(1, |t| t.id.wrapping_add(1));
        self.set_toast.set(Some(Toast { id, message }));

        let toast = self.toast;
        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            if toast.get_untracked().is_some_and(|t| t.id == id) {
                set_toast.set(None);
            }
        });
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
