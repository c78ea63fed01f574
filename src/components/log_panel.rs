//! Log Panel Component
//!
//! Collapsible footer showing the lines kept by the rolling logger.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move || set_lines.set(rolling_logger::recent_lines());
    let toggle = move |_| {
        if !open.get_untracked() {
            refresh();
        }
        set_open.update(|o| *o = !*o);
    };
    let clear = move |_| {
        rolling_logger::clear_recent_lines();
        refresh();
    };

    view! {
        <footer class="log-panel">
            <button class="log-toggle" on:click=toggle>
                {move || if open.get() { "Hide logs" } else { "Show logs" }}
            </button>
            <Show when=move || open.get()>
                <div class="log-actions">
                    <span class="log-count">{move || lines.get().len()} " lines"</span>
                    <button class="log-btn" on:click=move |_| refresh()>"Refresh"</button>
                    <button class="log-btn" on:click=clear>"Clear"</button>
                </div>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </Show>
        </footer>
    }
}
