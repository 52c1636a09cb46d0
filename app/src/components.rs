use leptos::prelude::*;

use crate::state::{ViewState, GLOW_SIZE_PX};

/// Soft radial glow that trails the pointer. Raw pointer samples land here as
/// an inline position; the slow transition in the stylesheet does the
/// smoothing, so there is no throttling on the sampling side.
#[component]
pub fn Glow(state: RwSignal<ViewState>) -> impl IntoView {
    let placement = move || {
        let (left, top) = state.with(|state| state.pointer().glow_origin());
        format!(
            "width: {GLOW_SIZE_PX}px; height: {GLOW_SIZE_PX}px; left: {left}px; top: {top}px"
        )
    };

    view! {
        <div class="glow" style=placement></div>
    }
}

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="credits">
            <p>
                "Requested by "
                <a href="https://twitter.com/nicoismade" target="_blank" rel="noopener noreferrer">
                    "@nicoismade"
                </a>
                " · Built by "
                <a href="https://twitter.com/clonkbot" target="_blank" rel="noopener noreferrer">
                    "@clonkbot"
                </a>
            </p>
        </footer>
    }
}
