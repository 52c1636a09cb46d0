use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::components::{Glow, PageFooter};
use crate::pointer::{forward_pointer_move, PointerTracker};
use crate::registry::{LinkEntry, LINKS, STATS};
use crate::state::{row_reveal_delay_ms, ViewState};

#[component]
pub fn Index() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());

    // Runs once in the browser, after hydration: flip the loaded latch so the
    // entrance transitions play, then follow the pointer until the page is
    // torn down. The tracker handle is not Send, hence the SendWrapper.
    Effect::new(move || {
        state.update(|state| state.mark_loaded());
        let tracker =
            PointerTracker::subscribe(move |position| forward_pointer_move(state, position));
        if let Some(tracker) = tracker {
            let tracker = SendWrapper::new(tracker);
            on_cleanup(move || drop(tracker.take()));
        }
    });

    view! {
        <div class=move || if state.with(|state| state.is_loaded()) { "page loaded" } else { "page" }>
            <Glow state/>
            <div class="grid-overlay"></div>
            <div class="noise-overlay"></div>

            <main>
                <div class="accent-line"></div>
                <div class="columns">
                    <IdentityPanel/>
                    <section class="links">
                        <div class="rows">
                            {LINKS
                                .iter()
                                .enumerate()
                                .map(|(index, entry)| view! { <LinkRow index entry state/> })
                                .collect_view()}
                        </div>
                        <StatsRow/>
                    </section>
                </div>
                <PageFooter/>
            </main>

            <div class="corner lower-left">
                <div class="corner-line"></div>
                <div class="corner-line short"></div>
            </div>
            <div class="corner upper-right">
                <div class="corner-line"></div>
                <div class="corner-line short"></div>
            </div>
            <div class="year-mark">"2024"</div>
        </div>
    }
}

#[component]
fn IdentityPanel() -> impl IntoView {
    view! {
        <section class="identity">
            <div class="watermark">"ME"</div>
            <div class="identity-inner">
                <div class="status-line">
                    <div class="status-dot">
                        <div class="ping"></div>
                    </div>
                    <span>"Available for work"</span>
                </div>
                <h1 class="name">
                    <span>"YOUR"</span>
                    <br/>
                    <span class="name-accent">"NAME"</span>
                </h1>
                <p class="role">"Designer, developer, and creator of things that matter."</p>
                <div class="location">
                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"
                        />
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"
                        />
                    </svg>
                    <span>"San Francisco, CA"</span>
                </div>
            </div>
        </section>
    }
}

/// One outbound link. The reveal delay is wired inline since it depends on
/// the row's position; everything else lives in the stylesheet.
#[component]
fn LinkRow(index: usize, entry: &'static LinkEntry, state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <a
            href=entry.url
            class="row-reveal"
            style=format!("transition-delay: {}ms", row_reveal_delay_ms(index))
            on:mouseenter=move |_| state.update(|state| state.enter_row(index))
            on:mouseleave=move |_| state.update(|state| state.leave_row(index))
        >
            <div class=move || if state.with(|state| state.is_hovered(index)) { "row active" } else { "row" }>
                <div class="row-icon">{entry.icon}</div>
                <span class="row-name">{entry.name}</span>
                <svg class="row-arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M17 8l4 4m0 0l-4 4m4-4H3"
                    />
                </svg>
                <div class="row-edge"></div>
            </div>
        </a>
    }
}

#[component]
fn StatsRow() -> impl IntoView {
    view! {
        <div class="stats">
            {STATS
                .iter()
                .map(|stat| {
                    view! {
                        <div class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
