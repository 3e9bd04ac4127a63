//! CardAnimated - thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in `styles.css`. Pass increasing
//! `delay_ms` values to cascade several cards.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            {children()}
        </Card>
    }
}
