//! Panel of a single tab: section header plus one block per record

use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::domain::a001_gestalt_analysis::{Accent, SectionItem, SectionView};
use leptos::prelude::*;

/// Delay between neighbouring items of the appear animation
const STAGGER_MS: u32 = 40;

fn item_class(item: &SectionItem, stepped: bool) -> String {
    let mut class = String::from("gestalt-section__item");
    if stepped {
        class.push_str(" gestalt-section__item--stepped");
    }
    if item.is_last {
        class.push_str(" gestalt-section__item--last");
    }
    class
}

fn section_class(accent: Accent) -> String {
    format!("gestalt-section gestalt-section--{}", accent.css_modifier())
}

#[component]
pub fn SectionPanel(section: SectionView) -> impl IntoView {
    let stepped = section.is_stepped();
    let SectionView {
        heading,
        description,
        accent,
        icon_name,
        items,
        ..
    } = section;

    view! {
        <CardAnimated delay_ms=0>
            <div class=section_class(accent)>
                <div class="gestalt-section__header">
                    <h2 class="gestalt-section__title">
                        <span class="gestalt-section__icon">{icon(&icon_name)}</span>
                        {heading}
                    </h2>
                    <div class="gestalt-section__description">{description}</div>
                </div>
                <div class="gestalt-section__items">
                    {items
                        .into_iter()
                        .map(|item| view! { <SectionEntry item=item stepped=stepped /> })
                        .collect_view()}
                </div>
            </div>
        </CardAnimated>
    }
}

#[component]
fn SectionEntry(item: SectionItem, stepped: bool) -> impl IntoView {
    let class = item_class(&item, stepped);
    let delay = STAGGER_MS * item.position as u32;
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay);

    view! {
        <div class=class style=style>
            {item.step.map(|step| view! { <div class="gestalt-section__step">{step}</div> })}
            <div class="gestalt-section__text">
                <h3 class="gestalt-section__item-title">{item.title}</h3>
                <p class="gestalt-section__item-description">{item.description}</p>
            </div>
        </div>
    }
}
