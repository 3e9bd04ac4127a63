//! Main page component of the analyzer
//!
//! Thin wrapper that:
//! - Creates ViewModel
//! - Renders the header card
//! - Renders tab bar
//! - Renders the panel of the active tab

use super::section_panel::SectionPanel;
use super::view_model::GestaltAnalyzerVm;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_gestalt_analysis::{ANALYZER_INTRO, ANALYZER_TAGLINE, ANALYZER_TITLE};
use contracts::enums::GestaltTab;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn GestaltAnalyzerPage() -> impl IntoView {
    let vm = GestaltAnalyzerVm::new();

    // TabList only writes the string value; route it through the selector
    Effect::new(move || {
        let value = vm.selected_tab_value.get();
        let _ = vm.select_code(&value);
    });

    view! {
        <div class="gestalt-analyzer">
            <div class="gestalt-analyzer__intro">
                <Card>
                    <PageHeader title=ANALYZER_TITLE subtitle=ANALYZER_TAGLINE.to_string() />
                    <p class="gestalt-analyzer__intro-text">{ANALYZER_INTRO}</p>
                </Card>
            </div>

            <TabBar vm=vm />

            <div class="gestalt-analyzer__content">
                {move || view! { <SectionPanel section=vm.section() /> }}
            </div>
        </div>
    }
}

/// Tab bar component
#[component]
fn TabBar(vm: GestaltAnalyzerVm) -> impl IntoView {
    view! {
        <div class="gestalt-analyzer__tabs">
            <TabList selected_value=vm.selected_tab_value>
                {GestaltTab::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <Tab value=tab.code()>
                                <span class="gestalt-analyzer__tab-label">
                                    {icon(tab.icon_name())}
                                    {tab.display_name()}
                                </span>
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>
        </div>
    }
}
