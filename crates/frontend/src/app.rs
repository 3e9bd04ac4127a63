use crate::domain::a001_gestalt_analysis::ui::GestaltAnalyzerPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <GestaltAnalyzerPage />
        </ConfigProvider>
    }
}
