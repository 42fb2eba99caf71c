use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Separator(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!("my-2 h-px w-full shrink-0 bg-[#8a8a8a]", class);

    view! { <div class=merged_class role="separator" /> }
}
