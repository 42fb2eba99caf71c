use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

const FIELD_CLASS: &str = "flex w-full min-w-0 rounded-md border border-neutral-300 bg-transparent px-3 py-2 text-base outline-none transition-[color,box-shadow] placeholder:text-neutral-400 focus-visible:border-[#8a8a8a] focus-visible:ring-2 focus-visible:ring-[#8a8a8a]/40 disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] autofocus: bool,

    // Wired by hand (`prop:value` + `on:input`) rather than `bind:value`,
    // which has shifted between Leptos releases.
    #[prop(into)] bind_value: RwSignal<String>,

    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let merged_class = tw_merge!("h-10", FIELD_CLASS, class);

    let on_input = move |ev: web_sys::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            bind_value.set(input.value());
        }
    };

    view! {
        <input
            type=r#type
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            disabled=move || disabled.get()
            required=required
            autofocus=autofocus
            prop:value=move || bind_value.get()
            on:input=on_input
            node_ref=node_ref
        />
    }
}

#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(default = 6)] rows: u32,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional)] required: bool,
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let merged_class = tw_merge!("min-h-24 resize-y", FIELD_CLASS, class);

    let on_input = move |ev: web_sys::Event| {
        if let Some(area) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
        {
            bind_value.set(area.value());
        }
    };

    view! {
        <textarea
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            rows=rows.to_string()
            disabled=move || disabled.get()
            required=required
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}
