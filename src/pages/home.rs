use crate::components::navbar::SITE_TITLE;
use leptos::prelude::*;

const WELCOME_IMAGE: &str = "/assets/welcome.png";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-3xl px-4 py-10 text-center">
            <h1 class="mb-4 text-4xl font-semibold">{format!("Welcome to {SITE_TITLE}'s Website")}</h1>
            <p class="mb-8 text-neutral-600">
                {format!("This is the home page of {SITE_TITLE}'s personal website. ")}
                "Explore the gallery and contact sections to learn more."
            </p>
            <div class="mb-8 flex justify-center">
                <img
                    class="h-auto w-full max-w-[400px] rounded-lg shadow-[0_4px_8px_rgba(0,0,0,0.1)]"
                    src=WELCOME_IMAGE
                    alt="Welcome"
                />
            </div>
        </div>
    }
}
