use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <div class="mx-auto w-full max-w-2xl px-4 py-16">
            <div class="rounded-xl border-2 border-[#8a8a8a] bg-gradient-to-br from-neutral-100 to-white p-10 text-center">
                <div class="mb-2 text-7xl font-bold text-[#8a8a8a] md:text-8xl">"404"</div>
                <h1 class="mb-4 text-2xl font-medium text-neutral-600">"Page Not Found"</h1>
                <p class="mx-auto mb-8 max-w-md text-neutral-500">
                    "Oops! The page you're looking for doesn't exist. It might have been moved, "
                    "deleted, or you entered the wrong URL."
                </p>

                <div class="flex flex-wrap justify-center gap-3">
                    <a
                        class="inline-flex h-11 items-center rounded-md bg-[#8a8a8a] px-6 text-base font-medium text-white hover:bg-[#757575]"
                        href="/"
                    >
                        "Go Home"
                    </a>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Lg on:click=go_back>
                        "Go Back"
                    </Button>
                </div>

                <p class="mt-8 border-t border-neutral-200 pt-6 text-sm italic text-neutral-400">
                    "Need help? Check out the "
                    <a class="font-medium not-italic text-[#8a8a8a]" href="/contact">"Contact page"</a>
                    " or the "
                    <a class="font-medium not-italic text-[#8a8a8a]" href="/gallery">"Gallery"</a>
                    "."
                </p>
            </div>
        </div>
    }
}
