use crate::components::ui::{
    AlertDescription, AlertError, AlertSuccess, Button, ButtonSize, Input, Label, Spinner,
    Textarea,
};
use crate::contact::{ContactForm, Notice};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ContactPage() -> impl IntoView {
    let name: RwSignal<String> = RwSignal::new(String::new());
    let email: RwSignal<String> = RwSignal::new(String::new());
    let message: RwSignal<String> = RwSignal::new(String::new());
    let notice: RwSignal<Option<Notice>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let mut form = ContactForm::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        let api_client = app_state.0.api_client.clone();

        loading.set(true);
        notice.set(None);

        spawn_local(async move {
            let outcome = form.submit(&api_client).await;
            name.set(form.name);
            email.set(form.email);
            message.set(form.message);
            notice.set(Some(outcome));
            loading.set(false);
        });
    };

    view! {
        <div class="mx-auto w-full max-w-xl px-4 py-10">
            <h1 class="mb-2 text-center text-4xl font-semibold">"Contact"</h1>
            <p class="mb-8 text-center text-neutral-600">"Leave me a message!"</p>

            <form class="flex flex-col gap-5" on:submit=on_submit>
                <div class="flex flex-col gap-2">
                    <Label html_for="contact-name">"Name"</Label>
                    <Input id="contact-name" name="name" bind_value=name disabled=loading required=true />
                </div>

                <div class="flex flex-col gap-2">
                    <Label html_for="contact-email">"Email"</Label>
                    <Input
                        id="contact-email"
                        name="email"
                        r#type="email"
                        bind_value=email
                        disabled=loading
                        required=true
                    />
                </div>

                <div class="flex flex-col gap-2">
                    <Label html_for="contact-message">"Message"</Label>
                    <Textarea
                        id="contact-message"
                        name="message"
                        bind_value=message
                        disabled=loading
                        required=true
                    />
                </div>

                {move || {
                    notice.get().map(|n| {
                        if n.is_success() {
                            view! {
                                <AlertSuccess>
                                    <AlertDescription>{n.text().to_string()}</AlertDescription>
                                </AlertSuccess>
                            }
                            .into_any()
                        } else {
                            view! {
                                <AlertError>
                                    <AlertDescription>{n.text().to_string()}</AlertDescription>
                                </AlertError>
                            }
                            .into_any()
                        }
                    })
                }}

                <Button size=ButtonSize::Lg class="w-full" attr:disabled=move || loading.get()>
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || loading.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || if loading.get() { "Sending..." } else { "Send Message" }}
                    </span>
                </Button>
            </form>
        </div>
    }
}
