use crate::auth::use_auth;
use crate::components::ui::{
    AlertDescription, AlertError, Button, Card, CardContent, CardHeader, CardTitle, Input, Label,
    Spinner,
};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());

    use_auth().map(move |auth| {
        let on_submit = move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if loading.get_untracked() {
                return;
            }

            let username_val = username.get_untracked();
            let password_val = password.get_untracked();
            let api_client = app_state.0.api_client.clone();
            let auth = auth.clone();

            loading.set(true);
            error.set(None);

            spawn_local(async move {
                match api_client.login(&username_val, &password_val).await {
                    Ok(token) => {
                        auth.login(&token);
                        navigate.with_value(|nav| nav("/admin", Default::default()));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        };

        view! {
            <div class="mx-auto flex w-full max-w-md flex-col px-4 py-16">
                <Card class="hover:shadow-sm">
                    <CardHeader>
                        <CardTitle class="text-center text-2xl">"Login"</CardTitle>
                    </CardHeader>

                    <CardContent>
                        <form class="flex flex-col gap-4" on:submit=on_submit>
                            <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                                {move || {
                                    error.get().map(|e| view! {
                                        <AlertError>
                                            <AlertDescription>{e}</AlertDescription>
                                        </AlertError>
                                    })
                                }}
                            </Show>

                            <div class="flex flex-col gap-2">
                                <Label html_for="username">"Username"</Label>
                                <Input
                                    id="username"
                                    bind_value=username
                                    disabled=loading
                                    required=true
                                    autofocus=true
                                />
                            </div>

                            <div class="flex flex-col gap-2">
                                <Label html_for="password">"Password"</Label>
                                <Input
                                    id="password"
                                    r#type="password"
                                    bind_value=password
                                    disabled=loading
                                    required=true
                                />
                            </div>

                            <Button class="mt-2 w-full" attr:disabled=move || loading.get()>
                                <span class="inline-flex items-center gap-2">
                                    <Show when=move || loading.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                                </span>
                            </Button>
                        </form>
                    </CardContent>
                </Card>
            </div>
        }
    })
}
