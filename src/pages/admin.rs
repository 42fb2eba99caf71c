use crate::auth::use_auth;
use crate::components::ui::{
    AlertDescription, AlertError, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardFooter, CardGrid, CardHeader, CardTitle, Separator, Spinner,
};
use crate::guard::{evaluate, GuardDecision};
use crate::models::ContactMessage;
use crate::state::AppContext;
use crate::util::format_created_date;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

/// Renders `children` only while an admin token is stored; otherwise
/// redirects to the login route.
#[component]
pub fn AdminGuard(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let store = app_state.0.store().clone();

    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    use_auth().map(move |auth| {
        move || {
            // Tracks the session so logout re-runs the guard; the decision
            // itself always reads the store.
            let _ = auth.is_authenticated();
            match evaluate(&*store) {
                GuardDecision::Pass => children.with_value(|c| c()).into_any(),
                GuardDecision::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
            }
        }
    })
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let manager = StoredValue::new(app_state.0.messages.clone());

    let messages: RwSignal<Vec<ContactMessage>> = RwSignal::new(vec![]);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let load = move || {
        let manager = manager.get_value();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match manager.list().await {
                Ok(list) => messages.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    let delete = move |id: i64| {
        let manager = manager.get_value();
        spawn_local(async move {
            match manager.delete(id).await {
                Ok(Ok(list)) => {
                    error.set(None);
                    messages.set(list);
                }
                Ok(Err(e)) => error.set(Some(e.to_string())),
                Err(e) => {
                    let _ = window().alert_with_message(&e.to_string());
                }
            }
        });
    };

    Effect::new(move |_| {
        load();
    });

    view! {
        <div class="mx-auto w-full max-w-6xl px-4 py-8">
            <div class="mb-6 flex items-center justify-between">
                <h1 class="text-3xl font-semibold">"Messages"</h1>
                <Button
                    variant=ButtonVariant::Outline
                    attr:disabled=move || loading.get()
                    on:click=move |_| load()
                >
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || loading.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        "Refresh"
                    </span>
                </Button>
            </div>

            <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                {move || {
                    error.get().map(|e| view! {
                        <AlertError class="mb-6" attr:role="alert">
                            <AlertDescription>{e}</AlertDescription>
                        </AlertError>
                    })
                }}
            </Show>

            <CardGrid>
                <For
                    each=move || messages.get()
                    key=|m| m.id
                    children=move |m| {
                        let id = m.id;
                        view! {
                            <Card>
                                <CardHeader>
                                    <div class="flex w-full flex-col gap-2 sm:flex-row sm:items-start sm:justify-between">
                                        <div class="min-w-0">
                                            <CardTitle>{m.name}</CardTitle>
                                            <CardDescription>{m.email}</CardDescription>
                                        </div>
                                        <span class="self-start rounded-full border border-[#8a8a8a] px-2 py-0.5 text-xs text-[#8a8a8a]">
                                            {format_created_date(&m.created_at)}
                                        </span>
                                    </div>
                                </CardHeader>
                                <CardContent>
                                    <Separator class="mb-3" />
                                    <p class="whitespace-pre-wrap text-sm leading-relaxed">{m.message}</p>
                                </CardContent>
                                <CardFooter>
                                    <Button
                                        variant=ButtonVariant::Destructive
                                        size=ButtonSize::Sm
                                        on:click=move |_| delete(id)
                                    >
                                        "Delete"
                                    </Button>
                                </CardFooter>
                            </Card>
                        }
                    }
                />
            </CardGrid>

            <Show
                when=move || messages.with(|m| m.is_empty()) && error.get().is_none() && !loading.get()
                fallback=|| ().into_view()
            >
                <div class="py-16 text-center">
                    <div class="mb-1 text-lg text-neutral-500">"No messages yet"</div>
                    <div class="text-sm text-neutral-500">
                        "Messages from the contact form will appear here"
                    </div>
                </div>
            </Show>
        </div>
    }
}
