use crate::components::ui::{
    AlertDescription, AlertError, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardFooter, CardGrid, CardHeader, CardTitle, Input, Spinner,
};
use crate::gallery::{CardState, GalleryState, GalleryUnlock};
use crate::models::{ContentItem, GalleryCard};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let flow = StoredValue::new(app_state.0.gallery.clone());

    let cards: RwSignal<Vec<GalleryCard>> = RwSignal::new(vec![]);
    let states: RwSignal<GalleryState> = RwSignal::new(GalleryState::default());
    let loading: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    // Load the card list once, then silently restore cards that already hold a token.
    Effect::new(move |_| {
        let flow = flow.get_value();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match flow.cards().await {
                Ok(list) => {
                    cards.set(list.clone());
                    loading.set(false);
                    flow.restore_all(&list, |card_id, items| {
                        states.update(|s| s.restore(card_id, items));
                    })
                    .await;
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    });

    view! {
        <div class="mx-auto w-full max-w-6xl px-4 py-10">
            <h1 class="mb-2 text-center text-4xl font-semibold">"Gallery"</h1>
            <p class="mb-8 text-center text-neutral-600">"Explore my galleries!"</p>

            <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                {move || {
                    error.get().map(|e| view! {
                        <AlertError class="mb-6">
                            <AlertDescription>{e}</AlertDescription>
                        </AlertError>
                    })
                }}
            </Show>

            <Show
                when=move || !cards.get().is_empty()
                fallback=move || view! {
                    <div class="flex justify-center text-sm text-neutral-500">
                        {move || if loading.get() {
                            view! { <Spinner class="size-6" /> }.into_any()
                        } else {
                            "No galleries yet.".into_any()
                        }}
                    </div>
                }
            >
                <CardGrid>
                    <For
                        each=move || cards.get()
                        key=|card| card.id.clone()
                        children=move |card| view! { <GalleryCardView card=card states=states flow=flow /> }
                    />
                </CardGrid>
            </Show>
        </div>
    }
}

#[component]
fn GalleryCardView(
    card: GalleryCard,
    states: RwSignal<GalleryState>,
    flow: StoredValue<GalleryUnlock>,
) -> impl IntoView {
    let password: RwSignal<String> = RwSignal::new(String::new());
    let card_id = StoredValue::new(card.id.clone());
    let state = Memo::new(move |_| card_id.with_value(|id| states.with(|s| s.state(id))));

    let on_unlock = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = card_id.get_value();
        let pw = password.get_untracked();

        if pw.is_empty() {
            states.update(|s| s.reject(&id, "Enter the password for this gallery."));
            return;
        }
        if !states.try_update(|s| s.begin_unlock(&id)).unwrap_or(false) {
            return;
        }

        let flow = flow.get_value();
        spawn_local(async move {
            let result = flow.unlock(&id, &pw).await;
            if result.is_ok() {
                password.set(String::new());
            }
            states.update(|s| s.finish_unlock(&id, result));
        });
    };

    let on_relock = move |_| {
        let id = card_id.get_value();
        flow.with_value(|f| f.relock(&id));
        states.update(|s| s.relock(&id));
    };

    let cover = card.cover.clone().map(|src| {
        view! { <img class="h-40 w-full object-cover" src=src alt=card.title.clone() /> }
    });

    view! {
        <Card class="overflow-hidden pt-0">
            {cover}
            <CardHeader class="pt-4">
                <CardTitle>{card.title.clone()}</CardTitle>
                <CardDescription>{card.summary.clone()}</CardDescription>
            </CardHeader>

            <CardContent>
                {move || match state.get() {
                    CardState::Locked { error } => view! {
                        <form class="flex flex-col gap-2" on:submit=on_unlock>
                            <Input
                                r#type="password"
                                placeholder="Password"
                                bind_value=password
                            />
                            {error.map(|e| view! {
                                <p class="text-xs text-red-700">{e}</p>
                            })}
                            <Button size=ButtonSize::Sm class="w-full">"Unlock"</Button>
                        </form>
                    }
                    .into_any(),
                    CardState::Unlocking => view! {
                        <div class="flex items-center gap-2 text-sm text-neutral-500">
                            <Spinner />
                            "Unlocking..."
                        </div>
                    }
                    .into_any(),
                    CardState::Unlocked { items } => view! {
                        <div class="grid grid-cols-1 gap-2">
                            {items.into_iter().map(content_view).collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </CardContent>

            <Show when=move || state.with(|s| s.is_unlocked()) fallback=|| ().into_view()>
                <CardFooter>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=on_relock>
                        "Lock"
                    </Button>
                </CardFooter>
            </Show>
        </Card>
    }
}

fn content_view(item: ContentItem) -> AnyView {
    let label = item.to_string();
    match item {
        ContentItem::Image { url } => view! {
            <img class="w-full rounded-md" src=url alt=label loading="lazy" />
        }
        .into_any(),
        ContentItem::Video { url } => view! {
            <video class="w-full rounded-md" src=url controls=true preload="metadata" aria-label=label />
        }
        .into_any(),
    }
}
