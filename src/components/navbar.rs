use crate::auth::use_auth;
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::util::is_active_path;
use icons::{House, Images, Mail};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

pub const SITE_TITLE: &str = "Gordon Lu";
const AVATAR_IMAGE: &str = "/assets/icon.png";

const NAV_ITEMS: [(&str, &str); 3] = [("Home", "/"), ("Gallery", "/gallery"), ("Contact", "/contact")];

const LINK_CLASS: &str = "inline-flex items-center gap-1.5 rounded-md px-3 py-1.5 text-sm font-medium hover:bg-white/10";
const ACTIVE_LINK_CLASS: &str = "inline-flex items-center gap-1.5 rounded-md px-3 py-1.5 text-sm font-medium bg-white/10";

fn nav_icon(path: &str) -> AnyView {
    match path {
        "/" => view! { <House class="size-4" /> }.into_any(),
        "/gallery" => view! { <Images class="size-4" /> }.into_any(),
        _ => view! { <Mail class="size-4" /> }.into_any(),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = StoredValue::new(use_navigate());

    use_auth().map(move |auth| {
        let signed_in = {
            let auth = auth.clone();
            move || auth.is_authenticated()
        };

        let on_sign_out = move |_| {
            auth.logout();
            navigate.with_value(|nav| nav("/", Default::default()));
        };

        view! {
            <header class="bg-[#8a8a8a] text-white">
                <nav class="mx-auto flex w-full max-w-6xl items-center justify-between px-4 py-3">
                    <a href="/" class="flex items-center gap-3 text-lg font-medium">
                        <img class="size-8 rounded-full object-cover" src=AVATAR_IMAGE alt=SITE_TITLE />
                        {SITE_TITLE}
                    </a>

                    <div class="flex items-center gap-2">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(label, path)| {
                                let class = move || {
                                    if is_active_path(&pathname.get(), path) {
                                        ACTIVE_LINK_CLASS
                                    } else {
                                        LINK_CLASS
                                    }
                                };
                                view! {
                                    <a href=path class=class>
                                        {nav_icon(path)}
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}

                        <Show when=signed_in.clone() fallback=|| ().into_view()>
                            <a
                                href="/admin"
                                class=move || {
                                    if is_active_path(&pathname.get(), "/admin") {
                                        ACTIVE_LINK_CLASS
                                    } else {
                                        LINK_CLASS
                                    }
                                }
                            >
                                "Admin"
                            </a>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Sm
                                on:click=on_sign_out.clone()
                            >
                                "Sign out"
                            </Button>
                        </Show>
                    </div>
                </nav>
            </header>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_avatar_is_shipped_in_public() {
        let asset = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(AVATAR_IMAGE.trim_start_matches('/'));
        assert!(asset.is_file(), "missing {}", asset.display());
    }

    #[test]
    fn test_each_nav_item_is_active_only_on_its_own_path() {
        for (_, path) in NAV_ITEMS {
            for (_, other) in NAV_ITEMS {
                assert_eq!(is_active_path(path, other), path == other, "{path} vs {other}");
            }
        }
    }
}
