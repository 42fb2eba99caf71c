use crate::auth::{provide_auth, AuthSession};
use crate::components::Navbar;
use crate::pages::{
    AdminGuard, AdminPage, ContactPage, GalleryPage, HomePage, LoginPage, NotFoundPage,
};
use crate::state::{AppContext, AppState};
use crate::storage::LocalStore;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let store = LocalStore::shared();
    provide_context(AppContext(AppState::from_env(store.clone())));
    provide_auth(AuthSession::new(store));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks (used by the navbar) require a <Router> context.
    view! {
        <Router>
            <div class="min-h-screen w-full bg-neutral-50 text-neutral-900">
                <ErrorBoundary fallback=|errors| {
                    for (_, e) in errors.get_untracked().iter() {
                        log::error!("render failed: {e}");
                    }
                    view! { <FailureNotice /> }
                }>
                    <Navbar />
                    <main>
                        <Routes fallback=|| view! { <NotFoundPage /> }>
                            <Route path=path!("") view=HomePage />
                            <Route path=path!("gallery") view=GalleryPage />
                            <Route path=path!("contact") view=ContactPage />
                            <Route path=path!("login") view=LoginPage />
                            <Route path=path!("admin") view=move || view! {
                                <AdminGuard>
                                    <AdminPage />
                                </AdminGuard>
                            } />
                        </Routes>
                    </main>
                </ErrorBoundary>
            </div>
        </Router>
    }
}

#[component]
fn FailureNotice() -> impl IntoView {
    view! {
        <div class="mx-auto w-full max-w-md px-4 py-16 text-center">
            <h1 class="mb-2 text-xl font-semibold">"Something went wrong"</h1>
            <p class="text-sm text-neutral-500">"This part of the page failed to load. Try reloading."</p>
        </div>
    }
}
