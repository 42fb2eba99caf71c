use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {AlertError, div, "relative w-full rounded-lg border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-800"}
    clx! {AlertSuccess, div, "relative w-full rounded-lg border border-green-300 bg-green-50 px-4 py-3 text-sm text-green-800"}
    clx! {AlertDescription, p, "text-sm leading-relaxed"}
}

pub use components::*;
