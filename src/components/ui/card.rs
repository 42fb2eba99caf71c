use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "flex flex-col gap-3 rounded-lg border border-[#8a8a8a] bg-white py-4 transition-shadow hover:shadow-md"}
    clx! {CardHeader, div, "flex flex-col gap-1 px-4"}
    clx! {CardTitle, h3, "text-lg font-semibold leading-tight"}
    clx! {CardDescription, p, "text-sm text-neutral-500 break-words"}
    clx! {CardContent, div, "flex-1 px-4"}
    clx! {CardFooter, div, "flex items-center justify-end gap-2 px-4"}
    clx! {CardGrid, div, "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4"}
}

pub use components::*;
