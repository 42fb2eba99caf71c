use leptos::prelude::*;
use leptos_ui::variants;

// Site accent is the neutral grey used by the navbar (#8a8a8a).
variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:shrink-0 outline-none focus-visible:ring-2 focus-visible:ring-[#8a8a8a]/50 hover:cursor-pointer",
        variants: {
            variant: {
                Default: "bg-[#8a8a8a] text-white shadow-xs hover:bg-[#757575]",
                Outline: "border border-[#8a8a8a] text-[#8a8a8a] hover:bg-[#8a8a8a]/5",
                Destructive: "border border-red-600 text-red-600 hover:bg-red-600/5",
                Ghost: "text-inherit hover:bg-white/10",
            },
            size: {
                Default: "h-9 px-4 py-2",
                Sm: "h-8 gap-1.5 px-3",
                Lg: "h-11 px-6 text-base",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}
