use crate::components::{MobileNav, Sidebar};
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MainLayout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-background text-foreground",
            // Desktop sidebar
            div { class: "hidden lg:block", Sidebar {} }

            // Narrow-layout navigation
            div { class: "lg:hidden", MobileNav {} }

            main { class: "lg:ml-64 min-h-screen flex flex-col p-4 md:p-6 lg:p-8",
                Outlet::<Route> {}
            }
        }
    }
}
