use crate::icons::{BookOpen, House, Moon, Shield, Sun};
use crate::state::ConnectionState;
use crate::Route;
use dioxus::prelude::*;

/// Fixed navigation rail for wide layouts.
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<ConnectionState>();
    let dark_mode = (state.dark_mode)();

    rsx! {
        aside { class: "fixed left-0 top-0 h-screen w-64 bg-card border-r border-border flex flex-col",
            Link {
                to: Route::Home {},
                class: "flex items-center gap-2 px-6 py-5 hover:opacity-80 transition-opacity",
                Shield { size: 24, class: Some("text-primary".to_string()) }
                span { class: "font-bold text-lg tracking-tight", "Akash VPN" }
            }

            nav { class: "flex-1 px-3 py-2 space-y-1",
                NavItem {
                    to: Route::Home {},
                    label: "Home",
                    icon: rsx! {
                        House { size: 18 }
                    },
                }
                NavItem {
                    to: Route::Docs {},
                    label: "Documentation",
                    icon: rsx! {
                        BookOpen { size: 18 }
                    },
                }
            }

            div { class: "px-3 py-4 border-t border-border",
                button {
                    class: "w-full flex items-center gap-3 px-3 py-2 rounded-xl text-sm font-medium text-muted-foreground hover:text-foreground hover:bg-accent/30 transition-colors",
                    onclick: move |_| {
                        let mut dark = state.dark_mode;
                        let current = *dark.peek();
                        dark.set(!current);
                    },
                    if dark_mode {
                        Sun { size: 18 }
                        "Light mode"
                    } else {
                        Moon { size: 18 }
                        "Dark mode"
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(to: Route, label: &'static str, icon: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "flex items-center gap-3 px-3 py-2 rounded-xl text-sm font-medium text-muted-foreground hover:text-primary transition-colors",
            active_class: "text-primary bg-primary/10",
            {icon}
            "{label}"
        }
    }
}
