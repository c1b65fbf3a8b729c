use crate::icons::{BookOpen, House, Menu, Shield, X};
use crate::Route;
use dioxus::prelude::*;

/// Collapsible top bar for narrow layouts.
#[component]
pub fn MobileNav() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "sticky top-0 z-50 bg-background/95 backdrop-blur-md border-b border-border",
            div { class: "flex items-center justify-between px-4 py-3",
                Link {
                    to: Route::Home {},
                    class: "flex items-center gap-2",
                    onclick: move |_| open.set(false),
                    Shield { size: 22, class: Some("text-primary".to_string()) }
                    span { class: "font-bold tracking-tight", "Akash VPN" }
                }
                button {
                    class: "p-2 rounded-lg text-muted-foreground hover:text-foreground hover:bg-accent/30 transition-colors",
                    onclick: move |_| {
                        let current = *open.peek();
                        open.set(!current);
                    },
                    if open() {
                        X { size: 22 }
                    } else {
                        Menu { size: 22 }
                    }
                }
            }

            if open() {
                nav { class: "px-4 pb-3 space-y-1 border-t border-border/50 pt-2",
                    MobileNavItem {
                        to: Route::Home {},
                        label: "Home",
                        icon: rsx! {
                            House { size: 18 }
                        },
                        open,
                    }
                    MobileNavItem {
                        to: Route::Docs {},
                        label: "Documentation",
                        icon: rsx! {
                            BookOpen { size: 18 }
                        },
                        open,
                    }
                }
            }
        }
    }
}

#[component]
fn MobileNavItem(to: Route, label: &'static str, icon: Element, open: Signal<bool>) -> Element {
    let mut open = open;
    rsx! {
        Link {
            to,
            class: "flex items-center gap-3 px-3 py-2 rounded-xl text-sm font-medium text-muted-foreground hover:text-primary transition-colors",
            active_class: "text-primary bg-primary/10",
            onclick: move |_| open.set(false),
            {icon}
            "{label}"
        }
    }
}
