use crate::components::ConnectionControls;
use crate::icons::{Globe, ShieldCheck, Zap};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "flex-1 flex flex-col items-center justify-center gap-12 py-12",
            div { class: "max-w-2xl text-center",
                h1 { class: "text-4xl md:text-5xl font-bold mb-4 tracking-tight",
                    "Private browsing, powered by Akash"
                }
                p { class: "text-lg text-muted-foreground mb-8",
                    "Grab an OpenVPN config for our first available region and connect with any OpenVPN client. No account required."
                }
                ConnectionControls {}
            }

            div { class: "grid grid-cols-1 sm:grid-cols-3 gap-6 max-w-3xl w-full",
                FeatureCard {
                    title: "No accounts",
                    description: "Download a config and go. Nothing to sign up for, nothing to hand over.",
                    icon: rsx! {
                        ShieldCheck { size: 24 }
                    },
                }
                FeatureCard {
                    title: "Any OpenVPN client",
                    description: "The config works with the official clients on desktop and mobile.",
                    icon: rsx! {
                        Zap { size: 24 }
                    },
                }
                FeatureCard {
                    title: "Decentralized hosting",
                    description: "Servers run on decentralized cloud infrastructure across regions.",
                    icon: rsx! {
                        Globe { size: 24 }
                    },
                }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str, icon: Element) -> Element {
    rsx! {
        div { class: "bg-card rounded-2xl p-5 border border-border shadow-sm",
            div { class: "p-2 bg-primary/10 rounded-xl text-primary w-fit mb-3", {icon} }
            h3 { class: "font-bold mb-1", "{title}" }
            p { class: "text-sm text-muted-foreground", "{description}" }
        }
    }
}
