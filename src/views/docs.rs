use crate::icons::ExternalLink;
use dioxus::prelude::*;

#[component]
pub fn Docs() -> Element {
    rsx! {
        div { class: "max-w-3xl",
            h1 { class: "text-3xl font-bold mb-4", "Akash VPN Documentation" }

            h2 { class: "text-2xl font-bold mb-2", "Getting Started" }
            p { class: "text-muted-foreground mb-4",
                "To get started with Akash VPN, follow these steps:"
            }
            ol { class: "list-decimal list-inside mb-4 space-y-1",
                li {
                    "Download the OpenVPN configuration file by clicking the \"Download Region 1 Config\" button on our homepage."
                }
                li { "Import the configuration file into your OpenVPN client." }
                li { "Connect to the VPN using your OpenVPN client." }
            }

            h2 { class: "text-2xl font-bold mb-2", "OpenVPN Clients" }
            p { class: "text-muted-foreground mb-4",
                "You can use any OpenVPN client to connect to Akash VPN. Here are some popular options:"
            }
            ul { class: "list-disc list-inside mb-4 space-y-1",
                li {
                    ClientLink {
                        href: "https://openvpn.net/community-downloads/",
                        label: "OpenVPN Connect (Official)",
                    }
                }
                li {
                    ClientLink {
                        href: "https://tunnelblick.net/",
                        label: "Tunnelblick (for macOS)",
                    }
                }
                li {
                    ClientLink {
                        href: "https://openvpn.net/connect-docs/android-installation-guide.html",
                        label: "OpenVPN Connect (for Android)",
                    }
                }
                li {
                    ClientLink {
                        href: "https://openvpn.net/connect-docs/ios-installation-guide.html",
                        label: "OpenVPN Connect (for iOS)",
                    }
                }
            }
        }
    }
}

#[component]
fn ClientLink(href: &'static str, label: &'static str) -> Element {
    rsx! {
        a {
            href,
            target: "_blank",
            class: "underline hover:text-primary inline-flex items-center gap-1",
            "{label}"
            ExternalLink { size: 14 }
        }
    }
}
