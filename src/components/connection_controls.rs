use crate::hooks::use_connection_handle;
use crate::icons::{CircleAlert, Download, Globe, Loader};
use crate::models::ConnectionStatus;
use crate::state::ConnectionState;
use chrono::DateTime;
use dioxus::prelude::*;

/// The one interactive widget of the site: fetch state comes from context,
/// the connect action writes an OpenVPN profile for the first listed server
/// and flips the cosmetic connected flag.
#[component]
pub fn ConnectionControls() -> Element {
    let state = use_context::<ConnectionState>();
    let handle = use_connection_handle();

    let status = (state.status)();
    let loading = (state.loading)();
    let error = (state.error)();
    let connected_since = (state.connected_since)();

    if loading {
        return rsx! {
            div { class: "flex flex-col sm:flex-row gap-4 items-center justify-center",
                div { class: "text-center text-muted-foreground", "Loading VPN configuration..." }
            }
        };
    }

    if let Some(message) = error {
        return rsx! {
            div { class: "flex flex-col sm:flex-row gap-4 items-center justify-center",
                div { class: "flex items-center gap-2 text-status-error text-sm font-medium",
                    CircleAlert { size: 18 }
                    "{message}"
                }
            }
        };
    }

    let regions = state.regions.read();
    let server = regions.as_ref().and_then(|data| data.first_server());

    rsx! {
        div { class: "flex flex-col gap-4 items-center justify-center",
            if status == ConnectionStatus::Connected {
                div { class: "flex flex-col items-center gap-3",
                    div { class: "flex items-center gap-2 text-status-success text-sm font-bold uppercase tracking-wider",
                        div { class: "w-2 h-2 rounded-full bg-status-success animate-pulse" }
                        "Connected"
                    }
                    if let Some(server) = server {
                        div { class: "flex items-center gap-2 text-sm text-muted-foreground",
                            Globe { size: 16 }
                            span { class: "font-mono", "{server.hostname}:{server.external_port}" }
                        }
                    }
                    if let Some(since) = connected_since.and_then(|ts| DateTime::from_timestamp(ts, 0)) {
                        div { class: "text-[11px] text-muted-foreground uppercase tracking-widest",
                            {format!("since {} UTC", since.format("%H:%M"))}
                        }
                    }
                    button {
                        class: "px-8 py-3 text-lg font-semibold rounded-xl bg-status-error text-white hover:brightness-110 transition-all active:scale-95 shadow-lg",
                        onclick: move |_| handle.disconnect(),
                        "Disconnect"
                    }
                }
            } else {
                button {
                    class: "px-8 py-3 text-lg font-semibold rounded-xl bg-primary text-primary-foreground hover:brightness-110 transition-all active:scale-95 shadow-lg shadow-primary/20 flex items-center gap-2 disabled:opacity-60 disabled:cursor-not-allowed",
                    disabled: status == ConnectionStatus::Connecting,
                    onclick: move |_| handle.connect(),
                    if status == ConnectionStatus::Connecting {
                        Loader { size: 20, class: Some("animate-spin".to_string()) }
                        "Preparing config..."
                    } else {
                        Download { size: 20 }
                        "Download Region 1 Config"
                    }
                }
            }
        }
    }
}
