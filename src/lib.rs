#![allow(non_snake_case)]

pub mod components;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod layouts;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use components::toast::ToastProvider;
use layouts::MainLayout;
use state::{AppStateProvider, ConnectionState};
use views::{docs::Docs, home::Home};

pub const WINDOW_WIDTH: f64 = 1100.0;
pub const WINDOW_HEIGHT: f64 = 720.0;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Home {},
        #[route("/docs")]
        Docs {},
}

pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        ToastProvider {
            AppStateProvider { AppContent {} }
        }
    }
}

fn AppContent() -> Element {
    let state = use_context::<ConnectionState>();
    let dark_mode = (state.dark_mode)();

    rsx! {
        div { class: if dark_mode { "dark" },
            div { class: "bg-background text-foreground min-h-screen transition-colors duration-300",
                Router::<Route> {}
            }
        }
    }
}

pub fn run_app() {
    tracing_subscriber::fmt::init();

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Akash VPN")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(true),
    );

    LaunchBuilder::new().with_cfg(config).launch(App);
}
