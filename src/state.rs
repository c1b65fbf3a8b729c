use crate::hooks::use_connection::use_connection;
use crate::hooks::use_regions::use_regions;
use crate::models::{ConnectionAction, ConnectionStatus, RegionsData};
use crate::storage::{load_config, save_config, AppConfig};
use dioxus::prelude::*;
use std::time::Duration;

/// App-wide context. All of it is transient except `dark_mode`, which is the
/// only persisted preference.
#[derive(Clone, Copy)]
pub struct ConnectionState {
    pub status: Signal<ConnectionStatus>,
    pub connected_since: Signal<Option<i64>>,
    pub regions: Signal<Option<RegionsData>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub dark_mode: Signal<bool>,
    pub action: Coroutine<ConnectionAction>,
}

#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let config = use_hook(load_config);
    let dark_mode = use_signal(|| config.dark_mode);

    let regions_state = use_regions();
    let connection = use_connection(regions_state.regions);

    // Debounced preference save, off the UI thread.
    use_future(move || {
        let cfg = AppConfig {
            dark_mode: dark_mode(),
        };
        async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = tokio::task::spawn_blocking(move || save_config(&cfg)).await;
        }
    });

    use_context_provider(|| ConnectionState {
        status: connection.status,
        connected_since: connection.connected_since,
        regions: regions_state.regions,
        loading: regions_state.loading,
        error: regions_state.error,
        dark_mode,
        action: connection.action,
    });

    rsx! {
        {children}
    }
}
