use crate::components::toast::{ToastManager, ToastType};
use crate::models::{ConnectionAction, ConnectionStatus, RegionsData};
use crate::services::{AppService, ProductionAppService};
use chrono::Utc;
use dioxus::prelude::*;
use futures_util::StreamExt;

#[derive(Clone, Copy)]
pub struct ConnectionHandleState {
    pub status: Signal<ConnectionStatus>,
    pub connected_since: Signal<Option<i64>>,
    pub action: Coroutine<ConnectionAction>,
}

pub fn use_connection(regions: Signal<Option<RegionsData>>) -> ConnectionHandleState {
    let app_service = use_hook(|| ProductionAppService);
    use_connection_with_service(regions, app_service)
}

pub fn use_connection_with_service<S: AppService>(
    regions: Signal<Option<RegionsData>>,
    app_service: S,
) -> ConnectionHandleState {
    let mut status = use_signal(|| ConnectionStatus::Disconnected);
    let mut connected_since = use_signal(|| None);

    let toast_manager = use_context::<ToastManager>();

    let service_action = app_service.clone();
    let action = use_coroutine(move |mut rx: UnboundedReceiver<ConnectionAction>| {
        let service = service_action.clone();
        let mut toasts = toast_manager;
        async move {
            while let Some(msg) = rx.next().await {
                match msg {
                    ConnectionAction::Connect => {
                        // First server of the first country of the first
                        // continent, or a silent no-op.
                        let server = regions
                            .peek()
                            .as_ref()
                            .and_then(|data| data.first_server().cloned());
                        let Some(server) = server else {
                            tracing::warn!("Connect requested with no servers available");
                            continue;
                        };

                        status.set(ConnectionStatus::Connecting);
                        match service.save_profile(&server).await {
                            Ok(path) => {
                                tracing::info!("Wrote OpenVPN profile to {:?}", path);
                                status.set(ConnectionStatus::Connected);
                                connected_since.set(Some(Utc::now().timestamp()));
                                toasts.show(
                                    &format!("Saved {}", path.display()),
                                    ToastType::Success,
                                );
                            }
                            Err(e) => {
                                tracing::error!("Failed to write OpenVPN profile: {}", e);
                                status.set(ConnectionStatus::Disconnected);
                                toasts.show(&e.user_friendly_message(), ToastType::Error);
                            }
                        }
                    }
                    ConnectionAction::Disconnect => {
                        status.set(ConnectionStatus::Disconnected);
                        connected_since.set(None);
                    }
                }
            }
        }
    });

    ConnectionHandleState {
        status,
        connected_since,
        action,
    }
}
