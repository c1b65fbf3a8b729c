use crate::models::RegionsData;
use crate::services::{AppService, ProductionAppService};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct RegionsState {
    pub regions: Signal<Option<RegionsData>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

pub fn use_regions() -> RegionsState {
    let app_service = use_hook(|| ProductionAppService);
    use_regions_with_service(app_service)
}

pub fn use_regions_with_service<S: AppService>(app_service: S) -> RegionsState {
    let mut regions = use_signal(|| None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None);

    // One request per launch. A failure is terminal for the session; the
    // widget renders the message instead of the download control.
    let service = app_service.clone();
    use_future(move || {
        let service = service.clone();
        async move {
            match service.get_regions().await {
                Ok(data) => regions.set(Some(data)),
                Err(e) => {
                    tracing::error!("Failed to fetch region list: {}", e);
                    error.set(Some(e.user_friendly_message()));
                }
            }
            loading.set(false);
        }
    });

    RegionsState {
        regions,
        loading,
        error,
    }
}
