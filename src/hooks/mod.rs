pub mod use_connection;
pub mod use_regions;

use crate::models::ConnectionAction;
use crate::state::ConnectionState;
use dioxus::prelude::*;

/// View-facing handle over the connection coroutine. The "connection" is
/// display state only; connect writes a profile file and flips the flag.
#[derive(Clone, Copy)]
pub struct ConnectionHandle {
    state: ConnectionState,
}

impl ConnectionHandle {
    pub fn connect(&self) {
        self.state.action.send(ConnectionAction::Connect);
    }

    pub fn disconnect(&self) {
        self.state.action.send(ConnectionAction::Disconnect);
    }
}

pub fn use_connection_handle() -> ConnectionHandle {
    let state = use_context::<ConnectionState>();
    ConnectionHandle { state }
}
