use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed region data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No servers available")]
    NoServers,
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Network(_) => {
                "Could not load the server list. Check your internet connection.".to_string()
            }
            AppError::Decode(_) => "The server list could not be read.".to_string(),
            AppError::Io(_) => "Could not write the configuration file.".to_string(),
            AppError::NoServers => "No servers are available right now.".to_string(),
        }
    }
}
