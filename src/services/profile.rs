use crate::models::Server;
use directories::UserDirs;
use std::path::{Path, PathBuf};

/// Renders OpenVPN client profiles and writes them where a browser download
/// would land.
pub struct ProfileService;

impl ProfileService {
    /// Plaintext OpenVPN client profile for one server. The directives other
    /// than `remote` are fixed; clients import this file as-is.
    pub fn render(server: &Server) -> String {
        format!(
            "client\n\
             dev tun\n\
             proto udp\n\
             remote {} {}\n\
             resolv-retry infinite\n\
             nobind\n\
             persist-key\n\
             persist-tun\n\
             remote-cert-tls server\n\
             cipher AES-256-CBC\n\
             verb 3\n",
            server.hostname, server.external_port
        )
    }

    pub fn file_name(server: &Server) -> String {
        format!("akash-vpn-{}.ovpn", server.region)
    }

    /// The user's download directory, or the working directory when the
    /// platform reports none.
    pub fn download_dir() -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
    }

    pub fn save(server: &Server, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(Self::file_name(server));
        std::fs::write(&path, Self::render(server))?;
        Ok(path)
    }

    /// Write the profile into the download directory without blocking the UI
    /// event loop.
    pub async fn save_to_downloads(server: &Server) -> std::io::Result<PathBuf> {
        let server = server.clone();
        tokio::task::spawn_blocking(move || Self::save(&server, &Self::download_dir()))
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_server() -> Server {
        Server {
            region: "eu-sweden-1".to_string(),
            hostname: "se1.akashvpn.com".to_string(),
            external_port: 1194,
            hub_name: "VPN".to_string(),
        }
    }

    #[test]
    fn profile_carries_the_server_endpoint() {
        let text = ProfileService::render(&sample_server());

        assert!(text.starts_with("client\n"));
        assert!(text.contains("remote se1.akashvpn.com 1194\n"));
        assert!(text.contains("cipher AES-256-CBC\n"));
        assert!(text.ends_with("verb 3\n"));
    }

    #[test]
    fn file_name_is_derived_from_the_region() {
        assert_eq!(
            ProfileService::file_name(&sample_server()),
            "akash-vpn-eu-sweden-1.ovpn"
        );
    }

    #[test]
    fn save_writes_the_rendered_profile() {
        let dir = std::env::temp_dir().join("akash-vpn-profile-test");
        fs::create_dir_all(&dir).expect("temp dir");

        let server = sample_server();
        let path = ProfileService::save(&server, &dir).expect("profile written");

        assert_eq!(path, dir.join("akash-vpn-eu-sweden-1.ovpn"));
        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, ProfileService::render(&server));

        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir(&dir);
    }
}
