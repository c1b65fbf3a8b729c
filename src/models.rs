use serde::{Deserialize, Serialize};

/// Shape of the static region document served next to the marketing site.
/// The document is trusted as-is; the only guard anywhere is the `Option`
/// returned by [`RegionsData::first_server`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct RegionsData {
    pub regions: Vec<Continent>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Continent {
    pub continent: String,
    pub continent_code: String,
    pub countries: Vec<Country>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Country {
    pub country: String,
    pub country_code: String,
    pub flag: String,
    pub servers: Vec<Server>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Server {
    pub region: String,
    pub hostname: String,
    pub external_port: u16,
    pub hub_name: String,
}

impl RegionsData {
    /// The first server of the first country of the first continent. No
    /// ranking, no latency probing, no user choice of region.
    pub fn first_server(&self) -> Option<&Server> {
        self.regions.first()?.countries.first()?.servers.first()
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

pub enum ConnectionAction {
    Connect,
    Disconnect,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(region: &str) -> Server {
        Server {
            region: region.to_string(),
            hostname: format!("{region}.akashvpn.com"),
            external_port: 1194,
            hub_name: "VPN".to_string(),
        }
    }

    #[test]
    fn first_server_picks_head_of_every_level() {
        let data = RegionsData {
            regions: vec![
                Continent {
                    continent: "Europe".to_string(),
                    continent_code: "EU".to_string(),
                    countries: vec![
                        Country {
                            country: "Sweden".to_string(),
                            country_code: "SE".to_string(),
                            flag: "🇸🇪".to_string(),
                            servers: vec![server("se-1"), server("se-2")],
                        },
                        Country {
                            country: "Germany".to_string(),
                            country_code: "DE".to_string(),
                            flag: "🇩🇪".to_string(),
                            servers: vec![server("de-1")],
                        },
                    ],
                },
                Continent {
                    continent: "North America".to_string(),
                    continent_code: "NA".to_string(),
                    countries: vec![],
                },
            ],
        };

        assert_eq!(data.first_server().map(|s| s.region.as_str()), Some("se-1"));
    }

    #[test]
    fn first_server_is_none_when_any_level_is_empty() {
        assert!(RegionsData::default().first_server().is_none());

        let no_countries = RegionsData {
            regions: vec![Continent {
                continent: "Europe".to_string(),
                continent_code: "EU".to_string(),
                countries: vec![],
            }],
        };
        assert!(no_countries.first_server().is_none());

        let no_servers = RegionsData {
            regions: vec![Continent {
                continent: "Europe".to_string(),
                continent_code: "EU".to_string(),
                countries: vec![Country {
                    country: "Sweden".to_string(),
                    country_code: "SE".to_string(),
                    flag: "🇸🇪".to_string(),
                    servers: vec![],
                }],
            }],
        };
        assert!(no_servers.first_server().is_none());
    }

    #[test]
    fn region_document_round_trips() {
        let json = r#"{
            "regions": [{
                "continent": "Europe",
                "continent_code": "EU",
                "countries": [{
                    "country": "Sweden",
                    "country_code": "SE",
                    "flag": "🇸🇪",
                    "servers": [{
                        "region": "se-sto-1",
                        "hostname": "se1.akashvpn.com",
                        "external_port": 1194,
                        "hub_name": "VPN"
                    }]
                }]
            }]
        }"#;

        let data: RegionsData = serde_json::from_str(json).expect("valid document");
        let first = data.first_server().expect("one server");
        assert_eq!(first.hostname, "se1.akashvpn.com");
        assert_eq!(first.external_port, 1194);
    }
}
