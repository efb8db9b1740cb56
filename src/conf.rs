use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{env, net::IpAddr, path::PathBuf, time::Duration};

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub server: ServerConf,
    pub client: ClientConf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConf {
    pub address: IpAddr,
    pub port: u16,
    pub upstream_url: String,
    pub db_url: String,
    pub request_timeout_ms: u64,
    pub upstream_timeout_ms: u64,
    pub db_timeout_ms: u64,
    pub db_busy_timeout_ms: u64,
    pub db_idle_timeout_secs: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConf {
    pub server_url: String,
    pub timeout_ms: u64,
    pub output_file: PathBuf,
}

impl Conf {
    pub fn new() -> Result<Conf> {
        let mut figment = Figment::new().merge(Toml::string(include_str!("../cotacao.toml")));

        if let Ok(custom_conf_path) = env::var("COTACAO_CONF") {
            figment = figment.merge(Toml::file(custom_conf_path));
        }

        let conf: Conf = figment
            .merge(Env::prefixed("COTACAO_").split("__"))
            .extract()?;

        Ok(conf)
    }
}

impl ServerConf {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    pub fn db_timeout(&self) -> Duration {
        Duration::from_millis(self.db_timeout_ms)
    }

    pub fn db_busy_timeout(&self) -> Duration {
        Duration::from_millis(self.db_busy_timeout_ms)
    }

    pub fn db_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.db_idle_timeout_secs)
    }
}

impl ClientConf {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use figment::Jail;
    use std::time::Duration;

    #[test]
    fn defaults() {
        Jail::expect_with(|_| {
            let conf = Conf::new().unwrap();
            assert_eq!(8080, conf.server.port);
            assert_eq!(Duration::from_millis(250), conf.server.request_timeout());
            assert_eq!(Duration::from_millis(200), conf.server.upstream_timeout());
            assert_eq!(Duration::from_millis(10), conf.server.db_timeout());
            assert_eq!(Duration::from_secs(5), conf.server.db_busy_timeout());
            assert_eq!(Duration::from_millis(300), conf.client.timeout());
            assert_eq!("http://localhost:8080/quote", conf.client.server_url);
            assert_eq!("cotacao.txt", conf.client.output_file.to_str().unwrap());
            Ok(())
        });
    }

    #[test]
    fn client_deadline_outlives_server_budget() {
        Jail::expect_with(|_| {
            let conf = Conf::new().unwrap();
            assert!(conf.client.timeout() > conf.server.request_timeout());
            assert!(conf.server.request_timeout() > conf.server.upstream_timeout());
            assert!(conf.server.upstream_timeout() > conf.server.db_timeout());
            Ok(())
        });
    }

    #[test]
    fn env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("COTACAO_SERVER__PORT", 9000);
            jail.set_env("COTACAO_CLIENT__OUTPUT_FILE", "out.txt");
            let conf = Conf::new().unwrap();
            assert_eq!(9000, conf.server.port);
            assert_eq!("out.txt", conf.client.output_file.to_str().unwrap());
            Ok(())
        });
    }

    #[test]
    fn custom_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
                [server]
                db_timeout_ms = 50
                "#,
            )?;
            jail.set_env("COTACAO_CONF", "custom.toml");
            let conf = Conf::new().unwrap();
            assert_eq!(Duration::from_millis(50), conf.server.db_timeout());
            assert_eq!(8080, conf.server.port);
            Ok(())
        });
    }
}
