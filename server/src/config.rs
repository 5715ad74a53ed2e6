use error_stack::ResultExt;
use kernel::KernelError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

static SERVER_HOST: &str = "SERVER_HOST";
static SERVER_PORT: &str = "SERVER_PORT";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ServerConfig {
    host: IpAddr,
    port: u16,
}

impl ServerConfig {
    /// Reads the bind address from the environment, `.env` included.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let host = dotenvy::var(SERVER_HOST).ok();
        let port = dotenvy::var(SERVER_PORT).ok();
        Self::parse(host.as_deref(), port.as_deref())
    }

    pub fn parse(host: Option<&str>, port: Option<&str>) -> error_stack::Result<Self, KernelError> {
        let host = match host {
            Some(host) => host
                .parse::<IpAddr>()
                .change_context(KernelError::Internal)
                .attach_printable_lazy(|| format!("{SERVER_HOST}=`{host}` is not an ip address"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match port {
            Some(port) => port
                .parse::<u16>()
                .change_context(KernelError::Internal)
                .attach_printable_lazy(|| format!("{SERVER_PORT}=`{port}` is not a port"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod test {
    use super::ServerConfig;
    use kernel::KernelError;

    #[test]
    fn defaults_to_all_interfaces() -> error_stack::Result<(), KernelError> {
        let config = ServerConfig::parse(None, None)?;
        assert_eq!(config.address().to_string(), "0.0.0.0:8080");
        Ok(())
    }

    #[test]
    fn reads_host_and_port() -> error_stack::Result<(), KernelError> {
        let config = ServerConfig::parse(Some("127.0.0.1"), Some("3000"))?;
        assert_eq!(config.address().to_string(), "127.0.0.1:3000");
        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        assert!(ServerConfig::parse(Some("localhost:80"), None).is_err());
        assert!(ServerConfig::parse(None, Some("eighty")).is_err());
    }
}
