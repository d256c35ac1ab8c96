use std::net::{Ipv4Addr, SocketAddr};
use tandem_core::IceServerConfig;

pub const DEFAULT_STUN_URL: &str = "stun:stun.l.google.com:19302";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_COMMAND_BUFFER: usize = 100;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Handed to every client unmodified on connect.
    pub ice_servers: Vec<IceServerConfig>,
    /// Capacity of the room's command channel.
    pub command_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            ice_servers: vec![IceServerConfig::stun(DEFAULT_STUN_URL)],
            command_buffer: DEFAULT_COMMAND_BUFFER,
        }
    }
}
