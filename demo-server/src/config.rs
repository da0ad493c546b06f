use clap::Parser;
use reply_core::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "demo-server")]
#[command(about = "Serves Reply.io contact lookups over HTTP")]
pub struct ServerConfig {
    #[arg(long, env = "REPLY_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "REPLY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
