mod core;
mod echo;
mod gateway;
mod providers;

pub use self::core::Config;
pub use echo::{DebugDisclosure, EchoConfig};
pub use gateway::GatewayConfig;
pub use providers::{HuggingFaceConfig, OpenAiConfig};
