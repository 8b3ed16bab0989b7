pub mod schema;

pub use schema::{
    Config, DebugDisclosure, EchoConfig, GatewayConfig, HuggingFaceConfig, OpenAiConfig,
};
