//! Configuration system for netdyn.
//! TOML-based, layered resolution: project > user > defaults.

pub mod kuramoto_config;
pub mod netdyn_config;
pub mod network_config;
pub mod plot_config;

pub use kuramoto_config::KuramotoConfig;
pub use netdyn_config::NetdynConfig;
pub use network_config::NetworkConfig;
pub use plot_config::PlotConfig;
