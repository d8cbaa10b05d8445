//! netdyn analysis engine: real-network statistics (degree distribution,
//! clustering, Poisson and power-law goodness of fit) and Kuramoto
//! coupled-oscillator simulation, plus plot rendering and pipeline drivers.

pub mod kuramoto;
pub mod network;
pub mod pipeline;
pub mod plot;
