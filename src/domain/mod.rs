pub mod building;
pub mod envelope;
pub mod hazard;
pub mod location;
pub mod ports;
pub mod program;
pub mod request;
pub mod tm;
pub mod ui;
