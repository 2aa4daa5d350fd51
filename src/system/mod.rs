pub mod collector;
pub mod gpu;
pub mod history;
pub mod kill;
pub mod network;
pub mod platform;
pub mod process;
pub mod snapshot;
