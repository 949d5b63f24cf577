pub mod artifact;
pub mod deployer;
pub mod fuel;
pub mod network;
pub mod runner;
pub mod shared;
