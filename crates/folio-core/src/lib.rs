pub mod constants;
pub mod gauge;
pub mod preload;
pub mod projects;
pub mod ramp;
pub mod scramble;
pub mod shutter;
pub mod skew;
pub mod spring;
pub mod stores;
pub mod timer;
pub mod track;

pub use constants::*;
pub use gauge::*;
pub use preload::*;
pub use projects::*;
pub use ramp::*;
pub use scramble::*;
pub use shutter::*;
pub use skew::*;
pub use spring::*;
pub use stores::*;
pub use timer::*;
pub use track::*;
