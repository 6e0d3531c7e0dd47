pub mod bench;
pub mod dispatch;
pub mod interactive;
pub mod run;
pub mod sample;
pub mod search;
pub mod shared;
pub mod sort;
