pub mod audit;
pub mod catalog;
pub mod dispatch;
pub mod login;
pub mod run;
pub mod shared;
