pub mod app;
pub mod events;
pub mod mvi;
pub mod nav;
pub mod pager;
