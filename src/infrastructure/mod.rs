pub mod http;
pub mod providers;
pub mod runtime;
pub mod web;
