//! Reactive state shared through Leptos context

pub mod chain;
pub mod swap;
