// Service module exports

pub mod countdown;
pub mod notification;
pub mod scheduler;
pub mod settings;
