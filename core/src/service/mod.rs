pub mod aggregate;
pub mod dto;
pub mod filter;
pub mod format;
pub mod game_service;
