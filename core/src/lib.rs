pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use input::{expand_key, parse_args, parse_game_input, parse_game_update, ParsedInput};
pub use model::game::{Game, GameInput, GameResult, GameUpdate};
pub use model::stats::{LeagueStats, Stats};
pub use model::validation::{validate, ParseError, ValidationError};
pub use repository::{FileGameStore, GameStore, MemoryGameStore};
pub use service::aggregate::{aggregate, aggregate_by_league};
pub use service::filter::{filter_by_league, filter_by_time, filter_by_time_from, leagues};
pub use service::format::{format_date, format_gaa, format_save_percentage, record_string};
pub use service::game_service::GameService;
pub use time::{parse_game_date, TimeWindow};
pub use usecase::dashboard::{Dashboard, DashboardUseCase};
