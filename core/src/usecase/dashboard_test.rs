use crate::model::game::{Game, GameInput, GameResult};
use crate::repository::{sort_by_date, MemoryGameStore};
use crate::time::TimeWindow;
use crate::usecase::dashboard::DashboardUseCase;
use chrono::{Duration, NaiveDate};

fn game(date: NaiveDate, league: &str, shots: u32, goals: u32, result: GameResult) -> Game {
    Game::from_input(GameInput {
        date,
        team: "Hawks".to_string(),
        league: league.to_string(),
        opponent: "Bears".to_string(),
        shots_against: shots,
        goals_allowed: goals,
        result,
        notes: None,
    })
}

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
}

fn store() -> MemoryGameStore {
    let day = |n: i64| anchor() - Duration::days(n);
    let mut games = vec![
        game(day(1), "AAA", 30, 2, GameResult::Win),
        game(day(3), "Beer", 25, 0, GameResult::Win),
        game(day(5), "AAA", 40, 4, GameResult::OvertimeLoss),
        game(day(8), "AAA", 28, 3, GameResult::Loss),
        game(day(20), "Beer", 18, 1, GameResult::Win),
        game(day(45), "AAA", 33, 0, GameResult::Loss),
        game(day(500), "Junior", 50, 7, GameResult::ShootoutLoss),
    ];
    sort_by_date(&mut games);
    MemoryGameStore::with_games(games)
}

#[test]
fn test_dashboard_all_time() {
    let store = store();
    let usecase = DashboardUseCase::new(&store);
    let dashboard = usecase.get_dashboard_from(TimeWindow::All, anchor()).unwrap();

    assert_eq!(dashboard.stats.games_played, 7);
    assert_eq!(dashboard.stats.record(), "3-2-2");
    assert_eq!(dashboard.stats.shutouts, 2);
    assert_eq!(
        dashboard.by_league.iter().map(|l| l.league.as_str()).collect::<Vec<_>>(),
        vec!["AAA", "Beer", "Junior"]
    );
    assert_eq!(dashboard.recent.len(), 5);
    assert_eq!(dashboard.recent[0].league, "AAA");
    assert_eq!(dashboard.recent[1].league, "Beer");
}

#[test]
fn test_dashboard_week_window() {
    let store = store();
    let usecase = DashboardUseCase::new(&store);
    let dashboard = usecase.get_dashboard_from(TimeWindow::Week, anchor()).unwrap();

    assert_eq!(dashboard.window, TimeWindow::Week);
    assert_eq!(dashboard.stats.games_played, 3);
    assert_eq!(dashboard.stats.shots_against, 95);
    assert_eq!(dashboard.stats.goals_allowed, 6);
    assert_eq!(dashboard.stats.gaa, 2.0);
    assert_eq!(dashboard.by_league.len(), 2);
    assert_eq!(dashboard.recent.len(), 3);
}

#[test]
fn test_dashboard_month_and_year() {
    let store = store();
    let usecase = DashboardUseCase::new(&store);

    let month = usecase.get_dashboard_from(TimeWindow::Month, anchor()).unwrap();
    assert_eq!(month.stats.games_played, 5);

    let year = usecase.get_dashboard_from(TimeWindow::Year, anchor()).unwrap();
    assert_eq!(year.stats.games_played, 6);
    assert!(year.by_league.iter().all(|l| l.league != "Junior"));
}

#[test]
fn test_empty_store_dashboard() {
    let store = MemoryGameStore::new();
    let usecase = DashboardUseCase::new(&store);
    let dashboard = usecase.get_dashboard_from(TimeWindow::All, anchor()).unwrap();
    assert!(dashboard.is_empty());
    assert!(dashboard.by_league.is_empty());
    assert!(dashboard.recent.is_empty());
}

#[test]
fn test_all_windows_in_picker_order() {
    let store = MemoryGameStore::new();
    let usecase = DashboardUseCase::new(&store);
    let windows: Vec<TimeWindow> = usecase
        .get_all_windows()
        .unwrap()
        .iter()
        .map(|d| d.window)
        .collect();
    assert_eq!(
        windows,
        vec![TimeWindow::All, TimeWindow::Year, TimeWindow::Month, TimeWindow::Week]
    );
}
