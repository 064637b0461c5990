use std::time::Duration;

use conway_core::{
    Command, Grid, LifeConfig, LifeError, ManualClock, Session, SessionEvent, SessionMode,
};

fn new_session(rows: usize, cols: usize) -> (Session<Vec<Grid>>, ManualClock) {
    let mut config = LifeConfig::default();
    config.grid.rows = rows;
    config.grid.cols = cols;
    config.seeding.seed = Some(2024);
    let clock = ManualClock::new();
    let session = Session::with_clock(&config, Vec::new(), Box::new(clock.clone()))
        .expect("Failed to create session");
    (session, clock)
}

#[test]
fn test_blinker_run_and_time_travel() {
    // 1. Setup: horizontal blinker through the input layer
    let (mut session, clock) = new_session(3, 3);
    for col in 0..3 {
        session
            .dispatch(Command::ToggleCell { row: 1, col })
            .expect("toggle failed");
    }
    let row = session.grid().clone();
    let column = Grid::with_live_cells(3, 3, &[(0, 1), (1, 1), (2, 1)]).unwrap();

    // 2. Run four generations
    assert!(session.dispatch(Command::Start).unwrap());
    let mut computed = 0;
    for _ in 0..4 {
        clock.advance(Duration::from_millis(200));
        if session.poll() {
            computed += 1;
        }
    }
    assert_eq!(computed, 4);
    assert_eq!(session.grid(), &row);
    assert_eq!(session.history().len(), 5);

    // 3. Walk back through the run while paused
    session.dispatch(Command::TogglePause).unwrap();
    assert!(session.dispatch(Command::StepBackward).unwrap());
    assert_eq!(session.grid(), &column);
    assert!(session.dispatch(Command::StepForward).unwrap());
    assert_eq!(session.grid(), &row);
    assert!(!session.dispatch(Command::StepForward).unwrap());

    // 4. Stop clears the board but keeps the run
    assert!(session.dispatch(Command::Stop).unwrap());
    assert!(session.grid().is_extinct());
    assert_eq!(session.mode(), SessionMode::Editing);
    assert!(session.dispatch(Command::StepBackward).unwrap());
    assert_eq!(session.grid(), &column);
}

#[test]
fn test_game_over_notification() {
    let (mut session, clock) = new_session(3, 3);
    session.toggle_cell(1, 1).unwrap();
    session.start();

    clock.advance(Duration::from_millis(200));
    assert!(session.poll());

    let events = session.drain_events();
    assert!(events.contains(&SessionEvent::GameOver { generation: 1 }));
    assert_eq!(session.mode(), SessionMode::Editing);
    assert!(session.grid().is_extinct());
    // the final frame shown is the cleared grid
    assert_eq!(session.renderer().last().map(Grid::is_extinct), Some(true));
}

#[test]
fn test_invalid_size_text_is_reported() {
    let (mut session, _) = new_session(5, 5);
    let err = session
        .dispatch(Command::ApplySize {
            cols: "-5".into(),
            rows: "10".into(),
        })
        .unwrap_err();
    assert!(matches!(err, LifeError::Validation(_)));
    assert!(err.is_user_facing());
    assert_eq!((session.grid().rows(), session.grid().cols()), (5, 5));
}

#[test]
fn test_seeded_random_fill_is_reproducible() {
    let (mut a, _) = new_session(20, 20);
    let (mut b, _) = new_session(20, 20);
    a.random_fill().unwrap();
    b.random_fill().unwrap();
    assert_eq!(a.grid(), b.grid());
    assert!(!a.grid().is_extinct());
}
