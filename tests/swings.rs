use saber_parity::{
    AlternatingParity, Bomb, CutDirection, Hand, LevelData, Orientation, Parity, ResetKind,
    SwingAnalysis, SwingError, SwingSequence,
};

use self::common::*;

mod common;

fn analyze(level: &LevelData) -> SwingSequence {
    SwingAnalysis::new().calculate(level).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn down_then_up() {
    let level = level(
        vec![
            right(0.0, 1, 0, CutDirection::Down),
            right(1.0, 1, 0, CutDirection::Up),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = analyze(&level);
    let orientation = Orientation::new(Hand::Right);

    assert_eq!(swings.len(), 2);
    assert_eq!(swings[0].parity, Parity::Forehand);
    assert_eq!(swings[1].parity, Parity::Backhand);
    assert_eq!(swings[0].start.angle, orientation.forehand(CutDirection::Down));
    assert_eq!(swings[1].start.angle, orientation.backhand(CutDirection::Up));
    assert!(swings.iter().all(|swing| !swing.is_reset));
}

#[test]
fn empty_level() {
    let swings = analyze(&LevelData::new(BPM));

    assert!(swings.is_empty());
    assert_eq!(swings.summary().n_swings, 0);
    assert_eq!(swings.summary().ebpm, None);
}

#[test]
fn single_note() {
    let level = level(vec![right(4.0, 2, 1, CutDirection::Left)], Vec::new(), Vec::new());
    let swings = analyze(&level);

    assert_eq!(swings.len(), 1);
    assert_eq!(swings[0].parity, Parity::Forehand);
    assert_eq!(swings[0].start_beat, 4.0);
    assert_close(swings[0].end_beat, 4.1);
    assert_eq!(swings[0].ebpm, 0.0);
    assert_eq!(swings.time_to_next_swing(0), None);
}

#[test]
fn sliders_are_one_swing() {
    let level = level(
        vec![
            right(0.0, 1, 2, CutDirection::Down),
            right(0.0625, 1, 1, CutDirection::Down),
            right(0.125, 1, 0, CutDirection::Down),
            right(1.0, 1, 0, CutDirection::Up),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = analyze(&level);

    assert_eq!(swings.len(), 2);
    assert_eq!(swings[0].notes.len(), 3);
    assert_eq!((swings[0].start.column, swings[0].start.row), (1, 2));
    assert_eq!((swings[0].end.column, swings[0].end.row), (1, 0));
    assert_close(swings[0].end_beat, 0.225);

    // 0.775 beats from the padded end of the slider to the next swing
    assert_close(swings.time_to_next_swing(0).unwrap(), 0.775 / 2.0);
}

#[test]
fn bomb_blocks_the_upswing() {
    let level = level(
        vec![
            right(0.0, 0, 0, CutDirection::Down),
            right(1.0, 0, 0, CutDirection::Up),
        ],
        vec![Bomb::new(0.5, 0, 1)],
        Vec::new(),
    );

    let swings = analyze(&level);
    let real = real_swings(&swings);

    assert_eq!(real.len(), 2);
    assert_eq!(real[1].parity, Parity::Forehand);
    assert!(real[1].is_reset);
    assert_eq!(real[1].reset_kind, ResetKind::Bomb);
    assert_eq!(swings.summary().n_bomb_resets, 1);
}

#[test]
fn synthetic_swing_precedes_reset() {
    let level = level(
        vec![
            right(0.0, 0, 0, CutDirection::Down),
            right(1.0, 0, 0, CutDirection::Up),
        ],
        vec![Bomb::new(0.5, 0, 1)],
        Vec::new(),
    );

    let swings = analyze(&level);

    assert_eq!(swings.len(), 3);

    let synthetic = &swings[1];

    assert!(synthetic.is_synthetic());
    assert_eq!(synthetic.parity, Parity::Backhand);
    assert!(!synthetic.is_reset);
    // 0.1 seconds are 0.2 beats at 120 BPM
    assert_close(synthetic.start_beat, swings[0].end_beat + 0.2);
    assert_close(synthetic.duration_beats(), 0.2);
    assert_eq!((synthetic.start.column, synthetic.start.row), (0, 0));
    assert_eq!(synthetic.ebpm, swings[2].ebpm);
    assert!(swings[2].is_reset);
}

#[test]
fn dot_stack_starts_near_previous_swing() {
    let level = level(
        vec![
            right(0.0, 3, 1, CutDirection::Down),
            right(1.0, 0, 0, CutDirection::Dot),
            right(1.05, 3, 0, CutDirection::Dot),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = analyze(&level);
    let real = real_swings(&swings);

    assert_eq!(real.len(), 2);

    let stack = real[1];

    assert_eq!(stack.notes.len(), 2);
    assert_eq!((stack.start.column, stack.start.row), (3, 0));
    assert_eq!((stack.end.column, stack.end.row), (0, 0));
    assert_eq!(stack.start.angle, stack.end.angle);

    // notes stay in beat order
    assert_eq!(stack.start_beat, 1.0);
    assert!(stack.notes[0].beat < stack.notes[1].beat);
}

#[test]
fn dot_after_down_resets() {
    let level = level(
        vec![
            right(0.0, 1, 1, CutDirection::Down),
            right(1.0, 1, 1, CutDirection::Dot),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = analyze(&level);
    let real = real_swings(&swings);

    assert_eq!(real.len(), 2);
    assert_eq!(real[1].parity, Parity::Forehand);
    assert!(real[1].is_reset);
    assert_eq!(real[1].reset_kind, ResetKind::Normal);
    assert!(swings[1].is_synthetic());
}

#[test]
fn dot_after_arrow_holds_its_angle() {
    let level = level(
        vec![
            right(0.0, 1, 1, CutDirection::DownLeft),
            right(1.0, 1, 1, CutDirection::Dot),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = analyze(&level);
    let real = real_swings(&swings);

    assert_eq!(swings.len(), 3);
    assert_eq!(real[1].parity, Parity::Forehand);
    assert_eq!(real[1].reset_kind, ResetKind::Normal);
    assert_eq!(
        real[1].start.angle,
        Orientation::new(Hand::Right).forehand(CutDirection::DownLeft)
    );
    assert_eq!(real[1].start.angle, real[1].end.angle);
}

#[test]
fn bombs_during_a_slider_count() {
    let level = level(
        vec![
            right(0.0, 0, 0, CutDirection::Down),
            right(1.0, 0, 0, CutDirection::Up),
            right(1.1, 0, 1, CutDirection::Up),
        ],
        vec![Bomb::new(1.05, 0, 1)],
        Vec::new(),
    );

    let swings = analyze(&level);
    let real = real_swings(&swings);

    assert_eq!(real.len(), 2);
    assert_eq!(real[1].notes.len(), 2);
    assert_eq!(real[1].parity, Parity::Forehand);
    assert_eq!(real[1].reset_kind, ResetKind::Bomb);
}

#[test]
fn synthetic_swing_fits_a_short_gap() {
    let level = level(
        vec![
            right(0.0, 1, 1, CutDirection::Down),
            right(0.25, 1, 1, CutDirection::Down),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = analyze(&level);

    assert_eq!(swings.len(), 3);
    assert!(swings[1].is_synthetic());
    assert!(swings[0].start_beat < swings[1].start_beat);
    assert!(swings[1].start_beat < swings[2].start_beat);
    assert!(swings[1].end_beat <= swings[2].start_beat);
}

#[test]
fn walls_move_the_player_out_of_the_bomb() {
    let notes = vec![
        right(0.0, 0, 0, CutDirection::Down),
        right(1.0, 0, 0, CutDirection::Up),
    ];
    let bombs = vec![Bomb::new(0.5, 0, 1)];

    let level = level(notes, bombs, vec![wall(0.5, 1, 1)]);
    let swings = analyze(&level);

    assert_eq!(swings.len(), 2);
    assert_eq!(swings[1].parity, Parity::Backhand);
    assert!(!swings[1].is_reset);
}

#[test]
fn inverted_swings() {
    let level = level(
        vec![
            right(0.0, 1, 1, CutDirection::Up),
            right(1.0, 2, 1, CutDirection::Down),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = analyze(&level);

    assert_eq!(swings[0].parity, Parity::Backhand);
    assert!(swings[1].is_inverted);
    assert_eq!(swings.summary().n_inverted, 1);
}

#[test]
fn invalid_note_aborts() {
    let level = level(
        vec![
            right(0.0, 1, 0, CutDirection::Down),
            right(1.0, 4, 0, CutDirection::Up),
        ],
        Vec::new(),
        Vec::new(),
    );

    assert!(matches!(
        SwingAnalysis::new().calculate(&level),
        Err(SwingError::InvalidNoteData { beat, .. }) if beat == 1.0
    ));

    // only the hand with the invalid note is affected
    assert!(SwingAnalysis::new().hand(Hand::Left).calculate(&level).is_ok());
}

#[test]
fn malformed_bombs_fall_back_to_alternation() {
    let level = level(
        vec![
            right(0.0, 1, 1, CutDirection::Down),
            right(1.0, 1, 1, CutDirection::Down),
            right(2.0, 1, 1, CutDirection::Down),
        ],
        vec![Bomb::new(0.5, 1, 5)],
        Vec::new(),
    );

    let swings = analyze(&level);
    let real = real_swings(&swings);

    // the boundary with the bomb alternates, the next one resets as usual
    assert_eq!(real.len(), 3);
    assert_eq!(real[1].parity, Parity::Backhand);
    assert!(!real[1].is_reset);
    assert!(real[2].is_reset);
}

#[test]
fn hands_are_mirrored() {
    let level = level(
        vec![
            right(0.0, 3, 1, CutDirection::Left),
            left(0.0, 0, 1, CutDirection::Right),
        ],
        Vec::new(),
        Vec::new(),
    );

    let both = SwingAnalysis::new().calculate_both(&level).unwrap();

    assert_eq!(both.left.hand(), Hand::Left);
    assert_eq!(both.left.len(), 1);
    assert_eq!(both.right.len(), 1);
    assert_eq!(both.left[0].start.angle, both.right[0].start.angle);
    assert_eq!(both.get(Hand::Left)[0].notes[0].hand, Hand::Left);
}

#[test]
fn resets_are_played_twice_as_fast() {
    let level = level(
        vec![
            right(0.0, 1, 1, CutDirection::Down),
            right(1.0, 1, 1, CutDirection::Up),
            right(2.0, 1, 1, CutDirection::Up),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = analyze(&level);
    let real = real_swings(&swings);

    assert_eq!(real[1].ebpm, 60.0);
    assert!(real[2].is_reset);
    assert_eq!(real[2].ebpm, 120.0);

    let stats = swings.summary().ebpm.unwrap();

    assert_eq!(stats.min, 60.0);
    assert_eq!(stats.max, 120.0);
}

#[test]
fn alternating_policy() {
    let level = level(
        vec![
            right(0.0, 1, 1, CutDirection::Down),
            right(1.0, 1, 1, CutDirection::Down),
            right(2.0, 1, 1, CutDirection::Down),
        ],
        Vec::new(),
        Vec::new(),
    );

    let swings = SwingAnalysis::new()
        .policy(AlternatingParity)
        .calculate(&level)
        .unwrap();

    let parities: Vec<_> = swings.iter().map(|swing| swing.parity).collect();

    assert_eq!(
        parities,
        [Parity::Forehand, Parity::Backhand, Parity::Forehand]
    );
    assert_eq!(swings.summary().n_resets(), 0);
}

#[test]
fn results_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<SwingSequence>();
    assert_send_sync::<SwingAnalysis>();
    assert_send_sync::<LevelData>();
}
