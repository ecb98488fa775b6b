use flipbook_core::{BookConfig, CoverState, Engine, EnvCaps, Intent};

fn closable_book(pages: usize) -> Engine {
    let cfg = BookConfig {
        can_close: true,
        ..Default::default()
    };
    Engine::new(pages, cfg, EnvCaps::default())
}

#[test]
fn walking_a_closable_book_cover_to_cover() {
    let mut engine = closable_book(6);
    assert_eq!(
        engine.cover(),
        CoverState {
            at_front: true,
            at_back: false
        }
    );

    // Opening the book clears the front cover.
    engine.turn(Intent::Forward).unwrap();
    assert_eq!(engine.cover(), CoverState::default());

    engine.turn(Intent::Forward).unwrap();
    assert_eq!(engine.cover(), CoverState::default());

    // Landing on the last page closes the book at the back.
    let result = engine.turn(Intent::Forward).unwrap();
    assert_eq!(result.active, vec![5]);
    assert_eq!(
        engine.cover(),
        CoverState {
            at_front: false,
            at_back: true
        }
    );

    // One turn back reopens it.
    engine.turn(Intent::Back).unwrap();
    assert_eq!(engine.cover(), CoverState::default());
    assert_eq!(engine.active_pages(), vec![3, 4]);
}

#[test]
fn turning_back_onto_the_first_page_sets_the_front_cover() {
    let mut engine = closable_book(6);
    engine.turn(Intent::Forward).unwrap();
    assert_eq!(engine.active_pages(), vec![1, 2]);

    let result = engine.turn(Intent::Back).unwrap();
    assert_eq!(result.active, vec![0]);
    assert!(result.cover.at_front);
    assert!(!result.cover.at_back);
}

#[test]
fn cover_flags_come_out_with_the_turn_result() {
    let mut engine = closable_book(6);
    let result = engine.turn(Intent::Forward).unwrap();
    // The result carries the recomputed flags, so a callback fired on it
    // observes the final state.
    assert_eq!(result.cover, engine.cover());
}

#[test]
fn padded_books_never_report_covers() {
    let mut engine = Engine::new(6, BookConfig::default(), EnvCaps::default());
    while engine.turn(Intent::Forward).is_some() {}
    assert_eq!(engine.cover(), CoverState::default());
    while engine.turn(Intent::Back).is_some() {}
    assert_eq!(engine.cover(), CoverState::default());
}
