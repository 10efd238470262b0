//! Swap controller tests - selection protocol, swap-back and animation join

use tui_match3::core::{
    ClearMatches, Grid, IgnoreReason, Latch, MatchDetector, MatchSet, Result, SelectOutcome,
    SwapController, SwapPhase, SwapResolution, SwapState,
};
use tui_match3::types::{BoardConfig, Coord, TileKind};

const DURATION: u32 = 100;

/// 8x8 board with no equal neighbors (kinds 0, 3, 4 only).
fn background() -> Grid {
    const BG: [TileKind; 3] = [0, 3, 4];
    let cfg = BoardConfig::default();
    let kinds: Vec<TileKind> = (0..cfg.cell_count())
        .map(|i| BG[(i % cfg.width + 2 * (i / cfg.width)) % 3])
        .collect();
    Grid::from_kinds(&cfg, &kinds).unwrap()
}

// 4x2, bottom row first:
//   y=1: 2 1 0 2
//   y=0: 1 0 1 2
// Swapping (1,0) with (1,1) completes 1 1 1 on the bottom row.
fn matching() -> Grid {
    let cfg = BoardConfig::default().with_size(4, 2).with_type_count(3);
    Grid::from_kinds(&cfg, &[1, 0, 1, 2, 2, 1, 0, 2]).unwrap()
}

fn c(x: usize, y: usize) -> Coord {
    Coord::new(x, y)
}

/// Tick in `step` increments until a resolution, failing after `limit` ticks.
fn run_until_resolved(ctl: &mut SwapController, step: u32, limit: usize) -> SwapResolution {
    for _ in 0..limit {
        if let Some(res) = ctl.tick(step).unwrap() {
            return res;
        }
    }
    panic!("swap did not resolve within {} ticks", limit);
}

#[test]
fn test_idle_tick_is_a_no_op() {
    let mut ctl = SwapController::new(background(), DURATION);
    assert_eq!(ctl.tick(16).unwrap(), None);
    assert_eq!(ctl.state(), SwapState::Idle);
}

#[test]
fn test_non_adjacent_second_selection_retargets() {
    let mut ctl = SwapController::new(background(), DURATION);
    let first = ctl.grid().id_at(c(0, 0)).unwrap();
    let far = ctl.grid().id_at(c(2, 0)).unwrap();
    let diagonal = ctl.grid().id_at(c(3, 1)).unwrap();

    ctl.select(c(0, 0)).unwrap();
    assert_eq!(
        ctl.select(c(2, 0)).unwrap(),
        SelectOutcome::Retargeted {
            from: first,
            to: far
        }
    );
    assert_eq!(ctl.selected(), Some(far));
    assert!(!ctl.grid().tile(first).unwrap().is_selected());
    assert!(ctl.grid().tile(far).unwrap().is_selected());

    // Diagonal neighbors are not adjacent either.
    assert_eq!(
        ctl.select(c(3, 1)).unwrap(),
        SelectOutcome::Retargeted {
            from: far,
            to: diagonal
        }
    );
    assert!(!ctl.is_animating());
    assert_eq!(ctl.grid().coordinate_of(first).unwrap(), c(0, 0));
}

#[test]
fn test_adjacent_second_selection_swaps() {
    let mut ctl = SwapController::new(background(), DURATION);
    let a = ctl.grid().id_at(c(4, 4)).unwrap();
    let b = ctl.grid().id_at(c(5, 4)).unwrap();

    ctl.select(c(4, 4)).unwrap();
    let SelectOutcome::SwapStarted(pair) = ctl.select(c(5, 4)).unwrap() else {
        panic!("adjacent selection should start a swap");
    };
    assert_eq!((pair.a, pair.b), (a, b));
    assert_eq!((pair.a_origin, pair.b_origin), (c(4, 4), c(5, 4)));
    assert_eq!(ctl.state(), SwapState::Animating(SwapPhase::Forward));
    assert_eq!(ctl.selected(), None);
    assert!(!ctl.grid().tile(a).unwrap().is_selected());

    // The grid already holds the swapped layout while the tweens run.
    assert_eq!(ctl.grid().coordinate_of(a).unwrap(), c(5, 4));
}

#[test]
fn test_swap_back_restores_origins() {
    let mut ctl = SwapController::new(background(), DURATION);
    let before = ctl.grid().kinds();
    let a = ctl.grid().id_at(c(2, 2)).unwrap();
    let b = ctl.grid().id_at(c(2, 3)).unwrap();

    ctl.select(c(2, 2)).unwrap();
    assert!(matches!(
        ctl.select(c(2, 3)).unwrap(),
        SelectOutcome::SwapStarted(_)
    ));

    // Forward tweens land: no match, so the revert starts on the same tick.
    assert_eq!(ctl.tick(DURATION / 2).unwrap(), None);
    assert_eq!(ctl.tick(DURATION / 2).unwrap(), None);
    assert_eq!(ctl.state(), SwapState::Animating(SwapPhase::Revert));
    assert_eq!(ctl.grid().coordinate_of(a).unwrap(), c(2, 2));

    // Input is still locked during the revert.
    assert_eq!(
        ctl.select(c(0, 0)).unwrap(),
        SelectOutcome::Ignored(IgnoreReason::Busy)
    );

    let res = run_until_resolved(&mut ctl, 16, 20);
    let SwapResolution::Reverted { pair } = res else {
        panic!("expected a revert, got {:?}", res);
    };
    assert_eq!((pair.a_origin, pair.b_origin), (c(2, 2), c(2, 3)));
    assert_eq!(ctl.state(), SwapState::Idle);
    assert_eq!(ctl.grid().coordinate_of(a).unwrap(), c(2, 2));
    assert_eq!(ctl.grid().coordinate_of(b).unwrap(), c(2, 3));
    assert_eq!(ctl.grid().kinds(), before);
    assert!(ctl.grid().is_consistent());

    // Resting again: display positions are the grid positions.
    let home = ctl.grid().world_position(c(2, 2));
    assert_eq!(ctl.display_position(a).unwrap(), home);
}

#[test]
fn test_selection_ignored_while_animating() {
    let mut ctl = SwapController::new(matching(), DURATION);
    ctl.select(c(1, 0)).unwrap();
    ctl.select(c(1, 1)).unwrap();
    assert!(ctl.is_animating());

    for coord in [c(0, 0), c(1, 0), c(3, 1)] {
        assert_eq!(
            ctl.select(coord).unwrap(),
            SelectOutcome::Ignored(IgnoreReason::Busy)
        );
    }
    // Busy wins over bounds checking.
    assert_eq!(
        ctl.select(c(40, 40)).unwrap(),
        SelectOutcome::Ignored(IgnoreReason::Busy)
    );
    assert_eq!(ctl.state(), SwapState::Animating(SwapPhase::Forward));
}

#[test]
fn test_out_of_bounds_selection_is_an_error() {
    let mut ctl = SwapController::new(matching(), DURATION);
    assert!(ctl.select(c(4, 0)).is_err());
    assert_eq!(ctl.state(), SwapState::Idle);
}

#[test]
fn test_destroyed_tiles_are_not_interactive() {
    let mut grid = matching();
    let gone = grid.id_at(c(2, 1)).unwrap();
    grid.mark_destroyed(gone).unwrap();
    let mut ctl = SwapController::new(grid, DURATION);

    assert_eq!(
        ctl.select(c(2, 1)).unwrap(),
        SelectOutcome::Ignored(IgnoreReason::NotInteractive)
    );
    assert_eq!(ctl.state(), SwapState::Idle);

    // A destroyed second pick keeps the first selection.
    let first = ctl.grid().id_at(c(1, 1)).unwrap();
    ctl.select(c(1, 1)).unwrap();
    assert_eq!(
        ctl.select(c(2, 1)).unwrap(),
        SelectOutcome::Ignored(IgnoreReason::NotInteractive)
    );
    assert_eq!(ctl.state(), SwapState::OneSelected(first));
}

#[test]
fn test_resolution_waits_for_both_tweens() {
    let mut ctl = SwapController::new(matching(), DURATION);
    ctl.select(c(1, 0)).unwrap();
    ctl.select(c(1, 1)).unwrap();

    assert_eq!(ctl.tick(DURATION - 1).unwrap(), None);
    assert!(ctl.is_animating());
    let res = ctl.tick(1).unwrap();
    assert!(matches!(res, Some(SwapResolution::Accepted { .. })));
}

#[test]
fn test_latch_join_is_order_independent() {
    let mut first = Latch::new(2);
    let mut second = Latch::new(2);

    // Either arrival may come first; only the last one opens the latch.
    assert!(!first.arrive());
    assert!(first.arrive());
    assert!(!second.arrive());
    assert!(!second.is_open());
    assert!(second.arrive());
    assert_eq!(first, second);
}

#[test]
fn test_tick_with_hands_matches_to_consumer() {
    let mut ctl = SwapController::new(matching(), DURATION);
    let mut clear = ClearMatches::new();

    ctl.select(c(1, 0)).unwrap();
    ctl.select(c(1, 1)).unwrap();
    let mut res = None;
    for _ in 0..10 {
        res = ctl.tick_with(16, &mut clear).unwrap();
        if res.is_some() {
            break;
        }
    }

    let Some(SwapResolution::Accepted { matches, .. }) = res else {
        panic!("expected an accepted swap");
    };
    assert_eq!(clear.cleared(), 3);
    for x in 0..3 {
        let tile = ctl.grid().tile_at(c(x, 0)).unwrap();
        assert!(tile.is_destroyed());
        assert!(matches.contains(tile.id()));
    }
    assert!(ctl.grid().all_matches().is_empty());
}

#[test]
fn test_closure_consumer_sees_the_same_set() {
    let mut ctl = SwapController::new(matching(), DURATION);
    let mut seen = MatchSet::new();
    let mut record = |_: &mut Grid, m: &MatchSet| -> Result<()> {
        seen.union_with(m);
        Ok(())
    };

    ctl.select(c(1, 1)).unwrap();
    ctl.select(c(1, 0)).unwrap();
    ctl.tick_with(DURATION, &mut record).unwrap();
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_reset_drops_selection() {
    let mut ctl = SwapController::new(matching(), DURATION);
    ctl.select(c(0, 0)).unwrap();
    assert!(ctl.reset(background()));
    assert_eq!(ctl.state(), SwapState::Idle);
    assert_eq!(ctl.grid().width(), 8);
    assert!(ctl.grid().tiles().all(|t| !t.is_selected()));
}

#[test]
fn test_reset_refused_mid_swap() {
    let mut ctl = SwapController::new(matching(), DURATION);
    ctl.select(c(1, 0)).unwrap();
    ctl.select(c(1, 1)).unwrap();
    assert_eq!(ctl.tick(DURATION / 2).unwrap(), None);

    // The in-flight swap keeps its board and still resolves.
    assert!(!ctl.reset(background()));
    assert_eq!(ctl.state(), SwapState::Animating(SwapPhase::Forward));
    assert_eq!(ctl.grid().width(), 4);

    let res = ctl.tick(DURATION / 2).unwrap();
    assert!(matches!(res, Some(SwapResolution::Accepted { .. })));
    assert!(ctl.reset(background()));
    assert_eq!(ctl.grid().width(), 8);
}

#[test]
fn test_custom_detector_is_the_board_rule() {
    // Three in a row is one neighbor short of a four-run rule.
    let mut ctl = SwapController::new(matching(), DURATION)
        .with_detector(MatchDetector::new(3));
    assert_eq!(ctl.grid().detector().min_neighbors(), 3);

    ctl.select(c(1, 0)).unwrap();
    ctl.select(c(1, 1)).unwrap();
    ctl.tick(DURATION).unwrap();
    assert!(ctl.grid().all_matches().is_empty());
    let res = run_until_resolved(&mut ctl, 16, 20);
    assert!(matches!(res, SwapResolution::Reverted { .. }));

    let mut grid = ctl.grid().clone();
    let a = grid.id_at(c(1, 0)).unwrap();
    let b = grid.id_at(c(1, 1)).unwrap();
    grid.swap(a, b).unwrap();
    assert!(grid.all_matches().is_empty());

    assert!(ctl.reset(matching()));
    assert_eq!(ctl.detector().min_neighbors(), 3);
}
