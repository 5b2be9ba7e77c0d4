// End-to-end painting, resizing and rendering through the public API.

use round_chart::geometry::{max_round, round_of};
use round_chart::{ChartConfig, ChartError, ChartGrid, ChartRenderer, ChartState, PaintMode, Rgb};

fn hex(s: &str) -> Rgb {
    s.parse().unwrap()
}

#[test_log::test]
fn five_by_five_rounds() {
    let mut grid = ChartGrid::new(5, 5, Rgb::WHITE).unwrap();
    assert_eq!(grid.center(), (2, 2));

    grid.paint_round(0, hex("#d7003a"));
    let red: Vec<_> = grid
        .cells()
        .filter(|&(_, _, c)| c == hex("#d7003a"))
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(red, vec![(2, 2)]);

    grid.paint_round(2, hex("#0095d9"));
    let blue: Vec<_> = grid
        .cells()
        .filter(|&(_, _, c)| c == hex("#0095d9"))
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(blue.len(), 16);
    assert!(blue.iter().all(|&(x, y)| x.abs_diff(2).max(y.abs_diff(2)) == 2));

    // round 1 untouched
    for (x, y, c) in grid.cells() {
        if round_of(x, y, 5, 5) == 1 {
            assert_eq!(c, Rgb::WHITE);
        }
    }
    assert_eq!(grid.outermost_round_color(), hex("#0095d9"));
}

#[test_log::test]
fn resize_past_maximum_is_rejected() {
    let mut state = ChartState::new(&ChartConfig::default()).unwrap();
    state.resize(5, 5).unwrap();
    assert_eq!(
        state.resize(51, 51),
        Err(ChartError::InvalidDimension { width: 51, height: 51 })
    );
    assert_eq!((state.grid().width(), state.grid().height()), (5, 5));
}

#[test_log::test]
fn reset_below_minimum_keeps_content() {
    let mut grid = ChartGrid::new(10, 10, Rgb::WHITE).unwrap();
    grid.paint_round(5, hex("#884898"));
    let before = grid.clone();
    assert!(matches!(grid.reset(4, 10), Err(ChartError::InvalidDimension { .. })));
    assert_eq!(grid, before);
    assert_eq!(grid.outermost_round_color(), hex("#884898"));
}

#[test_log::test]
fn twenty_by_twenty_geometry() {
    assert_eq!(max_round(20, 20), 10);
    assert_eq!(round_of(0, 0, 20, 20), 10);
    let grid = ChartGrid::new(20, 20, Rgb::WHITE).unwrap();
    assert_eq!(grid.max_round(), 10);
}

#[test_log::test]
fn rendering_is_idempotent() {
    let mut config = ChartConfig::default();
    config.grid.width = 9;
    config.grid.height = 7;
    config.border.enabled = true;
    config.border.width_multiplier = 1.2;
    let mut state = ChartState::new(&config).unwrap();
    state.set_paint_mode(PaintMode::Round);
    state.set_current_color(hex("#3eb370"));
    state.click(0, 0);
    state.set_paint_mode(PaintMode::Cell);
    state.click(4, 3);

    let first = state.render_image();
    let second = state.render_image();
    assert_eq!(first.dimensions(), second.dimensions());
    assert_eq!(first.as_raw(), second.as_raw());

    let mut reused = first.clone();
    state.render_into(&mut reused);
    assert_eq!(reused.as_raw(), first.as_raw());
}

#[test_log::test]
fn cleared_grid_renders_like_a_new_one() {
    let renderer = ChartRenderer::default();
    let fresh = ChartGrid::new(6, 8, Rgb::WHITE).unwrap();

    let mut grid = fresh.clone();
    grid.paint_round(3, hex("#ee7800"));
    grid.paint_cell(1, 1, hex("#165e83"));
    assert_ne!(renderer.render_image(&grid).as_raw(), renderer.render_image(&fresh).as_raw());

    grid.clear();
    assert_eq!(renderer.render_image(&grid).as_raw(), renderer.render_image(&fresh).as_raw());
}

#[test_log::test]
fn pointer_drag_paints_rounds() {
    let mut state = ChartState::new(&ChartConfig::default()).unwrap();
    state.set_paint_mode(PaintMode::Round);
    state.set_current_color(hex("#19448e"));

    // cell size 25, no border: pixel (5, 5) is cell (0, 0), round 10
    let (x, y) = state.cell_at_pointer(5.0, 5.0).unwrap();
    assert!(state.press(x, y));
    let (x, y) = state.cell_at_pointer(130.0, 130.0).unwrap(); // cell (5, 5), round 5
    assert!(state.drag_to(x, y));
    state.release();

    assert_eq!(state.grid().outermost_round_color(), hex("#19448e"));
    assert_eq!(state.grid().round_color(5), Some(hex("#19448e")));
    assert_eq!(state.grid().color_at(10, 10), Rgb::WHITE);
}
