use torus_life::config::SimConfig;
use torus_life::controller::{ClickOutcome, Mode, Simulation};
use torus_life::overlay::{overlay_layout, OverlayElement};
use torus_life::rules::patterns::Pattern;

// Pixel centres of the two buttons and of a few grid cells.
const START: (u32, u32) = (43, 50);
const RANDOM: (u32, u32) = (130, 50);

fn cell_px(x: u32, y: u32) -> (u32, u32) {
    (x * 20 + 10, y * 20 + 10)
}

#[test]
fn edits_are_frozen_once_running() {
    let mut sim = Simulation::with_seed(SimConfig::default(), 11);
    let (px, py) = cell_px(20, 20);

    assert_eq!(sim.click(px, py), ClickOutcome::Toggled { x: 20, y: 20, alive: true });
    // a lone cell dies on the start step
    assert_eq!(sim.click(START.0, START.1), ClickOutcome::Started);
    assert!(!sim.grid().get(20, 20));

    assert_eq!(sim.click(px, py), ClickOutcome::Ignored);
    assert!(!sim.grid().get(20, 20));
    assert_eq!(sim.mode(), Mode::Running);
}

#[test]
fn drawn_blinker_oscillates_under_the_timer() {
    let mut sim = Simulation::with_seed(SimConfig::default(), 11);
    for x in 9..12 {
        let (px, py) = cell_px(x, 20);
        sim.click(px, py);
    }
    let horizontal = sim.grid().cells().to_vec();

    sim.click(START.0, START.1);
    assert_eq!(sim.generation(), 1);
    assert!(sim.grid().get(10, 19) && sim.grid().get(10, 20) && sim.grid().get(10, 21));
    assert!(!sim.grid().get(9, 20) && !sim.grid().get(11, 20));

    assert!(sim.tick());
    assert_eq!(sim.generation(), 2);
    assert_eq!(sim.grid().cells(), horizontal.as_slice());
}

#[test]
fn start_on_a_still_life_keeps_the_grid() {
    let mut sim = Simulation::with_seed(SimConfig::default(), 11);
    sim.grid_mut().place_pattern(&Pattern::Block, 30, 30);
    let before = sim.grid().cells().to_vec();

    sim.click(START.0, START.1);
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.grid().cells(), before.as_slice());
}

#[test]
fn random_shows_generation_zero_then_ticks() {
    let mut sim = Simulation::with_seed(SimConfig::default(), 11);
    let ClickOutcome::Seeded { alive } = sim.click(RANDOM.0, RANDOM.1) else {
        panic!("Random button did not seed");
    };
    assert!(alive > 0);
    assert_eq!(sim.generation(), 0);

    let layout = overlay_layout(sim.mode(), sim.generation(), sim.config());
    assert_eq!(layout.len(), 1);
    assert!(matches!(&layout[0], OverlayElement::Counter { text, .. } if text == "Generation: 0"));

    assert!(sim.tick());
    assert_eq!(sim.generation(), 1);
}

#[test]
fn second_random_click_is_ignored() {
    let mut sim = Simulation::with_seed(SimConfig::default(), 11);
    sim.click(RANDOM.0, RANDOM.1);
    let seeded = sim.grid().cells().to_vec();
    assert_eq!(sim.click(RANDOM.0, RANDOM.1), ClickOutcome::Ignored);
    assert_eq!(sim.grid().cells(), seeded.as_slice());
}
