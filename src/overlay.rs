//! Buttons, labels and the generation counter drawn over the cell grid.
//!
//! Layout is computed from the simulation as plain data so it can be
//! checked without a window; [`paint_overlay`] turns it into egui shapes.

use crate::config::{PixelRect, SimConfig};
use crate::controller::{Mode, Simulation};
use egui::{Align2, Color32, FontId, Pos2, Rect};

pub const BUTTON_FILL: Color32 = Color32::GREEN;
pub const LABEL_COLOR: Color32 = Color32::BLACK;
pub const COUNTER_COLOR: Color32 = Color32::LIGHT_GRAY;
const LABEL_FONT_SIZE: f32 = 18.0;
const COUNTER_FONT_SIZE: f32 = 16.0;
const COUNTER_MARGIN: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayElement {
    Button { rect: PixelRect, label: &'static str },
    /// Right-aligned text whose right edge sits at `anchor.0`, vertically centred on `anchor.1`.
    Counter { anchor: (u32, u32), text: String },
}

pub fn overlay_layout(mode: Mode, generation: u64, config: &SimConfig) -> Vec<OverlayElement> {
    let mut elements = Vec::with_capacity(3);

    // Buttons only exist while the seed can still be edited
    if mode == Mode::Editing {
        elements.push(OverlayElement::Button { rect: config.start_button, label: "Start" });
        elements.push(OverlayElement::Button { rect: config.random_button, label: "Random" });
    }

    // Top-right, on the same row as the buttons but clear of both
    let start = config.start_button;
    elements.push(OverlayElement::Counter {
        anchor: (config.surface_size() - COUNTER_MARGIN, start.y + start.height / 2),
        text: format!("Generation: {}", generation),
    });

    elements
}

fn to_egui_rect(rect: &PixelRect) -> Rect {
    Rect::from_min_size(
        Pos2::new(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

pub fn paint_overlay(ctx: &egui::Context, simulation: &Simulation) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("life_overlay"),
    ));

    let layout = overlay_layout(simulation.mode(), simulation.generation(), simulation.config());
    for element in layout {
        match element {
            OverlayElement::Button { rect, label } => {
                let rect = to_egui_rect(&rect);
                painter.rect_filled(rect, 0.0, BUTTON_FILL);
                painter.text(
                    Pos2::new(rect.min.x + 5.0, rect.center().y),
                    Align2::LEFT_CENTER,
                    label,
                    FontId::proportional(LABEL_FONT_SIZE),
                    LABEL_COLOR,
                );
            }
            OverlayElement::Counter { anchor, text } => {
                painter.text(
                    Pos2::new(anchor.0 as f32, anchor.1 as f32),
                    Align2::RIGHT_CENTER,
                    text,
                    FontId::monospace(COUNTER_FONT_SIZE),
                    COUNTER_COLOR,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_shows_both_buttons() {
        let config = SimConfig::default();
        let layout = overlay_layout(Mode::Editing, 0, &config);
        assert_eq!(layout.len(), 3);
        assert_eq!(
            layout[0],
            OverlayElement::Button { rect: PixelRect::new(15, 40, 57, 20), label: "Start" }
        );
        assert_eq!(
            layout[1],
            OverlayElement::Button { rect: PixelRect::new(87, 40, 87, 20), label: "Random" }
        );
    }

    #[test]
    fn running_hides_buttons() {
        let config = SimConfig::default();
        let layout = overlay_layout(Mode::Running, 12, &config);
        assert_eq!(
            layout,
            vec![OverlayElement::Counter { anchor: (785, 50), text: "Generation: 12".to_string() }]
        );
    }

    #[test]
    fn counter_clear_of_buttons() {
        let config = SimConfig::default();
        let layout = overlay_layout(Mode::Editing, 0, &config);
        let Some(OverlayElement::Counter { anchor, .. }) = layout.last() else {
            panic!("counter missing");
        };
        // right-aligned text extends leftwards from the anchor; even a
        // generous 400px label stays right of the Random button
        assert!(anchor.0 - 400 > config.random_button.right());
        assert!(!config.start_button.contains(anchor.0, anchor.1));
    }
}
