// ============================================================
// Layer 4 — Terminal UI (the Input Collector)
// ============================================================
// The interactive form, drawn with ratatui on a crossterm
// terminal. Every key press that changes a value re-runs the
// prediction, then the whole screen is redrawn from scratch:
//
//   draw → wait for key → dispatch (recompute) → draw → ...
//
// One thread, one interaction at a time.
//
//   form.rs  : control state, clamped to the legal ranges
//   app.rs   : form + predictor + latest result
//   event.rs : key → Action mapping
//   view.rs  : layout and widgets
//   tui.rs   : raw mode / alternate screen lifecycle

pub mod app;
pub mod event;
pub mod form;
pub mod tui;
pub mod view;

use anyhow::Result;
use std::time::Duration;

use crate::application::predict_use_case::SurvivalPredictor;
use crate::domain::traits::Classifier;
use app::App;
use event::EventHandler;
use tui::Tui;

/// Runs the form until the user quits. Dropping `tui` restores the
/// terminal on every exit path.
pub fn run<C: Classifier>(predictor: SurvivalPredictor<C>, image_url: &str) -> Result<()> {
    let mut app = App::new(predictor, image_url);
    let events = EventHandler::new(Duration::from_millis(250));
    let mut tui = Tui::new()?;

    while app.running {
        tui.draw(&app)?;
        let action = events.next()?;
        app.dispatch(action);
    }
    Ok(())
}
