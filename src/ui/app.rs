use crate::application::predict_use_case::SurvivalPredictor;
use crate::domain::prediction::Prediction;
use crate::domain::traits::Classifier;
use crate::ui::form::PassengerForm;

/// Represents actions that can be dispatched to the App.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    FocusNext,
    FocusPrev,
    Step(i32),
    ToMin,
    ToMax,
    Reset,
}

/// Form state plus the prediction for the current inputs.
pub struct App<C: Classifier> {
    pub form:      PassengerForm,
    /// Latest result; an inference failure is kept as its message
    /// so the view can show it instead of a prediction.
    pub result:    Result<Prediction, String>,
    pub image_url: String,
    pub running:   bool,
    predictor:     SurvivalPredictor<C>,
}

impl<C: Classifier> App<C> {
    pub fn new(predictor: SurvivalPredictor<C>, image_url: impl Into<String>) -> Self {
        let form = PassengerForm::default();
        let result = Self::evaluate(&predictor, &form);
        Self {
            form,
            result,
            image_url: image_url.into(),
            running: true,
            predictor,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let changed = match action {
            Action::Quit => {
                self.running = false;
                false
            }
            Action::Tick      => false,
            Action::FocusNext => { self.form.focus_next(); false }
            Action::FocusPrev => { self.form.focus_prev(); false }
            Action::Step(d)   => self.form.step(d),
            Action::ToMin     => self.form.to_min(),
            Action::ToMax     => self.form.to_max(),
            Action::Reset     => self.form.reset(),
        };
        if changed {
            self.result = Self::evaluate(&self.predictor, &self.form);
        }
    }

    fn evaluate(predictor: &SurvivalPredictor<C>, form: &PassengerForm) -> Result<Prediction, String> {
        predictor.predict(&form.passenger).map_err(|e| {
            tracing::error!("Prediction failed: {e:#}");
            format!("{e:#}")
        })
    }
}
