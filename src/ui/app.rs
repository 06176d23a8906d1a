use crate::api::{PredictError, SummarizeRequest, SummarizeResponse};
use crate::ui::form::{FormIntent, FormReducer, FormState, ResultsViewport};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum UiCommand {
    Submit {
        request_id: u64,
        request: SummarizeRequest,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    endpoint: String,
    /// Form state (MVI pattern).
    form: FormState,
    /// Scroll position of the result pane (view state, outside MVI).
    results_view: ResultsViewport,
    /// Channel to the request worker (resource, managed outside MVI).
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            endpoint: endpoint.into(),
            form: FormState::default(),
            results_view: ResultsViewport::default(),
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn results_view(&self) -> &ResultsViewport {
        &self.results_view
    }

    /// Form state together with the result pane viewport, for drawing.
    pub fn form_and_results_view(&mut self) -> (&FormState, &mut ResultsViewport) {
        (&self.form, &mut self.results_view)
    }

    pub fn scroll_results_down(&mut self) {
        self.results_view.scroll_down();
    }

    pub fn scroll_results_up(&mut self) {
        self.results_view.scroll_up();
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Dispatch an intent to the form reducer.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Submit the form.
    ///
    /// When the reducer starts a new request, its payload goes to the worker.
    /// If the worker can't take it, the request fails right away so the form
    /// never stays busy.
    pub fn submit(&mut self) {
        let previous = self.form.in_flight_request_id();
        self.dispatch_form(FormIntent::Submit);

        let Some(request_id) = self.form.in_flight_request_id() else {
            return;
        };
        if previous == Some(request_id) {
            return;
        }

        self.results_view.reset();
        let request = self.form.request_payload();
        tracing::debug!(request_id, "Submitting summarization request");
        if !self.send_command(UiCommand::Submit {
            request_id,
            request,
        }) {
            self.dispatch_form(FormIntent::Failed {
                request_id,
                message: "Summarization worker is not running".to_string(),
            });
        }
    }

    pub fn on_tick(&mut self) {
        if self.form.is_busy() {
            self.dispatch_form(FormIntent::AnimationTick);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        self.dispatch_form(FormIntent::Paste(text.to_string()));
    }

    /// Apply the outcome of a request.
    pub fn on_summary(
        &mut self,
        request_id: u64,
        result: Result<SummarizeResponse, PredictError>,
    ) {
        match result {
            Ok(response) => {
                if self.form.in_flight_request_id() == Some(request_id) {
                    self.results_view.reset();
                }
                self.dispatch_form(FormIntent::Completed {
                    request_id,
                    response,
                });
            }
            Err(err) => {
                tracing::warn!(request_id, error = %err, "Error generating the summary");
                self.dispatch_form(FormIntent::Failed {
                    request_id,
                    message: err.user_message(),
                });
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!("No worker attached, dropping command");
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to send command to worker");
                false
            }
        }
    }
}
