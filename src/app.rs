//! Core application state and Iced Application implementation
//!
//! One window: the stars/planets toggles, the options panel of the active
//! toggle, a search button and the results area below.

use iced::widget::{button, checkbox, column, container, row, text, Space};
use iced::{Background, Border, Element, Length, Padding, Task, Theme};

use crate::backend::api::AstroClient;
use crate::backend::types::ResultRecord;
use crate::error::LookupError;
use crate::form::{FormState, Group};
use crate::render::ResultsPanel;
use crate::request::build_request;
use crate::ui::{name_input, results_view, theme::DarkTheme};

// ============================================================================
// Application State
// ============================================================================

pub struct Skyquery {
    form: FormState,
    results: ResultsPanel,
    client: AstroClient,
    /// Submissions started so far, used to tag log lines.
    submitted: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleChanged(Group, bool),
    NameChanged(Group, String),
    Submit,
    LookupFinished {
        seq: u64,
        group: Group,
        outcome: Result<Vec<ResultRecord>, LookupError>,
    },
    CopyHtml,
}

impl Skyquery {
    pub fn new(client: AstroClient) -> Self {
        Self {
            form: FormState::new(),
            results: ResultsPanel::default(),
            client,
            submitted: 0,
        }
    }

    pub fn title(&self) -> String {
        String::from("Skyquery")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleChanged(group, checked) => {
                self.form.toggle_changed(group, checked);
                Task::none()
            }

            Message::NameChanged(group, value) => {
                self.form.set_name(group, value);
                Task::none()
            }

            Message::Submit => self.submit(),

            Message::LookupFinished { seq, group, outcome } => {
                // Late responses still render; there is no in-flight tracking.
                match &outcome {
                    Ok(records) => tracing::info!("Lookup #{} returned {} record(s)", seq, records.len()),
                    Err(err) => tracing::warn!("Lookup #{} failed: {}", seq, err),
                }
                self.results.render_outcome(group, &outcome);
                Task::none()
            }

            Message::CopyHtml => iced::clipboard::write(self.results.to_html()),
        }
    }

    /// Validate, then hand the request to the executor.
    fn submit(&mut self) -> Task<Message> {
        let request = match build_request(&self.form) {
            Ok(request) => request,
            Err(err) => {
                tracing::info!("Submission rejected: {}", err);
                self.results.render_error(&err);
                return Task::none();
            }
        };

        self.submitted += 1;
        let seq = self.submitted;
        let group = request.group;
        tracing::info!("Lookup #{}: {} {:?}", seq, request.route, request.name);

        let client = self.client.clone();
        Task::perform(
            async move { client.lookup(&request).await },
            move |outcome| Message::LookupFinished { seq, group, outcome },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let toggles = row(Group::ALL.into_iter().map(|group| -> Element<'_, Message> {
            checkbox(group.title(), self.form.is_checked(group))
                .on_toggle(move |checked| Message::ToggleChanged(group, checked))
                .size(18)
                .into()
        }))
        .spacing(24);

        // At most one panel is ever visible.
        let panel: Element<'_, Message> = match self.form.selection().group() {
            Some(group) => self.view_panel(group),
            None => text("Pick stars or planets to start.")
                .size(14)
                .color(DarkTheme::TEXT_MUTED)
                .into(),
        };

        let actions = row![
            button(text("Search")).on_press(Message::Submit).padding(Padding::from([8.0, 16.0])),
            button(text("Copy as HTML")).on_press(Message::CopyHtml).padding(Padding::from([8.0, 16.0])),
        ]
        .spacing(8);

        let content = column![
            toggles,
            Space::with_height(12),
            panel,
            Space::with_height(12),
            actions,
            Space::with_height(16),
            results_view::view(&self.results),
        ]
        .spacing(0);

        container(container(content).padding(16).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                border: Border {
                    color: DarkTheme::BORDER,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_panel(&self, group: Group) -> Element<'_, Message> {
        container(name_input::view(
            group,
            self.form.name(group),
            move |value| Message::NameChanged(group, value),
            Message::Submit,
        ))
        .width(Length::Fill)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
