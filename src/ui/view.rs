use crate::domain::prediction::Prediction;
use crate::domain::traits::Classifier;
use crate::ui::app::App;
use crate::ui::form::{Field, PassengerForm};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

pub const TITLE: &str = "Titanic Survival Predictor";
pub const SUBTITLE: &str = "Will you survive the Titanic disaster? Let's find out!";
pub const IMAGE_CAPTION: &str = "The RMS Titanic";
const HELP: &str =
    " Tab/↑↓ move · ←→ adjust · PgUp/PgDn ±10 · Home/End bounds · r reset · q quit ";

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn render<C: Classifier>(app: &App<C>, frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + subtitle
            Constraint::Length(9), // Image | radio groups
            Constraint::Length(3), // Age | SibSp | Parch
            Constraint::Length(3), // Fare
            Constraint::Min(5),    // Results
            Constraint::Length(1), // Help
        ])
        .split(frame.size());

    render_header(frame, rows[0]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    render_image(frame, top[0], &app.image_url);
    render_radios(frame, top[1], &app.form);

    let sliders = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(rows[2]);
    render_slider(frame, sliders[0], &app.form, Field::Age);
    render_slider(frame, sliders[1], &app.form, Field::SibSp);
    render_slider(frame, sliders[2], &app.form, Field::Parch);
    render_slider(frame, rows[3], &app.form, Field::Fare);

    render_result(frame, rows[4], &app.result);

    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        rows[5],
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(paragraph, area);
}

// A terminal can't show the photo, so link to it instead.
fn render_image(frame: &mut Frame, area: Rect, url: &str) {
    let lines = vec![
        Line::from(Span::styled(IMAGE_CAPTION, Style::default().add_modifier(Modifier::ITALIC))),
        Line::from(""),
        Line::from(Span::styled(url, Style::default().fg(Color::Blue))),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Image "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn radio_line(form: &PassengerForm, field: Field) -> Line<'static> {
    let focused = form.focus == field;
    let marker = if focused { "▶ " } else { "  " };
    let mut spans = vec![Span::styled(
        format!("{marker}{}: ", field.label()),
        focus_style(focused),
    )];
    if let Some((labels, selected)) = form.options(field) {
        for (i, label) in labels.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            if i == selected {
                spans.push(Span::styled(
                    format!("(•) {label}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw(format!("( ) {label}")));
            }
        }
    }
    Line::from(spans)
}

fn render_radios(frame: &mut Frame, area: Rect, form: &PassengerForm) {
    let lines = vec![
        radio_line(form, Field::Sex),
        Line::from(""),
        radio_line(form, Field::TicketClass),
        Line::from(""),
        radio_line(form, Field::Embarked),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Input Passenger Details "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_slider(frame: &mut Frame, area: Rect, form: &PassengerForm, field: Field) {
    let (Some(range), Some(value)) = (field.range(), form.value(field)) else {
        return;
    };
    let span = f64::from(range.end() - range.start());
    let ratio = if span > 0.0 { f64::from(value - range.start()) / span } else { 0.0 };

    let focused = form.focus == field;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused))
        .title(format!(" {} [{}-{}] ", field.label(), range.start(), range.end()));
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(value.to_string());
    frame.render_widget(gauge, area);
}

fn render_result(frame: &mut Frame, area: Rect, result: &Result<Prediction, String>) {
    let block = Block::default().borders(Borders::ALL).title(" Prediction Results ");
    let lines = match result {
        Ok(prediction) => {
            let color = if prediction.survived() { Color::Green } else { Color::Red };
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    prediction.outcome.message(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::raw("Prediction Confidence: "),
                    Span::styled(
                        format!("{:.2}%", prediction.confidence),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
            ]
        }
        Err(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Prediction failed: {message}"),
                Style::default().fg(Color::Red),
            )),
        ],
    };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
