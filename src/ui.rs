pub mod charting;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Widget, Wrap,
    },
};

use crate::{metrics, App};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = &self.engine.state;

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);
        let green_style = Style::default().fg(Color::Green);
        let status_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(7), // metric cards
                Constraint::Min(8),    // chart + summary
                Constraint::Length(2), // footer
            ])
            .split(area);

        // header: title + live indicator
        let mode_span = if self.engine.is_running() {
            Span::styled("● Live Monitoring", green_style.patch(bold_style))
        } else {
            Span::styled("○ Idle", dim_style)
        };
        let header = Paragraph::new(vec![
            Line::from(Span::styled("Carbon-Aware Workload Dashboard", bold_style)),
            Line::from(vec![
                Span::styled("Simulated environmental impact  ", dim_style),
                mode_span,
            ]),
        ]);
        header.render(chunks[0], buf);

        // metric cards
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(chunks[1]);

        metric_card(
            "Job Runtime",
            metrics::format_runtime(state.runtime_hours),
            "",
            self.engine.mode().to_string(),
        )
        .render(cards[0], buf);

        metric_card(
            "Energy Consumed",
            format!("{:.2}", state.energy_rate_kwh),
            "kWh",
            format!("{:.1} kW avg", metrics::avg_power_kw(state.energy_rate_kwh)),
        )
        .render(cards[1], buf);

        metric_card(
            "Carbon Emission",
            format!("{:.2}", state.carbon_rate_kg),
            "kg CO2",
            format!(
                "{:.0}% intensity",
                metrics::carbon_intensity(state.carbon_rate_kg, state.energy_rate_kwh)
            ),
        )
        .render(cards[2], buf);

        let progress_label = if state.progress_percent < 100.0 {
            format!("{:.0}% Processing", state.progress_percent)
        } else {
            "100% Complete".to_string()
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Progress"))
            .gauge_style(green_style)
            .ratio((state.progress_percent / 100.0).clamp(0.0, 1.0))
            .label(progress_label);
        gauge.render(cards[3], buf);

        // chart + session summary
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(chunks[2]);

        let (energy_series, carbon_series) = charting::series(&state.history);
        let datasets = vec![
            Dataset::default()
                .name("energy (kWh)")
                .marker(ratatui::symbols::Marker::Braille)
                .style(Style::default().fg(Color::Yellow))
                .graph_type(GraphType::Line)
                .data(&energy_series),
            Dataset::default()
                .name("carbon (kg)")
                .marker(ratatui::symbols::Marker::Braille)
                .style(green_style)
                .graph_type(GraphType::Line)
                .data(&carbon_series),
        ];

        let (first_label, last_label) = charting::x_labels(&state.history);
        let y_upper = charting::y_upper(&state.history);
        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Emissions (last 20 samples)"),
            )
            .x_axis(
                Axis::default()
                    .bounds(charting::x_bounds(&state.history))
                    .labels(vec![
                        Span::styled(first_label, bold_style),
                        Span::styled(last_label, bold_style),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, y_upper])
                    .labels(vec![
                        Span::styled("0", bold_style),
                        Span::styled(charting::format_label(y_upper), bold_style),
                    ]),
            );
        chart.render(body[0], buf);

        let summary = Paragraph::new(vec![
            Line::from(format!("Total Runtime:   {:.1}h", state.runtime_hours)),
            Line::from(format!(
                "Avg Energy Rate: {:.2} kWh",
                metrics::avg_energy(&state.history)
            )),
            Line::from(format!(
                "Total Carbon:    {:.2} kg CO2",
                metrics::total_carbon(&state.history)
            )),
            Line::from(format!("Data Points:     {}", state.history.len())),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Session Summary"),
        );
        summary.render(body[1], buf);

        // footer: key legend plus transient status line
        let toggle = if self.engine.is_running() {
            "(s) pause"
        } else {
            "(s) start"
        };
        let legend = Paragraph::new(Span::styled(
            format!("{} / (r)eset / (d)ownload report / (q)uit", toggle),
            italic_style,
        ));
        let footer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(chunks[3]);
        legend.render(footer[0], buf);

        if let Some(status) = &self.status {
            Paragraph::new(Span::styled(status.text.clone(), status_style))
                .alignment(Alignment::Left)
                .wrap(Wrap { trim: true })
                .render(footer[1], buf);
        }
    }
}

fn metric_card(
    title: &str,
    value: String,
    unit: &str,
    trend: String,
) -> Paragraph<'static> {
    let value_line = if unit.is_empty() {
        Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(
                unit.to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
    };

    Paragraph::new(vec![
        value_line,
        Line::from(Span::styled(
            trend,
            Style::default()
                .add_modifier(Modifier::DIM)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    )
}
