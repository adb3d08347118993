use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use rust_decimal::Decimal;

use crate::{
    app::{App, price::PriceSource, utils::format_money},
    models::{InputField, NotificationKind},
};

const TOAST_WIDTH: u16 = 50;
const TOAST_HEIGHT: u16 = 3;

pub fn render<P: PriceSource>(frame: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let title = Paragraph::new("Stock Market Dashboard")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_summary(frame, app, chunks[1]);
    render_trade_form(frame, app, chunks[2]);
    render_portfolio(frame, app, chunks[3]);
    render_notifications(frame, app, frame.area());
}

fn render_summary<P: PriceSource>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let totals = app.simulator().totals();
    let profit_loss = totals.profit_loss();

    let color_profit_loss = if profit_loss >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    };

    let lines = vec![
        Line::from(format!(
            "Total Investment: {}",
            format_money(*totals.total_investment())
        )),
        Line::from(format!(
            "Current Value: {}",
            format_money(*totals.current_value())
        )),
        Line::from(vec![
            Span::raw("Profit/Loss: "),
            Span::styled(
                format_money(profit_loss),
                Style::default().fg(color_profit_loss),
            ),
        ]),
    ];

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title("Portfolio Summary")
            .borders(Borders::ALL),
    );
    frame.render_widget(summary, area);
}

fn render_trade_form<P: PriceSource>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let input = app.simulator().input();

    let field_line = |label: &'static str, value: &str, field: InputField| {
        let style = if app.focus() == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if app.focus() == field { "_" } else { "" };
        Line::from(vec![
            Span::styled(label, style),
            Span::raw(format!("{}{}", value, cursor)),
        ])
    };

    let lines = vec![
        field_line("Stock Symbol: ", input.symbol(), InputField::Symbol),
        field_line("Quantity: ", input.quantity(), InputField::Quantity),
        Line::from(vec![
            Span::styled("[F2] Buy", Style::default().fg(Color::Green)),
            Span::raw("  "),
            Span::styled("[F3] Sell", Style::default().fg(Color::Red)),
            Span::raw("  [Tab] Switch field  [Esc] Quit"),
        ]),
    ];

    let form = Paragraph::new(lines).block(
        Block::default()
            .title("Simulate Trade")
            .borders(Borders::ALL),
    );
    frame.render_widget(form, area);
}

fn render_portfolio<P: PriceSource>(frame: &mut Frame, app: &App<P>, area: Rect) {
    let block = Block::default()
        .title(app.portfolio_title().to_string())
        .borders(Borders::ALL);
    let holdings = app.simulator().holdings();

    if holdings.is_empty() {
        let empty_message = Paragraph::new("No stocks in portfolio.")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(empty_message, area);
        return;
    }

    let items: Vec<ListItem> = holdings
        .iter()
        .map(|holding| {
            ListItem::new(format!(
                "{} - {} shares @ {} each",
                holding.symbol().to_uppercase(),
                holding.quantity(),
                format_money(*holding.price_per_share())
            ))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_notifications<P: PriceSource>(frame: &mut Frame, app: &App<P>, area: Rect) {
    if app.notifications().is_empty() {
        return;
    }

    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let mut y = area.y + 1;

    for notification in app.notifications().active() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }

        let color = match notification.kind() {
            NotificationKind::Success => Color::Green,
            NotificationKind::Warning => Color::Yellow,
            NotificationKind::Error => Color::Red,
        };

        let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
        let toast = Paragraph::new(notification.message().as_str())
            .style(Style::default().fg(color))
            .block(
                Block::default()
                    .title(notification.kind().to_string())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(Clear, toast_area);
        frame.render_widget(toast, toast_area);
        y += TOAST_HEIGHT;
    }
}
