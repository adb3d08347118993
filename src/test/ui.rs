#[cfg(test)]
mod tests {
    use chrono::Duration;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        app::{App, NotificationCenter, ui},
        models::LotPolicy,
        test::support::{ScriptedPrices, simulator},
    };

    fn app(prices: &[Decimal], title: &str) -> App<ScriptedPrices> {
        App::new(
            simulator(LotPolicy::Lots, prices),
            NotificationCenter::new(Duration::milliseconds(3000)),
            title.to_string(),
        )
    }

    fn screen(app: &App<ScriptedPrices>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| ui::render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn trade(app: &mut App<ScriptedPrices>, symbol: &str, quantity: &str, key: KeyCode) {
        for c in symbol.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        for c in quantity.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(key, KeyModifiers::NONE));
    }

    #[test]
    fn empty_dashboard_shows_placeholder() {
        let text = screen(&app(&[], "AD's Portfolio"));

        assert!(text.contains("Stock Market Dashboard"));
        assert!(text.contains("Total Investment: $10000"));
        assert!(text.contains("Current Value: $10000"));
        assert!(text.contains("Profit/Loss: $0"));
        assert!(text.contains("AD's Portfolio"));
        assert!(text.contains("No stocks in portfolio."));
    }

    #[test]
    fn holdings_and_toasts_are_rendered() {
        let mut app = app(&[dec!(50), dec!(30)], "Portfolio");
        trade(&mut app, "aapl", "10", KeyCode::F(2));
        trade(&mut app, "aapl", "5", KeyCode::F(3));

        let text = screen(&app);

        assert!(text.contains("AAPL - 5 shares @ $50 each"));
        assert!(text.contains("Total Investment: $10500"));
        assert!(text.contains("Current Value: $10250"));
        assert!(text.contains("Profit/Loss: -$250"));
        assert!(text.contains("Sold 5 shares of AAPL at $30 each"));
        assert!(text.contains("Bought 10 shares of AAPL at $50 each"));
        assert!(!text.contains("No stocks in portfolio."));
    }

    #[test]
    fn pending_input_is_echoed() {
        let mut app = app(&[], "Portfolio");
        for c in "msft".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let text = screen(&app);
        assert!(text.contains("Stock Symbol: msft_"));
        assert!(text.contains("Quantity: "));
    }
}
