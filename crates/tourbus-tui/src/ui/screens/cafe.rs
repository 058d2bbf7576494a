//! Passenger cafe: menu, basket, checkout and confirmation

use ratatui::prelude::*;
use ratatui::widgets::{Clear, List, ListItem, Paragraph, Wrap};
use tourbus_core::cafe::{format_price, Cart, Category, CheckoutStep, PaymentMethod};

use super::field;
use crate::app::{App, CafeField};
use crate::ui::layout::{centered_rect, rows, section_block, section_block_focused, two_column_layout};
use crate::ui::Theme;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    match app.cafe.step() {
        CheckoutStep::Basket => draw_basket(frame, area, app),
        CheckoutStep::Checkout => draw_checkout(frame, area, app),
        CheckoutStep::Success => draw_success(frame, area, app),
    }
}

fn draw_basket(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let view = &app.state.cafe;
    let (left, right) = two_column_layout(area, 58);

    let block = section_block_focused("Μενού", theme);
    let inner = block.inner(left);
    frame.render_widget(block, left);
    let chunks = rows(inner, &[2]);

    let tabs: Vec<Span> = Category::ALL
        .iter()
        .flat_map(|category| {
            let active = *category == view.category();
            [
                Span::styled(format!(" {} ", category.label()), theme.menu_item(active)),
                Span::raw(" "),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(tabs)), chunks[0]);

    let items: Vec<ListItem> = view
        .items()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == view.item_index;
            let marker = if selected { "▸" } else { " " };
            let quantity = app.cafe.cart().quantity(item.id);
            let mut head = vec![
                Span::styled(format!(" {} {}", marker, item.name), theme.menu_item(selected)),
                Span::styled(format!("  {}", format_price(item.price_cents)), theme.text()),
                Span::styled(format!("  ★ {:.1}", item.rating), theme.warning()),
            ];
            if quantity > 0 {
                head.push(Span::styled(format!("  ×{}", quantity), theme.success()));
            }
            ListItem::new(vec![
                Line::from(head),
                Line::styled(format!("     {}", item.description), theme.text_secondary()),
            ])
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    let cart = app.cafe.cart();
    let mut lines = Vec::new();
    if cart.is_empty() {
        lines.push(Line::styled("Το καλάθι σου είναι άδειο", theme.text()));
        lines.push(Line::styled(
            "Διάλεξε κάτι από το μενού για να ξεκινήσεις.",
            theme.text_muted(),
        ));
    } else {
        lines.extend(cart_lines(cart, theme));
        lines.push(Line::raw(""));
        lines.push(Line::styled("Συνέχεια στο Checkout [o]", theme.text_highlight()));
    }
    let basket = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section_block(CheckoutStep::Basket.title(), theme));
    frame.render_widget(basket, right);
}

fn draw_checkout(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let details = &app.cafe.details;
    let focus = app.state.cafe.field;
    let (left, right) = two_column_layout(area, 58);

    let block = section_block_focused(CheckoutStep::Checkout.title(), theme);
    let inner = block.inner(left);
    frame.render_widget(block, left);
    let chunks = rows(inner, &[3, 3, 3, 3]);

    render_text_field(
        frame,
        chunks[0],
        ("Ονοματεπώνυμο", "Π.χ. Γιώργος Παπαδόπουλος"),
        &details.customer_name,
        focus == CafeField::Name,
        theme,
    );
    render_text_field(
        frame,
        chunks[1],
        ("Θέση", "Π.χ. 12B"),
        &details.seat_number,
        focus == CafeField::Seat,
        theme,
    );
    render_text_field(
        frame,
        chunks[2],
        ("Σημειώσεις", "Π.χ. Χωρίς ζάχαρη"),
        &details.notes,
        focus == CafeField::Notes,
        theme,
    );

    let focused = focus == CafeField::Payment;
    let options: Vec<Span> = [PaymentMethod::Card, PaymentMethod::Cash]
        .into_iter()
        .map(|method| {
            let chosen = method == details.payment;
            let mark = if chosen { "◉" } else { "○" };
            Span::styled(format!(" {} {}  ", mark, method.label()), theme.menu_item(chosen))
        })
        .collect();
    let payment_block = if focused {
        section_block_focused("Τρόπος Πληρωμής", theme)
    } else {
        section_block("Τρόπος Πληρωμής", theme)
    };
    frame.render_widget(
        Paragraph::new(Line::from(options)).block(payment_block),
        chunks[3],
    );

    let mut lines = vec![Line::styled(details.recipient(), theme.text_secondary()), Line::raw("")];
    lines.extend(cart_lines(app.cafe.cart(), theme));
    lines.push(Line::raw(""));
    lines.push(Line::styled("Ολοκλήρωση Παραγγελίας [Enter]", theme.text_highlight()));
    let summary = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section_block(CheckoutStep::Basket.title(), theme));
    frame.render_widget(summary, right);
}

fn draw_success(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let dialog = centered_rect(60, 60, area);
    frame.render_widget(Clear, dialog);

    let number = app.cafe.order_number().unwrap_or_default();
    let text = vec![
        Line::styled("✓ Ευχαριστούμε για την παραγγελία!", theme.success()),
        Line::raw(""),
        Line::styled(format!("Αριθμός παραγγελίας {}", number), theme.title()),
        Line::styled(app.cafe.details.recipient(), theme.text()),
        field(
            "Σύνολο",
            format_price(app.cafe.cart().total_cents()),
            theme,
        ),
        field("Πληρωμή", app.cafe.details.payment.label(), theme),
        Line::raw(""),
        Line::styled("Θα τη λάβεις στη θέση σου σε λίγα λεπτά.", theme.text_secondary()),
        Line::raw(""),
        Line::styled("Νέα παραγγελία [Enter]", theme.text_highlight()),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(section_block_focused(CheckoutStep::Success.title(), theme));
    frame.render_widget(paragraph, dialog);
}

/// Basket lines followed by the totals
fn cart_lines<'a>(cart: &Cart, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = cart
        .lines()
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(format!("{}× {}", line.quantity, line.item.name), theme.text()),
                Span::styled(
                    format!("  {}", format_price(line.line_total_cents())),
                    theme.text_secondary(),
                ),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(field("Υποσύνολο", format_price(cart.subtotal_cents()), theme));
    lines.push(field("Service", format_price(cart.service_fee_cents()), theme));
    lines.push(Line::styled(
        format!("Σύνολο: {}", format_price(cart.total_cents())),
        theme.title(),
    ));
    lines
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    (label, placeholder): (&str, &str),
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let block = if focused {
        section_block_focused(label, theme)
    } else {
        section_block(label, theme)
    };
    let cursor = if focused { "▏" } else { "" };
    let line = if value.is_empty() {
        Line::from(vec![
            Span::raw(cursor),
            Span::styled(placeholder.to_string(), theme.text_muted()),
        ])
    } else {
        Line::styled(format!("{}{}", value, cursor), theme.input(focused))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);
}
