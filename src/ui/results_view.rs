//! Draws a [`ResultsPanel`]: legend first, then tables or the error line

use iced::widget::{column, container, row, scrollable, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::theme::DarkTheme;
use crate::render::{Block, ResultTable, ResultsPanel};

pub fn view<'a, Message: 'a>(panel: &'a ResultsPanel) -> Element<'a, Message> {
    let mut children: Vec<Element<'a, Message>> = vec![text(panel.legend())
        .size(14)
        .color(DarkTheme::TEXT_MUTED)
        .into()];

    children.extend(panel.blocks().iter().map(|block| match block {
        Block::Table(table) => table_view(table),
        Block::Error(message) => text(message.as_str())
            .size(15)
            .color(DarkTheme::ERROR)
            .into(),
    }));

    container(scrollable(column(children).spacing(12)).height(Length::Fill))
        .height(Length::FillPortion(1))
        .into()
}

fn table_view<'a, Message: 'a>(table: &'a ResultTable) -> Element<'a, Message> {
    let header = text(table.title.as_str()).size(17).color(DarkTheme::PRIMARY);

    let rows = table.rows.iter().map(|r| -> Element<'a, Message> {
        row![
            text(r.label.as_str())
                .size(14)
                .color(DarkTheme::TEXT_MUTED)
                .width(Length::FillPortion(2)),
            Space::with_width(8),
            text(r.value.as_str())
                .size(14)
                .color(DarkTheme::TEXT)
                .width(Length::FillPortion(3)),
        ]
        .into()
    });

    container(column![header, column(rows).spacing(4)].spacing(8))
        .padding(Padding::from([10.0, 12.0]))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE)),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
