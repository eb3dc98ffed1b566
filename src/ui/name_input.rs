//! Name entry field shown inside an options panel

use iced::widget::text_input;
use iced::{Element, Padding};

use crate::form::Group;

pub fn view<'a, Message: Clone + 'a>(
    group: Group,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    text_input(&format!("Name of a {}...", group.label()), value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(Padding::new(12.0))
        .size(16)
        .into()
}
