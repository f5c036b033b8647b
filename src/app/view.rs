// SPDX-License-Identifier: MPL-2.0
//! View rendering for the simulator.
//!
//! Shows the notification screen while it is open, and an idle watch face
//! with the key legend otherwise.

use super::Message;
use crate::domain::Tick;
use crate::infrastructure::MemoryStore;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{self, Controller};
use iced::widget::{text, Column, Container};
use iced::{alignment, Background, Element, Length, Theme};
use std::cell::RefCell;
use std::rc::Rc;

/// Context required to render the simulator view.
pub struct ViewContext<'a> {
    pub screen: Option<&'a Controller<Rc<RefCell<MemoryStore>>>>,
    pub unread: bool,
    pub stored: usize,
    pub now: Tick,
}

/// Renders the open screen, or the idle face.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Some(screen) => notifications::view(screen, ctx.now).map(Message::Screen),
        None => view_idle(ctx.unread, ctx.stored),
    }
}

fn view_idle<'a>(unread: bool, stored: usize) -> Element<'a, Message> {
    let status = if unread {
        format!("{stored} stored, new arrived")
    } else {
        format!("{stored} stored")
    };

    let legend = Column::new()
        .spacing(spacing::XXS)
        .push(text("N  new message").size(typography::BODY))
        .push(text("C  incoming call").size(typography::BODY))
        .push(text("O  open from menu").size(typography::BODY))
        .push(text("Arrows  swipe").size(typography::BODY))
        .push(text("Space  tap").size(typography::BODY))
        .push(text("Esc  close").size(typography::BODY));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(text(status).size(typography::BODY).color(palette::AMBER))
        .push(legend);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(palette::BLACK)),
            text_color: Some(palette::MUTED),
            ..Default::default()
        })
        .into()
}
