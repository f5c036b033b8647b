// SPDX-License-Identifier: MPL-2.0
//! Rendering of the notification screen.
//!
//! Layout follows the watch face: a header band with the scrolling title and
//! the `n/total` counter, the message area below it and, for incoming calls,
//! a row of three square call buttons. In preview mode a thin countdown bar
//! runs along the top edge.

use super::call::CallAction;
use super::controller::Controller;
use super::item::{Affordances, ViewItem, CALL_HEADING};
use crate::application::port::NotificationStore;
use crate::domain::Tick;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Background, Color, Element, Length, Padding, Theme};

/// Messages emitted by the notification screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// One of the call buttons was pressed.
    Call(CallAction),
}

/// Renders the screen at `now`.
pub fn view<'a, S: NotificationStore>(controller: &'a Controller<S>, now: Tick) -> Element<'a, Message> {
    let width = f32::from(controller.settings().screen_width);
    let item = controller.item();

    let mut screen = Column::new().width(Length::Fill).height(Length::Fill);
    screen = screen.push(timeout_bar(controller.timeout_remaining(now)));
    screen = screen.push(header(item));
    screen = screen.push(subject(item));
    if item.affordances().has_call_buttons() {
        screen = screen.push(call_buttons(width));
    }

    let offset = slide_offset(item.dismiss_progress(now), width);
    let sliding = Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: offset,
            ..Padding::ZERO
        });

    Container::new(sliding)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .clip(true)
        .style(|_theme: &Theme| solid(palette::BLACK))
        .into()
}

/// Horizontal shift of the sliding item, in pixels.
fn slide_offset(progress: f32, width: f32) -> f32 {
    progress.clamp(0.0, 1.0) * width
}

fn timeout_bar<'a>(remaining: Option<u16>) -> Element<'a, Message> {
    let Some(remaining) = remaining else {
        return Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TIMEOUT_BAR))
            .into();
    };
    Container::new(Space::new())
        .width(Length::Fixed(f32::from(remaining)))
        .height(Length::Fixed(sizing::TIMEOUT_BAR))
        .style(|_theme: &Theme| solid(palette::WHITE))
        .into()
}

fn header<'a>(item: &ViewItem) -> Element<'a, Message> {
    let model = item.model();
    let title = text(model.title().to_owned())
        .size(typography::BODY)
        .color(palette::MUTED)
        .width(Length::Fixed(sizing::TITLE_WIDTH));
    let counter = text(model.counter())
        .size(typography::BODY)
        .color(palette::WHITE);

    Container::new(
        Row::new()
            .push(title)
            .push(Space::new().width(Length::Fill))
            .push(counter)
            .align_y(alignment::Vertical::Top),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HEADER_HEIGHT - sizing::TIMEOUT_BAR))
    .padding(Padding {
        top: spacing::MD - sizing::TIMEOUT_BAR,
        ..Padding::ZERO
    })
    .into()
}

fn subject<'a>(item: &ViewItem) -> Element<'a, Message> {
    let body = item.model().body().to_owned();
    let (content, height) = match item.affordances() {
        Affordances::IncomingCall(_) => (
            Column::new()
                .spacing(spacing::XXS)
                .push(text(CALL_HEADING).size(typography::BODY).color(palette::AMBER))
                .push(text(body).size(typography::BODY).color(palette::WHITE)),
            Length::Fixed(sizing::CALL_SUBJECT_HEIGHT),
        ),
        Affordances::PlainMessage => (
            Column::new().push(text(body).size(typography::BODY).color(palette::AMBER)),
            Length::Fill,
        ),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(height)
        .padding(spacing::XS)
        .style(|_theme: &Theme| solid(palette::SUBJECT_BG))
        .into()
}

fn call_buttons<'a>(width: f32) -> Element<'a, Message> {
    let gap = ((width - sizing::CALL_BUTTON * 3.0) / 2.0).max(0.0);
    let buttons = CallAction::ALL.iter().copied().map(|action| {
        let color = call_button_color(action);
        button(
            Container::new(text(call_button_label(action)).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fixed(sizing::CALL_BUTTON))
        .height(Length::Fixed(sizing::CALL_BUTTON))
        .on_press(Message::Call(action))
        .style(move |_theme: &Theme, status| call_button_style(color, status))
        .into()
    });

    Container::new(
        Row::with_children(buttons.collect::<Vec<Element<'a, Message>>>())
            .spacing(gap),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Bottom)
    .into()
}

fn call_button_label(action: CallAction) -> &'static str {
    match action {
        CallAction::Accept => "Accept",
        CallAction::Reject => "Reject",
        CallAction::Mute => "Mute",
    }
}

fn call_button_color(action: CallAction) -> Color {
    match action {
        CallAction::Accept => palette::ACCEPT,
        CallAction::Reject => palette::REJECT,
        CallAction::Mute => palette::MUTED,
    }
}

fn call_button_style(color: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Pressed => Color { a: 0.7, ..color },
        _ => color,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        ..button::Style::default()
    }
}

fn solid(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}
