// SPDX-License-Identifier: MPL-2.0

//! Shared widgets for the Cascade application pages.

use crate::app::{ChangeEntry, Message, Notification, NotificationLevel};
use crate::fl;
use cosmic::iced::alignment::{Horizontal, Vertical};
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// Notification toast widget
pub fn notification_toast(notification: &Notification) -> Element<'_, Message> {
    let id = notification.id;

    let level_icon = match notification.level {
        NotificationLevel::Info => icon::from_name("dialog-information-symbolic").size(20),
        NotificationLevel::Success => icon::from_name("object-select-symbolic").size(20),
        NotificationLevel::Error => icon::from_name("dialog-error-symbolic").size(20),
    };

    let content = widget::row::with_capacity(3)
        .push(level_icon)
        .push(
            widget::column::with_capacity(2)
                .push(widget::text::body(&notification.title))
                .push_maybe(if notification.message.is_empty() {
                    None
                } else {
                    Some(widget::text::caption(&notification.message))
                })
                .spacing(2)
                .width(Length::Fill),
        )
        .push(
            widget::button::icon(icon::from_name("window-close-symbolic"))
                .on_press(Message::DismissNotification(id))
                .class(cosmic::theme::Button::Standard),
        )
        .spacing(8)
        .align_y(Alignment::Center);

    widget::container(content)
        .padding(12)
        .width(Length::Fixed(380.0))
        .class(cosmic::style::Container::Card)
        .into()
}

/// Card holding a titled demo with a short description.
pub fn demo_card<'a>(
    title: String,
    description: String,
    body: Element<'a, Message>,
    space_s: u16,
) -> Element<'a, Message> {
    let content = widget::column::with_capacity(3)
        .push(widget::text::title4(title))
        .push(widget::text::caption(description))
        .push(body)
        .spacing(space_s);

    widget::container(content)
        .padding(space_s)
        .width(Length::Fill)
        .class(cosmic::style::Container::Card)
        .into()
}

/// List of recent change events, newest first.
pub fn change_log(entries: &[ChangeEntry], space_s: u16) -> Element<'_, Message> {
    let header = widget::row::with_capacity(3)
        .push(widget::text::title4(fl!("change-log")))
        .push(widget::Space::with_width(Length::Fill))
        .push(
            widget::button::icon(icon::from_name("edit-clear-all-symbolic"))
                .on_press_maybe((!entries.is_empty()).then_some(Message::ClearChangeLog))
                .class(cosmic::theme::Button::Standard),
        )
        .align_y(Alignment::Center);

    let body: Element<'_, Message> = if entries.is_empty() {
        widget::container(widget::text::caption(fl!("change-log-empty")))
            .width(Length::Fill)
            .padding(space_s)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    } else {
        widget::column::with_children(entries.iter().map(|entry| {
            widget::row::with_capacity(2)
                .push(
                    widget::text::caption(&entry.source)
                        .class(cosmic::style::Text::Accent)
                        .width(Length::Fixed(160.0)),
                )
                .push(widget::text::body(&entry.text))
                .spacing(8)
                .into()
        }))
        .spacing(4)
        .into()
    };

    widget::container(
        widget::column::with_capacity(2)
            .push(header)
            .push(body)
            .spacing(space_s),
    )
    .padding(space_s)
    .width(Length::Fill)
    .class(cosmic::style::Container::Card)
    .into()
}
