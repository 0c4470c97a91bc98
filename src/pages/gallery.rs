// SPDX-License-Identifier: MPL-2.0

//! Gallery page: one cascader per supported variant over a shared tree.

use crate::app::{AppModel, Message};
use crate::demo::Sample;
use crate::fl;
use crate::widgets::cascader::CascaderView;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget;

use super::widgets::{change_log, demo_card};

/// View for the Gallery page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("gallery"));

    let sample_name = match app.sample {
        Sample::Components => fl!("sample-components"),
        Sample::Regions => fl!("sample-regions"),
    };

    let toolbar = widget::row::with_capacity(2)
        .push(widget::button::standard(fl!("swap-options")).on_press(Message::SwapOptions))
        .push(widget::text::body(fl!("current-sample", name = sample_name)))
        .spacing(space_s)
        .align_y(Alignment::Center);

    let mut cards = widget::column::with_capacity(app.gallery.len()).spacing(space_s);
    for (index, entry) in app.gallery.iter().enumerate() {
        let cascader: Element<'_, Message> =
            CascaderView::new(&entry.state, move |msg| Message::Gallery(index, msg)).into();
        cards = cards.push(demo_card(
            entry.variant.title(),
            entry.variant.description(),
            cascader,
            space_s,
        ));
    }

    widget::scrollable(
        widget::column::with_capacity(4)
            .push(header)
            .push(toolbar)
            .push(cards)
            .push(change_log(&app.change_log, space_s))
            .spacing(space_m)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}
