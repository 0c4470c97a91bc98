// SPDX-License-Identifier: MPL-2.0

//! Playground page: a cascader configured from the settings page.

use crate::app::{AppModel, Message};
use crate::cascader::{Change, SelectionPath};
use crate::fl;
use crate::widgets::cascader::CascaderView;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

use super::widgets::change_log;

/// Renders raw keys, as a bound value would hold them.
fn keys_text(path: &SelectionPath) -> String {
    let keys: Vec<String> = path.iter().map(ToString::to_string).collect();
    format!("[{}]", keys.join(", "))
}

/// View for the Playground page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("playground"));

    let source = if app.config.options_file.is_empty() {
        fl!("options-bundled")
    } else {
        app.config.options_file.clone()
    };

    let toolbar = widget::row::with_capacity(3)
        .push(
            widget::button::icon(icon::from_name("view-refresh-symbolic"))
                .on_press(Message::ReloadOptions)
                .class(cosmic::theme::Button::Standard),
        )
        .push(widget::text::caption(fl!("options-source", source = source)))
        .spacing(space_s)
        .align_y(Alignment::Center);

    let has_selection = app.playground.summary().has_selection();
    let cascader = widget::row::with_capacity(2)
        .push(
            CascaderView::new(&app.playground, Message::Playground)
                .width(Length::Fixed(420.0)),
        )
        .push(
            widget::button::standard(fl!("copy-selection"))
                .on_press_maybe(has_selection.then_some(Message::CopySelection)),
        )
        .spacing(space_s)
        .align_y(Alignment::Center);

    let value = match app.playground.cascader.snapshot() {
        Change::Single(path) => keys_text(&path),
        Change::Multiple(paths) => {
            let paths: Vec<String> = paths.iter().map(keys_text).collect();
            format!("[{}]", paths.join(", "))
        }
    };

    let value_row = widget::row::with_capacity(2)
        .push(widget::text::body(fl!("bound-value")))
        .push(widget::text::monotext(value))
        .spacing(space_s)
        .align_y(Alignment::Center);

    widget::scrollable(
        widget::column::with_capacity(5)
            .push(header)
            .push(toolbar)
            .push(cascader)
            .push(value_row)
            .push(change_log(&app.change_log, space_s))
            .spacing(space_m)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascader::OptionKey;

    #[test]
    fn keys_render_as_a_list() {
        let path = vec![OptionKey::from("zhinan"), OptionKey::from(3)];
        assert_eq!(keys_text(&path), "[zhinan, 3]");
        assert_eq!(keys_text(&Vec::new()), "[]");
    }
}
