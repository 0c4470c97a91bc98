// SPDX-License-Identifier: MPL-2.0

//! Settings page view for the Cascade application.

use crate::app::{AppModel, Message};
use crate::fl;
use crate::widgets::cascader::ExpandTrigger;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget;

/// View for the Settings page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("settings"));
    let config = &app.config;

    let behavior_section = cosmic::widget::settings::section()
        .title(fl!("behavior"))
        .add(
            cosmic::widget::settings::item::builder(fl!("expand-on-hover"))
                .description(fl!("expand-on-hover-description"))
                .toggler(
                    config.expand_trigger == ExpandTrigger::Hover,
                    Message::SetHoverTrigger,
                ),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("multiple"))
                .description(fl!("multiple-description"))
                .toggler(config.multiple, Message::SetMultiple),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("clearable"))
                .description(fl!("clearable-description"))
                .toggler(config.clearable, Message::SetClearable),
        );

    let display_section = cosmic::widget::settings::section()
        .title(fl!("display"))
        .add(
            cosmic::widget::settings::item::builder(fl!("show-all-levels"))
                .description(fl!("show-all-levels-description"))
                .toggler(config.show_all_levels, Message::SetShowAllLevels),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("collapse-tags"))
                .description(fl!("collapse-tags-description"))
                .toggler(config.collapse_tags, Message::SetCollapseTags),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("placeholder"))
                .description(fl!("placeholder-description"))
                .control(
                    widget::text_input(fl!("select-placeholder"), &config.placeholder)
                        .on_input(Message::PlaceholderChanged)
                        .width(Length::Fixed(300.0)),
                ),
        );

    let options_section = cosmic::widget::settings::section()
        .title(fl!("options"))
        .add(
            cosmic::widget::settings::item::builder(fl!("options-file"))
                .description(fl!("options-file-description"))
                .control(
                    widget::row::with_capacity(2)
                        .push(
                            widget::text_input(fl!("options-file-placeholder"), &config.options_file)
                                .on_input(Message::OptionsFileChanged)
                                .width(Length::Fixed(250.0)),
                        )
                        .push(
                            widget::button::standard(fl!("reload"))
                                .on_press(Message::ReloadOptions),
                        )
                        .spacing(space_s)
                        .align_y(Alignment::Center),
                ),
        );

    widget::scrollable(
        widget::column::with_capacity(4)
            .push(header)
            .push(behavior_section)
            .push(display_section)
            .push(options_section)
            .spacing(space_m)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}
