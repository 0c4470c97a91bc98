// SPDX-License-Identifier: MPL-2.0

//! Cascader widget builder and rendering.

use super::message::CascaderMessage;
use super::state::{CascaderState, ExpandTrigger};
use crate::cascader::{CascaderOption, Menu, Mode, OptionKey, Summary};
use crate::fl;
use cosmic::iced::widget::MouseArea;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon, popover};

/// Builder for the cascader widget.
///
/// Renders a display box showing the selection. Pressing it opens a popover
/// with one column per level of the option tree.
///
/// # Example
///
/// ```ignore
/// CascaderView::new(&self.cascader_state, Message::Cascader)
///     .width(Length::Fixed(320.0))
///     .column_width(Length::Fixed(180.0))
///     .into()
/// ```
pub struct CascaderView<'a, Message>
where
    Message: Clone + 'static,
{
    state: &'a CascaderState,
    on_message: Box<dyn Fn(CascaderMessage) -> Message + 'a>,
    width: Length,
    column_width: Length,
    column_height: Length,
    spacing: u16,
}

impl<'a, Message> CascaderView<'a, Message>
where
    Message: Clone + 'static,
{
    /// Creates a new cascader widget.
    ///
    /// # Arguments
    ///
    /// - `state`: The cascader state (owned by parent)
    /// - `on_message`: Function to wrap `CascaderMessage` into the parent's `Message` type
    pub fn new(
        state: &'a CascaderState,
        on_message: impl Fn(CascaderMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            on_message: Box::new(on_message),
            width: Length::Fixed(300.0),
            column_width: Length::Fixed(180.0),
            column_height: Length::Fixed(240.0),
            spacing: 4,
        }
    }

    /// Sets the width of the display box.
    ///
    /// Default is `Length::Fixed(300.0)`.
    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Sets the width of each column in the popover.
    ///
    /// Default is `Length::Fixed(180.0)`.
    pub fn column_width(mut self, width: Length) -> Self {
        self.column_width = width;
        self
    }

    /// Sets the height of each column in the popover.
    ///
    /// Default is `Length::Fixed(240.0)`.
    pub fn column_height(mut self, height: Length) -> Self {
        self.column_height = height;
        self
    }

    /// Sets the spacing between columns.
    ///
    /// Default is 4.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Renders the contents of the display box.
    fn render_summary(&self) -> Element<'a, Message> {
        match self.state.summary() {
            Summary::Placeholder => {
                let placeholder = self
                    .state
                    .config()
                    .placeholder
                    .clone()
                    .unwrap_or_else(|| fl!("select-placeholder"));
                widget::text::body(placeholder)
                    .class(cosmic::style::Text::Accent)
                    .into()
            }
            Summary::Single(text) => widget::text::body(text).into(),
            Summary::Tags(tags) => widget::row::with_children(tags.into_iter().map(|tag| {
                widget::container(widget::text::caption(tag))
                    .padding([2, 8])
                    .class(cosmic::style::Container::Primary)
                    .into()
            }))
            .spacing(4)
            .into(),
            Summary::Collapsed(count) => {
                widget::text::body(fl!("selected-count", count = count)).into()
            }
        }
    }

    /// Renders the display box that toggles the popover.
    fn render_display(&self) -> Element<'a, Message> {
        let on_message = &self.on_message;

        let mut row = widget::row::with_capacity(3)
            .push(
                widget::container(self.render_summary()).width(Length::Fill),
            )
            .align_y(Alignment::Center)
            .spacing(8);

        if self.state.show_clear() {
            row = row.push(
                widget::button::icon(icon::from_name("edit-clear-symbolic"))
                    .on_press(on_message(CascaderMessage::Clear))
                    .class(cosmic::theme::Button::Standard),
            );
        }

        let arrow = if self.state.is_open() {
            "pan-up-symbolic"
        } else {
            "pan-down-symbolic"
        };
        row = row.push(icon::from_name(arrow).size(16));

        widget::mouse_area(
            widget::container(row)
                .padding([6, 10])
                .width(self.width)
                .class(cosmic::style::Container::Card),
        )
        .on_press(on_message(CascaderMessage::Toggle))
        .into()
    }

    /// Renders a single option.
    fn render_option(
        option: &CascaderOption,
        is_active: bool,
        is_checked: bool,
    ) -> Element<'a, Message> {
        let label = option.label.clone();

        let mut row = widget::row::with_capacity(2)
            .push(widget::text::body(label).width(Length::Fill))
            .align_y(Alignment::Center)
            .spacing(8);

        if option.disabled {
            row = row.push(icon::from_name("action-unavailable-symbolic").size(12));
        } else if option.is_branch() {
            row = row.push(icon::from_name("go-next-symbolic").size(12));
        } else if is_checked {
            row = row.push(icon::from_name("object-select-symbolic").size(16));
        }

        let container_class = if is_active {
            cosmic::style::Container::Primary
        } else {
            cosmic::style::Container::default()
        };

        widget::container(row)
            .padding([6, 10])
            .width(Length::Fill)
            .class(container_class)
            .into()
    }

    /// Returns true if the leaf at the end of `path` is part of the selection.
    fn is_checked(&self, path: &[OptionKey]) -> bool {
        let cascader = &self.state.cascader;
        match cascader.mode() {
            Mode::Single => cascader.selected_path() == path,
            Mode::Multiple => cascader.selection().contains(path),
        }
    }

    /// Renders a single column of options.
    fn render_column(&self, menu: &Menu<'_>, prefix: &[OptionKey]) -> Element<'a, Message> {
        let cascader = &self.state.cascader;
        let on_message = &self.on_message;
        let hover = self.state.config().expand_trigger == ExpandTrigger::Hover;

        if menu.options.is_empty() {
            return widget::container(widget::text::caption(fl!("no-options")))
                .padding(16)
                .width(self.column_width)
                .align_x(cosmic::iced::alignment::Horizontal::Center)
                .into();
        }

        let mut column = widget::column::with_capacity(menu.options.len()).spacing(2);

        for (index, option) in menu.options.iter().enumerate() {
            let is_checked = option.is_leaf() && {
                let mut path = prefix.to_vec();
                path.push(option.key());
                self.is_checked(&path)
            };
            let item = Self::render_option(option, menu.is_active(index), is_checked);

            // Disabled options are inert: they get no handlers at all.
            if option.disabled {
                column = column.push(item);
                continue;
            }

            let target = cascader.option_ref(menu.level, index);
            let mut area: MouseArea<'a, Message, cosmic::Theme, cosmic::Renderer> =
                cosmic::iced::widget::mouse_area(item)
                    .on_press(on_message(CascaderMessage::Activate(target)));
            if hover && option.is_branch() {
                area = area.on_enter(on_message(CascaderMessage::Hover(target)));
            }
            column = column.push(area);
        }

        widget::scrollable(column)
            .width(self.column_width)
            .height(self.column_height)
            .into()
    }

    /// Renders the popover content: every visible column side by side.
    fn render_menus(&self) -> Element<'a, Message> {
        let cascader = &self.state.cascader;
        let menus = cascader.menus();
        let path_keys: Vec<OptionKey> = cascader
            .current_path()
            .into_iter()
            .map(CascaderOption::key)
            .collect();

        let mut row = widget::row::with_capacity(menus.len()).spacing(self.spacing);

        for menu in &menus {
            let prefix = &path_keys[..menu.level.min(path_keys.len())];
            row = row.push(
                widget::container(self.render_column(menu, prefix))
                    .class(cosmic::style::Container::Card)
                    .height(self.column_height),
            );
        }

        widget::container(row)
            .padding(4)
            .class(cosmic::style::Container::Card)
            .into()
    }

    /// Builds the widget and returns it as an Element.
    pub fn build(self) -> Element<'a, Message> {
        let display = self.render_display();

        if !self.state.is_open() {
            return display;
        }

        let dismiss = (self.on_message)(CascaderMessage::Dismiss);
        popover(display)
            .popup(self.render_menus())
            .position(popover::Position::Bottom)
            .on_close(dismiss)
            .into()
    }
}

impl<'a, Message> From<CascaderView<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'static,
{
    fn from(cascader: CascaderView<'a, Message>) -> Self {
        cascader.build()
    }
}
