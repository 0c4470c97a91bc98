// SPDX-License-Identifier: MPL-2.0

use crate::cascader::{CascaderOption, Change, OptionKey};
use crate::config::Config;
use crate::demo::{self, Sample};
use crate::fl;
use crate::helpers;
use crate::pages;
use crate::widgets::cascader::{CascaderConfig, CascaderMessage, CascaderState, ExpandTrigger};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, about::About, icon, menu, nav_bar};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const APP_ICON: &[u8] = include_bytes!("../resources/icons/hicolor/scalable/apps/icon.svg");

/// Number of change events kept in the log.
const CHANGE_LOG_LIMIT: usize = 20;

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Contains items assigned to the nav bar panel.
    nav: nav_bar::Model,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Cosmic config context for saving
    config_context: Option<cosmic_config::Config>,

    // === App-specific state ===
    /// Cascaders shown on the gallery page, one per variant
    pub gallery: Vec<GalleryEntry>,
    /// Option tree currently shared by the gallery cascaders
    pub sample: Sample,
    /// Cascader driven by the persisted settings
    pub playground: CascaderState,
    /// Recent change events, newest first
    pub change_log: Vec<ChangeEntry>,
    /// Active notifications to display
    pub notifications: Vec<Notification>,
    /// Counter for generating unique notification IDs
    pub notification_id_counter: u32,
}

/// A gallery variant of the cascader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Click,
    Hover,
    Clearable,
    LastLevel,
    Multiple,
    MultipleCollapsed,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Click,
        Variant::Hover,
        Variant::Clearable,
        Variant::LastLevel,
        Variant::Multiple,
        Variant::MultipleCollapsed,
    ];

    /// Widget configuration for this variant.
    pub fn config(self) -> CascaderConfig {
        let base = CascaderConfig::default();
        match self {
            Variant::Click => base,
            Variant::Hover => CascaderConfig {
                expand_trigger: ExpandTrigger::Hover,
                ..base
            },
            Variant::Clearable => CascaderConfig {
                clearable: true,
                ..base
            },
            Variant::LastLevel => CascaderConfig {
                show_all_levels: false,
                ..base
            },
            Variant::Multiple => CascaderConfig {
                multiple: true,
                clearable: true,
                ..base
            },
            Variant::MultipleCollapsed => CascaderConfig {
                multiple: true,
                collapse_tags: true,
                clearable: true,
                ..base
            },
        }
    }

    pub fn title(self) -> String {
        match self {
            Variant::Click => fl!("variant-click"),
            Variant::Hover => fl!("variant-hover"),
            Variant::Clearable => fl!("variant-clearable"),
            Variant::LastLevel => fl!("variant-last-level"),
            Variant::Multiple => fl!("variant-multiple"),
            Variant::MultipleCollapsed => fl!("variant-multiple-collapsed"),
        }
    }

    pub fn description(self) -> String {
        match self {
            Variant::Click => fl!("variant-click-description"),
            Variant::Hover => fl!("variant-hover-description"),
            Variant::Clearable => fl!("variant-clearable-description"),
            Variant::LastLevel => fl!("variant-last-level-description"),
            Variant::Multiple => fl!("variant-multiple-description"),
            Variant::MultipleCollapsed => fl!("variant-multiple-collapsed-description"),
        }
    }
}

/// One cascader on the gallery page.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub variant: Variant,
    pub state: CascaderState,
}

/// A change event as shown in the log.
#[derive(Debug, Clone)]
pub struct ChangeEntry {
    pub source: String,
    pub text: String,
}

/// Notification level/type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A notification message to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u32,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation & UI
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),

    // Gallery
    Gallery(usize, CascaderMessage),
    SwapOptions,
    ClearChangeLog,

    // Playground
    Playground(CascaderMessage),
    ReloadOptions,
    OptionsLoaded(Result<Vec<CascaderOption>, String>),
    CopySelection,
    CopyResult(Result<(), String>),

    // Settings
    SetHoverTrigger(bool),
    SetShowAllLevels(bool),
    SetMultiple(bool),
    SetCollapseTags(bool),
    SetClearable(bool),
    PlaceholderChanged(String),
    OptionsFileChanged(String),

    // Notifications
    AddNotification(NotificationLevel, String, String),
    DismissNotification(u32),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.mmurphy.Cascade";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create a nav bar with three pages: Gallery, Playground and Settings
        let mut nav = nav_bar::Model::default();

        nav.insert()
            .text(fl!("gallery"))
            .data::<Page>(Page::Gallery)
            .icon(icon::from_name("view-grid-symbolic"))
            .activate();

        nav.insert()
            .text(fl!("playground"))
            .data::<Page>(Page::Playground)
            .icon(icon::from_name("applications-engineering-symbolic"));

        nav.insert()
            .text(fl!("settings"))
            .data::<Page>(Page::Settings)
            .icon(icon::from_name("preferences-system-symbolic"));

        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let config_context = cosmic_config::Config::new(Self::APP_ID, Config::VERSION).ok();
        let config = config_context
            .as_ref()
            .map(|context| match Config::get_entry(context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for error in errors {
                        tracing::warn!(%error, "invalid config entry, using default");
                    }
                    config
                }
            })
            .unwrap_or_default();

        let mut notifications = Vec::new();
        let sample = Sample::default();
        let options: Arc<[CascaderOption]> = match demo::sample_options(sample) {
            Ok(options) => options.into(),
            Err(e) => {
                tracing::error!(%e, "failed to load bundled options");
                notifications.push(Notification {
                    id: 1,
                    level: NotificationLevel::Error,
                    title: fl!("error"),
                    message: e.to_string(),
                });
                Arc::from(Vec::new())
            }
        };

        let gallery = Variant::ALL
            .into_iter()
            .map(|variant| GalleryEntry {
                variant,
                state: CascaderState::new(Arc::clone(&options), variant.config()),
            })
            .collect();

        let playground = CascaderState::new(Arc::clone(&options), config.cascader_config());
        let options_file = config.options_file.clone();

        // Construct the app model with the runtime's core.
        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            nav,
            key_binds: HashMap::new(),
            config,
            config_context,
            gallery,
            sample,
            playground,
            change_log: Vec::new(),
            notification_id_counter: notifications.len() as u32,
            notifications,
        };

        app.preselect();

        // Create a startup command that sets the window title.
        let mut commands = vec![app.update_title()];

        // Load the configured option tree for the playground
        if !options_file.is_empty() {
            commands.push(app.update(Message::ReloadOptions));
        }

        (app, Task::batch(commands))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![menu::Item::Button(fl!("about"), None, MenuAction::About)],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Enables the COSMIC application to create a nav bar with this model.
    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav)
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        let page_content: Element<_> =
            match self.nav.active_data::<Page>().unwrap_or(&Page::Gallery) {
                Page::Gallery => pages::gallery::view(self, space_s, space_m),
                Page::Playground => pages::playground::view(self, space_s, space_m),
                Page::Settings => pages::settings::view(self, space_s, space_m),
            };

        // Build view with notifications at the top if any
        let mut content_column = widget::column::with_capacity(2).spacing(space_s);

        if !self.notifications.is_empty() {
            let notifications_row = widget::row::with_children(
                self.notifications
                    .iter()
                    .map(pages::widgets::notification_toast),
            )
            .spacing(space_s);
            content_column = content_column.push(notifications_row);
        }

        content_column = content_column.push(page_content);

        widget::container(content_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(space_m)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for application configuration changes.
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                let reload = config.options_file != self.config.options_file;
                self.config = config;
                self.playground.set_config(self.config.cascader_config());
                if reload {
                    return self.update(Message::ReloadOptions);
                }
            }

            Message::LaunchUrl(url) => match open::that_detached(&url) {
                Ok(()) => {}
                Err(err) => {
                    tracing::warn!(?url, %err, "failed to open url");
                }
            },

            // Gallery
            Message::Gallery(index, cascader_msg) => {
                if let Some(entry) = self.gallery.get_mut(index) {
                    if let Some(change) = entry.state.update(cascader_msg) {
                        let source = entry.variant.title();
                        let text = describe_change(&entry.state, &change);
                        self.log_change(source, text);
                    }
                }
            }

            Message::SwapOptions => {
                let next = self.sample.next();
                match demo::sample_options(next) {
                    Ok(options) => {
                        let options: Arc<[CascaderOption]> = options.into();
                        for entry in &mut self.gallery {
                            entry.state.close();
                            entry.state.cascader.set_options(Arc::clone(&options));
                        }
                        self.sample = next;
                    }
                    Err(e) => {
                        return self.update(Message::AddNotification(
                            NotificationLevel::Error,
                            fl!("error"),
                            e.to_string(),
                        ));
                    }
                }
            }

            Message::ClearChangeLog => {
                self.change_log.clear();
            }

            // Playground
            Message::Playground(cascader_msg) => {
                if let Some(change) = self.playground.update(cascader_msg) {
                    let text = describe_change(&self.playground, &change);
                    self.log_change(fl!("playground"), text);
                }
            }

            Message::ReloadOptions => {
                let path = (!self.config.options_file.is_empty())
                    .then(|| PathBuf::from(&self.config.options_file));
                let fallback = Sample::default();

                return cosmic::task::future(async move {
                    let result = helpers::load_options(path, fallback).await;
                    cosmic::Action::App(Message::OptionsLoaded(result))
                });
            }

            Message::OptionsLoaded(result) => match result {
                Ok(options) => {
                    self.playground.close();
                    self.playground.cascader.set_options(options);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load options");
                    return self.update(Message::AddNotification(
                        NotificationLevel::Error,
                        fl!("options-load-failed"),
                        e,
                    ));
                }
            },

            Message::CopySelection => {
                if self.playground.summary().has_selection() {
                    let snapshot = self.playground.cascader.snapshot();
                    let text = describe_change(&self.playground, &snapshot);
                    return cosmic::task::future(async move {
                        let result = helpers::copy_to_clipboard(text).await;
                        cosmic::Action::App(Message::CopyResult(result))
                    });
                }
            }

            Message::CopyResult(result) => {
                return match result {
                    Ok(()) => self.update(Message::AddNotification(
                        NotificationLevel::Success,
                        fl!("selection-copied"),
                        String::new(),
                    )),
                    Err(e) => self.update(Message::AddNotification(
                        NotificationLevel::Error,
                        fl!("error"),
                        e,
                    )),
                };
            }

            // Settings
            Message::SetHoverTrigger(hover) => {
                self.config.expand_trigger = if hover {
                    ExpandTrigger::Hover
                } else {
                    ExpandTrigger::Click
                };
                return self.save_config();
            }

            Message::SetShowAllLevels(show) => {
                self.config.show_all_levels = show;
                return self.save_config();
            }

            Message::SetMultiple(multiple) => {
                self.config.multiple = multiple;
                return self.save_config();
            }

            Message::SetCollapseTags(collapse) => {
                self.config.collapse_tags = collapse;
                return self.save_config();
            }

            Message::SetClearable(clearable) => {
                self.config.clearable = clearable;
                return self.save_config();
            }

            Message::PlaceholderChanged(placeholder) => {
                self.config.placeholder = placeholder;
                return self.save_config();
            }

            Message::OptionsFileChanged(path) => {
                self.config.options_file = path;
                return self.save_config();
            }

            // Notifications
            Message::AddNotification(level, title, message) => {
                self.notification_id_counter += 1;
                self.notifications.push(Notification {
                    id: self.notification_id_counter,
                    level,
                    title,
                    message,
                });
            }

            Message::DismissNotification(id) => {
                self.notifications.retain(|n| n.id != id);
            }
        }
        Task::none()
    }

    /// Called when a nav item is selected.
    fn on_nav_select(&mut self, id: nav_bar::Id) -> Task<cosmic::Action<Self::Message>> {
        self.nav.activate(id);
        self.update_title()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let mut window_title = fl!("app-title");

        if let Some(page) = self.nav.text(self.nav.active()) {
            window_title.push_str(" — ");
            window_title.push_str(page);
        }

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Assigns initial selections to some gallery variants, as a bound value would.
    fn preselect(&mut self) {
        let keys = |parts: &[&str]| parts.iter().map(|p| OptionKey::from(*p)).collect::<Vec<_>>();

        for entry in &mut self.gallery {
            match entry.variant {
                Variant::Clearable => {
                    entry
                        .state
                        .cascader
                        .set_selected_path(keys(&["component", "form", "cascader"]));
                }
                Variant::MultipleCollapsed => {
                    let paths = vec![
                        keys(&["guide", "principles", "feedback"]),
                        keys(&["resource", "sketch"]),
                    ];
                    if let Err(err) = entry.state.cascader.set_selected_paths(paths) {
                        tracing::warn!(%err, "rejected preset selection");
                    }
                }
                _ => {}
            }
        }
    }

    /// Writes the config and applies it to the playground.
    fn save_config(&mut self) -> Task<cosmic::Action<Message>> {
        self.playground.set_config(self.config.cascader_config());

        if let Some(ref context) = self.config_context {
            if let Err(e) = self.config.write_entry(context) {
                tracing::warn!(%e, "failed to save config");
                return self.update(Message::AddNotification(
                    NotificationLevel::Error,
                    fl!("error"),
                    format!("Failed to save: {}", e),
                ));
            }
        }

        Task::none()
    }

    /// Records a change event, dropping the oldest beyond the limit.
    fn log_change(&mut self, source: String, text: String) {
        self.change_log.insert(0, ChangeEntry { source, text });
        self.change_log.truncate(CHANGE_LOG_LIMIT);
    }
}

/// Formats a change event for the log.
pub fn describe_change(state: &CascaderState, change: &Change) -> String {
    let show_all_levels = state.config().show_all_levels;
    let cascader = &state.cascader;
    let text = match change {
        Change::Single(path) => cascader.format_path(path, show_all_levels),
        Change::Multiple(paths) => paths
            .iter()
            .map(|path| cascader.format_path(path, show_all_levels))
            .collect::<Vec<_>>()
            .join("; "),
    };

    if text.is_empty() {
        fl!("selection-empty")
    } else {
        text
    }
}

/// The page to display in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Gallery,
    Playground,
    Settings,
}

/// The context page to display in the context drawer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}
