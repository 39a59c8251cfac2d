//! Application shell.
//!
//! Composes the app bar, drawer, page and dialogs, and owns the navigation
//! controller. Components only ever produce [`Action`]s; this component is the
//! one place where actions turn into navigation state changes.

use crate::config::Config;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::nav::{Location, NavController, RenderModel, RouteTable};
use crate::ui::components::{AppBarComponent, DialogComponent, DrawerComponent, PageComponent, StatusBar};
use crate::ui::core::{Action, Component, DialogType, EventType, Focus};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

pub struct AppComponent {
    // Component composition
    app_bar: AppBarComponent,
    drawer: DrawerComponent,
    page: PageComponent,
    dialog: DialogComponent,

    // Navigation state
    controller: NavController,
    routes: RouteTable,
    location: Location,

    // Simple UI state
    focus: Focus,
    icons: IconService,
    drawer_width: u16,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> anyhow::Result<Self> {
        let state = config.navigation_state()?;
        let routes = RouteTable::from_state(&state);
        let icons = IconService::new(config.ui.icon_theme);

        log::info!(
            "Shell created: {} groups, {} routes, {:?} drawer",
            state.groups().len(),
            routes.len(),
            config.ui.drawer_variant
        );

        Ok(Self {
            app_bar: AppBarComponent::new(icons.clone()),
            drawer: DrawerComponent::new(config.ui.drawer_variant, icons.clone()),
            page: PageComponent::new(config.ui.page_repeat),
            dialog: DialogComponent::new(logger),
            controller: NavController::new(state),
            routes,
            location: Location::new(config.ui.initial_route.clone()),
            focus: Focus::Page,
            icons,
            drawer_width: config.ui.drawer_width,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> &NavController {
        &self.controller
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn drawer(&self) -> &DrawerComponent {
        &self.drawer
    }

    pub fn page(&self) -> &PageComponent {
        &self.page
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn title(&self) -> &str {
        self.app_bar.title()
    }

    pub fn snapshot(&self) -> RenderModel {
        self.controller.snapshot()
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Drawer => {
                self.page.on_blur();
                self.drawer.on_focus();
            }
            Focus::Page => {
                self.drawer.on_blur();
                self.page.on_focus();
            }
        }
    }

    /// Push the latest navigation snapshot into the drawer
    fn refresh_drawer(&mut self) {
        self.drawer.update_model(&self.controller.snapshot());
    }

    /// React to the location having changed to `path`
    fn apply_route(&mut self, path: &str) {
        self.controller.on_route_change(path);
        self.page.mount(path, self.routes.resolve(path));
        // Mounting returns the page to the top
        self.controller.on_scroll(self.page.offset());
        self.app_bar.set_title(self.controller.active_title());
        self.refresh_drawer();
    }

    fn navigate(&mut self, path: &str) {
        if self.location.navigate(path) {
            log::info!("Navigation: '{}'", path);
            self.apply_route(path);
        }
        if self.drawer.variant().closes_on_select() {
            self.drawer.close();
            self.set_focus(Focus::Page);
        }
    }

    /// Handle keyboard shortcuts that aren't component-specific
    fn handle_global_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('m') => Action::ToggleDrawer,
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Tab | KeyCode::BackTab => Action::SwitchFocus,
            KeyCode::Backspace => Action::NavigateBack,
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let action = self.handle_global_key(key);
        if !action.is_none() {
            return action;
        }

        match self.focus {
            Focus::Drawer if self.drawer.is_open() => self.drawer.handle_key_events(key),
            _ => self.page.handle_key_events(key),
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() {
            return Action::None;
        }

        let action = self.app_bar.handle_mouse_events(mouse);
        if !action.is_none() {
            return action;
        }
        if self.drawer.contains(mouse.column, mouse.row) {
            return self.drawer.handle_mouse_events(mouse);
        }
        // An open temporary drawer is modal: the rest of the screen is its backdrop
        if self.drawer.is_open() && !self.drawer.variant().is_docked() {
            return match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Action::CloseDrawer,
                _ => Action::None,
            };
        }
        self.page.handle_mouse_events(mouse)
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.update(action)
    }
}

impl Component for AppComponent {
    /// Attach the scroll listener and mount the initial route
    fn init(&mut self) -> anyhow::Result<()> {
        self.controller.attach_scroll_listener();
        let initial = self.location.current().to_string();
        self.apply_route(&initial);
        let focus = if self.drawer.is_open() { Focus::Drawer } else { Focus::Page };
        self.set_focus(focus);
        log::info!("Shell mounted at '{}'", initial);
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.route_mouse(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(path) => self.navigate(&path),
            Action::NavigateBack => {
                if let Some(path) = self.location.back().map(str::to_string) {
                    log::info!("Navigation: back to '{}'", path);
                    self.apply_route(&path);
                }
            }
            Action::ToggleGroup(name) => {
                self.controller.on_group_toggle(&name);
                log::debug!("Group '{}' open: {}", name, self.controller.state().is_expanded(&name));
                self.refresh_drawer();
            }
            Action::ToggleDrawer => {
                if self.drawer.variant().can_close() {
                    self.drawer.toggle();
                    let focus = if self.drawer.is_open() { Focus::Drawer } else { Focus::Page };
                    self.set_focus(focus);
                }
            }
            Action::CloseDrawer => {
                self.drawer.close();
                self.set_focus(Focus::Page);
            }
            Action::SwitchFocus => {
                let focus = match self.focus {
                    Focus::Page if self.drawer.is_open() => Focus::Drawer,
                    _ => Focus::Page,
                };
                self.set_focus(focus);
            }
            Action::PageScrolled(offset) => {
                self.controller.on_scroll(offset);
            }
            Action::ShowDialog(_) | Action::HideDialog => {
                self.dialog.update(action);
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.drawer.set_icons(self.icons.clone());
                self.app_bar.set_icons(self.icons.clone());
                log::info!("Icon theme: {:?}", self.icons.theme());
            }
            Action::Quit => {
                log::info!("Quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::shell_layout(
            rect,
            !self.controller.is_downscrolling(),
            self.drawer.is_open(),
            self.drawer.variant(),
            self.drawer_width,
        );

        match layout.app_bar {
            Some(area) => self.app_bar.render(f, area),
            None => self.app_bar.hide(),
        }

        self.page.render(f, layout.page);
        if let Some(offset) = self.page.take_clamped_offset() {
            self.controller.on_scroll(offset);
        }
        if let Some(area) = layout.drawer {
            self.drawer.render(f, area);
        }

        StatusBar::render(f, layout.status, self.location.current(), self.focus);

        // Render dialog on top if visible
        self.dialog.render(f, rect);
    }

    /// Detach the scroll listener before the shell goes away
    fn destroy(&mut self) {
        self.controller.detach_scroll_listener();
        log::info!("Shell torn down");
    }
}
