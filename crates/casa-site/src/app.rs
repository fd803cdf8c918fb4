#![forbid(unsafe_code)]

//! The site model: state, message handling and page composition.
//!
//! Language and selected category live in [`State`] cells with exactly
//! one [`Setter`] each, held here; sections only read them through the
//! [`ViewCtx`] built for every render.
//!
//! Small interactions (navigation bar background, mobile menu, FAQ
//! accordion, counters) update the DOM through targeted effects. A
//! language, category or route change re-renders the page.

use casa_content::ContentStore;
use casa_i18n::Language;
use casa_render::Node;
use casa_runtime::motion::{Counter, OnceFlag, ScopeId};
use casa_runtime::{Cmd, Effect, Event, Model, Setter, Stage, State, state};
use tracing::{debug, info};

use crate::chrome::{
    ACTION_FAQ, ACTION_LANG, ACTION_MENU_CLOSE, ACTION_MENU_TOGGLE, ACTION_NAVIGATE,
    ACTION_SELECT,
};
use crate::context::{UiState, ViewCtx};
use crate::document::metadata_effect;
use crate::pages;
use crate::route::Route;
use crate::sections::{about, faq, hero, testimonials};

#[derive(Debug, Clone, PartialEq)]
pub enum SiteMsg {
    /// The viewport scrolled; the stage already holds the new offset.
    Scrolled,
    Resized,
    Measured,
    SetLanguage(Language),
    SelectCategory(String),
    ToggleMobileMenu,
    CloseMobileMenu,
    ToggleFaq(String),
    /// An in-app link was followed.
    Go(Route),
    /// The browser location changed (initial load, back, forward).
    LocationChanged(String),
    Signal(String),
    Tick,
    /// An action this model does not understand.
    Unhandled(String),
}

impl From<Event> for SiteMsg {
    fn from(event: Event) -> Self {
        match event {
            Event::Scroll { .. } => Self::Scrolled,
            Event::Resize { .. } => Self::Resized,
            Event::Layout(_) => Self::Measured,
            Event::Action { name, value } => Self::from_action(&name, value),
            Event::Navigate { path } => Self::LocationChanged(path),
            Event::Signal(name) => Self::Signal(name),
            Event::Tick => Self::Tick,
        }
    }
}

impl SiteMsg {
    fn from_action(name: &str, value: Option<String>) -> Self {
        match (name, value) {
            (ACTION_LANG, Some(code)) => match code.parse::<Language>() {
                Ok(lang) => Self::SetLanguage(lang),
                Err(_) => Self::Unhandled(format!("{ACTION_LANG}={code}")),
            },
            (ACTION_SELECT, Some(id)) => Self::SelectCategory(id),
            (ACTION_MENU_TOGGLE, _) => Self::ToggleMobileMenu,
            (ACTION_MENU_CLOSE, _) => Self::CloseMobileMenu,
            (ACTION_FAQ, Some(id)) => Self::ToggleFaq(id),
            (ACTION_NAVIGATE, Some(path)) => Self::Go(Route::from_location(&path, "")),
            (other, _) => Self::Unhandled(other.to_owned()),
        }
    }
}

pub struct SiteModel {
    store: &'static ContentStore,
    language: State<Language>,
    set_language: Setter<Language>,
    category: State<String>,
    set_category: Setter<String>,
    route: Route,
    nav_scrolled: bool,
    mobile_menu_open: bool,
    open_faq: Option<String>,
    counters: Vec<Counter>,
    stats_gate: OnceFlag,
    scopes: Vec<ScopeId>,
}

impl SiteModel {
    /// Home page in the default language, first menu category selected.
    #[must_use]
    pub fn new(store: &'static ContentStore) -> Self {
        let (language, set_language) = state(Language::DEFAULT);
        let (category, set_category) = state(store.menu_catalog().first().id.clone());
        Self {
            store,
            language,
            set_language,
            category,
            set_category,
            route: Route::Home,
            nav_scrolled: false,
            mobile_menu_open: false,
            open_faq: None,
            counters: Vec::new(),
            stats_gate: OnceFlag::new(),
            scopes: Vec::new(),
        }
    }

    /// Start on the route for `location` instead of home.
    #[must_use]
    pub fn at_location(mut self, location: &str) -> Self {
        self.route = Route::from_location(location, &self.store.site().base_path);
        self
    }

    // -- Accessors ----------------------------------------------------------

    #[must_use]
    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Read-only handle on the current language.
    #[must_use]
    pub fn language_state(&self) -> State<Language> {
        self.language.clone()
    }

    #[must_use]
    pub fn selected_category(&self) -> String {
        self.category.get()
    }

    /// Read-only handle on the selected category id.
    #[must_use]
    pub fn category_state(&self) -> State<String> {
        self.category.clone()
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub fn is_nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    #[must_use]
    pub fn open_faq(&self) -> Option<&str> {
        self.open_faq.as_deref()
    }

    #[must_use]
    pub fn counter_values(&self) -> Vec<u64> {
        self.counters.iter().map(Counter::value).collect()
    }

    /// Scopes mounted for the current route.
    #[must_use]
    pub fn scopes(&self) -> &[ScopeId] {
        &self.scopes
    }

    // -- Internal -----------------------------------------------------------

    fn ui_state(&self) -> UiState {
        UiState {
            nav_scrolled: self.nav_scrolled,
            mobile_menu_open: self.mobile_menu_open,
            open_faq: self.open_faq.clone(),
            stat_values: self.counter_values(),
            selected_category: self.category.get(),
        }
    }

    fn ctx<'a>(&self, ui: &'a UiState) -> ViewCtx<'a> {
        ViewCtx::new(self.store, self.language.get(), ui)
    }

    fn mount_route(&mut self, stage: &mut Stage) {
        let ui = self.ui_state();
        let ctx = self.ctx(&ui);
        let scopes = pages::mount(self.route, &ctx, stage);
        debug!(route = %self.route, scopes = scopes.len(), "route mounted");
        self.scopes = scopes;
    }

    fn switch_route(&mut self, route: Route, stage: &mut Stage) -> Cmd<SiteMsg> {
        for scope in self.scopes.drain(..) {
            stage.dispose_scope(scope);
        }
        let leaving_stats = self.route == Route::Home && route != Route::Home;
        self.route = route;
        self.mobile_menu_open = false;
        self.open_faq = None;
        self.mount_route(stage);
        stage.invalidate();
        let log = Cmd::log(format!("route: {route}"));
        if leaving_stats && self.finish_counters() {
            Cmd::batch(vec![Cmd::StopTick, log])
        } else {
            log
        }
    }

    /// Snap running counters to their targets. Returns whether any ran.
    fn finish_counters(&mut self) -> bool {
        let mut any = false;
        for counter in &mut self.counters {
            any |= counter.finish();
        }
        if any {
            debug!("stats counters finished early");
        }
        any
    }

    fn set_language(&mut self, lang: Language, stage: &mut Stage) -> Cmd<SiteMsg> {
        if !lang.is_selectable() {
            return Cmd::log(format!("language not selectable: {}", lang.code()));
        }
        if !self.set_language.set(lang) {
            return Cmd::none();
        }
        let ui = self.ui_state();
        let ctx = self.ctx(&ui);
        stage.emit(metadata_effect(lang, ctx.t));
        if self.route == Route::Home && !testimonials::is_empty(&ctx) {
            stage.emit(Effect::Relayout {
                target: testimonials::CAROUSEL_ID.to_owned(),
            });
        }
        stage.invalidate();
        info!(language = %lang, "language changed");
        Cmd::log(format!("language: {}", lang.code()))
    }

    fn set_mobile_menu(&mut self, open: bool, stage: &mut Stage) {
        if self.mobile_menu_open == open {
            return;
        }
        self.mobile_menu_open = open;
        if self.route != Route::Home {
            return;
        }
        stage.emit(Effect::Class {
            target: hero::MOBILE_MENU_ID.to_owned(),
            class: hero::OPEN_CLASS.to_owned(),
            on: open,
        });
        stage.emit(Effect::Attr {
            target: hero::MOBILE_MENU_ID.to_owned(),
            name: "hidden".to_owned(),
            value: (!open).then(String::new),
        });
        stage.emit(Effect::Attr {
            target: hero::MENU_TOGGLE_ID.to_owned(),
            name: "aria-expanded".to_owned(),
            value: Some(open.to_string()),
        });
    }

    fn toggle_faq(&mut self, id: &str, stage: &mut Stage) -> Cmd<SiteMsg> {
        let known = self
            .store
            .bundle(self.language.get())
            .is_ok_and(|t| t.faq.faqs.iter().any(|item| item.id == id));
        if !known {
            return Cmd::log(format!("unknown faq item: {id}"));
        }
        let next = faq::toggled(self.open_faq.as_deref(), id);
        if let Some(previous) = self.open_faq.as_deref()
            && next.as_deref() != Some(previous)
        {
            for effect in faq::item_effects(previous, false) {
                stage.emit(effect);
            }
        }
        if let Some(opened) = next.as_deref()
            && self.open_faq.as_deref() != Some(opened)
        {
            for effect in faq::item_effects(opened, true) {
                stage.emit(effect);
            }
        }
        self.open_faq = next;
        Cmd::none()
    }

    fn start_counters(&mut self, stage: &Stage) -> Cmd<SiteMsg> {
        if !self.stats_gate.raise() {
            return Cmd::none();
        }
        let now = stage.now();
        for counter in &mut self.counters {
            counter.start(now);
        }
        Cmd::batch(vec![
            Cmd::tick(stage.config().frame_interval),
            Cmd::log("stats counters started"),
        ])
    }

    fn tick_counters(&mut self, stage: &mut Stage) -> Cmd<SiteMsg> {
        let now = stage.now();
        let stats = &self.store.site().about.stats;
        for (i, counter) in self.counters.iter_mut().enumerate() {
            if let Some(value) = counter.tick(now)
                && self.route == Route::Home
            {
                let suffix = stats.get(i).map_or("", |s| s.suffix.as_str());
                stage.emit(Effect::Text {
                    target: about::stat_value_id(i),
                    text: about::format_stat(value, suffix),
                });
            }
        }
        if self.counters.iter().all(Counter::is_finished) {
            Cmd::StopTick
        } else {
            Cmd::none()
        }
    }
}

impl Model for SiteModel {
    type Message = SiteMsg;

    fn init(&mut self, stage: &mut Stage) -> Cmd<SiteMsg> {
        let duration = stage.config().counter_duration;
        self.counters = self
            .store
            .site()
            .about
            .stats
            .iter()
            .map(|stat| Counter::new(stat.value, duration))
            .collect();
        let lang = self.language.get();
        let ui = self.ui_state();
        stage.emit(metadata_effect(lang, self.ctx(&ui).t));
        self.mount_route(stage);
        Cmd::log(format!("site ready: route={} lang={}", self.route, lang.code()))
    }

    fn update(&mut self, msg: SiteMsg, stage: &mut Stage) -> Cmd<SiteMsg> {
        match msg {
            SiteMsg::Scrolled => {
                let scrolled = stage.viewport().scroll_y > stage.config().scrolled_threshold;
                if scrolled != self.nav_scrolled {
                    self.nav_scrolled = scrolled;
                    if self.route == Route::Home {
                        stage.emit(Effect::Class {
                            target: hero::NAV_ID.to_owned(),
                            class: hero::SCROLLED_CLASS.to_owned(),
                            on: scrolled,
                        });
                    }
                }
                Cmd::none()
            }
            SiteMsg::Resized | SiteMsg::Measured => Cmd::none(),
            SiteMsg::SetLanguage(lang) => self.set_language(lang, stage),
            SiteMsg::SelectCategory(id) => {
                let resolved = self.store.menu_catalog().select(&id).id.clone();
                if resolved != id {
                    debug!(requested = %id, fallback = %resolved, "unknown category");
                }
                if self.set_category.set(resolved) {
                    stage.invalidate();
                }
                Cmd::none()
            }
            SiteMsg::ToggleMobileMenu => {
                let open = !self.mobile_menu_open;
                self.set_mobile_menu(open, stage);
                Cmd::none()
            }
            SiteMsg::CloseMobileMenu => {
                self.set_mobile_menu(false, stage);
                Cmd::none()
            }
            SiteMsg::ToggleFaq(id) => self.toggle_faq(&id, stage),
            SiteMsg::Go(route) => {
                if route == self.route {
                    self.set_mobile_menu(false, stage);
                    return Cmd::none();
                }
                stage.emit(Effect::Navigate {
                    path: self.store.site().route_href(route.path()),
                });
                self.switch_route(route, stage)
            }
            SiteMsg::LocationChanged(path) => {
                let route = Route::from_location(&path, &self.store.site().base_path);
                if route == self.route {
                    Cmd::none()
                } else {
                    self.switch_route(route, stage)
                }
            }
            SiteMsg::Signal(name) if name == about::STATS_SIGNAL => self.start_counters(stage),
            SiteMsg::Signal(name) => Cmd::log(format!("unhandled signal: {name}")),
            SiteMsg::Tick => self.tick_counters(stage),
            SiteMsg::Unhandled(what) => Cmd::log(format!("ignored action: {what}")),
        }
    }

    fn view(&self) -> Node {
        let ui = self.ui_state();
        pages::render(self.route, &self.ctx(&ui))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(name: &str, value: Option<&str>) -> SiteMsg {
        SiteMsg::from(Event::Action {
            name: name.to_owned(),
            value: value.map(str::to_owned),
        })
    }

    #[test]
    fn actions_map_to_messages() {
        assert_eq!(action("lang", Some("en")), SiteMsg::SetLanguage(Language::En));
        assert_eq!(action("select", Some("desserts")), SiteMsg::SelectCategory("desserts".into()));
        assert_eq!(action("menu-toggle", None), SiteMsg::ToggleMobileMenu);
        assert_eq!(action("faq", Some("kids")), SiteMsg::ToggleFaq("kids".into()));
        assert_eq!(action("navigate", Some("/menu")), SiteMsg::Go(Route::Menu));
    }

    #[test]
    fn malformed_actions_are_unhandled() {
        assert!(matches!(action("lang", Some("fr")), SiteMsg::Unhandled(_)));
        assert!(matches!(action("select", None), SiteMsg::Unhandled(_)));
        assert!(matches!(action("dance", None), SiteMsg::Unhandled(_)));
    }

    #[test]
    fn host_location_becomes_location_changed() {
        assert_eq!(
            SiteMsg::from(Event::Navigate { path: "/x".into() }),
            SiteMsg::LocationChanged("/x".into())
        );
    }
}
