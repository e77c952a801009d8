use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use termfolio_core::contact::{ContactMessage, Field, FieldError};
use termfolio_core::{AppConfig, Portfolio, ThemeController, ThemeMode};

use crate::fx::{
    CounterAnimation, ProgressAnimation, Ripple, RowSpan, ScrollFxCoordinator, Typewriter,
    ViewportObserver,
};
use crate::layout::{Document, SectionId, TargetKey};
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::themes::load_theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling the page
    Normal,
    /// Editing the contact form
    ContactForm,
    /// Project detail popup (project index)
    Modal(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Single-slot notification banner; a new notice replaces the current
/// one and auto-dismisses after 3000ms.
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notification {
    pub const DISMISS_MS: u64 = 3000;
}

/// Controls that can carry a ripple flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleHost {
    NavLink(SectionId),
    ToTop,
    ProjectCard(usize),
    Submit,
}

/// Startup splash: covers the page for 1500ms, then fades for 500ms
#[derive(Debug, Clone, Copy)]
pub struct LoaderState {
    started: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Covering,
    Fading,
    Done,
}

impl LoaderState {
    const COVER_MS: u64 = 1500;
    const FADE_MS: u64 = 500;

    pub fn new(now: Instant) -> Self {
        Self { started: now }
    }

    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        now.duration_since(self.started).as_millis() as u64
    }

    pub fn phase(&self, now: Instant) -> LoaderPhase {
        let elapsed = self.elapsed_ms(now);
        if elapsed < Self::COVER_MS {
            LoaderPhase::Covering
        } else if elapsed < Self::COVER_MS + Self::FADE_MS {
            LoaderPhase::Fading
        } else {
            LoaderPhase::Done
        }
    }
}

/// One stat counter: armed by the observer, advanced on frame ticks
pub struct CounterCell {
    pub plus_suffix: bool,
    target: u64,
    anim: Option<CounterAnimation>,
    next_frame: Instant,
    value: u64,
    started: bool,
}

impl CounterCell {
    /// Rendered digits for the current frame
    pub fn display(&self) -> String {
        crate::fx::counter::format_value(self.value, self.plus_suffix)
    }

    pub fn is_running(&self) -> bool {
        self.anim.is_some()
    }
}

/// One skill bar: delayed one-step fill after its reveal
pub struct BarCell {
    pub level: u8,
    pub fill: u8,
    pending: Option<ProgressAnimation>,
}

impl BarCell {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Contact form editing state
pub struct ContactFormState {
    pub values: [String; 4],
    pub focus: Field,
    pub errors: Vec<FieldError>,
    pub sending: bool,
}

impl ContactFormState {
    pub const FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn new() -> Self {
        Self {
            values: Default::default(),
            focus: Field::Name,
            errors: Vec::new(),
            sending: false,
        }
    }

    fn index(field: Field) -> usize {
        Self::FIELDS.iter().position(|f| *f == field).unwrap_or(0)
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[Self::index(field)]
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        &mut self.values[Self::index(field)]
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn focus_next(&mut self) {
        let idx = (Self::index(self.focus) + 1) % Self::FIELDS.len();
        self.focus = Self::FIELDS[idx];
    }

    pub fn focus_prev(&mut self) {
        let idx = (Self::index(self.focus) + Self::FIELDS.len() - 1) % Self::FIELDS.len();
        self.focus = Self::FIELDS[idx];
    }

    pub fn message(&self) -> ContactMessage {
        ContactMessage {
            name: self.value(Field::Name).to_string(),
            email: self.value(Field::Email).to_string(),
            subject: self.value(Field::Subject).to_string(),
            message: self.value(Field::Message).to_string(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub portfolio: Portfolio,
    theme_controller: ThemeController,
    pub theme: Theme,

    pub mode: Mode,
    pub should_quit: bool,
    /// First key of an in-flight multi-key sequence ("gg")
    pub pending_key: Option<char>,
    /// Wall clock of the current frame, shared with the widgets
    pub now: Instant,
    pub viewport_height: u16,
    /// Width the document was last laid out at
    pub last_layout_width: u16,

    pub scroll: ScrollAnimator,
    pub fxc: ScrollFxCoordinator<SectionId>,
    observer: ViewportObserver<TargetKey>,
    pub counters: Vec<CounterCell>,
    pub bars: Vec<Vec<BarCell>>,
    pub revealed: HashSet<SectionId>,
    pub typewriter: Typewriter,
    pub ripple: Option<(RippleHost, Ripple)>,
    pub notification: Option<Notification>,
    pub loader: LoaderState,
    pub form: ContactFormState,
    /// Focused project card, for opening the detail popup
    pub focused_project: usize,

    last_observed: Option<(u16, u16)>,
    counter_frame: Duration,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        portfolio: Portfolio,
        theme_controller: ThemeController,
        now: Instant,
    ) -> Self {
        let fx = &config.ui.fx;
        let theme = load_theme(theme_controller.mode(), &config.ui.colors);

        let mut observer = ViewportObserver::new(fx.visibility_threshold);

        let counters = portfolio
            .stats
            .iter()
            .enumerate()
            .map(|(i, stat)| {
                observer.observe(TargetKey::Stat(i));
                CounterCell {
                    plus_suffix: stat.plus_suffix,
                    target: stat.value,
                    anim: None,
                    next_frame: now,
                    value: 0,
                    started: false,
                }
            })
            .collect();

        let bars = portfolio
            .skills
            .iter()
            .enumerate()
            .map(|(g, group)| {
                group
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(s, skill)| {
                        observer.observe(TargetKey::Skill(g, s));
                        BarCell {
                            level: skill.level.min(100),
                            fill: 0,
                            pending: None,
                        }
                    })
                    .collect()
            })
            .collect();

        for id in SectionId::ALL {
            observer.observe(TargetKey::Section(id));
        }

        let fxc = ScrollFxCoordinator::new(
            fx.scroll_throttle_ms,
            fx.navbar_scrolled_rows,
            fx.to_top_rows,
            fx.nav_lookahead_rows,
        );

        let typewriter = Typewriter::new(&portfolio.roles, now);
        let scroll = ScrollAnimator::new(config.ui.scroll.clone());
        let counter_frame = Duration::from_millis(fx.counter_frame_ms.max(1));

        Self {
            config,
            portfolio,
            theme_controller,
            theme,
            mode: Mode::Normal,
            should_quit: false,
            pending_key: None,
            now,
            viewport_height: 0,
            last_layout_width: 0,
            scroll,
            fxc,
            observer,
            counters,
            bars,
            revealed: HashSet::new(),
            typewriter,
            ripple: None,
            notification: None,
            loader: LoaderState::new(now),
            form: ContactFormState::new(),
            focused_project: 0,
            last_observed: None,
            counter_frame,
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_controller.mode()
    }

    /// Flip dark/light, persist, and swap the palette
    pub fn toggle_theme(&mut self) {
        let mode = self.theme_controller.toggle();
        self.theme = load_theme(mode, &self.config.ui.colors);
    }

    /// Advance all time-based effects to `now`
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.typewriter.tick(now);

        if let Some(notice) = &self.notification {
            if now >= notice.expires_at {
                self.notification = None;
            }
        }

        if let Some((_, ripple)) = &self.ripple {
            if ripple.is_expired(now) {
                self.ripple = None;
            }
        }

        for cell in &mut self.counters {
            let Some(anim) = cell.anim.as_mut() else {
                continue;
            };
            while now >= cell.next_frame {
                cell.value = anim.advance();
                cell.next_frame += self.counter_frame;
                if anim.is_done() {
                    cell.anim = None;
                    break;
                }
            }
        }

        for row in &mut self.bars {
            for cell in row {
                if let Some(pending) = cell.pending.as_mut() {
                    if let Some(level) = pending.poll(now) {
                        cell.fill = level;
                        cell.pending = None;
                    }
                }
            }
        }
    }

    /// Scroll-path effects for the freshly laid-out frame: the
    /// throttled coordinator pass and, when the offset or geometry
    /// changed, a visibility pass over the observer.
    pub fn on_frame(&mut self, offset: u16, doc: &Document, now: Instant) {
        let key = (offset, doc.height());
        if self.last_observed == Some(key) {
            return;
        }
        self.last_observed = Some(key);

        self.fxc.on_scroll(offset, &doc.sections, now);

        let viewport = RowSpan::new(offset, self.viewport_height.max(1));
        let fired = self
            .observer
            .update(viewport, |k| doc.anchors.get(k).copied());
        for target in fired {
            self.arm_target(target, now);
        }
    }

    fn arm_target(&mut self, target: TargetKey, now: Instant) {
        let fx = &self.config.ui.fx;
        match target {
            TargetKey::Stat(i) => {
                if let Some(cell) = self.counters.get_mut(i) {
                    if !cell.started {
                        cell.started = true;
                        cell.anim = Some(CounterAnimation::new(
                            cell.target,
                            fx.counter_duration_ms,
                            fx.counter_frame_ms,
                        ));
                        cell.next_frame = now + self.counter_frame;
                    }
                }
            }
            TargetKey::Skill(g, s) => {
                if let Some(cell) = self.bars.get_mut(g).and_then(|row| row.get_mut(s)) {
                    if cell.fill == 0 && cell.pending.is_none() {
                        cell.pending = Some(ProgressAnimation::new(
                            cell.level,
                            Duration::from_millis(fx.bar_delay_ms),
                            now,
                        ));
                    }
                }
            }
            TargetKey::Section(id) => {
                self.revealed.insert(id);
            }
        }
    }

    /// Currently highlighted navbar entry
    pub fn active_section(&self) -> SectionId {
        self.fxc.active_section().unwrap_or(SectionId::Home)
    }

    pub fn notify(&mut self, text: impl Into<String>, kind: NoticeKind, now: Instant) {
        self.notification = Some(Notification {
            text: text.into(),
            kind,
            expires_at: now + Duration::from_millis(Notification::DISMISS_MS),
        });
    }

    pub fn spawn_ripple(&mut self, host: RippleHost, now: Instant) {
        self.ripple = Some((host, Ripple::new(now)));
    }

    /// Ripple intensity on a control, zero when none is active there
    pub fn ripple_intensity(&self, host: RippleHost, now: Instant) -> f64 {
        match &self.ripple {
            Some((h, ripple)) if *h == host => ripple.intensity(now),
            _ => 0.0,
        }
    }

    /// Validate the form; on success mark it sending and hand the
    /// message to the caller for delivery. On failure record the
    /// per-field errors and make no outbound call.
    pub fn submit_form(&mut self) -> Option<ContactMessage> {
        if self.form.sending {
            return None;
        }
        let message = self.form.message();
        let errors = message.validate();
        if errors.is_empty() {
            self.form.errors.clear();
            self.form.sending = true;
            Some(message)
        } else {
            self.form.errors = errors;
            None
        }
    }

    /// Apply the relay outcome: success resets the form, failure
    /// restores the submit control; both surface a notice.
    pub fn on_send_result(&mut self, result: Result<(), String>, now: Instant) {
        self.form.sending = false;
        match result {
            Ok(()) => {
                self.form.reset();
                self.notify("Message sent successfully!", NoticeKind::Success, now);
            }
            Err(error) => {
                self.notify(
                    format!("Failed to send message: {}", error),
                    NoticeKind::Error,
                    now,
                );
            }
        }
    }

    /// Open a URL with the system handler
    pub fn open_url(&mut self, url: &str, now: Instant) {
        match open::that_detached(url) {
            Ok(()) => tracing::debug!("Opened {}", url),
            Err(e) => {
                self.notify(format!("Failed to open link: {}", e), NoticeKind::Error, now);
            }
        }
    }

    pub fn focus_next_project(&mut self) {
        if !self.portfolio.projects.is_empty() {
            self.focused_project = (self.focused_project + 1) % self.portfolio.projects.len();
        }
    }

    pub fn focus_prev_project(&mut self) {
        let len = self.portfolio.projects.len();
        if len > 0 {
            self.focused_project = (self.focused_project + len - 1) % len;
        }
    }

    /// True while something is in motion and the event loop should run
    /// at the animation tick rate
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.scroll.needs_update()
            || self.counters.iter().any(|c| c.is_running())
            || self.bars.iter().flatten().any(|b| b.is_pending())
            || self.ripple.is_some()
            || self.loader.phase(now) != LoaderPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_document;
    use termfolio_core::prefs::MemoryPreferenceStore;

    fn test_app(now: Instant) -> App {
        let controller = ThemeController::load(Box::new(MemoryPreferenceStore::default()));
        App::new(
            Arc::new(AppConfig::default()),
            Portfolio::sample(),
            controller,
            now,
        )
    }

    #[test]
    fn test_counter_arms_once_and_finishes_at_target() {
        let start = Instant::now();
        let mut app = test_app(start);
        app.viewport_height = 200;

        let doc = build_document(&app, 80);
        // Scroll so the whole document is visible: everything fires
        app.on_frame(0, &doc, start);
        assert!(app.counters.iter().all(|c| c.started));

        // Drive well past the 2000ms duration
        app.tick(start + Duration::from_secs(5));
        for (cell, stat) in app.counters.iter().zip(&Portfolio::sample().stats) {
            assert!(!cell.is_running());
            assert_eq!(
                cell.display(),
                crate::fx::counter::format_value(stat.value, stat.plus_suffix)
            );
        }
    }

    #[test]
    fn test_no_suffix_stat_renders_without_plus() {
        let start = Instant::now();
        let mut app = test_app(start);
        app.viewport_height = 200;
        let doc = build_document(&app, 80);
        app.on_frame(0, &doc, start);
        app.tick(start + Duration::from_secs(5));

        let sample = Portfolio::sample();
        let idx = sample.stats.iter().position(|s| !s.plus_suffix).unwrap();
        assert!(!app.counters[idx].display().ends_with('+'));
    }

    #[test]
    fn test_bar_fills_after_delay() {
        let start = Instant::now();
        let mut app = test_app(start);
        app.viewport_height = 200;
        let doc = build_document(&app, 80);
        app.on_frame(0, &doc, start);

        assert!(app.bars[0][0].is_pending());
        app.tick(start + Duration::from_millis(499));
        assert_eq!(app.bars[0][0].fill, 0);
        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.bars[0][0].fill, app.bars[0][0].level);
    }

    #[test]
    fn test_submit_with_empty_message_blocks_and_reports() {
        let start = Instant::now();
        let mut app = test_app(start);
        *app.form.value_mut(Field::Name) = "Ada".to_string();
        *app.form.value_mut(Field::Email) = "ada@example.com".to_string();
        *app.form.value_mut(Field::Subject) = "Hi".to_string();

        assert!(app.submit_form().is_none());
        assert_eq!(app.form.error(Field::Message), Some("Message is required"));
        assert!(!app.form.sending);
    }

    #[test]
    fn test_submit_then_failure_restores_control() {
        let start = Instant::now();
        let mut app = test_app(start);
        *app.form.value_mut(Field::Name) = "Ada".to_string();
        *app.form.value_mut(Field::Email) = "ada@example.com".to_string();
        *app.form.value_mut(Field::Subject) = "Hi".to_string();
        *app.form.value_mut(Field::Message) = "Hello".to_string();

        let message = app.submit_form().expect("valid form submits");
        assert_eq!(message.name, "Ada");
        assert!(app.form.sending);
        // Duplicate submission while sending is ignored
        assert!(app.submit_form().is_none());

        app.on_send_result(Err("503".to_string()), start);
        assert!(!app.form.sending);
        // Input survives a failed delivery
        assert_eq!(app.form.value(Field::Message), "Hello");
        assert_eq!(app.notification.as_ref().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn test_submit_success_resets_form() {
        let start = Instant::now();
        let mut app = test_app(start);
        *app.form.value_mut(Field::Name) = "Ada".to_string();
        *app.form.value_mut(Field::Email) = "ada@example.com".to_string();
        *app.form.value_mut(Field::Subject) = "Hi".to_string();
        *app.form.value_mut(Field::Message) = "Hello".to_string();
        app.submit_form().unwrap();

        app.on_send_result(Ok(()), start);
        assert_eq!(app.form.value(Field::Message), "");
        assert_eq!(
            app.notification.as_ref().unwrap().kind,
            NoticeKind::Success
        );
    }

    #[test]
    fn test_notification_is_single_slot_and_expires() {
        let start = Instant::now();
        let mut app = test_app(start);
        app.notify("first", NoticeKind::Info, start);
        app.notify("second", NoticeKind::Info, start);
        assert_eq!(app.notification.as_ref().unwrap().text, "second");

        app.tick(start + Duration::from_millis(2999));
        assert!(app.notification.is_some());
        app.tick(start + Duration::from_millis(3000));
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_theme_toggle_swaps_palette() {
        let start = Instant::now();
        let mut app = test_app(start);
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        let dark_bg = format!("{:?}", app.theme.bg0);
        app.toggle_theme();
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        assert_ne!(format!("{:?}", app.theme.bg0), dark_bg);
    }

    #[test]
    fn test_loader_phases() {
        let start = Instant::now();
        let loader = LoaderState::new(start);
        assert_eq!(loader.phase(start), LoaderPhase::Covering);
        assert_eq!(
            loader.phase(start + Duration::from_millis(1499)),
            LoaderPhase::Covering
        );
        assert_eq!(
            loader.phase(start + Duration::from_millis(1700)),
            LoaderPhase::Fading
        );
        assert_eq!(
            loader.phase(start + Duration::from_millis(2000)),
            LoaderPhase::Done
        );
    }
}
