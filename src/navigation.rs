use std::rc::Rc;

use log::debug;
use yew::Reducible;

/// Distance below the top of the viewport used as the scroll-spy probe.
pub const PROBE_BIAS: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Contact,
}

impl Section {
    /// Document order. Scroll-spy walks this list and stops at the first hit.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// Identifier of the section, also used as the id of its DOM element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Rendered vertical extent of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// Access to the rendered page. Implemented over the DOM in the app and
/// over fixed spans in tests.
pub trait SectionLayout {
    /// `None` when the section is not rendered.
    fn span(&self, section: Section) -> Option<SectionSpan>;

    /// Bring the section's top into view. Returns false when nothing scrolled.
    fn scroll_to(&self, section: Section) -> bool;
}

pub fn probe_position(scroll_y: f64) -> f64 {
    scroll_y + PROBE_BIAS
}

/// First section, in document order, whose span contains `probe`.
pub fn locate<L: SectionLayout + ?Sized>(layout: &L, probe: f64) -> Option<Section> {
    Section::ALL.into_iter().find(|&section| {
        layout
            .span(section)
            .map_or(false, |span| span.contains(probe))
    })
}

/// Scroll to the section named by `id`. Unknown ids and unrendered sections
/// are ignored; the caller closes the menu either way.
pub fn navigate<L: SectionLayout + ?Sized>(layout: &L, id: &str) -> bool {
    match Section::from_id(id) {
        Some(section) => {
            let scrolled = layout.scroll_to(section);
            if !scrolled {
                debug!("section #{} is not rendered, nothing to scroll", id);
            }
            scrolled
        }
        None => {
            debug!("ignoring navigation to unknown section {:?}", id);
            false
        }
    }
}

/// Spans measured at one scroll event, detached from the DOM so the
/// reducer can evaluate them.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    spans: Vec<(Section, SectionSpan)>,
}

impl ScrollSnapshot {
    pub fn measure<L: SectionLayout + ?Sized>(layout: &L, scroll_y: f64) -> Self {
        let spans = Section::ALL
            .into_iter()
            .filter_map(|section| layout.span(section).map(|span| (section, span)))
            .collect();
        Self { scroll_y, spans }
    }
}

impl SectionLayout for ScrollSnapshot {
    fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, span)| *span)
    }

    fn scroll_to(&self, _section: Section) -> bool {
        false
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(ScrollSnapshot),
    ToggleMenu,
    /// Sent after every navigation attempt, successful or not.
    Navigated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Section,
    pub menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            menu_open: false,
        }
    }
}

impl NavigationState {
    /// Recompute the active section; keep the previous one when the probe
    /// falls outside every rendered span.
    pub fn observe<L: SectionLayout + ?Sized>(self, layout: &L, scroll_y: f64) -> Self {
        match locate(layout, probe_position(scroll_y)) {
            Some(active) => Self { active, ..self },
            None => self,
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(snapshot) => {
                let next = self.observe(&snapshot, snapshot.scroll_y);
                if next.active != self.active {
                    debug!("active section: {} -> {}", self.active.id(), next.active.id());
                }
                next
            }
            NavAction::ToggleMenu => self.toggle_menu(),
            NavAction::Navigated => self.close_menu(),
        }
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Header opacity: 0.9 at the top of the page, 1.0 from 100px down.
pub fn header_opacity(scroll_y: f64) -> f64 {
    let progress = (scroll_y / 100.0).clamp(0.0, 1.0);
    0.9 + 0.1 * progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory page: home 0..800, about 800..1400, a 50px gap, services
    /// 1450..2050, contact 2050..2750. Scrolling moves `scroll_y` to the
    /// section top, like `scrollIntoView`.
    struct FakePage {
        spans: Vec<(Section, SectionSpan)>,
        scroll_y: RefCell<f64>,
        scrolls: RefCell<Vec<Section>>,
    }

    impl FakePage {
        fn new() -> Self {
            Self {
                spans: vec![
                    (Section::Home, SectionSpan::new(0.0, 800.0)),
                    (Section::About, SectionSpan::new(800.0, 600.0)),
                    (Section::Services, SectionSpan::new(1450.0, 600.0)),
                    (Section::Contact, SectionSpan::new(2050.0, 700.0)),
                ],
                scroll_y: RefCell::new(0.0),
                scrolls: RefCell::new(Vec::new()),
            }
        }

        fn without(mut self, section: Section) -> Self {
            self.spans.retain(|(s, _)| *s != section);
            self
        }
    }

    impl SectionLayout for FakePage {
        fn span(&self, section: Section) -> Option<SectionSpan> {
            self.spans.iter().find(|(s, _)| *s == section).map(|(_, sp)| *sp)
        }

        fn scroll_to(&self, section: Section) -> bool {
            match self.span(section) {
                Some(span) => {
                    *self.scroll_y.borrow_mut() = span.top;
                    self.scrolls.borrow_mut().push(section);
                    true
                }
                None => false,
            }
        }
    }

    fn scrolled(page: &FakePage, scroll_y: f64) -> NavAction {
        NavAction::Scrolled(ScrollSnapshot::measure(page, scroll_y))
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("hero"), None);
        assert_eq!(Section::from_id("Contact"), None);
    }

    #[test]
    fn span_is_half_open() {
        let span = SectionSpan::new(100.0, 50.0);
        assert!(span.contains(100.0));
        assert!(span.contains(149.9));
        assert!(!span.contains(150.0));
        assert!(!span.contains(99.9));
    }

    #[test]
    fn probe_inside_a_span_selects_that_section() {
        let page = FakePage::new();
        for (section, span) in page.spans.clone() {
            for probe in [span.top, span.top + span.height / 2.0, span.top + span.height - 1.0] {
                let state = NavigationState::default().observe(&page, probe - PROBE_BIAS);
                assert_eq!(state.active, section, "probe {}", probe);
            }
        }
    }

    #[test]
    fn probe_in_gap_keeps_previous_section() {
        let page = FakePage::new();
        let state = NavigationState::default().observe(&page, 900.0);
        assert_eq!(state.active, Section::About);

        // probe 1420 sits between about (ends 1400) and services (starts 1450)
        let state = state.observe(&page, 1320.0);
        assert_eq!(state.active, Section::About);
    }

    #[test]
    fn probe_past_the_last_section_keeps_previous_section() {
        let page = FakePage::new();
        let state = NavigationState::default().observe(&page, 2200.0);
        assert_eq!(state.active, Section::Contact);
        assert_eq!(state.observe(&page, 9000.0).active, Section::Contact);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let mut page = FakePage::new();
        page.spans[1] = (Section::About, SectionSpan::new(700.0, 700.0));
        assert_eq!(locate(&page, 750.0), Some(Section::Home));
    }

    #[test]
    fn unrendered_sections_are_skipped() {
        let page = FakePage::new().without(Section::About);
        assert_eq!(locate(&page, 900.0), None);
        assert_eq!(locate(&page, 1500.0), Some(Section::Services));
    }

    #[test]
    fn snapshot_keeps_only_rendered_sections() {
        let page = FakePage::new().without(Section::Services);
        let snapshot = ScrollSnapshot::measure(&page, 10.0);
        assert_eq!(snapshot.span(Section::Services), None);
        assert_eq!(snapshot.span(Section::Contact), page.span(Section::Contact));
        assert_eq!(snapshot.scroll_y, 10.0);
        assert!(!snapshot.scroll_to(Section::Home));
    }

    #[test]
    fn navigate_closes_menu_even_when_already_closed() {
        let page = FakePage::new();
        let open = NavigationState::default().toggle_menu();
        assert!(open.menu_open);

        assert!(navigate(&page, "about"));
        let state = open.apply(NavAction::Navigated);
        assert!(!state.menu_open);

        assert!(navigate(&page, "about"));
        let again = state.apply(NavAction::Navigated);
        assert_eq!(again, state);
    }

    #[test]
    fn navigate_to_missing_section_does_not_scroll_but_closes_menu() {
        let page = FakePage::new().without(Section::Services);
        let state = NavigationState::default().toggle_menu();

        assert!(!navigate(&page, "services"));
        assert!(!navigate(&page, "pricing"));
        assert!(page.scrolls.borrow().is_empty());
        assert_eq!(*page.scroll_y.borrow(), 0.0);

        let state = state.apply(NavAction::Navigated);
        assert!(!state.menu_open);
        assert_eq!(state.active, Section::Home);
    }

    #[test]
    fn toggling_twice_restores_menu() {
        for start in [false, true] {
            let state = NavigationState { active: Section::About, menu_open: start };
            let round_trip = state.apply(NavAction::ToggleMenu).apply(NavAction::ToggleMenu);
            assert_eq!(round_trip, state);
        }
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let page = FakePage::new();
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(scrolled(&page, 0.0));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(scrolled(&page, 1500.0));
        assert_eq!(next.active, Section::Services);
    }

    #[test]
    fn scroll_then_navigate_end_to_end() {
        let page = FakePage::new();
        let mut state = NavigationState::default();
        assert_eq!(state.active, Section::Home);
        assert!(!state.menu_open);

        state = state.apply(scrolled(&page, 1500.0));
        assert_eq!(state.active, Section::Services);

        state = state.apply(NavAction::ToggleMenu);
        assert!(navigate(&page, "contact"));
        state = state.apply(NavAction::Navigated);
        assert_eq!(page.scrolls.borrow().as_slice(), &[Section::Contact]);

        let scroll_y = *page.scroll_y.borrow();
        state = state.apply(scrolled(&page, scroll_y));
        assert_eq!(state.active, Section::Contact);
        assert!(!state.menu_open);
    }

    #[test]
    fn header_opacity_is_clamped() {
        assert!((header_opacity(-20.0) - 0.9).abs() < 1e-9);
        assert!((header_opacity(0.0) - 0.9).abs() < 1e-9);
        assert!((header_opacity(50.0) - 0.95).abs() < 1e-9);
        assert!((header_opacity(100.0) - 1.0).abs() < 1e-9);
        assert!((header_opacity(5000.0) - 1.0).abs() < 1e-9);
    }
}
