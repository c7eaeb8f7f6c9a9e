use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::navigation::{Section, SectionLayout, SectionSpan};

/// The live document as a `SectionLayout`.
pub struct DomLayout {
    document: Document,
}

impl DomLayout {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn element(&self, section: Section) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl SectionLayout for DomLayout {
    fn span(&self, section: Section) -> Option<SectionSpan> {
        let element = self.element(section)?;
        Some(SectionSpan::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn scroll_to(&self, section: Section) -> bool {
        match self.element(section) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}
