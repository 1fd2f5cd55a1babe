// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Element lookup and the DOM-backed [`VerseView`].

use ayah_core::{DisplayedVerse, Selectors, VerseView};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use crate::error::WidgetError;

/// Class set on the refresh control while a fetch is outstanding.
pub const LOADING_CLASS: &str = "loading";

/// Elements the widget drives, resolved once at `init`.
#[derive(Debug, Clone)]
pub struct Bindings {
    /// Verse text region.
    pub verse: HtmlElement,
    /// Attribution (surah name) region.
    pub attribution: HtmlElement,
    /// Refresh control.
    pub refresh: HtmlButtonElement,
    /// Copy control.
    pub copy: Element,
    /// Twitter share control.
    pub twitter: Element,
    /// Facebook share control.
    pub facebook: Element,
    /// Read-aloud control, bound only when the feature is on.
    pub read_aloud: Option<Element>,
}

impl Bindings {
    /// Resolve every selector against `document`.
    pub fn lookup(
        document: &Document,
        selectors: &Selectors,
        with_read_aloud: bool,
    ) -> Result<Self, WidgetError> {
        let read_aloud = if with_read_aloud {
            Some(query(document, &selectors.read_aloud)?)
        } else {
            None
        };
        let bindings = Self {
            verse: query_as(document, &selectors.verse, "HTMLElement")?,
            attribution: query_as(document, &selectors.attribution, "HTMLElement")?,
            refresh: query_as(document, &selectors.refresh, "HTMLButtonElement")?,
            copy: query(document, &selectors.copy)?,
            twitter: query(document, &selectors.twitter)?,
            facebook: query(document, &selectors.facebook)?,
            read_aloud,
        };
        debug!(read_aloud = with_read_aloud, "widget elements bound");
        Ok(bindings)
    }
}

fn query(document: &Document, selector: &str) -> Result<Element, WidgetError> {
    document
        .query_selector(selector)
        .map_err(|e| WidgetError::js(&e))?
        .ok_or_else(|| WidgetError::MissingElement {
            selector: selector.to_string(),
        })
}

fn query_as<T: JsCast>(
    document: &Document,
    selector: &str,
    expected: &'static str,
) -> Result<T, WidgetError> {
    query(document, selector)?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::WrongElement {
            selector: selector.to_string(),
            expected,
        })
}

/// The global window.
pub fn window() -> Result<Window, WidgetError> {
    web_sys::window().ok_or(WidgetError::NoWindow)
}

/// [`VerseView`] writing into the bound elements.
#[derive(Debug, Clone)]
pub struct DomView {
    verse: HtmlElement,
    attribution: HtmlElement,
    refresh: HtmlButtonElement,
}

impl DomView {
    /// View over the display regions and refresh control in `bindings`.
    pub fn new(bindings: &Bindings) -> Self {
        Self {
            verse: bindings.verse.clone(),
            attribution: bindings.attribution.clone(),
            refresh: bindings.refresh.clone(),
        }
    }

    fn set_loading_class(&self, on: bool) {
        let classes = self.refresh.class_list();
        let result = if on {
            classes.add_1(LOADING_CLASS)
        } else {
            classes.remove_1(LOADING_CLASS)
        };
        if let Err(err) = result {
            debug!(error = %crate::error::describe_js(&err), "class toggle failed");
        }
    }
}

impl VerseView for DomView {
    fn set_loading(&self, label: &str) {
        self.refresh.set_disabled(true);
        self.refresh.set_text_content(Some(label));
        self.set_loading_class(true);
    }

    fn set_idle(&self, label: &str) {
        self.refresh.set_disabled(false);
        self.refresh.set_text_content(Some(label));
        self.set_loading_class(false);
    }

    fn show_verse(&self, verse: &DisplayedVerse) {
        self.verse.set_text_content(Some(&verse.text));
        self.attribution.set_text_content(Some(&verse.source_name));
    }

    fn show_error(&self, message: &str) {
        self.verse.set_text_content(Some(message));
        self.attribution.set_text_content(Some(""));
    }

    fn current_text(&self) -> String {
        self.verse.text_content().unwrap_or_default()
    }
}
