// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Random ayah widget: WASM bindings for the browser page.
//!
//! This crate wires the services in `ayah-core` to the DOM. It owns the
//! element bindings, event listeners and browser adapters (fetch, clipboard,
//! `window.open`, speech synthesis); the fetch cycle, clipboard fallback order
//! and share URLs all live in the core.
//!
//! # Usage (from JavaScript)
//!
//! ```js
//! import init, { AyahWidget } from 'ayah-widget';
//!
//! await init();
//! const widget = new AyahWidget({ features: { read_aloud: true } });
//! widget.init();            // binds elements, fetches the first verse
//!
//! await widget.refresh();   // "displayed" | "failed" | "superseded" | "ignored"
//! await widget.copy();      // name of the clipboard strategy that worked
//! widget.share("twitter");  // returns the opened URL
//!
//! widget.dispose();
//! ```

pub mod clipboard;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod listeners;
pub mod logging;
pub mod platform;

use std::rc::Rc;

use ayah_core::{
    copy_current_verse, read_aloud, share_current_verse, Action, ClipboardChain, ConfigError,
    CopyReceipt, RefreshController, RefreshOutcome, SharePlatform, WidgetConfig,
};
use js_sys::Promise;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{EventTarget, Window};

use crate::dom::{Bindings, DomView};
use crate::error::WidgetError;
use crate::fetch::WindowFetch;
use crate::listeners::ListenerSet;
use crate::platform::{flash_class, page_url, SynthSpeaker, WindowOpener};

/// Class flashed on the copy control after a successful copy.
pub const COPY_FEEDBACK_CLASS: &str = "active";

// ─── Widget ──────────────────────────────────────────────────────────────────

/// One widget instance bound to one page.
#[wasm_bindgen]
pub struct AyahWidget {
    config: WidgetConfig,
    session: Option<Session>,
}

#[wasm_bindgen]
impl AyahWidget {
    /// Build a widget from an options object (`undefined` for defaults).
    ///
    /// Installs the console logger on first use.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<AyahWidget, JsError> {
        #[cfg(feature = "console-panic")]
        console_error_panic_hook::set_once();

        let config = parse_options(options).map_err(to_js_error)?;
        config.validate().map_err(to_js_error)?;
        let filter = config.log_filter().map_err(to_js_error)?;
        if !logging::install(filter) {
            debug!("console logger already installed");
        }
        Ok(Self {
            config,
            session: None,
        })
    }

    /// Bind elements, attach listeners and, unless disabled, load a verse.
    ///
    /// Calling `init` on an initialized widget does nothing.
    pub fn init(&mut self) -> Result<(), JsError> {
        if self.session.is_some() {
            return Ok(());
        }
        let session = Session::start(&self.config).map_err(to_js_error)?;
        if self.config.features.load_on_init {
            session.shared.dispatch(Action::Refresh);
        }
        info!(listeners = session.listeners.len(), "ayah widget initialized");
        self.session = Some(session);
        Ok(())
    }

    /// Detach every listener and release the element bindings.
    ///
    /// A fetch already in flight still lands on the old elements.
    pub fn dispose(&mut self) {
        if self.session.take().is_some() {
            info!("ayah widget disposed");
        }
    }

    /// Whether `init` has run (and `dispose` has not).
    #[wasm_bindgen(getter)]
    pub fn initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a fetch cycle is outstanding.
    #[wasm_bindgen(getter)]
    pub fn loading(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.shared.controller.is_loading())
    }

    /// Fetch a new verse. Resolves with the cycle outcome.
    pub fn refresh(&self) -> Result<Promise, JsError> {
        let shared = self.shared()?;
        Ok(future_to_promise(async move {
            let outcome = shared.controller.refresh().await;
            Ok(JsValue::from_str(outcome_label(&outcome)))
        }))
    }

    /// Copy the verse on screen. Resolves with the strategy that worked.
    pub fn copy(&self) -> Result<Promise, JsError> {
        let shared = self.shared()?;
        Ok(future_to_promise(async move {
            match shared.copy().await {
                Ok(receipt) => Ok(JsValue::from_str(receipt.strategy)),
                Err(err) => Err(to_js_error(err).into()),
            }
        }))
    }

    /// Open a share link (`"twitter"`, `"x"` or `"facebook"`). Returns the URL.
    pub fn share(&self, platform: &str) -> Result<String, JsError> {
        let platform: SharePlatform = platform
            .parse()
            .map_err(|e: ayah_core::UnknownPlatform| JsError::new(&e.to_string()))?;
        self.shared()?.share(platform).map_err(to_js_error)
    }

    /// Speak the verse on screen. Returns `false` when there was nothing to say.
    pub fn read_aloud(&self) -> Result<bool, JsError> {
        self.shared()?.read_aloud().map_err(to_js_error)
    }
}

impl AyahWidget {
    fn shared(&self) -> Result<Rc<Shared>, JsError> {
        self.session
            .as_ref()
            .map(|s| Rc::clone(&s.shared))
            .ok_or_else(|| to_js_error(WidgetError::NotInitialized))
    }
}

/// Bind and initialize in one call.
#[wasm_bindgen]
pub fn mount(options: JsValue) -> Result<AyahWidget, JsError> {
    let mut widget = AyahWidget::new(options)?;
    widget.init()?;
    Ok(widget)
}

fn parse_options(options: JsValue) -> Result<WidgetConfig, WidgetError> {
    if options.is_undefined() || options.is_null() {
        return Ok(WidgetConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| WidgetError::Config(ConfigError::Other(e.to_string())))
}

fn to_js_error(err: impl Into<WidgetError>) -> JsError {
    JsError::new(&err.into().to_string())
}

/// Label handed back to JavaScript for a finished refresh.
pub fn outcome_label(outcome: &RefreshOutcome) -> &'static str {
    match outcome {
        RefreshOutcome::Displayed(_) => "displayed",
        RefreshOutcome::Failed(_) => "failed",
        RefreshOutcome::Superseded => "superseded",
        RefreshOutcome::Ignored => "ignored",
    }
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// State that exists between `init` and `dispose`.
struct Session {
    shared: Rc<Shared>,
    // dropped with the session, which detaches every handler
    listeners: ListenerSet,
}

impl Session {
    fn start(config: &WidgetConfig) -> Result<Self, WidgetError> {
        let window = dom::window()?;
        let document = window.document().ok_or(WidgetError::NoDocument)?;
        let bindings = Bindings::lookup(&document, &config.selectors, config.features.read_aloud)?;

        let controller = RefreshController::new(
            config.clone(),
            WindowFetch::new(window.clone()),
            DomView::new(&bindings),
            StdRng::from_entropy(),
        );
        let shared = Rc::new(Shared {
            clipboard: clipboard::browser_chain(&window),
            opener: WindowOpener::new(window.clone()),
            speaker: SynthSpeaker::new(window.clone()),
            window,
            bindings,
            controller,
        });

        let mut listeners = ListenerSet::new();
        shared.bind(&mut listeners)?;
        Ok(Self { shared, listeners })
    }
}

// ─── Shared handlers ─────────────────────────────────────────────────────────

struct Shared {
    window: Window,
    bindings: Bindings,
    controller: RefreshController<WindowFetch, DomView, StdRng>,
    clipboard: ClipboardChain,
    opener: WindowOpener,
    speaker: SynthSpeaker,
}

impl Shared {
    fn bind(self: &Rc<Self>, listeners: &mut ListenerSet) -> Result<(), WidgetError> {
        let b = &self.bindings;
        let mut controls = vec![
            (event_target(&b.refresh), Action::Refresh),
            (event_target(&b.copy), Action::Copy),
            (event_target(&b.twitter), Action::Share(SharePlatform::Twitter)),
            (event_target(&b.facebook), Action::Share(SharePlatform::Facebook)),
        ];
        if let Some(speech) = &b.read_aloud {
            controls.push((event_target(speech), Action::ReadAloud));
        }

        let keyboard = self.controller.config().features.keyboard_activation;
        for (target, action) in controls {
            let this = Rc::clone(self);
            listeners.on_click(target, move || this.dispatch(action))?;
            if keyboard && action.wants_keyboard_activation() {
                let this = Rc::clone(self);
                listeners.on_activation_key(target, move || this.dispatch(action))?;
            }
        }
        Ok(())
    }

    fn dispatch(self: &Rc<Self>, action: Action) {
        debug!(?action, "control activated");
        let this = Rc::clone(self);
        match action {
            Action::Refresh => spawn_local(async move {
                this.controller.refresh().await;
            }),
            Action::Copy => spawn_local(async move {
                if let Err(err) = this.copy().await {
                    warn!(error = %err, "copy failed");
                }
            }),
            // core already logs share failures
            Action::Share(platform) => {
                let _ = this.share(platform);
            }
            Action::ReadAloud => {
                if let Err(err) = this.read_aloud() {
                    warn!(error = %err, "read-aloud failed");
                }
            }
        }
    }

    async fn copy(&self) -> Result<CopyReceipt, WidgetError> {
        let receipt = copy_current_verse(self.controller.view(), &self.clipboard).await?;
        let millis = self.controller.config().copy_feedback_ms;
        if let Err(err) = flash_class(&self.window, &self.bindings.copy, COPY_FEEDBACK_CLASS, millis)
        {
            debug!(error = %err, "copy feedback skipped");
        }
        Ok(receipt)
    }

    fn share(&self, platform: SharePlatform) -> Result<String, WidgetError> {
        let page = page_url(&self.window)?;
        Ok(share_current_verse(
            self.controller.view(),
            &self.opener,
            platform,
            &page,
        )?)
    }

    fn read_aloud(&self) -> Result<bool, WidgetError> {
        let lang = &self.controller.config().speech_lang;
        Ok(read_aloud(self.controller.view(), &self.speaker, lang)?)
    }
}

fn event_target<T: AsRef<EventTarget>>(element: &T) -> &EventTarget {
    element.as_ref()
}
