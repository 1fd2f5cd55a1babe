// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Browser clipboard strategies: the async Clipboard API first, then the
//! legacy off-screen textarea + `execCommand("copy")` technique.

use ayah_core::{ClipboardChain, ClipboardError, ClipboardStrategy};
use futures_util::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement, Window};

use crate::error::describe_js;

/// The chain the widget copies with.
pub fn browser_chain(window: &Window) -> ClipboardChain {
    let chain = ClipboardChain::new().with(AsyncClipboard::new(window.clone()));
    match window.document() {
        Some(document) => chain.with(ExecCommandClipboard::new(document)),
        None => chain,
    }
}

/// `navigator.clipboard.writeText`.
#[derive(Debug, Clone)]
pub struct AsyncClipboard {
    window: Window,
}

impl AsyncClipboard {
    /// Strategy bound to `window`'s navigator.
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let promise = self.window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(describe_js(&e)))
    }
}

impl ClipboardStrategy for AsyncClipboard {
    fn name(&self) -> &'static str {
        "navigator.clipboard"
    }

    fn is_available(&self) -> bool {
        // absent on insecure origins
        js_sys::Reflect::get(&self.window.navigator(), &JsValue::from_str("clipboard"))
            .is_ok_and(|value| !value.is_undefined() && !value.is_null())
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>> {
        self.write(text).boxed_local()
    }
}

/// Select a transient off-screen textarea and run `execCommand("copy")`.
///
/// The textarea is removed again whether or not the copy succeeds.
#[derive(Debug, Clone)]
pub struct ExecCommandClipboard {
    document: Document,
}

impl ExecCommandClipboard {
    /// Strategy writing through `document`.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn copy_via_textarea(&self, text: &str) -> Result<(), ClipboardError> {
        let body = self.document.body().ok_or(ClipboardError::Unavailable)?;
        let html = self
            .document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| ClipboardError::Unavailable)?;
        let area = self
            .document
            .create_element("textarea")
            .map_err(reject)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| ClipboardError::Rejected("textarea has the wrong type".into()))?;
        area.set_value(text);
        area.set_read_only(true);
        let style = area.style();
        style.set_property("position", "fixed").map_err(reject)?;
        style.set_property("left", "-9999px").map_err(reject)?;
        style.set_property("top", "0").map_err(reject)?;

        body.append_child(&area).map_err(reject)?;
        area.select();
        let copied = html.exec_command("copy");
        area.remove();

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::Rejected(
                "execCommand(\"copy\") returned false".into(),
            )),
            Err(e) => Err(reject(e)),
        }
    }
}

impl ClipboardStrategy for ExecCommandClipboard {
    fn name(&self) -> &'static str {
        "exec-command"
    }

    fn is_available(&self) -> bool {
        self.document.body().is_some() && self.document.has_type::<HtmlDocument>()
    }

    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>> {
        let result = self.copy_via_textarea(text);
        async move { result }.boxed_local()
    }
}

fn reject(err: JsValue) -> ClipboardError {
    ClipboardError::Rejected(describe_js(&err))
}
