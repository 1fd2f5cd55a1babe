// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Event listeners the widget owns.
//!
//! Every registration keeps its closure alive alongside the target so the
//! set can detach exactly what it attached; dropping the set detaches too.

use ayah_core::is_activation_key;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent};

use crate::error::WidgetError;

type Handler = Closure<dyn FnMut(Event)>;

struct Registration {
    target: EventTarget,
    kind: &'static str,
    handler: Handler,
}

/// Listeners registered by one widget instance.
#[derive(Default)]
pub struct ListenerSet {
    registrations: Vec<Registration>,
}

impl ListenerSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handler` for `kind` events on `target`.
    pub fn add(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), WidgetError> {
        let handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())
            .map_err(|e| WidgetError::js(&e))?;
        self.registrations.push(Registration {
            target: target.clone(),
            kind,
            handler,
        });
        Ok(())
    }

    /// Run `action` on `click`.
    pub fn on_click(
        &mut self,
        target: &EventTarget,
        mut action: impl FnMut() + 'static,
    ) -> Result<(), WidgetError> {
        self.add(target, "click", move |_| action())
    }

    /// Run `action` on Enter or Space, suppressing the key's default.
    pub fn on_activation_key(
        &mut self,
        target: &EventTarget,
        mut action: impl FnMut() + 'static,
    ) -> Result<(), WidgetError> {
        self.add(target, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if is_activation_key(&key) {
                event.prevent_default();
                action();
            }
        })
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// True when nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Detach everything.
    pub fn clear(&mut self) {
        for reg in self.registrations.drain(..) {
            let _ = reg
                .target
                .remove_event_listener_with_callback(reg.kind, reg.handler.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.clear();
    }
}
