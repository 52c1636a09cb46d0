use leptos::prelude::{RwSignal, Update};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::state::{PointerPosition, ViewState};

/// Window-scoped `mousemove` subscription. The listener stays attached for
/// exactly as long as the tracker is alive; dropping it removes the listener,
/// so the subscription cannot outlive the page that created it.
pub struct PointerTracker {
    window: web_sys::Window,
    on_move: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl PointerTracker {
    /// Attaches a `mousemove` listener on the window and hands each pointer
    /// sample to `on_move`. Returns `None` when there is no window to listen
    /// on. Browser only: the page calls this from an effect, which never
    /// runs during server rendering.
    pub fn subscribe(mut on_move: impl FnMut(PointerPosition) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let on_move = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            let position = PointerPosition::new(event.client_x() as f64, event.client_y() as f64);
            on_move(position);
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        if let Err(error) =
            window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        {
            log::warn!("could not attach the mousemove listener: {:?}", error);
            return None;
        }
        log::debug!("pointer tracker attached");
        Some(Self { window, on_move })
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        let result = self
            .window
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        match result {
            Ok(()) => log::debug!("pointer tracker released"),
            Err(error) => log::warn!("could not detach the mousemove listener: {:?}", error),
        }
    }
}

/// Feeds one pointer sample into the view state. Samples that arrive after
/// the owning page has been torn down hit a disposed signal; `try_update`
/// turns those into a no-op instead of a panic.
pub fn forward_pointer_move(state: RwSignal<ViewState>, position: PointerPosition) {
    let _ = state.try_update(|state| state.set_pointer(position));
}
