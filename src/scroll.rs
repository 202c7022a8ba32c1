use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::error::SiteError;

/// `true` once the page has been scrolled strictly past `threshold`.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// A `scroll` listener on the window, removed again when dropped.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach<F>(mut on_offset: F) -> Result<Self, SiteError>
    where
        F: FnMut(f64) + 'static,
    {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Ok(offset) = reader.scroll_y() {
                on_offset(offset);
            }
        });

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(SiteError::dom("add scroll listener"))?;

        Ok(Self { window, callback })
    }

    /// Current vertical offset, read directly from the window.
    pub fn offset(&self) -> Option<f64> {
        self.window.scroll_y().ok()
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove scroll listener: {:?}", err);
        }
    }
}

/// Tracks whether the viewport is scrolled past `threshold`.
///
/// The listener lives exactly as long as the calling component; the returned
/// flag is the only thing exposed.
#[hook]
pub fn use_scroll_observer(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let update = {
                    let scrolled = scrolled.clone();
                    move |offset: f64| scrolled.set(is_scrolled(offset, threshold))
                };

                let listener = match ScrollListener::attach(update) {
                    Ok(listener) => {
                        // Page may have been restored mid-scroll.
                        if let Some(offset) = listener.offset() {
                            scrolled.set(is_scrolled(offset, threshold));
                        }
                        log::debug!("scroll observer attached (threshold {})", threshold);
                        Some(listener)
                    }
                    Err(err) => {
                        log::warn!("scroll observer disabled: {}", err);
                        None
                    }
                };

                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCROLL_THRESHOLD;

    #[test]
    fn at_or_below_threshold_is_not_scrolled() {
        for offset in [0.0, 1.0, 25.5, 49.999, 50.0] {
            assert!(!is_scrolled(offset, SCROLL_THRESHOLD), "offset {}", offset);
        }
    }

    #[test]
    fn past_threshold_is_scrolled() {
        for offset in [50.001, 51.0, 600.0, 1.0e6] {
            assert!(is_scrolled(offset, SCROLL_THRESHOLD), "offset {}", offset);
        }
    }

    #[test]
    fn negative_overscroll_counts_as_top() {
        assert!(!is_scrolled(-30.0, SCROLL_THRESHOLD));
    }
}
