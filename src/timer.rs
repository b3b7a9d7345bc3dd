/// Async delay used for transient UI feedback
use async_trait::async_trait;
use std::time::Duration;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, duration: Duration);
}

/// `setTimeout` wrapped in a promise. Resolves immediately if no window is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

#[async_trait(?Send)]
impl Delay for BrowserDelay {
    async fn wait(&self, duration: Duration) {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);

        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().map(|window| {
                window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            });

            match scheduled {
                Some(Ok(_)) => return,
                Some(Err(e)) => log::warn!("setTimeout failed: {:?}", e),
                None => log::debug!("No window; skipping delay"),
            }
            if let Err(e) = resolve.call0(&JsValue::NULL) {
                log::warn!("Could not resolve delay: {:?}", e);
            }
        });

        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("Delay rejected: {:?}", e);
        }
    }
}
