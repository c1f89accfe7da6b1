use js_sys::Date;
use wasm_bindgen::JsValue;

use dosterm_core::Clock;

/// Wall clock of the browser, formatted in the user's locale.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        Date::now()
    }

    fn time_string(&self) -> String {
        Date::new_0()
            .to_locale_time_string("default")
            .into()
    }

    fn date_string(&self) -> String {
        Date::new_0()
            .to_locale_date_string("default", &JsValue::UNDEFINED)
            .into()
    }
}
