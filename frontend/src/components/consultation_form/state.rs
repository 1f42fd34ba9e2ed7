//! Component state for the consultation form.
//!
//! Field values and the submission phase live in `common::form::ConsultationForm`;
//! this wrapper adds what only exists in the browser: the attribution captured
//! from the landing URL and the success sheet's DOM node.

use common::attribution::Attribution;
use common::form::ConsultationForm;
use web_sys::UrlSearchParams;
use yew::NodeRef;

use crate::components::helpers::location_search;

pub struct ConsultationFormComponent {
    pub form: ConsultationForm,
    /// Captured once, when the component mounts.
    pub attribution: Attribution,
    pub success_sheet_ref: NodeRef,
}

impl ConsultationFormComponent {
    pub fn new() -> Self {
        Self {
            form: ConsultationForm::new(),
            attribution: capture_attribution(),
            success_sheet_ref: NodeRef::default(),
        }
    }
}

/// Reads `document.referrer` and the UTM parameters of the current URL.
fn capture_attribution() -> Attribution {
    let referrer = web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.referrer())
        .unwrap_or_default();

    let params = UrlSearchParams::new_with_str(&location_search()).ok();
    let param = |key: &str| {
        params
            .as_ref()
            .and_then(|p| p.get(key))
            .unwrap_or_default()
    };

    Attribution::capture(
        &referrer,
        &param("utm_source"),
        &param("utm_medium"),
        &param("utm_campaign"),
    )
}
