//! Lookup-source query parameter rewriting

use super::wizard_form::{names, WizardForm};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static IMS_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"imsConfigurationId=[^&]*&").expect("valid regex"));
static COMPANY_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"companyId=[^&]*&").expect("valid regex"));

/// Replace the first `imsConfigurationId` / `companyId` parameter value in a
/// lookup URL, leaving every other query parameter untouched.
///
/// The IMS configuration id is percent-encoded on substitution; the company id
/// is substituted raw. Empty values and absent parameters are no-ops. The
/// patterns require a trailing `&`, so a parameter in final query position is
/// left as found.
pub fn rewrite_params(url: &str, ims_configuration_id: &str, company_id: &str) -> String {
    let mut rewritten = url.to_string();
    if !ims_configuration_id.is_empty() {
        let replacement = format!(
            "imsConfigurationId={}&",
            urlencoding::encode(ims_configuration_id)
        );
        rewritten = IMS_PARAM
            .replace(&rewritten, NoExpand(&replacement))
            .into_owned();
    }
    if !company_id.is_empty() {
        let replacement = format!("companyId={company_id}&");
        rewritten = COMPANY_PARAM
            .replace(&rewritten, NoExpand(&replacement))
            .into_owned();
    }
    rewritten
}

/// Re-point every lookup-source URL at the current identifier values
pub fn rewrite_lookup_sources(form: &mut WizardForm) {
    let ims_configuration_id = form.value(names::IMS_CONFIG_ID).to_string();
    let company_id = form.value(names::COMPANY).to_string();
    for field in form.fields_mut() {
        if let Some(src) = field.lookup_src.as_mut() {
            *src = rewrite_params(src, &ims_configuration_id, &company_id);
        }
    }
}
