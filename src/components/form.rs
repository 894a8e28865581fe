use std::collections::BTreeMap;
use std::rc::Rc;

use log::debug;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{self, Array};
use web_sys::{FormData, HtmlFormElement};

use crate::components::notification::Notifier;
use crate::config::selectors;
use crate::dom::Page;
use crate::error::{Error, Result};
use crate::events::EventTable;
use crate::toast::Severity;

/// Field values read from the form. Kept local; nothing is sent anywhere.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Submission {
    fields: BTreeMap<String, String>,
}

impl Submission {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .filter_map(|(k, v)| Some((k.into(), v?.into())))
            .collect();
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

pub struct FormAcknowledger {
    form: HtmlFormElement,
    notifier: Notifier,
    message: String,
}

impl FormAcknowledger {
    pub fn mount(page: &Page, notifier: Notifier) -> Result<Rc<Self>> {
        let form = page
            .by_id(selectors::SERVICE_FORM)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| Error::Missing(selectors::SERVICE_FORM))?;
        Ok(Rc::new(Self {
            form,
            notifier,
            message: page.config.acknowledgment.clone(),
        }))
    }

    pub fn bind(self: &Rc<Self>, table: &mut EventTable) {
        let this = Rc::clone(self);
        table.on(self.form.clone(), "#serviceForm", "submit", "form acknowledger", move |event| {
            event.prevent_default();
            this.acknowledge();
        });
    }

    fn read(&self) -> Result<Submission> {
        let data = FormData::new_with_form(&self.form)?;
        let entries = js_sys::try_iter(&data)?
            .into_iter()
            .flatten()
            .flatten()
            .map(|entry| {
                let pair = Array::from(&entry);
                (pair.get(0).as_string().unwrap_or_default(), pair.get(1).as_string())
            });
        Ok(Submission::from_pairs(entries))
    }

    fn acknowledge(&self) {
        match self.read() {
            Ok(submission) => debug!(
                "form acknowledged locally ({} fields): {}",
                submission.len(),
                serde_json::to_string(&submission).unwrap_or_default()
            ),
            Err(e) => debug!("could not read form fields: {}", e),
        }
        self.notifier.show(self.message.clone(), Severity::Success);
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_fields_and_drops_files() {
        let submission = Submission::from_pairs(vec![
            ("name", Some("Ada")),
            ("attachment", None),
            ("phone", Some("555-0100")),
        ]);
        assert_eq!(submission.len(), 2);
        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains(r#""name":"Ada""#));
        assert!(!json.contains("attachment"));
    }

    #[test]
    fn serializes_fields_in_name_order() {
        let submission =
            Submission::from_pairs(vec![("service", Some("oil change")), ("name", Some("Ada"))]);
        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"{"fields":{"name":"Ada","service":"oil change"}}"#);
    }

    #[test]
    fn empty_form_is_still_a_submission() {
        let submission = Submission::from_pairs(Vec::<(&str, Option<&str>)>::new());
        assert_eq!(submission, Submission::default());
    }
}
