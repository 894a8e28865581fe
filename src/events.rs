//! Every listener the page installs is declared here as a `{target, event} -> handler`
//! row and registered in one pass, so the whole reactive surface can be listed.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::error::Result;

pub struct Binding<T> {
    pub target: T,
    pub scope: String,
    pub event: &'static str,
    pub handler: &'static str,
    callback: Box<dyn FnMut(Event)>,
}

pub struct EventTable<T = EventTarget> {
    rows: Vec<Binding<T>>,
}

impl<T> Default for EventTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> EventTable<T> {
    pub fn on<F>(
        &mut self,
        target: impl Into<T>,
        scope: impl Into<String>,
        event: &'static str,
        handler: &'static str,
        callback: F,
    ) -> &mut Self
    where
        F: FnMut(Event) + 'static,
    {
        self.rows.push(Binding {
            target: target.into(),
            scope: scope.into(),
            event,
            handler,
            callback: Box::new(callback),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn describe(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| format!("{} {} -> {}", row.scope, row.event, row.handler))
            .collect()
    }
}

impl EventTable<EventTarget> {
    /// Attaches every row. Listeners live for the rest of the page.
    pub fn register(self) -> Result<usize> {
        let count = self.rows.len();
        for row in self.rows {
            let closure = Closure::wrap(row.callback);
            row.target
                .add_event_listener_with_callback(row.event, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_rows_in_declaration_order() {
        let mut table: EventTable<&'static str> = EventTable::default();
        table
            .on("window", "window", "scroll", "scroll reactor", |_| {})
            .on("toggle", "#navToggle", "click", "nav toggle", |_| {});

        assert_eq!(
            table.describe(),
            vec![
                "window scroll -> scroll reactor".to_string(),
                "#navToggle click -> nav toggle".to_string(),
            ]
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn same_event_on_many_targets_gets_one_row_each() {
        let mut table: EventTable<&'static str> = EventTable::default();
        assert_eq!(table.len(), 0);
        for link in ["#home", "#services", "#contact"] {
            table.on(link, ".nav-link", "click", "nav close", |_| {});
        }
        assert_eq!(table.len(), 3);
        assert!(table.describe().iter().all(|row| row == ".nav-link click -> nav close"));
    }
}
