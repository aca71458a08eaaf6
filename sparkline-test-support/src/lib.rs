//! Shared test utilities used across sparkline crates.

pub mod tracing {
    //! Event capture for asserting structured diagnostics in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    /// Layer that stores every event it observes, in emission order.
    ///
    /// # Examples
    /// ```
    /// use sparkline_test_support::tracing::EventCapture;
    ///
    /// let capture = EventCapture::default();
    /// assert!(capture.events().is_empty());
    /// ```
    #[derive(Clone, Default)]
    pub struct EventCapture {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl EventCapture {
        /// Returns a snapshot of the events captured so far.
        #[must_use]
        pub fn events(&self) -> Vec<CapturedEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns captured events at `level` whose message equals `message`.
        #[must_use]
        pub fn matching(&self, level: Level, message: &str) -> Vec<CapturedEvent> {
            self.events()
                .into_iter()
                .filter(|event| event.level == level && event.message() == Some(message))
                .collect()
        }
    }

    /// Level, target, and fields of an observed event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedEvent {
        /// Level the event was emitted at.
        pub level: Level,
        /// Target of the event, usually the emitting module path.
        pub target: String,
        /// Fields rendered to strings, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl CapturedEvent {
        /// Returns the event's message, if it carried one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }

        /// Returns the rendered value of `name`.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    impl<S: Subscriber> Layer<S> for EventCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldText {
                fields: &mut fields,
            });
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(CapturedEvent {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    /// Runs `f` with a thread-local subscriber that captures every event.
    ///
    /// # Examples
    /// ```
    /// use sparkline_test_support::tracing::capture_events;
    /// use tracing::Level;
    ///
    /// let (value, capture) = capture_events(|| {
    ///     tracing::warn!(token = "x", "malformed numeric token");
    ///     7
    /// });
    /// assert_eq!(value, 7);
    /// let events = capture.matching(Level::WARN, "malformed numeric token");
    /// assert_eq!(events.len(), 1);
    /// assert_eq!(events[0].field("token"), Some("x"));
    /// ```
    pub fn capture_events<T>(f: impl FnOnce() -> T) -> (T, EventCapture) {
        let capture = EventCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, capture)
    }

    struct FieldText<'a> {
        fields: &'a mut HashMap<String, String>,
    }

    impl FieldText<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.fields.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldText<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.insert(field, value.to_string());
        }
    }
}
