use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// One analytics event, shaped like the GA4 payload the shell forwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    pub label: Option<String>,
    pub value: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnalyticsOperation {
    Track(AnalyticsEvent),
}

impl Operation for AnalyticsOperation {
    // Fire-and-forget: the shell never responds.
    type Output = ();
}

#[derive(Clone)]
pub struct Analytics<E> {
    context: CapabilityContext<AnalyticsOperation, E>,
}

impl<Ev> Capability<Ev> for Analytics<Ev> {
    type Operation = AnalyticsOperation;
    type MappedSelf<MappedEv> = Analytics<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Analytics::new(self.context.map_event(f))
    }
}

impl<E> Analytics<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<AnalyticsOperation, E>) -> Self {
        Self { context }
    }

    pub fn track(&self, event: AnalyticsEvent) {
        let context = self.context.clone();
        self.context.spawn(async move {
            context.notify_shell(AnalyticsOperation::Track(event)).await;
        });
    }

    /// The one tracked interaction: a booking click, labelled by where on
    /// the page it came from.
    pub fn track_book_now(&self, source: &str) {
        self.track(AnalyticsEvent {
            action: "click".into(),
            category: "booking".into(),
            label: Some(format!("book_now_{source}")),
            value: None,
        });
    }
}
