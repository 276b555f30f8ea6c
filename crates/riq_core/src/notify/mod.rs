//! Notification sink boundary
//!
//! The core emits structured events toward the assistant layer and never
//! waits on or branches on the response. Rejected operations emit a signal
//! too; no silent failures.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Event triggers the assistant layer understands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssistantTrigger {
    RosterAdd,
    RosterRemove,
    DepthSwap,
    BiasApply,
    FinancialEdit,
    PredixtRun,
    ScenarioProjection,
    RosterApply,
}

/// A structured, fire-and-forget event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantEvent {
    pub trigger: AssistantTrigger,
    pub context: BTreeMap<String, String>,
}

impl AssistantEvent {
    pub fn new(trigger: AssistantTrigger) -> Self {
        Self { trigger, context: BTreeMap::new() }
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }

    /// Mark an event as the visible signal for a rejected operation.
    pub fn rejected(self, reason: impl ToString) -> Self {
        self.with("rejected", reason)
    }
}

/// One-way channel toward the assistant. Implementations must not block.
pub trait NotificationSink {
    fn notify(&self, event: AssistantEvent);
}

/// Sink that drops everything; the default when no assistant is attached.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _event: AssistantEvent) {}
}

/// Sink that records events for inspection. Used by tests and the demo.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<AssistantEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AssistantEvent> {
        self.events.lock().expect("sink lock poisoned").clone()
    }

    pub fn triggers(&self) -> Vec<AssistantTrigger> {
        self.events().iter().map(|e| e.trigger).collect()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, event: AssistantEvent) {
        self.events.lock().expect("sink lock poisoned").push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_context_builder() {
        let event = AssistantEvent::new(AssistantTrigger::RosterAdd)
            .with("player", "J. Murray")
            .with("kpi", 85.0);
        assert_eq!(event.context.get("player").unwrap(), "J. Murray");
        assert_eq!(event.context.get("kpi").unwrap(), "85");
    }

    #[test]
    fn test_trigger_wire_names_are_snake_case() {
        let json = serde_json::to_string(&AssistantTrigger::ScenarioProjection).unwrap();
        assert_eq!(json, "\"scenario_projection\"");
        let json = serde_json::to_string(&AssistantTrigger::PredixtRun).unwrap();
        assert_eq!(json, "\"predixt_run\"");
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.notify(AssistantEvent::new(AssistantTrigger::BiasApply));
        sink.notify(AssistantEvent::new(AssistantTrigger::RosterAdd).rejected("gate"));
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].context.get("rejected").unwrap(), "gate");
    }
}
