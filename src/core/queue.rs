use crate::core::filesystem::{load_json, prefix_scan_delete, store_json, FilesystemAdapter, FilesystemError};
use crate::core::CoreError;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum QueueError {
    #[error("no handler registered for operation {0}")]
    #[diagnostic()]
    NoHandler(String),

    #[error("malformed payload for {action}: {message}")]
    #[diagnostic()]
    FormationViolation { action: String, message: String },

    #[error("invalid field value for {action}: {message}")]
    #[diagnostic()]
    PropertyConstraintViolation { action: String, message: String },

    #[error("operation {0} is not supported")]
    #[diagnostic()]
    NotSupported(String),

    #[error("persistence failure: {0}")]
    #[diagnostic()]
    Filesystem(#[from] FilesystemError),
}

impl CoreError for QueueError {
    fn to_call_error(&self) -> (&'static str, String) {
        match self {
            QueueError::NoHandler(_) => ("NotSupported", self.to_string()),
            QueueError::FormationViolation { .. } => ("FormationViolation", self.to_string()),
            QueueError::PropertyConstraintViolation { .. } => ("PropertyConstraintViolation", self.to_string()),
            QueueError::NotSupported(_) => ("NotSupported", self.to_string()),
            QueueError::Filesystem(_) => ("InternalError", self.to_string()),
        }
    }
}

/// Outcome handed back to the caller once an outbound operation's call
/// resolves, either with the server's confirmation payload or an abort.
pub enum OutboundOutcome {
    Confirmed(Value),
    Aborted,
}

/// One outbound operation: FIFO-delivered, at most one in flight at a time.
/// `durable` operations (Started/Ended/meter-value bundles) are written to a
/// per-op file before the wire send and deleted once acknowledged.
pub struct OutboundOperation {
    pub op_nr: u64,
    pub action: String,
    pub payload: Value,
    pub timeout_s: u64,
    pub durable: bool,
}

fn op_file_name(op_nr: u64) -> String {
    format!("op-{op_nr}.jsn")
}

#[derive(Debug, Serialize, Deserialize)]
struct DurableOp {
    op_nr: u64,
    action: String,
    payload: Value,
    timeout_s: u64,
}

/// State of the head-of-line outbound operation while it is in flight,
/// tracked so a disconnect holds it rather than re-enqueuing behind it.
struct InFlight {
    op: OutboundOperation,
    elapsed_s: u64,
}

/// Outbound FIFO with one in-flight call, backed by durable per-operation
/// files for the subset of operations that must survive a restart.
#[derive(Default)]
pub struct OutboundQueue {
    pending: VecDeque<OutboundOperation>,
    in_flight: Option<InFlight>,
    next_op_nr: u64,
}

impl OutboundQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `action`/`payload`. If `durable`, writes the restoration
    /// payload to disk before the operation is eligible to be sent.
    pub fn enqueue(
        &mut self,
        fs: &dyn FilesystemAdapter,
        action: &str,
        payload: Value,
        timeout_s: u64,
        durable: bool,
    ) -> Result<u64, QueueError> {
        let op_nr = self.next_op_nr;
        self.next_op_nr += 1;
        if durable {
            store_json(
                fs,
                &op_file_name(op_nr),
                &DurableOp {
                    op_nr,
                    action: action.to_string(),
                    payload: payload.clone(),
                    timeout_s,
                },
            )?;
        }
        self.pending.push_back(OutboundOperation {
            op_nr,
            action: action.to_string(),
            payload,
            timeout_s,
            durable,
        });
        Ok(op_nr)
    }

    /// Returns the head operation if nothing is in flight and the transport
    /// reports ready; the caller is responsible for actually sending it and
    /// then calling [`Self::mark_sent`].
    pub fn next_to_send(&self, transport_ready: bool) -> Option<&OutboundOperation> {
        if self.in_flight.is_some() || !transport_ready {
            return None;
        }
        self.pending.front()
    }

    /// Moves the head operation from pending into in-flight, after the
    /// caller has actually written it to the wire.
    pub fn mark_sent(&mut self) {
        if let Some(op) = self.pending.pop_front() {
            self.in_flight = Some(InFlight { op, elapsed_s: 0 });
        }
    }

    /// Advances the in-flight operation's elapsed time by one tick; returns
    /// `true` if it has now timed out (`timeout_s == 0` means indefinite).
    pub fn tick(&mut self, elapsed_s: u64) -> bool {
        if let Some(in_flight) = self.in_flight.as_mut() {
            if in_flight.op.timeout_s == 0 {
                return false;
            }
            in_flight.elapsed_s += elapsed_s;
            in_flight.elapsed_s >= in_flight.op.timeout_s
        } else {
            false
        }
    }

    /// Resolves the in-flight operation, clearing its durable file (if any)
    /// and freeing the head-of-line slot.
    pub fn resolve(&mut self, fs: &dyn FilesystemAdapter) -> Result<Option<OutboundOperation>, QueueError> {
        let Some(in_flight) = self.in_flight.take() else {
            return Ok(None);
        };
        if in_flight.op.durable {
            fs.remove(&op_file_name(in_flight.op.op_nr))?;
        }
        Ok(Some(in_flight.op))
    }

    /// Aborts the in-flight operation (timeout or transport-reported
    /// failure) without clearing its durable file, so it can replay on
    /// restart; returns it so the caller can invoke `onAbort`.
    pub fn abort_in_flight(&mut self) -> Option<OutboundOperation> {
        self.in_flight.take().map(|f| f.op)
    }

    /// Replays every durable operation file in opNr order, re-enqueuing them
    /// ahead of anything enqueued fresh this boot.
    pub fn replay_durable(&mut self, fs: &dyn FilesystemAdapter) -> Result<(), QueueError> {
        let names = fs.list_with_prefix("op-")?;
        let mut ops: Vec<DurableOp> = names
            .iter()
            .filter_map(|name| load_json(fs, name).ok().flatten())
            .collect();
        ops.sort_by_key(|op| op.op_nr);
        for op in ops.into_iter().rev() {
            self.next_op_nr = self.next_op_nr.max(op.op_nr + 1);
            self.pending.push_front(OutboundOperation {
                op_nr: op.op_nr,
                action: op.action,
                payload: op.payload,
                timeout_s: op.timeout_s,
                durable: true,
            });
        }
        Ok(())
    }

    /// Deletes every durable operation file, e.g. when abandoning a failed
    /// transaction's retry entirely.
    pub fn clear_durable(&self, fs: &dyn FilesystemAdapter) -> Result<usize, QueueError> {
        prefix_scan_delete(fs, "op-").map_err(QueueError::from)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// Produces a fresh handler instance for one inbound operation type. Kept as
/// a constructor rather than a singleton handler so per-call state never
/// leaks between invocations.
pub type HandlerFactory = Box<dyn Fn() -> Box<dyn InboundHandler> + Send>;

/// One inbound operation's business logic: parse the payload, validate it,
/// mutate core state, and produce either a confirmation payload or a
/// CallError code/description pair.
pub trait InboundHandler {
    fn handle(&mut self, payload: &Value) -> Result<Value, QueueError>;
}

/// Dispatch table mapping an operation's action name to the factory that
/// builds its handler.
#[derive(Default)]
pub struct OperationRegistry {
    factories: HashMap<String, HandlerFactory>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, action: &str, factory: HandlerFactory) {
        self.factories.insert(action.to_string(), factory);
    }

    /// Dispatches `payload` to a freshly constructed handler for `action`.
    pub fn dispatch(&self, action: &str, payload: &Value) -> Result<Value, QueueError> {
        let factory = self
            .factories
            .get(action)
            .ok_or_else(|| QueueError::NoHandler(action.to_string()))?;
        let mut handler = factory();
        handler.handle(payload)
    }

    pub fn supports(&self, action: &str) -> bool {
        self.factories.contains_key(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filesystem::MemoryFilesystemAdapter;
    use serde_json::json;

    struct EchoHandler;
    impl InboundHandler for EchoHandler {
        fn handle(&mut self, payload: &Value) -> Result<Value, QueueError> {
            Ok(payload.clone())
        }
    }

    #[test]
    fn fifo_delivers_one_at_a_time() {
        let fs = MemoryFilesystemAdapter::new();
        let mut queue = OutboundQueue::new();
        queue.enqueue(&fs, "Heartbeat", json!({}), 30, false).unwrap();
        queue.enqueue(&fs, "StatusNotification", json!({}), 30, false).unwrap();

        assert!(queue.next_to_send(true).is_some());
        queue.mark_sent();
        assert!(queue.next_to_send(true).is_none());
        assert_eq!(queue.pending_len(), 1);
    }

    #[test]
    fn transport_not_ready_holds_head() {
        let fs = MemoryFilesystemAdapter::new();
        let mut queue = OutboundQueue::new();
        queue.enqueue(&fs, "Heartbeat", json!({}), 30, false).unwrap();
        assert!(queue.next_to_send(false).is_none());
    }

    #[test]
    fn durable_operation_writes_then_deletes_file_on_resolve() {
        let fs = MemoryFilesystemAdapter::new();
        let mut queue = OutboundQueue::new();
        queue.enqueue(&fs, "TransactionEvent", json!({"x": 1}), 0, true).unwrap();
        assert!(fs.exists("op-0.jsn"));

        queue.mark_sent();
        queue.resolve(&fs).unwrap();
        assert!(!fs.exists("op-0.jsn"));
    }

    #[test]
    fn aborted_durable_operation_keeps_file_for_replay() {
        let fs = MemoryFilesystemAdapter::new();
        let mut queue = OutboundQueue::new();
        queue.enqueue(&fs, "TransactionEvent", json!({}), 5, true).unwrap();
        queue.mark_sent();
        let timed_out = queue.tick(10);
        assert!(timed_out);
        queue.abort_in_flight();
        assert!(fs.exists("op-0.jsn"));
    }

    #[test]
    fn zero_timeout_never_times_out() {
        let fs = MemoryFilesystemAdapter::new();
        let mut queue = OutboundQueue::new();
        queue.enqueue(&fs, "Heartbeat", json!({}), 0, false).unwrap();
        queue.mark_sent();
        assert!(!queue.tick(1_000_000));
    }

    #[test]
    fn replay_durable_restores_pending_operations_in_op_nr_order() {
        let fs = MemoryFilesystemAdapter::new();
        {
            let mut queue = OutboundQueue::new();
            queue.enqueue(&fs, "TransactionEvent", json!({"n": 0}), 0, true).unwrap();
            queue.enqueue(&fs, "TransactionEvent", json!({"n": 1}), 0, true).unwrap();
        }

        let mut queue = OutboundQueue::new();
        queue.replay_durable(&fs).unwrap();
        assert_eq!(queue.pending_len(), 2);
        let first = queue.next_to_send(true).unwrap();
        assert_eq!(first.payload, json!({"n": 0}));
    }

    #[test]
    fn dispatch_returns_no_handler_for_unknown_action() {
        let registry = OperationRegistry::new();
        let err = registry.dispatch("Reset", &json!({})).unwrap_err();
        assert!(matches!(err, QueueError::NoHandler(_)));
    }

    #[test]
    fn dispatch_uses_fresh_handler_instance_per_call() {
        let mut registry = OperationRegistry::new();
        registry.register("Heartbeat", Box::new(|| Box::new(EchoHandler)));
        let result = registry.dispatch("Heartbeat", &json!({"a": 1})).unwrap();
        assert_eq!(result, json!({"a": 1}));
        assert!(registry.supports("Heartbeat"));
        assert!(!registry.supports("Reset"));
    }
}
