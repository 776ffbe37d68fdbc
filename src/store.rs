use crate::params::AllParams;
use crate::telemetry::{PreviewFrame, Telemetry};
use std::sync::Mutex;

/// Consistent snapshot of everything visible to the screens.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub params: AllParams,
    pub telemetry: Telemetry,
    pub preview: Option<PreviewFrame>,
    pub is_running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn() + Send>;

struct Inner {
    state: AppState,
    params_rev: u64,
}

/// Single source of truth shared between the UI thread and the engine event
/// pump. Each setter replaces its field wholesale under the state lock, so
/// readers always observe a complete snapshot and concurrent writers are
/// last-writer-wins per field.
///
/// Constructed once per application run and passed explicitly; there is no
/// ambient global.
pub struct AppStore {
    inner: Mutex<Inner>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: Mutex<u64>,
}

impl AppStore {
    pub fn new(params: AllParams) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: AppState {
                    params,
                    telemetry: Telemetry::default(),
                    preview: None,
                    is_running: false,
                },
                params_rev: 0,
            }),
            listeners: Mutex::new(Vec::new()),
            next_listener_id: Mutex::new(0),
        }
    }

    /// Snapshot read of the full state.
    pub fn state(&self) -> AppState {
        self.inner.lock().unwrap().state.clone()
    }

    pub fn params(&self) -> AllParams {
        self.inner.lock().unwrap().state.params.clone()
    }

    pub fn telemetry(&self) -> Telemetry {
        self.inner.lock().unwrap().state.telemetry.clone()
    }

    pub fn preview(&self) -> Option<PreviewFrame> {
        self.inner.lock().unwrap().state.preview.clone()
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().unwrap().state.is_running
    }

    /// Monotonic revision of the committed parameters; bumped by every
    /// [`set_params`](Self::set_params). The settings draft uses it to tell
    /// its own save apart from an externally pushed change.
    pub fn params_rev(&self) -> u64 {
        self.inner.lock().unwrap().params_rev
    }

    /// Replace the committed parameters wholesale. Returns the new revision.
    pub fn set_params(&self, next: AllParams) -> u64 {
        let rev = {
            let mut inner = self.inner.lock().unwrap();
            inner.state.params = next;
            inner.params_rev += 1;
            inner.params_rev
        };
        self.notify();
        rev
    }

    pub fn set_telemetry(&self, next: Telemetry) {
        self.inner.lock().unwrap().state.telemetry = next;
        self.notify();
    }

    /// `None` means "no current frame" and must render as unavailable, not
    /// as the last stale image.
    pub fn set_preview(&self, frame: Option<PreviewFrame>) {
        self.inner.lock().unwrap().state.preview = frame;
        self.notify();
    }

    pub fn set_running(&self, running: bool) {
        self.inner.lock().unwrap().state.is_running = running;
        self.notify();
    }

    /// Register an observer called synchronously after every mutation, in
    /// registration order. Callbacks run outside the state lock but must not
    /// subscribe or unsubscribe from within a notification.
    pub fn subscribe(&self, listener: impl Fn() + Send + 'static) -> SubscriptionId {
        let mut next = self.next_listener_id.lock().unwrap();
        let id = *next;
        *next += 1;
        self.listeners
            .lock()
            .unwrap()
            .push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().unwrap().retain(|(lid, _)| *lid != id.0);
    }

    fn notify(&self) {
        let listeners = self.listeners.lock().unwrap();
        for (_, listener) in listeners.iter() {
            listener();
        }
    }
}
