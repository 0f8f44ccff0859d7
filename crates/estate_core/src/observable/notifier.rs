//! Handler registry with synchronous dispatch.

use std::cell::RefCell;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;
use uuid::Uuid;

/// Token returned by `subscribe`, used to remove the handler later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Handler<E> = Rc<dyn Fn(&E)>;

/// Single-threaded event emitter for one event type.
///
/// Dispatch iterates over a snapshot of the handler list, so a handler may
/// subscribe or unsubscribe while being notified; the change applies from the
/// next `notify` call on.
pub struct ChangeNotifier<E> {
    handlers: RefCell<Vec<(SubscriptionId, Handler<E>)>>,
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }
}

impl<E> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler and returns its removal token.
    pub fn subscribe(&self, handler: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId::generate();
        let handler: Handler<E> = Rc::new(handler);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    /// Removes a handler. Returns `false` when `id` is not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(registered, _)| *registered != id);
        handlers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Delivers `event` to every handler registered at call time.
    pub fn notify(&self, event: &E) {
        let snapshot: Vec<Handler<E>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in snapshot {
            handler(event);
        }
    }
}

impl<E> Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
