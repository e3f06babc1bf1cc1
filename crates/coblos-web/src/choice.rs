//! One-shot answer shared by several UI controls.

use futures::channel::oneshot;
use std::sync::Mutex;

/// Sending half of a choice that any number of controls may try to make.
/// The first call to [`OnceChoice::resolve`] delivers its value; later calls
/// are ignored.
pub struct OnceChoice<T> {
    slot: Mutex<Option<oneshot::Sender<T>>>,
}

/// Create a choice and the receiver that yields it. The receiver reports
/// `Canceled` if the choice is dropped without being resolved.
pub fn channel<T>() -> (OnceChoice<T>, oneshot::Receiver<T>) {
    let (tx, rx) = oneshot::channel();
    let choice = OnceChoice {
        slot: Mutex::new(Some(tx)),
    };
    (choice, rx)
}

impl<T> OnceChoice<T> {
    /// Deliver `value` if nothing was delivered yet. Returns whether this
    /// call was the one that counted.
    pub fn resolve(&self, value: T) -> bool {
        let sender = self.slot.lock().ok().and_then(|mut slot| slot.take());
        match sender {
            Some(sender) => sender.send(value).is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_first_resolution_wins() {
        let (choice, rx) = channel();
        assert!(choice.resolve(true));
        assert!(!choice.resolve(false));
        assert_eq!(block_on(rx), Ok(true));
    }

    #[test]
    fn test_cancel_resolves_false() {
        let (choice, rx) = channel();
        assert!(choice.resolve(false));
        assert!(!choice.resolve(true));
        assert_eq!(block_on(rx), Ok(false));
    }

    #[test]
    fn test_dropped_choice_cancels_receiver() {
        let (choice, rx) = channel::<bool>();
        drop(choice);
        assert!(block_on(rx).is_err());
    }

    #[test]
    fn test_resolve_after_receiver_gone_is_not_counted() {
        let (choice, rx) = channel();
        drop(rx);
        assert!(!choice.resolve(true));
        assert!(!choice.resolve(false));
    }

    #[test]
    fn test_shared_between_controls() {
        use std::sync::Arc;

        let (choice, rx) = channel();
        let choice = Arc::new(choice);
        let confirm = {
            let choice = Arc::clone(&choice);
            move || choice.resolve(true)
        };
        let cancel = {
            let choice = Arc::clone(&choice);
            move || choice.resolve(false)
        };

        assert!(cancel());
        assert!(!confirm());
        assert_eq!(block_on(rx), Ok(false));
    }
}
